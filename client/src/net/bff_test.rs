use super::*;
use crate::state::session::Identity;

#[test]
fn end_session_clears_local_state() {
    let session = SessionStore::new();
    session.write(Some(Identity::new("u1", "alice", "a@x.com", "Alice A")));
    end_session(&BffConfig::default(), &session);
    assert!(!session.is_authenticated());
}

#[test]
fn begin_login_leaves_session_untouched() {
    let session = SessionStore::new();
    begin_login(&BffConfig::default());
    assert!(!session.is_authenticated());
}
