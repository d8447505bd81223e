use futures::executor::block_on;

use super::*;
use crate::error::ApiError;
use crate::routing::gate::Admission;
use crate::state::session::Identity;
use crate::testing::{MockTransport, RecordingNavigator, user_claims_json};

struct Stack {
    session: SessionStore,
    boot: BootStatus,
    gate: AdmissionGate,
    resolver: SessionResolver<AuthInterceptor<MockTransport, RecordingNavigator>>,
    api: ApiClient<AuthInterceptor<MockTransport, RecordingNavigator>>,
    transport: MockTransport,
    nav: RecordingNavigator,
}

fn stack(at: &str) -> Stack {
    let transport = MockTransport::new();
    let nav = RecordingNavigator::at(at);
    let session = SessionStore::new();
    let http = AuthInterceptor::new(transport.clone(), session.clone(), nav.clone());
    Stack {
        resolver: SessionResolver::new(http.clone(), session.clone(), BffConfig::default()),
        api: ApiClient::new(http, BffConfig::default()),
        gate: AdmissionGate::new(session.clone()),
        boot: BootStatus::new(),
        session,
        transport,
        nav,
    }
}

// =============================================================
// Services wiring
// =============================================================

#[test]
fn services_guard_is_pending_until_boot_then_follows_session() {
    let services = Services::new(BffConfig::default());
    let guard = services.guard(table::ORDERS);
    assert_eq!(guard(), None);

    services.boot.mark_ready();
    assert_eq!(guard(), Some(false));

    services.session.write(Some(Identity::new("u1", "alice", "a@x.com", "Alice A")));
    assert_eq!(guard(), Some(true));
}

#[test]
fn services_share_one_session_between_gate_and_views() {
    let services = Services::new(BffConfig::default());
    services.session.write(Some(Identity::new("u1", "alice", "a@x.com", "Alice A")));
    assert!(services.gate.check(&table::PROFILE).is_admitted());
}

#[test]
fn public_routes_need_no_guard() {
    let services = Services::new(BffConfig::default());
    services.boot.mark_ready();
    assert!(services.gate.check(&table::REGISTER).is_admitted());
}

// =============================================================
// End-to-end scenarios
// =============================================================

#[test]
fn boot_without_session_denies_dashboard() {
    let s = stack("/dashboard");
    s.transport.respond(401, "");

    assert!(!block_on(run_startup(&s.resolver, &s.boot)));

    assert!(s.boot.is_ready());
    assert!(!s.session.is_authenticated());
    assert_eq!(s.gate.check_path("/dashboard"), Admission::Deny { redirect: "/login" });
    assert_eq!(admission_condition(&s.boot, &s.gate, &table::DASHBOARD), Some(false));
}

#[test]
fn boot_with_valid_session_admits_protected_views() {
    let s = stack("/dashboard");
    s.transport.respond_json(200, &user_claims_json());

    assert!(block_on(run_startup(&s.resolver, &s.boot)));

    for path in ["/dashboard", "/profile", "/orders"] {
        assert!(s.gate.check_path(path).is_admitted(), "{path} should be admitted");
    }
    assert_eq!(s.transport.requests().len(), 1, "gate must not call the network");
}

#[test]
fn mid_session_unauthorized_denies_next_navigation() {
    let s = stack("/orders");
    s.transport.respond_json(200, &user_claims_json());
    block_on(run_startup(&s.resolver, &s.boot));
    assert!(s.gate.check_path("/profile").is_admitted());

    s.transport.respond(401, "");
    assert_eq!(block_on(s.api.list_orders()), Err(ApiError::Unauthorized));

    assert!(!s.session.is_authenticated());
    assert_eq!(s.nav.visits(), vec!["/login".to_owned()]);
    assert_eq!(s.gate.check_path("/profile"), Admission::Deny { redirect: "/login" });
}
