use super::*;
use crate::routing::table::{CONFIRM, DASHBOARD, LOGIN, ORDERS, PROFILE, REGISTER, SHELL};
use crate::state::session::Identity;

fn signed_in() -> SessionStore {
    let session = SessionStore::new();
    session.write(Some(Identity::new("u1", "alice", "a@x.com", "Alice A")));
    session
}

const PROTECTED: [RouteEntry; 4] = [SHELL, DASHBOARD, PROFILE, ORDERS];

#[test]
fn authenticated_session_admits_every_protected_route() {
    let gate = AdmissionGate::new(signed_in());
    for route in PROTECTED {
        assert_eq!(gate.check(&route), Admission::Admit);
    }
}

#[test]
fn empty_session_denies_every_protected_route_towards_login() {
    let gate = AdmissionGate::new(SessionStore::new());
    for route in PROTECTED {
        assert_eq!(gate.check(&route), Admission::Deny { redirect: "/login" });
    }
}

#[test]
fn public_routes_are_never_gated() {
    let gate = AdmissionGate::new(SessionStore::new());
    for route in [LOGIN, REGISTER, CONFIRM] {
        assert!(gate.check(&route).is_admitted());
    }
}

#[test]
fn decision_follows_session_changes() {
    let session = signed_in();
    let gate = AdmissionGate::new(session.clone());
    assert!(gate.check_path("/profile").is_admitted());
    session.clear();
    assert_eq!(gate.check_path("/profile"), Admission::Deny { redirect: "/login" });
}

#[test]
fn unknown_paths_are_judged_as_home() {
    assert!(AdmissionGate::new(signed_in()).check_path("/nowhere").is_admitted());
    assert!(!AdmissionGate::new(SessionStore::new()).check_path("/nowhere").is_admitted());
}

#[test]
fn condition_is_pending_until_boot_is_ready() {
    let boot = BootStatus::new();
    let gate = AdmissionGate::new(signed_in());
    assert_eq!(admission_condition(&boot, &gate, &DASHBOARD), None);
    boot.mark_ready();
    assert_eq!(admission_condition(&boot, &gate, &DASHBOARD), Some(true));
}

#[test]
fn condition_after_boot_reports_denial() {
    let boot = BootStatus::new();
    boot.mark_ready();
    let gate = AdmissionGate::new(SessionStore::new());
    assert_eq!(admission_condition(&boot, &gate, &ORDERS), Some(false));
}
