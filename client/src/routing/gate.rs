//! Route admission gate.
//!
//! SYSTEM CONTEXT
//! ==============
//! Consulted synchronously by the router before a protected view mounts.
//! The gate reads only the in-memory session; it never calls the resolver and
//! never awaits, so a decision always reflects the session as of the moment
//! the router asked.
//!
//! PRECONDITION
//! ============
//! The startup sequence must have resolved the session once. The gate has no
//! notion of "not yet resolved" and treats it as denied; `admission_condition`
//! is what keeps the router from asking during that window.

#[cfg(test)]
#[path = "gate_test.rs"]
mod gate_test;

use crate::routing::table::{self, RouteEntry};
use crate::state::boot::BootStatus;
use crate::state::session::SessionStore;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Admission {
    Admit,
    /// Cancel the navigation and go to `redirect` instead.
    Deny { redirect: &'static str },
}

impl Admission {
    pub fn is_admitted(self) -> bool {
        self == Self::Admit
    }
}

#[derive(Clone)]
pub struct AdmissionGate {
    session: SessionStore,
}

impl AdmissionGate {
    pub fn new(session: SessionStore) -> Self {
        Self { session }
    }

    /// Decide whether `route` may be entered. Public routes always pass.
    ///
    /// Reads the session tracked, so a route condition built on this re-runs
    /// when the session is cleared.
    pub fn check(&self, route: &RouteEntry) -> Admission {
        if !route.is_protected() {
            return Admission::Admit;
        }
        if self.session.is_authenticated() {
            Admission::Admit
        } else {
            log::debug!("gate: denied {}", route.path());
            Admission::Deny { redirect: table::LOGIN_PATH }
        }
    }

    /// Decide for a raw path. Unknown paths fall through to the home route.
    pub fn check_path(&self, path: &str) -> Admission {
        let route = table::classify(path).unwrap_or(&table::DASHBOARD);
        self.check(route)
    }
}

/// Router condition for a protected route: `None` while the startup
/// resolution is still running, then the gate's decision.
pub fn admission_condition(boot: &BootStatus, gate: &AdmissionGate, route: &RouteEntry) -> Option<bool> {
    if !boot.is_ready() {
        return None;
    }
    Some(gate.check(route).is_admitted())
}
