//! Route surface of the application shell.
//!
//! Each entry is a top-level path segment flagged public or protected. The
//! Leptos route tree in `app` is built from these entries, and the admission
//! gate only looks at the flag.

#[cfg(test)]
#[path = "table_test.rs"]
mod table_test;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Access {
    Public,
    Protected,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RouteEntry {
    /// Single path segment without slashes (`""` for the shell root).
    pub segment: &'static str,
    pub access: Access,
}

impl RouteEntry {
    pub const fn public(segment: &'static str) -> Self {
        Self { segment, access: Access::Public }
    }

    pub const fn protected(segment: &'static str) -> Self {
        Self { segment, access: Access::Protected }
    }

    pub fn is_protected(&self) -> bool {
        self.access == Access::Protected
    }

    /// Absolute path, e.g. `/orders`.
    pub fn path(&self) -> String {
        format!("/{}", self.segment)
    }
}

pub const LOGIN: RouteEntry = RouteEntry::public("login");
pub const REGISTER: RouteEntry = RouteEntry::public("register");
pub const CONFIRM: RouteEntry = RouteEntry::public("confirm");
/// Layout wrapping every protected view.
pub const SHELL: RouteEntry = RouteEntry::protected("");
pub const DASHBOARD: RouteEntry = RouteEntry::protected("dashboard");
pub const PROFILE: RouteEntry = RouteEntry::protected("profile");
pub const ORDERS: RouteEntry = RouteEntry::protected("orders");

pub const LOGIN_PATH: &str = "/login";
/// Where the shell root and unknown paths land.
pub const HOME_PATH: &str = "/dashboard";

/// Ordered route surface; first match wins.
pub const ROUTES: &[RouteEntry] = &[LOGIN, REGISTER, CONFIRM, DASHBOARD, PROFILE, ORDERS, SHELL];

/// Find the entry owning `path` by its first segment. Query strings,
/// fragments and trailing slashes are ignored.
pub fn classify(path: &str) -> Option<&'static RouteEntry> {
    let path = path.split(['?', '#']).next().unwrap_or_default();
    let first = path.trim_start_matches('/').split('/').next().unwrap_or_default();
    ROUTES.iter().find(|entry| entry.segment == first)
}
