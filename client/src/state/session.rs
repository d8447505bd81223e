//! Session state holder for the current browser user.
//!
//! SYSTEM CONTEXT
//! ==============
//! The holder is the single source of truth for "is there a logged-in user".
//! The resolver writes it after asking the BFF, the interceptor clears it on a
//! 401, and logout clears it before leaving the app. The admission gate and
//! identity-aware views only read it.
//!
//! DESIGN
//! ======
//! The session lives in an `ArcRwSignal` so views re-render on every write
//! and never hold a stale snapshot. Writes replace the whole `Session`; there
//! is no field-level patching. Nothing here touches the network or storage,
//! so a page reload starts empty again.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;
use serde::{Deserialize, Serialize};

/// Authenticated user attributes as reported by the BFF.
///
/// Fields are private so an identity can only be replaced, never edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identity {
    subject_id: String,
    username: String,
    email: String,
    display_name: String,
}

impl Identity {
    pub fn new(
        subject_id: impl Into<String>,
        username: impl Into<String>,
        email: impl Into<String>,
        display_name: impl Into<String>,
    ) -> Self {
        Self {
            subject_id: subject_id.into(),
            username: username.into(),
            email: email.into(),
            display_name: display_name.into(),
        }
    }

    /// Stable identifier issued by the identity provider (`sub`).
    pub fn subject_id(&self) -> &str {
        &self.subject_id
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Display name when the provider sent one, otherwise the username.
    pub fn greeting_name(&self) -> &str {
        if self.display_name.trim().is_empty() { &self.username } else { &self.display_name }
    }
}

/// Snapshot of the holder: an identity, or none when not authenticated.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Session {
    identity: Option<Identity>,
}

impl Session {
    pub fn identity(&self) -> Option<&Identity> {
        self.identity.as_ref()
    }

    pub fn is_authenticated(&self) -> bool {
        self.identity.is_some()
    }
}

/// Shared handle to the process-wide session.
///
/// Cloning the store clones the handle, not the session; every clone observes
/// the same writes.
#[derive(Clone)]
pub struct SessionStore {
    inner: ArcRwSignal<Session>,
}

impl Default for SessionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SessionStore {
    /// Empty store, as at application start.
    pub fn new() -> Self {
        Self { inner: ArcRwSignal::new(Session::default()) }
    }

    /// Current session. Tracked: a view calling this re-renders on writes.
    pub fn read(&self) -> Session {
        self.inner.get()
    }

    /// Current session without subscribing the caller.
    pub fn read_untracked(&self) -> Session {
        self.inner.get_untracked()
    }

    /// Current identity, if any. Tracked.
    pub fn identity(&self) -> Option<Identity> {
        self.inner.with(|session| session.identity.clone())
    }

    /// Replace the session wholesale.
    pub fn write(&self, identity: Option<Identity>) {
        self.inner.set(Session { identity });
    }

    /// Drop the identity. Safe to repeat.
    pub fn clear(&self) {
        self.write(None);
    }

    /// Derived from the latest write; never stored separately. Tracked.
    pub fn is_authenticated(&self) -> bool {
        self.inner.with(Session::is_authenticated)
    }
}
