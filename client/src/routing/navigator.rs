//! In-app navigation seam.
//!
//! SYSTEM CONTEXT
//! ==============
//! The interceptor has to redirect to the login route from deep inside an HTTP
//! call, where no router hook is reachable. `RouterBridge` is the handle it
//! gets instead: it records the requested path, and `RouterBridgeListener`,
//! mounted inside `<Router>`, performs the navigation and mirrors the current
//! location back.

#[cfg(test)]
#[path = "navigator_test.rs"]
mod navigator_test;

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};

/// Minimal navigation capability needed by the core.
pub trait Navigator {
    /// Path the app is on, or is already heading to.
    fn current_path(&self) -> String;
    fn navigate(&self, path: &str);
}

/// Navigate to `path` unless the app is already there or on its way.
///
/// Returns whether a navigation was issued. Repeated calls for the same
/// target collapse into one.
pub fn redirect_once<N: Navigator + ?Sized>(navigator: &N, path: &str) -> bool {
    if navigator.current_path() == path {
        log::debug!("redirect to {path} suppressed: already there");
        return false;
    }
    log::debug!("redirecting to {path}");
    navigator.navigate(path);
    true
}

/// Router-independent navigation handle shared through context.
#[derive(Clone)]
pub struct RouterBridge {
    location: ArcRwSignal<String>,
    pending: ArcRwSignal<Option<String>>,
}

impl Default for RouterBridge {
    fn default() -> Self {
        Self::new()
    }
}

impl RouterBridge {
    pub fn new() -> Self {
        Self { location: ArcRwSignal::new(String::new()), pending: ArcRwSignal::new(None) }
    }

    /// Navigation requested but not yet performed by the listener.
    pub fn pending(&self) -> Option<String> {
        self.pending.get_untracked()
    }

    fn sync_location(&self, path: String) {
        if self.location.get_untracked() != path {
            self.location.set(path);
        }
    }

    /// Hand the pending target to the listener. The target becomes the
    /// mirrored location before `pending` clears, so `current_path` never
    /// falls back to the page being left while the router catches up.
    fn take_pending(&self) -> Option<String> {
        let path = self.pending.get()?;
        self.sync_location(path.clone());
        self.pending.set(None);
        Some(path)
    }
}

impl Navigator for RouterBridge {
    fn current_path(&self) -> String {
        self.pending.get_untracked().unwrap_or_else(|| self.location.get_untracked())
    }

    fn navigate(&self, path: &str) {
        self.pending.set(Some(path.to_owned()));
    }
}

/// Performs navigations requested through the `RouterBridge` in context.
///
/// Must be rendered inside `<Router>`.
#[component]
pub fn RouterBridgeListener() -> impl IntoView {
    let bridge = expect_context::<RouterBridge>();
    let location = use_location();
    let navigate = use_navigate();

    let mirror = bridge.clone();
    Effect::new(move || mirror.sync_location(location.pathname.get()));

    Effect::new(move || {
        if let Some(path) = bridge.take_pending() {
            navigate(&path, NavigateOptions { replace: true, ..NavigateOptions::default() });
        }
    });
}
