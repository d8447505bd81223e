//! Transient user notices (snackbar-style).
//!
//! SYSTEM CONTEXT
//! ==============
//! Views report resource failures and successes here instead of blocking the
//! page. A notice dismisses itself after `NOTICE_TTL_MS`; showing a newer one
//! cancels the older timer by id.

#[cfg(test)]
#[path = "notice_test.rs"]
mod notice_test;

use leptos::prelude::*;

pub const NOTICE_TTL_MS: u32 = 3_000;
pub const NOTICE_TTL_LONG_MS: u32 = 5_000;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub id: u64,
    pub text: String,
}

/// At most one visible notice plus the id counter.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct NoticeState {
    pub current: Option<Notice>,
    next_id: u64,
}

impl NoticeState {
    /// Replace whatever is visible; returns the new notice id.
    pub fn show(&mut self, text: impl Into<String>) -> u64 {
        self.next_id += 1;
        self.current = Some(Notice { id: self.next_id, text: text.into() });
        self.next_id
    }

    /// Dismiss notice `id` if it is still the visible one.
    pub fn dismiss(&mut self, id: u64) -> bool {
        if self.current.as_ref().is_some_and(|n| n.id == id) {
            self.current = None;
            true
        } else {
            false
        }
    }

    pub fn text(&self) -> Option<&str> {
        self.current.as_ref().map(|n| n.text.as_str())
    }
}

/// Show `text` and schedule its dismissal.
pub fn notify(state: RwSignal<NoticeState>, text: impl Into<String>, ttl_ms: u32) {
    let mut id = 0;
    state.update(|s| id = s.show(text));
    #[cfg(feature = "hydrate")]
    leptos::task::spawn_local(async move {
        gloo_timers::future::TimeoutFuture::new(ttl_ms).await;
        state.update(|s| {
            s.dismiss(id);
        });
    });
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (id, ttl_ms);
    }
}
