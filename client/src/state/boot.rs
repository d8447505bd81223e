//! Startup phase of the application shell.
//!
//! The admission gate only trusts the in-memory session, so it must not be
//! consulted before the first resolution has finished. `BootStatus` is what
//! the startup sequence flips once that resolution settles; route conditions
//! read it and stay pending until then.

#[cfg(test)]
#[path = "boot_test.rs"]
mod boot_test;

use leptos::prelude::*;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum BootPhase {
    /// First session resolution has not settled yet.
    #[default]
    Resolving,
    /// The session holder reflects at least one completed resolution.
    Ready,
}

#[derive(Clone)]
pub struct BootStatus {
    phase: ArcRwSignal<BootPhase>,
}

impl Default for BootStatus {
    fn default() -> Self {
        Self::new()
    }
}

impl BootStatus {
    pub fn new() -> Self {
        Self { phase: ArcRwSignal::new(BootPhase::Resolving) }
    }

    /// Tracked read of the current phase.
    pub fn phase(&self) -> BootPhase {
        self.phase.get()
    }

    pub fn is_ready(&self) -> bool {
        self.phase() == BootPhase::Ready
    }

    /// Record that the first resolution settled. Later calls are no-ops.
    pub fn mark_ready(&self) {
        if self.phase.get_untracked() != BootPhase::Ready {
            log::info!("boot: session resolution settled");
            self.phase.set(BootPhase::Ready);
        }
    }
}
