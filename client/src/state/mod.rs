//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! State is split by concern (`session`, `boot`) so components depend on the
//! smallest handle they need. Both handles are cheap to clone and are passed
//! through Leptos context rather than living in globals.

pub mod boot;
pub mod session;
