//! Page modules for route-level screens.
//!
//! ARCHITECTURE
//! ============
//! Each page owns route-scoped orchestration (loading, submitting, notices)
//! and keeps its input handling in plain functions next to the view so it can
//! be tested without a browser.

pub mod confirm;
pub mod dashboard;
pub mod login;
pub mod orders;
pub mod profile;
pub mod register;
