//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules keep formatting and notice bookkeeping out of page code
//! so both stay testable without a browser.

pub mod format;
pub mod notice;
