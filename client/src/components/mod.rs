//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the application chrome and shared dialogs while reading
//! session state from Leptos context providers.

pub mod checking_session;
pub mod confirm_dialog;
pub mod form_field;
pub mod main_layout;
pub mod notice_bar;
