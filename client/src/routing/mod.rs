//! Navigation-side half of the auth core.
//!
//! `table` lists the routes and their access flag, `gate` admits or denies
//! protected ones, and `navigator` lets non-view code trigger redirects.

pub mod gate;
pub mod navigator;
pub mod table;
