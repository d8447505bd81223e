//! Networking modules for the BFF boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `transport` describes requests and sends them, `interceptor` wraps the
//! transport with session handling, `resolver` establishes the session,
//! `api` carries the resource calls, `bff` performs the full-page login and
//! logout trips, and `types` defines the wire schema.

pub mod api;
pub mod bff;
pub mod interceptor;
pub mod resolver;
pub mod transport;
pub mod types;
