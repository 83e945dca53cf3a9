//! Networking modules for the REST API boundary.
//!
//! SYSTEM CONTEXT
//! ==============
//! `types` defines the wire schema shared with the server and `api` wraps
//! the HTTP calls with split hydrate/SSR implementations.

pub mod api;
pub mod types;
