//! Networking modules for the session endpoint.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` performs the HTTP call and `types` defines the session payload.

pub mod api;
pub mod types;
