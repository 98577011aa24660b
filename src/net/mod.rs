//! Networking modules for the remote catalog and character endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` issues the HTTP calls, `types` defines the wire schemas and maps
//! them into domain records at the boundary so malformed upstream responses
//! fail predictably instead of leaking partial shapes into the UI.

pub mod api;
pub mod types;
