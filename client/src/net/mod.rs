//! Networking modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` handles the REST calls to the console server's `/api` routes; the
//! record types themselves live in the shared `records` crate.

pub mod api;
