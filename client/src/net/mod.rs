//! Networking for the preference endpoints.
//!
//! SYSTEM CONTEXT
//! ==============
//! `api` owns the remote-record trait and its HTTP implementation; the wire
//! schema itself lives in the shared `wire` crate.

pub mod api;
