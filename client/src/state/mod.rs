//! Preference state owned by the page session.
//!
//! SYSTEM CONTEXT
//! ==============
//! `store` holds the authoritative in-page preferences, `events` routes UI
//! events into it, and `error` defines the failures both report.

pub mod error;
pub mod events;
pub mod store;
