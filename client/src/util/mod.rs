//! Utility helpers shared across client UI modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Utility modules isolate browser/environment concerns (storage, document,
//! alerts) behind small traits so the store can run against in-memory
//! doubles off-browser.

pub mod document;
pub mod local_cache;
pub mod notify;
pub mod theme;
