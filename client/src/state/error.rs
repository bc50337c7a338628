//! Failure kinds surfaced by preference operations.
//!
//! ERROR HANDLING
//! ==============
//! Every variant is handled the same way by the store: notify the user, keep
//! persisted and in-page state as they were, and leave the page interactive.

/// Error returned by store operations and browser adapters.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum PreferenceError {
    /// Network unreachable, request rejected before a response, or an
    /// unreadable response body.
    #[error("transport failure: {0}")]
    Transport(String),
    /// Well-formed response whose status is not `success`.
    #[error("server rejected request: {}", message.as_deref().unwrap_or("no message"))]
    Rejected { message: Option<String> },
    /// An element the presentation layer writes to is absent.
    #[error("missing element: {0}")]
    MissingElement(&'static str),
    /// The browser refused a DOM write.
    #[error("dom write failed: {0}")]
    Dom(String),
    /// A remote call is already outstanding.
    #[error("another preference request is still in flight")]
    InFlight,
}

impl PreferenceError {
    /// Message supplied by the server, if this is a rejection that carried one.
    #[must_use]
    pub fn server_message(&self) -> Option<String> {
        match self {
            Self::Rejected { message } => message.clone(),
            _ => None,
        }
    }
}
