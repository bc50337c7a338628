//! User-visible notifications for preference outcomes.

#[cfg(test)]
#[path = "notify_test.rs"]
mod notify_test;

use std::cell::RefCell;

/// Outcome the user is told about.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Notice {
    Saved,
    /// Save failed; carries the server's message when it supplied one.
    SaveFailed(Option<String>),
    LanguageChangeFailed(Option<String>),
    /// The page could not be updated to reflect the preferences.
    DisplayFailed(String),
    /// A request was refused because another one is still pending.
    Busy,
}

impl Notice {
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Saved => "Settings saved successfully!".to_owned(),
            Self::SaveFailed(Some(message)) => format!("Error saving settings: {message}"),
            Self::SaveFailed(None) => "Error saving settings!".to_owned(),
            Self::LanguageChangeFailed(Some(message)) => format!("Error changing language: {message}"),
            Self::LanguageChangeFailed(None) => "Error changing language!".to_owned(),
            Self::DisplayFailed(reason) => format!("Could not apply display settings: {reason}"),
            Self::Busy => "Please wait for the previous request to finish.".to_owned(),
        }
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        !matches!(self, Self::Saved)
    }
}

pub trait Notifier {
    fn notify(&self, notice: &Notice);
}

/// Notifier that keeps every notice for later inspection.
#[derive(Debug, Default)]
pub struct RecordingNotifier {
    notices: RefCell<Vec<Notice>>,
}

impl RecordingNotifier {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn notices(&self) -> Vec<Notice> {
        self.notices.borrow().clone()
    }
}

impl Notifier for RecordingNotifier {
    fn notify(&self, notice: &Notice) {
        self.notices.borrow_mut().push(notice.clone());
    }
}

/// Notifier using `window.alert`.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct AlertNotifier;

#[cfg(feature = "hydrate")]
impl Notifier for AlertNotifier {
    fn notify(&self, notice: &Notice) {
        let message = notice.message();
        if notice.is_error() {
            leptos::logging::warn!("{message}");
        }
        if let Some(window) = web_sys::window() {
            let _ = window.alert_with_message(&message);
        }
    }
}
