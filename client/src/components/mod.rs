//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render the settings controls and route every interaction into
//! the preference store through the event dispatcher.

pub mod settings_panel;
