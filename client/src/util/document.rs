//! Document surface the theme is written to.
//!
//! The browser implementation targets the `<html>` element (custom properties
//! and marker attributes) and `<body>` (background color). It also reads the
//! preferences the server rendered into the page, which seed first-visit
//! state when the local cache is empty.

#[cfg(test)]
#[path = "document_test.rs"]
mod document_test;

use std::cell::RefCell;
use std::collections::BTreeMap;

#[cfg(feature = "hydrate")]
use wire::EMBEDDED_PREFERENCES_ID;
use wire::PartialPreferences;

use crate::state::error::PreferenceError;

/// Presentation writes and the server-rendered seed.
pub trait Document {
    /// Set a CSS custom property on the root element.
    ///
    /// # Errors
    ///
    /// Returns an error if the root element is absent or rejects the write.
    fn set_root_property(&self, name: &str, value: &str) -> Result<(), PreferenceError>;

    /// Set an attribute on the root element.
    ///
    /// # Errors
    ///
    /// Returns an error if the root element is absent or rejects the write.
    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), PreferenceError>;

    /// Set the body background color.
    ///
    /// # Errors
    ///
    /// Returns an error if `<body>` is absent or rejects the write.
    fn set_body_background(&self, color: &str) -> Result<(), PreferenceError>;

    /// Preferences embedded by the server, if the page carries any.
    fn embedded_preferences(&self) -> Option<PartialPreferences>;
}

/// Parse the embedded JSON payload. Malformed payloads are ignored.
pub fn parse_embedded(raw: &str) -> Option<PartialPreferences> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return None;
    }
    serde_json::from_str(trimmed).ok()
}

// =============================================================================
// IN-MEMORY DOCUMENT
// =============================================================================

/// Observable document state written by [`MemoryDocument`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct DocumentSnapshot {
    pub root_properties: BTreeMap<String, String>,
    pub root_attributes: BTreeMap<String, String>,
    pub body_background: Option<String>,
}

/// Document kept in memory. Used off-browser and in tests.
#[derive(Debug)]
pub struct MemoryDocument {
    state: RefCell<DocumentSnapshot>,
    embedded: Option<PartialPreferences>,
    has_body: bool,
}

impl MemoryDocument {
    #[must_use]
    pub fn new() -> Self {
        Self { state: RefCell::default(), embedded: None, has_body: true }
    }

    /// Document whose server-rendered seed is `embedded`.
    #[must_use]
    pub fn with_embedded(embedded: PartialPreferences) -> Self {
        Self { embedded: Some(embedded), ..Self::new() }
    }

    /// Document without a `<body>`, for exercising missing-element handling.
    #[must_use]
    pub fn without_body() -> Self {
        Self { has_body: false, ..Self::new() }
    }

    #[must_use]
    pub fn snapshot(&self) -> DocumentSnapshot {
        self.state.borrow().clone()
    }
}

impl Default for MemoryDocument {
    fn default() -> Self {
        Self::new()
    }
}

impl Document for MemoryDocument {
    fn set_root_property(&self, name: &str, value: &str) -> Result<(), PreferenceError> {
        self.state
            .borrow_mut()
            .root_properties
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), PreferenceError> {
        self.state
            .borrow_mut()
            .root_attributes
            .insert(name.to_owned(), value.to_owned());
        Ok(())
    }

    fn set_body_background(&self, color: &str) -> Result<(), PreferenceError> {
        if !self.has_body {
            return Err(PreferenceError::MissingElement("body"));
        }
        self.state.borrow_mut().body_background = Some(color.to_owned());
        Ok(())
    }

    fn embedded_preferences(&self) -> Option<PartialPreferences> {
        self.embedded.clone()
    }
}

// =============================================================================
// BROWSER DOCUMENT
// =============================================================================

/// The live page document.
#[cfg(feature = "hydrate")]
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserDocument;

#[cfg(feature = "hydrate")]
impl BrowserDocument {
    fn document() -> Result<web_sys::Document, PreferenceError> {
        web_sys::window()
            .and_then(|w| w.document())
            .ok_or(PreferenceError::MissingElement("document"))
    }

    fn root() -> Result<web_sys::HtmlElement, PreferenceError> {
        use wasm_bindgen::JsCast;

        Self::document()?
            .document_element()
            .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok())
            .ok_or(PreferenceError::MissingElement("html"))
    }
}

#[cfg(feature = "hydrate")]
fn dom_error(e: &wasm_bindgen::JsValue) -> PreferenceError {
    PreferenceError::Dom(format!("{e:?}"))
}

#[cfg(feature = "hydrate")]
impl Document for BrowserDocument {
    fn set_root_property(&self, name: &str, value: &str) -> Result<(), PreferenceError> {
        Self::root()?
            .style()
            .set_property(name, value)
            .map_err(|e| dom_error(&e))
    }

    fn set_root_attribute(&self, name: &str, value: &str) -> Result<(), PreferenceError> {
        Self::root()?
            .set_attribute(name, value)
            .map_err(|e| dom_error(&e))
    }

    fn set_body_background(&self, color: &str) -> Result<(), PreferenceError> {
        Self::document()?
            .body()
            .ok_or(PreferenceError::MissingElement("body"))?
            .style()
            .set_property("background-color", color)
            .map_err(|e| dom_error(&e))
    }

    fn embedded_preferences(&self) -> Option<PartialPreferences> {
        let raw = Self::document()
            .ok()?
            .get_element_by_id(EMBEDDED_PREFERENCES_ID)?
            .text_content()?;
        parse_embedded(&raw)
    }
}
