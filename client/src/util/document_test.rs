use super::*;
use wire::ThemeColor;

#[test]
fn parse_embedded_reads_camel_case_payload() {
    let parsed = parse_embedded(r#"{"darkMode":true,"themeColor":"green","showNsfw":false,"language":"es"}"#).unwrap();
    assert_eq!(parsed.dark_mode, Some(true));
    assert_eq!(parsed.theme_color, Some(ThemeColor::Green));
    assert_eq!(parsed.show_nsfw, Some(false));
    assert_eq!(parsed.language.as_deref(), Some("es"));
}

#[test]
fn parse_embedded_accepts_partial_payload() {
    let parsed = parse_embedded(r#"{"showNsfw":true}"#).unwrap();
    assert_eq!(parsed.show_nsfw, Some(true));
    assert_eq!(parsed.dark_mode, None);
}

#[test]
fn parse_embedded_ignores_blank_and_malformed_payloads() {
    assert_eq!(parse_embedded("   "), None);
    assert_eq!(parse_embedded("{not json"), None);
}

#[test]
fn memory_document_records_writes() {
    let doc = MemoryDocument::new();
    doc.set_root_property("--theme-color", "#007bff").unwrap();
    doc.set_root_attribute("data-theme", "dark").unwrap();
    doc.set_body_background("#121a29").unwrap();

    let snapshot = doc.snapshot();
    assert_eq!(snapshot.root_properties.get("--theme-color").map(String::as_str), Some("#007bff"));
    assert_eq!(snapshot.root_attributes.get("data-theme").map(String::as_str), Some("dark"));
    assert_eq!(snapshot.body_background.as_deref(), Some("#121a29"));
}

#[test]
fn memory_document_without_body_reports_missing_element() {
    let doc = MemoryDocument::without_body();
    assert_eq!(doc.set_body_background("#fff"), Err(PreferenceError::MissingElement("body")));
}
