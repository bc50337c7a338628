use super::*;

#[test]
fn theme_color_parses_every_known_key() {
    for color in ThemeColor::ALL {
        assert_eq!(ThemeColor::parse(color.key()), color);
    }
}

#[test]
fn theme_color_parse_is_case_and_whitespace_tolerant() {
    assert_eq!(ThemeColor::parse("  Purple "), ThemeColor::Purple);
    assert_eq!(ThemeColor::parse("RED"), ThemeColor::Red);
}

#[test]
fn theme_color_unknown_key_falls_back_to_blue() {
    assert_eq!(ThemeColor::parse("unknown-value"), ThemeColor::Blue);
    assert_eq!(ThemeColor::parse(""), ThemeColor::Blue);
    assert_eq!(ThemeColor::parse("unknown-value").pair(), ThemeColor::Blue.pair());
}

#[test]
fn theme_color_pairs_match_palette() {
    assert_eq!(ThemeColor::Blue.pair(), ColorPair { main: "#007bff", hover: "#0056b3" });
    assert_eq!(ThemeColor::Custom.pair(), ColorPair { main: "#7f7fff", hover: "#6666cc" });
}

#[test]
fn theme_color_serializes_as_key() {
    let json = serde_json::to_string(&ThemeColor::Orange).unwrap();
    assert_eq!(json, "\"orange\"");
}

#[test]
fn theme_color_deserializes_unknown_as_blue() {
    let color: ThemeColor = serde_json::from_str("\"magenta\"").unwrap();
    assert_eq!(color, ThemeColor::Blue);
}

#[test]
fn user_preferences_default_matches_first_visit() {
    let prefs = UserPreferences::default();
    assert!(!prefs.dark_mode);
    assert_eq!(prefs.theme_color, ThemeColor::Blue);
    assert!(!prefs.show_nsfw);
    assert_eq!(prefs.language, "en");
}

#[test]
fn user_preferences_mode_and_background_follow_dark_flag() {
    let light = UserPreferences::default();
    let dark = UserPreferences { dark_mode: true, ..UserPreferences::default() };
    assert_eq!((light.mode(), light.background()), ("light", LIGHT_BACKGROUND));
    assert_eq!((dark.mode(), dark.background()), ("dark", DARK_BACKGROUND));
}

#[test]
fn user_preferences_uses_camel_case_keys() {
    let prefs = UserPreferences {
        dark_mode: true,
        theme_color: ThemeColor::Green,
        show_nsfw: true,
        language: "fr".to_owned(),
    };
    let value = serde_json::to_value(&prefs).unwrap();
    assert_eq!(
        value,
        serde_json::json!({"darkMode": true, "themeColor": "green", "showNsfw": true, "language": "fr"})
    );
}

#[test]
fn user_preferences_missing_fields_take_defaults() {
    let prefs: UserPreferences = serde_json::from_str(r#"{"themeColor":"red"}"#).unwrap();
    assert_eq!(prefs.theme_color, ThemeColor::Red);
    assert!(!prefs.dark_mode);
    assert_eq!(prefs.language, "en");
}

#[test]
fn partial_or_prefers_known_fields() {
    let cache = PartialPreferences { theme_color: Some(ThemeColor::Purple), ..PartialPreferences::default() };
    let server = PartialPreferences {
        theme_color: Some(ThemeColor::Red),
        dark_mode: Some(true),
        ..PartialPreferences::default()
    };
    let merged = cache.or(server);
    assert_eq!(merged.theme_color, Some(ThemeColor::Purple));
    assert_eq!(merged.dark_mode, Some(true));
    assert_eq!(merged.language, None);
}

#[test]
fn partial_complete_fills_defaults_field_by_field() {
    let partial = PartialPreferences { show_nsfw: Some(true), ..PartialPreferences::default() };
    let prefs = partial.complete();
    assert!(prefs.show_nsfw);
    assert_eq!(prefs.theme_color, ThemeColor::Blue);
    assert_eq!(prefs.language, "en");
}

#[test]
fn partial_complete_treats_blank_language_as_missing() {
    let partial = PartialPreferences { language: Some("  ".to_owned()), ..PartialPreferences::default() };
    assert_eq!(partial.complete().language, "en");
}

#[test]
fn change_language_request_defaults_to_en() {
    let req: ChangeLanguageRequest = serde_json::from_str("{}").unwrap();
    assert_eq!(req.language, "en");
}

#[test]
fn api_response_omits_missing_message() {
    let json = serde_json::to_string(&ApiResponse::success(None)).unwrap();
    assert_eq!(json, r#"{"status":"success"}"#);
}

#[test]
fn api_response_reads_error_message() {
    let resp: ApiResponse = serde_json::from_str(r#"{"status":"error","message":"Not authenticated"}"#).unwrap();
    assert!(!resp.is_success());
    assert_eq!(resp.message.as_deref(), Some("Not authenticated"));
}
