use wire::{DARK_BACKGROUND, LIGHT_BACKGROUND, ThemeColor};

use super::*;

fn dark_red() -> UserPreferences {
    UserPreferences {
        dark_mode: true,
        theme_color: ThemeColor::Red,
        show_nsfw: false,
        language: "fr".to_owned(),
    }
}

#[test]
fn page_carries_theme_markers_on_root_element() {
    let html = render_settings_page(&dark_red());
    assert!(html.contains(r#"<html lang="fr" data-theme="dark" data-color="red""#));
    assert!(html.contains("--theme-color: #dc3545; --theme-hover: #bd2130;"));
    assert!(html.contains(&format!("background-color: {DARK_BACKGROUND};")));
}

#[test]
fn default_page_is_light_blue_english() {
    let html = render_settings_page(&UserPreferences::default());
    assert!(html.contains(r#"lang="en" data-theme="light" data-color="blue""#));
    assert!(html.contains("--theme-color: #007bff;"));
    assert!(html.contains(&format!("background-color: {LIGHT_BACKGROUND};")));
}

#[test]
fn page_embeds_preferences_json_and_mount_point() {
    let html = render_settings_page(&dark_red());
    assert!(html.contains(r#"<script id="user-preferences" type="application/json">"#));
    assert!(html.contains(r#""themeColor":"red""#));
    assert!(html.contains(r#"<div id="settings-root"></div>"#));
    assert!(html.contains("import init, { start } from '/pkg/client.js';"));
}

#[test]
fn embedded_json_cannot_close_the_script_element() {
    let prefs = UserPreferences { language: "</script><b>".to_owned(), ..UserPreferences::default() };
    let json = embedded_json(&prefs);
    assert!(!json.contains('<'));
    let decoded: UserPreferences = serde_json::from_str(&json).unwrap();
    assert_eq!(decoded.language, "</script><b>");
}

#[tokio::test]
async fn anonymous_settings_page_renders_defaults_with_cookie_language() {
    use axum::body::{Body, to_bytes};
    use axum::http::{Request, StatusCode, header};
    use tower::ServiceExt;

    let app = crate::routes::app(crate::state::test_helpers::test_app_state(), std::path::Path::new("client/pkg"));
    let request = Request::builder()
        .uri("/settings")
        .header(header::COOKIE, "language=de")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let html = String::from_utf8(bytes.to_vec()).unwrap();
    assert!(html.contains(r#"lang="de" data-theme="light" data-color="blue""#));
}
