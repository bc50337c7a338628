use super::*;

#[test]
fn read_cached_is_empty_for_fresh_cache() {
    let cache = MemoryCache::new();
    assert_eq!(read_cached(&cache), PartialPreferences::default());
}

#[test]
fn dark_mode_is_stored_as_true_false_strings() {
    let cache = MemoryCache::new();
    write_dark_mode(&cache, true);
    assert_eq!(cache.get(DARK_MODE_KEY).as_deref(), Some("true"));
    write_dark_mode(&cache, false);
    assert_eq!(cache.get(DARK_MODE_KEY).as_deref(), Some("false"));
}

#[test]
fn read_cached_treats_any_non_true_dark_mode_as_false() {
    let cache = MemoryCache::new();
    cache.set(DARK_MODE_KEY, "yes");
    assert_eq!(read_cached(&cache).dark_mode, Some(false));
}

#[test]
fn read_cached_parses_unknown_color_as_blue() {
    let cache = MemoryCache::new();
    cache.set(THEME_COLOR_KEY, "teal");
    assert_eq!(read_cached(&cache).theme_color, Some(ThemeColor::Blue));
}

#[test]
fn read_cached_ignores_blank_language() {
    let cache = MemoryCache::new();
    cache.set(LANGUAGE_KEY, "");
    assert_eq!(read_cached(&cache).language, None);
}

#[test]
fn write_all_stores_three_keys_and_skips_content_filter() {
    let cache = MemoryCache::new();
    let prefs = UserPreferences {
        dark_mode: true,
        theme_color: ThemeColor::Red,
        show_nsfw: true,
        language: "de".to_owned(),
    };
    write_all(&cache, &prefs);

    let snapshot = cache.snapshot();
    assert_eq!(snapshot.len(), 3);
    assert_eq!(snapshot.get(THEME_COLOR_KEY).map(String::as_str), Some("red"));
    assert_eq!(snapshot.get(DARK_MODE_KEY).map(String::as_str), Some("true"));
    assert_eq!(snapshot.get(LANGUAGE_KEY).map(String::as_str), Some("de"));
    assert_eq!(read_cached(&cache).show_nsfw, None);
}
