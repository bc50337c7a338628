//! Settings card: accent color, dark mode, content filter, language, save.
//!
//! SYSTEM CONTEXT
//! ==============
//! The panel mirrors the store's in-page preferences in a signal and sends
//! every interaction through `state::events::dispatch`. It owns no
//! persistence logic of its own.

use std::rc::Rc;

use leptos::prelude::*;
use wire::ThemeColor;

use crate::net::api::RemotePreferences;
use crate::state::events::{Dispatched, PreferenceEvent, dispatch};
use crate::state::store::PreferenceStore;
use crate::util::document::Document;
use crate::util::local_cache::LocalCache;
use crate::util::notify::Notifier;

/// Locales offered in the language dropdown.
pub const LANGUAGES: [(&str, &str); 4] = [("en", "English"), ("es", "Español"), ("fr", "Français"), ("de", "Deutsch")];

/// Preference controls bound to `store`. Dispatches `PageLoaded` on mount.
#[component]
pub fn SettingsPanel<C, R, D, N>(store: Rc<PreferenceStore<C, R, D, N>>) -> impl IntoView
where
    C: LocalCache + 'static,
    R: RemotePreferences + 'static,
    D: Document + 'static,
    N: Notifier + 'static,
{
    let prefs = RwSignal::new(store.current());
    let busy = RwSignal::new(false);
    let store = StoredValue::new_local(store);

    let run = move |event: PreferenceEvent| {
        let store = store.get_value();
        let remote = matches!(event, PreferenceEvent::SaveClicked(_) | PreferenceEvent::LanguageSelected(_));
        if remote {
            busy.set(true);
        }
        leptos::task::spawn_local(async move {
            let outcome = dispatch(&store, event).await;
            prefs.set(store.current());
            if remote {
                busy.set(false);
            }
            match outcome {
                Ok(Dispatched::Reload) => reload_page(),
                Ok(_) => {}
                Err(e) => leptos::logging::warn!("settings event failed: {e}"),
            }
        });
    };

    run(PreferenceEvent::PageLoaded);

    let color_circles = ThemeColor::ALL
        .into_iter()
        .map(|color| {
            view! {
                <button
                    type="button"
                    class="color-circle"
                    class:selected=move || prefs.with(|p| p.theme_color == color)
                    data-color=color.key()
                    title=color.key()
                    on:click=move |_| run(PreferenceEvent::ColorPicked(color.key().to_owned()))
                ></button>
            }
        })
        .collect_view();

    let language_options = LANGUAGES
        .iter()
        .map(|&(code, label)| {
            view! {
                <option value=code selected=move || prefs.with(|p| p.language == code)>
                    {label}
                </option>
            }
        })
        .collect_view();

    view! {
        <div class="settings-card">
            <section class="settings-card__row">
                <span class="settings-card__label">"Theme color"</span>
                <div class="color-options">{color_circles}</div>
            </section>

            <label class="settings-card__row">
                <span class="settings-card__label">"Dark mode"</span>
                <input
                    type="checkbox"
                    id="darkModeToggle"
                    prop:checked=move || prefs.with(|p| p.dark_mode)
                    on:change=move |ev| run(PreferenceEvent::DarkModeToggled(event_target_checked(&ev)))
                />
            </label>

            <label class="settings-card__row">
                <span class="settings-card__label">"Show NSFW content"</span>
                <input
                    type="checkbox"
                    id="showNsfw"
                    prop:checked=move || prefs.with(|p| p.show_nsfw)
                    on:change=move |ev| run(PreferenceEvent::NsfwToggled(event_target_checked(&ev)))
                />
            </label>

            <label class="settings-card__row">
                <span class="settings-card__label">"Language"</span>
                <select
                    class="language-dropdown"
                    prop:disabled=move || busy.get()
                    on:change=move |ev| run(PreferenceEvent::LanguageSelected(event_target_value(&ev)))
                >
                    {language_options}
                </select>
            </label>

            <div class="settings-card__actions">
                <button
                    class="btn btn--primary btn-save"
                    prop:disabled=move || busy.get()
                    on:click=move |_| run(PreferenceEvent::SaveClicked(prefs.get_untracked()))
                >
                    {move || if busy.get() { "Saving…" } else { "Save" }}
                </button>
            </div>
        </div>
    }
}

fn reload_page() {
    #[cfg(feature = "hydrate")]
    {
        if let Some(window) = web_sys::window() {
            if let Err(e) = window.location().reload() {
                leptos::logging::warn!("page reload failed: {e:?}");
            }
        }
    }
}
