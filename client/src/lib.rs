//! Browser side of the settings site.
//!
//! `state::store::PreferenceStore` keeps display preferences consistent
//! between the page, `localStorage` and the server; `util::theme` renders
//! them; `components::settings_panel` wires the settings form to the store.

pub mod components;
pub mod net;
pub mod state;
pub mod util;

/// Wasm entry point, called by the page once the bundle is initialized.
///
/// Applies the stored theme on every page; mounts the settings panel only
/// where the page provides `#settings-root`.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    use std::rc::Rc;

    use leptos::prelude::*;
    use wasm_bindgen::JsCast;

    use crate::components::settings_panel::SettingsPanel;
    use crate::net::api::HttpRemote;
    use crate::state::events::{PreferenceEvent, dispatch};
    use crate::state::store::PreferenceStore;
    use crate::util::document::BrowserDocument;
    use crate::util::local_cache::BrowserStorage;
    use crate::util::notify::AlertNotifier;

    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Debug);

    let store = Rc::new(PreferenceStore::new(BrowserStorage, HttpRemote, BrowserDocument, AlertNotifier));

    let root = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(wire::SETTINGS_ROOT_ID))
        .and_then(|el| el.dyn_into::<web_sys::HtmlElement>().ok());

    match root {
        Some(root) => {
            leptos::mount::mount_to(root, move || view! { <SettingsPanel store=store /> }).forget();
        }
        None => {
            leptos::task::spawn_local(async move {
                if let Err(e) = dispatch(&store, PreferenceEvent::PageLoaded).await {
                    leptos::logging::warn!("preference load failed: {e}");
                }
            });
        }
    }
}
