// =============================================================================
// Mapea Web - Real Browser
// =============================================================================
// Table of Contents:
// 1. History State Conversion
// 2. Language Preference
// 3. WebBrowser
// =============================================================================

use gloo_storage::Storage;
use gloo_timers::callback::Timeout;
use wasm_bindgen::JsValue;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition};

use super::{
    language_from_storage, language_to_storage, Browser, BrowserError, HistoryState, ScrollMode,
};
use crate::i18n::Language;
use crate::router::Section;
use crate::utils::{self, js_error_text};

// -----------------------------------------------------------------------------
// 1. History State Conversion
// -----------------------------------------------------------------------------

/// `{ section: "<id>" }` as a plain JS object.
pub fn history_state_to_js(state: &HistoryState) -> Result<JsValue, BrowserError> {
    serde_wasm_bindgen::to_value(state).map_err(|err| BrowserError::Js(err.to_string()))
}

/// Section carried by a popstate payload, if it names a known one.
pub fn section_from_js_state(state: &JsValue) -> Option<Section> {
    serde_wasm_bindgen::from_value::<HistoryState>(state.clone())
        .ok()
        .map(|state| state.section)
}

fn js_err(err: JsValue) -> BrowserError {
    BrowserError::Js(js_error_text(&err))
}

// -----------------------------------------------------------------------------
// 2. Language Preference
// -----------------------------------------------------------------------------

/// `localStorage`, reached through gloo once a window exists.
fn local_storage() -> Result<web_sys::Storage, BrowserError> {
    utils::window().ok_or(BrowserError::Unavailable)?;
    Ok(gloo_storage::LocalStorage::raw())
}

// -----------------------------------------------------------------------------
// 3. WebBrowser
// -----------------------------------------------------------------------------

/// [`Browser`] over `window`, `history`, `document` and `localStorage`.
#[derive(Clone, Copy, Debug, Default)]
pub struct WebBrowser;

impl WebBrowser {
    fn history(&self) -> Result<web_sys::History, BrowserError> {
        utils::window()
            .ok_or(BrowserError::Unavailable)?
            .history()
            .map_err(js_err)
    }
}

impl Browser for WebBrowser {
    fn pathname(&self) -> Option<String> {
        utils::get_pathname()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        utils::get_query_param(name)
    }

    fn push_state(&self, state: &HistoryState, url: &str) -> Result<(), BrowserError> {
        self.history()?
            .push_state_with_url(&history_state_to_js(state)?, "", Some(url))
            .map_err(js_err)
    }

    fn replace_state(&self, state: &HistoryState, url: &str) -> Result<(), BrowserError> {
        self.history()?
            .replace_state_with_url(&history_state_to_js(state)?, "", Some(url))
            .map_err(js_err)
    }

    fn scroll_to_section(&self, section: Section, mode: ScrollMode) -> bool {
        let Some(element) = utils::element_by_id(section.as_str()) else {
            return false;
        };

        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match mode {
            ScrollMode::Smooth => ScrollBehavior::Smooth,
            ScrollMode::Instant => ScrollBehavior::Auto,
        });
        options.set_block(ScrollLogicalPosition::Start);
        element.scroll_into_view_with_scroll_into_view_options(&options);
        true
    }

    fn schedule_scroll(&self, section: Section, delay_ms: u32) {
        if utils::window().is_none() {
            return;
        }
        Timeout::new(delay_ms, move || {
            if !WebBrowser.scroll_to_section(section, ScrollMode::Instant) {
                log::debug!("deferred scroll: #{} not rendered", section);
            }
        })
        .forget();
    }

    fn store_language(&self, key: &str, lang: Language) -> Result<(), BrowserError> {
        local_storage()?
            .set_item(key, language_to_storage(lang))
            .map_err(|err| BrowserError::Storage(js_error_text(&err)))
    }

    fn stored_language(&self, key: &str) -> Option<Language> {
        let raw = local_storage().ok()?.get_item(key).ok()?;
        raw.as_deref().and_then(language_from_storage)
    }

    fn assign_location(&self, href: &str) -> Result<(), BrowserError> {
        utils::window()
            .ok_or(BrowserError::Unavailable)?
            .location()
            .set_href(href)
            .map_err(js_err)
    }
}
