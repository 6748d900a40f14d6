// =============================================================================
// Mapea Web - Utility Functions
// =============================================================================
// Table of Contents:
// 1. DOM Utilities
// 2. JS Interop
// =============================================================================

use wasm_bindgen::JsValue;
use web_sys::{Element, Window};

// -----------------------------------------------------------------------------
// 1. DOM Utilities
// -----------------------------------------------------------------------------

/// The browser window, if there is one.
pub fn window() -> Option<Window> {
    web_sys::window()
}

/// Current URL pathname.
pub fn get_pathname() -> Option<String> {
    window()?.location().pathname().ok()
}

/// A query parameter from the current URL.
pub fn get_query_param(name: &str) -> Option<String> {
    let search = window()?.location().search().ok()?;
    let params = web_sys::UrlSearchParams::new_with_str(&search).ok()?;
    params.get(name)
}

/// Element with the given id in the current document.
pub fn element_by_id(id: &str) -> Option<Element> {
    window()?.document()?.get_element_by_id(id)
}

// -----------------------------------------------------------------------------
// 2. JS Interop
// -----------------------------------------------------------------------------

/// Readable text for a thrown JS value.
pub fn js_error_text(err: &JsValue) -> String {
    err.as_string().unwrap_or_else(|| format!("{:?}", err))
}
