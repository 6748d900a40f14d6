// =============================================================================
// Mapea Web - Browser Touchpoints
// =============================================================================
// Table of Contents:
// 1. Submodules
// 2. Error Types
// 3. History State
// 4. Stored Language
// 5. Browser Trait
// =============================================================================

pub mod memory;
pub mod web;

pub use memory::{HistoryEntry, HistoryKind, MemoryBrowser};
pub use web::WebBrowser;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::i18n::Language;
use crate::router::Section;

// -----------------------------------------------------------------------------
// 2. Error Types
// -----------------------------------------------------------------------------

/// Browser API failures. Callers log these and carry on.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum BrowserError {
    #[error("browser API unavailable")]
    Unavailable,

    #[error("JavaScript error: {0}")]
    Js(String),

    #[error("storage error: {0}")]
    Storage(String),
}

// -----------------------------------------------------------------------------
// 3. History State
// -----------------------------------------------------------------------------

/// State attached to every history entry the router writes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryState {
    pub section: Section,
}

/// How a section is brought into view.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScrollMode {
    Smooth,
    Instant,
}

impl ScrollMode {
    pub fn from_smooth(smooth: bool) -> Self {
        if smooth {
            ScrollMode::Smooth
        } else {
            ScrollMode::Instant
        }
    }
}

// -----------------------------------------------------------------------------
// 4. Stored Language
// -----------------------------------------------------------------------------

/// Storage text for a language preference: the bare code, e.g. `es`.
pub fn language_to_storage(lang: Language) -> &'static str {
    lang.code()
}

/// Read back a stored preference. Anything but a bare code is ignored.
pub fn language_from_storage(raw: &str) -> Option<Language> {
    Language::from_code(raw.trim())
}

// -----------------------------------------------------------------------------
// 5. Browser Trait
// -----------------------------------------------------------------------------

/// Everything the router and the language switch need from the browser.
///
/// Implementations must not panic when there is no window; they return
/// `None`, `false` or [`BrowserError::Unavailable`] instead.
pub trait Browser {
    /// Current `location.pathname`.
    fn pathname(&self) -> Option<String>;

    /// A query string parameter of the current URL.
    fn query_param(&self, name: &str) -> Option<String>;

    fn push_state(&self, state: &HistoryState, url: &str) -> Result<(), BrowserError>;

    fn replace_state(&self, state: &HistoryState, url: &str) -> Result<(), BrowserError>;

    /// Scroll the section's anchor to the top of the viewport. Returns false
    /// when no element with the section id is rendered.
    fn scroll_to_section(&self, section: Section, mode: ScrollMode) -> bool;

    /// Instant scroll to the section after `delay_ms`.
    fn schedule_scroll(&self, section: Section, delay_ms: u32);

    fn store_language(&self, key: &str, lang: Language) -> Result<(), BrowserError>;

    fn stored_language(&self, key: &str) -> Option<Language>;

    /// Full page navigation.
    fn assign_location(&self, href: &str) -> Result<(), BrowserError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    const KEY: &str = "mapea-language";

    #[test]
    fn test_language_is_stored_as_bare_code() {
        assert_eq!(language_to_storage(Language::Es), "es");
        assert_eq!(language_to_storage(Language::En), "en");

        let browser = MemoryBrowser::at("/en");
        browser.store_language(KEY, Language::Es).unwrap();
        assert_eq!(browser.stored(KEY).as_deref(), Some("es"));
    }

    #[test]
    fn test_stored_language_reads_bare_code_only() {
        assert_eq!(language_from_storage("es"), Some(Language::Es));
        assert_eq!(language_from_storage(" en\n"), Some(Language::En));
        assert_eq!(language_from_storage("\"es\""), None);
        assert_eq!(language_from_storage("fr"), None);

        let browser = MemoryBrowser::at("/").with_stored(KEY, "es");
        assert_eq!(browser.stored_language(KEY), Some(Language::Es));
    }
}
