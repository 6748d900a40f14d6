// =============================================================================
// Mapea Web - Language Switching
// =============================================================================
// Table of Contents:
// 1. Language Detection
// 2. Language Change
// =============================================================================

use super::language::{language_prefix, localized_path, Language};
use crate::browser::Browser;

// -----------------------------------------------------------------------------
// 1. Language Detection
// -----------------------------------------------------------------------------

/// Page-load language: URL prefix, then `?lang=`, then the stored
/// preference, then the default.
pub fn preferred_language<B: Browser>(browser: &B, storage_key: &str) -> Language {
    browser
        .pathname()
        .and_then(|path| language_prefix(&path))
        .or_else(|| {
            browser
                .query_param("lang")
                .and_then(|code| Language::from_code(&code))
        })
        .or_else(|| browser.stored_language(storage_key))
        .unwrap_or(Language::DEFAULT)
}

/// Where to send a visitor whose URL has no language prefix.
pub fn bootstrap_redirect<B: Browser>(browser: &B, lang: Language) -> Option<String> {
    let path = browser.pathname()?;
    match language_prefix(&path) {
        Some(_) => None,
        None => Some(localized_path(&path, lang)),
    }
}

// -----------------------------------------------------------------------------
// 2. Language Change
// -----------------------------------------------------------------------------

/// Persist `lang` and reload the current page under its prefix.
///
/// Returns the path navigated to, or `None` outside a browser.
pub fn switch_language<B: Browser>(
    browser: &B,
    storage_key: &str,
    lang: Language,
) -> Option<String> {
    let path = browser.pathname()?;

    if let Err(err) = browser.store_language(storage_key, lang) {
        log::warn!("could not persist language {}: {}", lang, err);
    }

    let target = localized_path(&path, lang);
    match browser.assign_location(&target) {
        Ok(()) => {
            log::info!("switching language to {} at {}", lang, target);
            Some(target)
        }
        Err(err) => {
            log::warn!("navigation to {} failed: {}", target, err);
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::MemoryBrowser;

    const KEY: &str = "mapea-language";

    #[test]
    fn test_switch_replaces_prefix_and_persists() {
        let browser = MemoryBrowser::at("/en/services");
        assert_eq!(switch_language(&browser, KEY, Language::Es).as_deref(), Some("/es/services"));
        assert_eq!(browser.assigned(), vec!["/es/services".to_string()]);
        assert_eq!(browser.stored_language(KEY), Some(Language::Es));
    }

    #[test]
    fn test_switch_adds_prefix_when_missing() {
        let browser = MemoryBrowser::at("/");
        assert_eq!(switch_language(&browser, KEY, Language::En).as_deref(), Some("/en"));
    }

    #[test]
    fn test_switch_detached_is_noop() {
        let browser = MemoryBrowser::detached();
        assert_eq!(switch_language(&browser, KEY, Language::Es), None);
        assert!(browser.assigned().is_empty());
        assert_eq!(browser.stored(KEY), None);
    }

    #[test]
    fn test_preferred_language_order() {
        let browser = MemoryBrowser::at("/es/mission").with_query("lang", "en");
        browser.store_language(KEY, Language::En).unwrap();
        assert_eq!(preferred_language(&browser, KEY), Language::Es);

        let browser = MemoryBrowser::at("/").with_query("lang", "es");
        browser.store_language(KEY, Language::En).unwrap();
        assert_eq!(preferred_language(&browser, KEY), Language::Es);

        let browser = MemoryBrowser::at("/");
        browser.store_language(KEY, Language::Es).unwrap();
        assert_eq!(preferred_language(&browser, KEY), Language::Es);

        let browser = MemoryBrowser::at("/").with_stored(KEY, "es");
        assert_eq!(preferred_language(&browser, KEY), Language::Es);

        assert_eq!(preferred_language(&MemoryBrowser::at("/"), KEY), Language::En);
        assert_eq!(preferred_language(&MemoryBrowser::detached(), KEY), Language::En);
    }

    #[test]
    fn test_bootstrap_redirect() {
        assert_eq!(
            bootstrap_redirect(&MemoryBrowser::at("/"), Language::Es).as_deref(),
            Some("/es")
        );
        assert_eq!(
            bootstrap_redirect(&MemoryBrowser::at("/services"), Language::En).as_deref(),
            Some("/en/services")
        );
        assert_eq!(bootstrap_redirect(&MemoryBrowser::at("/en/contact"), Language::Es), None);
        assert_eq!(bootstrap_redirect(&MemoryBrowser::detached(), Language::Es), None);
    }
}
