// =============================================================================
// Mapea Web - Translation Context
// =============================================================================

use leptos::prelude::*;

use super::catalog::{Catalog, SeoStrings};
use super::language::Language;
use super::switch::switch_language;
use crate::browser::{Browser, WebBrowser};
use crate::router::Section;

/// Active language and its catalog, provided to every component.
#[derive(Clone, Copy)]
pub struct I18n {
    language: RwSignal<Language>,
    catalog: StoredValue<Catalog>,
    storage_key: &'static str,
}

impl I18n {
    pub fn new(language: Language, storage_key: &'static str) -> Self {
        Self {
            language: RwSignal::new(language),
            catalog: StoredValue::new(Catalog::load(language)),
            storage_key,
        }
    }

    pub fn language(&self) -> ReadSignal<Language> {
        self.language.read_only()
    }

    /// Translate a `namespace.key.path`.
    pub fn t(&self, key: &str) -> String {
        self.catalog.with_value(|catalog| catalog.t(key).to_string())
    }

    pub fn seo(&self, section: Section) -> SeoStrings {
        self.catalog.with_value(|catalog| catalog.seo(section))
    }

    /// Switch language. The page reloads under the new prefix; choosing the
    /// current language does nothing.
    pub fn change_language(&self, lang: Language) {
        self.change_language_with(&WebBrowser, lang);
    }

    /// The language signal only moves once the navigation has been issued.
    fn change_language_with<B: Browser>(&self, browser: &B, lang: Language) {
        if lang == self.language.get_untracked() {
            return;
        }
        if switch_language(browser, self.storage_key, lang).is_some() {
            self.language.set(lang);
        }
    }
}

/// The [`I18n`] provided by the app root.
pub fn use_i18n() -> I18n {
    expect_context::<I18n>()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::MemoryBrowser;

    const KEY: &str = "mapea-language";

    #[test]
    fn test_change_language_follows_navigation() {
        let owner = Owner::new();
        owner.with(|| {
            let i18n = I18n::new(Language::En, KEY);
            let browser = MemoryBrowser::at("/en/mission");

            i18n.change_language_with(&browser, Language::Es);
            assert_eq!(i18n.language().get_untracked(), Language::Es);
            assert_eq!(browser.assigned(), vec!["/es/mission".to_string()]);
            assert_eq!(browser.stored(KEY).as_deref(), Some("es"));
        });
    }

    #[test]
    fn test_change_language_keeps_signal_when_navigation_fails() {
        let owner = Owner::new();
        owner.with(|| {
            let i18n = I18n::new(Language::En, KEY);
            let browser = MemoryBrowser::detached();

            i18n.change_language_with(&browser, Language::Es);
            assert_eq!(i18n.language().get_untracked(), Language::En);
            assert!(browser.assigned().is_empty());
        });
    }

    #[test]
    fn test_change_to_current_language_is_ignored() {
        let owner = Owner::new();
        owner.with(|| {
            let i18n = I18n::new(Language::Es, KEY);
            let browser = MemoryBrowser::at("/es");

            i18n.change_language_with(&browser, Language::Es);
            assert_eq!(i18n.language().get_untracked(), Language::Es);
            assert!(browser.assigned().is_empty());
            assert_eq!(browser.stored(KEY), None);
        });
    }
}
