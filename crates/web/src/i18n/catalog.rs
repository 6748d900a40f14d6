// =============================================================================
// Mapea Web - Translation Catalogs
// =============================================================================
// Table of Contents:
// 1. Namespaces
// 2. Embedded Locale Files
// 3. Errors
// 4. Catalog
// 5. SEO Strings
// =============================================================================

use std::collections::BTreeMap;

use thiserror::Error;

use super::language::Language;
use super::resolver::{resolve, translate, TranslationValue};
use crate::router::Section;

// -----------------------------------------------------------------------------
// 1. Namespaces
// -----------------------------------------------------------------------------

/// One locale file per namespace and language.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Namespace {
    Common,
    Navigation,
    Home,
    Mission,
    Services,
    Clients,
    Contact,
    Footer,
    Seo,
}

impl Namespace {
    pub const ALL: [Namespace; 9] = [
        Namespace::Common,
        Namespace::Navigation,
        Namespace::Home,
        Namespace::Mission,
        Namespace::Services,
        Namespace::Clients,
        Namespace::Contact,
        Namespace::Footer,
        Namespace::Seo,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Namespace::Common => "common",
            Namespace::Navigation => "navigation",
            Namespace::Home => "home",
            Namespace::Mission => "mission",
            Namespace::Services => "services",
            Namespace::Clients => "clients",
            Namespace::Contact => "contact",
            Namespace::Footer => "footer",
            Namespace::Seo => "seo",
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Embedded Locale Files
// -----------------------------------------------------------------------------

macro_rules! locale {
    ($lang:literal, $ns:literal) => {
        include_str!(concat!("../../locales/", $lang, "/", $ns, ".json"))
    };
}

/// Locale files compiled into the binary.
pub fn embedded_locale(lang: Language, ns: Namespace) -> Option<&'static str> {
    use Namespace::*;

    let source = match (lang, ns) {
        (Language::En, Common) => locale!("en", "common"),
        (Language::En, Navigation) => locale!("en", "navigation"),
        (Language::En, Home) => locale!("en", "home"),
        (Language::En, Mission) => locale!("en", "mission"),
        (Language::En, Services) => locale!("en", "services"),
        (Language::En, Clients) => locale!("en", "clients"),
        (Language::En, Contact) => locale!("en", "contact"),
        (Language::En, Footer) => locale!("en", "footer"),
        (Language::En, Seo) => locale!("en", "seo"),
        (Language::Es, Common) => locale!("es", "common"),
        (Language::Es, Navigation) => locale!("es", "navigation"),
        (Language::Es, Home) => locale!("es", "home"),
        (Language::Es, Mission) => locale!("es", "mission"),
        (Language::Es, Services) => locale!("es", "services"),
        (Language::Es, Contact) => locale!("es", "contact"),
        (Language::Es, Footer) => locale!("es", "footer"),
        (Language::Es, Seo) => locale!("es", "seo"),
        // Client testimonials are only written in English for now.
        (Language::Es, Clients) => return None,
    };
    Some(source)
}

// -----------------------------------------------------------------------------
// 3. Errors
// -----------------------------------------------------------------------------

/// Failures while loading a namespace. Always recovered from by falling back.
#[derive(Error, Debug)]
pub enum I18nError {
    #[error("translation not found: {lang}/{namespace}")]
    MissingNamespace {
        lang: Language,
        namespace: &'static str,
    },

    #[error("invalid translation file {lang}/{namespace}: {source}")]
    Parse {
        lang: Language,
        namespace: &'static str,
        #[source]
        source: serde_json::Error,
    },
}

fn parse_namespace<'a, F>(
    source: &F,
    lang: Language,
    ns: Namespace,
) -> Result<TranslationValue, I18nError>
where
    F: Fn(Language, Namespace) -> Option<&'a str>,
{
    let text = source(lang, ns).ok_or(I18nError::MissingNamespace {
        lang,
        namespace: ns.as_str(),
    })?;

    serde_json::from_str(text).map_err(|source| I18nError::Parse {
        lang,
        namespace: ns.as_str(),
        source,
    })
}

// -----------------------------------------------------------------------------
// 4. Catalog
// -----------------------------------------------------------------------------

/// All namespaces for one language, keyed by namespace name.
///
/// Keys passed to [`Catalog::t`] start with the namespace, e.g.
/// `"home.hero.title.line1"`.
#[derive(Clone, Debug, PartialEq)]
pub struct Catalog {
    language: Language,
    root: TranslationValue,
}

impl Catalog {
    /// Load the embedded locale files for `lang`.
    pub fn load(lang: Language) -> Self {
        Self::load_with(lang, embedded_locale)
    }

    /// Load every namespace through `source`, falling back to English for
    /// namespaces that are missing or broken, and to an empty namespace when
    /// English fails too.
    pub fn load_with<'a, F>(lang: Language, source: F) -> Self
    where
        F: Fn(Language, Namespace) -> Option<&'a str>,
    {
        let mut namespaces = BTreeMap::new();

        for ns in Namespace::ALL {
            let tree = match parse_namespace(&source, lang, ns) {
                Ok(tree) => tree,
                Err(err) if lang != Language::DEFAULT => {
                    log::warn!("{}; falling back to {}", err, Language::DEFAULT);
                    parse_namespace(&source, Language::DEFAULT, ns).unwrap_or_else(|err| {
                        log::error!("fallback failed: {}", err);
                        TranslationValue::empty()
                    })
                }
                Err(err) => {
                    log::error!("{}", err);
                    TranslationValue::empty()
                }
            };
            namespaces.insert(ns.as_str().to_string(), tree);
        }

        Self {
            language: lang,
            root: TranslationValue::Map(namespaces),
        }
    }

    pub fn language(&self) -> Language {
        self.language
    }

    /// Translate a `namespace.key.path`; unresolved keys come back unchanged.
    pub fn t<'a>(&'a self, key: &'a str) -> &'a str {
        translate(&self.root, key)
    }

    /// Strict lookup, for callers that supply their own fallback.
    pub fn get(&self, key: &str) -> Option<&str> {
        resolve(&self.root, key)
    }

    /// The tree of a single namespace.
    pub fn namespace(&self, ns: Namespace) -> &TranslationValue {
        static EMPTY: TranslationValue = TranslationValue::Other(serde_json::Value::Null);
        self.root.child(ns.as_str()).unwrap_or(&EMPTY)
    }

    /// Title, description and keywords for a section, falling back to the
    /// home entry.
    pub fn seo(&self, section: Section) -> SeoStrings {
        let seo = self.namespace(Namespace::Seo);
        let entry = seo
            .child(section.as_str())
            .or_else(|| seo.child(Section::Home.as_str()));

        match entry {
            Some(entry) => SeoStrings::from_entry(entry),
            None => SeoStrings::default(),
        }
    }
}

// -----------------------------------------------------------------------------
// 5. SEO Strings
// -----------------------------------------------------------------------------

/// Head metadata for one section.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SeoStrings {
    pub title: String,
    pub description: String,
    pub keywords: String,
}

impl SeoStrings {
    fn from_entry(entry: &TranslationValue) -> Self {
        let field = |name: &str| {
            entry
                .child(name)
                .and_then(TranslationValue::as_text)
                .unwrap_or_default()
                .to_string()
        };

        Self {
            title: field("title"),
            description: field("description"),
            keywords: field("keywords"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_embedded_locales_parse() {
        for lang in Language::ALL {
            for ns in Namespace::ALL {
                if let Some(text) = embedded_locale(lang, ns) {
                    let parsed: Result<TranslationValue, _> = serde_json::from_str(text);
                    assert!(parsed.is_ok(), "{}/{} failed to parse", lang, ns.as_str());
                }
            }
        }
    }

    #[test]
    fn test_load_resolves_namespaced_keys() {
        let en = Catalog::load(Language::En);
        assert_eq!(en.language(), Language::En);
        assert_eq!(en.t("navigation.home"), "Home");
        assert_eq!(en.t("common.buttons.getQuote"), "Get Quote");

        let es = Catalog::load(Language::Es);
        assert_eq!(es.t("navigation.home"), "Inicio");
        assert_eq!(es.t("common.buttons.getQuote"), "Cotizar");
    }

    #[test]
    fn test_missing_namespace_falls_back_to_english() {
        let es = Catalog::load(Language::Es);
        let en = Catalog::load(Language::En);
        assert_eq!(es.namespace(Namespace::Clients), en.namespace(Namespace::Clients));
        assert_eq!(es.t("clients.title"), en.t("clients.title"));
    }

    #[test]
    fn test_broken_file_falls_back_then_empties() {
        let source = |lang: Language, ns: Namespace| match (lang, ns) {
            (Language::Es, Namespace::Home) => Some("{ not json"),
            (Language::En, Namespace::Home) => Some(r#"{"hero":{"title":"Hello"}}"#),
            (Language::En, Namespace::Common) => Some("[1, 2"),
            (_, _) => None,
        };

        let catalog = Catalog::load_with(Language::Es, source);
        assert_eq!(catalog.t("home.hero.title"), "Hello");
        assert_eq!(catalog.namespace(Namespace::Common), &TranslationValue::empty());
        assert_eq!(catalog.t("common.anything"), "common.anything");

        let english = Catalog::load_with(Language::En, source);
        assert_eq!(english.namespace(Namespace::Common), &TranslationValue::empty());
    }

    #[test]
    fn test_unknown_keys_return_key() {
        let catalog = Catalog::load(Language::En);
        assert_eq!(catalog.t("home.hero.nope"), "home.hero.nope");
        assert_eq!(catalog.get("home.hero.nope"), None);
        assert_eq!(catalog.t("navigation"), "navigation");
    }

    #[test]
    fn test_seo_falls_back_to_home() {
        let source = |_: Language, ns: Namespace| match ns {
            Namespace::Seo => Some(
                r#"{
                    "home": {"title": "Home title", "description": "d", "keywords": "k"},
                    "contact": {"title": "Contact title"}
                }"#,
            ),
            _ => None,
        };
        let catalog = Catalog::load_with(Language::En, source);

        let contact = catalog.seo(Section::Contact);
        assert_eq!(contact.title, "Contact title");
        assert_eq!(contact.description, "");

        let mission = catalog.seo(Section::Mission);
        assert_eq!(mission.title, "Home title");
        assert_eq!(mission.keywords, "k");

        let empty = Catalog::load_with(Language::En, |_, _| None);
        assert_eq!(empty.seo(Section::Home), SeoStrings::default());
    }
}
