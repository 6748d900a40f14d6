// =============================================================================
// Mapea Web - Supported Languages
// =============================================================================
// Table of Contents:
// 1. Language
// 2. Path Helpers
// =============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// -----------------------------------------------------------------------------
// 1. Language
// -----------------------------------------------------------------------------

/// A site language. The set is closed: English and Spanish.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    En,
    Es,
}

impl Language {
    /// All supported languages, default first.
    pub const ALL: [Language; 2] = [Language::En, Language::Es];

    pub const DEFAULT: Language = Language::En;

    /// Two-letter code used in URLs and storage.
    pub fn code(&self) -> &'static str {
        match self {
            Language::En => "en",
            Language::Es => "es",
        }
    }

    /// Parse an exact two-letter code.
    pub fn from_code(code: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.code() == code)
    }

    /// The other language, for the single-button switcher.
    pub fn toggled(&self) -> Self {
        match self {
            Language::En => Language::Es,
            Language::Es => Language::En,
        }
    }

    /// Open Graph locale tag.
    pub fn og_locale(&self) -> &'static str {
        match self {
            Language::En => "en_US",
            Language::Es => "es_ES",
        }
    }

    /// Name of the language in itself.
    pub fn native_name(&self) -> &'static str {
        match self {
            Language::En => "English",
            Language::Es => "Español",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

// -----------------------------------------------------------------------------
// 2. Path Helpers
// -----------------------------------------------------------------------------

/// Language named by the first path segment, if it is a supported code.
pub fn language_prefix(path: &str) -> Option<Language> {
    path.split('/')
        .find(|segment| !segment.is_empty())
        .and_then(Language::from_code)
}

/// Resolve the page language from the URL: path prefix first, then the
/// `lang` query parameter, then the default.
pub fn language_from_path(path: &str, lang_query: Option<&str>) -> Language {
    language_prefix(path)
        .or_else(|| lang_query.and_then(Language::from_code))
        .unwrap_or(Language::DEFAULT)
}

/// Rewrite `path` under `lang`.
///
/// A leading segment that is exactly a supported code is replaced. Anything
/// else is kept as is and the new prefix is put in front of it.
pub fn localized_path(path: &str, lang: Language) -> String {
    let trimmed = path.trim_start_matches('/');
    let (first, rest) = match trimmed.find('/') {
        Some(idx) => (&trimmed[..idx], &trimmed[idx..]),
        None => (trimmed, ""),
    };

    if Language::from_code(first).is_some() {
        format!("/{}{}", lang.code(), rest)
    } else if trimmed.is_empty() {
        format!("/{}", lang.code())
    } else {
        format!("/{}/{}", lang.code(), trimmed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_code_round_trip_and_unknown() {
        for lang in Language::ALL {
            assert_eq!(Language::from_code(lang.code()), Some(lang));
        }
        assert_eq!(Language::from_code("fr"), None);
        assert_eq!(Language::from_code("EN"), None);
        assert_eq!(Language::from_code("eng"), None);
    }

    #[test]
    fn test_toggle_and_locale() {
        assert_eq!(Language::En.toggled(), Language::Es);
        assert_eq!(Language::Es.toggled(), Language::En);
        assert_eq!(Language::Es.og_locale(), "es_ES");
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(serde_json::to_string(&Language::Es).unwrap(), "\"es\"");
        let lang: Language = serde_json::from_str("\"en\"").unwrap();
        assert_eq!(lang, Language::En);
    }

    #[test]
    fn test_language_from_path() {
        assert_eq!(language_from_path("/es/services", None), Language::Es);
        assert_eq!(language_from_path("/en", Some("es")), Language::En);
        assert_eq!(language_from_path("/", Some("es")), Language::Es);
        assert_eq!(language_from_path("/", Some("de")), Language::En);
        assert_eq!(language_from_path("/español/x", None), Language::En);
    }

    #[test]
    fn test_localized_path_replaces_known_prefix() {
        assert_eq!(localized_path("/en/services", Language::Es), "/es/services");
        assert_eq!(localized_path("/es", Language::En), "/en");
        assert_eq!(localized_path("/es/", Language::En), "/en/");
    }

    #[test]
    fn test_localized_path_prefixes_unknown() {
        assert_eq!(localized_path("/", Language::Es), "/es");
        assert_eq!(localized_path("/services", Language::Es), "/es/services");
        assert_eq!(localized_path("/fr/contact", Language::En), "/en/fr/contact");
        assert_eq!(localized_path("/english", Language::Es), "/es/english");
    }
}
