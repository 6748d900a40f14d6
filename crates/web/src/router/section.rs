// =============================================================================
// Mapea Web - Page Sections
// =============================================================================
// Table of Contents:
// 1. Section
// 2. URL Helpers
// =============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::i18n::Language;

// -----------------------------------------------------------------------------
// 1. Section
// -----------------------------------------------------------------------------

/// A vertically stacked region of the landing page. Each renders an element
/// whose id is [`Section::as_str`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    #[default]
    Home,
    Mission,
    Services,
    Contact,
}

impl Section {
    /// Sections in page order.
    pub const ALL: [Section; 4] = [
        Section::Home,
        Section::Mission,
        Section::Services,
        Section::Contact,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Section::Home => "home",
            Section::Mission => "mission",
            Section::Services => "services",
            Section::Contact => "contact",
        }
    }

    pub fn from_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|section| section.as_str() == id)
    }

    /// Translation key of the nav label.
    pub fn nav_key(&self) -> &'static str {
        match self {
            Section::Home => "navigation.home",
            Section::Mission => "navigation.mission",
            Section::Services => "navigation.services",
            Section::Contact => "navigation.contact",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// -----------------------------------------------------------------------------
// 2. URL Helpers
// -----------------------------------------------------------------------------

/// Section named by a `/{lang}/{section}` path.
///
/// Only the segment after the language prefix counts; later segments are
/// ignored. No second segment, or an unknown one, means home.
pub fn section_from_path(path: &str) -> Section {
    path.split('/')
        .filter(|segment| !segment.is_empty())
        .nth(1)
        .and_then(Section::from_id)
        .unwrap_or_default()
}

/// Address of a section: `/{lang}/{section}`.
pub fn section_url(lang: Language, section: Section) -> String {
    format!("/{}/{}", lang.code(), section.as_str())
}
