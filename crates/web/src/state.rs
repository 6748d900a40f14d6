// =============================================================================
// Mapea Web - Global Application State
// =============================================================================
// Table of Contents:
// 1. App State
// 2. Context Access
// =============================================================================

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::i18n::I18n;
use crate::router::SectionRouterHandle;

// -----------------------------------------------------------------------------
// 1. App State
// -----------------------------------------------------------------------------

/// Global application state provided via Leptos context.
#[derive(Clone)]
pub struct AppState {
    /// Build-time site configuration.
    pub config: SiteConfig,

    /// Active language and translations.
    pub i18n: I18n,

    /// The page's section router. Sole writer of the active section.
    pub router: SectionRouterHandle,

    /// Whether the mobile drawer is open.
    pub menu_open: RwSignal<bool>,
}

impl AppState {
    pub fn new(config: SiteConfig, i18n: I18n, router: SectionRouterHandle) -> Self {
        Self {
            config,
            i18n,
            router,
            menu_open: RwSignal::new(false),
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Context Access
// -----------------------------------------------------------------------------

/// The [`AppState`] provided by the app root.
pub fn use_app_state() -> AppState {
    expect_context::<AppState>()
}
