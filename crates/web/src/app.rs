// =============================================================================
// Mapea Web - Main App Component
// =============================================================================
// Table of Contents:
// 1. Imports
// 2. Language Bootstrap
// 3. App Component
// =============================================================================

use leptos::prelude::*;
use leptos_meta::{provide_meta_context, Meta, Title};

use crate::browser::{Browser, HistoryState, WebBrowser};
use crate::components::{Footer, SiteNav};
use crate::config::SiteConfig;
use crate::i18n::{bootstrap_redirect, preferred_language, I18n, Language};
use crate::pages::LandingPage;
use crate::router::{section_from_path, section_url, use_section_router, Section};
use crate::state::AppState;

// -----------------------------------------------------------------------------
// 2. Language Bootstrap
// -----------------------------------------------------------------------------

/// Pick the page language and make sure the address bar carries its prefix.
fn bootstrap_language(config: &SiteConfig) -> Language {
    let language = preferred_language(&WebBrowser, config.language_storage_key);

    if let Some(target) = bootstrap_redirect(&WebBrowser, language) {
        let state = HistoryState {
            section: section_from_path(&target),
        };
        if let Err(err) = WebBrowser.replace_state(&state, &target) {
            log::warn!("could not add language prefix: {}", err);
        }
    }
    language
}

// -----------------------------------------------------------------------------
// 3. App Component
// -----------------------------------------------------------------------------

/// Root application component.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = SiteConfig::from_env();
    let language = bootstrap_language(&config);
    log::info!("rendering {} site ({:?})", language, config.environment);

    let i18n = I18n::new(language, config.language_storage_key);
    let router = use_section_router(language, Section::Home, config.router.clone());

    let site_url = config.site_url.trim_end_matches('/').to_string();

    provide_context(i18n);
    provide_context(AppState::new(config, i18n, router));

    // Head metadata follows the section in view.
    let active = router.active_section();
    let title = move || i18n.seo(active.get()).title;
    let description = move || i18n.seo(active.get()).description;
    let keywords = move || i18n.seo(active.get()).keywords;
    let canonical = move || format!("{}{}", site_url, section_url(language, active.get()));

    view! {
        <Title text=title />
        <Meta name="description" content=description />
        <Meta name="keywords" content=keywords />
        <Meta property="og:locale" content=language.og_locale() />
        <Meta property="og:url" content=canonical />

        <div class="site" lang=language.code()>
            <SiteNav />
            <LandingPage />
            <Footer />
        </div>
    }
}
