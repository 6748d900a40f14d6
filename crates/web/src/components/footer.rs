// =============================================================================
// Mapea Web - Footer Component
// =============================================================================

use leptos::prelude::*;

use super::language_switcher::{LanguageSwitcher, SwitcherVariant};
use crate::router::Section;
use crate::state::use_app_state;

/// Site footer with section shortcuts and the language buttons.
#[component]
pub fn Footer() -> impl IntoView {
    let app_state = use_app_state();
    let i18n = app_state.i18n;
    let router = app_state.router;

    let links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button class="footer-link" on:click=move |_| router.navigate_to_section(section, true)>
                    {i18n.t(section.nav_key())}
                </button>
            }
        })
        .collect_view();

    view! {
        <footer class="site-footer">
            <div class="footer-brand">
                <img src="/assets/logos/mapea.svg" alt="MAPEA" class="footer-logo" />
                <p class="footer-tagline">{i18n.t("footer.tagline")}</p>
            </div>

            <nav class="footer-links">{links}</nav>

            <div class="footer-bottom">
                <p>"© MAPEA. "{i18n.t("footer.rights")}</p>
                <LanguageSwitcher variant=SwitcherVariant::Buttons show_labels=true />
            </div>
        </footer>
    }
}
