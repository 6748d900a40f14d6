// =============================================================================
// Mapea Web - Site Navigation Component
// =============================================================================
// Fixed header with one link per page section. The link for the section in
// view is highlighted. Mobile-responsive with hamburger menu and slide-out
// drawer.
// =============================================================================

use leptos::prelude::*;

use super::language_switcher::{LanguageSwitcher, SwitcherVariant};
use crate::router::Section;
use crate::state::use_app_state;

/// Site navigation bar.
#[component]
pub fn SiteNav() -> impl IntoView {
    let app_state = use_app_state();
    let i18n = app_state.i18n;
    let router = app_state.router;
    let menu_open = app_state.menu_open;

    // Navigate and close the drawer
    let go = move |section: Section| {
        router.navigate_to_section(section, true);
        menu_open.set(false);
    };

    let link_class = move |section: Section, base: &'static str| {
        move || {
            if router.is_active(section) {
                format!("{} active", base)
            } else {
                base.to_string()
            }
        }
    };

    let desktop_links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button class={link_class(section, "nav-link")} on:click=move |_| go(section)>
                    {i18n.t(section.nav_key())}
                </button>
            }
        })
        .collect_view();

    let drawer_links = Section::ALL
        .into_iter()
        .map(|section| {
            view! {
                <button class={link_class(section, "mobile-nav-link")} on:click=move |_| go(section)>
                    {i18n.t(section.nav_key())}
                </button>
            }
        })
        .collect_view();

    view! {
        <header class="site-header">
            <nav class="site-nav">
                // Logo (always visible)
                <button class="nav-logo" aria-label="MAPEA" on:click=move |_| go(Section::Home)>
                    <img src="/assets/logos/mapea.svg" alt="MAPEA" />
                </button>

                // Desktop nav links (hidden on mobile)
                <div class="nav-links desktop-only">{desktop_links}</div>

                <div class="nav-right desktop-only">
                    <button class="nav-cta" on:click=move |_| go(Section::Contact)>
                        {i18n.t("common.buttons.getQuote")}
                    </button>
                    <LanguageSwitcher variant=SwitcherVariant::Minimal />
                </div>

                // Hamburger button (mobile only)
                <button
                    class="hamburger-btn mobile-only"
                    aria-label={i18n.t("common.menu.open")}
                    aria-expanded=move || menu_open.get().to_string()
                    on:click=move |_| menu_open.update(|open| *open = !*open)
                >
                    <span class=move || if menu_open.get() { "hamburger-line open line-1" } else { "hamburger-line line-1" }></span>
                    <span class=move || if menu_open.get() { "hamburger-line open line-2" } else { "hamburger-line line-2" }></span>
                    <span class=move || if menu_open.get() { "hamburger-line open line-3" } else { "hamburger-line line-3" }></span>
                </button>

                // Mobile backdrop (closes menu on tap)
                <div
                    class=move || if menu_open.get() { "mobile-backdrop visible" } else { "mobile-backdrop" }
                    on:click=move |_| menu_open.set(false)
                ></div>

                // Mobile drawer
                <div class=move || if menu_open.get() { "mobile-drawer open" } else { "mobile-drawer" }>
                    <div class="drawer-header">
                        <h2 class="drawer-title">{i18n.t("common.menu.title")}</h2>
                        <LanguageSwitcher variant=SwitcherVariant::Minimal />
                        <button
                            class="drawer-close"
                            aria-label={i18n.t("common.menu.close")}
                            on:click=move |_| menu_open.set(false)
                        >
                            <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                                <path d="M18 6L6 18"></path>
                                <path d="M6 6l12 12"></path>
                            </svg>
                        </button>
                    </div>

                    <nav class="drawer-nav">{drawer_links}</nav>

                    <div class="drawer-divider"></div>

                    <div class="drawer-footer">
                        <button class="drawer-btn primary" on:click=move |_| go(Section::Contact)>
                            {i18n.t("common.buttons.getQuote")}
                        </button>
                    </div>
                </div>
            </nav>
        </header>
    }
}
