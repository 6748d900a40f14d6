// =============================================================================
// Mapea Web - Landing Page
// =============================================================================
// Table of Contents:
// 1. Landing Page
// 2. Home Section
// 3. Mission Section
// 4. Services Section
// 5. Contact Section
// =============================================================================
//
// Each section renders an element whose id is the section id; the router
// scrolls to and observes those elements.

use leptos::prelude::*;

use crate::router::Section;
use crate::state::use_app_state;

// -----------------------------------------------------------------------------
// 1. Landing Page
// -----------------------------------------------------------------------------

/// The single page: every section stacked in order.
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <main class="page page-landing">
            <HomeSection />
            <MissionSection />
            <ServicesSection />
            <ContactSection />
        </main>
    }
}

// -----------------------------------------------------------------------------
// 2. Home Section
// -----------------------------------------------------------------------------

#[component]
fn HomeSection() -> impl IntoView {
    let app_state = use_app_state();
    let i18n = app_state.i18n;
    let router = app_state.router;

    let stats = ["accuracy", "coverage", "delivery"]
        .into_iter()
        .map(|stat| {
            view! {
                <div class="stat-card">
                    <span class="stat-value">{i18n.t(&format!("home.stats.{}.value", stat))}</span>
                    <span class="stat-label">{i18n.t(&format!("home.stats.{}.label", stat))}</span>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id={Section::Home.as_str()} class="section section-home">
            <div class="hero-bg">
                <div class="hero-grid-overlay"></div>
            </div>

            <div class="hero-content">
                <h1 class="hero-title">
                    <span class="hero-line">{i18n.t("home.hero.title.line1")}</span>
                    <span class="hero-line accent">{i18n.t("home.hero.title.line2")}</span>
                </h1>
                <p class="hero-subtitle">{i18n.t("home.hero.subtitle")}</p>
                <button class="btn-primary" on:click=move |_| router.navigate_to_section(Section::Contact, true)>
                    {i18n.t("home.hero.cta")}
                    <span class="btn-icon">"→"</span>
                </button>
            </div>

            <div class="hero-stats">{stats}</div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 3. Mission Section
// -----------------------------------------------------------------------------

#[component]
fn MissionSection() -> impl IntoView {
    let i18n = use_app_state().i18n;

    let values = ["precision", "innovation", "sustainability"]
        .into_iter()
        .map(|value| {
            view! {
                <div class="value-card">
                    <h3>{i18n.t(&format!("mission.values.{}.title", value))}</h3>
                    <p>{i18n.t(&format!("mission.values.{}.description", value))}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id={Section::Mission.as_str()} class="section section-mission">
            <div class="section-header">
                <div class="header-line"></div>
                <h2 class="section-title">{i18n.t("mission.title")}</h2>
                <div class="header-line"></div>
            </div>
            <p class="mission-description">{i18n.t("mission.description")}</p>
            <div class="value-grid">{values}</div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 4. Services Section
// -----------------------------------------------------------------------------

#[component]
fn ServicesSection() -> impl IntoView {
    let i18n = use_app_state().i18n;

    let cards = ["mapping", "cadastral", "territorial", "advisory"]
        .into_iter()
        .map(|service| {
            view! {
                <div class="service-card">
                    <h3>{i18n.t(&format!("services.items.{}.title", service))}</h3>
                    <p>{i18n.t(&format!("services.items.{}.description", service))}</p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section id={Section::Services.as_str()} class="section section-services">
            <div class="section-header">
                <h2 class="section-title">{i18n.t("services.title")}</h2>
                <p class="section-subtitle">{i18n.t("services.subtitle")}</p>
            </div>
            <div class="service-grid">{cards}</div>
        </section>
    }
}

// -----------------------------------------------------------------------------
// 5. Contact Section
// -----------------------------------------------------------------------------

#[component]
fn ContactSection() -> impl IntoView {
    let i18n = use_app_state().i18n;

    let email = i18n.t("contact.info.email");
    let phone = i18n.t("contact.info.phone");
    let mailto = format!("mailto:{}", email);
    let tel = format!("tel:{}", phone.replace('-', ""));

    view! {
        <section id={Section::Contact.as_str()} class="section section-contact">
            <div class="section-header">
                <h2 class="section-title">{i18n.t("contact.title")}</h2>
                <p class="section-subtitle">{i18n.t("contact.subtitle")}</p>
            </div>

            <div class="contact-grid">
                <div class="contact-card">
                    <h3>{i18n.t("contact.methods.email")}</h3>
                    <a href=mailto class="contact-link">{email}</a>
                </div>
                <div class="contact-card">
                    <h3>{i18n.t("contact.methods.phone")}</h3>
                    <a href=tel class="contact-link">{phone}</a>
                </div>
                <div class="contact-card">
                    <h3>{i18n.t("contact.methods.location")}</h3>
                    <p>{i18n.t("contact.info.location")}</p>
                </div>
            </div>
        </section>
    }
}
