// =============================================================================
// Mapea Web - Language Switcher
// =============================================================================

use leptos::prelude::*;

use crate::i18n::{use_i18n, Language};

/// Switcher layouts.
#[derive(Clone, Copy, Default, PartialEq)]
pub enum SwitcherVariant {
    /// Single globe button that flips to the other language.
    #[default]
    Minimal,
    /// One button per language.
    Buttons,
}

/// Switch the site language. Picking the current language is a no-op.
#[component]
pub fn LanguageSwitcher(
    #[prop(optional)] variant: SwitcherVariant,
    #[prop(optional)] show_labels: bool,
) -> impl IntoView {
    let i18n = use_i18n();
    let language = i18n.language();

    match variant {
        SwitcherVariant::Minimal => {
            let label = i18n.t("common.language.switchTo");
            view! {
                <button
                    class="lang-toggle"
                    aria-label=label.clone()
                    title=label
                    on:click=move |_| i18n.change_language(language.get_untracked().toggled())
                >
                    <svg viewBox="0 0 24 24" fill="none" stroke="currentColor" stroke-width="2" stroke-linecap="round" stroke-linejoin="round">
                        <circle cx="12" cy="12" r="10"></circle>
                        <path d="M2 12h20"></path>
                        <path d="M12 2a15.3 15.3 0 0 1 4 10 15.3 15.3 0 0 1-4 10 15.3 15.3 0 0 1-4-10 15.3 15.3 0 0 1 4-10z"></path>
                    </svg>
                    <span class="lang-code">{move || language.get().toggled().code().to_uppercase()}</span>
                </button>
            }
            .into_any()
        }
        SwitcherVariant::Buttons => {
            let buttons = Language::ALL
                .into_iter()
                .map(|lang| {
                    let text = if show_labels {
                        lang.native_name().to_string()
                    } else {
                        lang.code().to_uppercase()
                    };
                    view! {
                        <button
                            class=move || if language.get() == lang { "lang-btn active" } else { "lang-btn" }
                            on:click=move |_| i18n.change_language(lang)
                        >
                            {text}
                        </button>
                    }
                })
                .collect_view();

            view! { <div class="lang-buttons">{buttons}</div> }.into_any()
        }
    }
}
