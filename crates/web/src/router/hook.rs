// =============================================================================
// Mapea Web - Section Router Binding
// =============================================================================
// Table of Contents:
// 1. Router Handle
// 2. Browser Subscriptions
// 3. use_section_router
// =============================================================================

use leptos::prelude::*;
use wasm_bindgen::prelude::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, PopStateEvent,
};

use super::machine::{SectionRouter, Visibility};
use super::section::Section;
use crate::browser::web::section_from_js_state;
use crate::browser::WebBrowser;
use crate::config::RouterOptions;
use crate::i18n::Language;
use crate::utils::{self, js_error_text};

// -----------------------------------------------------------------------------
// 1. Router Handle
// -----------------------------------------------------------------------------

/// Reactive handle on the page's [`SectionRouter`].
///
/// The handle is the only writer of the active-section signal; components
/// read it through [`SectionRouterHandle::active_section`] and request
/// changes through [`SectionRouterHandle::navigate_to_section`].
#[derive(Clone, Copy)]
pub struct SectionRouterHandle {
    active: RwSignal<Section>,
    router: StoredValue<SectionRouter<WebBrowser>, LocalStorage>,
}

impl SectionRouterHandle {
    fn new(language: Language, initial: Section, options: RouterOptions) -> Self {
        let router = SectionRouter::new(WebBrowser, language, initial, options);
        Self {
            active: RwSignal::new(initial),
            router: StoredValue::new_local(router),
        }
    }

    /// The active section, read-only.
    pub fn active_section(&self) -> ReadSignal<Section> {
        self.active.read_only()
    }

    /// Tracked check used for nav highlighting.
    pub fn is_active(&self, section: Section) -> bool {
        self.active.get() == section
    }

    pub fn navigate_to_section(&self, section: Section, smooth: bool) {
        self.apply(|router| Some(router.navigate_to_section(section, smooth)));
    }

    fn initialize(&self) {
        self.apply(|router| Some(router.initialize()));
    }

    fn on_intersections(&self, batch: Vec<Visibility>) {
        self.apply(|router| router.on_intersections(batch));
    }

    fn on_pop_state(&self, state: Option<Section>) {
        self.apply(|router| Some(router.on_pop_state(state)));
    }

    /// Run a transition, then mirror its result into the signal once the
    /// router is no longer borrowed.
    fn apply(&self, transition: impl FnOnce(&mut SectionRouter<WebBrowser>) -> Option<Section>) {
        let next = self.router.try_update_value(transition).flatten();
        if let Some(next) = next {
            if self.active.get_untracked() != next {
                self.active.set(next);
            }
        }
    }
}

// -----------------------------------------------------------------------------
// 2. Browser Subscriptions
// -----------------------------------------------------------------------------

type IntersectCallback = Closure<dyn FnMut(js_sys::Array, IntersectionObserver)>;
type PopStateCallback = Closure<dyn FnMut(PopStateEvent)>;

/// The intersection observer and popstate listener feeding one router.
/// Dropping it disconnects both.
pub struct RouterSubscriptions {
    observer: IntersectionObserver,
    _on_intersect: IntersectCallback,
    on_pop_state: PopStateCallback,
}

impl RouterSubscriptions {
    fn install(handle: SectionRouterHandle, options: &RouterOptions) -> Option<Self> {
        let window = utils::window()?;

        let on_intersect =
            IntersectCallback::new(move |entries: js_sys::Array, _: IntersectionObserver| {
                let batch = entries
                    .iter()
                    .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                    .filter_map(|entry| {
                        Some(Visibility {
                            section: Section::from_id(&entry.target().id())?,
                            intersecting: entry.is_intersecting(),
                        })
                    })
                    .collect();
                handle.on_intersections(batch);
            });

        let init = IntersectionObserverInit::new();
        init.set_root_margin(options.root_margin);
        init.set_threshold(&JsValue::from_f64(options.threshold));

        let callback: &js_sys::Function = on_intersect.as_ref().unchecked_ref();
        let observer = match IntersectionObserver::new_with_options(callback, &init) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!("IntersectionObserver unavailable: {}", js_error_text(&err));
                return None;
            }
        };

        for section in Section::ALL {
            if let Some(element) = utils::element_by_id(section.as_str()) {
                observer.observe(&element);
            }
        }

        let on_pop_state = PopStateCallback::new(move |event: PopStateEvent| {
            handle.on_pop_state(section_from_js_state(&event.state()));
        });

        let listener: &js_sys::Function = on_pop_state.as_ref().unchecked_ref();
        if let Err(err) = window.add_event_listener_with_callback("popstate", listener) {
            log::warn!("popstate listener failed: {}", js_error_text(&err));
            observer.disconnect();
            return None;
        }

        Some(Self {
            observer,
            _on_intersect: on_intersect,
            on_pop_state,
        })
    }
}

impl Drop for RouterSubscriptions {
    fn drop(&mut self) {
        self.observer.disconnect();
        if let Some(window) = utils::window() {
            let listener: &js_sys::Function = self.on_pop_state.as_ref().unchecked_ref();
            let _ = window.remove_event_listener_with_callback("popstate", listener);
        }
        log::debug!("section router unsubscribed");
    }
}

// -----------------------------------------------------------------------------
// 3. use_section_router
// -----------------------------------------------------------------------------

/// Create the page's section router.
///
/// After mount it reads the section from the URL and starts watching the
/// section anchors and history pops. Both watches end when the owning view
/// is cleaned up.
pub fn use_section_router(
    language: Language,
    initial: Section,
    options: RouterOptions,
) -> SectionRouterHandle {
    let handle = SectionRouterHandle::new(language, initial, options.clone());
    let subscriptions = StoredValue::new_local(None::<RouterSubscriptions>);

    Effect::new(move |_| {
        handle.initialize();
        subscriptions.set_value(RouterSubscriptions::install(handle, &options));
    });

    on_cleanup(move || {
        subscriptions.update_value(|subs| {
            subs.take();
        });
    });

    handle
}
