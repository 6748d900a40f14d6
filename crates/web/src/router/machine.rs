// =============================================================================
// Mapea Web - Section Router State Machine
// =============================================================================
// Table of Contents:
// 1. Visibility Entries
// 2. SectionRouter
// 3. Transitions
// =============================================================================

use super::section::{section_from_path, section_url, Section};
use crate::browser::{Browser, HistoryState, ScrollMode};
use crate::config::RouterOptions;
use crate::i18n::Language;

// -----------------------------------------------------------------------------
// 1. Visibility Entries
// -----------------------------------------------------------------------------

/// One intersection observation for a section anchor.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Visibility {
    pub section: Section,
    pub intersecting: bool,
}

// -----------------------------------------------------------------------------
// 2. SectionRouter
// -----------------------------------------------------------------------------

/// Owner of `activeSection`. Keeps the address bar and history in step with
/// it.
///
/// Every transition returns the resulting active section. Browser failures
/// are logged and never surface; without a browser the router stays on
/// [`Section::Home`].
#[derive(Debug)]
pub struct SectionRouter<B> {
    browser: B,
    language: Language,
    options: RouterOptions,
    active: Section,
}

impl<B: Browser> SectionRouter<B> {
    pub fn new(browser: B, language: Language, initial: Section, options: RouterOptions) -> Self {
        Self {
            browser,
            language,
            options,
            active: initial,
        }
    }

    pub fn active_section(&self) -> Section {
        self.active
    }

    pub fn browser(&self) -> &B {
        &self.browser
    }

    fn section_from_location(&self) -> Section {
        self.browser
            .pathname()
            .map(|path| section_from_path(&path))
            .unwrap_or_default()
    }

    fn scroll(&self, section: Section, mode: ScrollMode) {
        if !self.browser.scroll_to_section(section, mode) {
            log::debug!("#{} not rendered yet; scroll skipped", section);
        }
    }
}

// -----------------------------------------------------------------------------
// 3. Transitions
// -----------------------------------------------------------------------------

impl<B: Browser> SectionRouter<B> {
    /// Initial load: take the section from the URL and, unless it is home,
    /// scroll there once layout has settled.
    pub fn initialize(&mut self) -> Section {
        let section = self.section_from_location();
        self.active = section;
        log::debug!("router mounted on {}", section);

        if section != Section::Home {
            self.browser
                .schedule_scroll(section, self.options.settle_delay_ms);
        }
        section
    }

    /// Explicit navigation: push a history entry, scroll, and switch.
    pub fn navigate_to_section(&mut self, section: Section, smooth: bool) -> Section {
        let url = section_url(self.language, section);
        if let Err(err) = self.browser.push_state(&HistoryState { section }, &url) {
            log::warn!("push_state({}) failed: {}", url, err);
        }

        self.scroll(section, ScrollMode::from_smooth(smooth));
        self.active = section;
        log::debug!("navigated to {}", section);
        section
    }

    /// A section's anchor entered the trigger band. Rewrites the current
    /// history entry when the section changes. Returns the new section if it
    /// changed.
    pub fn on_section_visible(&mut self, section: Section) -> Option<Section> {
        if section == self.active {
            return None;
        }

        let url = section_url(self.language, section);
        if let Err(err) = self.browser.replace_state(&HistoryState { section }, &url) {
            log::warn!("replace_state({}) failed: {}", url, err);
        }
        self.active = section;
        Some(section)
    }

    /// One observer callback batch. Entries are applied in order, so when
    /// several sections intersect the last one wins.
    pub fn on_intersections<I>(&mut self, batch: I) -> Option<Section>
    where
        I: IntoIterator<Item = Visibility>,
    {
        let mut changed = None;
        for entry in batch.into_iter().filter(|entry| entry.intersecting) {
            if let Some(section) = self.on_section_visible(entry.section) {
                changed = Some(section);
            }
        }
        changed.map(|_| self.active)
    }

    /// Back/forward. The history payload wins; the URL is the fallback.
    pub fn on_pop_state(&mut self, state: Option<Section>) -> Section {
        let section = state.unwrap_or_else(|| self.section_from_location());
        self.active = section;
        self.scroll(section, ScrollMode::Instant);
        log::debug!("history pop to {}", section);
        section
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browser::{HistoryKind, MemoryBrowser};

    fn router(path: &str, lang: Language) -> SectionRouter<MemoryBrowser> {
        SectionRouter::new(MemoryBrowser::at(path), lang, Section::Home, RouterOptions::default())
    }

    #[test]
    fn test_initialize_from_section_path() {
        let mut router = router("/en/services", Language::En);
        assert_eq!(router.initialize(), Section::Services);
        assert_eq!(router.active_section(), Section::Services);
        assert_eq!(router.browser().scheduled_scrolls(), vec![(Section::Services, 100)]);
        assert!(router.browser().history().is_empty());
    }

    #[test]
    fn test_initialize_without_section_is_home() {
        let mut router = router("/en", Language::En);
        assert_eq!(router.initialize(), Section::Home);
        assert!(router.browser().scheduled_scrolls().is_empty());
    }

    #[test]
    fn test_initialize_detached_defaults_to_home() {
        let mut router = SectionRouter::new(
            MemoryBrowser::detached(),
            Language::Es,
            Section::Contact,
            RouterOptions::default(),
        );
        assert_eq!(router.active_section(), Section::Contact);
        assert_eq!(router.initialize(), Section::Home);
        assert!(router.browser().scheduled_scrolls().is_empty());
    }

    #[test]
    fn test_navigate_pushes_language_prefixed_url() {
        let mut router = router("/es", Language::Es);
        router.initialize();

        assert_eq!(router.navigate_to_section(Section::Contact, true), Section::Contact);
        assert_eq!(router.active_section(), Section::Contact);

        let history = router.browser().history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, HistoryKind::Push);
        assert_eq!(history[0].url, "/es/contact");
        assert_eq!(history[0].state.section, Section::Contact);
        assert_eq!(router.browser().scrolls(), vec![(Section::Contact, ScrollMode::Smooth)]);
        assert_eq!(router.browser().pathname().as_deref(), Some("/es/contact"));
    }

    #[test]
    fn test_navigate_twice_is_stable() {
        let mut router = router("/en", Language::En);
        router.navigate_to_section(Section::Mission, false);
        router.navigate_to_section(Section::Mission, false);
        assert_eq!(router.active_section(), Section::Mission);
        assert_eq!(router.browser().history().len(), 2);
        assert!(router
            .browser()
            .scrolls()
            .iter()
            .all(|(_, mode)| *mode == ScrollMode::Instant));
    }

    #[test]
    fn test_navigate_without_anchor_still_updates() {
        let browser = MemoryBrowser::at("/en").without_anchor(Section::Services);
        let mut router =
            SectionRouter::new(browser, Language::En, Section::Home, RouterOptions::default());

        router.navigate_to_section(Section::Services, true);
        assert_eq!(router.active_section(), Section::Services);
        assert_eq!(router.browser().history()[0].url, "/en/services");
        assert!(router.browser().scrolls().is_empty());
    }

    #[test]
    fn test_navigate_detached_still_updates_state() {
        let mut router = SectionRouter::new(
            MemoryBrowser::detached(),
            Language::En,
            Section::Home,
            RouterOptions::default(),
        );
        assert_eq!(router.navigate_to_section(Section::Contact, true), Section::Contact);
        assert_eq!(router.active_section(), Section::Contact);
        assert!(router.browser().history().is_empty());
    }

    #[test]
    fn test_visible_section_replaces_history() {
        let mut router = router("/en", Language::En);
        router.initialize();

        assert_eq!(router.on_section_visible(Section::Mission), Some(Section::Mission));
        assert_eq!(router.on_section_visible(Section::Mission), None);

        let history = router.browser().history();
        assert_eq!(history.len(), 1);
        assert_eq!(history[0].kind, HistoryKind::Replace);
        assert_eq!(history[0].url, "/en/mission");
    }

    #[test]
    fn test_intersection_batch_last_wins() {
        let mut router = router("/en", Language::En);
        let batch = [
            Visibility { section: Section::Mission, intersecting: true },
            Visibility { section: Section::Contact, intersecting: false },
            Visibility { section: Section::Services, intersecting: true },
        ];

        assert_eq!(router.on_intersections(batch), Some(Section::Services));
        assert_eq!(router.active_section(), Section::Services);

        let urls: Vec<_> = router.browser().history().into_iter().map(|e| e.url).collect();
        assert_eq!(urls, vec!["/en/mission", "/en/services"]);
    }

    #[test]
    fn test_intersection_batch_without_change() {
        let mut router = router("/en", Language::En);
        let batch = [
            Visibility { section: Section::Home, intersecting: true },
            Visibility { section: Section::Mission, intersecting: false },
        ];
        assert_eq!(router.on_intersections(batch), None);
        assert!(router.browser().history().is_empty());
    }

    #[test]
    fn test_pop_state_uses_payload_and_scrolls_instantly() {
        let mut router = router("/en/contact", Language::En);
        router.initialize();

        assert_eq!(router.on_pop_state(Some(Section::Mission)), Section::Mission);
        assert_eq!(router.active_section(), Section::Mission);
        assert_eq!(router.browser().scrolls(), vec![(Section::Mission, ScrollMode::Instant)]);
        assert!(router.browser().history().is_empty());
    }

    #[test]
    fn test_pop_state_falls_back_to_url() {
        let mut router = router("/en", Language::En);
        router.browser().set_path("/en/services/details");
        assert_eq!(router.on_pop_state(None), Section::Services);

        router.browser().set_path("/en");
        assert_eq!(router.on_pop_state(None), Section::Home);
    }
}
