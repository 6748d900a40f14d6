// =============================================================================
// Mapea Web - In-Memory Browser
// =============================================================================
// Records every browser call instead of performing it. Backs headless
// rendering and the router tests.
// =============================================================================

use std::cell::RefCell;
use std::collections::{HashMap, HashSet};

use super::{
    language_from_storage, language_to_storage, Browser, BrowserError, HistoryState, ScrollMode,
};
use crate::i18n::Language;
use crate::router::Section;

/// Whether a history write added an entry or rewrote the current one.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum HistoryKind {
    Push,
    Replace,
}

#[derive(Clone, Debug, PartialEq)]
pub struct HistoryEntry {
    pub kind: HistoryKind,
    pub state: HistoryState,
    pub url: String,
}

#[derive(Debug, Default)]
struct Inner {
    path: Option<String>,
    query: HashMap<String, String>,
    anchors: HashSet<Section>,
    history: Vec<HistoryEntry>,
    scrolls: Vec<(Section, ScrollMode)>,
    scheduled: Vec<(Section, u32)>,
    storage: HashMap<String, String>,
    assigned: Vec<String>,
}

/// A browser that lives in memory.
#[derive(Debug, Default)]
pub struct MemoryBrowser {
    inner: RefCell<Inner>,
}

impl MemoryBrowser {
    /// A browser at `path` with every section anchor rendered.
    pub fn at(path: &str) -> Self {
        let browser = Self::default();
        {
            let mut inner = browser.inner.borrow_mut();
            inner.path = Some(path.to_string());
            inner.anchors = Section::ALL.into_iter().collect();
        }
        browser
    }

    /// No window at all: no path, no anchors, every write fails.
    pub fn detached() -> Self {
        Self::default()
    }

    pub fn with_query(self, name: &str, value: &str) -> Self {
        self.inner
            .borrow_mut()
            .query
            .insert(name.to_string(), value.to_string());
        self
    }

    /// Seed `localStorage` with raw text, as left by an earlier visit.
    pub fn with_stored(self, key: &str, raw: &str) -> Self {
        self.inner
            .borrow_mut()
            .storage
            .insert(key.to_string(), raw.to_string());
        self
    }

    /// Remove a section's anchor, as if it had not rendered yet.
    pub fn without_anchor(self, section: Section) -> Self {
        self.inner.borrow_mut().anchors.remove(&section);
        self
    }

    /// Simulate the user pressing back/forward to `path`.
    pub fn set_path(&self, path: &str) {
        self.inner.borrow_mut().path = Some(path.to_string());
    }

    pub fn history(&self) -> Vec<HistoryEntry> {
        self.inner.borrow().history.clone()
    }

    pub fn scrolls(&self) -> Vec<(Section, ScrollMode)> {
        self.inner.borrow().scrolls.clone()
    }

    pub fn scheduled_scrolls(&self) -> Vec<(Section, u32)> {
        self.inner.borrow().scheduled.clone()
    }

    pub fn stored(&self, key: &str) -> Option<String> {
        self.inner.borrow().storage.get(key).cloned()
    }

    /// Hrefs passed to full page navigations, oldest first.
    pub fn assigned(&self) -> Vec<String> {
        self.inner.borrow().assigned.clone()
    }

    fn is_attached(&self) -> bool {
        self.inner.borrow().path.is_some()
    }

    fn write_history(
        &self,
        kind: HistoryKind,
        state: &HistoryState,
        url: &str,
    ) -> Result<(), BrowserError> {
        if !self.is_attached() {
            return Err(BrowserError::Unavailable);
        }
        let mut inner = self.inner.borrow_mut();
        inner.path = Some(url.to_string());
        inner.history.push(HistoryEntry {
            kind,
            state: *state,
            url: url.to_string(),
        });
        Ok(())
    }
}

impl Browser for MemoryBrowser {
    fn pathname(&self) -> Option<String> {
        self.inner.borrow().path.clone()
    }

    fn query_param(&self, name: &str) -> Option<String> {
        self.inner.borrow().query.get(name).cloned()
    }

    fn push_state(&self, state: &HistoryState, url: &str) -> Result<(), BrowserError> {
        self.write_history(HistoryKind::Push, state, url)
    }

    fn replace_state(&self, state: &HistoryState, url: &str) -> Result<(), BrowserError> {
        self.write_history(HistoryKind::Replace, state, url)
    }

    fn scroll_to_section(&self, section: Section, mode: ScrollMode) -> bool {
        let mut inner = self.inner.borrow_mut();
        if !inner.anchors.contains(&section) {
            return false;
        }
        inner.scrolls.push((section, mode));
        true
    }

    fn schedule_scroll(&self, section: Section, delay_ms: u32) {
        if self.is_attached() {
            self.inner.borrow_mut().scheduled.push((section, delay_ms));
        }
    }

    fn store_language(&self, key: &str, lang: Language) -> Result<(), BrowserError> {
        if !self.is_attached() {
            return Err(BrowserError::Unavailable);
        }
        self.inner
            .borrow_mut()
            .storage
            .insert(key.to_string(), language_to_storage(lang).to_string());
        Ok(())
    }

    fn stored_language(&self, key: &str) -> Option<Language> {
        self.inner
            .borrow()
            .storage
            .get(key)
            .and_then(|raw| language_from_storage(raw))
    }

    fn assign_location(&self, href: &str) -> Result<(), BrowserError> {
        if !self.is_attached() {
            return Err(BrowserError::Unavailable);
        }
        self.inner.borrow_mut().assigned.push(href.to_string());
        Ok(())
    }
}
