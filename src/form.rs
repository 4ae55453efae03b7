//! The text form component: draft, submitted list, debounced search and the
//! focus-driven results dropdown.
//!
//! All state is owned by one `TextForm` and changed only through its handlers.
//! Front-ends own the event loop and feed keystrokes, focus changes and the
//! current time in; they read back `dropdown()` and `items()` to render.

use crate::debounce::Debouncer;
use crate::highlight::Highlighter;
use crate::search::{self, Query};
use std::time::{Duration, Instant};

/// Placeholder shown in the dropdown when a query matches nothing
pub const NO_RESULTS: &str = "No results found.";

/// What the results dropdown should show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dropdown<'a> {
    Hidden,
    NoResults,
    Results(&'a [String]),
}

impl Dropdown<'_> {
    pub fn is_visible(&self) -> bool {
        !matches!(self, Dropdown::Hidden)
    }
}

#[derive(Debug, Clone)]
pub struct TextForm {
    draft: String,
    items: Vec<String>,
    query: String,
    results: Vec<String>,
    /// Built for the query that produced `results`
    highlighter: Option<Highlighter>,
    focused: bool,
    debounce: Debouncer,
}

impl Default for TextForm {
    fn default() -> Self {
        Self::new(Duration::from_millis(crate::DEFAULT_DEBOUNCE_MS))
    }
}

impl TextForm {
    pub fn new(debounce_delay: Duration) -> Self {
        Self {
            draft: String::new(),
            items: Vec::new(),
            query: String::new(),
            results: Vec::new(),
            highlighter: None,
            focused: false,
            debounce: Debouncer::new(debounce_delay),
        }
    }

    // --- Input/List ---

    pub fn draft(&self) -> &str {
        &self.draft
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }

    pub fn update_draft(&mut self, value: impl Into<String>) {
        self.draft = value.into();
    }

    /// Append the draft to the list if it is not blank.
    ///
    /// The stored entry keeps its surrounding whitespace; only the emptiness
    /// check trims. Returns whether anything was appended.
    pub fn submit(&mut self) -> bool {
        if self.draft.trim().is_empty() {
            log::debug!(target: "form", "ignored blank submit");
            return false;
        }
        let entry = std::mem::take(&mut self.draft);
        log::debug!(target: "form", "appended entry #{} ({} bytes)", self.items.len(), entry.len());
        self.items.push(entry);
        true
    }

    // --- Search ---

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn results(&self) -> &[String] {
        &self.results
    }

    /// Highlighter matching the current results. `None` before the first
    /// recompute, or when the pattern could not be built.
    pub fn highlighter(&self) -> Option<&Highlighter> {
        self.highlighter.as_ref()
    }

    pub fn debounce_delay(&self) -> Duration {
        self.debounce.delay()
    }

    /// Store the new query and restart the debounce window.
    pub fn update_query(&mut self, value: impl Into<String>, now: Instant) {
        self.query = value.into();
        if self.debounce.delay().is_zero() {
            self.debounce.cancel();
            self.recompute();
        } else {
            self.debounce.schedule(now);
        }
    }

    /// Run the pending recompute if its quiet window has elapsed.
    pub fn tick(&mut self, now: Instant) -> bool {
        if self.debounce.poll(now) {
            self.recompute();
            true
        } else {
            false
        }
    }

    /// Run any pending recompute immediately.
    pub fn flush(&mut self) {
        if self.debounce.is_pending() {
            self.debounce.cancel();
            self.recompute();
        }
    }

    pub fn has_pending_search(&self) -> bool {
        self.debounce.is_pending()
    }

    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    fn recompute(&mut self) {
        let query = Query::parse(&self.query);
        self.results = search::filter(&self.items, &query);
        log::debug!(
            target: "search",
            "recomputed: {} term(s), {} of {} entries",
            query.terms().len(),
            self.results.len(),
            self.items.len()
        );

        self.highlighter = match Highlighter::from_query(query) {
            Ok(h) => Some(h),
            Err(e) => {
                log::warn!(target: "search", "highlighting disabled: {}", e);
                None
            }
        };
    }

    // --- Focus ---

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    pub fn on_blur(&mut self) {
        self.focused = false;
    }

    pub fn dropdown(&self) -> Dropdown<'_> {
        if !self.focused || self.query.trim().is_empty() {
            Dropdown::Hidden
        } else if self.results.is_empty() {
            Dropdown::NoResults
        } else {
            Dropdown::Results(&self.results)
        }
    }

    /// Release the pending recompute; call when the component goes away.
    pub fn unmount(&mut self) {
        self.debounce.cancel();
    }
}
