//! TextForm - text entry form with incremental, highlighting search
//!
//! Submitted strings accumulate in an in-memory list; a search box filters
//! that list as the user types and highlights the matching terms.
//!
//! # Features
//!
//! - **Entry form**: append non-blank drafts, stored verbatim
//! - **Multi-term search**: case-insensitive substring AND across terms
//! - **Highlighting**: structured segments, safe for any query text
//! - **Debounced input**: configurable quiet window before recomputing
//! - **Focus-driven dropdown**: results shown only while the search box has focus
//! - **Front-ends**: terminal UI (ratatui) and desktop GUI (egui)
//!
//! # Example
//!
//! ```
//! use std::time::{Duration, Instant};
//! use textform::{Dropdown, TextForm};
//!
//! let mut form = TextForm::new(Duration::from_millis(250));
//! for entry in ["hello world", "foo", "hello"] {
//!     form.update_draft(entry);
//!     form.submit();
//! }
//!
//! form.on_focus();
//! form.update_query("hello", Instant::now());
//! form.flush();
//!
//! match form.dropdown() {
//!     Dropdown::Results(results) => assert_eq!(results.len(), 2),
//!     other => panic!("unexpected dropdown: {:?}", other),
//! }
//! assert_eq!(textform::highlight("Hello World", "hello"), "<mark>Hello</mark> World");
//! ```

pub mod debounce;
pub mod error;
pub mod form;
pub mod gui;
pub mod highlight;
pub mod logging;
pub mod search;
pub mod tui;

// Re-export main types
pub use debounce::Debouncer;
pub use error::{Result, TextFormError};
pub use form::{Dropdown, TextForm, NO_RESULTS};
pub use highlight::{highlight, Highlighter, Segment};
pub use search::{filter, Query};

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default search debounce in milliseconds
pub const DEFAULT_DEBOUNCE_MS: u64 = 250;

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Quiet window before the search recomputes
    pub debounce_ms: u64,
    /// Log file (defaults to textform.log next to the executable)
    pub log_file: Option<PathBuf>,
    /// Minimum log level
    pub log_level: String,
    /// TUI event poll interval when no search is pending
    pub tick_rate_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            debounce_ms: DEFAULT_DEBOUNCE_MS,
            log_file: None,
            log_level: "info".to_string(),
            tick_rate_ms: 50,
        }
    }
}

impl AppConfig {
    /// Load a JSON config file; missing keys keep their defaults
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .map_err(|e| TextFormError::ConfigReadError(path.to_path_buf(), e))?;
        serde_json::from_str(&text)
            .map_err(|e| TextFormError::ConfigParseError(path.to_path_buf(), e))
    }

    pub fn debounce(&self) -> Duration {
        Duration::from_millis(self.debounce_ms)
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms.max(1))
    }

    /// Build a fresh form using this configuration
    pub fn new_form(&self) -> TextForm {
        TextForm::new(self.debounce())
    }
}
