use crate::tui::input::InputField;
use crate::tui::ui;
use crate::{AppConfig, TextForm};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::DefaultTerminal;
use std::time::{Duration, Instant};

/// Which control receives key presses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusTarget {
    #[default]
    Entry,
    AddButton,
    Search,
    None,
}

impl FocusTarget {
    fn next(self) -> Self {
        match self {
            FocusTarget::Entry => FocusTarget::AddButton,
            FocusTarget::AddButton => FocusTarget::Search,
            FocusTarget::Search | FocusTarget::None => FocusTarget::Entry,
        }
    }

    fn prev(self) -> Self {
        match self {
            FocusTarget::Entry | FocusTarget::None => FocusTarget::Search,
            FocusTarget::AddButton => FocusTarget::Entry,
            FocusTarget::Search => FocusTarget::AddButton,
        }
    }
}

pub struct App {
    pub form: TextForm,

    // Field editing buffers (the form holds the committed values)
    pub entry: InputField,
    pub search: InputField,

    pub focus: FocusTarget,
    pub status_message: String,

    tick_rate: Duration,
    pub should_quit: bool,
}

impl App {
    pub fn new(config: &AppConfig) -> Self {
        Self {
            form: config.new_form(),
            entry: InputField::default(),
            search: InputField::default(),
            focus: FocusTarget::Entry,
            status_message: "Ready".to_string(),
            tick_rate: config.tick_rate(),
            should_quit: false,
        }
    }

    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> crate::Result<()> {
        loop {
            terminal.draw(|frame| ui::draw(frame, self))?;

            let timeout = self.poll_timeout(Instant::now());
            if event::poll(timeout)? {
                if let Event::Key(key) = event::read()? {
                    if key.kind == KeyEventKind::Press {
                        self.handle_key(key, Instant::now());
                    }
                }
            }

            self.form.tick(Instant::now());

            if self.should_quit {
                self.form.unmount();
                return Ok(());
            }
        }
    }

    /// Wait no longer than the tick rate, and wake up in time for a pending search.
    pub fn poll_timeout(&self, now: Instant) -> Duration {
        match self.form.next_deadline() {
            Some(deadline) => deadline.saturating_duration_since(now).min(self.tick_rate),
            None => self.tick_rate,
        }
    }

    pub fn set_focus(&mut self, target: FocusTarget) {
        if self.focus == target {
            return;
        }
        if self.focus == FocusTarget::Search {
            self.form.on_blur();
        }
        if target == FocusTarget::Search {
            self.form.on_focus();
        }
        self.focus = target;
    }

    fn submit(&mut self) {
        if self.form.submit() {
            self.entry.clear();
            self.status_message = format!("{} entries", self.form.items().len());
        } else {
            self.status_message = "Nothing to add".to_string();
        }
    }

    // --- Key handling ---

    pub fn handle_key(&mut self, key: KeyEvent, now: Instant) {
        // Global keys
        match key.code {
            KeyCode::Char('c') | KeyCode::Char('q')
                if key.modifiers.contains(KeyModifiers::CONTROL) =>
            {
                self.should_quit = true;
                return;
            }
            KeyCode::Tab => {
                self.set_focus(self.focus.next());
                return;
            }
            KeyCode::BackTab => {
                self.set_focus(self.focus.prev());
                return;
            }
            KeyCode::Esc => {
                if self.focus == FocusTarget::None {
                    self.should_quit = true;
                } else {
                    self.set_focus(FocusTarget::None);
                }
                return;
            }
            _ => {}
        }

        match self.focus {
            FocusTarget::Entry => self.handle_entry_key(key),
            FocusTarget::AddButton => {
                if matches!(key.code, KeyCode::Enter | KeyCode::Char(' ')) {
                    self.submit();
                }
            }
            FocusTarget::Search => self.handle_search_key(key, now),
            FocusTarget::None => match key.code {
                KeyCode::Char('/') => self.set_focus(FocusTarget::Search),
                KeyCode::Char('i') | KeyCode::Enter => self.set_focus(FocusTarget::Entry),
                _ => {}
            },
        }
    }

    fn handle_entry_key(&mut self, key: KeyEvent) {
        if key.code == KeyCode::Enter {
            self.submit();
        } else if self.entry.handle_key(key) {
            self.form.update_draft(self.entry.value.clone());
        }
    }

    fn handle_search_key(&mut self, key: KeyEvent, now: Instant) {
        if key.code == KeyCode::Enter {
            self.form.flush();
        } else if self.search.handle_key(key) {
            self.form.update_query(self.search.value.clone(), now);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Dropdown;

    fn press(app: &mut App, code: KeyCode, now: Instant) {
        app.handle_key(KeyEvent::new(code, KeyModifiers::NONE), now);
    }

    fn type_text(app: &mut App, text: &str, now: Instant) {
        for c in text.chars() {
            press(app, KeyCode::Char(c), now);
        }
    }

    fn app() -> App {
        App::new(&AppConfig::default())
    }

    #[test]
    fn enter_in_entry_field_submits() {
        let now = Instant::now();
        let mut app = app();
        type_text(&mut app, " abc ", now);
        press(&mut app, KeyCode::Enter, now);
        assert_eq!(app.form.items(), &[" abc ".to_string()]);
        assert!(app.entry.value.is_empty());
        assert_eq!(app.form.draft(), "");
    }

    #[test]
    fn blank_entry_keeps_field_contents() {
        let now = Instant::now();
        let mut app = app();
        type_text(&mut app, "   ", now);
        press(&mut app, KeyCode::Enter, now);
        assert!(app.form.items().is_empty());
        assert_eq!(app.entry.value, "   ");
    }

    #[test]
    fn add_button_submits() {
        let now = Instant::now();
        let mut app = app();
        type_text(&mut app, "abc", now);
        press(&mut app, KeyCode::Tab, now);
        assert_eq!(app.focus, FocusTarget::AddButton);
        press(&mut app, KeyCode::Char(' '), now);
        assert_eq!(app.form.items(), &["abc".to_string()]);
    }

    #[test]
    fn search_focus_drives_the_form() {
        let now = Instant::now();
        let mut app = app();
        type_text(&mut app, "hello", now);
        press(&mut app, KeyCode::Enter, now);

        app.set_focus(FocusTarget::Search);
        assert!(app.form.is_focused());
        type_text(&mut app, "hel", now);
        assert_eq!(app.form.query(), "hel");
        assert!(app.form.has_pending_search());

        app.form.tick(now + app.form.debounce_delay());
        assert_eq!(app.form.dropdown(), Dropdown::Results(&["hello".to_string()]));

        press(&mut app, KeyCode::Tab, now);
        assert!(!app.form.is_focused());
        assert_eq!(app.form.dropdown(), Dropdown::Hidden);
    }

    #[test]
    fn poll_timeout_shrinks_for_pending_search() {
        let now = Instant::now();
        let mut app = App::new(&AppConfig {
            debounce_ms: 20,
            tick_rate_ms: 50,
            ..Default::default()
        });
        assert_eq!(app.poll_timeout(now), Duration::from_millis(50));
        app.set_focus(FocusTarget::Search);
        press(&mut app, KeyCode::Char('x'), now);
        assert_eq!(app.poll_timeout(now), Duration::from_millis(20));
    }

    #[test]
    fn escape_unfocuses_then_quits() {
        let now = Instant::now();
        let mut app = app();
        press(&mut app, KeyCode::Esc, now);
        assert_eq!(app.focus, FocusTarget::None);
        assert!(!app.should_quit);
        press(&mut app, KeyCode::Esc, now);
        assert!(app.should_quit);
    }
}
