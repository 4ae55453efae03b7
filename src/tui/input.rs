use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use unicode_width::UnicodeWidthStr;

/// Single-line text input with a byte-indexed cursor
#[derive(Debug, Default, Clone)]
pub struct InputField {
    pub value: String,
    pub cursor_pos: usize,
}

impl InputField {
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor_pos = 0;
    }

    /// Display column of the cursor, accounting for wide characters
    pub fn cursor_column(&self) -> u16 {
        u16::try_from(self.value[..self.cursor_pos].width()).unwrap_or(u16::MAX)
    }

    /// Apply an editing key. Returns true if the value changed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        match key.code {
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.value.insert(self.cursor_pos, c);
                self.cursor_pos += c.len_utf8();
                true
            }
            KeyCode::Backspace => {
                if self.cursor_pos > 0 {
                    let prev = self.prev_boundary();
                    self.value.remove(prev);
                    self.cursor_pos = prev;
                    true
                } else {
                    false
                }
            }
            KeyCode::Delete => {
                if self.cursor_pos < self.value.len() {
                    self.value.remove(self.cursor_pos);
                    true
                } else {
                    false
                }
            }
            KeyCode::Left => {
                self.cursor_pos = self.prev_boundary();
                false
            }
            KeyCode::Right => {
                if self.cursor_pos < self.value.len() {
                    self.cursor_pos = self.value[self.cursor_pos..]
                        .char_indices()
                        .nth(1)
                        .map(|(i, _)| self.cursor_pos + i)
                        .unwrap_or(self.value.len());
                }
                false
            }
            KeyCode::Home => {
                self.cursor_pos = 0;
                false
            }
            KeyCode::End => {
                self.cursor_pos = self.value.len();
                false
            }
            _ => false,
        }
    }

    fn prev_boundary(&self) -> usize {
        self.value[..self.cursor_pos]
            .char_indices()
            .last()
            .map(|(i, _)| i)
            .unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn typed(text: &str) -> InputField {
        let mut field = InputField::default();
        for c in text.chars() {
            field.handle_key(key(KeyCode::Char(c)));
        }
        field
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut field = typed("ac");
        field.handle_key(key(KeyCode::Left));
        assert!(field.handle_key(key(KeyCode::Char('b'))));
        assert_eq!(field.value, "abc");
        assert_eq!(field.cursor_pos, 2);
    }

    #[test]
    fn backspace_handles_multibyte() {
        let mut field = typed("héé");
        assert!(field.handle_key(key(KeyCode::Backspace)));
        assert_eq!(field.value, "hé");
        field.handle_key(key(KeyCode::Home));
        assert!(!field.handle_key(key(KeyCode::Backspace)));
    }

    #[test]
    fn delete_at_cursor() {
        let mut field = typed("ab");
        field.handle_key(key(KeyCode::Home));
        assert!(field.handle_key(key(KeyCode::Delete)));
        assert_eq!(field.value, "b");
        field.handle_key(key(KeyCode::End));
        assert!(!field.handle_key(key(KeyCode::Delete)));
    }

    #[test]
    fn control_chars_are_not_inserted() {
        let mut field = InputField::default();
        let ctrl_a = KeyEvent::new(KeyCode::Char('a'), KeyModifiers::CONTROL);
        assert!(!field.handle_key(ctrl_a));
        assert!(field.value.is_empty());
    }

    #[test]
    fn cursor_column_counts_display_width() {
        let field = typed("日本");
        assert_eq!(field.cursor_column(), 4);
    }

    #[test]
    fn cursor_column_saturates_on_long_input() {
        let field = InputField {
            value: "x".repeat(70_000),
            cursor_pos: 70_000,
        };
        assert_eq!(field.cursor_column(), u16::MAX);
    }
}
