// Single-line text field editing
//
// The Shorten and Analytics panels collect free-text input (URLs, short
// codes, custom durations). `TextField` keeps the value plus a cursor in
// character positions, so editing stays correct for multi-byte input.

use crossterm::event::KeyCode;
use unicode_width::UnicodeWidthChar;

/// A single-line editable text field
#[derive(Debug, Clone, Default)]
pub struct TextField {
    value: String,
    /// Cursor position in characters (not bytes)
    cursor: usize,
}

impl TextField {
    pub fn new() -> Self {
        Self::default()
    }

    /// Current contents
    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Reset to empty with the cursor at the start
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Display columns occupied by the text left of the cursor
    pub fn cursor_column(&self) -> usize {
        self.value
            .chars()
            .take(self.cursor)
            .map(|c| c.width().unwrap_or(0))
            .sum()
    }

    /// Byte offset of the cursor into the value
    fn byte_offset(&self) -> usize {
        self.value
            .char_indices()
            .nth(self.cursor)
            .map(|(i, _)| i)
            .unwrap_or(self.value.len())
    }

    fn insert(&mut self, ch: char) {
        let offset = self.byte_offset();
        self.value.insert(offset, ch);
        self.cursor += 1;
    }

    fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let offset = self.byte_offset();
        self.value.remove(offset);
    }

    fn delete(&mut self) {
        if self.cursor < self.value.chars().count() {
            let offset = self.byte_offset();
            self.value.remove(offset);
        }
    }

    /// Apply a key event to the field. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyCode) -> bool {
        match key {
            KeyCode::Char(ch) => {
                self.insert(ch);
                true
            }
            KeyCode::Backspace => {
                self.backspace();
                true
            }
            KeyCode::Delete => {
                self.delete();
                true
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                true
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(self.value.chars().count());
                true
            }
            KeyCode::Home => {
                self.cursor = 0;
                true
            }
            KeyCode::End => {
                self.cursor = self.value.chars().count();
                true
            }
            _ => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn type_str(field: &mut TextField, s: &str) {
        for ch in s.chars() {
            field.handle_key(KeyCode::Char(ch));
        }
    }

    #[test]
    fn typing_appends_at_cursor() {
        let mut field = TextField::new();
        type_str(&mut field, "http://a.io");
        assert_eq!(field.value(), "http://a.io");
    }

    #[test]
    fn insert_in_middle_after_moving_left() {
        let mut field = TextField::new();
        type_str(&mut field, "ac");
        field.handle_key(KeyCode::Left);
        field.handle_key(KeyCode::Char('b'));
        assert_eq!(field.value(), "abc");
    }

    #[test]
    fn backspace_removes_before_cursor() {
        let mut field = TextField::new();
        type_str(&mut field, "abc");
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.value(), "ab");

        // Backspace at the start is a no-op
        field.handle_key(KeyCode::Home);
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn delete_removes_under_cursor() {
        let mut field = TextField::new();
        type_str(&mut field, "abc");
        field.handle_key(KeyCode::Home);
        field.handle_key(KeyCode::Delete);
        assert_eq!(field.value(), "bc");
    }

    #[test]
    fn multibyte_input_keeps_char_boundaries() {
        let mut field = TextField::new();
        type_str(&mut field, "日本");
        field.handle_key(KeyCode::Left);
        field.handle_key(KeyCode::Backspace);
        assert_eq!(field.value(), "本");
        // Wide character occupies two display columns
        field.handle_key(KeyCode::End);
        assert_eq!(field.cursor_column(), 2);
    }

    #[test]
    fn clear_resets_value_and_cursor() {
        let mut field = TextField::new();
        type_str(&mut field, "abc");
        field.clear();
        assert!(field.is_empty());
        assert_eq!(field.cursor_column(), 0);
        field.handle_key(KeyCode::Char('x'));
        assert_eq!(field.value(), "x");
    }
}
