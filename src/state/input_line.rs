//! Single-line text input.
//!
//! Backs the search box and the field editor. The cursor counts characters,
//! not bytes, so multi-byte input never splits a code point.

/// Text plus a cursor position in characters.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    cursor: usize,
}

impl InputLine {
    /// Empty line.
    pub fn new() -> Self {
        Self::default()
    }

    /// Input pre-filled with `text`, cursor at the end.
    pub fn from_text(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn as_str(&self) -> &str {
        &self.text
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// True when there is no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    /// Replace the whole text and move the cursor to the end.
    pub fn set(&mut self, text: impl Into<String>) {
        *self = Self::from_text(text);
    }

    /// Drop all text.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn byte_offset(&self, chars: usize) -> usize {
        self.text
            .char_indices()
            .nth(chars)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }

    /// Insert at the cursor and advance it.
    pub fn insert(&mut self, ch: char) {
        let offset = self.byte_offset(self.cursor);
        self.text.insert(offset, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. Returns `false` at position 0.
    pub fn backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let offset = self.byte_offset(self.cursor - 1);
        self.text.remove(offset);
        self.cursor -= 1;
        true
    }

    /// Delete the character under the cursor. Returns `false` at the end.
    pub fn delete(&mut self) -> bool {
        if self.cursor >= self.text.chars().count() {
            return false;
        }
        let offset = self.byte_offset(self.cursor);
        self.text.remove(offset);
        true
    }

    /// Cursor one char left.
    pub fn left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Cursor one char right.
    pub fn right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.text.chars().count());
    }

    /// Cursor to the start.
    pub fn home(&mut self) {
        self.cursor = 0;
    }

    /// Cursor to the end.
    pub fn end(&mut self) {
        self.cursor = self.text.chars().count();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn insert_and_backspace_at_cursor() {
        let mut line = InputLine::from_text("amn");
        line.home();
        line.right();
        line.insert('d');
        assert_eq!(line.as_str(), "admn");
        assert_eq!(line.cursor(), 2);
        line.end();
        line.left();
        line.insert('i');
        assert_eq!(line.as_str(), "admin");
        assert_eq!(line.cursor(), 4);

        assert!(line.backspace());
        assert_eq!(line.as_str(), "admn");
    }

    #[test]
    fn backspace_at_start_is_noop() {
        let mut line = InputLine::from_text("x");
        line.home();
        assert!(!line.backspace());
        assert_eq!(line.as_str(), "x");
    }

    #[test]
    fn cursor_counts_characters_not_bytes() {
        let mut line = InputLine::from_text("Zoë");
        assert_eq!(line.cursor(), 3);
        line.left();
        line.insert('ï');
        assert_eq!(line.as_str(), "Zoïë");
        assert!(line.backspace());
        assert!(line.backspace());
        assert_eq!(line.as_str(), "Zë");
    }

    #[test]
    fn delete_removes_char_under_cursor() {
        let mut line = InputLine::from_text("abc");
        assert!(!line.delete());
        line.home();
        assert!(line.delete());
        assert_eq!(line.as_str(), "bc");
        assert_eq!(line.cursor(), 0);
    }

    #[test]
    fn right_saturates_at_end() {
        let mut line = InputLine::from_text("ab");
        line.right();
        assert_eq!(line.cursor(), 2);
    }

    #[test]
    fn clear_resets_cursor() {
        let mut line = InputLine::from_text("member");
        line.clear();
        assert!(line.is_empty());
        assert_eq!(line.cursor(), 0);
    }
}
