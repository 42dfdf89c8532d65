use crate::keymap::Action;
use crossterm::event::KeyCode;

/// Editable single-line text with a character-indexed cursor.
///
/// ```
/// use fitnourish::utils::text_input::TextInput;
///
/// let mut input = TextInput::with_text("16");
/// input.insert_char('0');
/// assert_eq!(input.text(), "160");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cursor starts at the end.
    pub fn with_text(text: impl Into<String>) -> Self {
        let mut input = Self::default();
        input.set_text(text);
        input
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        self.cursor = self.char_count();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    fn char_count(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_index(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map_or(self.text.len(), |(i, _)| i)
    }

    /// Control characters are ignored.
    pub fn insert_char(&mut self, c: char) {
        if c.is_control() {
            return;
        }
        let at = self.byte_index(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        self.cursor -= 1;
        let at = self.byte_index(self.cursor);
        self.text.remove(at);
    }

    pub fn delete(&mut self) {
        if self.cursor < self.char_count() {
            let at = self.byte_index(self.cursor);
            self.text.remove(at);
        }
    }

    pub fn move_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.char_count());
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.char_count();
    }

    /// Apply an editing action. Returns `true` if the action was one.
    pub fn handle_action(&mut self, action: Action) -> bool {
        match action {
            Action::MoveLeft => self.move_left(),
            Action::MoveRight => self.move_right(),
            Action::Home => self.move_home(),
            Action::End => self.move_end(),
            Action::Backspace => self.backspace(),
            Action::DeleteChar => self.delete(),
            _ => return false,
        }
        true
    }

    /// Apply a raw key that no action claimed. Returns `true` if the text or
    /// cursor may have changed.
    pub fn handle_key(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Char(c) => self.insert_char(c),
            KeyCode::Backspace => self.backspace(),
            KeyCode::Delete => self.delete(),
            KeyCode::Left => self.move_left(),
            KeyCode::Right => self.move_right(),
            KeyCode::Home => self.move_home(),
            KeyCode::End => self.move_end(),
            _ => return false,
        }
        true
    }

    /// Text with `mask` in place of every character, for passwords.
    pub fn masked(&self, mask: char) -> String {
        std::iter::repeat(mask).take(self.char_count()).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_at_cursor() {
        let mut input = TextInput::with_text("7500");
        input.move_home();
        input.insert_char('1');
        assert_eq!(input.text(), "17500");
        assert_eq!(input.cursor(), 1);
        input.insert_char('\n');
        assert_eq!(input.text(), "17500");
    }

    #[test]
    fn test_backspace_and_delete() {
        let mut input = TextInput::with_text("abc");
        input.backspace();
        assert_eq!(input.text(), "ab");
        input.move_home();
        input.backspace();
        assert_eq!(input.text(), "ab");
        input.delete();
        assert_eq!(input.text(), "b");
        input.move_end();
        input.delete();
        assert_eq!(input.text(), "b");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::with_text("ab");
        input.move_right();
        assert_eq!(input.cursor(), 2);
        input.move_left();
        input.move_left();
        input.move_left();
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_multibyte_text() {
        let mut input = TextInput::with_text("café");
        input.backspace();
        assert_eq!(input.text(), "caf");
        input.insert_char('é');
        input.move_left();
        input.insert_char('x');
        assert_eq!(input.text(), "cafxé");
    }

    #[test]
    fn test_actions_and_keys() {
        let mut input = TextInput::new();
        assert!(input.handle_key(KeyCode::Char('6')));
        assert!(input.handle_key(KeyCode::Char('0')));
        assert!(input.handle_action(Action::Home));
        assert!(input.handle_action(Action::DeleteChar));
        assert_eq!(input.text(), "0");
        assert!(!input.handle_action(Action::Submit));
        assert!(!input.handle_key(KeyCode::Enter));
    }

    #[test]
    fn test_masked() {
        let input = TextInput::with_text("1234");
        assert_eq!(input.masked('•'), "••••");
    }
}
