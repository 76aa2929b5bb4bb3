#![allow(missing_docs)]

//! Assistant panel state: idle orb vs. active chat.

use tracing::info;

/// Longest message the input accepts.
pub const MAX_INPUT_LEN: usize = 256;

/// Single-line text editor with a byte cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InputLine {
    text: String,
    cursor: usize,
}

impl InputLine {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn is_blank(&self) -> bool {
        self.text.trim().is_empty()
    }

    pub fn move_cursor(&mut self, delta: isize) {
        let len = self.text.len() as isize;
        let next = (self.cursor as isize + delta).clamp(0, len);
        self.cursor = next as usize;
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.text.len();
    }

    /// Insert a printable ASCII character at the cursor.
    pub fn insert(&mut self, ch: char) {
        if self.text.len() >= MAX_INPUT_LEN {
            return;
        }
        if ch.is_ascii() && !ch.is_ascii_control() {
            self.text.insert(self.cursor, ch);
            self.cursor += ch.len_utf8();
        }
    }

    pub fn backspace(&mut self) {
        if self.cursor > 0 && self.cursor <= self.text.len() {
            self.cursor -= 1;
            self.text.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.text.len() {
            self.text.remove(self.cursor);
        }
    }

    /// Replace the whole line, placing the cursor at the end.
    pub fn set(&mut self, value: &str) {
        self.text.clear();
        for ch in value.chars() {
            self.push_char(ch);
        }
        self.cursor = self.text.len();
    }

    fn push_char(&mut self, ch: char) {
        if self.text.len() < MAX_INPUT_LEN && ch.is_ascii() && !ch.is_ascii_control() {
            self.text.push(ch);
        }
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}

/// Chat/orb activation state.
#[derive(Debug, Clone, Default)]
pub struct ChatState {
    active: bool,
    expanded: bool,
    /// Whether key presses are routed to the input line.
    editing: bool,
    input: InputLine,
    last_sent: Option<String>,
}

impl ChatState {
    pub fn new() -> Self {
        Self::default()
    }

    /// True while the expanded chat replaces the idle hero.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True when the panel fills the whole screen.
    pub fn is_expanded(&self) -> bool {
        self.expanded
    }

    pub fn is_editing(&self) -> bool {
        self.editing
    }

    pub fn input(&self) -> &InputLine {
        &self.input
    }

    pub fn input_mut(&mut self) -> &mut InputLine {
        &mut self.input
    }

    pub fn last_sent(&self) -> Option<&str> {
        self.last_sent.as_deref()
    }

    /// Focusing the input activates the chat.
    pub fn focus_input(&mut self) {
        self.active = true;
        self.editing = true;
    }

    /// Stop routing keys to the input without closing the panel.
    pub fn blur_input(&mut self) {
        self.editing = false;
    }

    /// Open the panel from the header shortcut.
    pub fn open(&mut self) {
        self.focus_input();
    }

    /// Submit the input. Blank input is ignored and returns `None`.
    ///
    /// Messages are only echoed to the log; nothing is sent anywhere.
    pub fn submit(&mut self) -> Option<String> {
        if self.input.is_blank() {
            return None;
        }
        self.active = true;
        let message = self.input.as_str().trim().to_string();
        info!(target: "perday::chat", message = %message, "Sending");
        self.last_sent = Some(message.clone());
        Some(message)
    }

    /// Return to the idle orb.
    pub fn close(&mut self) {
        self.active = false;
        self.expanded = false;
        self.editing = false;
    }

    pub fn toggle_expanded(&mut self) {
        if self.active {
            self.expanded = !self.expanded;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn typed(text: &str) -> ChatState {
        let mut chat = ChatState::new();
        chat.focus_input();
        for ch in text.chars() {
            chat.input_mut().insert(ch);
        }
        chat
    }

    #[test]
    fn focusing_input_activates() {
        let mut chat = ChatState::new();
        assert!(!chat.is_active());
        chat.focus_input();
        assert!(chat.is_active());
        assert!(chat.is_editing());
    }

    #[test]
    fn blank_submit_is_noop() {
        let mut chat = ChatState::new();
        chat.input_mut().set("   ");
        assert_eq!(chat.submit(), None);
        assert!(!chat.is_active());
        assert_eq!(chat.last_sent(), None);
    }

    #[test]
    fn submit_activates_and_records() {
        let mut chat = typed("  what is rising?  ");
        chat.close();
        assert!(!chat.is_active());
        assert_eq!(chat.submit().as_deref(), Some("what is rising?"));
        assert!(chat.is_active());
        assert_eq!(chat.last_sent(), Some("what is rising?"));
    }

    #[test]
    fn close_resets_expanded() {
        let mut chat = ChatState::new();
        chat.toggle_expanded();
        assert!(!chat.is_expanded());
        chat.open();
        chat.toggle_expanded();
        assert!(chat.is_expanded());
        chat.close();
        assert!(!chat.is_active());
        assert!(!chat.is_expanded());
    }

    #[test]
    fn input_line_editing() {
        let mut line = InputLine::new();
        for ch in "helo".chars() {
            line.insert(ch);
        }
        line.move_cursor(-1);
        line.insert('l');
        assert_eq!(line.as_str(), "hello");
        line.move_home();
        line.delete();
        assert_eq!(line.as_str(), "ello");
        line.move_end();
        line.backspace();
        assert_eq!(line.as_str(), "ell");
        line.move_cursor(-10);
        assert_eq!(line.cursor(), 0);
        line.insert('\n');
        assert_eq!(line.as_str(), "ell");
    }

    #[test]
    fn input_line_caps_length() {
        let mut line = InputLine::new();
        line.set(&"x".repeat(MAX_INPUT_LEN + 20));
        assert_eq!(line.as_str().len(), MAX_INPUT_LEN);
        line.insert('y');
        assert_eq!(line.as_str().len(), MAX_INPUT_LEN);
    }
}
