//! Single-line text input built on `tui-input`.
//!
//! Provides cursor-aware editing with word navigation and readline-style
//! shortcuts, plus placeholder text.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use tui_input::{Input, InputRequest};

/// Single-line input wrapper with enhanced functionality.
#[derive(Debug, Clone, Default)]
pub struct SingleLineInput {
    input: Input,
    placeholder: Option<String>,
}

impl SingleLineInput {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a new input with a placeholder.
    pub fn with_placeholder(placeholder: impl Into<String>) -> Self {
        Self {
            input: Input::default(),
            placeholder: Some(placeholder.into()),
        }
    }

    /// Apply an editing key. Returns true if the key was consumed.
    pub fn handle_key(&mut self, key: KeyEvent) -> bool {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            let req = match key.code {
                KeyCode::Left => InputRequest::GoToPrevWord,
                KeyCode::Right => InputRequest::GoToNextWord,
                KeyCode::Backspace | KeyCode::Char('w') => InputRequest::DeletePrevWord,
                // Ctrl+U: clear to beginning of line
                KeyCode::Char('u') => InputRequest::DeleteLine,
                // Ctrl+K: clear to end of line
                KeyCode::Char('k') => InputRequest::DeleteTillEnd,
                KeyCode::Char('a') => InputRequest::GoToStart,
                KeyCode::Char('e') => InputRequest::GoToEnd,
                _ => return false,
            };
            self.input.handle(req);
            return true;
        }

        let req = match key.code {
            KeyCode::Char(c) => InputRequest::InsertChar(c),
            KeyCode::Backspace => InputRequest::DeletePrevChar,
            KeyCode::Delete => InputRequest::DeleteNextChar,
            KeyCode::Left => InputRequest::GoToPrevChar,
            KeyCode::Right => InputRequest::GoToNextChar,
            KeyCode::Home => InputRequest::GoToStart,
            KeyCode::End => InputRequest::GoToEnd,
            _ => return false,
        };
        self.input.handle(req);
        true
    }

    pub fn value(&self) -> &str {
        self.input.value()
    }

    /// Replace the value; the cursor moves to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.input = Input::new(value.into());
    }

    pub fn is_empty(&self) -> bool {
        self.input.value().is_empty()
    }

    /// Get cursor position (character index).
    pub fn cursor_position(&self) -> usize {
        self.input.cursor()
    }

    pub fn placeholder(&self) -> Option<&str> {
        self.placeholder.as_deref()
    }
}
