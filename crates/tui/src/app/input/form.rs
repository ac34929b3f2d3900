//! Repository form input handler.
//!
//! Responsibilities:
//! - Submit on Enter and move through the examples.
//! - Forward editing keys to the URL input.
//!
//! Non-responsibilities:
//! - Does NOT validate (see `app::form`)

use crate::action::Action;
use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

impl App {
    /// Handle input for the repository form.
    pub fn handle_form_input(&mut self, key: KeyEvent) -> Option<Action> {
        if self.submission.is_loading() {
            return None;
        }

        // Ctrl+E copies the highlighted example; it shadows the input's end-of-line binding.
        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('e') {
            self.form.apply_selected_example();
            return None;
        }

        if key.modifiers.contains(KeyModifiers::ALT)
            && let KeyCode::Char(c @ '1'..='9') = key.code
        {
            let index = (c as usize) - ('1' as usize);
            self.form.apply_example(index);
            return None;
        }

        match key.code {
            KeyCode::Enter => self.form.submit(),
            KeyCode::Down | KeyCode::Tab => {
                self.form.select_next_example();
                None
            }
            KeyCode::Up | KeyCode::BackTab => {
                self.form.select_previous_example();
                None
            }
            _ => {
                self.form.input.handle_key(key);
                None
            }
        }
    }
}
