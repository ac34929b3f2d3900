//! Per-body input handlers for the TUI app.
//!
//! Responsibilities:
//! - Dispatch keyboard input to the handler of the visible body.
//!
//! Non-responsibilities:
//! - Does NOT handle global keybindings (handled by `App::handle_input`)

pub mod components;
pub mod form;
pub mod viewer;

use crate::action::Action;
use crate::app::App;
use crate::app::state::BodyView;
use crossterm::event::{KeyCode, KeyEvent};

impl App {
    /// Dispatch input to the handler of the visible body.
    pub fn dispatch_body_input(&mut self, key: KeyEvent) -> Option<Action> {
        match self.body_view() {
            BodyView::Form => self.handle_form_input(key),
            BodyView::Loading => match key.code {
                KeyCode::Char('q') => Some(Action::Quit),
                _ => None,
            },
            BodyView::Viewer => self.handle_viewer_input(key),
        }
    }
}
