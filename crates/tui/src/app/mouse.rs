//! Mouse event handling for the TUI app.
//!
//! Responsibilities:
//! - Scroll the documentation viewer with the mouse wheel.
//!
//! Does NOT handle:
//! - Does NOT handle keyboard input
//! - Does NOT render the UI

use crate::action::Action;
use crate::app::App;
use crossterm::event::{MouseEvent, MouseEventKind};

/// Lines moved per wheel notch.
const WHEEL_SCROLL_LINES: u16 = 3;

impl App {
    /// Handle mouse input - returns Action if one should be dispatched.
    pub fn handle_mouse(&mut self, mouse: MouseEvent) -> Option<Action> {
        let viewer = self.viewer.as_mut()?;
        match mouse.kind {
            MouseEventKind::ScrollDown => viewer.scroll_down(WHEEL_SCROLL_LINES),
            MouseEventKind::ScrollUp => viewer.scroll_up(WHEEL_SCROLL_LINES),
            _ => {}
        }
        None
    }
}
