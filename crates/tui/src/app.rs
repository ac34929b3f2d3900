//! Application state and rendering.
//!
//! This module contains the main application state, input handling,
//! and rendering logic for the TUI.
//!
//! The module is organized into submodules:
//! - `state`: Core state types (BackendHealth, BodyView, layout constants)
//! - `submission`: Submission lifecycle (Idle/Loading/Success/Failed)
//! - `form`: Repository URL form and validation
//! - `viewer`: Documentation viewer tier and scroll state
//! - `input`: Per-body input handlers
//! - `mouse`: Mouse event handling
//! - `actions`: Action handling
//! - `render`: Rendering logic

pub mod form;
pub mod input;
pub mod state;
pub mod submission;
pub mod viewer;

mod actions;
mod mouse;
mod render;

pub use form::{
    EXAMPLE_REPO_URLS, REPO_URL_PLACEHOLDER, RepoForm, ValidationError, validate_repo_url,
};
pub use state::{BackendHealth, BodyView, FOOTER_HEIGHT, HEADER_HEIGHT};
pub use submission::SubmissionState;
pub use viewer::ViewerState;

use crate::action::Action;
use crate::ui::Toast;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use docgen_config::{ColorTheme, PersistedState, Theme};
use ratatui::layout::Rect;

/// Main application state.
pub struct App {
    pub color_theme: ColorTheme,
    /// Runtime palette expanded from `color_theme`.
    pub theme: Theme,
    pub submission: SubmissionState,
    pub form: RepoForm,
    /// Present exactly while the submission holds a result.
    pub viewer: Option<ViewerState>,
    pub backend_health: BackendHealth,
    pub toasts: Vec<Toast>,
    pub spinner_frame: u8,
    pub last_area: Rect,
}

impl Default for App {
    fn default() -> Self {
        Self::new(None)
    }
}

impl App {
    /// Create the app, reading the dark mode preference once.
    pub fn new(persisted: Option<PersistedState>) -> Self {
        let color_theme = persisted
            .map(|state| ColorTheme::from_dark_mode(state.dark_mode))
            .unwrap_or_default();

        Self {
            color_theme,
            theme: Theme::from_color_theme(color_theme),
            submission: SubmissionState::default(),
            form: RepoForm::new(),
            viewer: None,
            backend_health: BackendHealth::default(),
            toasts: Vec::new(),
            spinner_frame: 0,
            last_area: Rect::default(),
        }
    }

    /// Preferences to persist on change.
    pub fn persisted_state(&self) -> PersistedState {
        PersistedState {
            dark_mode: self.color_theme.is_dark(),
        }
    }

    pub fn is_dark_mode(&self) -> bool {
        self.color_theme.is_dark()
    }

    /// Which body is shown for the current submission state.
    pub fn body_view(&self) -> BodyView {
        match &self.submission {
            SubmissionState::Loading { .. } => BodyView::Loading,
            SubmissionState::Success(_) if self.viewer.is_some() => BodyView::Viewer,
            _ => BodyView::Form,
        }
    }

    /// Handle keyboard input - returns Action if one should be dispatched.
    pub fn handle_input(&mut self, key: KeyEvent) -> Option<Action> {
        let ctrl = key.modifiers.contains(KeyModifiers::CONTROL);

        match key.code {
            KeyCode::Char('c') if ctrl => return Some(Action::Quit),
            KeyCode::Char('d') if ctrl => return Some(Action::ToggleDarkMode),
            KeyCode::F(2) => return Some(Action::ToggleDarkMode),
            KeyCode::Esc => {
                if self.body_view() == BodyView::Form && self.form.clear_validation() {
                    return None;
                }
                return Some(Action::Quit);
            }
            _ => {}
        }

        self.dispatch_body_input(key)
    }

    /// Action to dispatch after `action` has been applied by `update`.
    ///
    /// Dark mode changes are persisted, and a reset re-runs the health check.
    pub fn followup_action(&self, action: &Action) -> Option<Action> {
        match action {
            Action::ToggleDarkMode => Some(Action::SavePreferences(self.persisted_state())),
            Action::ResetSession => Some(Action::CheckHealth),
            _ => None,
        }
    }
}
