//! Action handling for the TUI app.
//!
//! Responsibilities:
//! - Process Actions and mutate App state accordingly
//! - Turn async results into submission state, health state, and toasts
//!
//! Non-responsibilities:
//! - Does NOT create Actions (handled by input handlers)
//! - Does NOT perform async operations

use crate::action::{Action, RedactedAction};
use crate::app::{App, BackendHealth, ViewerState};
use crate::ui::{Toast, ToastLevel};
use docgen_config::Theme;

impl App {
    /// Pure state mutation based on Action.
    pub fn update(&mut self, action: Action) {
        tracing::trace!(action = ?RedactedAction(&action), "update");

        match action {
            Action::Tick => self.handle_tick(),
            Action::Resize(width, height) => {
                self.last_area = ratatui::layout::Rect::new(0, 0, width, height);
            }
            Action::HealthChecked(result) => {
                self.backend_health = match result {
                    Ok(status) => {
                        tracing::debug!(status = ?status.status, "Backend healthy");
                        BackendHealth::Healthy
                    }
                    Err(_) => BackendHealth::Unreachable,
                };
            }
            Action::GenerateDocumentation { repo_url } => {
                if self.submission.begin(repo_url) {
                    self.viewer = None;
                    self.spinner_frame = 0;
                }
            }
            Action::DocumentationLoaded(result) => match *result {
                Ok(result) => {
                    if self.submission.resolve(result) {
                        self.viewer = Some(ViewerState::default());
                    }
                }
                Err(err) => {
                    self.submission.reject(err.to_string());
                }
            },
            Action::SelectTier(tier) => {
                if let Some(viewer) = self.viewer.as_mut() {
                    viewer.select_tier(tier);
                }
            }
            Action::DocumentationDownloaded(result) => match result {
                Ok(path) => self
                    .toasts
                    .push(Toast::success(format!("Saved {}", path.display()))),
                Err(err) => self
                    .toasts
                    .push(Toast::error(format!("Download failed: {err}"))),
            },
            Action::ResetSession => {
                self.submission.reset();
                self.form.reset();
                self.viewer = None;
                self.backend_health = BackendHealth::Unknown;
            }
            Action::ToggleDarkMode => {
                self.color_theme = self.color_theme.toggled();
                self.theme = Theme::from_color_theme(self.color_theme);
            }
            Action::PreferencesSaved(Err(err)) => {
                self.toasts.push(Toast::new(
                    format!("Could not save preferences: {err}"),
                    ToastLevel::Warning,
                ));
            }
            Action::Quit
            | Action::Input(_)
            | Action::Mouse(_)
            | Action::CheckHealth
            | Action::DownloadDocumentation { .. }
            | Action::SavePreferences(_)
            | Action::PreferencesSaved(Ok(())) => {}
        }
    }

    /// Advance the spinner while loading and drop expired toasts.
    fn handle_tick(&mut self) {
        if self.submission.is_loading() {
            self.spinner_frame = self.spinner_frame.wrapping_add(1);
        }
        self.toasts.retain(|toast| !toast.is_expired());
    }
}
