//! Documentation viewer input handler.
//!
//! Responsibilities:
//! - Select tiers, scroll, download, and start over.
//!
//! Non-responsibilities:
//! - Does NOT write files (handled by side effects)

use crate::action::Action;
use crate::app::App;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use docgen_client::Tier;
use docgen_config::constants::DEFAULT_PAGE_SCROLL_LINES;

impl App {
    /// Handle input for the documentation viewer.
    pub fn handle_viewer_input(&mut self, key: KeyEvent) -> Option<Action> {
        if key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) {
            return None;
        }
        let active = self.viewer.as_ref()?.active_tier;

        match key.code {
            KeyCode::Char('1') | KeyCode::Char('b') => Some(Action::SelectTier(Tier::Beginner)),
            KeyCode::Char('2') | KeyCode::Char('i') => {
                Some(Action::SelectTier(Tier::Intermediate))
            }
            KeyCode::Char('3') | KeyCode::Char('a') => Some(Action::SelectTier(Tier::Advanced)),
            KeyCode::Tab | KeyCode::Right | KeyCode::Char('l') => {
                Some(Action::SelectTier(active.next()))
            }
            KeyCode::BackTab | KeyCode::Left | KeyCode::Char('h') => {
                Some(Action::SelectTier(active.previous()))
            }
            KeyCode::Char('d') => self.download_action(),
            KeyCode::Char('n') | KeyCode::Char('r') => Some(Action::ResetSession),
            KeyCode::Char('q') => Some(Action::Quit),
            code => {
                let viewer = self.viewer.as_mut()?;
                match code {
                    KeyCode::Down | KeyCode::Char('j') => viewer.scroll_down(1),
                    KeyCode::Up | KeyCode::Char('k') => viewer.scroll_up(1),
                    KeyCode::PageDown => viewer.scroll_down(DEFAULT_PAGE_SCROLL_LINES),
                    KeyCode::PageUp => viewer.scroll_up(DEFAULT_PAGE_SCROLL_LINES),
                    KeyCode::Home | KeyCode::Char('g') => viewer.scroll_to_top(),
                    KeyCode::End | KeyCode::Char('G') => viewer.scroll_to_bottom(),
                    _ => {}
                }
                None
            }
        }
    }

    /// Build the download request for the active tier.
    fn download_action(&self) -> Option<Action> {
        let result = self.submission.result()?;
        let tier = self.viewer.as_ref()?.active_tier;
        Some(Action::DownloadDocumentation {
            repo_name: result.repo_name.clone(),
            tier,
            content: result.documentation.get(tier).to_string(),
        })
    }
}
