//! Documentation viewer state.
//!
//! Invariants:
//! - A fresh `ViewerState` is created for every new result.
//! - Changing tier resets the scroll offset.
//! - The offset may exceed the content until the next render clamps it.

use docgen_client::Tier;

/// Tier selection and scroll position of the viewer.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewerState {
    pub active_tier: Tier,
    pub scroll: u16,
}

impl ViewerState {
    pub fn select_tier(&mut self, tier: Tier) {
        if self.active_tier != tier {
            self.active_tier = tier;
            self.scroll = 0;
        }
    }

    pub fn scroll_down(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_add(lines);
    }

    pub fn scroll_up(&mut self, lines: u16) {
        self.scroll = self.scroll.saturating_sub(lines);
    }

    pub fn scroll_to_top(&mut self) {
        self.scroll = 0;
    }

    /// Jump past the end; rendering clamps to the last page.
    pub fn scroll_to_bottom(&mut self) {
        self.scroll = u16::MAX;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_to_beginner() {
        let viewer = ViewerState::default();
        assert_eq!(viewer.active_tier, Tier::Beginner);
        assert_eq!(viewer.scroll, 0);
    }

    #[test]
    fn test_tier_change_resets_scroll() {
        let mut viewer = ViewerState::default();
        viewer.scroll_down(12);
        viewer.select_tier(Tier::Beginner);
        assert_eq!(viewer.scroll, 12);
        viewer.select_tier(Tier::Advanced);
        assert_eq!(viewer.scroll, 0);
        assert_eq!(viewer.active_tier, Tier::Advanced);
    }

    #[test]
    fn test_scroll_saturates() {
        let mut viewer = ViewerState::default();
        viewer.scroll_up(5);
        assert_eq!(viewer.scroll, 0);
        viewer.scroll_to_bottom();
        viewer.scroll_down(1);
        assert_eq!(viewer.scroll, u16::MAX);
        viewer.scroll_to_top();
        assert_eq!(viewer.scroll, 0);
    }
}
