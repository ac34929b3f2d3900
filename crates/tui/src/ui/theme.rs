//! TUI-specific theme helpers and style builders.
//!
//! This module extends `docgen_config::Theme` with ergonomic helpers
//! for building ratatui `Style` objects consistently across the TUI.

use docgen_config::Theme;
use ratatui::style::{Modifier, Style};

/// Spinner characters for animated loading indicator.
pub const SPINNER_CHARS: [char; 8] = ['⠋', '⠙', '⠹', '⠸', '⠼', '⠴', '⠦', '⠧'];

/// Get the spinner character for a given animation frame.
///
/// ```
/// use docgen_tui::ui::theme::spinner_char;
///
/// assert_eq!(spinner_char(0), spinner_char(8));
/// ```
pub fn spinner_char(frame: u8) -> char {
    SPINNER_CHARS[frame as usize % SPINNER_CHARS.len()]
}

/// Trait extending Theme with helper methods for creating styled widgets.
pub trait ThemeExt {
    /// Get the base text style.
    fn text(&self) -> Style;
    /// Get dimmed text style.
    fn text_dim(&self) -> Style;
    /// Get title style (accent + bold).
    fn title(&self) -> Style;
    /// Get border style.
    fn border(&self) -> Style;
    /// Get border style when focused.
    fn border_focused(&self) -> Style;
    /// Get highlight/selection style.
    fn highlight(&self) -> Style;
    fn success(&self) -> Style;
    fn warning(&self) -> Style;
    fn error(&self) -> Style;
    fn info(&self) -> Style;
    fn disabled(&self) -> Style;
    /// Style for the selected tab.
    fn tab_active(&self) -> Style;
    fn tab_inactive(&self) -> Style;
    /// Base style for code (inline and blocks).
    fn code(&self) -> Style;
}

impl ThemeExt for Theme {
    fn text(&self) -> Style {
        Style::default().fg(self.text)
    }

    fn text_dim(&self) -> Style {
        Style::default().fg(self.text_dim)
    }

    fn title(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn border(&self) -> Style {
        Style::default().fg(self.border)
    }

    fn border_focused(&self) -> Style {
        Style::default()
            .fg(self.accent)
            .add_modifier(Modifier::BOLD)
    }

    fn highlight(&self) -> Style {
        Style::default().fg(self.highlight_fg).bg(self.highlight_bg)
    }

    fn success(&self) -> Style {
        Style::default().fg(self.success)
    }

    fn warning(&self) -> Style {
        Style::default().fg(self.warning)
    }

    fn error(&self) -> Style {
        Style::default().fg(self.error)
    }

    fn info(&self) -> Style {
        Style::default().fg(self.info)
    }

    fn disabled(&self) -> Style {
        Style::default().fg(self.disabled)
    }

    fn tab_active(&self) -> Style {
        Style::default()
            .fg(self.tab_active)
            .add_modifier(Modifier::BOLD | Modifier::UNDERLINED)
    }

    fn tab_inactive(&self) -> Style {
        Style::default().fg(self.tab_inactive)
    }

    fn code(&self) -> Style {
        Style::default().fg(self.code_fg).bg(self.code_bg)
    }
}
