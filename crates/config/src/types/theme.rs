//! Theme types for the docgen TUI.
//!
//! Responsibilities:
//! - Define the two user-selectable color schemes (`ColorTheme`).
//! - Define the expanded runtime `Theme` with all color values.
//! - Provide conversion from `ColorTheme` to `Theme`.
//!
//! Does NOT handle:
//! - Actual rendering (see TUI crate).
//! - Preference persistence (the `darkMode` flag lives in `PersistedState`).
//!
//! Invariants:
//! - `ColorTheme` is derived from the persisted dark mode flag; `Theme` is the runtime representation.
//! - `Theme` is intentionally NOT serializable.
//! - Toggling a `ColorTheme` twice yields the original scheme.

use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::fmt;

/// User-selectable color scheme.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ColorTheme {
    #[default]
    Light,
    Dark,
}

impl ColorTheme {
    /// Map the persisted dark mode flag to a scheme.
    pub fn from_dark_mode(dark_mode: bool) -> Self {
        if dark_mode { Self::Dark } else { Self::Light }
    }

    /// Whether this is the dark scheme.
    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The opposite scheme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Human-readable display name for UI surfaces.
    pub fn display_name(self) -> &'static str {
        match self {
            Self::Light => "Light",
            Self::Dark => "Dark",
        }
    }
}

impl fmt::Display for ColorTheme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Expanded runtime theme.
///
/// Invariants:
/// - This is intentionally **not serialized**. Persist the dark mode flag and expand on startup.
/// - Colors should be semantically meaningful (error/warn/success/info).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    // Global / chrome
    pub background: Color,
    pub text: Color,
    pub text_dim: Color,
    pub border: Color,
    pub title: Color,
    pub accent: Color,

    // Selection / highlight
    pub highlight_fg: Color,
    pub highlight_bg: Color,

    // Semantics
    pub success: Color,
    pub warning: Color,
    pub error: Color,
    pub info: Color,
    pub disabled: Color,

    // Tabs
    pub tab_active: Color,
    pub tab_inactive: Color,

    // Code blocks
    pub code_bg: Color,
    pub code_fg: Color,

    // Syntax highlighting
    pub syntax_keyword: Color,
    pub syntax_type: Color,
    pub syntax_function: Color,
    pub syntax_string: Color,
    pub syntax_number: Color,
    pub syntax_comment: Color,
    pub syntax_punctuation: Color,
}

impl Theme {
    /// Expand a `ColorTheme` into a full runtime palette.
    pub fn from_color_theme(theme: ColorTheme) -> Self {
        match theme {
            ColorTheme::Light => Self {
                background: Color::White,
                text: Color::Black,
                text_dim: Color::DarkGray,
                border: Color::Blue,
                title: Color::Blue,
                accent: Color::Blue,

                highlight_fg: Color::Black,
                highlight_bg: Color::Gray,

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Blue,
                disabled: Color::Gray,

                tab_active: Color::Blue,
                tab_inactive: Color::DarkGray,

                code_bg: Color::Indexed(254),
                code_fg: Color::Black,

                syntax_keyword: Color::Magenta,
                syntax_type: Color::Indexed(30),
                syntax_function: Color::Blue,
                syntax_string: Color::Indexed(28),
                syntax_number: Color::Indexed(130),
                syntax_comment: Color::Gray,
                syntax_punctuation: Color::DarkGray,
            },
            ColorTheme::Dark => Self {
                background: Color::Black,
                text: Color::White,
                text_dim: Color::Gray,
                border: Color::Indexed(110), // soft blue
                title: Color::Indexed(75),
                accent: Color::Indexed(75),

                highlight_fg: Color::White,
                highlight_bg: Color::Indexed(236),

                success: Color::Green,
                warning: Color::Yellow,
                error: Color::Red,
                info: Color::Indexed(110),
                disabled: Color::DarkGray,

                tab_active: Color::Indexed(75),
                tab_inactive: Color::Gray,

                code_bg: Color::Indexed(235),
                code_fg: Color::Indexed(252),

                syntax_keyword: Color::Indexed(176),
                syntax_type: Color::Indexed(79),
                syntax_function: Color::Indexed(222),
                syntax_string: Color::Indexed(173),
                syntax_number: Color::Indexed(151),
                syntax_comment: Color::Indexed(65),
                syntax_punctuation: Color::Gray,
            },
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_color_theme(ColorTheme::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_dark_mode() {
        assert_eq!(ColorTheme::from_dark_mode(true), ColorTheme::Dark);
        assert_eq!(ColorTheme::from_dark_mode(false), ColorTheme::Light);
        assert!(ColorTheme::Dark.is_dark());
        assert!(!ColorTheme::Light.is_dark());
    }

    #[test]
    fn test_toggle_twice_restores_palette() {
        for start in [ColorTheme::Light, ColorTheme::Dark] {
            let twice = start.toggled().toggled();
            assert_eq!(twice, start);
            assert_eq!(Theme::from_color_theme(twice), Theme::from_color_theme(start));
        }
    }

    #[test]
    fn test_light_and_dark_differ() {
        assert_ne!(
            Theme::from_color_theme(ColorTheme::Light),
            Theme::from_color_theme(ColorTheme::Dark)
        );
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ColorTheme::Dark.to_string(), "Dark");
        assert_eq!(ColorTheme::Light.to_string(), "Light");
    }
}
