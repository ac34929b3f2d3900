//! Banners stacked between the header and the body.

use docgen_config::Theme;
use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::Span,
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::ui::theme::ThemeExt;

/// Height of the backend-unreachable banner, borders included.
pub const BACKEND_BANNER_HEIGHT: u16 = 3;

/// Tallest the error banner grows before its message is clipped.
const MAX_ERROR_BANNER_HEIGHT: u16 = 6;

const BACKEND_HINT: &str = "Make sure the FastAPI backend is running on port 8000";

/// Render the persistent banner shown when the health check failed.
pub fn render_backend_banner(f: &mut Frame, area: Rect, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.warning())
        .title(Span::styled(
            "Backend Not Reachable",
            theme.warning().add_modifier(Modifier::BOLD),
        ));
    let widget = Paragraph::new(BACKEND_HINT)
        .style(theme.text())
        .block(block)
        .wrap(Wrap { trim: true });
    f.render_widget(widget, area);
}

/// Rows needed to show `message` inside a bordered banner of `width` columns.
pub fn error_banner_height(message: &str, width: u16) -> u16 {
    let inner = width.saturating_sub(2).max(1) as usize;
    let rows = message
        .lines()
        .map(|line| line.chars().count().div_ceil(inner).max(1))
        .sum::<usize>()
        .max(1);
    (rows as u16).saturating_add(2).min(MAX_ERROR_BANNER_HEIGHT)
}

/// Render the inline banner carrying the last generation error.
pub fn render_error_banner(f: &mut Frame, area: Rect, message: &str, theme: &Theme) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.error())
        .title(Span::styled(
            "Error",
            theme.error().add_modifier(Modifier::BOLD),
        ));
    let widget = Paragraph::new(message.to_string())
        .style(theme.text())
        .block(block)
        .wrap(Wrap { trim: false });
    f.render_widget(widget, area);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_banner_height() {
        assert_eq!(error_banner_height("short", 40), 3);
        assert_eq!(error_banner_height(&"x".repeat(76), 40), 4);
        assert_eq!(error_banner_height("a\nb", 40), 4);
        assert_eq!(error_banner_height(&"x".repeat(1000), 40), MAX_ERROR_BANNER_HEIGHT);
        assert_eq!(error_banner_height("", 40), 3);
    }
}
