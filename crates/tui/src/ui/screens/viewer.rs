//! Documentation viewer rendering.
//!
//! Responsibilities:
//! - Render the heading, tier tabs, the active tier's markdown, and the actions row.
//! - Clamp the requested scroll offset to the rendered content.
//!
//! Does NOT handle:
//! - Tier selection or scrolling input (see `app::input::viewer`).
//!
//! Invariants:
//! - The returned scroll offset never exceeds the word-wrapped line count
//!   minus the viewport height, so the last page is always reachable.

use docgen_client::Tier;
use docgen_config::Theme;
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Tabs, Wrap},
};

use crate::ui::{components::MarkdownRenderer, theme::ThemeExt};

/// Configuration for rendering the documentation viewer.
pub struct ViewerRenderConfig<'a> {
    pub repo_name: &'a str,
    pub active_tier: Tier,
    /// Markdown of the active tier, exactly as returned by the backend.
    pub content: &'a str,
    pub scroll: u16,
    pub theme: &'a Theme,
}

/// Render the viewer and return the scroll offset actually applied.
pub fn render_viewer(f: &mut Frame, area: Rect, config: ViewerRenderConfig) -> u16 {
    let ViewerRenderConfig {
        repo_name,
        active_tier,
        content,
        scroll,
        theme,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(3),
            Constraint::Length(1),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new(format!("Documentation for {repo_name}")).style(theme.title()),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new("Select your experience level to view tailored documentation")
            .style(theme.text_dim()),
        chunks[1],
    );

    let titles: Vec<Line> = Tier::ALL
        .iter()
        .map(|tier| Line::from(format!("{} {}", tier.icon(), tier.label())))
        .collect();
    f.render_widget(
        Tabs::new(titles)
            .select(active_tier.index())
            .style(theme.tab_inactive())
            .highlight_style(theme.tab_active())
            .divider(Span::styled(" │ ", theme.border())),
        chunks[2],
    );

    let text = MarkdownRenderer::new(*theme).render(content);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(theme.border())
        .title(format!(" {} ", active_tier.label()));
    let inner = block.inner(chunks[3]);
    let paragraph = Paragraph::new(text).wrap(Wrap { trim: false });
    let max_scroll = paragraph
        .line_count(inner.width)
        .saturating_sub(inner.height as usize);
    let scroll = scroll.min(u16::try_from(max_scroll).unwrap_or(u16::MAX));

    f.render_widget(paragraph.block(block).scroll((scroll, 0)), chunks[3]);

    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled("[d] ", theme.title()),
            Span::styled(
                format!("Download {} Documentation", active_tier.label()),
                theme.success(),
            ),
            Span::raw("   "),
            Span::styled("[n] ", theme.title()),
            Span::styled("Generate New Documentation", theme.text()),
        ])),
        chunks[4],
    );

    scroll
}
