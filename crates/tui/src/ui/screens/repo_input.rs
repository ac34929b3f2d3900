//! Repository URL form rendering.
//!
//! Renders the title, URL input, validation message, submit button, and the
//! example repositories.

use docgen_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::ThemeExt;

/// Configuration for rendering the repository form.
pub struct RepoInputRenderConfig<'a> {
    pub value: &'a str,
    /// Cursor position in characters.
    pub cursor: usize,
    pub placeholder: &'a str,
    pub validation_message: Option<&'a str>,
    pub examples: &'a [&'a str],
    pub selected_example: usize,
    /// The form is disabled while a submission is in flight.
    pub loading: bool,
    pub theme: &'a Theme,
}

/// Render the repository form.
pub fn render_repo_input(f: &mut Frame, area: Rect, config: RepoInputRenderConfig) {
    let RepoInputRenderConfig {
        value,
        cursor,
        placeholder,
        validation_message,
        examples,
        selected_example,
        loading,
        theme,
    } = config;

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(3),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Length(examples.len() as u16),
            Constraint::Min(0),
        ])
        .split(area);

    f.render_widget(
        Paragraph::new("Smart Documentation Generator")
            .style(theme.title())
            .alignment(Alignment::Center),
        chunks[0],
    );
    f.render_widget(
        Paragraph::new(
            "Generate beginner, intermediate, and advanced documentation for any public GitHub repository",
        )
        .style(theme.text_dim())
        .alignment(Alignment::Center),
        chunks[1],
    );

    render_input_box(f, chunks[3], value, cursor, placeholder, loading, theme);

    if let Some(message) = validation_message {
        f.render_widget(
            Paragraph::new(message.to_string()).style(theme.error()),
            chunks[4],
        );
    }

    let (label, style) = if loading {
        ("Generating Documentation...", theme.disabled())
    } else {
        ("Generate Documentation", theme.highlight().add_modifier(Modifier::BOLD))
    };
    f.render_widget(
        Paragraph::new(Line::from(vec![
            Span::styled(format!(" {label} "), style),
            Span::styled("  Enter", theme.text_dim()),
        ])),
        chunks[5],
    );

    f.render_widget(
        Paragraph::new("Try these examples:").style(theme.text_dim()),
        chunks[7],
    );

    let example_lines: Vec<Line> = examples
        .iter()
        .enumerate()
        .map(|(idx, url)| {
            let selected = idx == selected_example && !loading;
            let marker = if selected { "▸ " } else { "  " };
            let style = if loading {
                theme.disabled()
            } else if selected {
                theme.highlight()
            } else {
                theme.info()
            };
            Line::from(vec![
                Span::styled(marker, theme.title()),
                Span::styled(format!("{}. ", idx + 1), theme.text_dim()),
                Span::styled((*url).to_string(), style),
            ])
        })
        .collect();
    f.render_widget(Paragraph::new(example_lines), chunks[8]);
}

fn render_input_box(
    f: &mut Frame,
    area: Rect,
    value: &str,
    cursor: usize,
    placeholder: &str,
    loading: bool,
    theme: &Theme,
) {
    let border = if loading {
        theme.disabled()
    } else {
        theme.border_focused()
    };
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(border)
        .title("GitHub Repository URL");
    let inner_width = area.width.saturating_sub(2) as usize;

    // Keep the cursor visible by scrolling long values horizontally.
    let scroll = cursor.saturating_sub(inner_width.saturating_sub(1));
    let content = if value.is_empty() {
        Span::styled(placeholder.to_string(), theme.disabled())
    } else {
        let visible: String = value.chars().skip(scroll).take(inner_width).collect();
        let style = if loading { theme.disabled() } else { theme.text() };
        Span::styled(visible, style)
    };
    f.render_widget(Paragraph::new(Line::from(content)).block(block), area);

    if !loading && area.width > 2 && area.height > 2 {
        let x = area.x + 1 + (cursor - scroll) as u16;
        f.set_cursor_position(Position::new(x, area.y + 1));
    }
}
