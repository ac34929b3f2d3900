//! Rendering logic for the TUI app.
//!
//! Responsibilities:
//! - Render the main layout (header, banners, body, footer, toasts)
//! - Dispatch to the body renderer for the current submission state
//!
//! Non-responsibilities:
//! - Does NOT handle input
//! - Does NOT mutate app state (except for clamping the viewer scroll offset)

use crate::app::App;
use crate::app::form::EXAMPLE_REPO_URLS;
use crate::app::state::{BackendHealth, BodyView, FOOTER_HEIGHT, HEADER_HEIGHT};
use crate::ui::screens::{
    RepoInputRenderConfig, ViewerRenderConfig, render_repo_input, render_viewer,
};
use crate::ui::theme::ThemeExt;
use crate::ui::toast::render_toasts;
use crate::ui::widgets::{
    BACKEND_BANNER_HEIGHT, error_banner_height, render_backend_banner, render_error_banner,
    render_loading_indicator,
};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

impl App {
    /// Render the application UI.
    pub fn render(&mut self, f: &mut Frame) {
        let area = f.area();
        self.last_area = area;
        let theme = self.theme;

        f.render_widget(
            Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
            area,
        );

        let backend_height = if self.backend_health.shows_banner() {
            BACKEND_BANNER_HEIGHT
        } else {
            0
        };
        let error_height = self
            .submission
            .error()
            .map(|message| error_banner_height(message, area.width))
            .unwrap_or(0);

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(backend_height),
                Constraint::Length(error_height),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(area);

        self.render_header(f, chunks[0]);

        if backend_height > 0 {
            render_backend_banner(f, chunks[1], &theme);
        }
        if let Some(message) = self.submission.error() {
            render_error_banner(f, chunks[2], message, &theme);
        }

        let body = pad(chunks[3]);
        match self.body_view() {
            BodyView::Form => render_repo_input(
                f,
                body,
                RepoInputRenderConfig {
                    value: self.form.value(),
                    cursor: self.form.input.cursor_position(),
                    placeholder: self.form.input.placeholder().unwrap_or_default(),
                    validation_message: self.form.validation_message.as_deref(),
                    examples: &EXAMPLE_REPO_URLS,
                    selected_example: self.form.selected_example,
                    loading: self.submission.is_loading(),
                    theme: &theme,
                },
            ),
            BodyView::Loading => render_loading_indicator(f, body, self.spinner_frame, &theme),
            BodyView::Viewer => {
                if let (Some(result), Some(viewer)) =
                    (self.submission.result(), self.viewer.as_mut())
                {
                    viewer.scroll = render_viewer(
                        f,
                        body,
                        ViewerRenderConfig {
                            repo_name: &result.repo_name,
                            active_tier: viewer.active_tier,
                            content: result.documentation.get(viewer.active_tier),
                            scroll: viewer.scroll,
                            theme: &theme,
                        },
                    );
                }
            }
        }

        self.render_footer(f, chunks[4]);
        render_toasts(f, &self.toasts, &theme);
    }

    fn render_header(&self, f: &mut Frame, area: Rect) {
        let theme = &self.theme;
        let (marker, style) = match self.backend_health {
            BackendHealth::Healthy => ("[+]", theme.success()),
            BackendHealth::Unreachable => ("[!]", theme.error()),
            BackendHealth::Unknown => ("[?]", theme.text_dim()),
        };

        let header = Paragraph::new(Line::from(vec![
            Span::styled("Docgen", theme.title()),
            Span::raw(" - "),
            Span::styled("Smart Documentation Generator", theme.text()),
            Span::raw("  "),
            Span::styled(format!("{marker} {}", self.backend_health.label()), style),
            Span::raw("  "),
            Span::styled(
                format!("{} mode (Ctrl+D)", self.color_theme.display_name()),
                theme.info(),
            ),
        ]))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border()),
        );
        f.render_widget(header, area);
    }

    fn render_footer(&self, f: &mut Frame, area: Rect) {
        let hints: &[(&str, &str)] = match self.body_view() {
            BodyView::Form => &[
                ("Enter", "Generate"),
                ("↑/↓", "Example"),
                ("Ctrl+E", "Use example"),
                ("Ctrl+D", "Theme"),
                ("Esc", "Quit"),
            ],
            BodyView::Loading => &[("Ctrl+D", "Theme"), ("q", "Quit")],
            BodyView::Viewer => &[
                ("1-3", "Tier"),
                ("j/k", "Scroll"),
                ("d", "Download"),
                ("n", "New"),
                ("Ctrl+D", "Theme"),
                ("q", "Quit"),
            ],
        };

        let theme = &self.theme;
        let mut spans = Vec::with_capacity(hints.len() * 3);
        for (idx, (key, label)) in hints.iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" | ", theme.border()));
            }
            spans.push(Span::styled(*key, theme.title()));
            spans.push(Span::styled(format!(" {label}"), theme.text_dim()));
        }

        f.render_widget(
            Paragraph::new(Line::from(spans)).block(
                Block::default()
                    .borders(Borders::ALL)
                    .border_style(theme.border()),
            ),
            area,
        );
    }
}

/// Inset the body by one column on each side.
fn pad(area: Rect) -> Rect {
    Rect {
        x: area.x.saturating_add(1),
        width: area.width.saturating_sub(2),
        ..area
    }
}
