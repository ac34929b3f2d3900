//! Loading indicator shown while documentation is generated.
//!
//! The stage list is fixed. Only the spinner animates; the backend reports
//! no incremental progress.

use docgen_config::Theme;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::Modifier,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use crate::ui::theme::{ThemeExt, spinner_char};

/// Visual marker of a loading stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StageStatus {
    Done,
    Active,
    Pending,
}

impl StageStatus {
    fn marker(self) -> &'static str {
        match self {
            Self::Done => "✓",
            Self::Active => "●",
            Self::Pending => "○",
        }
    }
}

/// The four stages displayed under the spinner.
pub const LOADING_STAGES: [(&str, StageStatus); 4] = [
    ("Fetching repository structure", StageStatus::Done),
    ("Analyzing code complexity", StageStatus::Active),
    ("Gathering context", StageStatus::Pending),
    ("Generating documentation", StageStatus::Pending),
];

/// Render the loading indicator with the spinner at `spinner_frame`.
pub fn render_loading_indicator(f: &mut Frame, area: Rect, spinner_frame: u8, theme: &Theme) {
    let mut lines = vec![
        Line::default(),
        Line::from(vec![
            Span::styled(format!("{} ", spinner_char(spinner_frame)), theme.info()),
            Span::styled("Generating Documentation", theme.title()),
        ]),
        Line::from(Span::styled("This may take 30-60 seconds...", theme.text_dim())),
        Line::default(),
    ];

    for (label, status) in LOADING_STAGES {
        let (marker_style, label_style) = match status {
            StageStatus::Done => (theme.success(), theme.text()),
            StageStatus::Active => (
                theme.info(),
                theme.text().add_modifier(Modifier::BOLD),
            ),
            StageStatus::Pending => (theme.disabled(), theme.text_dim()),
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{} ", status.marker()), marker_style),
            Span::styled(format!("{label:<30}"), label_style),
        ]));
    }

    let widget = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border())
                .title("Generating"),
        )
        .alignment(Alignment::Center);
    f.render_widget(widget, area);
}
