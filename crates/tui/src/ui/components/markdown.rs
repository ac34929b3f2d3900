//! Markdown renderer for TUI display.
//!
//! Renders markdown content to Ratatui text using `pulldown-cmark`.
//! Fenced code blocks are passed through the syntax highlighter.
//!
//! # Example
//!
//! ```rust
//! use docgen_config::{ColorTheme, Theme};
//! use docgen_tui::ui::components::MarkdownRenderer;
//!
//! let renderer = MarkdownRenderer::new(Theme::from_color_theme(ColorTheme::Dark));
//! let text = renderer.render("# Heading\n\nSome **bold** text.");
//! assert_eq!(text.lines[0].spans[0].content, "Heading");
//! ```

use docgen_config::Theme;
use pulldown_cmark::{CodeBlockKind, Event, HeadingLevel, Options, Parser, Tag, TagEnd};
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};

use crate::ui::{
    syntax::{fence_language, highlight_code},
    theme::ThemeExt,
};

/// Width of horizontal rules.
const RULE_WIDTH: usize = 40;

/// Prefix drawn before each line of a code block.
const CODE_GUTTER: &str = "  ";

/// Renders markdown content to Ratatui text.
#[derive(Debug, Clone)]
pub struct MarkdownRenderer {
    theme: Theme,
}

impl MarkdownRenderer {
    /// Create a new markdown renderer with the given theme.
    pub fn new(theme: Theme) -> Self {
        Self { theme }
    }

    /// Render markdown string to Ratatui Text.
    pub fn render(&self, markdown: &str) -> Text<'static> {
        let options = Options::ENABLE_TABLES
            | Options::ENABLE_STRIKETHROUGH
            | Options::ENABLE_TASKLISTS;
        let mut state = RenderState::new(&self.theme);
        for event in Parser::new_ext(markdown, options) {
            state.handle(event);
        }
        state.finish()
    }
}

struct CodeBlock {
    language: Option<String>,
    buffer: String,
}

struct LinkState {
    url: String,
    text: String,
}

struct RenderState<'t> {
    theme: &'t Theme,
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
    styles: Vec<Style>,
    /// One entry per open list; `Some(n)` is the next ordinal of an ordered list.
    lists: Vec<Option<u64>>,
    quote_depth: usize,
    code: Option<CodeBlock>,
    link: Option<LinkState>,
    table_cell: usize,
}

impl<'t> RenderState<'t> {
    fn new(theme: &'t Theme) -> Self {
        Self {
            theme,
            lines: Vec::new(),
            current: Vec::new(),
            styles: vec![theme.text()],
            lists: Vec::new(),
            quote_depth: 0,
            code: None,
            link: None,
            table_cell: 0,
        }
    }

    fn style(&self) -> Style {
        self.styles.last().copied().unwrap_or_else(|| self.theme.text())
    }

    fn push_style(&mut self, f: impl FnOnce(Style) -> Style) {
        let next = f(self.style());
        self.styles.push(next);
    }

    fn pop_style(&mut self) {
        if self.styles.len() > 1 {
            self.styles.pop();
        }
    }

    fn push_span(&mut self, content: String, style: Style) {
        if !content.is_empty() {
            self.current.push(Span::styled(content, style));
        }
    }

    /// Emit the pending spans as a line, prefixed for any open block quotes.
    fn flush_line(&mut self) {
        if self.current.is_empty() {
            return;
        }
        let spans = std::mem::take(&mut self.current);
        self.emit(spans);
    }

    fn emit(&mut self, spans: Vec<Span<'static>>) {
        let mut line = Vec::with_capacity(spans.len() + 1);
        if self.quote_depth > 0 {
            line.push(Span::styled(
                "│ ".repeat(self.quote_depth),
                self.theme.text_dim(),
            ));
        }
        line.extend(spans);
        self.lines.push(Line::from(line));
    }

    fn blank_line(&mut self) {
        let last_blank = self
            .lines
            .last()
            .is_some_and(|l| l.spans.iter().all(|s| s.content.trim().is_empty()));
        if !self.lines.is_empty() && !last_blank {
            self.lines.push(Line::default());
        }
    }

    fn handle(&mut self, event: Event<'_>) {
        match event {
            Event::Start(tag) => self.start(tag),
            Event::End(tag) => self.end(tag),
            Event::Text(text) => {
                if let Some(code) = self.code.as_mut() {
                    code.buffer.push_str(&text);
                    return;
                }
                if let Some(link) = self.link.as_mut() {
                    link.text.push_str(&text);
                }
                let style = self.style();
                self.push_span(text.into_string(), style);
            }
            Event::Code(code) => {
                let style = self.theme.code();
                self.push_span(code.into_string(), style);
            }
            Event::Html(html) | Event::InlineHtml(html) => {
                let style = self.theme.text_dim();
                for (idx, part) in html.split('\n').enumerate() {
                    if idx > 0 {
                        self.flush_line();
                    }
                    self.push_span(part.to_string(), style);
                }
            }
            Event::SoftBreak => {
                let style = self.style();
                self.push_span(" ".to_string(), style);
            }
            Event::HardBreak => self.flush_line(),
            Event::Rule => {
                self.flush_line();
                self.lines
                    .push(Line::from("─".repeat(RULE_WIDTH)).style(self.theme.text_dim()));
                self.lines.push(Line::default());
            }
            Event::TaskListMarker(checked) => {
                let marker = if checked { "[x] " } else { "[ ] " };
                let style = self.theme.info();
                self.push_span(marker.to_string(), style);
            }
            _ => {}
        }
    }

    fn start(&mut self, tag: Tag<'_>) {
        match tag {
            Tag::Paragraph => {}
            Tag::Heading { level, .. } => {
                self.flush_line();
                self.blank_line();
                let style = match level {
                    HeadingLevel::H1 => self.theme.title().add_modifier(Modifier::UNDERLINED),
                    HeadingLevel::H2 => self.theme.title(),
                    HeadingLevel::H3 => Style::default()
                        .fg(self.theme.accent)
                        .add_modifier(Modifier::BOLD),
                    _ => self.theme.text().add_modifier(Modifier::BOLD),
                };
                self.styles.push(style);
            }
            Tag::Strong => self.push_style(|s| s.add_modifier(Modifier::BOLD)),
            Tag::Emphasis => self.push_style(|s| s.add_modifier(Modifier::ITALIC)),
            Tag::Strikethrough => self.push_style(|s| s.add_modifier(Modifier::CROSSED_OUT)),
            Tag::Link { dest_url, .. } => {
                let accent = self.theme.accent;
                self.push_style(|s| s.fg(accent).add_modifier(Modifier::UNDERLINED));
                self.link = Some(LinkState {
                    url: dest_url.into_string(),
                    text: String::new(),
                });
            }
            Tag::BlockQuote { .. } => {
                self.flush_line();
                self.quote_depth += 1;
                self.push_style(|s| s.add_modifier(Modifier::ITALIC));
            }
            Tag::CodeBlock(kind) => {
                self.flush_line();
                let language = match kind {
                    CodeBlockKind::Fenced(info) => fence_language(&info).map(str::to_string),
                    CodeBlockKind::Indented => None,
                };
                self.code = Some(CodeBlock {
                    language,
                    buffer: String::new(),
                });
            }
            Tag::List(start) => {
                self.flush_line();
                self.lists.push(start);
            }
            Tag::Item => {
                self.flush_line();
                let depth = self.lists.len().saturating_sub(1);
                let marker = match self.lists.last_mut() {
                    Some(Some(n)) => {
                        let marker = format!("{n}. ");
                        *n += 1;
                        marker
                    }
                    _ => "• ".to_string(),
                };
                self.push_span("  ".repeat(depth), Style::default());
                let style = Style::default().fg(self.theme.accent);
                self.push_span(marker, style);
            }
            Tag::Table(_) => {
                self.flush_line();
            }
            Tag::TableHead => self.push_style(|s| s.add_modifier(Modifier::BOLD)),
            Tag::TableRow => {}
            Tag::TableCell => {
                if self.table_cell > 0 {
                    let style = self.theme.border();
                    self.push_span(" │ ".to_string(), style);
                }
                self.table_cell += 1;
            }
            _ => {}
        }
    }

    fn end(&mut self, tag: TagEnd) {
        match tag {
            TagEnd::Paragraph => {
                self.flush_line();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Heading(_) => {
                self.flush_line();
                self.pop_style();
                self.blank_line();
            }
            TagEnd::Strong | TagEnd::Emphasis | TagEnd::Strikethrough => self.pop_style(),
            TagEnd::Link => {
                self.pop_style();
                if let Some(link) = self.link.take()
                    && !link.url.is_empty()
                    && link.url != link.text
                {
                    let style = self.theme.text_dim();
                    self.push_span(format!(" ({})", link.url), style);
                }
            }
            TagEnd::BlockQuote { .. } => {
                self.flush_line();
                self.pop_style();
                self.quote_depth = self.quote_depth.saturating_sub(1);
                self.blank_line();
            }
            TagEnd::CodeBlock => {
                if let Some(code) = self.code.take() {
                    self.render_code_block(code);
                }
            }
            TagEnd::List(_) => {
                self.flush_line();
                self.lists.pop();
                if self.lists.is_empty() {
                    self.blank_line();
                }
            }
            TagEnd::Item => self.flush_line(),
            TagEnd::TableHead => {
                self.flush_line();
                self.pop_style();
                self.table_cell = 0;
                self.lines
                    .push(Line::from("─".repeat(RULE_WIDTH)).style(self.theme.border()));
            }
            TagEnd::TableRow => {
                self.flush_line();
                self.table_cell = 0;
            }
            TagEnd::Table => self.blank_line(),
            _ => {}
        }
    }

    fn render_code_block(&mut self, code: CodeBlock) {
        let body = code.buffer.strip_suffix('\n').unwrap_or(&code.buffer);

        if let Some(language) = code.language.as_deref() {
            let label = Style::default()
                .fg(self.theme.text_dim)
                .add_modifier(Modifier::ITALIC);
            self.emit(vec![Span::styled(format!("{CODE_GUTTER}{language}"), label)]);
        }

        let highlighted = highlight_code(body, code.language.as_deref(), self.theme);
        for line in highlighted.lines {
            let mut spans = vec![Span::styled(CODE_GUTTER, self.theme.code())];
            spans.extend(line.spans);
            self.emit(spans);
        }
        self.blank_line();
    }

    fn finish(mut self) -> Text<'static> {
        self.flush_line();
        while self
            .lines
            .last()
            .is_some_and(|l| l.spans.iter().all(|s| s.content.is_empty()))
        {
            self.lines.pop();
        }
        Text::from(self.lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use docgen_config::ColorTheme;

    fn theme() -> Theme {
        Theme::from_color_theme(ColorTheme::Dark)
    }

    fn render(md: &str) -> Text<'static> {
        MarkdownRenderer::new(theme()).render(md)
    }

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn all_lines(text: &Text) -> Vec<String> {
        text.lines.iter().map(line_text).collect()
    }

    #[test]
    fn test_heading_styles() {
        let theme = theme();
        let text = render("# Title\n\n## Section\n\nbody");
        let lines = all_lines(&text);
        assert_eq!(lines, vec!["Title", "", "Section", "", "body"]);

        let h1 = &text.lines[0].spans[0].style;
        assert_eq!(h1.fg, Some(theme.accent));
        assert!(h1.add_modifier.contains(Modifier::UNDERLINED));
        let h2 = &text.lines[2].spans[0].style;
        assert!(h2.add_modifier.contains(Modifier::BOLD));
        assert!(!h2.add_modifier.contains(Modifier::UNDERLINED));
    }

    #[test]
    fn test_inline_styles_nest_and_reset() {
        let text = render("plain **bold *both*** after");
        let spans = &text.lines[0].spans;
        let both = spans.iter().find(|s| s.content == "both").expect("span");
        assert!(both.style.add_modifier.contains(Modifier::BOLD));
        assert!(both.style.add_modifier.contains(Modifier::ITALIC));
        let after = spans.iter().find(|s| s.content == " after").expect("span");
        assert!(after.style.add_modifier.is_empty());
    }

    #[test]
    fn test_inline_code_uses_code_style() {
        let theme = theme();
        let text = render("Run `npm start` now");
        let code = text.lines[0]
            .spans
            .iter()
            .find(|s| s.content == "npm start")
            .expect("code span");
        assert_eq!(code.style, theme.code());
    }

    #[test]
    fn test_unordered_and_ordered_lists() {
        let lines = all_lines(&render("- one\n- two\n  - nested\n\n1. first\n2. second"));
        assert_eq!(
            lines,
            vec!["• one", "• two", "  • nested", "", "1. first", "2. second"]
        );
    }

    #[test]
    fn test_ordered_list_custom_start() {
        let lines = all_lines(&render("3. three\n4. four"));
        assert_eq!(lines, vec!["3. three", "4. four"]);
    }

    #[test]
    fn test_task_list() {
        let lines = all_lines(&render("- [x] done\n- [ ] todo"));
        assert_eq!(lines, vec!["• [x] done", "• [ ] todo"]);
    }

    #[test]
    fn test_fenced_code_block_highlighted() {
        let theme = theme();
        let text = render("```js\nconst x = 1;\n```\n\nafter");
        let lines = all_lines(&text);
        assert_eq!(lines, vec!["  js", "  const x = 1;", "", "after"]);

        let keyword = text.lines[1]
            .spans
            .iter()
            .find(|s| s.content == "const")
            .expect("keyword span");
        assert_eq!(keyword.style.fg, Some(theme.syntax_keyword));
    }

    #[test]
    fn test_code_label_ignores_fence_attributes() {
        let theme = theme();
        let text = render("```js title=app.js\nconst x = 1;\n```");
        let lines = all_lines(&text);
        assert_eq!(lines[0], "  js");

        let keyword = text.lines[1]
            .spans
            .iter()
            .find(|s| s.content == "const")
            .expect("keyword span");
        assert_eq!(keyword.style.fg, Some(theme.syntax_keyword));
    }

    #[test]
    fn test_untagged_code_block_is_plain() {
        let theme = theme();
        let text = render("```\nfoo bar\nbaz\n```");
        let lines = all_lines(&text);
        assert_eq!(lines, vec!["  foo bar", "  baz"]);
        assert!(
            text.lines[0]
                .spans
                .iter()
                .all(|s| s.style == theme.code())
        );
    }

    #[test]
    fn test_link_shows_destination() {
        let lines = all_lines(&render("See [docs](https://expressjs.com)."));
        assert_eq!(lines, vec!["See docs (https://expressjs.com)."]);

        let lines = all_lines(&render("<https://expressjs.com>"));
        assert_eq!(lines, vec!["https://expressjs.com"]);
    }

    #[test]
    fn test_block_quote_prefixed() {
        let lines = all_lines(&render("> quoted text"));
        assert_eq!(lines, vec!["│ quoted text"]);
    }

    #[test]
    fn test_rule_and_table() {
        let lines = all_lines(&render("| a | b |\n|---|---|\n| 1 | 2 |\n\n---"));
        assert_eq!(lines[0], "a │ b");
        assert!(lines[1].starts_with('─'));
        assert_eq!(lines[2], "1 │ 2");
        assert!(lines.iter().skip(3).any(|l| l == &"─".repeat(RULE_WIDTH)));
    }

    #[test]
    fn test_empty_input() {
        assert!(render("").lines.is_empty());
    }
}
