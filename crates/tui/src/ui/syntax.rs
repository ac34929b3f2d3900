//! Syntax highlighting for fenced code blocks.
//!
//! Parses code with `syntect`'s bundled grammars and maps the resulting
//! scopes onto the theme's syntax palette, so highlighted code follows the
//! light/dark theme instead of a syntect color scheme.
//!
//! Invariants:
//! - The concatenated span text of the output equals the input, line for line.
//! - Languages without a bundled grammar render as plain code-styled lines.
//! - A grammar error degrades the whole block to plain code.

use docgen_config::Theme;
use ratatui::{
    style::{Modifier, Style},
    text::{Line, Span, Text},
};
use std::sync::LazyLock;
use syntect::easy::ScopeRangeIterator;
use syntect::parsing::{ParseState, Scope, ScopeStack, SyntaxReference, SyntaxSet};
use syntect::util::LinesWithEndings;

use crate::ui::theme::ThemeExt;

static SYNTAXES: LazyLock<SyntaxSet> = LazyLock::new(SyntaxSet::load_defaults_newlines);

/// Palette slot a scope is drawn with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TokenClass {
    Comment,
    String,
    Number,
    Operator,
    Keyword,
    Function,
    Type,
    Punctuation,
}

/// Scope prefixes in match priority order. The first class with a prefix
/// anywhere on the scope stack wins, so a quote inside a string is a string.
static SCOPE_CLASSES: LazyLock<Vec<(Scope, TokenClass)>> = LazyLock::new(|| {
    [
        ("comment", TokenClass::Comment),
        ("string", TokenClass::String),
        ("constant.numeric", TokenClass::Number),
        ("keyword.operator", TokenClass::Operator),
        ("keyword", TokenClass::Keyword),
        ("storage", TokenClass::Keyword),
        ("constant.language", TokenClass::Keyword),
        ("entity.name.function", TokenClass::Function),
        ("support.function", TokenClass::Function),
        ("variable.function", TokenClass::Function),
        ("entity.name.type", TokenClass::Type),
        ("entity.name.class", TokenClass::Type),
        ("entity.name.tag", TokenClass::Type),
        ("support.type", TokenClass::Type),
        ("support.class", TokenClass::Type),
        ("punctuation", TokenClass::Punctuation),
    ]
    .into_iter()
    .filter_map(|(prefix, class)| Scope::new(prefix).ok().map(|scope| (scope, class)))
    .collect()
});

/// First word of a fence info string (`js title=app.js` -> `js`).
pub fn fence_language(info: &str) -> Option<&str> {
    info.trim()
        .split(|c: char| c.is_whitespace() || c == ',' || c == '{')
        .next()
        .filter(|tag| !tag.is_empty())
}

/// Resolve a fence info string to a bundled grammar.
///
/// Tokens are matched against grammar names and file extensions. JSX and
/// TypeScript fences use the JavaScript grammar.
pub fn find_syntax(info: &str) -> Option<&'static SyntaxReference> {
    let tag = fence_language(info)?.to_ascii_lowercase();
    let token = match tag.as_str() {
        "jsx" | "mjs" | "cjs" | "node" | "ts" | "tsx" | "typescript" => "js",
        "shell" | "zsh" | "console" | "shellscript" => "bash",
        "golang" => "go",
        "jsonc" => "json",
        "h" | "cc" | "hpp" => "cpp",
        other => other,
    };
    SYNTAXES.find_syntax_by_token(token)
}

/// Highlight a block of code for the given fence language.
///
/// Returns a `Text` with one `Line` per source line.
pub fn highlight_code(code: &str, language: Option<&str>, theme: &Theme) -> Text<'static> {
    let base = theme.code();
    let Some(syntax) = language.and_then(find_syntax) else {
        return plain_code(code, base);
    };

    highlight_with(code, syntax, base, theme).unwrap_or_else(|| {
        tracing::debug!(syntax = %syntax.name, "Grammar failed, rendering code block plain");
        plain_code(code, base)
    })
}

fn highlight_with(
    code: &str,
    syntax: &SyntaxReference,
    base: Style,
    theme: &Theme,
) -> Option<Text<'static>> {
    let mut state = ParseState::new(syntax);
    let mut stack = ScopeStack::new();
    let mut out = LineBuilder::default();

    for line in LinesWithEndings::from(code) {
        let ops = state.parse_line(line, &SYNTAXES).ok()?;
        for (range, op) in ScopeRangeIterator::new(&ops, line) {
            stack.apply(op).ok()?;
            if range.is_empty() {
                continue;
            }
            out.push(&line[range], scope_style(&stack, base, theme));
        }
    }

    Some(out.finish())
}

fn classify(stack: &ScopeStack) -> Option<TokenClass> {
    SCOPE_CLASSES.iter().find_map(|(prefix, class)| {
        stack
            .as_slice()
            .iter()
            .any(|scope| prefix.is_prefix_of(*scope))
            .then_some(*class)
    })
}

fn scope_style(stack: &ScopeStack, base: Style, theme: &Theme) -> Style {
    match classify(stack) {
        Some(TokenClass::Comment) => base.fg(theme.syntax_comment),
        Some(TokenClass::String) => base.fg(theme.syntax_string),
        Some(TokenClass::Number) => base.fg(theme.syntax_number),
        Some(TokenClass::Keyword) => base.fg(theme.syntax_keyword).add_modifier(Modifier::BOLD),
        Some(TokenClass::Function) => base.fg(theme.syntax_function),
        Some(TokenClass::Type) => base.fg(theme.syntax_type),
        Some(TokenClass::Operator | TokenClass::Punctuation) => {
            base.fg(theme.syntax_punctuation)
        }
        None => base,
    }
}

fn plain_code(code: &str, style: Style) -> Text<'static> {
    Text::from(
        code.split('\n')
            .map(|line| Line::from(Span::styled(line.to_string(), style)))
            .collect::<Vec<_>>(),
    )
}

/// Accumulates spans into lines, merging adjacent spans with equal styles.
#[derive(Default)]
struct LineBuilder {
    lines: Vec<Line<'static>>,
    current: Vec<Span<'static>>,
}

impl LineBuilder {
    /// Push text that may end a line.
    fn push(&mut self, content: &str, style: Style) {
        let mut parts = content.split('\n').peekable();
        while let Some(part) = parts.next() {
            let part = part.strip_suffix('\r').unwrap_or(part);
            if !part.is_empty() {
                match self.current.last_mut() {
                    Some(last) if last.style == style => {
                        last.content.to_mut().push_str(part);
                    }
                    _ => self.current.push(Span::styled(part.to_string(), style)),
                }
            }
            if parts.peek().is_some() {
                self.newline();
            }
        }
    }

    fn newline(&mut self) {
        self.lines.push(Line::from(std::mem::take(&mut self.current)));
    }

    fn finish(mut self) -> Text<'static> {
        self.newline();
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

    fn line_text(line: &Line) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn span_with<'a>(text: &'a Text, content: &str) -> &'a Span<'a> {
        text.lines
            .iter()
            .flat_map(|l| l.spans.iter())
            .find(|s| s.content.trim() == content)
            .unwrap_or_else(|| panic!("no span {content:?} in {text:?}"))
    }

    #[test]
    fn test_fence_language_takes_first_word() {
        assert_eq!(fence_language("js title=app.js"), Some("js"));
        assert_eq!(fence_language("rust,ignore"), Some("rust"));
        assert_eq!(fence_language("python {.numberLines}"), Some("python"));
        assert_eq!(fence_language("   "), None);
    }

    #[test]
    fn test_find_syntax_aliases() {
        assert!(find_syntax("js").is_some());
        assert!(find_syntax("PY").is_some());
        assert!(find_syntax("sh").is_some());
        assert!(find_syntax("rust,ignore").is_some());
        assert!(find_syntax("yml").is_some());
        assert!(find_syntax("jsx").is_some());
        assert!(find_syntax("html").is_some());
        assert!(find_syntax("css").is_some());
        assert!(find_syntax("").is_none());
        assert!(find_syntax("klingon").is_none());
    }

    #[test]
    fn test_highlight_keywords_and_functions() {
        let theme = theme();
        let text = highlight_code("fn main() {}", Some("rust"), &theme);
        assert_eq!(text.lines.len(), 1);
        assert_eq!(span_with(&text, "fn").style.fg, Some(theme.syntax_keyword));
        assert_eq!(span_with(&text, "main").style.fg, Some(theme.syntax_function));
    }

    #[test]
    fn test_highlight_strings_and_numbers() {
        let theme = theme();
        let text = highlight_code("app.listen(3000, \"ready\")", Some("js"), &theme);
        assert_eq!(span_with(&text, "3000").style.fg, Some(theme.syntax_number));
        assert_eq!(span_with(&text, "\"ready\"").style.fg, Some(theme.syntax_string));
    }

    #[test]
    fn test_highlight_comments() {
        let theme = theme();
        let text = highlight_code("npm install # fetch deps", Some("bash"), &theme);
        assert_eq!(span_with(&text, "# fetch deps").style.fg, Some(theme.syntax_comment));
    }

    #[test]
    fn test_sql_keywords_ignore_case() {
        let theme = theme();
        let text = highlight_code("SELECT id FROM users", Some("sql"), &theme);
        assert_eq!(span_with(&text, "SELECT").style.fg, Some(theme.syntax_keyword));
    }

    #[test]
    fn test_markup_languages_are_highlighted() {
        let theme = theme();
        let text = highlight_code("<div class=\"app\"></div>", Some("html"), &theme);
        assert_eq!(span_with(&text, "div").style.fg, Some(theme.syntax_type));

        let text = highlight_code("const el = <App />;", Some("jsx"), &theme);
        assert_eq!(span_with(&text, "const").style.fg, Some(theme.syntax_keyword));
    }

    #[test]
    fn test_content_preserved() {
        let theme = theme();
        let code = "fn main() {\n    println!(\"hi\");\n}";
        let text = highlight_code(code, Some("rust"), &theme);
        let rebuilt: Vec<String> = text.lines.iter().map(line_text).collect();
        assert_eq!(rebuilt.join("\n"), code);
    }

    #[test]
    fn test_crlf_line_endings_stripped() {
        let theme = theme();
        let text = highlight_code("x = 1\r\ny = 2", Some("python"), &theme);
        let rebuilt: Vec<String> = text.lines.iter().map(line_text).collect();
        assert_eq!(rebuilt, vec!["x = 1", "y = 2"]);
    }

    #[test]
    fn test_unknown_language_is_plain() {
        let theme = theme();
        let text = highlight_code("a b\nc", Some("klingon"), &theme);
        assert_eq!(text.lines.len(), 2);
        assert_eq!(text.lines[0].spans.len(), 1);
        assert_eq!(text.lines[0].spans[0].style, theme.code());

        let text = highlight_code("x", None, &theme);
        assert_eq!(line_text(&text.lines[0]), "x");
    }
}
