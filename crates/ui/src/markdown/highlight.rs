use ratatui::style::{Color, Style};
use ratatui::text::{Line, Span};
use syntect::easy::HighlightLines;
use syntect::highlighting::{Theme, ThemeSet};
use syntect::parsing::SyntaxSet;
use syntect::util::LinesWithEndings;

/// Syntax highlighting for fenced code blocks.
///
/// Loading the syntax set is expensive, so one highlighter is held by the
/// markdown renderer for the life of the app.
pub struct CodeHighlighter {
    syntax_set: SyntaxSet,
    theme: Theme,
}

impl CodeHighlighter {
    pub fn new() -> Self {
        let theme_set = ThemeSet::load_defaults();
        Self {
            syntax_set: SyntaxSet::load_defaults_newlines(),
            theme: theme_set.themes["base16-ocean.dark"].clone(),
        }
    }

    /// Highlight a code block, one styled `Line` per source line.
    ///
    /// The language token is tried as a token, a name, and an extension;
    /// unknown languages fall back to plain text rather than failing.
    pub fn highlight(&self, code: &str, lang: &str) -> Vec<Line<'static>> {
        let syntax = self
            .syntax_set
            .find_syntax_by_token(lang)
            .or_else(|| self.syntax_set.find_syntax_by_name(lang))
            .or_else(|| self.syntax_set.find_syntax_by_extension(lang))
            .unwrap_or_else(|| self.syntax_set.find_syntax_plain_text());

        let mut highlighter = HighlightLines::new(syntax, &self.theme);
        let mut lines = Vec::new();

        for source_line in LinesWithEndings::from(code) {
            let mut spans = Vec::new();
            if let Ok(ranges) = highlighter.highlight_line(source_line, &self.syntax_set) {
                for (style, text) in ranges {
                    let text = text.trim_end_matches('\n');
                    if text.is_empty() {
                        continue;
                    }
                    let color = Self::to_ratatui_color(&style.foreground);
                    spans.push(Span::styled(text.to_string(), Style::default().fg(color)));
                }
            } else {
                spans.push(Span::styled(
                    source_line.trim_end_matches('\n').to_string(),
                    Style::default().fg(self.plain_color()),
                ));
            }
            lines.push(Line::from(spans));
        }

        lines
    }

    fn to_ratatui_color(color: &syntect::highlighting::Color) -> Color {
        Color::Rgb(color.r, color.g, color.b)
    }

    /// Default text color from the highlighting theme
    pub fn plain_color(&self) -> Color {
        let fallback = syntect::highlighting::Color { r: 198, g: 200, b: 209, a: 255 };
        let fg = self.theme.settings.foreground.as_ref().unwrap_or(&fallback);
        Color::Rgb(fg.r, fg.g, fg.b)
    }
}

impl Default for CodeHighlighter {
    fn default() -> Self {
        Self::new()
    }
}
