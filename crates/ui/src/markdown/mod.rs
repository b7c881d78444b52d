//! Markdown rendering for service output.
//!
//! Question, answer, and clarification text arrives as GitHub-flavored
//! markdown (headings, fenced code, pipe tables). This module turns it
//! into styled ratatui lines wrapped to the pane width. It is a
//! line-oriented pass, not a full CommonMark parser: the handful of
//! constructs the service actually emits are handled and everything else
//! renders as a wrapped paragraph.

mod highlight;

pub use highlight::CodeHighlighter;

use crate::theme::Theme;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Renders markdown source into styled, width-wrapped lines.
pub struct MarkdownRenderer {
    highlighter: CodeHighlighter,
}

impl MarkdownRenderer {
    pub fn new() -> Self {
        Self { highlighter: CodeHighlighter::new() }
    }

    /// Render `source` into lines no wider than `width`.
    pub fn render(&self, source: &str, width: usize) -> Vec<Line<'static>> {
        let mut lines = Vec::new();
        if width == 0 {
            return lines;
        }

        let source_lines: Vec<&str> = source.lines().collect();
        let mut i = 0;

        while i < source_lines.len() {
            let line = source_lines[i];
            let trimmed = line.trim_start();

            if let Some(fence_lang) = trimmed.strip_prefix("```") {
                i = self.render_code_block(&source_lines, i + 1, fence_lang.trim(), &mut lines);
            } else if is_table_row(trimmed) && is_table_start(&source_lines, i) {
                i = self.render_table(&source_lines, i, &mut lines);
            } else if let Some((level, text)) = parse_heading(trimmed) {
                self.render_heading(level, text, &mut lines);
                i += 1;
            } else if let Some(text) = trimmed.strip_prefix("> ").or_else(|| (trimmed == ">").then_some("")) {
                self.render_quote(text, width, &mut lines);
                i += 1;
            } else if let Some(text) = parse_bullet(trimmed) {
                self.render_list_item("•", text, width, &mut lines);
                i += 1;
            } else if let Some((marker, text)) = parse_ordered(trimmed) {
                self.render_list_item(&marker, text, width, &mut lines);
                i += 1;
            } else if trimmed.is_empty() {
                lines.push(Line::default());
                i += 1;
            } else {
                let tokens = inline_tokens(line.trim(), paragraph_style());
                lines.extend(wrap_tokens(&tokens, width));
                i += 1;
            }
        }

        lines
    }

    /// Fenced code: title row with the language, then highlighted lines
    /// indented under it. Returns the index past the closing fence.
    fn render_code_block(&self, source: &[&str], mut i: usize, lang: &str, lines: &mut Vec<Line<'static>>) -> usize {
        let mut code = String::new();
        while i < source.len() && source[i].trim_start() != "```" {
            code.push_str(source[i]);
            code.push('\n');
            i += 1;
        }
        let end = if i < source.len() { i + 1 } else { i };

        let title = if lang.is_empty() { "code".to_string() } else { lang.to_lowercase() };
        lines.push(Line::from(vec![
            Span::styled("┌ ", Theme::border()),
            Span::styled(title, Style::default().fg(Theme::MUTED).add_modifier(Modifier::ITALIC)),
        ]));

        for code_line in self.highlighter.highlight(code.trim_end_matches('\n'), lang) {
            let mut spans = vec![Span::styled("│ ", Theme::border())];
            spans.extend(code_line.spans);
            lines.push(Line::from(spans));
        }

        lines.push(Line::from(vec![Span::styled("└", Theme::border())]));
        end
    }

    fn render_heading(&self, level: usize, text: &str, lines: &mut Vec<Line<'static>>) {
        let style = Style::default().fg(Theme::PURPLE).add_modifier(Modifier::BOLD);
        let prefix = if level <= 2 { "" } else { "· " };
        lines.push(Line::from(vec![
            Span::styled(prefix.to_string(), Style::default().fg(Theme::MUTED)),
            Span::styled(text.to_string(), style),
        ]));
    }

    fn render_quote(&self, text: &str, width: usize, lines: &mut Vec<Line<'static>>) {
        let bar = Span::styled("│ ", Style::default().fg(Theme::CYAN));
        let tokens = inline_tokens(text, Style::default().fg(Theme::MUTED).add_modifier(Modifier::ITALIC));
        for wrapped in wrap_tokens(&tokens, width.saturating_sub(2)) {
            let mut spans = vec![bar.clone()];
            spans.extend(wrapped.spans);
            lines.push(Line::from(spans));
        }
    }

    fn render_list_item(&self, marker: &str, text: &str, width: usize, lines: &mut Vec<Line<'static>>) {
        let indent = marker.width() + 1;
        let tokens = inline_tokens(text, paragraph_style());
        for (idx, wrapped) in wrap_tokens(&tokens, width.saturating_sub(indent)).into_iter().enumerate() {
            let lead = if idx == 0 {
                Span::styled(format!("{} ", marker), Style::default().fg(Theme::BLUE))
            } else {
                Span::raw(" ".repeat(indent))
            };
            let mut spans = vec![lead];
            spans.extend(wrapped.spans);
            lines.push(Line::from(spans));
        }
    }

    /// Pipe table: bold header, muted rule, plain rows, columns padded to
    /// the widest cell. Returns the index past the table.
    fn render_table(&self, source: &[&str], start: usize, lines: &mut Vec<Line<'static>>) -> usize {
        let mut end = start;
        let mut rows: Vec<Vec<String>> = Vec::new();
        while end < source.len() && is_table_row(source[end].trim()) {
            rows.push(parse_cells(source[end].trim()));
            end += 1;
        }

        let separator_idx = rows.iter().position(|cells| is_separator_cells(cells));
        let columns = rows.iter().map(|r| r.len()).max().unwrap_or(0);
        let mut widths = vec![0usize; columns];
        for (idx, row) in rows.iter().enumerate() {
            if Some(idx) == separator_idx {
                continue;
            }
            for (col, cell) in row.iter().enumerate() {
                widths[col] = widths[col].max(cell.width());
            }
        }

        for (idx, row) in rows.iter().enumerate() {
            if Some(idx) == separator_idx {
                let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
                lines.push(Line::from(Span::styled(
                    format!(" {} ", rule.join("─┼─")),
                    Style::default().fg(Theme::MUTED),
                )));
                continue;
            }

            let header = separator_idx.is_some_and(|sep| idx < sep);
            let cell_style = if header {
                Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)
            } else {
                Style::default().fg(Theme::FG)
            };

            let mut spans = vec![Span::raw(" ")];
            for col in 0..columns {
                if col > 0 {
                    spans.push(Span::styled(" │ ", Style::default().fg(Theme::MUTED)));
                }
                let cell = row.get(col).map(String::as_str).unwrap_or("");
                let pad = widths[col].saturating_sub(cell.width());
                spans.push(Span::styled(format!("{}{}", cell, " ".repeat(pad)), cell_style));
            }
            lines.push(Line::from(spans));
        }

        end
    }
}

impl Default for MarkdownRenderer {
    fn default() -> Self {
        Self::new()
    }
}

fn paragraph_style() -> Style {
    Style::default().fg(Theme::FG)
}

fn inline_code_style() -> Style {
    Style::default().fg(Theme::CYAN).bg(Theme::PANEL_BG)
}

fn parse_heading(line: &str) -> Option<(usize, &str)> {
    let hashes = line.bytes().take_while(|b| *b == b'#').count();
    if hashes == 0 || hashes > 6 {
        return None;
    }
    line[hashes..].strip_prefix(' ').map(|text| (hashes, text.trim()))
}

fn parse_bullet(line: &str) -> Option<&str> {
    for marker in ["- ", "* ", "+ "] {
        if let Some(text) = line.strip_prefix(marker) {
            return Some(text);
        }
    }
    None
}

fn parse_ordered(line: &str) -> Option<(String, &str)> {
    let digits = line.bytes().take_while(|b| b.is_ascii_digit()).count();
    if digits == 0 {
        return None;
    }
    line[digits..]
        .strip_prefix(". ")
        .map(|text| (format!("{}.", &line[..digits]), text))
}

fn is_table_row(line: &str) -> bool {
    line.starts_with('|') && line.len() > 1
}

/// A table starts only when the next line is the `|---|` separator row;
/// a lone `|`-prefixed line is just a paragraph.
fn is_table_start(source: &[&str], i: usize) -> bool {
    source
        .get(i + 1)
        .map(|next| is_table_row(next.trim()) && is_separator_cells(&parse_cells(next.trim())))
        .unwrap_or(false)
}

fn parse_cells(row: &str) -> Vec<String> {
    row.trim()
        .trim_start_matches('|')
        .trim_end_matches('|')
        .split('|')
        .map(|cell| cell.trim().to_string())
        .collect()
}

fn is_separator_cells(cells: &[String]) -> bool {
    !cells.is_empty()
        && cells
            .iter()
            .all(|cell| !cell.is_empty() && cell.chars().all(|c| matches!(c, '-' | ':')))
}

/// Split a line into styled tokens: inline code spans (`` ` ``), bold
/// (`**`), and plain text. Unterminated markers render literally.
fn inline_tokens(text: &str, base: Style) -> Vec<(String, Style)> {
    let bold = base.add_modifier(Modifier::BOLD);
    let mut tokens = Vec::new();
    let mut rest = text;

    while !rest.is_empty() {
        let code_at = rest.find('`');
        let bold_at = rest.find("**");

        let (at, is_code) = match (code_at, bold_at) {
            (Some(c), Some(b)) if c <= b => (c, true),
            (Some(_), Some(b)) => (b, false),
            (Some(c), None) => (c, true),
            (None, Some(b)) => (b, false),
            (None, None) => {
                tokens.push((rest.to_string(), base));
                break;
            }
        };

        let (marker, style) = if is_code { ("`", inline_code_style()) } else { ("**", bold) };
        let body_start = at + marker.len();

        match rest[body_start..].find(marker) {
            Some(close) => {
                if at > 0 {
                    tokens.push((rest[..at].to_string(), base));
                }
                tokens.push((rest[body_start..body_start + close].to_string(), style));
                rest = &rest[body_start + close + marker.len()..];
            }
            None => {
                // No closing marker: emit through the marker literally.
                tokens.push((rest[..body_start].to_string(), base));
                rest = &rest[body_start..];
            }
        }
    }

    tokens.retain(|(text, _)| !text.is_empty());
    tokens
}

/// Greedy word-wrap over styled tokens. Adjacent tokens with no
/// whitespace between them stay glued (so `foo`-then-period does not
/// split); words longer than the width are hard-split.
fn wrap_tokens(tokens: &[(String, Style)], width: usize) -> Vec<Line<'static>> {
    if width == 0 {
        return Vec::new();
    }

    // An atom is a run of styled fragments with no whitespace inside.
    let mut atoms: Vec<Vec<(String, Style)>> = Vec::new();
    let mut open = false;

    for (text, style) in tokens {
        let mut chunk = String::new();
        for c in text.chars() {
            if c.is_whitespace() {
                if !chunk.is_empty() {
                    push_fragment(&mut atoms, &mut open, chunk.clone(), *style);
                    chunk.clear();
                }
                open = false;
            } else {
                chunk.push(c);
            }
        }
        if !chunk.is_empty() {
            push_fragment(&mut atoms, &mut open, chunk, *style);
        } else if text.ends_with(|c: char| c.is_whitespace()) {
            open = false;
        }
    }

    let mut lines = Vec::new();
    let mut current: Vec<Span<'static>> = Vec::new();
    let mut current_width = 0usize;

    for atom in atoms {
        let atom_width: usize = atom.iter().map(|(t, _)| t.width()).sum();
        let space = if current.is_empty() { 0 } else { 1 };

        if current_width + space + atom_width > width && !current.is_empty() {
            lines.push(Line::from(std::mem::take(&mut current)));
            current_width = 0;
        }

        if atom_width > width {
            for (text, style) in atom {
                for c in text.chars() {
                    let c_width = c.to_string().width();
                    if current_width + c_width > width && !current.is_empty() {
                        lines.push(Line::from(std::mem::take(&mut current)));
                        current_width = 0;
                    }
                    match current.last_mut() {
                        Some(last) if last.style == style => {
                            let mut content = last.content.to_string();
                            content.push(c);
                            last.content = content.into();
                        }
                        _ => current.push(Span::styled(c.to_string(), style)),
                    }
                    current_width += c_width;
                }
            }
            continue;
        }

        if !current.is_empty() {
            current.push(Span::raw(" "));
            current_width += 1;
        }
        for (text, style) in atom {
            current_width += text.width();
            current.push(Span::styled(text, style));
        }
    }

    if !current.is_empty() {
        lines.push(Line::from(current));
    }

    lines
}

fn push_fragment(atoms: &mut Vec<Vec<(String, Style)>>, open: &mut bool, text: String, style: Style) {
    if *open && let Some(last) = atoms.last_mut() {
        last.push((text, style));
    } else {
        atoms.push(vec![(text, style)]);
        *open = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn line_text(line: &Line<'_>) -> String {
        line.spans.iter().map(|s| s.content.as_ref()).collect()
    }

    fn rendered_text(lines: &[Line<'_>]) -> Vec<String> {
        lines.iter().map(line_text).collect()
    }

    #[test]
    fn test_paragraph_wraps_to_width() {
        let md = MarkdownRenderer::new();
        let lines = md.render("one two three four five six", 12);
        assert!(lines.len() > 1);
        for line in &lines {
            assert!(line_text(line).width() <= 12);
        }
    }

    #[test]
    fn test_heading_rendered_without_hashes() {
        let md = MarkdownRenderer::new();
        let lines = md.render("## Integration by parts", 80);
        assert_eq!(lines.len(), 1);
        assert_eq!(line_text(&lines[0]), "Integration by parts");
        assert_eq!(lines[0].spans[1].style.fg, Some(Theme::PURPLE));
    }

    #[test]
    fn test_not_a_heading_without_space() {
        let md = MarkdownRenderer::new();
        let lines = md.render("#hashtag", 80);
        assert_eq!(line_text(&lines[0]), "#hashtag");
    }

    #[test]
    fn test_code_block_framed_and_highlighted() {
        let md = MarkdownRenderer::new();
        let lines = md.render("```python\nx = 1\n```", 80);
        let text = rendered_text(&lines);
        assert_eq!(text[0], "┌ python");
        assert!(text[1].starts_with("│ "));
        assert!(text[1].contains("x = 1"));
        assert_eq!(text[2], "└");
    }

    #[test]
    fn test_unclosed_code_block_consumes_rest() {
        let md = MarkdownRenderer::new();
        let lines = md.render("```\ncode here", 80);
        let text = rendered_text(&lines);
        assert_eq!(text[0], "┌ code");
        assert!(text[1].contains("code here"));
    }

    #[test]
    fn test_table_alignment_and_header() {
        let md = MarkdownRenderer::new();
        let source = "| n | value |\n|---|---|\n| 1 | one |\n| 22 | two |";
        let lines = md.render(source, 80);
        let text = rendered_text(&lines);

        assert_eq!(text.len(), 4);
        assert!(text[0].contains("n "));
        assert!(text[0].contains("value"));
        assert!(text[1].contains("─┼─"));
        // "22" forces the first column to width 2.
        assert!(text[2].starts_with(" 1  │"));
        assert!(text[3].starts_with(" 22 │"));
    }

    #[test]
    fn test_pipe_line_without_separator_is_a_paragraph() {
        let md = MarkdownRenderer::new();
        let lines = md.render("|this is not a table", 80);
        assert_eq!(line_text(&lines[0]), "|this is not a table");
    }

    #[test]
    fn test_bullet_and_ordered_lists() {
        let md = MarkdownRenderer::new();
        let text = rendered_text(&md.render("- first\n- second\n1. third", 80));
        assert_eq!(text[0], "• first");
        assert_eq!(text[1], "• second");
        assert_eq!(text[2], "1. third");
    }

    #[test]
    fn test_list_item_continuation_indent() {
        let md = MarkdownRenderer::new();
        let lines = md.render("- alpha beta gamma delta", 12);
        let text = rendered_text(&lines);
        assert!(text.len() > 1);
        assert!(text[0].starts_with("• "));
        assert!(text[1].starts_with("  "));
    }

    #[test]
    fn test_blockquote() {
        let md = MarkdownRenderer::new();
        let text = rendered_text(&md.render("> remember the chain rule", 80));
        assert!(text[0].starts_with("│ "));
        assert!(text[0].contains("chain rule"));
    }

    #[test]
    fn test_inline_code_keeps_punctuation_attached() {
        let tokens = inline_tokens("use `solve`.", paragraph_style());
        let lines = wrap_tokens(&tokens, 80);
        assert_eq!(line_text(&lines[0]), "use solve.");
    }

    #[test]
    fn test_inline_bold() {
        let tokens = inline_tokens("a **strong** word", paragraph_style());
        assert_eq!(tokens.len(), 3);
        assert_eq!(tokens[1].0, "strong");
        assert!(tokens[1].1.add_modifier.contains(Modifier::BOLD));
    }

    #[test]
    fn test_unterminated_markers_render_literally() {
        let tokens = inline_tokens("a `broken and **more", paragraph_style());
        let joined: String = tokens.iter().map(|(t, _)| t.as_str()).collect();
        assert_eq!(joined, "a `broken and **more");
    }

    #[test]
    fn test_wrap_splits_overlong_word() {
        let tokens = vec![("abcdefghij".to_string(), paragraph_style())];
        let lines = wrap_tokens(&tokens, 4);
        assert_eq!(rendered_text(&lines), vec!["abcd", "efgh", "ij"]);
    }

    #[test]
    fn test_blank_lines_preserved() {
        let md = MarkdownRenderer::new();
        let lines = md.render("para one\n\npara two", 80);
        assert_eq!(rendered_text(&lines), vec!["para one", "", "para two"]);
    }

    #[test]
    fn test_zero_width_renders_nothing() {
        let md = MarkdownRenderer::new();
        assert!(md.render("anything", 0).is_empty());
    }
}
