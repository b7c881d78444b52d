use crate::markdown::MarkdownRenderer;
use crate::state::AppState;
use crate::theme::Theme;
use crate::transcript::{EntryStatus, Role};

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};

const INPUT_PLACEHOLDER: &str = "Ask for clarification on any part…";

/// Clarification sidebar: the follow-up input card on top, the recent
/// clarification feed below it.
pub struct Sidebar<'a> {
    state: &'a AppState,
}

impl<'a> Sidebar<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect, md: &MarkdownRenderer) {
        frame.render_widget(Block::default().style(Theme::panel()), area);

        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(3), Constraint::Min(1)])
            .split(area);

        let title = Paragraph::new(Line::from(vec![
            Span::styled(" ? ", Style::default().fg(Theme::CYAN)),
            Span::styled("Ask questions", Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)),
        ]))
        .block(Block::default().style(Theme::panel()));
        frame.render_widget(title, rows[0]);

        self.render_input_card(frame, rows[1]);
        self.render_feed(frame, rows[2], md);
    }

    /// Input card with a block cursor, styled like the active panel
    fn render_input_card(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.width < 6 || area.height < 1 {
            return;
        }

        frame.render_widget(Block::default().style(Style::default().bg(Theme::ACTIVE)), area);

        let accent = Rect { x: area.x, y: area.y, width: 1, height: area.height };
        frame.render_widget(Block::default().style(Style::default().bg(Theme::CYAN)), accent);

        let input_area = Rect {
            x: area.x + 2,
            y: area.y + 1,
            width: area.width.saturating_sub(3),
            height: 1,
        };

        let input = &self.state.session.input;
        let mut spans = Vec::new();
        if input.buffer.is_empty() {
            spans.push(Span::styled("█", Style::default().fg(Theme::FG)));
            spans.push(Span::styled(
                INPUT_PLACEHOLDER,
                Style::default().fg(Theme::MUTED).bg(Theme::ACTIVE),
            ));
        } else {
            let style = Style::default().fg(Theme::FG).bg(Theme::ACTIVE);
            let cursor = input.cursor.min(input.buffer.len());
            let (before, after) = input.buffer.split_at(cursor);
            if !before.is_empty() {
                spans.push(Span::styled(before.to_string(), style));
            }
            spans.push(Span::styled("█", Style::default().fg(Theme::FG)));
            if !after.is_empty() {
                spans.push(Span::styled(after.to_string(), style));
            }
        }

        frame.render_widget(Paragraph::new(Line::from(spans)), input_area);
    }

    fn render_feed(&self, frame: &mut Frame<'_>, area: Rect, md: &MarkdownRenderer) {
        let lines = self.feed_lines(md, area.width);
        let paragraph = Paragraph::new(Text::from(lines)).block(Block::default().style(Theme::panel()));
        frame.render_widget(paragraph, area);
    }

    /// Build the feed: the last N clarification entries, newest last,
    /// with role markers and delivery-status markers.
    fn feed_lines(&self, md: &MarkdownRenderer, width: u16) -> Vec<Line<'static>> {
        let width = (width as usize).saturating_sub(3);
        let entries = self
            .state
            .transcript
            .recent_clarifications(self.state.display.clarification_cap);
        let mut lines = vec![Line::default()];

        if entries.is_empty() {
            lines.push(Line::from(Span::styled(
                " No questions yet. Ask your first one above.",
                Theme::muted(),
            )));
            return lines;
        }

        lines.push(Line::from(Span::styled(
            " Recent clarifications",
            Style::default().fg(Theme::MUTED).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        for entry in entries {
            let (marker, label, color) = match entry.role {
                Role::User => ("▸ ", "you asked", Theme::CYAN),
                Role::System => ("▾ ", "answer", Theme::GREEN),
            };

            let mut header = vec![
                Span::raw(" "),
                Span::styled(marker, Style::default().fg(color)),
                Span::styled(label, Style::default().fg(color).add_modifier(Modifier::BOLD)),
            ];
            if entry.status != EntryStatus::Confirmed {
                header.push(Span::raw(" "));
                header.push(Span::styled(
                    Theme::status_marker(entry.status),
                    Style::default().fg(Theme::status_color(entry.status)),
                ));
            }
            lines.push(Line::from(header));

            for content_line in md.render(&entry.content, width) {
                let mut spans = vec![Span::raw("   ")];
                spans.extend(content_line.spans);
                lines.push(Line::from(spans));
            }
            lines.push(Line::default());
        }

        lines
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn feed_text(state: &AppState) -> Vec<String> {
        let md = MarkdownRenderer::new();
        Sidebar::new(state)
            .feed_lines(&md, 40)
            .iter()
            .map(|line| line.spans.iter().map(|s| s.content.as_ref()).collect())
            .collect()
    }

    #[test]
    fn test_empty_feed_shows_hint() {
        let state = AppState::default();
        let text = feed_text(&state);
        assert!(text.iter().any(|l| l.contains("No questions yet")));
    }

    #[test]
    fn test_feed_shows_roles_and_content() {
        let mut state = AppState::default();
        let id = state.transcript.push_clarification_question("why chain rule?");
        state.transcript.mark_confirmed(id);
        state.transcript.push_clarification("Because the inner function varies.");

        let text = feed_text(&state);
        assert!(text.iter().any(|l| l.contains("you asked")));
        assert!(text.iter().any(|l| l.contains("why chain rule?")));
        assert!(text.iter().any(|l| l.contains("answer")));
        assert!(text.iter().any(|l| l.contains("inner function")));
    }

    #[test]
    fn test_feed_marks_pending_and_failed() {
        let mut state = AppState::default();
        state.transcript.push_clarification_question("pending one");
        let failed = state.transcript.push_clarification_question("failed one");
        state.transcript.mark_failed(failed);

        let text = feed_text(&state);
        assert!(text.iter().any(|l| l.contains("…")));
        assert!(text.iter().any(|l| l.contains("✗ failed")));
    }

    #[test]
    fn test_feed_respects_cap() {
        let mut state = AppState::default();
        state.display.clarification_cap = 2;
        for i in 0..5 {
            let id = state.transcript.push_clarification_question(format!("q{}", i));
            state.transcript.mark_confirmed(id);
        }

        let text = feed_text(&state);
        assert!(!text.iter().any(|l| l.contains("q2")));
        assert!(text.iter().any(|l| l.contains("q3")));
        assert!(text.iter().any(|l| l.contains("q4")));
    }
}
