use crate::state::AppState;
use crate::theme::Theme;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};
use unicode_width::UnicodeWidthStr;

/// Single-row header: app name, paper code, question counter on the
/// left; busy indicator and service URL on the right.
pub struct Header<'a> {
    state: &'a AppState,
}

impl<'a> Header<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height == 0 {
            return;
        }

        let mut left = vec![
            Span::styled(" askara", Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD)),
            Span::styled(" | ", Theme::muted()),
            Span::styled(self.state.paper_code.clone(), Style::default().fg(Theme::CYAN)),
        ];

        let question_count = self.state.transcript.question_count();
        if question_count > 0 {
            left.push(Span::styled(" | ", Theme::muted()));
            left.push(Span::styled(
                format!("question {}", question_count),
                Style::default().fg(Theme::BLUE),
            ));
        }

        let mut right = String::new();
        if self.state.session.is_generating() {
            right.push_str("generating… ");
        } else if self.state.session.is_revealing() {
            right.push_str("loading answer… ");
        }
        right.push_str(&self.state.base_url);

        let left_width: usize = left.iter().map(|s| s.content.width()).sum();
        let pad = (area.width as usize).saturating_sub(left_width + right.width() + 1);
        left.push(Span::styled(" ".repeat(pad), Style::default().bg(Theme::BG)));
        left.push(Span::styled(right, Theme::muted()));

        let paragraph = Paragraph::new(Line::from(left)).block(Block::default().style(Theme::base()));
        frame.render_widget(paragraph, area);
    }
}
