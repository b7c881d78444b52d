use crate::state::{AppState, View};
use crate::theme::Theme;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

/// Single-row footer with the key hints for the current view
pub struct Footer<'a> {
    state: &'a AppState,
}

impl<'a> Footer<'a> {
    pub fn new(state: &'a AppState) -> Self {
        Self { state }
    }

    fn hints(&self) -> Vec<(&'static str, &'static str)> {
        match self.state.view() {
            View::Landing => vec![("ctrl+g", "generate question"), ("esc", "quit")],
            View::Study => {
                let mut hints = vec![("ctrl+g", "next question")];
                if !self.state.transcript.current_question_answered() {
                    hints.push(("ctrl+a", "show answer"));
                }
                hints.push(("enter", "ask"));
                hints.push(("ctrl+b", "sidebar"));
                hints.push(("ctrl+l", "clear history"));
                hints.push(("ctrl+n", "new session"));
                hints.push(("esc", "quit"));
                hints
            }
        }
    }

    pub fn render(&self, frame: &mut Frame<'_>, area: Rect) {
        if area.height == 0 {
            return;
        }

        let mut spans = vec![Span::raw(" ")];
        for (idx, (key, label)) in self.hints().into_iter().enumerate() {
            if idx > 0 {
                spans.push(Span::styled(" · ", Theme::muted()));
            }
            spans.push(Span::styled(key, Style::default().fg(Theme::BLUE)));
            spans.push(Span::styled(format!(" {}", label), Theme::muted()));
        }

        let paragraph = Paragraph::new(Line::from(spans)).block(Block::default().style(Theme::base()));
        frame.render_widget(paragraph, area);
    }
}
