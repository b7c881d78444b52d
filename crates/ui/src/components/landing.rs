use crate::layout::LandingLayout;
use crate::state::AppState;
use crate::theme::Theme;

use ratatui::Frame;
use ratatui::layout::Alignment;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Paragraph};

const ASKARA_LOGO: [&str; 3] = [
    r"▄▀▄ ▄▀▀ █▄▀ ▄▀▄ █▀▄ ▄▀▄",
    r"█▀█ ▀▄▄ █ █ █▀█ █▀▄ █▀█",
    r"exam practice assistant",
];

/// The hero prompt shown while no question is active
pub struct LandingView<'a> {
    state: &'a AppState,
    layout: LandingLayout,
}

impl<'a> LandingView<'a> {
    pub fn new(state: &'a AppState, area: ratatui::layout::Rect) -> Self {
        Self { state, layout: LandingLayout::calculate(area) }
    }

    pub fn render(&self, frame: &mut Frame<'_>) {
        frame.render_widget(Block::default().style(Theme::base()), frame.area());
        self.render_hero(frame);
    }

    fn render_hero(&self, frame: &mut Frame<'_>) {
        let area = self.layout.hero;
        let mut lines = Vec::new();

        if area.height >= 10 {
            for (idx, logo_line) in ASKARA_LOGO.iter().enumerate() {
                let color = if idx < 2 { Theme::CYAN } else { Theme::MUTED };
                lines.push(Line::from(Span::styled(*logo_line, Style::default().fg(color))));
            }
            lines.push(Line::default());
        }

        lines.push(Line::from(Span::styled(
            "Ready to practise?",
            Style::default().fg(Theme::FG).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            "Generate a question to start your practice session.",
            Theme::muted(),
        )));
        lines.push(Line::from(Span::styled(
            "Reveal answers and ask for clarification as you go.",
            Theme::muted(),
        )));
        lines.push(Line::default());

        let action = if self.state.session.is_generating() {
            Span::styled("Generating…", Style::default().fg(Theme::YELLOW))
        } else {
            Span::styled(
                "press ctrl+g to generate a question",
                Style::default().fg(Theme::BLUE).add_modifier(Modifier::BOLD),
            )
        };
        lines.push(Line::from(action));

        let content = Paragraph::new(lines).alignment(Alignment::Center);
        frame.render_widget(content, area);
    }
}
