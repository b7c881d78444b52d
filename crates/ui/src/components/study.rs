use crate::markdown::MarkdownRenderer;
use crate::state::AppState;
use crate::theme::Theme;

use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Paragraph};

const PANE_PADDING: usize = 2;

/// Build every line of the transcript pane: the current question card,
/// action hints, the revealed answer, and the completed history pairs.
///
/// Pure with respect to the state so the caller can measure the content
/// height (for scroll extents) before rendering.
pub fn transcript_lines(state: &AppState, md: &MarkdownRenderer, width: u16) -> Vec<Line<'static>> {
    let width = (width as usize).saturating_sub(PANE_PADDING);
    let mut lines = Vec::new();

    let question_number = state.transcript.question_count();
    let answered = state.transcript.current_question_answered();

    push_card_header(&mut lines, "Question", question_number, Theme::BLUE);
    lines.extend(md.render(&state.session.question, width));
    lines.push(Line::default());

    push_action_hints(state, answered, &mut lines);
    lines.push(Line::default());

    if state.session.has_answer() {
        push_card_header(&mut lines, "Answer", state.transcript.answer_count(), Theme::GREEN);
        lines.extend(md.render(&state.session.answer, width));
        lines.push(Line::default());
    }

    let pairs = state.transcript.history_pairs(state.display.history_window);
    if !pairs.is_empty() {
        lines.push(Line::from(Span::styled(
            "Previous questions & answers",
            Style::default().fg(Theme::MUTED).add_modifier(Modifier::BOLD),
        )));
        lines.push(Line::default());

        for (idx, (question, answer)) in pairs.iter().enumerate() {
            push_card_header(&mut lines, "Question", idx + 1, Theme::BLUE);
            lines.extend(md.render(&question.content, width));
            lines.push(Line::default());
            push_card_header(&mut lines, "Answer", idx + 1, Theme::GREEN);
            lines.extend(md.render(&answer.content, width));
            lines.push(Line::default());
        }
    }

    lines
}

fn push_card_header(lines: &mut Vec<Line<'static>>, label: &str, number: usize, color: ratatui::style::Color) {
    lines.push(Line::from(vec![
        Span::styled("● ", Style::default().fg(color)),
        Span::styled(
            format!("{} {}", label, number),
            Style::default().fg(color).add_modifier(Modifier::BOLD),
        ),
    ]));
}

fn push_action_hints(state: &AppState, answered: bool, lines: &mut Vec<Line<'static>>) {
    let mut spans = Vec::new();

    if !answered {
        if state.session.is_revealing() {
            spans.push(Span::styled("Loading answer… ", Style::default().fg(Theme::YELLOW)));
        } else {
            spans.push(Span::styled("ctrl+a", Style::default().fg(Theme::GREEN)));
            spans.push(Span::styled(" show answer   ", Theme::muted()));
        }
    }

    if state.session.is_generating() {
        spans.push(Span::styled("Generating…", Style::default().fg(Theme::YELLOW)));
    } else {
        spans.push(Span::styled("ctrl+g", Style::default().fg(Theme::BLUE)));
        spans.push(Span::styled(" next question", Theme::muted()));
    }

    lines.push(Line::from(spans));
}

/// Render pre-built transcript lines with the given scroll offset
pub fn render_transcript(frame: &mut Frame<'_>, area: Rect, lines: Vec<Line<'static>>, offset: u16) {
    frame.render_widget(Block::default().style(Theme::base()), area);

    let padded: Vec<Line<'static>> = lines
        .into_iter()
        .map(|line| {
            let mut spans = vec![Span::raw(" ")];
            spans.extend(line.spans);
            Line::from(spans)
        })
        .collect();

    let paragraph = Paragraph::new(Text::from(padded)).scroll((offset, 0));
    frame.render_widget(paragraph, area);
}
