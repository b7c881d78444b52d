mod event_loop;

pub use event_loop::run;

use crate::components::{Footer, Header, LandingView, Sidebar, render_transcript, transcript_lines};
use crate::event_handler::{EventHandler, KeyAction};
use crate::layout::StudyLayout;
use crate::markdown::MarkdownRenderer;
use crate::state::{AppState, View};
use crate::transcript::EntryId;

use askara_client::StudyService;
use askara_core::Result;
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc;
use tokio_util::sync::CancellationToken;

/// Completion of a spawned service call.
///
/// Every event carries the session generation it was spawned under; the
/// handler drops events whose generation is stale, so a request that
/// raced a clear cannot resurrect entries in a fresh session.
#[derive(Debug)]
pub enum ServiceEvent {
    QuestionGenerated { generation: u64, result: Result<String> },
    AnswerRevealed { generation: u64, question: EntryId, result: Result<String> },
    ClarificationReceived { generation: u64, entry: EntryId, result: Result<String> },
}

/// Session transcript controller.
///
/// Owns all state; service calls run in spawned tasks and come back as
/// [`ServiceEvent`]s on an mpsc channel, so state transitions happen on
/// one logical thread of control. Within one operation the transcript
/// append always happens before the scroll request.
pub struct App {
    state: AppState,
    service: Arc<dyn StudyService>,
    markdown: MarkdownRenderer,
    event_tx: mpsc::UnboundedSender<ServiceEvent>,
    event_rx: mpsc::UnboundedReceiver<ServiceEvent>,
    pub cancel_token: CancellationToken,
    generation: u64,
    should_exit: bool,
}

impl App {
    pub fn new(state: AppState, service: Arc<dyn StudyService>) -> Self {
        let (event_tx, event_rx) = mpsc::unbounded_channel();
        Self {
            state,
            service,
            markdown: MarkdownRenderer::new(),
            event_tx,
            event_rx,
            cancel_token: CancellationToken::new(),
            generation: 0,
            should_exit: false,
        }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn state_mut(&mut self) -> &mut AppState {
        &mut self.state
    }

    pub fn should_exit(&self) -> bool {
        self.should_exit
    }

    /// Receive the next service completion (used by the event loop and tests)
    pub async fn recv_service_event(&mut self) -> Option<ServiceEvent> {
        self.event_rx.recv().await
    }

    /// Request a new practice question.
    ///
    /// No-op while a request is already in flight; the busy flag is a UI
    /// guard, not a lock.
    pub fn begin_generate_question(&mut self) {
        if self.state.session.is_generating() {
            return;
        }
        self.state.session.start_generating();

        let service = Arc::clone(&self.service);
        let tx = self.event_tx.clone();
        let generation = self.generation;
        let paper_code = self.state.paper_code.clone();

        tokio::spawn(async move {
            let result = service.generate_question(&paper_code).await;
            let _ = tx.send(ServiceEvent::QuestionGenerated { generation, result });
        });
    }

    /// Reveal the answer to the current question.
    ///
    /// The UI hides the action when there is no open question; this also
    /// guards so a stray keypress cannot fire a bodyless request.
    pub fn begin_reveal_answer(&mut self) {
        if self.state.session.is_revealing() {
            return;
        }
        let Some(question) = self.state.session.current_question else {
            return;
        };
        if self.state.transcript.current_question_answered() {
            return;
        }
        self.state.session.start_revealing();

        let service = Arc::clone(&self.service);
        let tx = self.event_tx.clone();
        let generation = self.generation;

        tokio::spawn(async move {
            let result = service.reveal_answer(question.0).await;
            let _ = tx.send(ServiceEvent::AnswerRevealed { generation, question, result });
        });
    }

    /// Submit the clarification draft.
    ///
    /// Silently no-ops on an empty or whitespace-only draft: no transcript
    /// change, no network call. Otherwise the user's entry is appended
    /// optimistically (status `Pending`) before the call resolves.
    pub fn submit_clarification(&mut self, now: Instant) {
        let follow_up = self.state.session.input.buffer.trim().to_string();
        if follow_up.is_empty() {
            return;
        }
        self.state.session.input.clear();

        let entry = self.state.transcript.push_clarification_question(follow_up.clone());
        self.state.scroll.request_autoscroll(now);

        let service = Arc::clone(&self.service);
        let tx = self.event_tx.clone();
        let generation = self.generation;
        let question_id = self.state.session.current_question.map(|id| id.0);

        tokio::spawn(async move {
            let result = service.clarify(&follow_up, question_id).await;
            let _ = tx.send(ServiceEvent::ClarificationReceived { generation, entry, result });
        });
    }

    /// Apply a service completion to the transcript and session state.
    ///
    /// Failures are logged and otherwise leave state untouched, except
    /// that the optimistic clarification entry is marked failed.
    pub fn on_service_event(&mut self, event: ServiceEvent, now: Instant) {
        match event {
            ServiceEvent::QuestionGenerated { generation, result } => {
                if generation != self.generation {
                    return;
                }
                self.state.session.stop_generating();
                match result {
                    Ok(question) => {
                        let id = self.state.transcript.push_question(question.clone());
                        self.state.session.set_question(id, question);
                        self.state.scroll.request_autoscroll(now);
                    }
                    Err(e) => tracing::error!("question generation failed: {}", e),
                }
            }
            ServiceEvent::AnswerRevealed { generation, question, result } => {
                if generation != self.generation {
                    return;
                }
                self.state.session.stop_revealing();
                match result {
                    Ok(answer) => {
                        self.state.transcript.push_answer(question, answer.clone());
                        self.state.session.answer = answer;
                        self.state.scroll.request_autoscroll(now);
                    }
                    Err(e) => tracing::error!("answer reveal failed: {}", e),
                }
            }
            ServiceEvent::ClarificationReceived { generation, entry, result } => {
                if generation != self.generation {
                    return;
                }
                match result {
                    Ok(clarification) => {
                        self.state.transcript.mark_confirmed(entry);
                        self.state.transcript.push_clarification(clarification.clone());
                        self.state.session.clarification = clarification;
                        self.state.scroll.request_autoscroll(now);
                    }
                    Err(e) => {
                        tracing::error!("clarification failed: {}", e);
                        self.state.transcript.mark_failed(entry);
                    }
                }
            }
        }
    }

    /// Destroy the transcript and session state together.
    ///
    /// Bumping the generation first makes any in-flight response stale.
    pub fn clear_history(&mut self) {
        self.generation += 1;
        self.state.reset_session();
    }

    /// Back to the landing view; behaves exactly like a clear
    pub fn new_session(&mut self) {
        self.clear_history();
    }

    pub fn handle_key_action(&mut self, action: KeyAction, now: Instant) {
        match action {
            KeyAction::GenerateQuestion => self.begin_generate_question(),
            KeyAction::RevealAnswer => self.begin_reveal_answer(),
            KeyAction::SubmitClarification => {
                // On the landing view Enter starts the session instead.
                match self.state.view() {
                    View::Landing => self.begin_generate_question(),
                    View::Study => self.submit_clarification(now),
                }
            }
            KeyAction::ClearHistory => self.clear_history(),
            KeyAction::NewSession => self.new_session(),
            KeyAction::ToggleSidebar => self.state.toggle_sidebar(),
            KeyAction::ScrollUp => self.state.scroll.scroll_up(1, now),
            KeyAction::ScrollDown => self.state.scroll.scroll_down(1, now),
            KeyAction::PageUp => self.state.scroll.scroll_up(10, now),
            KeyAction::PageDown => self.state.scroll.scroll_down(10, now),
            KeyAction::Exit => self.should_exit = true,
        }
    }

    /// Handle a terminal event
    pub fn handle_event(&mut self, event: &crossterm::event::Event, now: Instant) {
        if let Some(action) = EventHandler::handle_event(event, &mut self.state) {
            self.handle_key_action(action, now);
        }
    }

    /// Draw the current view.
    ///
    /// The transcript lines are built before the frame closure so their
    /// height can feed the scroll coordinator's extents.
    pub fn draw(&mut self, terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> std::io::Result<()> {
        let size = terminal.size()?;
        let area = Rect::new(0, 0, size.width, size.height);

        match self.state.view() {
            View::Landing => {
                let layout = crate::layout::LandingLayout::calculate(area);
                terminal.draw(|frame| {
                    let view = LandingView::new(&self.state, frame.area());
                    view.render(frame);
                    Header::new(&self.state).render(frame, layout.header);
                    Footer::new(&self.state).render(frame, layout.footer);
                })?;
            }
            View::Study => {
                let layout = StudyLayout::calculate(area, self.state.sidebar_visible);
                let lines = transcript_lines(&self.state, &self.markdown, layout.transcript.width);
                self.state.scroll.set_extents(lines.len(), layout.transcript.height as usize);
                let offset = self.state.scroll.offset() as u16;

                terminal.draw(|frame| {
                    Header::new(&self.state).render(frame, layout.header);
                    render_transcript(frame, layout.transcript, lines, offset);
                    if let Some(sidebar_area) = layout.sidebar {
                        Sidebar::new(&self.state).render(frame, sidebar_area, &self.markdown);
                    }
                    Footer::new(&self.state).render(frame, layout.footer);
                })?;
            }
        }

        Ok(())
    }
}
