use crate::scroll::ScrollCoordinator;
use crate::session::SessionState;
use crate::transcript::Transcript;
use askara_core::DisplayConfig;

/// Which top-level view is showing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum View {
    /// No active question: the hero prompt
    Landing,
    /// Transcript pane plus clarification sidebar
    Study,
}

/// Main application state
#[derive(Debug, Clone)]
pub struct AppState {
    /// Base URL of the prediction service (shown in the header)
    pub base_url: String,
    /// Paper code sent with generation requests
    pub paper_code: String,
    /// Display tunables
    pub display: DisplayConfig,
    /// Current-exchange projections and busy flags
    pub session: SessionState,
    /// The append-only session log
    pub transcript: Transcript,
    /// Auto-scroll bookkeeping for the transcript pane
    pub scroll: ScrollCoordinator,
    /// Whether the clarification sidebar is visible
    pub sidebar_visible: bool,
}

impl AppState {
    pub fn new(base_url: impl Into<String>, paper_code: impl Into<String>, display: DisplayConfig) -> Self {
        let scroll = ScrollCoordinator::new(display.scroll);
        Self {
            base_url: base_url.into(),
            paper_code: paper_code.into(),
            display,
            session: SessionState::new(),
            transcript: Transcript::new(),
            scroll,
            sidebar_visible: true,
        }
    }

    /// Landing until a question is generated, study afterwards
    pub fn view(&self) -> View {
        if self.session.has_question() { View::Study } else { View::Landing }
    }

    pub fn toggle_sidebar(&mut self) {
        self.sidebar_visible = !self.sidebar_visible;
    }

    /// Destroy the transcript and session state together, back to landing.
    ///
    /// Entry ids keep increasing across the reset, which is what lets the
    /// controller spot and drop responses that raced the clear.
    pub fn reset_session(&mut self) {
        self.transcript.clear();
        self.session.reset();
        self.scroll.reset();
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new("http://localhost:8000", "MATH101", DisplayConfig::default())
    }
}
