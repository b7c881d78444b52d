/// Actions that can be triggered by input events
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyAction {
    /// Request a new practice question
    GenerateQuestion,
    /// Reveal the answer to the current question
    RevealAnswer,
    /// Submit the clarification draft
    SubmitClarification,
    /// Clear the transcript and session state
    ClearHistory,
    /// Start a fresh session (back to the landing view)
    NewSession,
    /// Toggle the clarification sidebar
    ToggleSidebar,
    /// Scroll the transcript up one row
    ScrollUp,
    /// Scroll the transcript down one row
    ScrollDown,
    /// Page up in the transcript
    PageUp,
    /// Page down in the transcript
    PageDown,
    /// Exit the application
    Exit,
}
