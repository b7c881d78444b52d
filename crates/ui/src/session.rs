use crate::transcript::EntryId;

/// State for the follow-up input box
#[derive(Debug, Clone, Default, PartialEq)]
pub struct InputState {
    /// Current draft buffer
    pub buffer: String,
    /// Cursor position (byte index, always on a char boundary)
    pub cursor: usize,
}

impl InputState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_char(&mut self, c: char) {
        self.buffer.insert(self.cursor, c);
        self.cursor += c.len_utf8();
    }

    pub fn backspace(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
            self.buffer.remove(self.cursor);
        }
    }

    pub fn delete(&mut self) {
        if self.cursor < self.buffer.len() {
            self.buffer.remove(self.cursor);
        }
    }

    pub fn move_left(&mut self) {
        if let Some(prev) = self.buffer[..self.cursor].chars().next_back() {
            self.cursor -= prev.len_utf8();
        }
    }

    pub fn move_right(&mut self) {
        if let Some(next) = self.buffer[self.cursor..].chars().next() {
            self.cursor += next.len_utf8();
        }
    }

    pub fn move_home(&mut self) {
        self.cursor = 0;
    }

    pub fn move_end(&mut self) {
        self.cursor = self.buffer.len();
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
        self.cursor = 0;
    }

    /// Take the draft out, leaving the input empty
    pub fn take(&mut self) -> String {
        let buffer = std::mem::take(&mut self.buffer);
        self.cursor = 0;
        buffer
    }
}

/// Cached projections over the transcript for the current exchange.
///
/// The transcript remains the source of truth for history; these fields
/// exist so rendering the current question, answer and clarification does
/// not re-scan the log every frame.
#[derive(Debug, Clone, Default)]
pub struct SessionState {
    /// Text of the current question (empty on the landing view)
    pub question: String,
    /// Text of the revealed answer (empty until revealed)
    pub answer: String,
    /// Most recent clarification reply
    pub clarification: String,
    /// Follow-up draft
    pub input: InputState,
    /// Transcript id of the current question
    pub current_question: Option<EntryId>,
    generating_question: bool,
    revealing_answer: bool,
}

impl SessionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a question has been generated (study view vs landing view)
    pub fn has_question(&self) -> bool {
        !self.question.is_empty()
    }

    /// Whether the current answer has been revealed
    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }

    pub fn start_generating(&mut self) {
        self.generating_question = true;
    }

    pub fn stop_generating(&mut self) {
        self.generating_question = false;
    }

    pub fn is_generating(&self) -> bool {
        self.generating_question
    }

    pub fn start_revealing(&mut self) {
        self.revealing_answer = true;
    }

    pub fn stop_revealing(&mut self) {
        self.revealing_answer = false;
    }

    pub fn is_revealing(&self) -> bool {
        self.revealing_answer
    }

    /// Install a freshly generated question, clearing the previous answer
    pub fn set_question(&mut self, id: EntryId, text: impl Into<String>) {
        self.question = text.into();
        self.answer.clear();
        self.current_question = Some(id);
    }

    /// Back to the empty landing state
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
