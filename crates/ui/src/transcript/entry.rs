/// Identifier of a transcript entry.
///
/// Unique and strictly increasing within a session; doubles as the render
/// key and as the anchor for "most recent entry of kind X" queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct EntryId(pub u64);

impl std::fmt::Display for EntryId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Who produced an entry
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    /// The prediction service
    System,
    /// The person studying
    User,
}

/// What an entry is
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    /// A generated practice question
    Question,
    /// The revealed answer, linked to the question it answers
    Answer { question: EntryId },
    /// A follow-up typed by the user
    ClarificationQuestion,
    /// The service's reply to a follow-up
    Clarification,
}

/// Delivery status of an entry.
///
/// Clarification questions are appended optimistically before the network
/// call resolves, so they pass through `Pending`; everything else is
/// `Confirmed` from birth.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EntryStatus {
    #[default]
    Confirmed,
    Pending,
    Failed,
}

/// One transcript entry. Immutable after creation apart from the
/// pending/confirmed/failed status transition.
#[derive(Debug, Clone, PartialEq)]
pub struct Entry {
    pub id: EntryId,
    pub role: Role,
    pub kind: EntryKind,
    pub status: EntryStatus,
    pub content: String,
}

impl Entry {
    pub(crate) fn question(id: EntryId, content: impl Into<String>) -> Self {
        Self { id, role: Role::System, kind: EntryKind::Question, status: EntryStatus::Confirmed, content: content.into() }
    }

    pub(crate) fn answer(id: EntryId, question: EntryId, content: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::System,
            kind: EntryKind::Answer { question },
            status: EntryStatus::Confirmed,
            content: content.into(),
        }
    }

    pub(crate) fn clarification_question(id: EntryId, content: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::User,
            kind: EntryKind::ClarificationQuestion,
            status: EntryStatus::Pending,
            content: content.into(),
        }
    }

    pub(crate) fn clarification(id: EntryId, content: impl Into<String>) -> Self {
        Self {
            id,
            role: Role::System,
            kind: EntryKind::Clarification,
            status: EntryStatus::Confirmed,
            content: content.into(),
        }
    }

    /// Entry kind name for debugging and logs
    pub fn kind_name(&self) -> &'static str {
        match self.kind {
            EntryKind::Question => "question",
            EntryKind::Answer { .. } => "answer",
            EntryKind::ClarificationQuestion => "clarification-question",
            EntryKind::Clarification => "clarification",
        }
    }

    pub fn is_question(&self) -> bool {
        matches!(self.kind, EntryKind::Question)
    }

    pub fn is_answer(&self) -> bool {
        matches!(self.kind, EntryKind::Answer { .. })
    }

    /// Part of the question/answer flow (as opposed to the sidebar feed)
    pub fn is_exchange(&self) -> bool {
        self.is_question() || self.is_answer()
    }

    /// Part of the clarification sidebar feed
    pub fn is_clarification_entry(&self) -> bool {
        matches!(self.kind, EntryKind::ClarificationQuestion | EntryKind::Clarification)
    }

    /// Id of the question this entry answers, if it is an answer
    pub fn answered_question(&self) -> Option<EntryId> {
        match self.kind {
            EntryKind::Answer { question } => Some(question),
            _ => None,
        }
    }
}
