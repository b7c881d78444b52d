mod entry;
mod queries;

pub use entry::{Entry, EntryId, EntryKind, EntryStatus, Role};

/// Append-only, insertion-ordered log of a study session.
///
/// Entries are never edited or removed individually; the only mutations
/// are appends, the clarification status transition, and a full clear.
/// Insertion order doubles as chronological order.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Transcript {
    entries: Vec<Entry>,
    next_id: u64,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    fn allocate_id(&mut self) -> EntryId {
        self.next_id += 1;
        EntryId(self.next_id)
    }

    /// Append a generated question; returns its id.
    pub fn push_question(&mut self, content: impl Into<String>) -> EntryId {
        let id = self.allocate_id();
        self.entries.push(Entry::question(id, content));
        id
    }

    /// Append a revealed answer linked to the question it answers.
    pub fn push_answer(&mut self, question: EntryId, content: impl Into<String>) -> EntryId {
        let id = self.allocate_id();
        self.entries.push(Entry::answer(id, question, content));
        id
    }

    /// Append a user follow-up, optimistically, with `Pending` status.
    pub fn push_clarification_question(&mut self, content: impl Into<String>) -> EntryId {
        let id = self.allocate_id();
        self.entries.push(Entry::clarification_question(id, content));
        id
    }

    /// Append the service's clarification reply.
    pub fn push_clarification(&mut self, content: impl Into<String>) -> EntryId {
        let id = self.allocate_id();
        self.entries.push(Entry::clarification(id, content));
        id
    }

    /// Mark a pending entry confirmed. Returns false if the id is unknown.
    pub fn mark_confirmed(&mut self, id: EntryId) -> bool {
        self.set_status(id, EntryStatus::Confirmed)
    }

    /// Mark a pending entry failed. Returns false if the id is unknown.
    pub fn mark_failed(&mut self, id: EntryId) -> bool {
        self.set_status(id, EntryStatus::Failed)
    }

    fn set_status(&mut self, id: EntryId, status: EntryStatus) -> bool {
        if let Some(entry) = self.entries.iter_mut().find(|e| e.id == id) {
            entry.status = status;
            true
        } else {
            false
        }
    }

    /// Drop every entry. Ids keep increasing across a clear so a stale
    /// in-flight response can never collide with a fresh entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// All entries in insertion order
    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn last(&self) -> Option<&Entry> {
        self.entries.last()
    }

    pub fn get(&self, id: EntryId) -> Option<&Entry> {
        self.entries.iter().find(|e| e.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_transcript_is_empty() {
        let transcript = Transcript::new();
        assert!(transcript.is_empty());
        assert_eq!(transcript.len(), 0);
        assert!(transcript.last().is_none());
    }

    #[test]
    fn test_push_preserves_order() {
        let mut transcript = Transcript::new();
        let q = transcript.push_question("Q1");
        transcript.push_answer(q, "A1");
        transcript.push_clarification_question("why?");
        transcript.push_clarification("because");

        let entries = transcript.entries();
        assert_eq!(entries.len(), 4);
        assert_eq!(entries[0].kind_name(), "question");
        assert_eq!(entries[1].kind_name(), "answer");
        assert_eq!(entries[2].kind_name(), "clarification-question");
        assert_eq!(entries[3].kind_name(), "clarification");
    }

    #[test]
    fn test_ids_strictly_increase() {
        let mut transcript = Transcript::new();
        let a = transcript.push_question("Q1");
        let b = transcript.push_question("Q2");
        let c = transcript.push_clarification_question("q");
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_ids_survive_clear() {
        let mut transcript = Transcript::new();
        let before = transcript.push_question("Q1");
        transcript.clear();
        let after = transcript.push_question("Q2");
        assert!(after > before);
    }

    #[test]
    fn test_get_by_id() {
        let mut transcript = Transcript::new();
        let id = transcript.push_question("Q1");
        assert_eq!(transcript.get(id).unwrap().content, "Q1");
        assert!(transcript.get(EntryId(999)).is_none());
    }

    #[test]
    fn test_status_transitions() {
        let mut transcript = Transcript::new();
        let id = transcript.push_clarification_question("why?");
        assert_eq!(transcript.get(id).unwrap().status, EntryStatus::Pending);

        assert!(transcript.mark_confirmed(id));
        assert_eq!(transcript.get(id).unwrap().status, EntryStatus::Confirmed);

        assert!(transcript.mark_failed(id));
        assert_eq!(transcript.get(id).unwrap().status, EntryStatus::Failed);

        assert!(!transcript.mark_failed(EntryId(999)));
    }

    #[test]
    fn test_clear_empties_transcript() {
        let mut transcript = Transcript::new();
        let q = transcript.push_question("Q1");
        transcript.push_answer(q, "A1");
        transcript.clear();
        assert!(transcript.is_empty());
    }
}
