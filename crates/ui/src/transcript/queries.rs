use super::{Entry, EntryId, Transcript};

impl Transcript {
    /// All question entries, oldest first
    pub fn questions(&self) -> Vec<&Entry> {
        self.entries().iter().filter(|e| e.is_question()).collect()
    }

    /// All answer entries, oldest first
    pub fn answers(&self) -> Vec<&Entry> {
        self.entries().iter().filter(|e| e.is_answer()).collect()
    }

    pub fn question_count(&self) -> usize {
        self.entries().iter().filter(|e| e.is_question()).count()
    }

    pub fn answer_count(&self) -> usize {
        self.entries().iter().filter(|e| e.is_answer()).count()
    }

    /// The most recently generated question
    pub fn last_question(&self) -> Option<&Entry> {
        self.entries().iter().rev().find(|e| e.is_question())
    }

    /// Whether any answer entry links to the given question
    pub fn is_answered(&self, question: EntryId) -> bool {
        self.entries().iter().any(|e| e.answered_question() == Some(question))
    }

    /// Whether the most recent question has been answered.
    ///
    /// True iff an answer entry exists at a position strictly after the
    /// most recent question entry. With one open question at a time this
    /// coincides with the link-based [`Transcript::is_answered`].
    pub fn current_question_answered(&self) -> bool {
        let Some(question_idx) = self.entries().iter().rposition(|e| e.is_question()) else {
            return false;
        };
        self.entries()[question_idx + 1..].iter().any(|e| e.is_answer())
    }

    /// Question and answer entries only, oldest first
    pub fn exchange_entries(&self) -> Vec<&Entry> {
        self.entries().iter().filter(|e| e.is_exchange()).collect()
    }

    /// Completed (question, answer) pairs for the history section.
    ///
    /// The trailing `window` exchange entries are treated as the current
    /// exchange and excluded; within the remainder each question is paired
    /// with the answer that links to it. Questions whose answer falls
    /// outside the window (or never arrived) are dropped from history.
    pub fn history_pairs(&self, window: usize) -> Vec<(&Entry, &Entry)> {
        let exchanges = self.exchange_entries();
        if exchanges.len() <= window {
            return Vec::new();
        }
        let visible = &exchanges[..exchanges.len() - window];

        visible
            .iter()
            .filter(|e| e.is_question())
            .filter_map(|q| {
                visible
                    .iter()
                    .find(|a| a.answered_question() == Some(q.id))
                    .map(|a| (*q, *a))
            })
            .collect()
    }

    /// The most recent clarification-feed entries, capped for display.
    ///
    /// `cap` limits what the sidebar shows; the transcript itself keeps
    /// everything.
    pub fn recent_clarifications(&self, cap: usize) -> Vec<&Entry> {
        let feed: Vec<&Entry> = self.entries().iter().filter(|e| e.is_clarification_entry()).collect();
        let start = feed.len().saturating_sub(cap);
        feed[start..].to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Q1 A1 Q2 A2 ... with n exchange entries (alternating, question first)
    fn alternating_transcript(n: usize) -> Transcript {
        let mut transcript = Transcript::new();
        let mut open_question = None;
        for i in 0..n {
            if i % 2 == 0 {
                open_question = Some(transcript.push_question(format!("Q{}", i / 2 + 1)));
            } else {
                transcript.push_answer(open_question.unwrap(), format!("A{}", i / 2 + 1));
            }
        }
        transcript
    }

    #[test]
    fn test_counts() {
        let transcript = alternating_transcript(5);
        assert_eq!(transcript.question_count(), 3);
        assert_eq!(transcript.answer_count(), 2);
        assert_eq!(transcript.questions().len(), 3);
        assert_eq!(transcript.answers().len(), 2);
    }

    #[test]
    fn test_last_question() {
        let transcript = alternating_transcript(5);
        assert_eq!(transcript.last_question().unwrap().content, "Q3");

        let empty = Transcript::new();
        assert!(empty.last_question().is_none());
    }

    #[test]
    fn test_current_question_answered_positional() {
        let mut transcript = Transcript::new();
        assert!(!transcript.current_question_answered());

        let q1 = transcript.push_question("Q1");
        assert!(!transcript.current_question_answered());

        transcript.push_answer(q1, "A1");
        assert!(transcript.current_question_answered());

        // A new question reopens the session even though Q1 stays answered.
        let q2 = transcript.push_question("Q2");
        assert!(!transcript.current_question_answered());
        assert!(transcript.is_answered(q1));
        assert!(!transcript.is_answered(q2));

        transcript.push_answer(q2, "A2");
        assert!(transcript.current_question_answered());
    }

    #[test]
    fn test_current_question_answered_ignores_clarifications() {
        let mut transcript = Transcript::new();
        transcript.push_question("Q1");
        transcript.push_clarification_question("why?");
        transcript.push_clarification("because");
        assert!(!transcript.current_question_answered());
    }

    #[test]
    fn test_history_pairs_five_entries() {
        // [Q1, A1, Q2, A2, Q3] minus the trailing 2 leaves [Q1, A1, Q2]:
        // Q2's answer is outside the window, so only (Q1, A1) remains.
        let transcript = alternating_transcript(5);
        let pairs = transcript.history_pairs(2);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.content, "Q1");
        assert_eq!(pairs[0].1.content, "A1");
    }

    #[test]
    fn test_history_pairs_six_entries() {
        let transcript = alternating_transcript(6);
        let pairs = transcript.history_pairs(2);
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].0.content, "Q1");
        assert_eq!(pairs[0].1.content, "A1");
        assert_eq!(pairs[1].0.content, "Q2");
        assert_eq!(pairs[1].1.content, "A2");
    }

    #[test]
    fn test_history_pairs_small_transcripts() {
        assert!(alternating_transcript(0).history_pairs(2).is_empty());
        assert!(alternating_transcript(1).history_pairs(2).is_empty());
        assert!(alternating_transcript(2).history_pairs(2).is_empty());
    }

    #[test]
    fn test_history_pairs_skips_unanswered_questions() {
        // Q1 (never answered), Q2, A2, Q3, A3: window drops Q3/A3, and Q1
        // has no linked answer, so only (Q2, A2) shows.
        let mut transcript = Transcript::new();
        transcript.push_question("Q1");
        let q2 = transcript.push_question("Q2");
        transcript.push_answer(q2, "A2");
        let q3 = transcript.push_question("Q3");
        transcript.push_answer(q3, "A3");

        let pairs = transcript.history_pairs(2);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.content, "Q2");
    }

    #[test]
    fn test_history_pairs_ignore_clarifications() {
        let mut transcript = Transcript::new();
        let q1 = transcript.push_question("Q1");
        transcript.push_clarification_question("why?");
        transcript.push_answer(q1, "A1");
        transcript.push_clarification("because");
        let q2 = transcript.push_question("Q2");
        transcript.push_answer(q2, "A2");

        let pairs = transcript.history_pairs(2);
        assert_eq!(pairs.len(), 1);
        assert_eq!(pairs[0].0.content, "Q1");
        assert_eq!(pairs[0].1.content, "A1");
    }

    #[test]
    fn test_recent_clarifications_cap() {
        let mut transcript = Transcript::new();
        transcript.push_question("Q1");
        for i in 0..6 {
            transcript.push_clarification_question(format!("q{}", i));
            transcript.push_clarification(format!("c{}", i));
        }

        let feed = transcript.recent_clarifications(8);
        assert_eq!(feed.len(), 8);
        assert_eq!(feed[0].content, "q2");
        assert_eq!(feed[7].content, "c5");

        let all = transcript.recent_clarifications(100);
        assert_eq!(all.len(), 12);
    }

    #[test]
    fn test_recent_clarifications_excludes_exchange() {
        let mut transcript = Transcript::new();
        let q = transcript.push_question("Q1");
        transcript.push_answer(q, "A1");
        transcript.push_clarification_question("why?");

        let feed = transcript.recent_clarifications(8);
        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].content, "why?");
    }
}
