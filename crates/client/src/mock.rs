use crate::StudyService;
use askara_core::{Error, Result};
use std::sync::{Arc, Mutex};

/// Scripted outcome for one mock call
#[derive(Debug, Clone)]
pub enum MockOutcome {
    /// Return this text
    Text(String),
    /// Fail with a service error carrying this message
    Fail(String),
}

impl MockOutcome {
    pub fn text(content: impl Into<String>) -> Self {
        Self::Text(content.into())
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self::Fail(message.into())
    }
}

/// One recorded call, for asserting what the UI actually sent
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordedCall {
    GenerateQuestion { paper_code: String },
    RevealAnswer { question_id: u64 },
    Clarify { follow_up: String, question_id: Option<u64> },
}

/// Deterministic study service for tests: outcomes are consumed in
/// order, every call is recorded, and no network is involved.
#[derive(Clone, Default)]
pub struct MockStudyService {
    outcomes: Arc<Mutex<Vec<MockOutcome>>>,
    calls: Arc<Mutex<Vec<RecordedCall>>>,
}

impl MockStudyService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a mock that answers every call with the given outcomes, in order.
    pub fn with_outcomes(outcomes: Vec<MockOutcome>) -> Self {
        Self { outcomes: Arc::new(Mutex::new(outcomes)), calls: Arc::new(Mutex::new(Vec::new())) }
    }

    /// Queue another outcome at the end of the script.
    pub fn push_outcome(&self, outcome: MockOutcome) {
        self.outcomes.lock().unwrap().push(outcome);
    }

    /// Calls made so far, in order.
    pub fn calls(&self) -> Vec<RecordedCall> {
        self.calls.lock().unwrap().clone()
    }

    /// Number of calls made so far.
    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn next_outcome(&self) -> Result<String> {
        let mut outcomes = self.outcomes.lock().unwrap();
        if outcomes.is_empty() {
            return Err(Error::Service("mock script exhausted".to_string()));
        }
        match outcomes.remove(0) {
            MockOutcome::Text(content) => Ok(content),
            MockOutcome::Fail(message) => Err(Error::Service(message)),
        }
    }
}

#[async_trait::async_trait]
impl StudyService for MockStudyService {
    async fn generate_question(&self, paper_code: &str) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::GenerateQuestion { paper_code: paper_code.to_string() });
        self.next_outcome()
    }

    async fn reveal_answer(&self, question_id: u64) -> Result<String> {
        self.calls.lock().unwrap().push(RecordedCall::RevealAnswer { question_id });
        self.next_outcome()
    }

    async fn clarify(&self, follow_up: &str, question_id: Option<u64>) -> Result<String> {
        self.calls
            .lock()
            .unwrap()
            .push(RecordedCall::Clarify { follow_up: follow_up.to_string(), question_id });
        self.next_outcome()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_mock_consumes_outcomes_in_order() {
        let mock = MockStudyService::with_outcomes(vec![
            MockOutcome::text("Q1"),
            MockOutcome::fail("boom"),
            MockOutcome::text("Q2"),
        ]);

        assert_eq!(mock.generate_question("MATH101").await.unwrap(), "Q1");
        assert!(mock.reveal_answer(1).await.is_err());
        assert_eq!(mock.clarify("why?", Some(1)).await.unwrap(), "Q2");
    }

    #[tokio::test]
    async fn test_mock_records_calls() {
        let mock = MockStudyService::with_outcomes(vec![MockOutcome::text("Q"), MockOutcome::text("A")]);

        mock.generate_question("PHYS202").await.unwrap();
        mock.reveal_answer(4).await.unwrap();

        let calls = mock.calls();
        assert_eq!(calls.len(), 2);
        assert_eq!(calls[0], RecordedCall::GenerateQuestion { paper_code: "PHYS202".to_string() });
        assert_eq!(calls[1], RecordedCall::RevealAnswer { question_id: 4 });
    }

    #[tokio::test]
    async fn test_mock_exhausted_script_errors() {
        let mock = MockStudyService::new();
        let result = mock.generate_question("MATH101").await;
        assert!(result.is_err());
        assert_eq!(mock.call_count(), 1);
    }

    #[tokio::test]
    async fn test_push_outcome_extends_script() {
        let mock = MockStudyService::new();
        mock.push_outcome(MockOutcome::text("late"));
        assert_eq!(mock.clarify("q", None).await.unwrap(), "late");
    }
}
