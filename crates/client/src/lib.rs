pub mod mock;
pub mod service;
pub mod types;

pub use mock::{MockOutcome, MockStudyService, RecordedCall};
pub use service::{HttpStudyService, StudyService};
pub use types::{AnswerRequest, AnswerResponse, ClarifyRequest, ClarifyResponse, PredictRequest, PredictResponse};

pub use askara_core::{Error, Result};
