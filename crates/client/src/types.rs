use serde::{Deserialize, Serialize};

/// Body of `POST {base}/predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictRequest {
    pub paper_code: String,
}

/// Response of `POST {base}/predict`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PredictResponse {
    pub question: String,
}

/// Body of `POST {base}/answer`
///
/// Carries the id of the question being answered so the server never has
/// to guess which question is current.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerRequest {
    pub question_id: u64,
}

/// Response of `POST {base}/answer`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnswerResponse {
    pub answer: String,
}

/// Body of `POST {base}/clarify`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClarifyRequest {
    pub follow_up: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub question_id: Option<u64>,
}

/// Response of `POST {base}/clarify`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClarifyResponse {
    pub clarification: String,
}
