use reqwest::Client as HttpClient;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::types::*;
use askara_core::{Error, Result};

/// Study service seam: the three operations the UI needs from the backend.
///
/// Implemented by [`HttpStudyService`] for the real prediction service and
/// by [`crate::MockStudyService`] for deterministic tests.
#[async_trait::async_trait]
pub trait StudyService: Send + Sync {
    /// Generate a new practice question for the given paper
    async fn generate_question(&self, paper_code: &str) -> Result<String>;

    /// Reveal the answer to the identified question
    async fn reveal_answer(&self, question_id: u64) -> Result<String>;

    /// Ask a free-form clarification question about the current item
    async fn clarify(&self, follow_up: &str, question_id: Option<u64>) -> Result<String>;
}

/// HTTP implementation backed by the prediction service.
///
/// No retries and no caching: a failed call is reported once and the
/// caller decides what (not) to do with it.
pub struct HttpStudyService {
    client: HttpClient,
    base_url: String,
}

impl HttpStudyService {
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self { client: HttpClient::new(), base_url: base_url.trim_end_matches('/').to_string() }
    }

    /// Current base URL (without trailing slash)
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// POST a JSON body to `{base}{path}` and decode a JSON response.
    async fn post_json<B: Serialize, R: DeserializeOwned>(&self, path: &str, body: &B) -> Result<R> {
        let url = format!("{}{}", self.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| Error::Service(format!("request to {} failed: {}", url, e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(Error::service_status(status.as_u16(), &body));
        }

        response
            .json::<R>()
            .await
            .map_err(|e| Error::Parse(format!("invalid response from {}: {}", url, e)))
    }
}

#[async_trait::async_trait]
impl StudyService for HttpStudyService {
    async fn generate_question(&self, paper_code: &str) -> Result<String> {
        let request = PredictRequest { paper_code: paper_code.to_string() };
        let response: PredictResponse = self.post_json("/predict", &request).await?;
        Ok(response.question)
    }

    async fn reveal_answer(&self, question_id: u64) -> Result<String> {
        let request = AnswerRequest { question_id };
        let response: AnswerResponse = self.post_json("/answer", &request).await?;
        Ok(response.answer)
    }

    async fn clarify(&self, follow_up: &str, question_id: Option<u64>) -> Result<String> {
        let request = ClarifyRequest { follow_up: follow_up.to_string(), question_id };
        let response: ClarifyResponse = self.post_json("/clarify", &request).await?;
        Ok(response.clarification)
    }
}
