/// Language Identifier: the single point of entry for language
/// identification in the API.
///
/// ARCHITECTURAL RULE: no other module may talk to the identification
/// model directly. The engine sees only the `LanguageIdentifier` trait,
/// carried in `AppState` as `Arc<dyn LanguageIdentifier>`, so the backend
/// can be swapped without touching handler or engine code.
///
/// The production backend is `FastTextClient`, a thin JSON client for a
/// fastText-style sidecar. The sidecar labels follow the `__label__xx`
/// convention; labels are stripped to bare codes before anything else
/// sees them. Each sentence gets exactly one attempt: no retries and no
/// client-side timeout, so a stuck model stalls only the request that
/// called it.
use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

const LABEL_PREFIX: &str = "__label__";

#[derive(Debug, Error)]
pub enum LangIdError {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("identifier error (status {status}): {message}")]
    Api { status: u16, message: String },

    #[error("identifier returned no prediction")]
    EmptyPrediction,
}

/// One identification: a bare 2-letter code and the model's confidence.
#[derive(Debug, Clone, PartialEq)]
pub struct Identification {
    pub code: String,
    pub confidence: f32,
}

#[async_trait]
pub trait LanguageIdentifier: Send + Sync {
    async fn identify(&self, text: &str) -> Result<Identification, LangIdError>;
}

#[derive(Debug, Serialize)]
struct PredictRequest<'a> {
    text: &'a str,
}

#[derive(Debug, Deserialize)]
struct PredictResponse {
    label: String,
    confidence: f32,
}

/// JSON client for the language-identification sidecar.
#[derive(Clone)]
pub struct FastTextClient {
    client: Client,
    base_url: String,
}

impl FastTextClient {
    pub fn new(base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }
}

#[async_trait]
impl LanguageIdentifier for FastTextClient {
    async fn identify(&self, text: &str) -> Result<Identification, LangIdError> {
        let url = format!("{}/predict", self.base_url);
        let response = self
            .client
            .post(&url)
            .json(&PredictRequest { text })
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let message = response.text().await.unwrap_or_default();
            return Err(LangIdError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let prediction: PredictResponse = response.json().await?;
        if prediction.label.is_empty() {
            return Err(LangIdError::EmptyPrediction);
        }

        let code = strip_label(&prediction.label).to_string();
        debug!(
            "identified '{code}' with confidence {}",
            prediction.confidence
        );

        Ok(Identification {
            code,
            confidence: prediction.confidence,
        })
    }
}

/// Strips the fastText `__label__` prefix; labels without it pass through.
fn strip_label(label: &str) -> &str {
    label.strip_prefix(LABEL_PREFIX).unwrap_or(label)
}
