//! Hugging Face Inference API implementation of the classifier trait.
//!
//! A reference implementation backed by a hosted zero-shot
//! classification model (default: `facebook/bart-large-mnli`).
//!
//! # Example
//!
//! ```rust,ignore
//! use intake::classifiers::HfZeroShot;
//!
//! let classifier = HfZeroShot::new("hf_...").with_model("facebook/bart-large-mnli");
//! let intake = Intake::new(store, classifier);
//! ```

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, SecretString};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::{IntakeError, Result};
use crate::traits::classifier::{LabelScore, TextClassifier};

const DEFAULT_MODEL: &str = "facebook/bart-large-mnli";
const DEFAULT_BASE_URL: &str = "https://api-inference.huggingface.co/models";

/// Zero-shot classification via the Hugging Face Inference API.
#[derive(Clone)]
pub struct HfZeroShot {
    client: Client,
    api_token: SecretString,
    model: String,
    base_url: String,
}

#[derive(Serialize)]
struct ZeroShotRequest<'a> {
    inputs: &'a str,
    parameters: ZeroShotParameters<'a>,
}

#[derive(Serialize)]
struct ZeroShotParameters<'a> {
    candidate_labels: &'a [&'a str],
}

/// Response shape: parallel `labels` and `scores` arrays, sorted by
/// score descending.
#[derive(Deserialize)]
struct ZeroShotResponse {
    labels: Vec<String>,
    scores: Vec<f32>,
}

impl HfZeroShot {
    /// Create a new client with the given API token.
    pub fn new(api_token: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            api_token: SecretString::from(api_token.into()),
            model: DEFAULT_MODEL.to_string(),
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }

    /// Create from the `HF_API_TOKEN` environment variable.
    pub fn from_env() -> Result<Self> {
        let token = std::env::var("HF_API_TOKEN")
            .map_err(|_| IntakeError::Config("HF_API_TOKEN not set".into()))?;
        Ok(Self::new(token))
    }

    /// Set the model checkpoint (default: `facebook/bart-large-mnli`).
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Set a custom base URL (for self-hosted inference endpoints).
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Get the current model name.
    pub fn model(&self) -> &str {
        &self.model
    }
}

#[async_trait]
impl TextClassifier for HfZeroShot {
    async fn classify(&self, text: &str, candidate_labels: &[&str]) -> Result<Vec<LabelScore>> {
        let url = format!("{}/{}", self.base_url, self.model);
        debug!(model = %self.model, label_count = candidate_labels.len(), "zero-shot request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(self.api_token.expose_secret())
            .json(&ZeroShotRequest {
                inputs: text,
                parameters: ZeroShotParameters { candidate_labels },
            })
            .send()
            .await
            .map_err(|e| IntakeError::ClassifierUnavailable(Box::new(e)))?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(IntakeError::ClassifierUnavailable(
                format!("inference API returned {status}: {body}").into(),
            ));
        }

        let parsed: ZeroShotResponse = response
            .json()
            .await
            .map_err(|e| IntakeError::ClassifierUnavailable(Box::new(e)))?;

        Ok(parsed
            .labels
            .into_iter()
            .zip(parsed.scores)
            .map(|(label, score)| LabelScore { label, score })
            .collect())
    }
}
