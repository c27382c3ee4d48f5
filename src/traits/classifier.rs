//! Text-classification capability trait.
//!
//! The verification workflow depends on zero-shot classification through
//! this narrow seam, not on any concrete inference engine. Implementations
//! wrap model-inference services (hosted zero-shot endpoints, local
//! models, etc.) and handle the specifics of invocation and response
//! parsing.

use async_trait::async_trait;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A candidate label with its classification score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LabelScore {
    pub label: String,
    pub score: f32,
}

impl LabelScore {
    pub fn new(label: impl Into<String>, score: f32) -> Self {
        Self {
            label: label.into(),
            score,
        }
    }
}

/// Text-classification capability.
///
/// Treated as a stateless, concurrently-callable service. Calls may
/// block on a model-inference backend; the trait enforces no internal
/// timeout, so callers impose their own timeout or cancellation policy.
#[async_trait]
pub trait TextClassifier: Send + Sync {
    /// Classify `text` against `candidate_labels`.
    ///
    /// Returns one [`LabelScore`] per candidate, sorted by score
    /// descending, with scores summing to ~1.0. A tied top score is
    /// resolved by whatever stable order the backend returns; the
    /// workflow imposes no additional tie-break.
    ///
    /// Infrastructure failures must surface as
    /// [`IntakeError::ClassifierUnavailable`], never as a low score.
    ///
    /// [`IntakeError::ClassifierUnavailable`]: crate::error::IntakeError::ClassifierUnavailable
    async fn classify(&self, text: &str, candidate_labels: &[&str]) -> Result<Vec<LabelScore>>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_label_score_serialization() {
        let score = LabelScore::new("Water Supply Department", 0.82);
        let json = serde_json::to_string(&score).unwrap();
        let back: LabelScore = serde_json::from_str(&json).unwrap();
        assert_eq!(back, score);
    }
}
