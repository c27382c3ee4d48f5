//! Testing utilities including a mock classifier.
//!
//! Useful for testing applications that use the intake library without
//! a real model-inference backend. The mock records every call it
//! receives so tests can assert exactly how many classification calls
//! each workflow path makes.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::error::{IntakeError, Result};
use crate::traits::classifier::{LabelScore, TextClassifier};

/// Record of one call made to the mock classifier.
#[derive(Debug, Clone)]
pub struct ClassifierCall {
    pub text: String,
    pub candidate_labels: Vec<String>,
}

/// A mock text classifier with scripted, deterministic responses.
///
/// Responses are keyed by the candidate-label set, so the department
/// call and each sub-category call can be scripted independently.
/// Unscripted label sets fall back to a deterministic distribution
/// that favors the first candidate.
///
/// Clones share state, so a test can keep a handle for assertions
/// after handing the mock to the pipeline.
#[derive(Default, Clone)]
pub struct MockClassifier {
    /// Scripted responses keyed by joined candidate labels.
    responses: Arc<RwLock<HashMap<String, Vec<LabelScore>>>>,

    /// Simulate an unreachable backend.
    unavailable: Arc<RwLock<bool>>,

    /// Return empty score lists (a misbehaving backend).
    empty: Arc<RwLock<bool>>,

    /// Call tracking for assertions.
    calls: Arc<RwLock<Vec<ClassifierCall>>>,
}

impl MockClassifier {
    /// Create a new mock classifier with default behavior.
    pub fn new() -> Self {
        Self::default()
    }

    /// Script a full ranked response for a candidate-label set.
    pub fn with_response(self, candidate_labels: &[&str], scores: Vec<LabelScore>) -> Self {
        self.responses
            .write()
            .unwrap()
            .insert(label_key(candidate_labels), scores);
        self
    }

    /// Script the top label and score for a candidate-label set.
    ///
    /// The remaining probability mass is spread over the other
    /// candidates in decreasing amounts; when the scripted top score is
    /// low the tail is compressed so the list stays sorted descending.
    pub fn with_top_response(self, candidate_labels: &[&str], top: &str, score: f32) -> Self {
        let mut ranked = vec![LabelScore::new(top, score)];
        let others: Vec<&&str> = candidate_labels.iter().filter(|l| **l != top).collect();

        if !others.is_empty() {
            let rest = (1.0 - score).max(0.0);
            let weight_sum: f32 = (1..=others.len()).map(|w| w as f32).sum();
            let mut tail: Vec<f32> = others
                .iter()
                .enumerate()
                .map(|(i, _)| rest * (others.len() - i) as f32 / weight_sum)
                .collect();

            // Keep the scripted top on top.
            if tail[0] >= score {
                let scale = score * 0.99 / tail[0];
                for t in &mut tail {
                    *t *= scale;
                }
            }
            for (other, t) in others.into_iter().zip(tail) {
                ranked.push(LabelScore::new(*other, t));
            }
        }

        self.with_response(candidate_labels, ranked)
    }

    /// Make every call fail with a classifier-unavailable error.
    pub fn with_unavailable(self) -> Self {
        *self.unavailable.write().unwrap() = true;
        self
    }

    /// Make every call return an empty score list.
    pub fn with_empty_responses(self) -> Self {
        *self.empty.write().unwrap() = true;
        self
    }

    /// All calls made to this mock, in order.
    pub fn calls(&self) -> Vec<ClassifierCall> {
        self.calls.read().unwrap().clone()
    }

    /// Number of calls made to this mock.
    pub fn call_count(&self) -> usize {
        self.calls.read().unwrap().len()
    }

    /// Clear call history.
    pub fn clear_calls(&self) {
        self.calls.write().unwrap().clear();
    }

    /// Deterministic fallback: the first candidate wins, scores
    /// decrease linearly and sum to 1.0.
    fn default_response(&self, candidate_labels: &[&str]) -> Vec<LabelScore> {
        let n = candidate_labels.len();
        let weight_sum: f32 = (1..=n).map(|w| w as f32).sum();
        candidate_labels
            .iter()
            .enumerate()
            .map(|(i, label)| LabelScore::new(*label, (n - i) as f32 / weight_sum))
            .collect()
    }
}

#[async_trait]
impl TextClassifier for MockClassifier {
    async fn classify(&self, text: &str, candidate_labels: &[&str]) -> Result<Vec<LabelScore>> {
        self.calls.write().unwrap().push(ClassifierCall {
            text: text.to_string(),
            candidate_labels: candidate_labels.iter().map(|l| l.to_string()).collect(),
        });

        if *self.unavailable.read().unwrap() {
            return Err(IntakeError::ClassifierUnavailable(
                "mock classifier marked unavailable".into(),
            ));
        }
        if *self.empty.read().unwrap() {
            return Ok(Vec::new());
        }

        let scripted = self
            .responses
            .read()
            .unwrap()
            .get(&label_key(candidate_labels))
            .cloned();
        Ok(scripted.unwrap_or_else(|| self.default_response(candidate_labels)))
    }
}

fn label_key(candidate_labels: &[&str]) -> String {
    candidate_labels.join("\u{1f}")
}
