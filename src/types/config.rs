//! Configuration for the intake pipeline.

use serde::{Deserialize, Serialize};

/// Tunable knobs for the verification workflow and duplicate-merge
/// resolver.
///
/// The regulatory bar for auto-routing varies per deployment, so the
/// confidence threshold is configuration rather than a constant.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct IntakeConfig {
    /// Minimum top-department score required to accept a
    /// classification as in scope. Default: 0.3.
    pub confidence_threshold: f32,

    /// Number of terms kept in a complaint's keyword summary.
    /// Default: 5.
    pub summary_terms: usize,

    /// Minimum keyword-summary intersection (as sets) for two
    /// complaints to be considered duplicates. Default: 3.
    pub merge_overlap: usize,
}

impl Default for IntakeConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: 0.3,
            summary_terms: 5,
            merge_overlap: 3,
        }
    }
}

impl IntakeConfig {
    /// Create a config with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the confidence threshold.
    pub fn with_confidence_threshold(mut self, threshold: f32) -> Self {
        self.confidence_threshold = threshold;
        self
    }

    /// Set the keyword summary size.
    pub fn with_summary_terms(mut self, terms: usize) -> Self {
        self.summary_terms = terms;
        self
    }

    /// Set the duplicate-merge overlap threshold.
    pub fn with_merge_overlap(mut self, overlap: usize) -> Self {
        self.merge_overlap = overlap;
        self
    }
}
