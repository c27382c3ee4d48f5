//! The Intake - main entry point for the complaint pipeline.
//!
//! Wires the classifier capability, the taxonomy snapshot, the keyword
//! extractor, and the complaint store into one object. Exposes two
//! layers, mirroring how callers actually use it:
//!
//! - **Primitives**: `verify` (decision only, mutates nothing),
//!   `check_duplicate`, `summarize`. Callers that own their persistence
//!   compose these directly.
//! - **High-level**: `submit`, the full intake flow - duplicate check,
//!   verification, and persistence of accepted complaints.

use tokio_util::sync::CancellationToken;
use tracing::{debug, info};

use crate::error::{IntakeError, Result};
use crate::keywords::KeywordExtractor;
use crate::pipeline::dedup::find_duplicate;
use crate::pipeline::verify::verify_complaint;
use crate::traits::classifier::TextClassifier;
use crate::traits::store::ComplaintStore;
use crate::types::complaint::{content_hash, Complaint, ComplaintStatus, Priority};
use crate::types::config::IntakeConfig;
use crate::types::decision::Decision;
use crate::types::taxonomy::Taxonomy;

/// Outcome of a high-level submission.
#[derive(Debug, Clone, PartialEq)]
pub enum Submission {
    /// Folded into an existing complaint; no new record was created.
    Merged {
        /// Code of the existing complaint the text was merged into.
        code: String,
    },

    /// Accepted and persisted as a new complaint record.
    Filed { code: String, decision: Decision },

    /// A decision was produced but nothing was persisted
    /// (out-of-scope, or evidence still required).
    NotFiled { decision: Decision },
}

impl Submission {
    /// Complaint code, when the submission produced or joined a record.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Merged { code } | Self::Filed { code, .. } => Some(code),
            Self::NotFiled { .. } => None,
        }
    }
}

/// The complaint intake pipeline.
///
/// # Example
///
/// ```rust,ignore
/// use intake::{Intake, MemoryStore};
/// use intake::testing::MockClassifier;
///
/// let intake = Intake::new(MemoryStore::new(), MockClassifier::new());
///
/// // Decision only
/// let decision = intake.verify("No water on Elm Street since Monday").await?;
///
/// // Full flow: dedup, verify, persist
/// let submission = intake.submit("user-42", "No water on Elm Street since Monday").await?;
/// ```
pub struct Intake<S: ComplaintStore, C: TextClassifier> {
    store: S,
    classifier: C,
    taxonomy: Taxonomy,
    extractor: KeywordExtractor,
    config: IntakeConfig,
}

impl<S: ComplaintStore, C: TextClassifier> Intake<S, C> {
    /// Create an intake pipeline with the default civic taxonomy and
    /// configuration.
    pub fn new(store: S, classifier: C) -> Self {
        let config = IntakeConfig::default();
        Self {
            store,
            classifier,
            taxonomy: Taxonomy::civic_default(),
            extractor: KeywordExtractor::new().with_max_terms(config.summary_terms),
            config,
        }
    }

    /// Replace the taxonomy.
    pub fn with_taxonomy(mut self, taxonomy: Taxonomy) -> Self {
        self.taxonomy = taxonomy;
        self
    }

    /// Replace the configuration.
    pub fn with_config(mut self, config: IntakeConfig) -> Self {
        self.extractor = self.extractor.with_max_terms(config.summary_terms);
        self.config = config;
        self
    }

    /// Replace the keyword extractor (e.g. for another language's
    /// stop words).
    pub fn with_extractor(mut self, extractor: KeywordExtractor) -> Self {
        self.extractor = extractor.with_max_terms(self.config.summary_terms);
        self
    }

    /// The taxonomy snapshot this pipeline routes against.
    pub fn taxonomy(&self) -> &Taxonomy {
        &self.taxonomy
    }

    /// Get a reference to the configuration.
    pub fn config(&self) -> &IntakeConfig {
        &self.config
    }

    /// Get a reference to the underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    // =========================================================================
    // Primitives
    // =========================================================================

    /// PRIMITIVE: Run the verification workflow on raw complaint text.
    ///
    /// Produces a fresh decision and persists nothing. Errors on empty
    /// text and on classifier failure; a low-confidence classification
    /// is the `out_of_scope` decision, not an error.
    pub async fn verify(&self, text: &str) -> Result<Decision> {
        verify_complaint(&self.classifier, &self.taxonomy, &self.config, text).await
    }

    /// PRIMITIVE: Verify with caller-driven cancellation.
    ///
    /// The classification backend may block on a model-inference
    /// service; the pipeline enforces no internal timeout, so callers
    /// bring their own token. Nothing needs rolling back on
    /// cancellation - `verify` mutates no state.
    pub async fn verify_with_cancel(
        &self,
        text: &str,
        cancel: CancellationToken,
    ) -> Result<Decision> {
        tokio::select! {
            biased;
            _ = cancel.cancelled() => Err(IntakeError::Cancelled),
            result = self.verify(text) => result,
        }
    }

    /// PRIMITIVE: Keyword summary for a text.
    pub fn summarize(&self, text: &str) -> Vec<String> {
        self.extractor.extract(text)
    }

    /// PRIMITIVE: Check whether a text duplicates a recorded complaint.
    ///
    /// Compares the text's keyword summary against every stored
    /// complaint's summary and returns the first code whose overlap
    /// meets the merge threshold, in store iteration order. Freshness
    /// of the store view is the caller's concern: two near-duplicates
    /// submitted concurrently can both see a store without the other
    /// and produce two records instead of one merge. No lock is taken
    /// here.
    pub async fn check_duplicate(&self, text: &str) -> Result<Option<String>> {
        let summary = self.extractor.extract(text);
        let existing = self.store.list_complaints().await?;
        Ok(find_duplicate(&summary, &existing, self.config.merge_overlap)
            .map(|c| c.code.clone()))
    }

    // =========================================================================
    // High-Level API
    // =========================================================================

    /// HIGH-LEVEL: Full intake flow for one submission.
    ///
    /// 1. exact resubmission (same normalized text) merges immediately;
    /// 2. keyword-overlap duplicate merges, folding the text into the
    ///    existing record;
    /// 3. otherwise the text is verified; an accepted decision files a
    ///    new complaint (priority from the urgency flag), any other
    ///    decision persists nothing and is returned to the caller.
    pub async fn submit(&self, user_id: &str, text: &str) -> Result<Submission> {
        if text.trim().is_empty() {
            return Err(IntakeError::EmptyComplaint);
        }

        // Exact-duplicate fast path, before any classification.
        let hash = content_hash(text);
        if let Some(existing) = self.store.find_by_content_hash(&hash).await? {
            info!(code = %existing.code, "exact resubmission merged");
            return Ok(Submission::Merged { code: existing.code });
        }

        // Similarity merge, also before classification.
        if let Some(code) = self.check_duplicate(text).await? {
            self.store.append_text(&code, text).await?;
            info!(%code, "near-duplicate merged");
            return Ok(Submission::Merged { code });
        }

        let decision = self.verify(text).await?;
        debug!(status = decision.status(), "submission decided");

        let Decision::Accepted {
            ref department,
            ref sub_category,
            is_urgent,
            ..
        } = decision
        else {
            return Ok(Submission::NotFiled { decision });
        };

        let complaint = Complaint::new(user_id, text, department.clone())
            .with_sub_category(sub_category.clone())
            .with_summary(self.extractor.extract(text))
            .with_priority(Priority::from_urgency(is_urgent))
            .with_status(ComplaintStatus::Accepted);
        let code = complaint.code.clone();

        self.store.store_complaint(&complaint).await?;
        info!(%code, department = %department, "complaint filed");

        Ok(Submission::Filed { code, decision })
    }
}
