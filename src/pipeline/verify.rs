//! Verification workflow - the decision state machine.
//!
//! Transition rules, evaluated in strict order:
//! 1. classify against the department list; top confidence below the
//!    threshold short-circuits to `out_of_scope`;
//! 2. classify against the chosen department's sub-categories;
//! 3. an image-required pair short-circuits to `requires_image`
//!    (urgency is not evaluated);
//! 4. otherwise evaluate urgency and accept.
//!
//! Exactly two classification calls per complaint once the department
//! is accepted - never fewer, never more. Classifier failures propagate
//! as errors; they are never mapped to `out_of_scope`, which is a
//! confidence-based business outcome.

use tracing::{debug, info};

use crate::error::{IntakeError, Result};
use crate::pipeline::urgency::is_urgent;
use crate::traits::classifier::{LabelScore, TextClassifier};
use crate::types::config::IntakeConfig;
use crate::types::decision::Decision;
use crate::types::taxonomy::Taxonomy;

/// Message attached to `out_of_scope` decisions.
pub const OUT_OF_SCOPE_MESSAGE: &str = "Complaint does not match any government category.";

/// Message attached to `requires_image` decisions.
pub const REQUIRES_IMAGE_MESSAGE: &str = "Please provide an image to support your complaint.";

/// Message attached to `accepted` decisions.
pub const ACCEPTED_MESSAGE: &str = "Complaint accepted and will be processed.";

/// Run one complaint through the verification workflow.
///
/// Returns the decision, or an error for empty text and classifier
/// failures. Mutates nothing: persisting the outcome is the caller's
/// concern.
pub async fn verify_complaint<C: TextClassifier>(
    classifier: &C,
    taxonomy: &Taxonomy,
    config: &IntakeConfig,
    text: &str,
) -> Result<Decision> {
    if text.trim().is_empty() {
        return Err(IntakeError::EmptyComplaint);
    }

    // First call: department.
    let departments = taxonomy.departments();
    let top = top_label(classifier, text, &departments).await?;

    if top.score < config.confidence_threshold {
        debug!(
            confidence = top.score,
            threshold = config.confidence_threshold,
            "complaint below confidence threshold"
        );
        return Ok(Decision::OutOfScope {
            confidence: top.score,
            message: OUT_OF_SCOPE_MESSAGE.to_string(),
        });
    }

    let department = top.label;
    let confidence = top.score;
    let sub_categories = taxonomy
        .sub_categories(&department)
        .ok_or_else(|| IntakeError::UnknownDepartment {
            name: department.clone(),
        })?;

    // Second call: sub-category within the chosen department.
    let candidates: Vec<&str> = sub_categories.iter().map(String::as_str).collect();
    let sub_category = top_label(classifier, text, &candidates).await?.label;

    debug!(%department, %sub_category, confidence, "complaint classified");

    if taxonomy.requires_image(&department, &sub_category) {
        // Urgency is deliberately not evaluated here: evidence is a
        // hard precondition, urgency only orders the queue.
        return Ok(Decision::RequiresImage {
            department,
            sub_category,
            confidence,
            message: REQUIRES_IMAGE_MESSAGE.to_string(),
        });
    }

    let urgent = is_urgent(text, taxonomy.urgency_terms());
    info!(%department, %sub_category, confidence, urgent, "complaint accepted");

    Ok(Decision::Accepted {
        department,
        sub_category,
        confidence,
        is_urgent: urgent,
        message: ACCEPTED_MESSAGE.to_string(),
    })
}

/// One classification call, returning the backend's top-ranked label.
///
/// The backend returns labels sorted by score descending; ties keep its
/// stable order, so the first element is the decision.
async fn top_label<C: TextClassifier>(
    classifier: &C,
    text: &str,
    candidates: &[&str],
) -> Result<LabelScore> {
    let scores = classifier.classify(text, candidates).await?;
    scores
        .into_iter()
        .next()
        .ok_or(IntakeError::EmptyClassification {
            label_count: candidates.len(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::MockClassifier;

    fn taxonomy() -> Taxonomy {
        Taxonomy::civic_default()
    }

    fn config() -> IntakeConfig {
        IntakeConfig::default()
    }

    #[tokio::test]
    async fn test_empty_text_rejected_before_classification() {
        let classifier = MockClassifier::new();
        let err = verify_complaint(&classifier, &taxonomy(), &config(), "   ")
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::EmptyComplaint));
        assert_eq!(classifier.call_count(), 0);
    }

    #[tokio::test]
    async fn test_low_confidence_is_out_of_scope_after_one_call() {
        let taxonomy = taxonomy();
        let classifier = MockClassifier::new()
            .with_top_response(&taxonomy.departments(), "Public Safety", 0.12);

        let decision = verify_complaint(
            &classifier,
            &taxonomy,
            &config(),
            "My neighbor plays loud music every night",
        )
        .await
        .unwrap();

        assert_eq!(
            decision,
            Decision::OutOfScope {
                confidence: 0.12,
                message: OUT_OF_SCOPE_MESSAGE.to_string(),
            }
        );
        assert_eq!(decision.department(), None);
        // Short-circuit: only the department call happened.
        assert_eq!(classifier.call_count(), 1);
    }

    #[tokio::test]
    async fn test_image_required_pair_short_circuits_urgency() {
        let taxonomy = taxonomy();
        let classifier = MockClassifier::new()
            .with_top_response(&taxonomy.departments(), "Road & Transport", 0.85)
            .with_top_response(
                &label_refs(taxonomy.sub_categories("Road & Transport").unwrap()),
                "Potholes",
                0.7,
            );

        // Urgency keywords present, but the image gate wins.
        let decision = verify_complaint(
            &classifier,
            &taxonomy,
            &config(),
            "There is a massive pothole causing accidents on Main Street, urgent repair needed",
        )
        .await
        .unwrap();

        assert_eq!(
            decision,
            Decision::RequiresImage {
                department: "Road & Transport".to_string(),
                sub_category: "Potholes".to_string(),
                confidence: 0.85,
                message: REQUIRES_IMAGE_MESSAGE.to_string(),
            }
        );
        assert!(decision.requires_image());
        assert!(!decision.is_urgent());
        assert_eq!(classifier.call_count(), 2);
    }

    #[tokio::test]
    async fn test_accepted_with_urgency() {
        let taxonomy = taxonomy();
        let classifier = MockClassifier::new()
            .with_top_response(&taxonomy.departments(), "Electricity Department", 0.9)
            .with_top_response(
                &label_refs(taxonomy.sub_categories("Electricity Department").unwrap()),
                "Power Outage",
                0.6,
            );

        let decision = verify_complaint(
            &classifier,
            &taxonomy,
            &config(),
            "URGENT: no power in the whole block since yesterday",
        )
        .await
        .unwrap();

        match decision {
            Decision::Accepted {
                department,
                sub_category,
                confidence,
                is_urgent,
                message,
            } => {
                assert_eq!(department, "Electricity Department");
                assert_eq!(sub_category, "Power Outage");
                assert_eq!(confidence, 0.9);
                assert!(is_urgent);
                assert_eq!(message, ACCEPTED_MESSAGE);
            }
            other => panic!("expected accepted, got {other:?}"),
        }
        assert_eq!(classifier.call_count(), 2);
    }

    #[tokio::test]
    async fn test_accepted_without_urgency() {
        let taxonomy = taxonomy();
        let classifier = MockClassifier::new()
            .with_top_response(&taxonomy.departments(), "Education", 0.75)
            .with_top_response(
                &label_refs(taxonomy.sub_categories("Education").unwrap()),
                "School Infrastructure Issue",
                0.5,
            );

        let decision = verify_complaint(
            &classifier,
            &taxonomy,
            &config(),
            "The school roof leaks when it rains",
        )
        .await
        .unwrap();

        assert!(!decision.is_urgent());
        assert_eq!(decision.status(), "accepted");
    }

    #[tokio::test]
    async fn test_classifier_failure_is_not_out_of_scope() {
        let taxonomy = taxonomy();
        let classifier = MockClassifier::new().with_unavailable();

        let err = verify_complaint(&classifier, &taxonomy, &config(), "water leak")
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::ClassifierUnavailable(_)));
    }

    #[tokio::test]
    async fn test_empty_classification_is_an_error() {
        let taxonomy = taxonomy();
        let classifier = MockClassifier::new().with_empty_responses();

        let err = verify_complaint(&classifier, &taxonomy, &config(), "water leak")
            .await
            .unwrap_err();
        assert!(matches!(err, IntakeError::EmptyClassification { .. }));
    }

    #[tokio::test]
    async fn test_threshold_is_configurable() {
        let taxonomy = taxonomy();
        let classifier = MockClassifier::new()
            .with_top_response(&taxonomy.departments(), "Public Safety", 0.4)
            .with_top_response(
                &label_refs(taxonomy.sub_categories("Public Safety").unwrap()),
                "Crime Report",
                0.5,
            );

        // 0.4 passes the default 0.3 bar...
        let decision =
            verify_complaint(&classifier, &taxonomy, &config(), "someone broke into my shed")
                .await
                .unwrap();
        assert_eq!(decision.status(), "accepted");

        // ...but fails a stricter deployment.
        let strict = IntakeConfig::new().with_confidence_threshold(0.5);
        let decision =
            verify_complaint(&classifier, &taxonomy, &strict, "someone broke into my shed")
                .await
                .unwrap();
        assert_eq!(decision.status(), "out_of_scope");
    }

    fn label_refs(labels: &[String]) -> Vec<&str> {
        labels.iter().map(String::as_str).collect()
    }
}
