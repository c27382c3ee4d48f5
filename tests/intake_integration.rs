//! Integration tests for the full intake workflow.
//!
//! These tests exercise the end-to-end path:
//! 1. Submit complaint text
//! 2. Classify (department, then sub-category)
//! 3. Apply the image-evidence policy and urgency detection
//! 4. Deduplicate against recorded complaints
//! 5. Persist accepted complaints

use intake::testing::MockClassifier;
use intake::{
    ComplaintStore, Decision, Intake, IntakeConfig, IntakeError, MemoryStore, Priority,
    Submission, Taxonomy,
};

/// Script the mock so the department call lands on `department` and the
/// sub-category call lands on `sub_category`.
fn scripted_classifier(
    taxonomy: &Taxonomy,
    department: &str,
    confidence: f32,
    sub_category: &str,
) -> MockClassifier {
    let subs: Vec<&str> = taxonomy
        .sub_categories(department)
        .expect("department in taxonomy")
        .iter()
        .map(String::as_str)
        .collect();
    MockClassifier::new()
        .with_top_response(&taxonomy.departments(), department, confidence)
        .with_top_response(&subs, sub_category, 0.6)
}

#[tokio::test]
async fn test_pothole_report_requires_image_before_urgency() {
    let taxonomy = Taxonomy::civic_default();
    let classifier = scripted_classifier(&taxonomy, "Road & Transport", 0.82, "Potholes");
    let handle = classifier.clone();
    let intake = Intake::new(MemoryStore::new(), classifier);

    let text =
        "There is a massive pothole causing accidents on Main Street, urgent repair needed";
    let decision = intake.verify(text).await.unwrap();

    // Potholes is image-required under Road & Transport, so the
    // urgency keywords in the text never come into play.
    assert_eq!(decision.status(), "requires_image");
    assert_eq!(decision.department(), Some("Road & Transport"));
    assert_eq!(decision.sub_category(), Some("Potholes"));
    assert!(decision.requires_image());
    assert!(!decision.is_urgent());
    assert_eq!(handle.call_count(), 2);

    // And the submit flow does not persist it.
    let submission = intake.submit("user-9", text).await.unwrap();
    assert!(matches!(submission, Submission::NotFiled { .. }));
    assert_eq!(intake.store().count_complaints().await.unwrap(), 0);
}

#[tokio::test]
async fn test_vague_complaint_is_out_of_scope_with_one_call() {
    let taxonomy = Taxonomy::civic_default();
    let classifier =
        MockClassifier::new().with_top_response(&taxonomy.departments(), "Public Safety", 0.12);
    let handle = classifier.clone();
    let intake = Intake::new(MemoryStore::new(), classifier);

    let decision = intake
        .verify("My neighbor plays loud music every night")
        .await
        .unwrap();

    assert_eq!(
        decision,
        Decision::OutOfScope {
            confidence: 0.12,
            message: intake::OUT_OF_SCOPE_MESSAGE.to_string(),
        }
    );
    assert_eq!(decision.department(), None);
    // Only the department classification ran.
    assert_eq!(handle.call_count(), 1);
}

#[tokio::test]
async fn test_urgent_water_complaint_filed_with_high_priority() {
    let taxonomy = Taxonomy::civic_default();
    let classifier =
        scripted_classifier(&taxonomy, "Water Supply Department", 0.88, "Polluted Water");
    let intake = Intake::new(MemoryStore::new(), classifier);

    let submission = intake
        .submit(
            "user-3",
            "Polluted drinking water, this is critical for the whole neighborhood",
        )
        .await
        .unwrap();

    let Submission::Filed { code, decision } = submission else {
        panic!("expected a filed complaint");
    };
    assert!(decision.is_urgent());

    let stored = intake.store().get_complaint(&code).await.unwrap().unwrap();
    assert_eq!(stored.category, "Water Supply Department");
    assert_eq!(stored.priority, Priority::High);
    assert_eq!(stored.user_id, "user-3");
}

#[tokio::test]
async fn test_keyword_overlap_merges_into_earlier_complaint() {
    let taxonomy = Taxonomy::civic_default();
    let classifier =
        scripted_classifier(&taxonomy, "Water Supply Department", 0.8, "Water Leakage");
    // Leakage is image-required; use a non-gated sub-category instead.
    let classifier = {
        let subs: Vec<&str> = taxonomy
            .sub_categories("Water Supply Department")
            .unwrap()
            .iter()
            .map(String::as_str)
            .collect();
        classifier.with_top_response(&subs, "No Water", 0.6)
    };
    let intake = Intake::new(MemoryStore::new(), classifier);

    let first = intake
        .submit("user-1", "water leak from a burst pipe running down the street")
        .await
        .unwrap();
    let code = first.code().expect("first complaint filed").to_string();

    // Summary intersects in {water, leak, pipe}: merged, no new record.
    let second = intake
        .submit("user-2", "water leak near the main pipe on the road")
        .await
        .unwrap();
    assert_eq!(second, Submission::Merged { code: code.clone() });

    let stored = intake.store().get_complaint(&code).await.unwrap().unwrap();
    assert!(stored.text.contains("burst pipe"));
    assert!(stored.text.contains("on the road"));
    assert_eq!(intake.store().count_complaints().await.unwrap(), 1);
}

#[tokio::test]
async fn test_low_overlap_files_a_second_complaint() {
    let taxonomy = Taxonomy::civic_default();
    let classifier =
        scripted_classifier(&taxonomy, "Electricity Department", 0.8, "Power Outage");
    let intake = Intake::new(MemoryStore::new(), classifier);

    intake
        .submit("user-1", "power outage in the northern district since dawn")
        .await
        .unwrap();
    let second = intake
        .submit("user-2", "streetlight flickering near the school playground")
        .await
        .unwrap();

    assert!(matches!(second, Submission::Filed { .. }));
    assert_eq!(intake.store().count_complaints().await.unwrap(), 2);
}

#[tokio::test]
async fn test_check_duplicate_primitive_overlap_threshold() {
    let taxonomy = Taxonomy::civic_default();
    let classifier = scripted_classifier(&taxonomy, "Water Supply Department", 0.8, "No Water");
    let intake = Intake::new(MemoryStore::new(), classifier);

    let first = intake
        .submit("user-1", "water leak from the pipe across the street")
        .await
        .unwrap();
    let code = first.code().unwrap();

    // {water, leak, pipe} intersection of size 3 -> duplicate.
    let found = intake
        .check_duplicate("water leak under the pipe by the road")
        .await
        .unwrap();
    assert_eq!(found.as_deref(), Some(code));

    // Intersection below 3 -> none.
    let not_found = intake
        .check_duplicate("garbage truck skipped our block again")
        .await
        .unwrap();
    assert_eq!(not_found, None);
}

#[tokio::test]
async fn test_empty_text_is_a_validation_error() {
    let intake = Intake::new(MemoryStore::new(), MockClassifier::new());

    assert!(matches!(
        intake.verify("").await.unwrap_err(),
        IntakeError::EmptyComplaint
    ));
    assert!(matches!(
        intake.submit("user-1", "   \n").await.unwrap_err(),
        IntakeError::EmptyComplaint
    ));
}

#[tokio::test]
async fn test_classifier_outage_is_distinguishable_from_out_of_scope() {
    let intake = Intake::new(MemoryStore::new(), MockClassifier::new().with_unavailable());

    let err = intake.verify("no water since monday").await.unwrap_err();
    assert!(matches!(err, IntakeError::ClassifierUnavailable(_)));
}

#[tokio::test]
async fn test_stricter_deployment_threshold() {
    let taxonomy = Taxonomy::civic_default();
    let classifier = scripted_classifier(&taxonomy, "Education", 0.45, "Teacher Misconduct");
    let intake = Intake::new(MemoryStore::new(), classifier)
        .with_config(IntakeConfig::new().with_confidence_threshold(0.6));

    let decision = intake
        .verify("problems with a teacher at the local school")
        .await
        .unwrap();
    assert_eq!(decision.status(), "out_of_scope");
    assert_eq!(decision.confidence(), Some(0.45));
}
