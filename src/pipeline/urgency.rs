//! Urgency detection - a pure predicate over the urgency vocabulary.
//!
//! Any single case-insensitive substring match triggers true; there is
//! no ranking. The workflow only evaluates urgency on the accepted
//! path, since out-of-scope and image-required outcomes short-circuit
//! first.

/// Whether `text` contains any of the (already case-folded) urgency
/// terms as a case-insensitive substring.
pub fn is_urgent(text: &str, urgency_terms: &[String]) -> bool {
    let text = text.to_lowercase();
    urgency_terms.iter().any(|term| text.contains(term.as_str()))
}
