//! Duplicate-merge resolution.
//!
//! A cheap, explainable similarity proxy: compare keyword summaries as
//! sets and merge when they share enough terms. Deliberately not
//! semantic similarity - it is predictable, needs no extra model, and
//! its precision tradeoff is accepted (two unrelated complaints sharing
//! three common non-stop-word terms will merge).

use tracing::debug;

use crate::keywords::summary_overlap;
use crate::types::complaint::Complaint;

/// Find an existing complaint the new summary should merge into.
///
/// Returns the FIRST complaint (in the iteration order of `existing`)
/// whose keyword summary intersects `summary` in at least `min_overlap`
/// terms. No ranking by intersection size is performed, so the result
/// is reproducible exactly when the caller's iteration order is stable.
pub fn find_duplicate<'a>(
    summary: &[String],
    existing: impl IntoIterator<Item = &'a Complaint>,
    min_overlap: usize,
) -> Option<&'a Complaint> {
    if summary.is_empty() {
        return None;
    }

    for complaint in existing {
        let overlap = summary_overlap(summary, &complaint.summary);
        if overlap >= min_overlap {
            debug!(
                code = %complaint.code,
                overlap,
                min_overlap,
                "duplicate complaint detected"
            );
            return Some(complaint);
        }
    }
    None
}
