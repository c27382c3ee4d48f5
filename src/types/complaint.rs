//! Complaint records and their status lifecycle.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use uuid::Uuid;

use crate::error::{IntakeError, Result};

/// Length of generated complaint codes.
const CODE_LEN: usize = 6;

/// Queue priority for an accepted complaint.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Normal,
    High,
}

impl Priority {
    /// High when the accepted decision carried an urgency flag.
    pub fn from_urgency(is_urgent: bool) -> Self {
        if is_urgent {
            Self::High
        } else {
            Self::Normal
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::High => "high",
        }
    }
}

/// Lifecycle state of a persisted complaint.
///
/// Transitions are monotonic: `Pending` may move to any later state,
/// `Accepted` may only move on to `Routed`, and `Rejected`/`Routed` are
/// terminal. There is no reopening.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComplaintStatus {
    Pending,
    Accepted,
    Rejected,
    Routed,
}

impl ComplaintStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Accepted => "accepted",
            Self::Rejected => "rejected",
            Self::Routed => "routed",
        }
    }

    /// Whether no further transitions are allowed from this state.
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Rejected | Self::Routed)
    }

    /// Whether the lifecycle permits moving from `self` to `next`.
    pub fn can_transition_to(&self, next: ComplaintStatus) -> bool {
        match self {
            Self::Pending => matches!(next, Self::Accepted | Self::Rejected | Self::Routed),
            Self::Accepted => matches!(next, Self::Routed),
            Self::Rejected | Self::Routed => false,
        }
    }
}

/// A persisted citizen complaint.
///
/// Created once when the verification workflow accepts a submission.
/// Merged duplicates never create a new record: their text is folded
/// into the existing one via [`Complaint::merge_text`].
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Complaint {
    /// Short unique complaint code, e.g. `"X7K2QD"`.
    pub code: String,

    /// Owning user.
    pub user_id: String,

    /// Raw complaint text. Merged texts are appended.
    pub text: String,

    /// Keyword summary - the similarity fingerprint. Order carries no
    /// meaning beyond the extraction's top-N truncation; consumers
    /// treat it as a set.
    pub summary: Vec<String>,

    /// Assigned department. Always one of the taxonomy's departments.
    pub category: String,

    /// Assigned sub-category, when one was classified.
    pub sub_category: Option<String>,

    /// Queue priority.
    pub priority: Priority,

    /// Lifecycle status.
    pub status: ComplaintStatus,

    /// Hash of the normalized text, for the exact-duplicate fast path.
    pub content_hash: String,

    /// When the complaint was recorded.
    pub created_at: DateTime<Utc>,
}

impl Complaint {
    /// Create a new pending complaint with a generated code.
    pub fn new(
        user_id: impl Into<String>,
        text: impl Into<String>,
        category: impl Into<String>,
    ) -> Self {
        let text = text.into();
        Self {
            code: generate_code(),
            user_id: user_id.into(),
            content_hash: content_hash(&text),
            text,
            summary: Vec::new(),
            category: category.into(),
            sub_category: None,
            priority: Priority::Normal,
            status: ComplaintStatus::Pending,
            created_at: Utc::now(),
        }
    }

    /// Set the keyword summary.
    pub fn with_summary(mut self, summary: Vec<String>) -> Self {
        self.summary = summary;
        self
    }

    /// Set the sub-category.
    pub fn with_sub_category(mut self, sub_category: impl Into<String>) -> Self {
        self.sub_category = Some(sub_category.into());
        self
    }

    /// Set the priority.
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    /// Set the status (construction only; use [`advance`] afterwards).
    ///
    /// [`advance`]: Complaint::advance
    pub fn with_status(mut self, status: ComplaintStatus) -> Self {
        self.status = status;
        self
    }

    /// Move the complaint to a new lifecycle state, enforcing
    /// monotonicity.
    pub fn advance(&mut self, next: ComplaintStatus) -> Result<()> {
        if !self.status.can_transition_to(next) {
            return Err(IntakeError::InvalidTransition {
                from: self.status.as_str().to_string(),
                to: next.as_str().to_string(),
            });
        }
        self.status = next;
        Ok(())
    }

    /// Fold a duplicate submission's text into this record.
    ///
    /// The record keeps its code, summary, and classification; only the
    /// text grows.
    pub fn merge_text(&mut self, text: &str) {
        self.text.push('\n');
        self.text.push_str(text);
    }
}

/// Generate a short uppercase-alphanumeric complaint code.
pub fn generate_code() -> String {
    const ALPHABET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ0123456789";
    Uuid::new_v4()
        .as_bytes()
        .iter()
        .take(CODE_LEN)
        .map(|b| ALPHABET[*b as usize % ALPHABET.len()] as char)
        .collect()
}

/// Hash of whitespace-normalized, case-folded text.
///
/// Used to detect exact resubmissions without comparing full texts.
pub fn content_hash(text: &str) -> String {
    let normalized = text.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    let mut hasher = Sha256::new();
    hasher.update(normalized.as_bytes());
    format!("{:x}", hasher.finalize())
}
