//! Verification decision - the outcome of processing one complaint.
//!
//! A closed sum type: each outcome carries only the fields that exist on
//! that path, so an `out_of_scope` decision has no department to
//! accidentally read and only `accepted` carries an urgency flag.

use serde::{Deserialize, Serialize};

/// The decision produced by the verification workflow for a single
/// complaint submission.
///
/// Produced fresh per submission and immutable once returned. The
/// workflow only ever produces [`OutOfScope`], [`RequiresImage`] and
/// [`Accepted`]; [`Pending`] and [`Rejected`] are reserved outcome
/// states kept in the vocabulary for forward compatibility.
///
/// [`OutOfScope`]: Decision::OutOfScope
/// [`RequiresImage`]: Decision::RequiresImage
/// [`Accepted`]: Decision::Accepted
/// [`Pending`]: Decision::Pending
/// [`Rejected`]: Decision::Rejected
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum Decision {
    /// Reserved: submission received but no decision computed yet.
    Pending,

    /// Reserved: explicitly declined by a reviewer or policy.
    Rejected {
        /// Top classification confidence, if any was computed.
        confidence: f32,
        /// Human-readable explanation.
        message: String,
    },

    /// Top department confidence fell below the configured threshold.
    ///
    /// A business outcome, not an error. Carries no department or
    /// sub-category and urgency is never evaluated on this path.
    OutOfScope {
        /// The top department score that failed the threshold.
        confidence: f32,
        /// Human-readable explanation.
        message: String,
    },

    /// The (department, sub-category) pair mandates photographic
    /// evidence before the complaint can be processed.
    ///
    /// Urgency is NOT evaluated on this path: evidentiary gating is a
    /// hard precondition, urgency only affects queue priority once a
    /// complaint is actionable.
    RequiresImage {
        department: String,
        sub_category: String,
        confidence: f32,
        message: String,
    },

    /// Complaint accepted for routing.
    Accepted {
        department: String,
        sub_category: String,
        confidence: f32,
        is_urgent: bool,
        message: String,
    },
}

impl Decision {
    /// Outcome status name, matching the serialized `status` tag.
    pub fn status(&self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Rejected { .. } => "rejected",
            Self::OutOfScope { .. } => "out_of_scope",
            Self::RequiresImage { .. } => "requires_image",
            Self::Accepted { .. } => "accepted",
        }
    }

    /// Top classification confidence, if one was computed.
    pub fn confidence(&self) -> Option<f32> {
        match self {
            Self::Pending => None,
            Self::Rejected { confidence, .. }
            | Self::OutOfScope { confidence, .. }
            | Self::RequiresImage { confidence, .. }
            | Self::Accepted { confidence, .. } => Some(*confidence),
        }
    }

    /// Assigned department, when the classification was accepted.
    pub fn department(&self) -> Option<&str> {
        match self {
            Self::RequiresImage { department, .. } | Self::Accepted { department, .. } => {
                Some(department)
            }
            _ => None,
        }
    }

    /// Assigned sub-category, when the classification was accepted.
    pub fn sub_category(&self) -> Option<&str> {
        match self {
            Self::RequiresImage { sub_category, .. } | Self::Accepted { sub_category, .. } => {
                Some(sub_category)
            }
            _ => None,
        }
    }

    /// Human-readable message, if the outcome carries one.
    pub fn message(&self) -> Option<&str> {
        match self {
            Self::Pending => None,
            Self::Rejected { message, .. }
            | Self::OutOfScope { message, .. }
            | Self::RequiresImage { message, .. }
            | Self::Accepted { message, .. } => Some(message),
        }
    }

    /// Whether this outcome demands photographic evidence.
    pub fn requires_image(&self) -> bool {
        matches!(self, Self::RequiresImage { .. })
    }

    /// Urgency flag. Only accepted complaints evaluate urgency, so this
    /// is `false` on every other path.
    pub fn is_urgent(&self) -> bool {
        matches!(self, Self::Accepted { is_urgent: true, .. })
    }

    /// Whether the workflow is done with this submission.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Pending)
    }
}
