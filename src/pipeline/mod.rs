//! Complaint decision pipeline - the core of the library.
//!
//! The pipeline orchestrates:
//! - Verification (department and sub-category classification,
//!   confidence gating, image-evidence policy, urgency)
//! - Duplicate-merge resolution (keyword-summary overlap)
//! - The high-level submit flow (dedup, verify, persist)

pub mod dedup;
pub mod intake;
pub mod urgency;
pub mod verify;

pub use dedup::find_duplicate;
pub use intake::{Intake, Submission};
pub use urgency::is_urgent;
pub use verify::{
    verify_complaint, ACCEPTED_MESSAGE, OUT_OF_SCOPE_MESSAGE, REQUIRES_IMAGE_MESSAGE,
};
