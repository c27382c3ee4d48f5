//! Citizen Complaint Intake Library
//!
//! The decision engine for a complaint intake pipeline: takes raw
//! complaint text and produces a routing decision (department,
//! sub-category, urgency, image requirement, acceptance) and merges
//! near-duplicate complaints so the record does not fragment.
//!
//! # Design Philosophy
//!
//! - Pluggable classification: the inference engine sits behind a
//!   narrow capability trait and is swappable/mockable in tests
//! - Two explicit classification steps (department, then sub-category)
//!   so the low-confidence short-circuit stays independently testable
//! - Closed decision sum type: each outcome carries only its own fields
//! - Cheap, explainable duplicate detection (keyword-set overlap), not
//!   semantic similarity
//! - Library handles decisions, the application handles transport,
//!   identity, and persistence
//!
//! # Usage
//!
//! ```rust,ignore
//! use intake::{Intake, MemoryStore};
//! use intake::testing::MockClassifier;
//!
//! let intake = Intake::new(MemoryStore::new(), MockClassifier::new());
//!
//! // Decision only
//! let decision = intake.verify("No water on Elm Street since Monday").await?;
//!
//! // Full flow: dedup, verify, persist accepted complaints
//! let submission = intake.submit("user-42", "No water on Elm Street since Monday").await?;
//! ```
//!
//! # Modules
//!
//! - [`traits`] - Core trait abstractions (TextClassifier, ComplaintStore)
//! - [`types`] - Domain types (Complaint, Decision, Taxonomy, config)
//! - [`pipeline`] - Verification workflow and duplicate-merge resolver
//! - [`keywords`] - Keyword extraction (similarity fingerprints)
//! - [`stores`] - Storage implementations (MemoryStore)
//! - [`testing`] - Mock classifier for tests

pub mod error;
pub mod keywords;
pub mod pipeline;
pub mod stores;
pub mod testing;
pub mod traits;
pub mod types;

#[cfg(feature = "inference")]
pub mod classifiers;

// Re-export core types at crate root
pub use error::{IntakeError, Result};
pub use traits::{
    classifier::{LabelScore, TextClassifier},
    store::ComplaintStore,
};
pub use types::{
    complaint::{Complaint, ComplaintStatus, Priority},
    config::IntakeConfig,
    decision::Decision,
    taxonomy::Taxonomy,
};

// Re-export the pipeline entry points
pub use pipeline::{
    find_duplicate, is_urgent, verify_complaint, Intake, Submission, ACCEPTED_MESSAGE,
    OUT_OF_SCOPE_MESSAGE, REQUIRES_IMAGE_MESSAGE,
};

// Re-export keyword extraction
pub use keywords::{summary_overlap, KeywordExtractor};

// Re-export stores
pub use stores::MemoryStore;

#[cfg(feature = "inference")]
pub use classifiers::HfZeroShot;

// Re-export testing utilities
pub use testing::MockClassifier;
