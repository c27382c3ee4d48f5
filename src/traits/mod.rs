//! Core trait abstractions (TextClassifier, ComplaintStore).

pub mod classifier;
pub mod store;
