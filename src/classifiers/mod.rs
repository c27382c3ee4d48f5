//! Hosted classification backends.

pub mod hf;

pub use hf::HfZeroShot;
