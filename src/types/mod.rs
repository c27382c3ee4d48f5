//! Domain types for the intake library.

pub mod complaint;
pub mod config;
pub mod decision;
pub mod taxonomy;
