//! Core domain concepts shared across all subdomains.
//!
//! - [`error::GenerationError`]: failures surfaced by generation backends

pub mod error;
