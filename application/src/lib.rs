//! Application layer for debate-council
//!
//! This crate contains the debate use case, port definitions, and
//! application configuration. It depends only on the domain layer.

pub mod config;
pub mod ports;
pub mod use_cases;

// Re-export commonly used types
pub use config::{DEFAULT_ROUNDS, DebateParams};
pub use ports::progress::{DebateProgressNotifier, NoProgress};
pub use use_cases::run_debate::RunDebateUseCase;
