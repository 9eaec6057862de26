//! Application-level configuration.
//!
//! - [`DebateParams`]: run control (round count)

pub mod debate_params;

pub use debate_params::{DEFAULT_ROUNDS, DebateParams};
