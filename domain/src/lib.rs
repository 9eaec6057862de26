//! Domain layer for debate-council
//!
//! This crate contains the core records, participants, and prompt rendering.
//! It has no dependencies on infrastructure or presentation concerns.
//!
//! # Core Concepts
//!
//! ## Participants
//!
//! A [`Participant`] has a name, a [`Role`] and a [`Generator`]. Arguers
//! (`pro` / `con`) produce [`Turn`]s; judges produce [`Decision`]s. Both
//! operations render a prompt and delegate to the generator, which is the
//! only place text actually comes from.
//!
//! ## Outcome
//!
//! An [`Outcome`] collects every round and every decision. The overall
//! winner is the first judge's pick; `consensus` means all judges named the
//! same winner.

pub mod config;
pub mod core;
pub mod debate;
pub mod participant;
pub mod prompt;

// Re-export commonly used types
pub use crate::core::error::GenerationError;
pub use config::OutputFormat;
pub use debate::{
    DebatePhase, Decision, Outcome, ParseRoleError, Role, Turn, parse_decision_response,
};
pub use participant::{
    FnGenerator, Generator, PLACEHOLDER_RESPONSE, Participant, PlaceholderGenerator, from_fn,
};
pub use prompt::PromptTemplate;
