//! Infrastructure layer for debate-council
//!
//! This crate contains adapters for the outside world: configuration file
//! loading, concrete generation backends, and the factory that assembles
//! configured participants.

pub mod config;
pub mod generators;
pub mod roster;

// Re-export commonly used types
pub use config::{
    ConfigError, ConfigLoader, ConfigValidationError, FileConfig, FileDebateConfig,
    FileGeneratorConfig, FileOutputConfig, FileParticipantConfig,
};
pub use generators::{CommandGenerator, ScriptedGenerator};
pub use roster::{ParticipantFactory, Roster};
