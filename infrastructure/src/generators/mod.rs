//! Generation backends
//!
//! Concrete [`Generator`](debate_domain::Generator) implementations:
//!
//! | Generator | Source of text |
//! |-----------|----------------|
//! | [`CommandGenerator`] | External program (stdin → stdout) |
//! | [`ScriptedGenerator`] | Fixed responses, cycling |
//!
//! The placeholder stub lives in the domain crate.

pub mod command;
pub mod scripted;

pub use command::CommandGenerator;
pub use scripted::ScriptedGenerator;
