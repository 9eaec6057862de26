//! Participants and their generation capability
//!
//! - [`Participant`]: identity + role + generator; produces turns and decisions
//! - [`generator::Generator`]: the text-in/text-out backend contract

pub mod entities;
pub mod generator;

pub use entities::Participant;
pub use generator::{FnGenerator, Generator, PLACEHOLDER_RESPONSE, PlaceholderGenerator, from_fn};
