//! Participant entity

use super::generator::{Generator, PlaceholderGenerator};
use crate::core::error::GenerationError;
use crate::debate::{Decision, Role, Turn};
use crate::prompt::PromptTemplate;

/// A named debater or judge backed by a [`Generator`]
///
/// Holds no state between calls: every turn and decision is derived only
/// from the arguments and the generator's answer. History is borrowed as a
/// slice and never modified.
///
/// # Example
///
/// ```
/// use debate_domain::participant::{Participant, generator::from_fn};
/// use debate_domain::debate::Role;
///
/// let judge = Participant::new("judge", Role::Judge)
///     .with_generator(from_fn(|_| Ok("pro_agent\nStronger case".to_string())));
///
/// let decision = judge.produce_decision("AI is beneficial", &[]).unwrap();
/// assert_eq!(decision.winner, "pro_agent");
/// ```
pub struct Participant {
    name: String,
    role: Role,
    generator: Box<dyn Generator>,
}

impl Participant {
    /// Create a participant backed by the [`PlaceholderGenerator`]
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            generator: Box::new(PlaceholderGenerator),
        }
    }

    /// Replace the generation backend
    pub fn with_generator(mut self, generator: impl Generator + 'static) -> Self {
        self.generator = Box::new(generator);
        self
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> Role {
        self.role
    }

    /// Produce this participant's turn for `round`
    ///
    /// `history` holds every earlier turn of the run, oldest first.
    pub fn produce_turn(
        &self,
        topic: &str,
        history: &[Turn],
        round: usize,
    ) -> Result<Turn, GenerationError> {
        let prompt = PromptTemplate::turn_prompt(topic, self.role, history, round);
        let content = self.generator.generate(&prompt)?;
        Ok(Turn::new(self.name.clone(), self.role, content, round))
    }

    /// Ask this participant to name the winner of the debate so far
    pub fn produce_decision(
        &self,
        topic: &str,
        history: &[Turn],
    ) -> Result<Decision, GenerationError> {
        let prompt = PromptTemplate::decision_prompt(topic, history);
        let response = self.generator.generate(&prompt)?;
        Ok(Decision::from_response(self.name.clone(), &response))
    }
}

impl std::fmt::Debug for Participant {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Participant")
            .field("name", &self.name)
            .field("role", &self.role)
            .finish_non_exhaustive()
    }
}
