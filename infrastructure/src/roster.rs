//! Participant factory
//!
//! Turns `[[participants]]` entries into domain [`Participant`]s with their
//! generators attached, split into arguers and judges.

use crate::config::{FileGeneratorConfig, FileParticipantConfig};
use crate::generators::{CommandGenerator, ScriptedGenerator};
use debate_domain::{GenerationError, Generator, Participant, PlaceholderGenerator};
use tracing::debug;

/// Participants ready to debate, in configuration order
#[derive(Debug, Default)]
pub struct Roster {
    /// pro and con participants
    pub arguers: Vec<Participant>,
    /// judge participants
    pub judges: Vec<Participant>,
}

impl Roster {
    pub fn len(&self) -> usize {
        self.arguers.len() + self.judges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Builds participants from configuration
pub struct ParticipantFactory;

impl ParticipantFactory {
    /// Build every participant, keeping relative order within arguers and judges
    pub fn build_roster(configs: &[FileParticipantConfig]) -> Result<Roster, GenerationError> {
        let mut roster = Roster::default();
        for config in configs {
            let participant = Self::build(config)?;
            if config.role.is_decider() {
                roster.judges.push(participant);
            } else {
                roster.arguers.push(participant);
            }
        }
        debug!(
            "Built roster with {} arguers and {} judges",
            roster.arguers.len(),
            roster.judges.len()
        );
        Ok(roster)
    }

    /// Build a single participant
    pub fn build(config: &FileParticipantConfig) -> Result<Participant, GenerationError> {
        let generator = Self::build_generator(&config.generator)?;
        Ok(Participant::new(config.name.clone(), config.role).with_generator(generator))
    }

    /// Build the generator described by `config`
    pub fn build_generator(
        config: &FileGeneratorConfig,
    ) -> Result<Box<dyn Generator>, GenerationError> {
        Ok(match config {
            FileGeneratorConfig::Placeholder => Box::new(PlaceholderGenerator),
            FileGeneratorConfig::Command { program, args } => {
                Box::new(CommandGenerator::new(program.clone(), args.clone())?)
            }
            FileGeneratorConfig::Scripted { responses } => {
                Box::new(ScriptedGenerator::new(responses.iter().cloned()))
            }
        })
    }
}
