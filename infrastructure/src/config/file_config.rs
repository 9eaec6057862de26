//! Raw TOML configuration data types
//!
//! These structs represent the exact structure of the TOML config file.
//! They are deserialized directly and use domain types where appropriate.
//!
//! ```toml
//! [debate]
//! topic = "Remote work beats office work"
//! rounds = 2
//!
//! [output]
//! format = "verdict"
//!
//! [[participants]]
//! name = "pro_agent"
//! role = "pro"
//! generator = { kind = "command", program = "llm", args = ["-m", "mini"] }
//!
//! [[participants]]
//! name = "con_agent"
//! role = "con"
//!
//! [[participants]]
//! name = "judge"
//! role = "judge"
//! generator = { kind = "scripted", responses = ["pro_agent\nStronger case"] }
//! ```

use debate_application::{DEFAULT_ROUNDS, DebateParams};
use debate_domain::{OutputFormat, Role};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use thiserror::Error;

/// Configuration validation errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigValidationError {
    #[error("rounds cannot be 0")]
    InvalidRounds,

    #[error("participant name cannot be empty")]
    EmptyParticipantName,

    #[error("duplicate participant name: {0}")]
    DuplicateParticipant(String),

    #[error("at least one pro or con participant is required")]
    NoArguers,

    #[error("at least one judge is required")]
    NoJudges,

    #[error("command generator for '{0}' has no program")]
    EmptyProgram(String),

    #[error("scripted generator for '{0}' has no responses")]
    EmptyScript(String),
}

/// Raw debate configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileDebateConfig {
    /// Topic used when none is given on the command line
    pub topic: Option<String>,
    /// Number of argument rounds
    pub rounds: usize,
}

impl Default for FileDebateConfig {
    fn default() -> Self {
        Self {
            topic: None,
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl FileDebateConfig {
    /// Convert to application run parameters
    pub fn to_params(&self) -> DebateParams {
        DebateParams::default().with_rounds(self.rounds)
    }
}

/// Raw output configuration from TOML
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FileOutputConfig {
    /// Output format (uses domain type)
    pub format: Option<OutputFormat>,
    /// Enable colored terminal output
    pub color: bool,
}

impl Default for FileOutputConfig {
    fn default() -> Self {
        Self {
            format: None,
            color: true,
        }
    }
}

/// Generation backend for one participant
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum FileGeneratorConfig {
    /// Constant placeholder text (no real reasoning)
    #[default]
    Placeholder,
    /// External program: prompt on stdin, response on stdout
    Command {
        program: String,
        #[serde(default)]
        args: Vec<String>,
    },
    /// Canned responses replayed in order, cycling
    Scripted { responses: Vec<String> },
}

/// Raw participant entry from TOML (`[[participants]]`)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileParticipantConfig {
    /// Display name, unique within the debate
    pub name: String,
    /// pro, con or judge
    pub role: Role,
    /// Generation backend (placeholder when omitted)
    #[serde(default)]
    pub generator: FileGeneratorConfig,
}

impl FileParticipantConfig {
    pub fn new(name: impl Into<String>, role: Role) -> Self {
        Self {
            name: name.into(),
            role,
            generator: FileGeneratorConfig::Placeholder,
        }
    }

    pub fn with_generator(mut self, generator: FileGeneratorConfig) -> Self {
        self.generator = generator;
        self
    }
}

/// Complete configuration file structure
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct FileConfig {
    /// Debate settings
    pub debate: FileDebateConfig,
    /// Output settings
    pub output: FileOutputConfig,
    /// Participants in configuration order
    pub participants: Vec<FileParticipantConfig>,
}

impl FileConfig {
    /// Validate the configuration
    pub fn validate(&self) -> Result<(), ConfigValidationError> {
        if self.debate.rounds == 0 {
            return Err(ConfigValidationError::InvalidRounds);
        }

        let mut seen = HashSet::new();
        for participant in &self.participants {
            if participant.name.trim().is_empty() {
                return Err(ConfigValidationError::EmptyParticipantName);
            }
            if !seen.insert(participant.name.as_str()) {
                return Err(ConfigValidationError::DuplicateParticipant(
                    participant.name.clone(),
                ));
            }
            match &participant.generator {
                FileGeneratorConfig::Command { program, .. } if program.trim().is_empty() => {
                    return Err(ConfigValidationError::EmptyProgram(participant.name.clone()));
                }
                FileGeneratorConfig::Scripted { responses } if responses.is_empty() => {
                    return Err(ConfigValidationError::EmptyScript(participant.name.clone()));
                }
                _ => {}
            }
        }

        // An empty list falls back to the built-in roster
        if !self.participants.is_empty() {
            if !self.participants.iter().any(|p| !p.role.is_decider()) {
                return Err(ConfigValidationError::NoArguers);
            }
            if !self.participants.iter().any(|p| p.role.is_decider()) {
                return Err(ConfigValidationError::NoJudges);
            }
        }

        Ok(())
    }

    /// Configured participants, or the built-in placeholder roster when none are set
    pub fn effective_participants(&self) -> Vec<FileParticipantConfig> {
        if self.participants.is_empty() {
            Self::default_participants()
        } else {
            self.participants.clone()
        }
    }

    /// `pro_agent`, `con_agent` and `judge`, all on the placeholder generator
    pub fn default_participants() -> Vec<FileParticipantConfig> {
        vec![
            FileParticipantConfig::new("pro_agent", Role::Pro),
            FileParticipantConfig::new("con_agent", Role::Con),
            FileParticipantConfig::new("judge", Role::Judge),
        ]
    }
}
