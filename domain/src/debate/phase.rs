//! Phases of a debate run

use serde::{Deserialize, Serialize};

/// Phase of a debate run
///
/// A run moves strictly forward: `Round(1)` through `Round(n)`, then
/// `Voting`. There is no branching and no going back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DebatePhase {
    /// Arguers take turns (1-indexed round number)
    Round(usize),
    /// Judges cast their decisions
    Voting,
}

impl DebatePhase {
    pub fn as_str(&self) -> &'static str {
        match self {
            DebatePhase::Round(_) => "round",
            DebatePhase::Voting => "voting",
        }
    }

    pub fn display_name(&self) -> String {
        match self {
            DebatePhase::Round(n) => format!("Round {}", n),
            DebatePhase::Voting => "Voting".to_string(),
        }
    }

    /// The round number, if this is an argument round
    pub fn round(&self) -> Option<usize> {
        match self {
            DebatePhase::Round(n) => Some(*n),
            DebatePhase::Voting => None,
        }
    }
}

impl std::fmt::Display for DebatePhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_display() {
        assert_eq!(DebatePhase::Round(2).to_string(), "Round 2");
        assert_eq!(DebatePhase::Voting.to_string(), "Voting");
    }

    #[test]
    fn test_phase_round_accessor() {
        assert_eq!(DebatePhase::Round(3).round(), Some(3));
        assert_eq!(DebatePhase::Voting.round(), None);
        assert_eq!(DebatePhase::Voting.as_str(), "voting");
    }
}
