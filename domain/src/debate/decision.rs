//! Decision record

use super::parsing::parse_decision_response;
use serde::{Deserialize, Serialize};

/// A judge's final pick
///
/// # Example
///
/// ```
/// use debate_domain::debate::Decision;
///
/// let decision = Decision::from_response("judge", "pro_agent\nStronger case");
/// assert_eq!(decision.winner, "pro_agent");
/// assert_eq!(decision.justification, "Stronger case");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decision {
    /// Name of the judge who decided
    pub decider: String,
    /// Name of the chosen winner (empty when undetermined)
    pub winner: String,
    /// Reasoning given by the judge (may be empty)
    pub justification: String,
}

impl Decision {
    pub fn new(
        decider: impl Into<String>,
        winner: impl Into<String>,
        justification: impl Into<String>,
    ) -> Self {
        Self {
            decider: decider.into(),
            winner: winner.into(),
            justification: justification.into(),
        }
    }

    /// Build a decision from a judge's raw response text
    pub fn from_response(decider: impl Into<String>, response: &str) -> Self {
        let (winner, justification) = parse_decision_response(response);
        Self::new(decider, winner, justification)
    }

    /// Whether the judge named anyone at all
    pub fn is_undetermined(&self) -> bool {
        self.winner.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decision_creation() {
        let decision = Decision::new("Judge1", "Alice", "Better evidence");
        assert_eq!(decision.decider, "Judge1");
        assert_eq!(decision.winner, "Alice");
        assert_eq!(decision.justification, "Better evidence");
        assert!(!decision.is_undetermined());
    }

    #[test]
    fn test_from_blank_response_is_undetermined() {
        let decision = Decision::from_response("Judge1", "   ");
        assert_eq!(decision.decider, "Judge1");
        assert!(decision.is_undetermined());
        assert!(decision.justification.is_empty());
    }
}
