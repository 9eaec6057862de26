//! Turn record

use super::role::Role;
use serde::{Deserialize, Serialize};

/// A single contribution by one arguer in one round
///
/// # Example
///
/// ```
/// use debate_domain::debate::{Role, Turn};
///
/// let turn = Turn::new("Bob", Role::Con, "I disagree", 1);
/// assert_eq!(turn.transcript_line(), "[Bob] I disagree");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Turn {
    /// Name of the participant who produced this turn
    pub author: String,
    /// Role of the author
    pub role: Role,
    /// Generated text (may be empty)
    pub content: String,
    /// Round in which the turn was produced (1-indexed)
    pub round: usize,
}

impl Turn {
    pub fn new(
        author: impl Into<String>,
        role: Role,
        content: impl Into<String>,
        round: usize,
    ) -> Self {
        Self {
            author: author.into(),
            role,
            content: content.into(),
            round,
        }
    }

    /// Render this turn the way it appears in a prompt's history section
    pub fn transcript_line(&self) -> String {
        format!("[{}] {}", self.author, self.content)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_turn_creation() {
        let turn = Turn::new("Alice", Role::Pro, "I agree", 1);
        assert_eq!(turn.author, "Alice");
        assert_eq!(turn.role, Role::Pro);
        assert_eq!(turn.content, "I agree");
        assert_eq!(turn.round, 1);
    }

    #[test]
    fn test_transcript_line_with_empty_content() {
        let turn = Turn::new("Alice", Role::Pro, "", 2);
        assert_eq!(turn.transcript_line(), "[Alice] ");
    }
}
