//! Prompt templates for the debate flow

use crate::debate::{Role, Turn};

/// Templates for generating prompts at each stage
pub struct PromptTemplate;

impl PromptTemplate {
    /// Prompt asking an arguer for its next turn
    pub fn turn_prompt(topic: &str, role: Role, history: &[Turn], round: usize) -> String {
        format!(
            "Topic: {}\nYour role: {}\nHistory:\n{}\nRound {}: Make your argument.",
            topic,
            role.as_str(),
            Self::history(history),
            round
        )
    }

    /// Prompt asking a judge to name the winner
    pub fn decision_prompt(topic: &str, history: &[Turn]) -> String {
        format!(
            "Topic: {}\nDebate:\n{}\nWho won? First line: winner name. Second line: reason.",
            topic,
            Self::history(history)
        )
    }

    /// Render prior turns as `[author] content`, one per line
    pub fn history(history: &[Turn]) -> String {
        history
            .iter()
            .map(Turn::transcript_line)
            .collect::<Vec<_>>()
            .join("\n")
    }
}
