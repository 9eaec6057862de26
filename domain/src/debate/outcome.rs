//! Outcome of a completed debate

use super::decision::Decision;
use super::turn::Turn;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Full record of a debate run
///
/// Built incrementally by the coordinator: rounds are pushed as they finish,
/// then decisions, then [`Outcome::conclude`] derives `winner` and
/// `consensus` from the decisions.
///
/// # Example
///
/// ```
/// use debate_domain::debate::{Decision, Outcome, Role, Turn};
///
/// let mut outcome = Outcome::new("AI is beneficial");
/// outcome.push_round(vec![
///     Turn::new("pro_agent", Role::Pro, "Yes", 1),
///     Turn::new("con_agent", Role::Con, "No", 1),
/// ]);
/// outcome.push_decision(Decision::new("judge", "pro_agent", "Stronger case"));
/// outcome.conclude();
///
/// assert_eq!(outcome.winner, "pro_agent");
/// assert!(outcome.consensus);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Outcome {
    /// The debated topic
    pub topic: String,
    /// Turns grouped by round, in round order
    pub rounds: Vec<Vec<Turn>>,
    /// Decisions in judge order
    pub decisions: Vec<Decision>,
    /// Winner named by the first judge
    pub winner: String,
    /// Whether every judge named the same winner
    pub consensus: bool,
}

impl Outcome {
    pub fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Default::default()
        }
    }

    /// Append a finished round
    pub fn push_round(&mut self, turns: Vec<Turn>) {
        self.rounds.push(turns);
    }

    /// Append a judge's decision
    pub fn push_decision(&mut self, decision: Decision) {
        self.decisions.push(decision);
    }

    /// Derive `winner` and `consensus` from the recorded decisions.
    ///
    /// The winner is the first decision's pick, not a majority. Consensus
    /// holds when the decisions contain exactly one distinct winner string,
    /// so a single judge always yields consensus, even with an empty pick.
    pub fn conclude(&mut self) {
        self.winner = self
            .decisions
            .first()
            .map(|d| d.winner.clone())
            .unwrap_or_default();

        let distinct: HashSet<&str> = self.decisions.iter().map(|d| d.winner.as_str()).collect();
        self.consensus = distinct.len() == 1;
    }

    /// Number of recorded rounds
    pub fn round_count(&self) -> usize {
        self.rounds.len()
    }

    /// Total number of turns across all rounds
    pub fn total_turns(&self) -> usize {
        self.rounds.iter().map(Vec::len).sum()
    }

    /// All turns in the order they were produced
    pub fn turns(&self) -> impl Iterator<Item = &Turn> {
        self.rounds.iter().flatten()
    }

    /// Votes per named winner, ordered by first appearance
    pub fn tally(&self) -> Vec<(String, usize)> {
        let mut tally: Vec<(String, usize)> = Vec::new();
        for decision in &self.decisions {
            match tally.iter_mut().find(|(name, _)| *name == decision.winner) {
                Some((_, count)) => *count += 1,
                None => tally.push((decision.winner.clone(), 1)),
            }
        }
        tally
    }

    /// Judges disagreed on the winner
    pub fn is_split(&self) -> bool {
        !self.consensus && self.decisions.len() > 1
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::debate::role::Role;

    fn sample_round(round: usize) -> Vec<Turn> {
        vec![
            Turn::new("Alice", Role::Pro, "Pro point", round),
            Turn::new("Bob", Role::Con, "Con point", round),
        ]
    }

    #[test]
    fn test_outcome_defaults() {
        let outcome = Outcome::new("AI safety");
        assert_eq!(outcome.topic, "AI safety");
        assert!(outcome.rounds.is_empty());
        assert!(outcome.decisions.is_empty());
        assert_eq!(outcome.winner, "");
        assert!(!outcome.consensus);
    }

    #[test]
    fn test_single_judge_is_always_consensus() {
        let mut outcome = Outcome::new("Climate policy");
        outcome.push_round(sample_round(1));
        outcome.push_decision(Decision::new("Judge1", "Alice", "Stronger arguments"));
        outcome.conclude();

        assert_eq!(outcome.winner, "Alice");
        assert!(outcome.consensus);
        assert!(!outcome.is_split());
    }

    #[test]
    fn test_single_judge_with_empty_winner_is_consensus() {
        let mut outcome = Outcome::new("Climate policy");
        outcome.push_decision(Decision::new("Judge1", "", ""));
        outcome.conclude();

        assert_eq!(outcome.winner, "");
        assert!(outcome.consensus);
    }

    #[test]
    fn test_split_decision_takes_first_judge() {
        let mut outcome = Outcome::new("Climate policy");
        outcome.push_decision(Decision::new("Judge1", "Bob", ""));
        outcome.push_decision(Decision::new("Judge2", "Alice", ""));
        outcome.push_decision(Decision::new("Judge3", "Alice", ""));
        outcome.conclude();

        assert_eq!(outcome.winner, "Bob");
        assert!(!outcome.consensus);
        assert!(outcome.is_split());
        assert_eq!(
            outcome.tally(),
            vec![("Bob".to_string(), 1), ("Alice".to_string(), 2)]
        );
    }

    #[test]
    fn test_unanimous_judges() {
        let mut outcome = Outcome::new("Climate policy");
        outcome.push_decision(Decision::new("Judge1", "Alice", "a"));
        outcome.push_decision(Decision::new("Judge2", "Alice", "b"));
        outcome.conclude();

        assert!(outcome.consensus);
        assert_eq!(outcome.tally(), vec![("Alice".to_string(), 2)]);
    }

    #[test]
    fn test_no_decisions_concludes_without_consensus() {
        let mut outcome = Outcome::new("Climate policy");
        outcome.conclude();
        assert_eq!(outcome.winner, "");
        assert!(!outcome.consensus);
    }

    #[test]
    fn test_turn_counting() {
        let mut outcome = Outcome::new("Climate policy");
        outcome.push_round(sample_round(1));
        outcome.push_round(sample_round(2));

        assert_eq!(outcome.round_count(), 2);
        assert_eq!(outcome.total_turns(), 4);
        let rounds: Vec<usize> = outcome.turns().map(|t| t.round).collect();
        assert_eq!(rounds, vec![1, 1, 2, 2]);
    }

    #[test]
    fn test_outcome_json_shape() {
        let mut outcome = Outcome::new("Climate policy");
        outcome.push_round(sample_round(1));
        outcome.push_decision(Decision::new("Judge1", "Alice", "Stronger"));
        outcome.conclude();

        let value = serde_json::to_value(&outcome).unwrap();
        assert_eq!(value["topic"], "Climate policy");
        assert_eq!(value["rounds"][0][1]["author"], "Bob");
        assert_eq!(value["rounds"][0][1]["role"], "con");
        assert_eq!(value["decisions"][0]["winner"], "Alice");
        assert_eq!(value["consensus"], true);
    }
}
