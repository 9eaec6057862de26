//! Console output formatter for debate outcomes

use crate::output::formatter::OutputFormatter;
use colored::Colorize;
use debate_domain::{Decision, Outcome, OutputFormat};

/// Formats debate outcomes for console display
pub struct ConsoleFormatter;

impl ConsoleFormatter {
    /// Render an outcome in the requested format
    pub fn render(outcome: &Outcome, format: OutputFormat) -> String {
        match format {
            OutputFormat::Full => Self::format(outcome),
            OutputFormat::Verdict => Self::format_verdict(outcome),
            OutputFormat::Json => Self::format_json(outcome),
        }
    }

    /// Format the complete transcript
    pub fn format(outcome: &Outcome) -> String {
        let mut output = String::new();

        // Header
        output.push_str(&Self::header("Debate Transcript"));
        output.push('\n');

        // Topic
        output.push_str(&format!(
            "{} {}\n",
            "Topic:".cyan().bold(),
            outcome.topic
        ));

        // Rounds
        for (index, round) in outcome.rounds.iter().enumerate() {
            output.push_str(&Self::section_header(&format!("Round {}", index + 1)));
            for turn in round {
                output.push_str(&format!(
                    "\n{}\n{}\n",
                    format!("── {} ({}) ──", turn.author, turn.role.display_name())
                        .yellow()
                        .bold(),
                    turn.content
                ));
            }
        }

        // Decisions
        output.push_str(&Self::section_header("Decisions"));
        for decision in &outcome.decisions {
            output.push_str(&Self::decision_block(decision));
        }

        output.push('\n');
        output.push_str(&Self::verdict_line(outcome));
        output.push_str(&Self::footer());

        output
    }

    /// Format as JSON
    pub fn format_json(outcome: &Outcome) -> String {
        serde_json::to_string_pretty(outcome).unwrap_or_else(|_| "{}".to_string())
    }

    /// Format the verdict only (concise output)
    pub fn format_verdict(outcome: &Outcome) -> String {
        let mut output = String::new();

        output.push_str(&format!("{}\n\n", "=== Debate Verdict ===".cyan().bold()));
        output.push_str(&format!("{} {}\n\n", "Topic:".bold(), outcome.topic));
        output.push_str(&format!(
            "{} {} rounds, {} turns\n",
            "Debated:".dimmed(),
            outcome.round_count(),
            outcome.total_turns()
        ));

        if outcome.decisions.len() > 1 {
            let tally = outcome
                .tally()
                .into_iter()
                .map(|(name, count)| format!("{} {}", Self::winner_label(&name), count))
                .collect::<Vec<_>>()
                .join(", ");
            output.push_str(&format!("{} {}\n", "Votes:".dimmed(), tally));
        }

        output.push('\n');
        output.push_str(&Self::verdict_line(outcome));

        if let [decision] = outcome.decisions.as_slice()
            && !decision.justification.is_empty()
        {
            output.push_str(&format!("\n{}\n", decision.justification));
        }

        output
    }

    fn decision_block(decision: &Decision) -> String {
        let mut block = format!(
            "\n{} {}\n",
            format!("── {} ──", decision.decider).yellow().bold(),
            Self::winner_label(&decision.winner)
        );
        if !decision.justification.is_empty() {
            block.push_str(&Self::indent(&decision.justification, "  "));
            block.push('\n');
        }
        block
    }

    fn verdict_line(outcome: &Outcome) -> String {
        let consensus = if outcome.consensus {
            "consensus".green().bold()
        } else if outcome.decisions.is_empty() {
            "no decisions".dimmed()
        } else {
            "split decision".red().bold()
        };
        format!(
            "{} {} ({})\n",
            "Winner:".cyan().bold(),
            Self::winner_label(&outcome.winner),
            consensus
        )
    }

    fn winner_label(winner: &str) -> String {
        if winner.is_empty() {
            "(undetermined)".dimmed().to_string()
        } else {
            winner.green().bold().to_string()
        }
    }

    fn header(title: &str) -> String {
        let line = "=".repeat(60);
        format!("{}\n{:^60}\n{}", line.cyan(), title.bold(), line.cyan())
    }

    fn section_header(title: &str) -> String {
        format!("\n{}\n{}\n", title.cyan().bold(), "-".repeat(40))
    }

    fn footer() -> String {
        format!("\n{}\n", "=".repeat(60).cyan())
    }

    /// Indent a multi-line string
    pub fn indent(text: &str, prefix: &str) -> String {
        text.lines()
            .map(|line| format!("{}{}", prefix, line))
            .collect::<Vec<_>>()
            .join("\n")
    }
}

impl OutputFormatter for ConsoleFormatter {
    fn format(&self, outcome: &Outcome) -> String {
        Self::format(outcome)
    }

    fn format_json(&self, outcome: &Outcome) -> String {
        Self::format_json(outcome)
    }

    fn format_verdict(&self, outcome: &Outcome) -> String {
        Self::format_verdict(outcome)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use debate_domain::{Role, Turn};

    fn sample_outcome(decisions: Vec<Decision>) -> Outcome {
        let mut outcome = Outcome::new("Tabs beat spaces");
        outcome.push_round(vec![
            Turn::new("pro_agent", Role::Pro, "Tabs are semantic", 1),
            Turn::new("con_agent", Role::Con, "Spaces render the same everywhere", 1),
        ]);
        for decision in decisions {
            outcome.push_decision(decision);
        }
        outcome.conclude();
        outcome
    }

    #[test]
    fn test_full_transcript_lists_turns_and_decisions() {
        colored::control::set_override(false);
        let outcome = sample_outcome(vec![Decision::new("judge", "pro_agent", "Stronger case")]);

        let output = ConsoleFormatter::format(&outcome);

        assert!(output.contains("Topic: Tabs beat spaces"));
        assert!(output.contains("Round 1"));
        assert!(output.contains("── pro_agent (Advocate For) ──\nTabs are semantic"));
        assert!(output.contains("── con_agent (Advocate Against) ──"));
        assert!(output.contains("── judge ── pro_agent\n  Stronger case"));
        assert!(output.contains("Winner: pro_agent (consensus)"));
    }

    #[test]
    fn test_verdict_shows_split_and_tally() {
        colored::control::set_override(false);
        let outcome = sample_outcome(vec![
            Decision::new("judge_1", "con_agent", ""),
            Decision::new("judge_2", "pro_agent", ""),
            Decision::new("judge_3", "pro_agent", ""),
        ]);

        let output = ConsoleFormatter::format_verdict(&outcome);

        assert!(output.contains("Debated: 1 rounds, 2 turns"));
        assert!(output.contains("Votes: con_agent 1, pro_agent 2"));
        assert!(output.contains("Winner: con_agent (split decision)"));
    }

    #[test]
    fn test_verdict_with_undetermined_winner() {
        colored::control::set_override(false);
        let outcome = sample_outcome(vec![Decision::new("judge", "", "")]);

        let output = ConsoleFormatter::format_verdict(&outcome);
        assert!(output.contains("Winner: (undetermined) (consensus)"));
    }

    #[test]
    fn test_json_round_trips_outcome() {
        let outcome = sample_outcome(vec![Decision::new("judge", "pro_agent", "Stronger case")]);

        let json = ConsoleFormatter::render(&outcome, OutputFormat::Json);
        let parsed: Outcome = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, outcome);
    }

    #[test]
    fn test_indent() {
        assert_eq!(ConsoleFormatter::indent("a\nb", "> "), "> a\n> b");
    }
}
