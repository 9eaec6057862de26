//! Output formatter trait

use debate_domain::Outcome;

/// Trait for formatting debate outcomes
pub trait OutputFormatter {
    /// Format the complete transcript
    fn format(&self, outcome: &Outcome) -> String;

    /// Format as JSON
    fn format_json(&self, outcome: &Outcome) -> String;

    /// Format the verdict only (concise output)
    fn format_verdict(&self, outcome: &Outcome) -> String;
}
