//! Output format value object

use serde::{Deserialize, Serialize};

/// Output format for debate outcomes
///
/// This is a domain concept representing how the output should be formatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Full transcript: every round, every decision, the verdict (default)
    #[default]
    Full,
    /// Only the verdict and the judges' decisions
    Verdict,
    /// JSON output
    Json,
}
