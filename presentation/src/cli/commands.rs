//! CLI command definitions

use clap::{Parser, ValueEnum};
use std::path::PathBuf;

/// Output format for debate outcomes
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Full transcript with every round and decision
    Full,
    /// Only the verdict and the judges' decisions
    Verdict,
    /// JSON output
    Json,
}

impl From<OutputFormat> for debate_domain::OutputFormat {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Full => Self::Full,
            OutputFormat::Verdict => Self::Verdict,
            OutputFormat::Json => Self::Json,
        }
    }
}

/// CLI arguments for debate-council
#[derive(Parser, Debug)]
#[command(name = "debate-council")]
#[command(author, version, about = "Multi-agent debate - arguers exchange turns, judges pick a winner")]
#[command(long_about = r#"
debate-council runs a structured debate between configured participants.

The process has two phases:
1. Rounds: each arguer speaks once per round, in order, seeing every earlier turn
2. Voting: each judge reads the full transcript and names a winner

The overall winner is the first judge's pick. Consensus means every judge
named the same winner.

Configuration files are loaded from (in priority order):
1. --config <path>     Explicit config file (must exist)
2. DEBATE_* environment variables
3. ./debate.toml       Project-level config
4. <config dir>/debate-council/config.toml   Global config
                       (~/.config on Linux)

Without configured participants, pro_agent, con_agent and judge run on a
placeholder generator that returns fixed text.

Example:
  debate-council "Remote work beats office work"
  debate-council --rounds 2 -o verdict "Tabs are better than spaces"
  debate-council --config panel.toml -o json
"#)]
pub struct Cli {
    /// The topic to debate (falls back to `debate.topic` from config)
    pub topic: Option<String>,

    /// Number of argument rounds
    #[arg(short, long, value_name = "N", value_parser = clap::value_parser!(u16).range(1..))]
    pub rounds: Option<u16>,

    /// Output format
    #[arg(short, long, value_enum)]
    pub output: Option<OutputFormat>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress indicators
    #[arg(short, long)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,

    /// Also write logs to a file in this directory
    #[arg(long, value_name = "DIR")]
    pub log_dir: Option<PathBuf>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_topic_and_flags() {
        let cli = Cli::try_parse_from([
            "debate-council",
            "-vv",
            "--rounds",
            "2",
            "-o",
            "verdict",
            "Tabs beat spaces",
        ])
        .unwrap();

        assert_eq!(cli.topic.as_deref(), Some("Tabs beat spaces"));
        assert_eq!(cli.rounds, Some(2));
        assert_eq!(cli.output, Some(OutputFormat::Verdict));
        assert_eq!(cli.verbose, 2);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_zero_rounds_rejected() {
        assert!(Cli::try_parse_from(["debate-council", "--rounds", "0", "topic"]).is_err());
    }

    #[test]
    fn test_output_format_conversion() {
        let format: debate_domain::OutputFormat = OutputFormat::Json.into();
        assert_eq!(format, debate_domain::OutputFormat::Json);
    }
}
