//! CLI entrypoint for debate-council
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, bail};
use clap::Parser;
use debate_application::{DebateProgressNotifier, NoProgress, RunDebateUseCase};
use debate_domain::OutputFormat;
use debate_infrastructure::{ConfigLoader, FileConfig, ParticipantFactory};
use debate_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::path::Path;
use tracing::info;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

const LOG_FILE_NAME: &str = "debate-council.log";

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Held until exit so buffered file logs are flushed
    let _log_guard = init_logging(cli.verbose, cli.log_dir.as_deref())?;

    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    info!("Starting debate-council");

    let config: FileConfig = if cli.no_config {
        ConfigLoader::load_defaults()
    } else {
        ConfigLoader::load(cli.config.as_ref()).context("Failed to load configuration")?
    };

    if cli.no_color || !config.output.color {
        colored::control::set_override(false);
    }

    let topic = match cli.topic.clone().or_else(|| config.debate.topic.clone()) {
        Some(topic) if !topic.trim().is_empty() => topic,
        _ => bail!("A topic is required. Pass it as an argument or set debate.topic in config."),
    };

    let mut params = config.debate.to_params();
    if let Some(rounds) = cli.rounds {
        params = params.with_rounds(usize::from(rounds));
    }

    // === Dependency Injection ===
    let roster = ParticipantFactory::build_roster(&config.effective_participants())
        .context("Failed to set up participants")?;
    info!(
        "Debating '{}' over {} rounds with {} participants",
        topic,
        params.rounds,
        roster.len()
    );

    let use_case = RunDebateUseCase::new(roster.arguers, roster.judges).with_params(params);

    let progress: Box<dyn DebateProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stderr().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let outcome = use_case
        .execute_with_progress(&topic, progress.as_ref())
        .context("Debate aborted")?;

    let format: OutputFormat = cli
        .output
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();

    println!("{}", ConsoleFormatter::render(&outcome, format));

    Ok(())
}

/// Initialize logging based on verbosity level
///
/// `RUST_LOG` overrides the verbosity flag. With a log directory, events are
/// also written to `debate-council.log` there without ANSI colors.
fn init_logging(verbose: u8, log_dir: Option<&Path>) -> Result<Option<WorkerGuard>> {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace", // -vvv or more
    };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let console = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    match log_dir {
        Some(dir) => {
            std::fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            let appender = tracing_appender::rolling::never(dir, LOG_FILE_NAME);
            let (writer, guard) = tracing_appender::non_blocking(appender);

            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .with(fmt::layer().with_writer(writer).with_ansi(false))
                .init();

            Ok(Some(guard))
        }
        None => {
            tracing_subscriber::registry()
                .with(filter)
                .with(console)
                .init();

            Ok(None)
        }
    }
}
