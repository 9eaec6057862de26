//! Progress reporting for debate runs

use colored::Colorize;
use debate_application::ports::progress::DebateProgressNotifier;
use debate_domain::{DebatePhase, Decision, Outcome, Turn};
use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};
use std::sync::Mutex;

/// Reports progress during a debate with one progress bar per phase
pub struct ProgressReporter {
    multi: MultiProgress,
    phase_bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::stderr()),
            phase_bar: Mutex::new(None),
        }
    }

    fn phase_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("=>-")
    }

    fn phase_label(phase: &DebatePhase) -> String {
        match phase {
            DebatePhase::Round(_) => phase.display_name(),
            DebatePhase::Voting => "Judges voting".to_string(),
        }
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl DebateProgressNotifier for ProgressReporter {
    fn on_phase_start(&self, phase: &DebatePhase, total_tasks: usize) {
        let pb = self.multi.add(ProgressBar::new(total_tasks as u64));
        pb.set_style(Self::phase_style());
        pb.set_prefix(Self::phase_label(phase));
        pb.set_message("Starting...");

        if let Ok(mut slot) = self.phase_bar.lock() {
            *slot = Some(pb);
        }
    }

    fn on_task_complete(&self, _phase: &DebatePhase, participant: &str) {
        if let Ok(slot) = self.phase_bar.lock()
            && let Some(pb) = slot.as_ref()
        {
            pb.set_message(format!("{} {}", "v".green(), participant));
            pb.inc(1);
        }
    }

    fn on_phase_complete(&self, phase: &DebatePhase) {
        if let Ok(mut slot) = self.phase_bar.lock()
            && let Some(pb) = slot.take()
        {
            pb.finish_with_message(format!("{} complete!", phase.display_name().green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
///
/// Writes to stderr so stdout only carries the formatted outcome.
pub struct SimpleProgress;

impl SimpleProgress {
    const PREVIEW_CHARS: usize = 60;

    fn turn_line(turn: &Turn) -> String {
        format!(
            "  {} {}: {}",
            "v".green(),
            turn.author,
            Self::preview(&turn.content)
        )
    }

    fn decision_line(decision: &Decision) -> String {
        let winner = if decision.is_undetermined() {
            "(undetermined)".to_string()
        } else {
            decision.winner.clone()
        };
        format!("  {} {} -> {}", "v".green(), decision.decider, winner)
    }

    /// First line of `text`, cut to a fixed number of characters
    fn preview(text: &str) -> String {
        let first_line = text.lines().next().unwrap_or_default().trim();
        let mut preview: String = first_line.chars().take(Self::PREVIEW_CHARS).collect();
        if first_line.chars().count() > Self::PREVIEW_CHARS || text.trim().lines().count() > 1 {
            preview.push_str("...");
        }
        preview
    }
}

impl DebateProgressNotifier for SimpleProgress {
    fn on_phase_start(&self, phase: &DebatePhase, total_tasks: usize) {
        eprintln!(
            "{} {} ({} tasks)",
            "->".cyan(),
            ProgressReporter::phase_label(phase).bold(),
            total_tasks
        );
    }

    // Turns and decisions are reported with their content instead
    fn on_task_complete(&self, _phase: &DebatePhase, _participant: &str) {}

    fn on_phase_complete(&self, _phase: &DebatePhase) {
        eprintln!();
    }

    fn on_turn(&self, turn: &Turn) {
        eprintln!("{}", SimpleProgress::turn_line(turn));
    }

    fn on_decision(&self, decision: &Decision) {
        eprintln!("{}", SimpleProgress::decision_line(decision));
    }

    fn on_debate_complete(&self, outcome: &Outcome) {
        eprintln!(
            "{} {} turns, {} decisions",
            "done".green().bold(),
            outcome.total_turns(),
            outcome.decisions.len()
        );
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_phase_labels() {
        assert_eq!(
            ProgressReporter::phase_label(&DebatePhase::Round(2)),
            "Round 2"
        );
        assert_eq!(
            ProgressReporter::phase_label(&DebatePhase::Voting),
            "Judges voting"
        );
    }

    #[test]
    fn test_simple_progress_turn_line() {
        colored::control::set_override(false);
        let turn = Turn::new("pro_agent", debate_domain::Role::Pro, "Tabs are semantic", 1);
        assert_eq!(
            SimpleProgress::turn_line(&turn),
            "  v pro_agent: Tabs are semantic"
        );

        let long = Turn::new("con_agent", debate_domain::Role::Con, "x".repeat(80), 1);
        let line = SimpleProgress::turn_line(&long);
        assert!(line.ends_with(&format!("{}...", "x".repeat(60))));

        let multi = Turn::new("con_agent", debate_domain::Role::Con, "First\nSecond", 1);
        assert_eq!(SimpleProgress::turn_line(&multi), "  v con_agent: First...");
    }

    #[test]
    fn test_simple_progress_decision_line() {
        colored::control::set_override(false);
        let decision = Decision::new("judge", "pro_agent", "Stronger case");
        assert_eq!(
            SimpleProgress::decision_line(&decision),
            "  v judge -> pro_agent"
        );

        let empty = Decision::new("judge", "", "");
        assert_eq!(
            SimpleProgress::decision_line(&empty),
            "  v judge -> (undetermined)"
        );
    }

    #[test]
    fn test_reporter_tracks_phase_bar() {
        let reporter = ProgressReporter {
            multi: MultiProgress::with_draw_target(ProgressDrawTarget::hidden()),
            phase_bar: Mutex::new(None),
        };
        let phase = DebatePhase::Round(1);

        reporter.on_phase_start(&phase, 2);
        reporter.on_task_complete(&phase, "pro_agent");
        {
            let slot = reporter.phase_bar.lock().unwrap();
            let pb = slot.as_ref().unwrap();
            assert_eq!(pb.length(), Some(2));
            assert_eq!(pb.position(), 1);
        }

        reporter.on_phase_complete(&phase);
        assert!(reporter.phase_bar.lock().unwrap().is_none());
    }
}
