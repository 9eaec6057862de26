//! Progress notification port
//!
//! Defines the interface for reporting progress during a debate run.

use debate_domain::{DebatePhase, Decision, Outcome, Turn};

/// Callback for progress updates during a debate
///
/// Implementations live in the presentation layer and can display
/// progress in various ways (progress bars, plain lines, etc.)
pub trait DebateProgressNotifier: Send + Sync {
    /// Called when a phase starts
    fn on_phase_start(&self, phase: &DebatePhase, total_tasks: usize);

    /// Called when a participant finishes its task within a phase
    fn on_task_complete(&self, phase: &DebatePhase, participant: &str);

    /// Called when a phase completes
    fn on_phase_complete(&self, phase: &DebatePhase);

    // ==================== Content Callbacks ====================

    /// Called with each turn as soon as it is produced
    fn on_turn(&self, _turn: &Turn) {}

    /// Called with each decision as soon as it is produced
    fn on_decision(&self, _decision: &Decision) {}

    /// Called once the outcome has been concluded
    fn on_debate_complete(&self, _outcome: &Outcome) {}
}

/// No-op progress notifier for when progress reporting is not needed
pub struct NoProgress;

impl DebateProgressNotifier for NoProgress {
    fn on_phase_start(&self, _phase: &DebatePhase, _total_tasks: usize) {}
    fn on_task_complete(&self, _phase: &DebatePhase, _participant: &str) {}
    fn on_phase_complete(&self, _phase: &DebatePhase) {}
}
