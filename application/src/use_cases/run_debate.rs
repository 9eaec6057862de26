//! Run Debate use case
//!
//! Coordinates the full debate flow: argument rounds, then voting.

use crate::config::DebateParams;
use crate::ports::progress::{DebateProgressNotifier, NoProgress};
use debate_domain::{DebatePhase, GenerationError, Outcome, Participant, Turn};
use tracing::{debug, info, warn};

/// Use case for running a debate
///
/// Arguers speak once per round in configuration order; every arguer sees
/// all turns produced before it, including earlier turns of the same round.
/// After the last round each judge decides once over the complete history.
///
/// The run is sequential and synchronous. A generator failure aborts it and
/// is returned unchanged; no partial [`Outcome`] is produced.
pub struct RunDebateUseCase {
    arguers: Vec<Participant>,
    judges: Vec<Participant>,
    params: DebateParams,
}

impl RunDebateUseCase {
    pub fn new(arguers: Vec<Participant>, judges: Vec<Participant>) -> Self {
        Self {
            arguers,
            judges,
            params: DebateParams::default(),
        }
    }

    pub fn with_params(mut self, params: DebateParams) -> Self {
        self.params = params;
        self
    }

    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.params.rounds = rounds;
        self
    }

    pub fn arguers(&self) -> &[Participant] {
        &self.arguers
    }

    pub fn judges(&self) -> &[Participant] {
        &self.judges
    }

    pub fn rounds(&self) -> usize {
        self.params.rounds
    }

    /// Execute the use case with default (no-op) progress
    pub fn execute(&self, topic: &str) -> Result<Outcome, GenerationError> {
        self.execute_with_progress(topic, &NoProgress)
    }

    /// Execute the use case with progress callbacks
    pub fn execute_with_progress(
        &self,
        topic: &str,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<Outcome, GenerationError> {
        info!(
            "Starting debate with {} arguers, {} judges, {} rounds",
            self.arguers.len(),
            self.judges.len(),
            self.params.rounds
        );
        self.warn_on_role_mismatch();

        let mut outcome = Outcome::new(topic);
        let mut history: Vec<Turn> = Vec::new();

        for round in 1..=self.params.rounds {
            let turns = self.phase_round(topic, round, &mut history, progress)?;
            outcome.push_round(turns);
        }

        self.phase_voting(topic, &history, &mut outcome, progress)?;

        outcome.conclude();
        if outcome.is_split() {
            warn!(
                "Judges disagreed; reporting first judge's pick '{}'",
                outcome.winner
            );
        }
        info!(
            "Debate complete: winner '{}' (consensus: {})",
            outcome.winner, outcome.consensus
        );

        progress.on_debate_complete(&outcome);
        Ok(outcome)
    }

    /// One argument round: every arguer speaks once, in order
    fn phase_round(
        &self,
        topic: &str,
        round: usize,
        history: &mut Vec<Turn>,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<Vec<Turn>, GenerationError> {
        let phase = DebatePhase::Round(round);
        info!("Round {}/{}", round, self.params.rounds);
        progress.on_phase_start(&phase, self.arguers.len());

        let mut turns = Vec::with_capacity(self.arguers.len());
        for arguer in &self.arguers {
            debug!(
                "{} ({}) arguing with {} prior turns",
                arguer.name(),
                arguer.role(),
                history.len()
            );
            let turn = arguer.produce_turn(topic, history, round)?;

            progress.on_turn(&turn);
            progress.on_task_complete(&phase, arguer.name());

            history.push(turn.clone());
            turns.push(turn);
        }

        progress.on_phase_complete(&phase);
        Ok(turns)
    }

    /// Voting: every judge decides once over the full history
    fn phase_voting(
        &self,
        topic: &str,
        history: &[Turn],
        outcome: &mut Outcome,
        progress: &dyn DebateProgressNotifier,
    ) -> Result<(), GenerationError> {
        let phase = DebatePhase::Voting;
        info!("Voting with {} judges", self.judges.len());
        progress.on_phase_start(&phase, self.judges.len());

        for judge in &self.judges {
            let decision = judge.produce_decision(topic, history)?;
            debug!("{} voted for '{}'", judge.name(), decision.winner);

            progress.on_decision(&decision);
            progress.on_task_complete(&phase, judge.name());

            outcome.push_decision(decision);
        }

        progress.on_phase_complete(&phase);
        Ok(())
    }

    fn warn_on_role_mismatch(&self) {
        for arguer in self.arguers.iter().filter(|p| p.role().is_decider()) {
            warn!("Arguer '{}' has the judge role", arguer.name());
        }
        for judge in self.judges.iter().filter(|p| !p.role().is_decider()) {
            warn!("Judge '{}' has the {} role", judge.name(), judge.role());
        }
    }
}
