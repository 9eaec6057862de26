//! Debate parameters for use case run control.
//!
//! [`DebateParams`] groups the static parameters that shape a run of
//! [`RunDebateUseCase`](crate::use_cases::run_debate::RunDebateUseCase).

/// Number of rounds when nothing else is configured
pub const DEFAULT_ROUNDS: usize = 3;

/// Debate run control parameters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebateParams {
    /// Number of argument rounds before voting (expected to be at least 1)
    pub rounds: usize,
}

impl Default for DebateParams {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl DebateParams {
    pub fn with_rounds(mut self, rounds: usize) -> Self {
        self.rounds = rounds;
        self
    }
}
