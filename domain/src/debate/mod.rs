//! Debate records
//!
//! Immutable values produced during a run:
//!
//! - [`Turn`]: one arguer's contribution in one round
//! - [`Decision`]: one judge's pick plus justification
//! - [`Outcome`]: every round, every decision, the winner and consensus flag
//!
//! # Run Shape
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────┐
//! │  Round 1   [pro] → [con] → ...      history grows per turn│
//! │  Round 2   [pro] → [con] → ...                            │
//! │  ...                                                      │
//! │  Round N   [pro] → [con] → ...                            │
//! ├──────────────────────────────────────────────────────────┤
//! │  Voting    [judge 1] → [judge 2] → ...   full history     │
//! ├──────────────────────────────────────────────────────────┤
//! │  Outcome   winner = judge 1's pick                        │
//! │            consensus = one distinct pick                  │
//! └──────────────────────────────────────────────────────────┘
//! ```

pub mod decision;
pub mod outcome;
pub mod parsing;
pub mod phase;
pub mod role;
pub mod turn;

pub use decision::Decision;
pub use outcome::Outcome;
pub use parsing::parse_decision_response;
pub use phase::DebatePhase;
pub use role::{ParseRoleError, Role};
pub use turn::Turn;
