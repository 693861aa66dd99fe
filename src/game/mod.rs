//! The game: a four-round state machine over the shared board.
//!
//! `MetroGame` owns the only mutable state. Each round draws cards, extends
//! one line and is scored when its card budget runs out; after the last
//! line the junction bonus is added and the game is complete.

pub mod state;
pub mod machine;

pub use state::{GameSnapshot, GameState, GameSummary, Phase, RoundRecord, RoundSummary};
pub use machine::MetroGame;
