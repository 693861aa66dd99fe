//! Game rules: connection validation and scoring.
//!
//! Both halves are pure functions over the board and network. The state
//! machine in `game` decides when to call them; the rules never mutate
//! anything themselves.

pub mod validator;
pub mod scoring;

pub use validator::{can_connect, Rule, Validator};
pub use scoring::{junction_bonus, score_line, RoundScore};
