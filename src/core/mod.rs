//! Core engine types: ids, actions, RNG, configuration, errors.
//!
//! These are the building blocks shared by the board, the rules and the
//! game state machine.

pub mod entity;
pub mod rng;
pub mod config;
pub mod action;
pub mod error;

pub use entity::{LineId, StationId};
pub use rng::GameRng;
pub use config::{GameConfig, DEFAULT_JUNCTION_BONUS};
pub use action::{ActionRecord, PlayerAction};
pub use error::{DataLoadError, EngineError};
