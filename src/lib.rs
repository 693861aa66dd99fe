//! # rust-metro
//!
//! Rules engine for a single-player metro line-building game.
//!
//! Four lines are built in four rounds on a fixed 10x10 grid of typed
//! stations split by a river. Each turn a card is drawn; the player extends
//! the current line from its terminal to a station the card allows, subject
//! to geometric rules (45-degree angles, no crossings, no running through
//! stations). Rounds are scored by district coverage and river crossings,
//! and the game ends with a bonus for stations shared between lines.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: Validation and scoring are pure functions over the
//!    board and network. Only `MetroGame` mutates anything.
//!
//! 2. **Reproducible**: The deck is shuffled from a seeded RNG, so a seed
//!    plus the action history replays a game exactly.
//!
//! 3. **Cheap Copies**: The network uses `im-rs` persistent collections, so
//!    snapshots and lookahead copies are O(1).
//!
//! ## Modules
//!
//! - `core`: Ids, actions, RNG, configuration, errors
//! - `board`: Stations, line definitions and dataset loading
//! - `cards`: Cards and the shuffled deck
//! - `network`: Grid geometry, segments and the lines built so far
//! - `rules`: Connection validator and scoring
//! - `game`: The round/game state machine

pub mod core;
pub mod board;
pub mod cards;
pub mod network;
pub mod rules;
pub mod game;

// Re-export commonly used types
pub use crate::core::{
    LineId, StationId,
    GameRng,
    GameConfig, DEFAULT_JUNCTION_BONUS,
    PlayerAction, ActionRecord,
    DataLoadError, EngineError,
};

pub use crate::board::{Board, LineDefinition, RiverSide, Station, StationType, GRID_SIZE};

pub use crate::cards::{Card, CardSymbol, Deck, Platform};

pub use crate::network::{Line, NetworkState, Point, Segment};

pub use crate::rules::{can_connect, junction_bonus, score_line, RoundScore, Rule, Validator};

pub use crate::game::{GameSnapshot, GameState, GameSummary, MetroGame, Phase, RoundRecord, RoundSummary};
