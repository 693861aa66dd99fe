//! Error types.
//!
//! `EngineError` covers everything a single player action can fail with; it
//! never leaves the network modified. `DataLoadError` is fatal: without a
//! valid board no game can be constructed.

use thiserror::Error;

use super::entity::{LineId, StationId};
use crate::rules::Rule;

/// Failure of a single player action.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum EngineError {
    /// The clicked station is not the terminal of the current line.
    #[error("{station} is not the end of the current line (expected {terminal})")]
    InvalidSelection { station: StationId, terminal: StationId },

    /// One of the connection rules rejected the move.
    #[error("invalid connection: {rule}")]
    RuleViolation { rule: Rule },

    /// A station or connection was chosen before drawing a card.
    #[error("draw a card first")]
    NoActiveCard,

    /// A card was drawn while another is still in hand.
    #[error("the current card has not been played or skipped yet")]
    CardPending,

    /// A connection was attempted without selecting the line's terminal.
    #[error("select the end of the current line first")]
    NoSelection,

    /// The id does not name a station on the board.
    #[error("unknown station {0}")]
    UnknownStation(StationId),

    /// The game has finished; no further actions are accepted.
    #[error("the game is over")]
    GameOver,
}

/// Failure to load or validate the board dataset.
#[derive(Debug, Error)]
pub enum DataLoadError {
    #[error("failed to read board data: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse board data: {0}")]
    Json(#[from] serde_json::Error),

    #[error("board data contains no {0}")]
    Empty(&'static str),

    #[error("duplicate station id {0}")]
    DuplicateStation(StationId),

    #[error("duplicate line id {0}")]
    DuplicateLine(LineId),

    #[error("{first} and {second} share cell ({x}, {y})")]
    DuplicateCoordinate {
        first: StationId,
        second: StationId,
        x: i32,
        y: i32,
    },

    #[error("{station} at ({x}, {y}) lies outside the {size}x{size} grid")]
    OutOfBounds {
        station: StationId,
        x: i32,
        y: i32,
        size: i32,
    },

    #[error("{line} starts at unknown {station}")]
    UnknownStartStation { line: LineId, station: StationId },

    #[error("{0} has no cards to draw")]
    NoCards(LineId),
}
