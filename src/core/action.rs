//! Player actions and the action history.
//!
//! The presentation layer drives the engine with three commands (draw,
//! select, connect) plus skip and cancel. Wrapping them in a serializable
//! enum lets a game be replayed from its recorded history.

use serde::{Deserialize, Serialize};

use super::entity::{LineId, StationId};

/// A single player command.
///
/// ## Example
///
/// ```
/// use rust_metro::core::{PlayerAction, StationId};
///
/// let connect = PlayerAction::Connect(StationId::new(4));
/// assert_eq!(connect.station(), Some(StationId::new(4)));
/// assert_eq!(PlayerAction::Draw.station(), None);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PlayerAction {
    /// Draw the next card.
    Draw,
    /// Select a station (must be the current line's terminal).
    Select(StationId),
    /// Try to connect the selected terminal to a station.
    Connect(StationId),
    /// Discard the current card without placing it.
    Skip,
    /// Drop the pending selection.
    Cancel,
}

impl PlayerAction {
    /// The station this action points at, if any.
    #[must_use]
    pub fn station(self) -> Option<StationId> {
        match self {
            PlayerAction::Select(id) | PlayerAction::Connect(id) => Some(id),
            PlayerAction::Draw | PlayerAction::Skip | PlayerAction::Cancel => None,
        }
    }
}

/// An accepted action with the context it was taken in.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The action taken.
    pub action: PlayerAction,

    /// Line being built when the action was taken.
    pub line: LineId,

    /// Cards drawn in the round at the time of the action.
    pub cards_drawn: u32,

    /// Global sequence number (for ordering).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(action: PlayerAction, line: LineId, cards_drawn: u32, sequence: u32) -> Self {
        Self {
            action,
            line,
            cards_drawn,
            sequence,
        }
    }
}
