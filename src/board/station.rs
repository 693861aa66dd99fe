//! Station records.
//!
//! A station is a fixed cell on the board with a type letter (what cards
//! match it), a district (for round scoring) and a river bank (for crossing
//! bonuses). Stations are immutable once the board is loaded.

use serde::{Deserialize, Serialize};

use crate::core::StationId;
use crate::network::Point;

/// Station type letter printed on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum StationType {
    A,
    B,
    C,
    D,
}

impl StationType {
    /// All station types.
    pub const ALL: [StationType; 4] = [StationType::A, StationType::B, StationType::C, StationType::D];
}

impl std::fmt::Display for StationType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let letter = match self {
            StationType::A => "A",
            StationType::B => "B",
            StationType::C => "C",
            StationType::D => "D",
        };
        f.write_str(letter)
    }
}

/// Which bank of the river a station sits on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RiverSide {
    Bank1,
    Bank2,
}

/// A station on the board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Station {
    /// Unique identifier.
    pub id: StationId,

    /// Grid column (0-based).
    pub x: i32,

    /// Grid row (0-based).
    pub y: i32,

    /// Type letter matched by cards.
    #[serde(rename = "type")]
    pub station_type: StationType,

    /// District name used for round scoring.
    pub district: String,

    /// River bank.
    pub side: RiverSide,

    /// Whether the station is also a train station.
    #[serde(rename = "train", default)]
    pub is_train_station: bool,
}

impl Station {
    /// Create a station on bank 1 with no train connection.
    #[must_use]
    pub fn new(id: StationId, x: i32, y: i32, station_type: StationType, district: impl Into<String>) -> Self {
        Self {
            id,
            x,
            y,
            station_type,
            district: district.into(),
            side: RiverSide::Bank1,
            is_train_station: false,
        }
    }

    /// Set the river bank (builder pattern).
    #[must_use]
    pub fn on_side(mut self, side: RiverSide) -> Self {
        self.side = side;
        self
    }

    /// Mark as a train station (builder pattern).
    #[must_use]
    pub fn with_train(mut self) -> Self {
        self.is_train_station = true;
        self
    }

    /// Grid position.
    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }
}
