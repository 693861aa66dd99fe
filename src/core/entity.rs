//! Identifiers for board objects.
//!
//! Stations and lines are referenced everywhere by small copyable ids rather
//! than by reference. The ids come straight from the board dataset, so the
//! engine never allocates them.
//!
//! ```
//! use rust_metro::core::{LineId, StationId};
//!
//! let station = StationId::new(7);
//! let line = LineId::new(1);
//!
//! assert_eq!(station.raw(), 7);
//! assert_eq!(line.to_string(), "Line(1)");
//! ```

use serde::{Deserialize, Serialize};

/// Unique identifier of a station on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct StationId(pub u32);

impl StationId {
    /// Create a new station ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for StationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Station({})", self.0)
    }
}

/// Unique identifier of a metro line definition.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct LineId(pub u32);

impl LineId {
    /// Create a new line ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for LineId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Line({})", self.0)
    }
}
