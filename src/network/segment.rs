//! Track segments.

use serde::{Deserialize, Serialize};

use crate::core::StationId;

/// One piece of track between two stations.
///
/// Stored in the direction it was drawn, but compared as an unordered pair
/// by `connects`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Segment {
    pub from: StationId,
    pub to: StationId,
}

impl Segment {
    #[must_use]
    pub const fn new(from: StationId, to: StationId) -> Self {
        Self { from, to }
    }

    /// Whether this segment joins `a` and `b`, in either direction.
    #[must_use]
    pub fn connects(&self, a: StationId, b: StationId) -> bool {
        (self.from == a && self.to == b) || (self.from == b && self.to == a)
    }

    /// Whether `station` is one of the ends.
    #[must_use]
    pub fn touches(&self, station: StationId) -> bool {
        self.from == station || self.to == station
    }

    /// Whether the two segments meet at a station.
    #[must_use]
    pub fn shares_endpoint(&self, other: &Segment) -> bool {
        self.touches(other.from) || self.touches(other.to)
    }
}
