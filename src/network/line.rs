//! A line under construction.

use im::Vector;
use serde::{Deserialize, Serialize};

use super::segment::Segment;
use crate::core::{LineId, StationId};

/// Runtime state of one metro line: an acyclic path from its start station.
///
/// `stations[0]` is always the start station and `segments[i]` joins
/// `stations[i]` to `stations[i + 1]`. Uses `im` vectors so that cloning a
/// whole network for a snapshot is O(1).
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Line {
    definition: LineId,
    start: StationId,
    stations: Vector<StationId>,
    segments: Vector<Segment>,
}

impl Line {
    /// A line containing only its start station.
    #[must_use]
    pub fn new(definition: LineId, start: StationId) -> Self {
        let mut stations = Vector::new();
        stations.push_back(start);
        Self {
            definition,
            start,
            stations,
            segments: Vector::new(),
        }
    }

    /// The line definition this run belongs to.
    #[must_use]
    pub fn id(&self) -> LineId {
        self.definition
    }

    #[must_use]
    pub fn start(&self) -> StationId {
        self.start
    }

    /// Last station of the path; the only place the line may grow from.
    #[must_use]
    pub fn terminal(&self) -> StationId {
        self.stations.last().copied().unwrap_or(self.start)
    }

    /// Stations in visiting order.
    #[must_use]
    pub fn stations(&self) -> &Vector<StationId> {
        &self.stations
    }

    /// Segments in drawing order.
    #[must_use]
    pub fn segments(&self) -> &Vector<Segment> {
        &self.segments
    }

    #[must_use]
    pub fn contains(&self, station: StationId) -> bool {
        self.stations.contains(&station)
    }

    /// Append a segment ending at `to`. Callers validate first.
    pub(crate) fn extend(&mut self, from: StationId, to: StationId) {
        self.stations.push_back(to);
        self.segments.push_back(Segment::new(from, to));
    }
}
