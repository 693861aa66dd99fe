//! The whole network of lines built so far.

use im::OrdMap;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::line::Line;
use super::segment::Segment;
use crate::core::{LineId, StationId};

/// Every line built or being built, keyed by definition.
///
/// Mutated only by `seed_line` and `connect`. Across all lines no undirected
/// segment appears twice and no two segments cross except at a shared
/// station; the validator is what keeps it that way.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NetworkState {
    lines: OrdMap<LineId, Line>,
}

impl NetworkState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Start a line at its start station, replacing any previous run.
    pub fn seed_line(&mut self, id: LineId, start: StationId) -> &Line {
        self.lines.insert(id, Line::new(id, start));
        &self.lines[&id]
    }

    /// Append `from -> to` to a line.
    ///
    /// Performs no validation; `from` is expected to be the line's terminal
    /// and the move to have passed the validator against this exact state.
    /// Returns false if the line was never seeded.
    pub fn connect(&mut self, line: LineId, from: StationId, to: StationId) -> bool {
        match self.lines.get_mut(&line) {
            Some(line) => {
                line.extend(from, to);
                true
            }
            None => false,
        }
    }

    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&Line> {
        self.lines.get(&id)
    }

    /// Lines in id order.
    pub fn lines(&self) -> impl Iterator<Item = &Line> {
        self.lines.values()
    }

    /// Every segment of every line.
    pub fn segments(&self) -> impl Iterator<Item = &Segment> {
        self.lines.values().flat_map(|line| line.segments().iter())
    }

    #[must_use]
    pub fn segment_count(&self) -> usize {
        self.lines.values().map(|line| line.segments().len()).sum()
    }

    /// Whether any line already joins `a` and `b`.
    #[must_use]
    pub fn contains_segment(&self, a: StationId, b: StationId) -> bool {
        self.segments().any(|segment| segment.connects(a, b))
    }

    /// Number of distinct lines visiting each station.
    #[must_use]
    pub fn station_line_counts(&self) -> FxHashMap<StationId, usize> {
        let mut counts = FxHashMap::default();
        for line in self.lines.values() {
            // a line never repeats a station, so one visit per line
            for &station in line.stations() {
                *counts.entry(station).or_insert(0) += 1;
            }
        }
        counts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(n: u32) -> StationId {
        StationId::new(n)
    }

    #[test]
    fn test_seed_and_connect() {
        let mut network = NetworkState::new();
        network.seed_line(LineId::new(1), id(1));

        assert!(network.connect(LineId::new(1), id(1), id(2)));
        assert!(network.connect(LineId::new(1), id(2), id(3)));

        let line = network.line(LineId::new(1)).unwrap();
        assert_eq!(line.terminal(), id(3));
        assert_eq!(network.segment_count(), 2);
    }

    #[test]
    fn test_connect_unknown_line() {
        let mut network = NetworkState::new();
        assert!(!network.connect(LineId::new(9), id(1), id(2)));
        assert_eq!(network.segment_count(), 0);
    }

    #[test]
    fn test_contains_segment_is_undirected() {
        let mut network = NetworkState::new();
        network.seed_line(LineId::new(1), id(1));
        network.connect(LineId::new(1), id(1), id(2));

        assert!(network.contains_segment(id(1), id(2)));
        assert!(network.contains_segment(id(2), id(1)));
        assert!(!network.contains_segment(id(1), id(3)));
    }

    #[test]
    fn test_station_line_counts() {
        let mut network = NetworkState::new();
        network.seed_line(LineId::new(1), id(1));
        network.connect(LineId::new(1), id(1), id(2));
        network.seed_line(LineId::new(2), id(2));
        network.connect(LineId::new(2), id(2), id(3));

        let counts = network.station_line_counts();
        assert_eq!(counts[&id(1)], 1);
        assert_eq!(counts[&id(2)], 2);
        assert_eq!(counts[&id(3)], 1);
    }

    #[test]
    fn test_clone_is_independent() {
        let mut network = NetworkState::new();
        network.seed_line(LineId::new(1), id(1));
        let snapshot = network.clone();

        network.connect(LineId::new(1), id(1), id(2));

        assert_eq!(snapshot.segment_count(), 0);
        assert_eq!(network.segment_count(), 1);
    }
}
