//! Board registry for station and line lookup.
//!
//! The `Board` stores every station and line definition for a game. It is
//! validated once on construction and never mutated afterwards, so it can be
//! shared between games behind an `Arc`.

use rustc_hash::{FxHashMap, FxHashSet};

use super::line::LineDefinition;
use super::station::Station;
use crate::core::{DataLoadError, LineId, StationId};

/// Side length of the square board.
pub const GRID_SIZE: i32 = 10;

/// Registry of stations and line definitions.
///
/// ## Example
///
/// ```
/// use rust_metro::board::{Board, LineDefinition, Station, StationType};
/// use rust_metro::core::{LineId, StationId};
///
/// let stations = vec![
///     Station::new(StationId::new(1), 0, 0, StationType::A, "north"),
///     Station::new(StationId::new(2), 1, 1, StationType::B, "north"),
/// ];
/// let lines = vec![LineDefinition::new(LineId::new(1), "M1", "yellow", StationId::new(1))];
///
/// let board = Board::new(stations, lines).unwrap();
/// assert_eq!(board.station(StationId::new(2)).unwrap().x, 1);
/// ```
#[derive(Clone, Debug)]
pub struct Board {
    stations: Vec<Station>,
    by_id: FxHashMap<StationId, usize>,
    lines: Vec<LineDefinition>,
}

impl Board {
    /// Build and validate a board.
    ///
    /// Fails if either list is empty, ids repeat, two stations share a cell,
    /// a station lies outside the grid, a line starts at an unknown station,
    /// or a line has no cards to draw.
    pub fn new(stations: Vec<Station>, lines: Vec<LineDefinition>) -> Result<Self, DataLoadError> {
        if stations.is_empty() {
            return Err(DataLoadError::Empty("stations"));
        }
        if lines.is_empty() {
            return Err(DataLoadError::Empty("lines"));
        }

        let mut by_id = FxHashMap::default();
        let mut occupied = FxHashMap::default();

        for (index, station) in stations.iter().enumerate() {
            if !(0..GRID_SIZE).contains(&station.x) || !(0..GRID_SIZE).contains(&station.y) {
                return Err(DataLoadError::OutOfBounds {
                    station: station.id,
                    x: station.x,
                    y: station.y,
                    size: GRID_SIZE,
                });
            }
            if by_id.insert(station.id, index).is_some() {
                return Err(DataLoadError::DuplicateStation(station.id));
            }
            if let Some(first) = occupied.insert(station.position(), station.id) {
                return Err(DataLoadError::DuplicateCoordinate {
                    first,
                    second: station.id,
                    x: station.x,
                    y: station.y,
                });
            }
        }

        let mut line_ids = FxHashSet::default();
        for line in &lines {
            if !line_ids.insert(line.id) {
                return Err(DataLoadError::DuplicateLine(line.id));
            }
            if !by_id.contains_key(&line.start_station) {
                return Err(DataLoadError::UnknownStartStation {
                    line: line.id,
                    station: line.start_station,
                });
            }
            if line.max_cards == 0 {
                return Err(DataLoadError::NoCards(line.id));
            }
        }

        log::debug!("board validated: {} stations, {} lines", stations.len(), lines.len());

        Ok(Self {
            stations,
            by_id,
            lines,
        })
    }

    /// Get a station by ID.
    #[must_use]
    pub fn station(&self, id: StationId) -> Option<&Station> {
        self.by_id.get(&id).map(|&index| &self.stations[index])
    }

    /// Check if a station ID is registered.
    #[must_use]
    pub fn contains(&self, id: StationId) -> bool {
        self.by_id.contains_key(&id)
    }

    /// Iterate over all stations in dataset order.
    pub fn stations(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }

    /// Number of stations.
    #[must_use]
    pub fn station_count(&self) -> usize {
        self.stations.len()
    }

    /// Line definitions in play order.
    #[must_use]
    pub fn lines(&self) -> &[LineDefinition] {
        &self.lines
    }

    /// Get a line definition by ID.
    #[must_use]
    pub fn line(&self, id: LineId) -> Option<&LineDefinition> {
        self.lines.iter().find(|line| line.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::StationType;

    fn station(id: u32, x: i32, y: i32) -> Station {
        Station::new(StationId::new(id), x, y, StationType::A, "d")
    }

    fn line(id: u32, start: u32) -> LineDefinition {
        LineDefinition::new(LineId::new(id), format!("M{}", id), "black", StationId::new(start))
    }

    #[test]
    fn test_lookup() {
        let board = Board::new(vec![station(1, 0, 0), station(2, 5, 5)], vec![line(1, 1)]).unwrap();

        assert_eq!(board.station_count(), 2);
        assert!(board.contains(StationId::new(2)));
        assert!(board.station(StationId::new(99)).is_none());
        assert_eq!(board.line(LineId::new(1)).map(|l| l.name.as_str()), Some("M1"));
    }

    #[test]
    fn test_zero_card_budget_rejected() {
        let mut empty = line(1, 1);
        empty.max_cards = 0;

        let result = Board::new(vec![station(1, 0, 0)], vec![empty]);
        assert!(matches!(result, Err(DataLoadError::NoCards(id)) if id == LineId::new(1)));
    }

    #[test]
    fn test_empty_data_rejected() {
        assert!(matches!(
            Board::new(vec![], vec![line(1, 1)]),
            Err(DataLoadError::Empty("stations"))
        ));
        assert!(matches!(
            Board::new(vec![station(1, 0, 0)], vec![]),
            Err(DataLoadError::Empty("lines"))
        ));
    }

    #[test]
    fn test_duplicate_station_rejected() {
        let result = Board::new(vec![station(1, 0, 0), station(1, 1, 1)], vec![line(1, 1)]);
        assert!(matches!(result, Err(DataLoadError::DuplicateStation(id)) if id == StationId::new(1)));
    }

    #[test]
    fn test_shared_cell_rejected() {
        let result = Board::new(
            vec![station(1, 3, 3), station(3, 4, 4), station(2, 3, 3)],
            vec![line(1, 1)],
        );
        assert!(matches!(
            result,
            Err(DataLoadError::DuplicateCoordinate { first, second, x: 3, y: 3 })
                if first == StationId::new(1) && second == StationId::new(2)
        ));
    }

    #[test]
    fn test_out_of_bounds_rejected() {
        let result = Board::new(vec![station(1, 10, 0)], vec![line(1, 1)]);
        assert!(matches!(result, Err(DataLoadError::OutOfBounds { x: 10, .. })));

        let result = Board::new(vec![station(1, 0, -1)], vec![line(1, 1)]);
        assert!(matches!(result, Err(DataLoadError::OutOfBounds { y: -1, .. })));
    }

    #[test]
    fn test_unknown_start_rejected() {
        let result = Board::new(vec![station(1, 0, 0)], vec![line(1, 7)]);
        assert!(matches!(result, Err(DataLoadError::UnknownStartStation { .. })));
    }

    #[test]
    fn test_duplicate_line_rejected() {
        let result = Board::new(vec![station(1, 0, 0)], vec![line(1, 1), line(1, 1)]);
        assert!(matches!(result, Err(DataLoadError::DuplicateLine(_))));
    }
}
