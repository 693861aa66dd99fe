//! Scoring.
//!
//! ## Round score
//!
//! For a finished line: `districts * max_in_district + crossings`, where
//! `districts` is the number of distinct districts its stations touch,
//! `max_in_district` the most stations it has in any single district, and
//! `crossings` the number of segments joining opposite river banks.
//!
//! ## Junction bonus
//!
//! Awarded once at game end: every station shared by two or more lines
//! scores from the configured table (2 / 5 / 9 by default).

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::board::Board;
use crate::core::GameConfig;
use crate::network::{Line, NetworkState};

/// Breakdown of one line's round score.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundScore {
    /// Distinct districts visited.
    pub districts: u32,
    /// Largest number of the line's stations in one district.
    pub max_in_district: u32,
    /// Segments crossing the river.
    pub crossings: u32,
}

impl RoundScore {
    #[must_use]
    pub fn total(&self) -> u32 {
        self.districts * self.max_in_district + self.crossings
    }
}

/// Score a finished line.
///
/// Stations missing from the board contribute nothing.
#[must_use]
pub fn score_line(board: &Board, line: &Line) -> RoundScore {
    let mut per_district: FxHashMap<&str, u32> = FxHashMap::default();
    for station in line.stations().iter().filter_map(|&id| board.station(id)) {
        *per_district.entry(station.district.as_str()).or_insert(0) += 1;
    }

    let crossings = line
        .segments()
        .iter()
        .filter(|segment| match (board.station(segment.from), board.station(segment.to)) {
            (Some(a), Some(b)) => a.side != b.side,
            _ => false,
        })
        .count();

    RoundScore {
        districts: per_district.len() as u32,
        max_in_district: per_district.values().copied().max().unwrap_or(0),
        crossings: crossings as u32,
    }
}

/// Bonus for stations shared between lines.
#[must_use]
pub fn junction_bonus(network: &NetworkState, config: &GameConfig) -> u32 {
    network
        .station_line_counts()
        .values()
        .map(|&count| config.junction_value(count))
        .sum()
}
