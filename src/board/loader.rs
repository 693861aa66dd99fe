//! Loading board data from JSON.
//!
//! The dataset is two JSON arrays, one of stations and one of line
//! definitions. A default board ships with the crate under `data/`.

use std::path::Path;

use super::line::LineDefinition;
use super::registry::Board;
use super::station::Station;
use crate::core::DataLoadError;

const BUNDLED_STATIONS: &str = include_str!("../../data/stations.json");
const BUNDLED_LINES: &str = include_str!("../../data/lines.json");

impl Board {
    /// Parse and validate a board from the two JSON documents.
    pub fn from_json(stations_json: &str, lines_json: &str) -> Result<Self, DataLoadError> {
        let stations: Vec<Station> = serde_json::from_str(stations_json)?;
        let lines: Vec<LineDefinition> = serde_json::from_str(lines_json)?;
        Self::new(stations, lines)
    }

    /// Read `stations.json` and `lines.json` from a directory.
    pub fn from_dir(dir: impl AsRef<Path>) -> Result<Self, DataLoadError> {
        let dir = dir.as_ref();
        log::info!("loading board from {}", dir.display());

        let stations = std::fs::read_to_string(dir.join("stations.json"))?;
        let lines = std::fs::read_to_string(dir.join("lines.json"))?;
        Self::from_json(&stations, &lines)
    }

    /// The board bundled with the crate.
    pub fn bundled() -> Result<Self, DataLoadError> {
        Self::from_json(BUNDLED_STATIONS, BUNDLED_LINES)
    }
}
