//! Metro line definitions.

use serde::{Deserialize, Serialize};

use crate::core::{LineId, StationId};

/// Number of cards drawn per round unless the dataset says otherwise.
pub const DEFAULT_MAX_CARDS: u32 = 8;

fn default_max_cards() -> u32 {
    DEFAULT_MAX_CARDS
}

/// Static definition of one metro line. One round is played per line.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct LineDefinition {
    /// Unique identifier.
    pub id: LineId,

    /// Display name (e.g. "M2").
    pub name: String,

    /// Display color.
    pub color: String,

    /// Station every run of this line begins from.
    #[serde(rename = "start")]
    pub start_station: StationId,

    /// Cards drawn in this line's round.
    ///
    /// The dataset may override the default per line; zero is rejected at
    /// load.
    #[serde(default = "default_max_cards")]
    pub max_cards: u32,
}

impl LineDefinition {
    /// Create a line definition with the default card budget.
    #[must_use]
    pub fn new(id: LineId, name: impl Into<String>, color: impl Into<String>, start_station: StationId) -> Self {
        Self {
            id,
            name: name.into(),
            color: color.into(),
            start_station,
            max_cards: DEFAULT_MAX_CARDS,
        }
    }
}
