//! Game configuration.
//!
//! The board layout is fixed by the dataset; what remains tunable is the
//! shuffle seed and the junction bonus table used at game end.

use serde::{Deserialize, Serialize};

/// Junction bonus awarded per station, indexed by the number of distinct
/// lines passing through it. Counts beyond the table use the last entry.
pub const DEFAULT_JUNCTION_BONUS: [u32; 5] = [0, 0, 2, 5, 9];

/// Engine configuration parameters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Random seed for the deck.
    /// Same seed produces the same card sequence.
    pub seed: u64,

    /// Bonus per station by line count (index 0..=4).
    pub junction_bonus: [u32; 5],
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            seed: 42,
            junction_bonus: DEFAULT_JUNCTION_BONUS,
        }
    }
}

impl GameConfig {
    /// Create a new config with custom seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Create a new config with a custom junction bonus table.
    #[must_use]
    pub fn with_junction_bonus(mut self, table: [u32; 5]) -> Self {
        self.junction_bonus = table;
        self
    }

    /// Bonus for a station shared by `line_count` lines.
    ///
    /// Counts above the table saturate at the last entry.
    #[must_use]
    pub fn junction_value(&self, line_count: usize) -> u32 {
        let last = self.junction_bonus.len() - 1;
        self.junction_bonus[line_count.min(last)]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GameConfig::default();
        assert_eq!(config.seed, 42);
        assert_eq!(config.junction_bonus, [0, 0, 2, 5, 9]);
    }

    #[test]
    fn test_junction_value() {
        let config = GameConfig::default();
        assert_eq!(config.junction_value(0), 0);
        assert_eq!(config.junction_value(1), 0);
        assert_eq!(config.junction_value(2), 2);
        assert_eq!(config.junction_value(3), 5);
        assert_eq!(config.junction_value(4), 9);
        assert_eq!(config.junction_value(7), 9);
    }

    #[test]
    fn test_builder_pattern() {
        let config = GameConfig::default()
            .with_seed(123)
            .with_junction_bonus([0, 0, 1, 2, 3]);

        assert_eq!(config.seed, 123);
        assert_eq!(config.junction_value(3), 2);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: GameConfig = serde_json::from_str(r#"{"seed": 7}"#).unwrap();
        assert_eq!(config.seed, 7);
        assert_eq!(config.junction_bonus, DEFAULT_JUNCTION_BONUS);
    }
}
