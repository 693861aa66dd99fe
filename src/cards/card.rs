//! Draw cards.
//!
//! Each card names a station type (or is a Joker) and carries a platform
//! variant. The platform is cosmetic for the rules but keeps the deck at its
//! full ten-card composition.

use serde::{Deserialize, Serialize};

use crate::board::StationType;

/// What a card allows the player to connect to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CardSymbol {
    A,
    B,
    C,
    D,
    Joker,
}

impl CardSymbol {
    pub const ALL: [CardSymbol; 5] = [
        CardSymbol::A,
        CardSymbol::B,
        CardSymbol::C,
        CardSymbol::D,
        CardSymbol::Joker,
    ];

    /// The station type this symbol names, `None` for the Joker.
    #[must_use]
    pub fn station_type(self) -> Option<StationType> {
        match self {
            CardSymbol::A => Some(StationType::A),
            CardSymbol::B => Some(StationType::B),
            CardSymbol::C => Some(StationType::C),
            CardSymbol::D => Some(StationType::D),
            CardSymbol::Joker => None,
        }
    }
}

impl std::fmt::Display for CardSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.station_type() {
            Some(station_type) => write!(f, "{}", station_type),
            None => f.write_str("Joker"),
        }
    }
}

/// Platform variant printed on the card.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Side,
    Center,
}

/// A single draw card.
///
/// ```
/// use rust_metro::board::StationType;
/// use rust_metro::cards::{Card, CardSymbol, Platform};
///
/// let joker = Card::new(CardSymbol::Joker, Platform::Side);
/// assert!(joker.matches(StationType::C));
///
/// let b = Card::new(CardSymbol::B, Platform::Center);
/// assert!(b.matches(StationType::B));
/// assert!(!b.matches(StationType::A));
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Card {
    pub symbol: CardSymbol,
    pub platform: Platform,
}

impl Card {
    #[must_use]
    pub const fn new(symbol: CardSymbol, platform: Platform) -> Self {
        Self { symbol, platform }
    }

    #[must_use]
    pub fn is_joker(self) -> bool {
        self.symbol == CardSymbol::Joker
    }

    /// Whether this card lets the line reach a station of `station_type`.
    #[must_use]
    pub fn matches(self, station_type: StationType) -> bool {
        match self.symbol.station_type() {
            Some(required) => required == station_type,
            None => true,
        }
    }

    /// The full deck: every symbol once per platform.
    #[must_use]
    pub fn full_set() -> Vec<Card> {
        [Platform::Side, Platform::Center]
            .into_iter()
            .flat_map(|platform| CardSymbol::ALL.into_iter().map(move |symbol| Card::new(symbol, platform)))
            .collect()
    }
}

impl std::fmt::Display for Card {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_set_composition() {
        let cards = Card::full_set();
        assert_eq!(cards.len(), 10);

        for symbol in CardSymbol::ALL {
            let count = cards.iter().filter(|c| c.symbol == symbol).count();
            assert_eq!(count, 2, "{} should appear once per platform", symbol);
        }
        assert_eq!(cards.iter().filter(|c| c.platform == Platform::Center).count(), 5);
    }

    #[test]
    fn test_joker_matches_everything() {
        let joker = Card::new(CardSymbol::Joker, Platform::Center);
        assert!(joker.is_joker());
        for station_type in StationType::ALL {
            assert!(joker.matches(station_type));
        }
    }

    #[test]
    fn test_letter_matches_only_itself() {
        let card = Card::new(CardSymbol::D, Platform::Side);
        assert!(card.matches(StationType::D));
        assert!(!card.matches(StationType::A));
        assert!(!card.matches(StationType::B));
        assert!(!card.matches(StationType::C));
    }

    #[test]
    fn test_display() {
        assert_eq!(Card::new(CardSymbol::A, Platform::Side).to_string(), "A");
        assert_eq!(Card::new(CardSymbol::Joker, Platform::Side).to_string(), "Joker");
    }
}
