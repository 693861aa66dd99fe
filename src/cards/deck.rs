//! The draw pile.
//!
//! Drawing never fails: an empty pile is rebuilt from the full card set and
//! reshuffled before the next card is taken.

use super::card::Card;
use crate::core::GameRng;

/// Shuffled draw pile. The top of the pile is the end of the vec.
#[derive(Clone, Debug)]
pub struct Deck {
    cards: Vec<Card>,
    rng: GameRng,
    reshuffles: u32,
}

impl Deck {
    /// A freshly shuffled full deck.
    #[must_use]
    pub fn new(mut rng: GameRng) -> Self {
        let mut cards = Card::full_set();
        rng.shuffle(&mut cards);
        Self {
            cards,
            rng,
            reshuffles: 0,
        }
    }

    /// Draw the top card, reshuffling a fresh set first if the pile is empty.
    pub fn draw(&mut self) -> Card {
        if self.cards.is_empty() {
            self.refill();
        }
        // refill guarantees a non-empty pile
        match self.cards.pop() {
            Some(card) => card,
            None => unreachable!("deck refilled with an empty card set"),
        }
    }

    /// Cards left before the next reshuffle.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.cards.len()
    }

    /// How many times the pile has been rebuilt.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    /// Independent copy with a forked RNG.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        Self {
            cards: self.cards.clone(),
            rng: self.rng.fork(),
            reshuffles: self.reshuffles,
        }
    }

    fn refill(&mut self) {
        self.cards = Card::full_set();
        self.rng.shuffle(&mut self.cards);
        self.reshuffles += 1;
        log::debug!("deck exhausted, reshuffled ({} times)", self.reshuffles);
    }
}
