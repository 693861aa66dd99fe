//! Cards and the deck.
//!
//! - `Card`: symbol (A-D or Joker) plus platform variant
//! - `Deck`: shuffled pile with automatic reshuffle when exhausted

pub mod card;
pub mod deck;

pub use card::{Card, CardSymbol, Platform};
pub use deck::Deck;
