//! Game state and its observable views.
//!
//! ## GameState
//!
//! Everything that changes during play:
//! - Network of lines built so far
//! - Deck, current card and selected station
//! - Round progress and finished round records
//! - Running total and, once the game ends, the junction bonus
//!
//! ## GameSnapshot / GameSummary
//!
//! Serializable read-only views handed to the presentation layer after
//! every action and at game end.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, Deck};
use crate::core::{GameRng, LineId, StationId};
use crate::network::NetworkState;
use crate::rules::RoundScore;

/// Where the state machine is waiting.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No card in hand; the player must draw.
    AwaitingCard,
    /// A card is in hand; the player must select the line's terminal.
    AwaitingStationSelection,
    /// The terminal is selected; the player picks a target station.
    AwaitingConnectionTarget,
    /// Every line has been played. Terminal.
    GameComplete,
}

impl Phase {
    #[must_use]
    pub fn is_over(self) -> bool {
        self == Phase::GameComplete
    }
}

/// Score of one finished round. Immutable once created.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundRecord {
    /// The line played in this round.
    pub line: LineId,
    /// Round score.
    pub score: u32,
    /// How the score was made up.
    pub breakdown: RoundScore,
}

/// Mutable state of one game.
///
/// Owned exclusively by `MetroGame`, which is the only thing that mutates
/// it. Uses `im` collections so cloning for a snapshot or lookahead is cheap.
#[derive(Clone, Debug)]
pub struct GameState {
    pub(super) network: NetworkState,
    pub(super) deck: Deck,
    pub(super) phase: Phase,
    pub(super) current_line_index: usize,
    pub(super) cards_drawn_in_round: u32,
    pub(super) current_card: Option<Card>,
    pub(super) selected_station: Option<StationId>,
    pub(super) round_records: Vector<RoundRecord>,
    pub(super) total_score: u32,
    pub(super) junction_bonus: Option<u32>,
}

impl GameState {
    pub(super) fn new(rng: GameRng) -> Self {
        Self {
            network: NetworkState::new(),
            deck: Deck::new(rng),
            phase: Phase::AwaitingCard,
            current_line_index: 0,
            cards_drawn_in_round: 0,
            current_card: None,
            selected_station: None,
            round_records: Vector::new(),
            total_score: 0,
            junction_bonus: None,
        }
    }

    #[must_use]
    pub fn network(&self) -> &NetworkState {
        &self.network
    }

    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Index into the board's line list of the line being built.
    #[must_use]
    pub fn current_line_index(&self) -> usize {
        self.current_line_index
    }

    #[must_use]
    pub fn cards_drawn_in_round(&self) -> u32 {
        self.cards_drawn_in_round
    }

    #[must_use]
    pub fn current_card(&self) -> Option<Card> {
        self.current_card
    }

    #[must_use]
    pub fn selected_station(&self) -> Option<StationId> {
        self.selected_station
    }

    #[must_use]
    pub fn round_records(&self) -> &Vector<RoundRecord> {
        &self.round_records
    }

    /// Sum of round scores, plus the junction bonus once the game is over.
    #[must_use]
    pub fn total_score(&self) -> u32 {
        self.total_score
    }

    /// Set only when the game is complete.
    #[must_use]
    pub fn junction_bonus(&self) -> Option<u32> {
        self.junction_bonus
    }
}

/// What the presentation layer needs to render the game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub phase: Phase,
    /// Line being built; `None` once the game is complete.
    pub line: Option<LineId>,
    pub line_name: Option<String>,
    pub line_color: Option<String>,
    /// The line's current end station.
    pub terminal: Option<StationId>,
    pub cards_drawn: u32,
    pub max_cards: u32,
    pub current_card: Option<Card>,
    pub selected_station: Option<StationId>,
    pub deck_remaining: usize,
    pub round_records: Vec<RoundRecord>,
    pub total_score: u32,
    pub junction_bonus: Option<u32>,
}

/// One row of the end-of-game report.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct RoundSummary {
    pub line: LineId,
    pub name: String,
    pub score: u32,
}

/// Final report: per-line scores, junction bonus and total.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSummary {
    pub rounds: Vec<RoundSummary>,
    pub junction_bonus: u32,
    pub total: u32,
}
