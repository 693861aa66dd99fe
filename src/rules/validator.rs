//! Connection validation.
//!
//! A proposed move joins the current line's terminal `from` to a station
//! `to`. It is legal only if all six rules hold:
//!
//! 1. **Type match**: the card is a Joker or names `to`'s type
//! 2. **Angle**: the move is horizontal, vertical or exactly diagonal
//! 3. **No duplicate**: no line already joins the two stations
//! 4. **No revisit**: `to` is not already on the current line
//! 5. **No crossing**: the move crosses no existing segment, except at a
//!    shared station
//! 6. **No pass-through**: no other station lies on the move
//!
//! Validation is pure: it reads the board and network and never mutates
//! them, so asking twice gives the same answer.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use crate::board::{Board, Station};
use crate::cards::Card;
use crate::core::StationId;
use crate::network::{is_valid_angle, lies_strictly_between, segments_cross, Line, NetworkState, Segment};

/// The rule a rejected move broke.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Rule {
    TypeMismatch,
    InvalidAngle,
    DuplicateSegment,
    Revisit,
    Crossing,
    PassThrough,
}

impl Rule {
    /// All rules, in the order they are checked.
    pub const ALL: [Rule; 6] = [
        Rule::TypeMismatch,
        Rule::InvalidAngle,
        Rule::DuplicateSegment,
        Rule::Revisit,
        Rule::Crossing,
        Rule::PassThrough,
    ];

    /// Human-readable reason for the presentation layer.
    #[must_use]
    pub fn reason(self) -> &'static str {
        match self {
            Rule::TypeMismatch => "the card does not match the station type",
            Rule::InvalidAngle => "lines must run horizontally, vertically or at 45 degrees",
            Rule::DuplicateSegment => "these stations are already connected",
            Rule::Revisit => "the line already visits this station",
            Rule::Crossing => "the track crosses an existing line",
            Rule::PassThrough => "the track passes through another station",
        }
    }
}

impl std::fmt::Display for Rule {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.reason())
    }
}

/// Checks candidate moves against a board and the network built so far.
///
/// ## Example
///
/// ```
/// use rust_metro::board::{Board, LineDefinition, Station, StationType};
/// use rust_metro::cards::{Card, CardSymbol, Platform};
/// use rust_metro::core::{LineId, StationId};
/// use rust_metro::network::NetworkState;
/// use rust_metro::rules::{Rule, Validator};
///
/// let board = Board::new(
///     vec![
///         Station::new(StationId::new(1), 0, 0, StationType::A, "1"),
///         Station::new(StationId::new(2), 1, 1, StationType::B, "1"),
///         Station::new(StationId::new(3), 2, 1, StationType::B, "1"),
///     ],
///     vec![LineDefinition::new(LineId::new(1), "M1", "red", StationId::new(1))],
/// )
/// .unwrap();
///
/// let mut network = NetworkState::new();
/// let line = network.seed_line(LineId::new(1), StationId::new(1)).clone();
/// let validator = Validator::new(&board, &network);
/// let card = Card::new(CardSymbol::B, Platform::Side);
///
/// let from = board.station(StationId::new(1)).unwrap();
/// assert!(validator.can_connect(&line, card, from, board.station(StationId::new(2)).unwrap()));
/// assert_eq!(
///     validator.check(&line, card, from, board.station(StationId::new(3)).unwrap()),
///     Err(Rule::InvalidAngle)
/// );
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Validator<'a> {
    board: &'a Board,
    network: &'a NetworkState,
}

impl<'a> Validator<'a> {
    #[must_use]
    pub fn new(board: &'a Board, network: &'a NetworkState) -> Self {
        Self { board, network }
    }

    /// First broken rule, in `Rule::ALL` order.
    pub fn check(&self, line: &Line, card: Card, from: &Station, to: &Station) -> Result<(), Rule> {
        match Rule::ALL.into_iter().find(|&rule| self.breaks(rule, line, card, from, to)) {
            Some(rule) => Err(rule),
            None => Ok(()),
        }
    }

    #[must_use]
    pub fn can_connect(&self, line: &Line, card: Card, from: &Station, to: &Station) -> bool {
        self.check(line, card, from, to).is_ok()
    }

    /// Every broken rule, not just the first.
    #[must_use]
    pub fn violations(&self, line: &Line, card: Card, from: &Station, to: &Station) -> SmallVec<[Rule; 6]> {
        Rule::ALL
            .into_iter()
            .filter(|&rule| self.breaks(rule, line, card, from, to))
            .collect()
    }

    /// Stations the card could extend the line to from its terminal.
    #[must_use]
    pub fn legal_targets(&self, line: &Line, card: Card) -> Vec<StationId> {
        let Some(from) = self.board.station(line.terminal()) else {
            return Vec::new();
        };

        self.board
            .stations()
            .filter(|to| self.can_connect(line, card, from, to))
            .map(|to| to.id)
            .collect()
    }

    fn breaks(&self, rule: Rule, line: &Line, card: Card, from: &Station, to: &Station) -> bool {
        match rule {
            Rule::TypeMismatch => !card.matches(to.station_type),
            Rule::InvalidAngle => !is_valid_angle(from.position(), to.position()),
            Rule::DuplicateSegment => self.network.contains_segment(from.id, to.id),
            Rule::Revisit => line.contains(to.id),
            Rule::Crossing => self.would_cross(from, to),
            Rule::PassThrough => self.passes_through(from, to),
        }
    }

    /// Whether `from-to` strictly crosses any existing segment.
    #[must_use]
    pub fn would_cross(&self, from: &Station, to: &Station) -> bool {
        let candidate = Segment::new(from.id, to.id);

        self.network.segments().any(|segment| {
            if segment.shares_endpoint(&candidate) {
                return false;
            }
            let (Some(a), Some(b)) = (self.board.station(segment.from), self.board.station(segment.to)) else {
                return false;
            };
            segments_cross(from.position(), to.position(), a.position(), b.position())
        })
    }

    /// Whether another station sits on `from-to`.
    #[must_use]
    pub fn passes_through(&self, from: &Station, to: &Station) -> bool {
        self.board
            .stations()
            .filter(|station| station.id != from.id && station.id != to.id)
            .any(|station| lies_strictly_between(from.position(), to.position(), station.position()))
    }
}

/// One-shot form of [`Validator::can_connect`].
#[must_use]
pub fn can_connect(
    board: &Board,
    network: &NetworkState,
    line: &Line,
    card: Card,
    from: &Station,
    to: &Station,
) -> bool {
    Validator::new(board, network).can_connect(line, card, from, to)
}
