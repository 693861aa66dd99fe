//! Connection rule tests.
//!
//! These tests run the validator against the bundled board and a few
//! hand-built ones:
//! - Angle and pass-through geometry
//! - Crossing detection with the shared-endpoint exemption
//! - Rule ordering and purity

use rust_metro::board::{Board, LineDefinition, Station, StationType};
use rust_metro::cards::{Card, CardSymbol, Platform};
use rust_metro::core::{LineId, StationId};
use rust_metro::network::{is_valid_angle, NetworkState, Point};
use rust_metro::rules::{can_connect, Rule, Validator};

const JOKER: Card = Card::new(CardSymbol::Joker, Platform::Side);

fn id(n: u32) -> StationId {
    StationId::new(n)
}

fn bundled() -> Board {
    Board::bundled().expect("bundled data should load")
}

/// Test the grid angle examples.
#[test]
fn test_angle_examples() {
    assert!(!is_valid_angle(Point::new(0, 0), Point::new(2, 1)));
    assert!(is_valid_angle(Point::new(0, 0), Point::new(1, 1)));
    assert!(is_valid_angle(Point::new(4, 7), Point::new(4, 0)));
    assert!(is_valid_angle(Point::new(9, 0), Point::new(0, 9)));
}

/// Test that a diagonal running over a station is rejected.
#[test]
fn test_pass_through_on_bundled_board() {
    let board = bundled();
    let mut network = NetworkState::new();
    let line = network.seed_line(LineId::new(1), id(1)).clone();
    let validator = Validator::new(&board, &network);

    // (0,0) -> (2,2) runs over station 5 at (1,1)
    let from = board.station(id(1)).unwrap();
    let to = board.station(id(9)).unwrap();
    assert_eq!(validator.check(&line, JOKER, from, to), Err(Rule::PassThrough));

    // stopping at station 5 itself is fine
    let five = board.station(id(5)).unwrap();
    assert_eq!(validator.check(&line, JOKER, from, five), Ok(()));
}

/// Test the first move options from M1's start with a Joker.
#[test]
fn test_legal_targets_from_start() {
    let board = bundled();
    let mut network = NetworkState::new();
    let line = network.seed_line(LineId::new(1), id(1)).clone();

    let mut targets = Validator::new(&board, &network).legal_targets(&line, JOKER);
    targets.sort();

    // the nearest station along each open direction
    assert_eq!(targets, vec![id(2), id(5), id(19)]);
}

/// Test that a letter card only reaches its own station type.
#[test]
fn test_type_mismatch() {
    let board = bundled();
    let mut network = NetworkState::new();
    let line = network.seed_line(LineId::new(1), id(1)).clone();
    let validator = Validator::new(&board, &network);

    let from = board.station(id(1)).unwrap();
    let five = board.station(id(5)).unwrap();
    assert_eq!(five.station_type, StationType::C);

    let a_card = Card::new(CardSymbol::A, Platform::Center);
    let c_card = Card::new(CardSymbol::C, Platform::Side);
    assert_eq!(validator.check(&line, a_card, from, five), Err(Rule::TypeMismatch));
    assert_eq!(validator.check(&line, c_card, from, five), Ok(()));
}

/// Test that every broken rule is reported, and the first one wins.
#[test]
fn test_violations_in_rule_order() {
    let board = bundled();
    let mut network = NetworkState::new();
    let line = network.seed_line(LineId::new(1), id(1)).clone();
    let validator = Validator::new(&board, &network);

    // station 3 is type D and sits behind station 2
    let from = board.station(id(1)).unwrap();
    let to = board.station(id(3)).unwrap();
    let b_card = Card::new(CardSymbol::B, Platform::Side);

    let violations = validator.violations(&line, b_card, from, to);
    assert_eq!(violations.as_slice(), &[Rule::TypeMismatch, Rule::PassThrough]);
    assert_eq!(validator.check(&line, b_card, from, to), Err(Rule::TypeMismatch));
}

/// Test duplicate and revisit detection.
#[test]
fn test_duplicate_and_revisit() {
    let board = bundled();
    let mut network = NetworkState::new();
    network.seed_line(LineId::new(1), id(1));
    network.connect(LineId::new(1), id(1), id(2));
    network.connect(LineId::new(1), id(2), id(5));
    network.seed_line(LineId::new(2), id(2));

    let validator = Validator::new(&board, &network);

    // another line may not lay the same track again
    let line2 = network.line(LineId::new(2)).unwrap();
    let two = board.station(id(2)).unwrap();
    let one = board.station(id(1)).unwrap();
    assert_eq!(validator.check(line2, JOKER, two, one), Err(Rule::DuplicateSegment));

    // M1 may not return to its own start
    let line1 = network.line(LineId::new(1)).unwrap();
    let five = board.station(id(5)).unwrap();
    assert_eq!(validator.check(line1, JOKER, five, one), Err(Rule::Revisit));
}

/// Board with two diagonals forming an X around an empty centre.
fn x_board() -> Board {
    let s = |n: u32, x: i32, y: i32| Station::new(id(n), x, y, StationType::A, "1");
    Board::new(
        vec![s(1, 0, 0), s(2, 2, 2), s(3, 0, 2), s(4, 2, 0)],
        vec![
            LineDefinition::new(LineId::new(1), "M1", "red", id(1)),
            LineDefinition::new(LineId::new(2), "M2", "blue", id(3)),
        ],
    )
    .unwrap()
}

/// Test the diagonal X crossing and the shared-endpoint exemption.
#[test]
fn test_crossing_examples() {
    let board = x_board();
    let mut network = NetworkState::new();
    network.seed_line(LineId::new(1), id(1));
    network.connect(LineId::new(1), id(1), id(2));
    network.seed_line(LineId::new(2), id(3));

    let line2 = network.line(LineId::new(2)).unwrap();
    let from = board.station(id(3)).unwrap();

    // (0,2) -> (2,0) crosses (0,0) -> (2,2) at (1,1)
    let cross = board.station(id(4)).unwrap();
    assert!(!can_connect(&board, &network, line2, JOKER, from, cross));
    assert_eq!(
        Validator::new(&board, &network).check(line2, JOKER, from, cross),
        Err(Rule::Crossing)
    );

    // (0,2) -> (2,2) only touches M1 at its end station
    let shared = board.station(id(2)).unwrap();
    assert!(can_connect(&board, &network, line2, JOKER, from, shared));
}

/// Test that validation is pure and repeatable.
#[test]
fn test_validation_does_not_mutate() {
    let board = bundled();
    let mut network = NetworkState::new();
    let line = network.seed_line(LineId::new(1), id(1)).clone();
    let before = network.clone();

    let validator = Validator::new(&board, &network);
    let from = board.station(id(1)).unwrap();
    for to in board.stations() {
        let first = validator.check(&line, JOKER, from, to);
        let second = validator.check(&line, JOKER, from, to);
        assert_eq!(first, second);
    }

    assert_eq!(network, before);
}
