//! Criterion benchmarks for move validation and lookahead.
//!
//! Benchmarks:
//!   - legal_targets on an empty network and a late-game network
//!   - a full greedy game from a fresh seed
//!   - clone_state for lookahead
//!
//! Run with: cargo bench --bench validator

use std::sync::Arc;

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use rust_metro::board::Board;
use rust_metro::cards::{Card, CardSymbol, Platform};
use rust_metro::core::GameConfig;
use rust_metro::game::MetroGame;
use rust_metro::rules::Validator;

fn play_greedy(game: &mut MetroGame) {
    while !game.phase().is_over() {
        if game.draw_card().is_err() {
            return;
        }
        let moved = match game.legal_targets().first().copied() {
            Some(target) => game
                .snapshot()
                .terminal
                .map(|terminal| game.select_station(terminal).is_ok() && game.attempt_connection(target).is_ok())
                .unwrap_or(false),
            None => false,
        };
        if !moved && game.skip_card().is_err() {
            return;
        }
    }
}

// ---------------------------------------------------------------------------
// Benchmark: legal_targets
// ---------------------------------------------------------------------------

fn bench_legal_targets(c: &mut Criterion) {
    let mut group = c.benchmark_group("legal_targets");
    let board = Arc::new(Board::bundled().expect("bundled data should load"));
    let joker = Card::new(CardSymbol::Joker, Platform::Side);

    let fresh = MetroGame::new(Arc::clone(&board), GameConfig::default());
    group.bench_function("fresh_network", |b| {
        let line = fresh.current_line().expect("first line is seeded");
        let validator = Validator::new(&board, fresh.state().network());
        b.iter(|| black_box(validator.legal_targets(black_box(line), black_box(joker))));
    });

    // Last line of a finished game still sits in the network
    let mut played = MetroGame::new(Arc::clone(&board), GameConfig::default().with_seed(7));
    play_greedy(&mut played);
    group.bench_function("late_network", |b| {
        let network = played.state().network();
        let line = network.lines().last().expect("four lines were played");
        let validator = Validator::new(&board, network);
        b.iter(|| black_box(validator.legal_targets(black_box(line), black_box(joker))));
    });

    group.finish();
}

// ---------------------------------------------------------------------------
// Benchmark: whole games and lookahead copies
// ---------------------------------------------------------------------------

fn bench_game(c: &mut Criterion) {
    let mut group = c.benchmark_group("game");
    let board = Arc::new(Board::bundled().expect("bundled data should load"));

    group.bench_function("greedy_game", |b| {
        let mut seed = 0;
        b.iter(|| {
            seed += 1;
            let mut game = MetroGame::new(Arc::clone(&board), GameConfig::default().with_seed(seed));
            play_greedy(&mut game);
            black_box(game.state().total_score())
        });
    });

    let mut game = MetroGame::new(Arc::clone(&board), GameConfig::default());
    group.bench_function("clone_state", |b| {
        b.iter(|| black_box(game.clone_state()));
    });

    group.finish();
}

criterion_group!(benches, bench_legal_targets, bench_game);
criterion_main!(benches);
