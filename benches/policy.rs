//! Opponent policy micro-benchmarks.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use deskplay::core::GameRng;
use deskplay::games::tictactoe::{Board, Mark, MovePolicy, OnePlyPolicy, RandomPolicy};

/// A typical mid-game position: four marks down, no line finished.
fn mid_game_board() -> Board {
    let mut cells = [None; 9];
    cells[0] = Some(Mark::X);
    cells[4] = Some(Mark::O);
    cells[8] = Some(Mark::X);
    cells[2] = Some(Mark::O);
    Board::from_cells(cells)
}

fn bench_policies(c: &mut Criterion) {
    let board = mid_game_board();

    c.bench_function("one_ply_policy_mid_game", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| OnePlyPolicy.choose_move(black_box(&board), Mark::O, &mut rng))
    });

    c.bench_function("random_policy_mid_game", |b| {
        let mut rng = GameRng::new(42);
        b.iter(|| RandomPolicy.choose_move(black_box(&board), Mark::O, &mut rng))
    });
}

criterion_group!(benches, bench_policies);
criterion_main!(benches);
