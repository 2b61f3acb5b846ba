use criterion::{Criterion, SamplingMode, criterion_group, criterion_main};
use std::hint::black_box;
use std::time::Duration;
use arcade_common::games::tictactoe::{Difficulty, MEDIUM_MISTAKE_THRESHOLD, best_move, select_move};
use arcade_common::games::{Board, Geometry, Mark, SessionRng};

fn board_after(moves: &[(usize, Mark)]) -> Board {
    let mut board = Board::new(Geometry::TicTacToe);
    for &(index, mark) in moves {
        if board.apply_move(index, mark).is_err() {
            panic!("bench position has an illegal move at {}", index);
        }
    }
    board
}

fn bench_minimax_empty_board() {
    let board = Board::new(Geometry::TicTacToe);
    let _ = black_box(best_move(&board, Mark::X));
}

fn bench_minimax_after_opening() {
    let board = board_after(&[(4, Mark::X)]);
    let _ = black_box(best_move(&board, Mark::O));
}

fn bench_minimax_mid_game() {
    let board = board_after(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
    let _ = black_box(best_move(&board, Mark::O));
}

fn bench_hard_self_play() {
    let mut board = Board::new(Geometry::TicTacToe);
    let mut mark = Mark::X;
    let mut session_rng = SessionRng::new(1);
    while !board.outcome().is_over() {
        let Ok(index) = select_move(&board, mark, Difficulty::Hard, MEDIUM_MISTAKE_THRESHOLD, &mut session_rng) else {
            break;
        };
        if board.apply_move(index, mark).is_err() {
            break;
        }
        mark = mark.opponent().unwrap_or(Mark::X);
    }
}

fn minimax_bench(c: &mut Criterion) {
    let mut group = c.benchmark_group("minimax");

    group
        .sampling_mode(SamplingMode::Flat)
        .sample_size(10)
        .measurement_time(Duration::from_secs(30));

    group.bench_function("empty_board", |b| {
        b.iter(bench_minimax_empty_board)
    });

    group.bench_function("after_center_opening", |b| {
        b.iter(bench_minimax_after_opening)
    });

    group.bench_function("mid_game", |b| {
        b.iter(bench_minimax_mid_game)
    });

    group.bench_function("hard_self_play", |b| {
        b.iter(bench_hard_self_play)
    });

    group.finish();
}

criterion_group!(benches, minimax_bench);
criterion_main!(benches);
