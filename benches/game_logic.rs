use criterion::{black_box, criterion_group, criterion_main, Criterion};
use mini_tetris::core::{Board, DropOutcome, GameState};
use mini_tetris::engine::Session;
use mini_tetris::types::GameAction;

fn bench_tick(c: &mut Criterion) {
    let mut session = Session::new(12345);

    c.bench_function("session_tick", |b| {
        b.iter(|| {
            if session.is_over() {
                session.restart();
            }
            black_box(session.tick());
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::from_rows(&[
                "..T.......",
                "IIIIIIIIII",
                "IIIIIIIIII",
                "IIIIIIIIII",
                "IIIIIIIIII",
            ]);
            black_box(board.clear_full_rows());
        })
    });
}

fn bench_drop_to_lock(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    game.start();

    c.bench_function("drop_to_lock", |b| {
        b.iter(|| {
            if game.is_over() {
                game.reset(12345);
                game.start();
            }
            while let DropOutcome::Moved = game.soft_drop() {}
        })
    });
}

fn bench_move(c: &mut Criterion) {
    let mut game = GameState::new(12345);
    game.start();

    c.bench_function("move_left_right", |b| {
        b.iter(|| {
            black_box(game.move_left());
            black_box(game.move_right());
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let mut session = Session::new(12345);
    session.apply(GameAction::SoftDrop);
    session.apply(GameAction::SoftDrop);

    c.bench_function("rotate", |b| {
        b.iter(|| {
            black_box(session.apply(GameAction::Rotate));
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_drop_to_lock,
    bench_move,
    bench_rotate
);
criterion_main!(benches);
