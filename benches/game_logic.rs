use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::rngs::StdRng;
use rand::SeedableRng;

use blockfall::core::{get_shape, rotate, Board, GameState, Piece};
use blockfall::types::{GameAction, Rgb, ShapeKind};

fn bench_tick(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut now = 0u64;

    c.bench_function("game_tick_16ms", |b| {
        b.iter(|| {
            now += 16;
            if state.game_over() {
                state = GameState::new(12345);
                now = 0;
            }
            state.tick(black_box(now));
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    let color = Rgb::new(0, 200, 200);

    c.bench_function("clear_4_lines", |b| {
        b.iter(|| {
            let mut board = Board::new();
            for y in 16..20 {
                board.fill_row(y, color);
            }
            black_box(board.clear_lines());
        })
    });
}

fn bench_collision(c: &mut Criterion) {
    let mut board = Board::new();
    for y in 10..20 {
        board.fill_row(y, Rgb::new(90, 90, 90));
    }
    let piece = Piece::new(ShapeKind::T, Rgb::new(200, 0, 200));

    c.bench_function("check_collision", |b| {
        b.iter(|| board.check_collision(black_box(&piece), 0, black_box(8), None))
    });
}

fn bench_new_piece(c: &mut Criterion) {
    let mut rng = StdRng::seed_from_u64(12345);

    c.bench_function("random_piece", |b| b.iter(|| Piece::random(&mut rng)));
}

fn bench_move_piece(c: &mut Criterion) {
    let mut state = GameState::new(12345);
    let mut dx = 1;

    c.bench_function("move_piece", |b| {
        b.iter(|| {
            if !state.move_piece(dx, 0) {
                dx = -dx;
            }
        })
    });
}

fn bench_rotate(c: &mut Criterion) {
    let t = get_shape(ShapeKind::T);
    c.bench_function("rotate_shape", |b| b.iter(|| rotate(black_box(&t))));

    let mut state = GameState::new(12345);
    state.apply_action(GameAction::SoftDrop);
    c.bench_function("rotate_piece", |b| b.iter(|| state.rotate_piece()));
}

fn bench_hard_drop_game(c: &mut Criterion) {
    c.bench_function("hard_drop_until_game_over", |b| {
        b.iter(|| {
            let mut state = GameState::new(black_box(7));
            while !state.game_over() {
                state.apply_action(GameAction::HardDrop);
            }
            state.score()
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_line_clear,
    bench_collision,
    bench_new_piece,
    bench_move_piece,
    bench_rotate,
    bench_hard_drop_game
);
criterion_main!(benches);
