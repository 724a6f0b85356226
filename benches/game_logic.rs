use criterion::{criterion_group, criterion_main, Criterion};

use blockfall::core::{GameState, Grid, Piece};
use blockfall::types::{Button, ShapeKind, SPAWN_ANCHOR};

fn bench_tick(c: &mut Criterion) {
    let mut game = GameState::new(12345);

    c.bench_function("game_tick", |b| {
        b.iter(|| {
            game.tick();
        })
    });
}

fn bench_hard_drop_cycle(c: &mut Criterion) {
    c.bench_function("hard_drop_cycle", |b| {
        b.iter(|| {
            let mut game = GameState::new(12345);
            // Eight pieces dropped straight down, each locking in one tick.
            for _ in 0..8 {
                game.button_down(Button::HardDrop);
                game.tick();
            }
        })
    });
}

fn bench_line_clear(c: &mut Criterion) {
    c.bench_function("clear_and_compact_row", |b| {
        b.iter(|| {
            let mut grid = Grid::new();
            grid.fill_row(19, ShapeKind::I);
            grid.clear_row(19);
            grid.shift_down(19);
        })
    });
}

fn bench_ghost_projection(c: &mut Criterion) {
    let grid = Grid::new();
    let piece = Piece::new(ShapeKind::T, SPAWN_ANCHOR);

    c.bench_function("project_drop", |b| {
        b.iter(|| {
            piece.project_drop(&grid);
        })
    });
}

criterion_group!(
    benches,
    bench_tick,
    bench_hard_drop_cycle,
    bench_line_clear,
    bench_ghost_projection
);
criterion_main!(benches);
