//! Grid integration tests: row clearing, compaction, and their pairing.

use blockfall::core::Grid;
use blockfall::types::{ShapeKind, GRID_COLS, GRID_ROWS};

#[test]
fn new_grid_is_empty() {
    let grid = Grid::new();
    assert!(grid.cells().iter().all(|c| c.is_none()));
    assert_eq!(grid.cells().len(), GRID_COLS as usize * GRID_ROWS as usize);
}

#[test]
fn clear_row_only_touches_that_row() {
    let mut grid = Grid::new();
    grid.fill_row(18, ShapeKind::J);
    grid.fill_row(19, ShapeKind::L);

    grid.clear_row(19);

    assert!((0..GRID_COLS as i8).all(|x| grid.is_free(x, 19)));
    assert!(grid.is_row_full(18));
}

#[test]
fn clearing_an_empty_row_is_a_no_op() {
    let mut grid = Grid::new();
    grid.set(5, 12, Some(ShapeKind::T));

    grid.clear_row(3);

    assert_eq!(grid.get(5, 12), Some(Some(ShapeKind::T)));
    assert!(grid.cells().iter().filter(|c| c.is_some()).count() == 1);
}

#[test]
fn compaction_shifts_everything_above_down_one() {
    let mut grid = Grid::new();
    grid.fill_row(17, ShapeKind::S);
    grid.set(0, 5, Some(ShapeKind::Z));
    grid.fill_row(19, ShapeKind::I);

    grid.clear_row(19);
    grid.shift_down(19);

    // Row 19 now holds what was row 18 (empty), 18 holds old 17, and the
    // sentinel moved from row 5 to row 6.
    assert!((0..GRID_COLS as i8).all(|x| grid.is_free(x, 19)));
    assert!(grid.is_row_full(18));
    assert!(grid.is_free(0, 5));
    assert_eq!(grid.get(0, 6), Some(Some(ShapeKind::Z)));
    // Top row is always empty after a shift.
    assert!((0..GRID_COLS as i8).all(|x| grid.is_free(x, 0)));
}

#[test]
fn clearing_n_rows_shifts_rows_above_topmost_by_n() {
    let mut grid = Grid::new();
    grid.set(4, 10, Some(ShapeKind::O));
    grid.fill_row(15, ShapeKind::I);
    grid.fill_row(18, ShapeKind::I);

    // Pair clear with compaction per row, top-down, the way the game does.
    for y in [15usize, 18] {
        grid.clear_row(y);
        grid.shift_down(y);
    }

    // Two rows were removed above-and-including row 18, so the sentinel at
    // row 10 ends up at row 12 and no full row survives.
    assert_eq!(grid.get(4, 12), Some(Some(ShapeKind::O)));
    assert!((0..GRID_ROWS as usize).all(|y| !grid.is_row_full(y)));
}

#[test]
fn adjacent_full_rows_clear_exactly_once() {
    let mut grid = Grid::new();
    grid.set(2, 16, Some(ShapeKind::T));
    grid.fill_row(18, ShapeKind::J);
    grid.fill_row(19, ShapeKind::L);

    for y in [18usize, 19] {
        grid.clear_row(y);
        grid.shift_down(y);
    }

    // Both rows gone, the lone block above fell by two, nothing else left.
    assert_eq!(grid.get(2, 18), Some(Some(ShapeKind::T)));
    assert_eq!(grid.cells().iter().filter(|c| c.is_some()).count(), 1);
}
