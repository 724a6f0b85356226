//! Playfield grid - a fixed 10x20 store of cells.
//!
//! Flat row-major array for cache locality and zero allocation.
//! Coordinates: (x, y) with x in 0..10 (left to right) and y in 0..20
//! (top to bottom).
//!
//! All access is bounds-checked through `Option`/`bool` returns, so an
//! out-of-range coordinate from a caller bug surfaces as a miss rather than
//! undefined behavior.

use crate::types::{Cell, ShapeKind, GRID_COLS, GRID_ROWS};

/// Total number of cells in the playfield.
const GRID_SIZE: usize = (GRID_COLS as usize) * (GRID_ROWS as usize);

/// The playfield: 10 columns x 20 rows of cells.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// Row-major cell storage (`y * GRID_COLS + x`).
    cells: [Cell; GRID_SIZE],
}

impl Grid {
    /// Create an empty grid.
    pub fn new() -> Self {
        Self {
            cells: [None; GRID_SIZE],
        }
    }

    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= GRID_COLS as i8 || y < 0 || y >= GRID_ROWS as i8 {
            return None;
        }
        Some((y as usize) * (GRID_COLS as usize) + (x as usize))
    }

    /// Cell at (x, y), or `None` if the coordinate is out of bounds.
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|i| self.cells[i])
    }

    /// Write a cell at (x, y). Returns `false` if out of bounds.
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// True iff (x, y) is inside the grid and empty.
    ///
    /// This is the collision predicate used by piece movement and rotation:
    /// outside the grid counts as blocked.
    pub fn is_free(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// True iff (x, y) is inside the grid and holds a locked block.
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// True iff every cell of row `y` is occupied.
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= GRID_ROWS as usize {
            return false;
        }
        let start = y * GRID_COLS as usize;
        self.cells[start..start + GRID_COLS as usize]
            .iter()
            .all(|cell| cell.is_some())
    }

    /// Empty every cell of row `y`. Idempotent; no other row is touched.
    pub fn clear_row(&mut self, y: usize) {
        if y >= GRID_ROWS as usize {
            return;
        }
        let start = y * GRID_COLS as usize;
        for cell in &mut self.cells[start..start + GRID_COLS as usize] {
            *cell = None;
        }
    }

    /// Shift every row above `y` down by one: row y becomes a copy of row
    /// y-1, and so on up to row 0, which becomes empty.
    ///
    /// Pure data movement with no collision checks; callers pair this with
    /// [`Grid::clear_row`] to compact the field after a clear.
    pub fn shift_down(&mut self, y: usize) {
        if y >= GRID_ROWS as usize {
            return;
        }
        let width = GRID_COLS as usize;
        // copy_within handles the overlapping ranges without allocation.
        for row in (1..=y).rev() {
            let src = (row - 1) * width;
            let dst = row * width;
            self.cells.copy_within(src..src + width, dst);
        }
        for cell in &mut self.cells[0..width] {
            *cell = None;
        }
    }

    /// Flat view of the cell storage (row-major), for rendering.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Fill an entire row with the given shape. Convenience for scenario
    /// setup in tests and benchmarks.
    pub fn fill_row(&mut self, y: usize, kind: ShapeKind) {
        for x in 0..GRID_COLS as i8 {
            self.set(x, y as i8, Some(kind));
        }
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn index_maps_row_major() {
        assert_eq!(Grid::index(0, 0), Some(0));
        assert_eq!(Grid::index(9, 0), Some(9));
        assert_eq!(Grid::index(0, 1), Some(10));
        assert_eq!(Grid::index(9, 19), Some(199));
        assert_eq!(Grid::index(-1, 0), None);
        assert_eq!(Grid::index(10, 0), None);
        assert_eq!(Grid::index(0, 20), None);
    }

    #[test]
    fn out_of_bounds_access_is_a_miss() {
        let mut grid = Grid::new();
        assert_eq!(grid.get(10, 0), None);
        assert_eq!(grid.get(0, 20), None);
        assert!(!grid.set(-1, 5, Some(ShapeKind::T)));
        assert!(!grid.is_free(-1, 0));
        assert!(!grid.is_occupied(0, 20));
    }

    #[test]
    fn set_then_get_roundtrip() {
        let mut grid = Grid::new();
        assert!(grid.set(4, 7, Some(ShapeKind::S)));
        assert_eq!(grid.get(4, 7), Some(Some(ShapeKind::S)));
        assert!(grid.is_occupied(4, 7));
        assert!(!grid.is_free(4, 7));
    }

    #[test]
    fn row_full_detection() {
        let mut grid = Grid::new();
        assert!(!grid.is_row_full(19));
        grid.fill_row(19, ShapeKind::I);
        assert!(grid.is_row_full(19));
        grid.set(3, 19, None);
        assert!(!grid.is_row_full(19));
        // Out of range is never "full".
        assert!(!grid.is_row_full(20));
    }

    #[test]
    fn clear_row_is_idempotent() {
        let mut grid = Grid::new();
        grid.fill_row(10, ShapeKind::Z);
        grid.clear_row(10);
        assert!((0..10).all(|x| grid.is_free(x, 10)));
        grid.clear_row(10);
        assert!((0..10).all(|x| grid.is_free(x, 10)));
    }

    #[test]
    fn shift_down_moves_rows_and_empties_top() {
        let mut grid = Grid::new();
        grid.set(2, 4, Some(ShapeKind::J));
        grid.set(7, 0, Some(ShapeKind::L));

        grid.shift_down(5);

        assert!(grid.is_free(2, 4));
        assert_eq!(grid.get(2, 5), Some(Some(ShapeKind::J)));
        assert!(grid.is_free(7, 0));
        assert_eq!(grid.get(7, 1), Some(Some(ShapeKind::L)));
    }
}
