//! The active falling piece: 4 absolute block coordinates plus a shape tag.
//!
//! Movement and rotation follow a check-then-commit pattern: the candidate
//! position is validated in full against the grid before any block is
//! mutated, so a rejected move leaves the piece untouched.

use crate::grid::Grid;
use crate::types::{ShapeKind, Spin};

/// One block of a piece, in absolute grid coordinates.
pub type Block = (i8, i8);

/// Canonical relative layout for a shape.
///
/// Block 0 is the rotation pivot for every shape except O (which is
/// rotation-symmetric and never rotates).
fn layout(kind: ShapeKind) -> [Block; 4] {
    match kind {
        ShapeKind::I => [(1, 0), (0, 0), (2, 0), (3, 0)],
        ShapeKind::J => [(1, 1), (1, 0), (1, 2), (0, 2)],
        ShapeKind::L => [(0, 1), (0, 0), (0, 2), (1, 2)],
        ShapeKind::O => [(0, 0), (1, 0), (0, 1), (1, 1)],
        ShapeKind::S => [(1, 1), (0, 1), (1, 0), (2, 0)],
        ShapeKind::T => [(1, 0), (0, 0), (2, 0), (1, 1)],
        ShapeKind::Z => [(1, 0), (0, 0), (1, 1), (2, 1)],
    }
}

/// An active (not yet locked) piece.
///
/// Invariant: while active, all 4 blocks are inside the grid and on empty
/// cells. Every committed mutation re-establishes this by validating the
/// full candidate first.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Piece {
    kind: ShapeKind,
    blocks: [Block; 4],
}

impl Piece {
    /// Create a piece of the given shape with its canonical layout offset by
    /// the top-left anchor.
    pub fn new(kind: ShapeKind, anchor: (i8, i8)) -> Self {
        let mut blocks = layout(kind);
        for block in &mut blocks {
            block.0 += anchor.0;
            block.1 += anchor.1;
        }
        Self { kind, blocks }
    }

    pub fn kind(&self) -> ShapeKind {
        self.kind
    }

    /// The 4 block coordinates, pivot first (except O).
    pub fn blocks(&self) -> &[Block; 4] {
        &self.blocks
    }

    /// Validate-then-commit translation shared by the three move operations.
    fn try_shift(&mut self, dx: i8, dy: i8, grid: &Grid) -> bool {
        for &(x, y) in &self.blocks {
            if !grid.is_free(x + dx, y + dy) {
                return false;
            }
        }
        for block in &mut self.blocks {
            block.0 += dx;
            block.1 += dy;
        }
        true
    }

    /// Move one row down. Returns `false` (and mutates nothing) if any block
    /// would leave the grid or land on an occupied cell.
    pub fn move_down(&mut self, grid: &Grid) -> bool {
        self.try_shift(0, 1, grid)
    }

    /// Move one column left; no-op on collision.
    pub fn move_left(&mut self, grid: &Grid) -> bool {
        self.try_shift(-1, 0, grid)
    }

    /// Move one column right; no-op on collision.
    pub fn move_right(&mut self, grid: &Grid) -> bool {
        self.try_shift(1, 0, grid)
    }

    /// Rotate 90 degrees about the pivot block.
    ///
    /// The full candidate block set is computed first and committed only if
    /// every block lands on a free cell; a single violation rejects the
    /// whole rotation. There is no kick retry. O is a successful no-op.
    pub fn rotate(&mut self, spin: Spin, grid: &Grid) -> bool {
        if self.kind == ShapeKind::O {
            return true;
        }

        let (px, py) = self.blocks[0];
        let mut candidate = self.blocks;
        for block in &mut candidate[1..] {
            let dx = block.0 - px;
            let dy = block.1 - py;
            let (rx, ry) = match spin {
                Spin::Cw => (dy, -dx),
                Spin::Ccw => (-dy, dx),
            };
            *block = (px + rx, py + ry);
        }

        if candidate.iter().all(|&(x, y)| grid.is_free(x, y)) {
            self.blocks = candidate;
            true
        } else {
            false
        }
    }

    /// Project the resting position of this piece: the block set after
    /// falling as far as the grid allows, without mutating the piece.
    pub fn project_drop(&self, grid: &Grid) -> [Block; 4] {
        let mut fall: i8 = 0;
        loop {
            let can_drop = self
                .blocks
                .iter()
                .all(|&(x, y)| grid.is_free(x, y + fall + 1));
            if !can_drop {
                break;
            }
            fall += 1;
        }
        let mut blocks = self.blocks;
        for block in &mut blocks {
            block.1 += fall;
        }
        blocks
    }

    /// Commit this piece's blocks into the grid, consuming it.
    ///
    /// The piece stops existing as an active entity; its blocks become
    /// frozen grid cells.
    pub fn lock(self, grid: &mut Grid) {
        for &(x, y) in &self.blocks {
            grid.set(x, y, Some(self.kind));
        }
    }
}
