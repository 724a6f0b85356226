//! The tick-driven game state machine.
//!
//! Owns the grid, the active piece, the look-ahead shape, and all timing
//! counters. One call to [`GameState::tick`] advances exactly one fixed tick;
//! the external loop is responsible for converting wall-clock time into
//! ticks. The core performs no I/O and never blocks.
//!
//! States: `Falling` (default) -> `Clearing` (transient, fixed duration) and
//! `Falling` -> `GameOver` (terminal). Illegal moves and rotations are
//! normal no-op outcomes, never errors.

use crate::grid::Grid;
use crate::intent::Intent;
use crate::piece::{Block, Piece};
use crate::rng::ShapeRng;
use crate::types::{
    Button, ShapeKind, Shift, CLEAR_EFFECT_TICKS, FALL_TICKS, GRID_ROWS, MOVE_TICKS,
    SOFT_DROP_TICKS, SPAWN_ANCHOR,
};

/// The three states of the machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// An active piece is falling under gravity.
    Falling,
    /// Full rows are flashing; gameplay is frozen until the countdown ends.
    Clearing,
    /// Terminal. Ticks are no-ops; only a new `GameState` leaves this.
    GameOver,
}

/// Complete game state. Exclusively owns its grid and active piece.
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    active: Piece,
    next: ShapeKind,
    intent: Intent,
    phase: Phase,
    rng: ShapeRng,

    fall_ticker: u32,
    move_ticker: u32,
    soft_drop_ticker: u32,
    /// Countdown for the `Clearing` state; 0 means inactive.
    clear_effect_timer: u32,
    /// Rows pending removal, indexed by row.
    lines_to_clear: [bool; GRID_ROWS as usize],
    /// Projected resting blocks of the active piece, for the renderer.
    ghost: [Block; 4],
}

impl GameState {
    /// Create a new game with the given RNG seed, already in `Falling` with
    /// an active piece and a pre-selected next shape.
    pub fn new(seed: u32) -> Self {
        let mut rng = ShapeRng::new(seed);
        let active = Piece::new(rng.draw(), SPAWN_ANCHOR);
        let next = rng.draw();

        let grid = Grid::new();
        let ghost = active.project_drop(&grid);

        Self {
            grid,
            active,
            next,
            intent: Intent::new(),
            phase: Phase::Falling,
            rng,
            fall_ticker: 0,
            move_ticker: 0,
            soft_drop_ticker: 0,
            clear_effect_timer: 0,
            lines_to_clear: [false; GRID_ROWS as usize],
            ghost,
        }
    }

    /// Build a game from an explicit position, for scenario setup in tests
    /// and benchmarks. The grid must not overlap the active piece.
    pub fn from_position(grid: Grid, active: Piece, next: ShapeKind, seed: u32) -> Self {
        let ghost = active.project_drop(&grid);
        Self {
            grid,
            active,
            next,
            intent: Intent::new(),
            phase: Phase::Falling,
            rng: ShapeRng::new(seed),
            fall_ticker: 0,
            move_ticker: 0,
            soft_drop_ticker: 0,
            clear_effect_timer: 0,
            lines_to_clear: [false; GRID_ROWS as usize],
            ghost,
        }
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == Phase::GameOver
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn next_shape(&self) -> ShapeKind {
        self.next
    }

    /// Projected resting blocks of the active piece (drop preview).
    pub fn ghost(&self) -> &[Block; 4] {
        &self.ghost
    }

    /// Rows currently marked for removal (meaningful while `Clearing`).
    pub fn rows_pending_clear(&self) -> &[bool; GRID_ROWS as usize] {
        &self.lines_to_clear
    }

    /// Remaining ticks of the `Clearing` countdown (0 when inactive).
    pub fn clear_ticks_left(&self) -> u32 {
        self.clear_effect_timer
    }

    /// Latch a button press into the intent buffer.
    pub fn button_down(&mut self, button: Button) {
        self.intent.press(button);
    }

    /// Clear a latched button on release.
    pub fn button_up(&mut self, button: Button) {
        if matches!(button, Button::MoveLeft | Button::MoveRight) {
            self.move_ticker = 0;
        }
        self.intent.release(button);
    }

    /// Advance the simulation by exactly one tick.
    ///
    /// Idempotent after game over.
    pub fn tick(&mut self) {
        if self.phase == Phase::GameOver {
            return;
        }

        self.fall_ticker += 1;
        self.move_ticker += 1;
        self.soft_drop_ticker = (self.soft_drop_ticker + 1) % SOFT_DROP_TICKS;

        if self.phase == Phase::Clearing {
            self.clear_effect_timer -= 1;
            if self.clear_effect_timer == 0 {
                self.apply_line_clears();
                self.phase = Phase::Falling;
            }
            // The active piece stays frozen mid-animation.
            return;
        }

        // Rotation intent is consumed whether or not it succeeds.
        if let Some(spin) = self.intent.take_spin() {
            self.active.rotate(spin, &self.grid);
        }

        if self.soft_drop_ticker == 0 && self.intent.soft_drop() {
            if self.active.move_down(&self.grid) {
                self.fall_ticker = 0;
            }
        }

        if self.intent.take_hard_drop() {
            while self.active.move_down(&self.grid) {}
            self.lock_active();
            return;
        }

        if self.fall_ticker >= FALL_TICKS {
            self.fall_ticker = 0;
            if !self.active.move_down(&self.grid) {
                self.lock_active();
                if self.phase != Phase::Falling {
                    return;
                }
            }
        }

        if self.move_ticker >= MOVE_TICKS {
            self.move_ticker = 0;
            if let Some(shift) = self.intent.shift() {
                match shift {
                    Shift::Left => self.active.move_left(&self.grid),
                    Shift::Right => self.active.move_right(&self.grid),
                };
            }
        }

        self.ghost = self.active.project_drop(&self.grid);
    }

    /// Lock the active piece into the grid and run the post-lock pipeline.
    ///
    /// Single path shared by gravity lock and hard drop, so game-over and
    /// line-clear detection cannot diverge between the two.
    fn lock_active(&mut self) {
        // A block still at the top row at the moment of lock ends the game.
        if self.active.blocks().iter().any(|&(_, y)| y == 0) {
            self.phase = Phase::GameOver;
            return;
        }

        let promoted = Piece::new(self.next, SPAWN_ANCHOR);
        let landed = std::mem::replace(&mut self.active, promoted);
        landed.lock(&mut self.grid);
        self.next = self.rng.draw();
        self.fall_ticker = 0;

        for y in (0..GRID_ROWS as usize).rev() {
            if self.grid.is_row_full(y) {
                self.lines_to_clear[y] = true;
                self.clear_effect_timer = CLEAR_EFFECT_TICKS;
                self.phase = Phase::Clearing;
            }
        }

        self.ghost = self.active.project_drop(&self.grid);
    }

    /// Remove every marked row and compact the field.
    ///
    /// Marked rows are processed top-down: `shift_down` only moves rows
    /// above the cleared one, so marks still pending below are untouched and
    /// each full row is cleared exactly once, adjacent rows included.
    fn apply_line_clears(&mut self) {
        for y in 0..GRID_ROWS as usize {
            if self.lines_to_clear[y] {
                self.grid.clear_row(y);
                self.grid.shift_down(y);
            }
        }
        self.lines_to_clear = [false; GRID_ROWS as usize];
    }
}
