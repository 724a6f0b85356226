//! Shared types and constants for the blockfall workspace.
//!
//! Pure data with no dependencies, usable from the core rules engine, the
//! input mapper, and the terminal renderer alike.
//!
//! # Playfield
//!
//! - **Width**: 10 columns (indexed 0-9, left to right)
//! - **Height**: 20 rows (indexed 0-19, top to bottom)
//! - **Spawn anchor**: (3, 0), column-centered at the top row
//!
//! # Timing
//!
//! The game advances in fixed ticks of ~16.7ms (60 Hz). All gameplay timing
//! is expressed in whole ticks:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `TICK_MICROS` | 16667 | Fixed tick duration in microseconds |
//! | `FALL_TICKS` | 30 | Gravity period (one row per ~0.5s) |
//! | `MOVE_TICKS` | 6 | Horizontal auto-move period while held |
//! | `SOFT_DROP_TICKS` | 2 | Soft-drop sub-tick period |
//! | `CLEAR_EFFECT_TICKS` | 18 | Line-clear flash duration |

/// Playfield width in cells (10 columns).
pub const GRID_COLS: u8 = 10;

/// Playfield height in cells (20 rows).
pub const GRID_ROWS: u8 = 20;

/// Fixed tick duration in microseconds (~60 Hz).
pub const TICK_MICROS: u64 = 16_667;

/// Gravity period: the active piece falls one row every `FALL_TICKS` ticks.
pub const FALL_TICKS: u32 = 30;

/// Horizontal move period: a held direction moves the piece every `MOVE_TICKS` ticks.
pub const MOVE_TICKS: u32 = 6;

/// Soft-drop sub-tick period: held soft drop advances the piece every
/// `SOFT_DROP_TICKS` ticks.
pub const SOFT_DROP_TICKS: u32 = 2;

/// Duration of the `Clearing` state in ticks (marked rows flash, then drop).
pub const CLEAR_EFFECT_TICKS: u32 = 18;

/// Spawn anchor for freshly promoted pieces: column-centered, top row.
pub const SPAWN_ANCHOR: (i8, i8) = (GRID_COLS as i8 / 2 - 2, 0);

/// The seven tetromino shapes.
///
/// Each shape has a fixed 4-block layout; every shape except O rotates about
/// a pivot block.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl ShapeKind {
    /// All seven shapes, in a fixed order usable for uniform selection.
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::J,
        ShapeKind::L,
        ShapeKind::O,
        ShapeKind::S,
        ShapeKind::T,
        ShapeKind::Z,
    ];
}

/// A cell of the playfield grid.
///
/// - `None`: empty
/// - `Some(ShapeKind)`: occupied by a locked block of that shape
pub type Cell = Option<ShapeKind>;

/// Horizontal movement direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shift {
    Left,
    Right,
}

/// Rotation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Spin {
    Cw,
    Ccw,
}

/// Logical player buttons, the boundary between the input collaborator and
/// the core.
///
/// The input layer maps raw key events onto these; the core latches them
/// into its intent state on press and clears them on release.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Button {
    MoveLeft,
    MoveRight,
    RotateCw,
    RotateCcw,
    SoftDrop,
    HardDrop,
}
