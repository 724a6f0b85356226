//! Rules engine for blockfall - pure, deterministic, and testable.
//!
//! No I/O, no clocks, no threads: the embedding loop converts wall-clock
//! time into whole ticks and calls [`GameState::tick`] once per tick. The
//! renderer and input collaborators only read committed state between ticks.
//!
//! # Module structure
//!
//! - [`grid`]: the 10x20 playfield with row clearing and compaction
//! - [`piece`]: the active piece, collision-checked movement and rotation
//! - [`intent`]: latched player input consumed by the tick
//! - [`rng`]: uniform shape selection
//! - [`game`]: the falling / clearing / game-over state machine
//!
//! # Example
//!
//! ```
//! use blockfall_core::{GameState, Phase};
//! use blockfall_core::types::Button;
//!
//! let mut game = GameState::new(12345);
//! game.button_down(Button::MoveLeft);
//! game.tick();
//! assert_ne!(game.phase(), Phase::GameOver);
//! ```

pub mod game;
pub mod grid;
pub mod intent;
pub mod piece;
pub mod rng;

pub use blockfall_types as types;

pub use game::{GameState, Phase};
pub use grid::Grid;
pub use intent::Intent;
pub use piece::{Block, Piece};
pub use rng::ShapeRng;
