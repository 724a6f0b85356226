//! Terminal rendering for blockfall.
//!
//! Split in two layers: [`GameView`] is a pure projection of game state into
//! a [`Frame`], and [`TerminalRenderer`] flushes frames to the terminal with
//! diff-based redraws. Only the renderer touches I/O.

pub mod frame;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use frame::{Emphasis, Frame, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
