//! Terminal input module (core-facing).
//!
//! Maps `crossterm` key events onto the logical [`Button`]s the core
//! latches, and provides a key latch that synthesizes release events for
//! terminals that never emit them. Contains no game rules.
//!
//! [`Button`]: blockfall_types::Button

pub mod latch;
pub mod map;

pub use blockfall_types as types;

pub use latch::KeyLatch;
pub use map::{map_key, should_quit};
