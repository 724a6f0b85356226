//! Latched player intent.
//!
//! The input collaborator delivers discrete press/release events; the state
//! machine reads the latched result once per tick. At most one horizontal
//! direction and one rotation direction are held at a time; a later press
//! overwrites the earlier one.

use crate::types::{Button, Shift, Spin};

/// Buffered input state consumed by the game tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Intent {
    shift: Option<Shift>,
    spin: Option<Spin>,
    soft_drop: bool,
    hard_drop: bool,
}

impl Intent {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latch a button press.
    pub fn press(&mut self, button: Button) {
        match button {
            Button::MoveLeft => self.shift = Some(Shift::Left),
            Button::MoveRight => self.shift = Some(Shift::Right),
            Button::RotateCw => self.spin = Some(Spin::Cw),
            Button::RotateCcw => self.spin = Some(Spin::Ccw),
            Button::SoftDrop => self.soft_drop = true,
            Button::HardDrop => self.hard_drop = true,
        }
    }

    /// Clear a latched button on release.
    ///
    /// A horizontal release only clears the latch if that direction is still
    /// the one held, so overlapping left/right presses behave sanely.
    pub fn release(&mut self, button: Button) {
        match button {
            Button::MoveLeft => {
                if self.shift == Some(Shift::Left) {
                    self.shift = None;
                }
            }
            Button::MoveRight => {
                if self.shift == Some(Shift::Right) {
                    self.shift = None;
                }
            }
            Button::RotateCw | Button::RotateCcw => self.spin = None,
            Button::SoftDrop => self.soft_drop = false,
            Button::HardDrop => self.hard_drop = false,
        }
    }

    /// Currently held horizontal direction, if any.
    pub fn shift(&self) -> Option<Shift> {
        self.shift
    }

    /// Consume the pending rotation. Cleared whether or not the rotation
    /// ends up succeeding.
    pub fn take_spin(&mut self) -> Option<Spin> {
        self.spin.take()
    }

    /// Whether soft drop is held.
    pub fn soft_drop(&self) -> bool {
        self.soft_drop
    }

    /// Consume the pending hard-drop request (edge-triggered).
    pub fn take_hard_drop(&mut self) -> bool {
        std::mem::take(&mut self.hard_drop)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn later_horizontal_press_overwrites() {
        let mut intent = Intent::new();
        intent.press(Button::MoveLeft);
        intent.press(Button::MoveRight);
        assert_eq!(intent.shift(), Some(Shift::Right));

        // Releasing the direction that is no longer held changes nothing.
        intent.release(Button::MoveLeft);
        assert_eq!(intent.shift(), Some(Shift::Right));
        intent.release(Button::MoveRight);
        assert_eq!(intent.shift(), None);
    }

    #[test]
    fn spin_is_consumed_once() {
        let mut intent = Intent::new();
        intent.press(Button::RotateCcw);
        assert_eq!(intent.take_spin(), Some(Spin::Ccw));
        assert_eq!(intent.take_spin(), None);
    }

    #[test]
    fn hard_drop_is_edge_triggered() {
        let mut intent = Intent::new();
        intent.press(Button::HardDrop);
        assert!(intent.take_hard_drop());
        assert!(!intent.take_hard_drop());
    }
}
