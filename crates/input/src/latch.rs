//! Key latch with synthetic releases for terminals without key-up events.
//!
//! The core keeps movement and soft drop latched while a button is held, so
//! it needs a release to stop. Terminals running the kitty keyboard protocol
//! deliver real release events; plain terminals only deliver repeats. The
//! latch ages every held button and synthesizes a release once no press has
//! been seen for the timeout, which makes a single tap behave like a tap
//! instead of an endless hold.

use std::time::Duration;

use arrayvec::ArrayVec;

use crate::types::Button;

/// Without key-release events, a short timeout prevents a single tap from
/// turning into a sustained hold.
const DEFAULT_RELEASE_TIMEOUT: Duration = Duration::from_millis(150);

#[derive(Debug, Clone, Copy)]
struct Held {
    button: Button,
    age: Duration,
}

/// Tracks held buttons and synthesizes releases after a timeout.
#[derive(Debug, Clone)]
pub struct KeyLatch {
    held: ArrayVec<Held, 6>,
    release_timeout: Duration,
}

impl KeyLatch {
    pub fn new() -> Self {
        Self::with_timeout(DEFAULT_RELEASE_TIMEOUT)
    }

    pub fn with_timeout(release_timeout: Duration) -> Self {
        Self {
            held: ArrayVec::new(),
            release_timeout,
        }
    }

    /// Record a press (or terminal auto-repeat). Returns `true` if this is a
    /// fresh press the game should latch; repeats while held return `false`
    /// but still refresh the hold.
    pub fn press(&mut self, button: Button) -> bool {
        if let Some(held) = self.held.iter_mut().find(|h| h.button == button) {
            held.age = Duration::ZERO;
            return false;
        }
        // Capacity equals the number of distinct buttons, so this cannot
        // overflow.
        self.held.push(Held {
            button,
            age: Duration::ZERO,
        });
        true
    }

    /// Record a real release event. Returns `true` if the button was held.
    pub fn release(&mut self, button: Button) -> bool {
        let before = self.held.len();
        self.held.retain(|h| h.button != button);
        self.held.len() != before
    }

    /// Age held buttons by `elapsed` and return the buttons whose hold has
    /// timed out; the caller forwards these to the game as releases.
    pub fn tick(&mut self, elapsed: Duration) -> ArrayVec<Button, 6> {
        let mut released = ArrayVec::new();
        for held in &mut self.held {
            held.age += elapsed;
        }
        let timeout = self.release_timeout;
        self.held.retain(|h| {
            if h.age >= timeout {
                released.push(h.button);
                false
            } else {
                true
            }
        });
        released
    }
}

impl Default for KeyLatch {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fresh_press_latches_repeat_does_not() {
        let mut latch = KeyLatch::new();
        assert!(latch.press(Button::MoveLeft));
        assert!(!latch.press(Button::MoveLeft));
        assert!(latch.press(Button::SoftDrop));
    }

    #[test]
    fn real_release_clears_hold() {
        let mut latch = KeyLatch::new();
        latch.press(Button::MoveRight);
        assert!(latch.release(Button::MoveRight));
        assert!(!latch.release(Button::MoveRight));
        // Held again afterwards counts as a fresh press.
        assert!(latch.press(Button::MoveRight));
    }

    #[test]
    fn hold_times_out_into_synthetic_release() {
        let mut latch = KeyLatch::with_timeout(Duration::from_millis(100));
        latch.press(Button::SoftDrop);

        let released = latch.tick(Duration::from_millis(50));
        assert!(released.is_empty());

        let released = latch.tick(Duration::from_millis(60));
        assert_eq!(released.as_slice(), &[Button::SoftDrop]);

        // Nothing left to release.
        assert!(latch.tick(Duration::from_millis(200)).is_empty());
    }

    #[test]
    fn repeat_refreshes_the_hold() {
        let mut latch = KeyLatch::with_timeout(Duration::from_millis(100));
        latch.press(Button::MoveLeft);
        latch.tick(Duration::from_millis(80));
        latch.press(Button::MoveLeft);
        // The repeat reset the age, so this does not time out yet.
        assert!(latch.tick(Duration::from_millis(80)).is_empty());
        assert_eq!(
            latch.tick(Duration::from_millis(30)).as_slice(),
            &[Button::MoveLeft]
        );
    }
}
