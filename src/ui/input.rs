//! Held-key tracking for the two rotation controls
//!
//! Terminals that report key releases give exact held state. Legacy terminals
//! only send presses and auto-repeats, so a key there counts as held for a
//! short window after its most recent event.

use std::time::{Duration, Instant};

use crossterm::event::KeyEventKind;

use crate::sim::RotateDirection;

/// How long a key stays held after its last press/repeat without release events
pub const HOLD_WINDOW: Duration = Duration::from_millis(350);

/// The two rotation controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, Default)]
struct HeldKey {
    down: bool,
    last_event: Option<Instant>,
}

/// Held state of the rotation keys
#[derive(Debug, Clone)]
pub struct KeyState {
    left: HeldKey,
    right: HeldKey,
    /// Whether the terminal sends release events
    releases_reported: bool,
    hold_window: Duration,
}

impl KeyState {
    pub fn new(releases_reported: bool) -> Self {
        Self {
            left: HeldKey::default(),
            right: HeldKey::default(),
            releases_reported,
            hold_window: HOLD_WINDOW,
        }
    }

    fn slot(&mut self, key: Key) -> &mut HeldKey {
        match key {
            Key::Left => &mut self.left,
            Key::Right => &mut self.right,
        }
    }

    /// Record a key event
    pub fn apply(&mut self, key: Key, kind: KeyEventKind, now: Instant) {
        let slot = self.slot(key);
        match kind {
            KeyEventKind::Press | KeyEventKind::Repeat => {
                slot.down = true;
                slot.last_event = Some(now);
            }
            KeyEventKind::Release => {
                slot.down = false;
                slot.last_event = None;
            }
        }
    }

    pub fn is_held(&self, key: Key, now: Instant) -> bool {
        let slot = match key {
            Key::Left => &self.left,
            Key::Right => &self.right,
        };
        if self.releases_reported {
            return slot.down;
        }
        slot.last_event
            .is_some_and(|t| now.saturating_duration_since(t) < self.hold_window)
    }

    /// Rotation for the frame at `now`
    pub fn rotation(&self, now: Instant) -> RotateDirection {
        RotateDirection::from_keys(self.is_held(Key::Left, now), self.is_held(Key::Right, now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_events() {
        let t0 = Instant::now();
        let mut keys = KeyState::new(true);
        keys.apply(Key::Left, KeyEventKind::Press, t0);
        assert_eq!(keys.rotation(t0 + Duration::from_secs(5)), RotateDirection::CounterClockwise);

        keys.apply(Key::Right, KeyEventKind::Press, t0);
        assert_eq!(keys.rotation(t0), RotateDirection::Hold);

        keys.apply(Key::Left, KeyEventKind::Release, t0);
        assert_eq!(keys.rotation(t0), RotateDirection::Clockwise);
    }

    #[test]
    fn test_hold_window_without_releases() {
        let t0 = Instant::now();
        let mut keys = KeyState::new(false);
        keys.apply(Key::Right, KeyEventKind::Press, t0);
        assert!(keys.is_held(Key::Right, t0 + Duration::from_millis(100)));
        assert!(!keys.is_held(Key::Right, t0 + HOLD_WINDOW));

        // Auto-repeat keeps it alive
        keys.apply(Key::Right, KeyEventKind::Repeat, t0 + Duration::from_millis(300));
        assert!(keys.is_held(Key::Right, t0 + Duration::from_millis(500)));
        assert!(!keys.is_held(Key::Left, t0));
    }
}
