//! Keyboard input handling
//!
//! Maps physical key codes to game actions and tracks held keys between
//! simulation ticks. Event handlers feed [`InputTracker::key_down`] and
//! [`InputTracker::key_up`]; the game loop takes a [`TickInput`] snapshot
//! once per tick.

use crate::sim::TickInput;

/// Game actions a key can be bound to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveLeft,
    MoveRight,
    Fire,
    Restart,
}

/// Physical key bindings (`KeyboardEvent.code` values, layout independent)
const BINDINGS: [(&str, Action); 7] = [
    ("ArrowLeft", Action::MoveLeft),
    ("KeyA", Action::MoveLeft),
    ("ArrowRight", Action::MoveRight),
    ("KeyD", Action::MoveRight),
    ("KeyX", Action::Fire),
    ("Space", Action::Fire),
    ("KeyR", Action::Restart),
];

/// Look up the action bound to a key code, if any
pub fn action_for_key(code: &str) -> Option<Action> {
    BINDINGS
        .iter()
        .find(|(bound, _)| *bound == code)
        .map(|(_, action)| *action)
}

/// Tracks which bound keys are currently held
#[derive(Debug, Default)]
pub struct InputTracker {
    held: [bool; BINDINGS.len()],
}

impl InputTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key press. Returns true if the key is bound, so callers
    /// can suppress default browser behavior like page scroll on Space.
    pub fn key_down(&mut self, code: &str) -> bool {
        match Self::slot(code) {
            Some(i) => {
                self.held[i] = true;
                true
            }
            None => false,
        }
    }

    /// Record a key release. Returns true if the key is bound.
    pub fn key_up(&mut self, code: &str) -> bool {
        match Self::slot(code) {
            Some(i) => {
                self.held[i] = false;
                true
            }
            None => false,
        }
    }

    /// Drop all held keys. Keyup events for keys held across a tab blur
    /// never arrive, so the shell calls this on visibility loss.
    pub fn release_all(&mut self) {
        self.held = [false; BINDINGS.len()];
    }

    fn slot(code: &str) -> Option<usize> {
        BINDINGS.iter().position(|(bound, _)| *bound == code)
    }

    fn is_active(&self, action: Action) -> bool {
        BINDINGS
            .iter()
            .zip(self.held.iter())
            .any(|((_, bound_action), held)| *held && *bound_action == action)
    }

    /// Current input state as seen by the simulation
    pub fn snapshot(&self) -> TickInput {
        TickInput {
            left: self.is_active(Action::MoveLeft),
            right: self.is_active(Action::MoveRight),
            fire: self.is_active(Action::Fire),
            restart: self.is_active(Action::Restart),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bindings_cover_arrows_and_letters() {
        assert_eq!(action_for_key("ArrowLeft"), Some(Action::MoveLeft));
        assert_eq!(action_for_key("KeyA"), Some(Action::MoveLeft));
        assert_eq!(action_for_key("ArrowRight"), Some(Action::MoveRight));
        assert_eq!(action_for_key("KeyD"), Some(Action::MoveRight));
        assert_eq!(action_for_key("KeyX"), Some(Action::Fire));
        assert_eq!(action_for_key("Space"), Some(Action::Fire));
        assert_eq!(action_for_key("KeyR"), Some(Action::Restart));
        assert_eq!(action_for_key("KeyQ"), None);
    }

    #[test]
    fn test_held_key_stays_down_until_release() {
        let mut tracker = InputTracker::new();
        assert!(tracker.key_down("ArrowLeft"));
        assert!(tracker.snapshot().left);

        // Browser auto-repeat sends extra keydowns while held
        tracker.key_down("ArrowLeft");
        assert!(tracker.snapshot().left);

        tracker.key_up("ArrowLeft");
        assert!(!tracker.snapshot().left);
    }

    #[test]
    fn test_alternate_bindings_overlap() {
        let mut tracker = InputTracker::new();
        tracker.key_down("KeyA");
        tracker.key_down("ArrowLeft");
        tracker.key_up("KeyA");

        // ArrowLeft is still held
        assert!(tracker.snapshot().left);

        tracker.key_up("ArrowLeft");
        assert!(!tracker.snapshot().left);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut tracker = InputTracker::new();
        assert!(!tracker.key_down("KeyQ"));
        assert!(!tracker.key_up("Escape"));
        assert_eq!(tracker.snapshot(), TickInput::default());
    }

    #[test]
    fn test_release_all_clears_everything() {
        let mut tracker = InputTracker::new();
        tracker.key_down("ArrowLeft");
        tracker.key_down("Space");
        tracker.release_all();
        assert_eq!(tracker.snapshot(), TickInput::default());
    }

    #[test]
    fn test_snapshot_combines_actions() {
        let mut tracker = InputTracker::new();
        tracker.key_down("KeyD");
        tracker.key_down("KeyX");
        let snap = tracker.snapshot();
        assert!(snap.right);
        assert!(snap.fire);
        assert!(!snap.left);
        assert!(!snap.restart);
    }
}
