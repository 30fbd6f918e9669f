use std::time::Duration;

use crate::game::{Pattern, RoundState};

/// Read-only view of a round for the render layer. Patterns that should not be
/// on screen in the current state are empty.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub state: RoundState,
    pub level: u32,
    pub score: u64,
    pub last_award: u64,
    pub target: Pattern,
    pub player: Pattern,
    pub show_remaining: Duration,
    pub input_remaining: Duration,
    pub generation: u64,
}

impl RoundSnapshot {
    // Whole seconds, rounded the way the countdown text reads.
    pub fn show_seconds(&self) -> u64 {
        self.show_remaining.as_secs() + 1
    }

    pub fn input_seconds(&self) -> u64 {
        self.input_remaining.as_secs()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::RoundController;

    #[test]
    fn countdown_text_values() {
        let mut snap = RoundController::new(Some(3)).snapshot();
        snap.show_remaining = Duration::from_millis(2500);
        snap.input_remaining = Duration::from_millis(14_900);
        assert_eq!(snap.show_seconds(), 3);
        assert_eq!(snap.input_seconds(), 14);
        snap.show_remaining = Duration::from_millis(100);
        assert_eq!(snap.show_seconds(), 1);
    }

    #[test]
    fn fresh_controller_snapshot() {
        let snap = RoundController::new(None).snapshot();
        assert_eq!(snap.state, RoundState::Idle);
        assert_eq!((snap.level, snap.score), (1, 0));
        assert!(snap.target.is_empty());
        assert!(snap.player.is_empty());
    }
}
