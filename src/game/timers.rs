use crate::game::state::{Deferred, DeferredAction};
use crate::game::{Pattern, RoundState};
use crate::{CORRECT_DELAY, POINTS_PER_LEVEL, TICK};

use super::RoundController;

impl RoundController {
    /// One fixed step of the round clock. Only the countdown belonging to the
    /// current state moves.
    pub fn tick(&mut self) {
        self.tick_deferred();
        match self.state {
            RoundState::Showing => {
                self.show_remaining = self.show_remaining.saturating_sub(TICK);
                if self.show_remaining.is_zero() {
                    log::trace!("round {}: pattern hidden, awaiting input", self.generation);
                    self.state = RoundState::AwaitingInput;
                }
            }
            RoundState::AwaitingInput if self.pending.is_none() => {
                self.input_remaining = self.input_remaining.saturating_sub(TICK);
                if self.input_remaining.is_zero() {
                    log::info!(
                        "round {}: time is up with {}/{} points",
                        self.generation,
                        self.player.len(),
                        self.target.len()
                    );
                    self.state = RoundState::Expired;
                }
            }
            _ => {}
        }
    }

    fn tick_deferred(&mut self) {
        match self.pending.as_mut() {
            Some(deferred) => {
                deferred.remaining = deferred.remaining.saturating_sub(TICK);
                if !deferred.remaining.is_zero() {
                    return;
                }
            }
            None => return,
        }
        if let Some(deferred) = self.pending.take() {
            self.fire(deferred);
        }
    }

    fn fire(&mut self, deferred: Deferred) {
        if deferred.generation != self.generation {
            log::debug!(
                "discarding callback from round {} (current {})",
                deferred.generation,
                self.generation
            );
            return;
        }
        match deferred.action {
            DeferredAction::CheckMatch(entered) => {
                if self.state == RoundState::AwaitingInput {
                    self.resolve(&entered);
                }
            }
            DeferredAction::ReturnToIdle => {
                if self.state == RoundState::Correct {
                    self.state = RoundState::Idle;
                }
            }
        }
    }

    fn resolve(&mut self, entered: &Pattern) {
        if entered.matches(&self.target) {
            let award = u64::from(self.level) * POINTS_PER_LEVEL;
            self.score += award;
            self.last_award = award;
            self.level += 1;
            self.state = RoundState::Correct;
            self.pending = Some(Deferred {
                generation: self.generation,
                remaining: CORRECT_DELAY,
                action: DeferredAction::ReturnToIdle,
            });
            log::info!(
                "round {}: correct, +{} (score {}, next level {})",
                self.generation,
                award,
                self.score,
                self.level
            );
        } else {
            self.state = RoundState::Incorrect;
            log::info!("round {}: wrong pattern", self.generation);
        }
    }
}
