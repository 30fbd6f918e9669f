use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game::{random_pattern, GridCell, Pattern, RoundSnapshot};
use crate::{
    INPUT_BASE_MS, INPUT_MIN_MS, INPUT_PER_LEVEL_MS, SETTLE_DELAY, SHOW_BASE_MS, SHOW_PER_LEVEL_MS,
    TICK,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RoundState {
    Idle,
    Showing,
    AwaitingInput,
    Correct,
    Incorrect,
    Expired,
}

impl RoundState {
    pub fn shows_target(self) -> bool {
        matches!(self, RoundState::Showing | RoundState::Incorrect)
    }

    pub fn accepts_input(self) -> bool {
        self == RoundState::AwaitingInput
    }

    /// The round ended without success and waits for a retry or a new game.
    pub fn is_over(self) -> bool {
        matches!(self, RoundState::Incorrect | RoundState::Expired)
    }
}

#[derive(Debug)]
pub(crate) enum DeferredAction {
    CheckMatch(Pattern),
    ReturnToIdle,
}

/// Fire-once action owned by the controller, valid only for the round
/// generation it was scheduled in.
#[derive(Debug)]
pub(crate) struct Deferred {
    pub generation: u64,
    pub remaining: Duration,
    pub action: DeferredAction,
}

pub struct RoundController {
    pub(super) state: RoundState,
    pub(super) level: u32,
    pub(super) score: u64,
    pub(super) last_award: u64,
    pub(super) target: Pattern,
    pub(super) player: Pattern,
    pub(super) show_remaining: Duration,
    pub(super) input_remaining: Duration,
    pub(super) generation: u64,
    pub(super) pending: Option<Deferred>,
    tick_carry: Duration,
    rng: StdRng,
}

impl RoundController {
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self {
            state: RoundState::Idle,
            level: 1,
            score: 0,
            last_award: 0,
            target: Pattern::new(),
            player: Pattern::new(),
            show_remaining: Duration::ZERO,
            input_remaining: Duration::ZERO,
            generation: 0,
            pending: None,
            tick_carry: Duration::ZERO,
            rng,
        }
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u64 {
        self.score
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn start_round(&mut self) -> bool {
        if self.state != RoundState::Idle {
            return false;
        }
        let target = random_pattern(self.level, &mut self.rng);
        self.begin_round(target);
        true
    }

    /// New pattern at the current level after a failed round.
    pub fn retry(&mut self) -> bool {
        if !self.state.is_over() {
            return false;
        }
        log::info!("retrying level {}", self.level);
        self.state = RoundState::Idle;
        self.start_round()
    }

    pub fn reset_game(&mut self) {
        self.generation += 1;
        self.pending = None;
        self.level = 1;
        self.score = 0;
        self.last_award = 0;
        self.target.clear();
        self.player.clear();
        self.show_remaining = Duration::ZERO;
        self.input_remaining = Duration::ZERO;
        self.state = RoundState::Idle;
        log::info!("new game");
    }

    pub(crate) fn begin_round(&mut self, target: Pattern) {
        self.generation += 1;
        self.pending = None;
        self.target = target;
        self.player.clear();
        self.show_remaining = show_duration(self.level);
        self.input_remaining = input_duration(self.level);
        self.tick_carry = Duration::ZERO;
        self.state = RoundState::Showing;
        log::info!(
            "round {} started: level {}, {} points to remember",
            self.generation,
            self.level,
            self.target.len()
        );
    }

    /// Adds a point to the player's path. Ignored outside the input phase and
    /// for points already on the path.
    pub fn append_point(&mut self, cell: GridCell) -> bool {
        if !self.state.accepts_input() {
            return false;
        }
        if !self.player.push(cell) {
            return false;
        }
        log::debug!("point {} entered ({}/{})", cell.id(), self.player.len(), self.target.len());
        if self.player.len() >= self.target.len() && self.pending.is_none() {
            self.pending = Some(Deferred {
                generation: self.generation,
                remaining: SETTLE_DELAY,
                action: DeferredAction::CheckMatch(self.player.clone()),
            });
        }
        true
    }

    /// Feeds wall-clock time; applies one tick per whole `TICK` elapsed.
    pub fn advance(&mut self, dt: Duration) {
        self.tick_carry += dt;
        while self.tick_carry >= TICK {
            self.tick_carry -= TICK;
            self.tick();
        }
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        RoundSnapshot {
            state: self.state,
            level: self.level,
            score: self.score,
            last_award: self.last_award,
            target: if self.state.shows_target() {
                self.target.clone()
            } else {
                Pattern::new()
            },
            player: if self.state.accepts_input() {
                self.player.clone()
            } else {
                Pattern::new()
            },
            show_remaining: self.show_remaining,
            input_remaining: self.input_remaining,
            generation: self.generation,
        }
    }
}

pub fn show_duration(level: u32) -> Duration {
    Duration::from_millis(SHOW_BASE_MS + u64::from(level) * SHOW_PER_LEVEL_MS)
}

pub fn input_duration(level: u32) -> Duration {
    let ms = INPUT_BASE_MS
        .saturating_sub(u64::from(level) * INPUT_PER_LEVEL_MS)
        .max(INPUT_MIN_MS);
    Duration::from_millis(ms)
}
