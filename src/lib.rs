//! Pattern Lock: a 3x3 grid shows a path for a moment, then the player has to
//! draw it back before the clock runs out.
//!
//! [`game`] holds the rules: pattern generation and the timed round state
//! machine. [`ui`] and [`app`] host it in a terminal.

pub mod app;
pub mod config;
pub mod game;
pub mod logging;
pub mod ui;

pub use config::{
    Args, CONTROLS_H, CORRECT_DELAY, FRAME_POLL, GRID_CELLS, GRID_H, GRID_SIZE, GRID_W, INFO_H,
    INPUT_BASE_MS, INPUT_MIN_MS, INPUT_PER_LEVEL_MS, MAX_PATTERN_LEN, MIN_PANE_HEIGHT,
    MIN_PANE_WIDTH, MIN_PATTERN_CAP, NODE_H, NODE_W, PANEL_W, POINTS_PER_LEVEL, SETTLE_DELAY,
    SHOW_BASE_MS, SHOW_PER_LEVEL_MS, SPLASH_FADE, SPLASH_HOLD, TICK,
};
pub use game::{GridCell, Pattern, RoundController, RoundSnapshot, RoundState};
