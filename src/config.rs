use std::path::PathBuf;
use std::time::Duration;

use clap::Parser;

// Shared game constants.
pub const GRID_SIZE: usize = 3;
pub const GRID_CELLS: usize = GRID_SIZE * GRID_SIZE;
pub const MIN_PATTERN_CAP: usize = 3;
pub const MAX_PATTERN_LEN: usize = 6;
pub const POINTS_PER_LEVEL: u64 = 10;

// Timing. Countdowns move in whole ticks.
pub const TICK: Duration = Duration::from_millis(100);
pub const SETTLE_DELAY: Duration = Duration::from_millis(300);
pub const CORRECT_DELAY: Duration = Duration::from_millis(1500);
pub const SHOW_BASE_MS: u64 = 2000;
pub const SHOW_PER_LEVEL_MS: u64 = 500;
pub const INPUT_BASE_MS: u64 = 15_000;
pub const INPUT_PER_LEVEL_MS: u64 = 500;
pub const INPUT_MIN_MS: u64 = 5000;

// Terminal layout.
pub const NODE_W: usize = 10; // characters per grid cell horizontally
pub const NODE_H: usize = 5; // rows per grid cell
pub const GRID_W: usize = NODE_W * GRID_SIZE;
pub const GRID_H: usize = NODE_H * GRID_SIZE;
pub const PANEL_W: u16 = (GRID_W as u16) + 14;
pub const MIN_PANE_WIDTH: u16 = PANEL_W + 2;
pub const FRAME_POLL: Duration = Duration::from_millis(50);
pub const SPLASH_FADE: Duration = Duration::from_millis(2000);
pub const SPLASH_HOLD: Duration = Duration::from_millis(500);
pub const INFO_H: u16 = 4;
pub const CONTROLS_H: u16 = 4;
pub const MIN_PANE_HEIGHT: u16 = INFO_H + (GRID_H as u16) + 2 + CONTROLS_H + 2;

/// Command line options.
#[derive(Parser, Debug)]
#[command(version, about = "Memorize the pattern, then draw it back.", long_about = None)]
pub struct Args {
    /// Seed the pattern generator instead of drawing from entropy
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Write log records to this file
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Go straight to the game screen
    #[arg(long)]
    pub no_splash: bool,

    /// What log level to use
    #[command(flatten)]
    pub verbose: clap_verbosity_flag::Verbosity,
}
