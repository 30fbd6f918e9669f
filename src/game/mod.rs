pub mod grid;
pub mod pattern;
pub mod snapshot;
pub mod state;
pub mod timers;

pub use grid::{cell_at, GridCell, GRID};
pub use pattern::{max_len, min_len, random_pattern, Pattern};
pub use snapshot::RoundSnapshot;
pub use state::{input_duration, show_duration, RoundController, RoundState};
