use crate::{GRID_CELLS, GRID_SIZE};

/// One of the nine points of the lock grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct GridCell {
    pub row: usize,
    pub col: usize,
}

impl GridCell {
    pub const fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// Row-major index, 0 for the top left point through 8 for the bottom right.
    pub const fn id(&self) -> usize {
        self.row * GRID_SIZE + self.col
    }

    pub fn from_id(id: usize) -> Option<Self> {
        GRID.get(id).copied()
    }
}

pub const GRID: [GridCell; GRID_CELLS] = [
    GridCell::new(0, 0),
    GridCell::new(0, 1),
    GridCell::new(0, 2),
    GridCell::new(1, 0),
    GridCell::new(1, 1),
    GridCell::new(1, 2),
    GridCell::new(2, 0),
    GridCell::new(2, 1),
    GridCell::new(2, 2),
];

/// Maps a position inside a square canvas of the given side length to the grid
/// cell under it. Positions off the canvas yield `None`.
pub fn cell_at(x: f32, y: f32, side: f32) -> Option<GridCell> {
    if [x, y, side].iter().any(|v| v.is_nan()) || side <= 0.0 || x < 0.0 || y < 0.0 {
        return None;
    }
    let cell_size = side / GRID_SIZE as f32;
    let row = (y / cell_size).floor();
    let col = (x / cell_size).floor();
    let limit = GRID_SIZE as f32;
    if row >= limit || col >= limit {
        return None;
    }
    Some(GridCell::new(row as usize, col as usize))
}
