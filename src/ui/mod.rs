use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::game::{cell_at, GridCell};
use crate::{CONTROLS_H, GRID_H, GRID_W, INFO_H, MIN_PANE_HEIGHT, MIN_PANE_WIDTH, PANEL_W};

pub mod render;

pub use render::{draw_game, draw_splash, status_message};

/// Where each panel of the game screen lands for a given terminal size.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScreenLayout {
    pub info: Rect,
    /// Bordered box around the grid.
    pub board: Rect,
    /// Drawing area of the grid itself, `GRID_W` x `GRID_H`.
    pub grid: Rect,
    pub controls: Rect,
}

pub fn screen_layout(area: Rect) -> Option<ScreenLayout> {
    if area.width < MIN_PANE_WIDTH || area.height < MIN_PANE_HEIGHT {
        return None;
    }
    // Inside the cabinet border.
    let inner = Rect::new(area.x + 1, area.y + 1, area.width - 2, area.height - 2);

    let col = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(PANEL_W),
            Constraint::Min(0),
        ])
        .split(inner)[1];

    let board_h = GRID_H as u16 + 2;
    let stack = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(INFO_H),
            Constraint::Length(board_h),
            Constraint::Length(CONTROLS_H),
            Constraint::Min(0),
        ])
        .split(col);

    let board_w = GRID_W as u16 + 2;
    let board = Rect::new(
        stack[2].x + stack[2].width.saturating_sub(board_w) / 2,
        stack[2].y,
        board_w,
        board_h,
    );
    let grid = Rect::new(board.x + 1, board.y + 1, GRID_W as u16, GRID_H as u16);

    Some(ScreenLayout {
        info: stack[1],
        board,
        grid,
        controls: stack[3],
    })
}

/// Maps a terminal mouse position onto the grid. Character cells are taller
/// than wide, so the grid rect is stretched into a square canvas first.
pub fn cell_under_mouse(grid: Rect, column: u16, row: u16) -> Option<GridCell> {
    if grid.width == 0 || grid.height == 0 || column < grid.x || row < grid.y {
        return None;
    }
    let side = f32::from(grid.width);
    let x = f32::from(column - grid.x) + 0.5;
    let y = (f32::from(row - grid.y) + 0.5) * side / f32::from(grid.height);
    cell_at(x, y, side)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{NODE_H, NODE_W};

    fn layout() -> ScreenLayout {
        screen_layout(Rect::new(0, 0, 80, 40)).unwrap()
    }

    #[test]
    fn too_small_terminal_has_no_layout() {
        assert!(screen_layout(Rect::new(0, 0, MIN_PANE_WIDTH - 1, 40)).is_none());
        assert!(screen_layout(Rect::new(0, 0, 80, MIN_PANE_HEIGHT - 1)).is_none());
        assert!(screen_layout(Rect::new(0, 0, MIN_PANE_WIDTH, MIN_PANE_HEIGHT)).is_some());
    }

    #[test]
    fn grid_sits_inside_board() {
        let l = layout();
        assert_eq!(l.grid.width, GRID_W as u16);
        assert_eq!(l.grid.height, GRID_H as u16);
        assert_eq!((l.grid.x, l.grid.y), (l.board.x + 1, l.board.y + 1));
        assert!(l.info.y < l.board.y);
        assert!(l.controls.y >= l.board.y + l.board.height);
    }

    #[test]
    fn mouse_positions_map_to_cells() {
        let g = layout().grid;
        assert_eq!(cell_under_mouse(g, g.x, g.y), Some(GridCell::new(0, 0)));
        assert_eq!(
            cell_under_mouse(g, g.x + NODE_W as u16, g.y + NODE_H as u16),
            Some(GridCell::new(1, 1))
        );
        assert_eq!(
            cell_under_mouse(g, g.x + g.width - 1, g.y + g.height - 1),
            Some(GridCell::new(2, 2))
        );
        assert_eq!(
            cell_under_mouse(g, g.x + 2 * NODE_W as u16 + 3, g.y + 1),
            Some(GridCell::new(0, 2))
        );
    }

    #[test]
    fn mouse_outside_grid_is_ignored() {
        let g = layout().grid;
        assert_eq!(cell_under_mouse(g, g.x - 1, g.y), None);
        assert_eq!(cell_under_mouse(g, g.x, g.y - 1), None);
        assert_eq!(cell_under_mouse(g, g.x + g.width, g.y), None);
        assert_eq!(cell_under_mouse(g, g.x, g.y + g.height), None);
    }
}
