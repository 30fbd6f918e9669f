use std::time::Duration;

use ratatui::prelude::*;
use ratatui::text::Line;
use ratatui::widgets::{Block, BorderType, Borders, Paragraph};

use crate::game::{GridCell, Pattern, RoundSnapshot, RoundState, GRID};
use crate::ui::screen_layout;
use crate::{GRID_H, GRID_W, MIN_PANE_HEIGHT, MIN_PANE_WIDTH, NODE_H, NODE_W, SPLASH_FADE};

const TITLE: &str = "PATTERN LOCK";

pub fn draw_game(frame: &mut Frame, snap: &RoundSnapshot) {
    let area = frame.size();

    let Some(layout) = screen_layout(area) else {
        let msg = Paragraph::new(format!(
            "RESIZE PANE (min {}x{})",
            MIN_PANE_WIDTH, MIN_PANE_HEIGHT
        ))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL).title(TITLE));
        frame.render_widget(msg, area);
        return;
    };

    // Outer "cabinet" frame.
    let cabinet = Block::default()
        .title(TITLE)
        .border_type(BorderType::Thick)
        .borders(Borders::ALL)
        .title_alignment(Alignment::Left);
    frame.render_widget(cabinet, area);

    draw_info(frame, snap, layout.info);
    draw_board(frame, snap, layout.board);
    draw_controls(frame, snap, layout.controls);
}

pub fn draw_splash(frame: &mut Frame, elapsed: Duration) {
    let area = frame.size();
    // Fade in over the first part of the splash, then hold.
    let style = if elapsed < SPLASH_FADE / 3 {
        Style::default().add_modifier(Modifier::DIM)
    } else if elapsed < SPLASH_FADE {
        Style::default()
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let top = area.height.saturating_sub(2) / 2;
    let mut lines = vec![Line::raw(""); top as usize];
    lines.push(Line::styled(TITLE, style));
    lines.push(Line::styled("press any key", Style::default().add_modifier(Modifier::DIM)));
    let splash = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(splash, area);
}

pub fn status_message(snap: &RoundSnapshot) -> String {
    match snap.state {
        RoundState::Idle => format!("Ready for level {}?", snap.level),
        RoundState::Showing => format!("Memorize the pattern! {}s", snap.show_seconds()),
        RoundState::AwaitingInput => "Draw the pattern!".to_string(),
        RoundState::Correct => format!("Correct! +{} points", snap.last_award),
        RoundState::Incorrect => "Wrong! This was the pattern:".to_string(),
        RoundState::Expired => "Time's up!".to_string(),
    }
}

fn draw_info(frame: &mut Frame, snap: &RoundSnapshot, area: Rect) {
    let block = Block::default().title("INFO").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let mut stats = format!("LEVEL: {:<4} SCORE: {}", snap.level, snap.score);
    if snap.state == RoundState::AwaitingInput {
        stats.push_str(&format!("   TIME: {}s", snap.input_seconds()));
    }
    let status_style = match snap.state {
        RoundState::Correct => Style::default().fg(Color::Green).add_modifier(Modifier::BOLD),
        RoundState::Incorrect | RoundState::Expired => {
            Style::default().fg(Color::Red).add_modifier(Modifier::BOLD)
        }
        _ => Style::default(),
    };
    let info = Paragraph::new(vec![
        Line::raw(stats),
        Line::styled(status_message(snap), status_style),
    ])
    .alignment(Alignment::Left);
    frame.render_widget(info, inner);
}

fn draw_board(frame: &mut Frame, snap: &RoundSnapshot, area: Rect) {
    // Only one path is ever on screen: the target while it is shown, the
    // player's own path while drawing.
    let (path, style) = if !snap.target.is_empty() {
        let color = if snap.state == RoundState::Incorrect {
            Color::Red
        } else {
            Color::Cyan
        };
        (&snap.target, Style::default().fg(color))
    } else {
        (&snap.player, Style::default().fg(Color::Green))
    };

    let grid = plot_grid(path);
    let lines: Vec<Line> = grid
        .iter()
        .map(|row| Line::raw(row.iter().collect::<String>()))
        .collect();

    let board = Paragraph::new(lines).style(style).block(
        Block::default()
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded),
    );
    frame.render_widget(board, area);
}

fn draw_controls(frame: &mut Frame, snap: &RoundSnapshot, area: Rect) {
    let block = Block::default().title("CONTROLS").borders(Borders::ALL);
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let first = match snap.state {
        RoundState::Idle => format!("enter start level {}", snap.level),
        RoundState::AwaitingInput => "drag or 1-9 connect".to_string(),
        RoundState::Incorrect | RoundState::Expired => "enter/r try again   n new game".to_string(),
        RoundState::Showing | RoundState::Correct => String::new(),
    };
    let controls = Paragraph::new(vec![Line::raw(first), Line::raw("q/esc quit")])
        .alignment(Alignment::Left);
    frame.render_widget(controls, inner);
}

fn node_center(cell: GridCell) -> (usize, usize) {
    (cell.col * NODE_W + NODE_W / 2, cell.row * NODE_H + NODE_H / 2)
}

/// Characters for the grid area: connecting strokes first, then the nine
/// points with the step number of each point on the path beside it.
pub(crate) fn plot_grid(path: &Pattern) -> Vec<Vec<char>> {
    let mut grid = vec![vec![' '; GRID_W]; GRID_H];

    for pair in path.cells().windows(2) {
        plot_stroke(&mut grid, node_center(pair[0]), node_center(pair[1]));
    }

    for cell in GRID {
        let (x, y) = node_center(cell);
        let step = path.cells().iter().position(|c| *c == cell);
        grid[y][x] = match step {
            Some(0) => '◉',
            Some(_) => '●',
            None => '○',
        };
        if let Some(i) = step {
            if x + 2 < GRID_W {
                grid[y][x + 2] = char::from_digit((i + 1) as u32, 10).unwrap_or('+');
            }
        }
    }
    grid
}

fn plot_stroke(grid: &mut [Vec<char>], from: (usize, usize), to: (usize, usize)) {
    let (x0, y0) = (from.0 as i32, from.1 as i32);
    let (dx, dy) = (to.0 as i32 - x0, to.1 as i32 - y0);
    let glyph = if dy == 0 {
        '─'
    } else if dx == 0 {
        '│'
    } else if (dx > 0) == (dy > 0) {
        '╲'
    } else {
        '╱'
    };
    let steps = dx.abs().max(dy.abs());
    for i in 1..steps {
        let x = (x0 as f32 + dx as f32 * i as f32 / steps as f32).round() as usize;
        let y = (y0 as f32 + dy as f32 * i as f32 / steps as f32).round() as usize;
        if y < grid.len() && x < grid[y].len() {
            grid[y][x] = glyph;
        }
    }
}

#[cfg(test)]
mod tests {
    use ratatui::backend::TestBackend;
    use ratatui::buffer::Buffer;
    use ratatui::Terminal;

    use super::*;
    use crate::game::{RoundController, RoundState};

    fn buffer_text(buf: &Buffer) -> String {
        buf.content().iter().map(|c| c.symbol()).collect()
    }

    fn render(snap: &RoundSnapshot, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| draw_game(frame, snap)).unwrap();
        buffer_text(terminal.backend().buffer())
    }

    fn path(cells: &[(usize, usize)]) -> Pattern {
        cells.iter().map(|&(r, c)| GridCell::new(r, c)).collect()
    }

    #[test]
    fn plots_points_and_strokes() {
        let grid = plot_grid(&path(&[(0, 0), (0, 1), (1, 1)]));
        let (x0, y0) = node_center(GridCell::new(0, 0));
        let (x1, _) = node_center(GridCell::new(0, 1));
        assert_eq!(grid[y0][x0], '◉');
        assert_eq!(grid[y0][x1], '●');
        assert_eq!(grid[y0][x0 + 2], '1');
        assert_eq!(grid[y0][x1 + 2], '2');
        assert_eq!(grid[y0][x0 + 4], '─');
        let (x2, y2) = node_center(GridCell::new(1, 1));
        assert_eq!(grid[y2][x2], '●');
        assert_eq!(grid[y2 - 1][x2], '│');
        let (x, y) = node_center(GridCell::new(2, 2));
        assert_eq!(grid[y][x], '○');
    }

    #[test]
    fn diagonal_strokes() {
        let grid = plot_grid(&path(&[(0, 0), (1, 1)]));
        assert!(grid.iter().flatten().any(|&c| c == '╲'));
        let grid = plot_grid(&path(&[(0, 2), (1, 1)]));
        assert!(grid.iter().flatten().any(|&c| c == '╱'));
    }

    #[test]
    fn empty_path_draws_only_points() {
        let grid = plot_grid(&Pattern::new());
        let points = grid.iter().flatten().filter(|&&c| c == '○').count();
        assert_eq!(points, 9);
        assert!(grid.iter().flatten().all(|&c| c == ' ' || c == '○'));
    }

    #[test]
    fn status_follows_state() {
        let mut snap = RoundController::new(Some(2)).snapshot();
        assert_eq!(status_message(&snap), "Ready for level 1?");
        snap.state = RoundState::Correct;
        snap.last_award = 20;
        assert_eq!(status_message(&snap), "Correct! +20 points");
        snap.state = RoundState::Expired;
        assert_eq!(status_message(&snap), "Time's up!");
    }

    #[test]
    fn renders_every_state() {
        let mut ctrl = RoundController::new(Some(11));
        ctrl.start_round();
        let mut snap = ctrl.snapshot();
        for state in [
            RoundState::Idle,
            RoundState::Showing,
            RoundState::AwaitingInput,
            RoundState::Correct,
            RoundState::Incorrect,
            RoundState::Expired,
        ] {
            snap.state = state;
            let text = render(&snap, 80, 40);
            assert!(text.contains("PATTERN LOCK"));
            assert!(text.contains("LEVEL"));
            assert!(text.contains(&status_message(&snap)));
        }
    }

    #[test]
    fn countdown_only_while_drawing() {
        let mut snap = RoundController::new(Some(11)).snapshot();
        snap.input_remaining = Duration::from_secs(9);
        assert!(!render(&snap, 80, 40).contains("TIME:"));
        snap.state = RoundState::AwaitingInput;
        assert!(render(&snap, 80, 40).contains("TIME: 9s"));
    }

    #[test]
    fn small_terminal_asks_for_resize() {
        let snap = RoundController::new(Some(11)).snapshot();
        assert!(render(&snap, 30, 10).contains("RESIZE"));
    }

    #[test]
    fn splash_shows_title() {
        let mut terminal = Terminal::new(TestBackend::new(40, 10)).unwrap();
        terminal
            .draw(|frame| draw_splash(frame, Duration::from_millis(100)))
            .unwrap();
        assert!(buffer_text(terminal.backend().buffer()).contains("PATTERN LOCK"));
    }
}
