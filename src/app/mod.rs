use std::io::{stdout, Stdout};
use std::time::Instant;

use anyhow::{Context, Result};
use crossterm::event::{
    self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, MouseButton,
    MouseEvent, MouseEventKind,
};
use crossterm::execute;
use crossterm::terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen};
use ratatui::backend::CrosstermBackend;
use ratatui::layout::Rect;
use ratatui::Terminal;

use crate::game::{GridCell, RoundController};
use crate::ui::{cell_under_mouse, draw_game, draw_splash, screen_layout};
use crate::{Args, FRAME_POLL, SPLASH_FADE, SPLASH_HOLD};

type Term = Terminal<CrosstermBackend<Stdout>>;

#[derive(Clone, Copy)]
enum Screen {
    Splash(Instant),
    Game,
}

pub fn run(args: &Args) -> Result<()> {
    let mut tui = TuiGuard::new()?;
    run_loop(tui.terminal_mut(), args)
}

fn run_loop(terminal: &mut Term, args: &Args) -> Result<()> {
    let mut round = RoundController::new(args.seed);
    let mut screen = if args.no_splash {
        Screen::Game
    } else {
        Screen::Splash(Instant::now())
    };
    let mut last_tick = Instant::now();

    loop {
        match screen {
            Screen::Splash(started) => {
                let elapsed = started.elapsed();
                if elapsed >= SPLASH_FADE + SPLASH_HOLD {
                    screen = Screen::Game;
                    continue;
                }
                terminal.draw(|frame| draw_splash(frame, elapsed))?;
            }
            Screen::Game => {
                let snap = round.snapshot();
                terminal.draw(|frame| draw_game(frame, &snap))?;
            }
        }

        if event::poll(FRAME_POLL)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if matches!(key.code, KeyCode::Char('q') | KeyCode::Esc) {
                        break;
                    }
                    match screen {
                        Screen::Splash(_) => screen = Screen::Game,
                        Screen::Game => handle_key(key.code, &mut round),
                    }
                }
                Event::Mouse(mouse) if matches!(screen, Screen::Game) => {
                    let area = terminal.size()?;
                    handle_mouse(mouse, area, &mut round);
                }
                _ => {}
            }
        }

        let now = Instant::now();
        round.advance(now - last_tick);
        last_tick = now;
    }
    log::info!("quit at level {} with score {}", round.level(), round.score());
    Ok(())
}

struct TuiGuard {
    terminal: Term,
}

impl TuiGuard {
    fn new() -> Result<Self> {
        enable_raw_mode().context("cannot enable raw mode")?;
        let mut stdout = stdout();
        execute!(stdout, EnterAlternateScreen, EnableMouseCapture)
            .context("cannot enter alternate screen")?;
        let backend = CrosstermBackend::new(stdout);
        let mut terminal = Terminal::new(backend)?;
        terminal.hide_cursor()?;
        Ok(Self { terminal })
    }

    fn terminal_mut(&mut self) -> &mut Term {
        &mut self.terminal
    }
}

impl Drop for TuiGuard {
    fn drop(&mut self) {
        let _ = disable_raw_mode();
        let _ = execute!(
            self.terminal.backend_mut(),
            DisableMouseCapture,
            LeaveAlternateScreen
        );
        let _ = self.terminal.show_cursor();
    }
}

fn handle_key(code: KeyCode, round: &mut RoundController) {
    match code {
        KeyCode::Enter | KeyCode::Char(' ') => {
            if round.state().is_over() {
                let _ = round.retry();
            } else {
                let _ = round.start_round();
            }
        }
        KeyCode::Char('r') => {
            let _ = round.retry();
        }
        KeyCode::Char('n') => round.reset_game(),
        KeyCode::Char(c @ '1'..='9') => {
            if let Some(cell) = key_cell(c) {
                let _ = round.append_point(cell);
            }
        }
        _ => {}
    }
}

// Keys 1-9 number the points row by row from the top left.
fn key_cell(c: char) -> Option<GridCell> {
    let digit = c.to_digit(10)? as usize;
    GridCell::from_id(digit.checked_sub(1)?)
}

fn handle_mouse(mouse: MouseEvent, area: Rect, round: &mut RoundController) {
    if !matches!(
        mouse.kind,
        MouseEventKind::Down(MouseButton::Left) | MouseEventKind::Drag(MouseButton::Left)
    ) {
        return;
    }
    let Some(layout) = screen_layout(area) else {
        return;
    };
    if let Some(cell) = cell_under_mouse(layout.grid, mouse.column, mouse.row) {
        let _ = round.append_point(cell);
    }
}
