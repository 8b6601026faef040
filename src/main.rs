//! Terminal blockfall runner.
//!
//! Crossterm input, framebuffer renderer, fixed 16ms frame loop. Gravity
//! and the countdown run off accumulators inside the tick so their cadence
//! is independent of the frame rate.

use std::time::{Duration, Instant, SystemTime, UNIX_EPOCH};

use anyhow::{Context, Result};
use clap::Parser;
use crossterm::event::{self, Event, KeyEventKind};

use blockfall::config::{GameConfig, ScoringMode};
use blockfall::core::{GameSnapshot, GameState};
use blockfall::input::{handle_key_event, should_quit, InputHandler};
use blockfall::term::{GameView, TerminalRenderer, Viewport};
use blockfall::types::{GameAction, TICK_MS};

#[derive(Debug, Parser)]
#[command(name = "blockfall", about = "Falling-block puzzle for the terminal")]
struct Args {
    /// Board height in rows.
    #[arg(long, default_value_t = 15)]
    rows: u16,

    /// Board width in columns.
    #[arg(long, default_value_t = 10)]
    cols: u16,

    /// Milliseconds between forced gravity steps.
    #[arg(long, default_value_t = 500)]
    fall_interval_ms: u32,

    /// Countdown in seconds; 0 disables the timer.
    #[arg(long, default_value_t = 30)]
    time_limit: u32,

    /// How line clears are converted into points.
    #[arg(long, value_enum, default_value = "per-line-multiplied")]
    scoring: ScoringMode,

    /// Points awarded per line (or per clear event in flat mode).
    #[arg(long, default_value_t = 1)]
    points_per_line: u32,

    /// RNG seed for the piece sequence; defaults to the current time.
    #[arg(long)]
    seed: Option<u32>,

    /// Terminal columns per board cell.
    #[arg(long, default_value_t = 2)]
    cell_width: u16,

    /// Terminal rows per board cell.
    #[arg(long, default_value_t = 1)]
    cell_height: u16,
}

impl Args {
    fn game_config(&self) -> GameConfig {
        GameConfig {
            rows: self.rows,
            cols: self.cols,
            fall_interval_ms: self.fall_interval_ms,
            time_limit_secs: (self.time_limit > 0).then_some(self.time_limit),
            scoring: self.scoring,
            points_per_line: self.points_per_line,
        }
    }

    fn seed(&self) -> u32 {
        self.seed.unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
                .unwrap_or(1)
        })
    }
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Validate before touching the terminal so errors print normally.
    let game = GameState::new(args.game_config(), args.seed())
        .context("invalid game configuration")?;
    let view = GameView::new(args.cell_width, args.cell_height);

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let result = run(&mut term, game, view);

    // Always try to restore terminal state.
    let _ = term.exit();
    result
}

fn run(term: &mut TerminalRenderer, mut game: GameState, view: GameView) -> Result<()> {
    let mut input = InputHandler::new();
    let mut snapshot = GameSnapshot::default();

    let tick_duration = Duration::from_millis(TICK_MS as u64);
    let mut last_tick = Instant::now();
    let mut fall_timer_ms: u32 = 0;
    let mut second_timer_ms: u32 = 0;

    loop {
        // Render.
        let (w, h) = crossterm::terminal::size().unwrap_or((80, 24));
        game.snapshot_into(&mut snapshot);
        let frame = view.render(&snapshot, Viewport::new(w, h));
        term.draw(&frame)?;

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or_else(|| Duration::from_secs(0));

        if event::poll(timeout)? {
            if let Event::Key(key) = event::read()? {
                match key.kind {
                    KeyEventKind::Press => {
                        if should_quit(key) {
                            return Ok(());
                        }

                        // Directional keys route through the hold-to-repeat
                        // handler; everything else through the plain map.
                        if let Some(action) = input.handle_key_press(key.code) {
                            game.apply_action(action);
                        } else if let Some(action) = handle_key_event(key) {
                            match action {
                                GameAction::Rotate => {
                                    game.apply_action(action);
                                }
                                GameAction::Restart => {
                                    input.reset();
                                    fall_timer_ms = 0;
                                    second_timer_ms = 0;
                                    game.apply_action(action);
                                }
                                _ => {}
                            }
                        }
                    }
                    KeyEventKind::Repeat => {
                        // Terminal auto-repeat is ignored; repeats come from
                        // the input handler's own timers.
                    }
                    KeyEventKind::Release => {
                        input.handle_key_release(key.code);
                    }
                }
            }
        }

        // Tick.
        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();

            for action in input.update(TICK_MS) {
                game.apply_action(action);
            }

            fall_timer_ms += TICK_MS;
            if fall_timer_ms >= game.config().fall_interval_ms {
                fall_timer_ms -= game.config().fall_interval_ms;
                game.tick();
            }

            second_timer_ms += TICK_MS;
            if second_timer_ms >= 1000 {
                second_timer_ms -= 1000;
                game.tick_second();
            }
        }
    }
}
