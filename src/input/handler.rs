//! Hold-to-repeat input handling for terminal environments.
//!
//! A held directional key re-issues its move on a fixed 100ms interval
//! until release. Terminals that never emit key-release events get a
//! timeout-based auto-release so a single tap cannot leak a repeating
//! trigger.

use arrayvec::ArrayVec;
use crossterm::event::KeyCode;

use crate::types::{GameAction, REPEAT_INTERVAL_MS};

/// Horizontal hold state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Held {
    Left,
    Right,
    None,
}

// Without key-release events, a short timeout keeps a tap from becoming a
// sustained hold.
const DEFAULT_KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Tracks held directional keys and emits repeat actions.
#[derive(Debug, Clone)]
pub struct InputHandler {
    horizontal: Held,
    down_held: bool,
    last_key_time: std::time::Instant,
    horizontal_timer: u32,
    down_timer: u32,
    repeat_interval: u32,
    key_release_timeout_ms: u32,
}

impl InputHandler {
    pub fn new() -> Self {
        Self::with_repeat_interval(REPEAT_INTERVAL_MS)
    }

    pub fn with_repeat_interval(repeat_interval: u32) -> Self {
        Self {
            horizontal: Held::None,
            down_held: false,
            last_key_time: std::time::Instant::now(),
            horizontal_timer: 0,
            down_timer: 0,
            repeat_interval,
            key_release_timeout_ms: DEFAULT_KEY_RELEASE_TIMEOUT_MS,
        }
    }

    pub fn with_key_release_timeout_ms(mut self, timeout_ms: u32) -> Self {
        self.key_release_timeout_ms = timeout_ms;
        self
    }

    /// Register a key press. Returns the immediate action for directional
    /// keys; repeats come later from `update`.
    pub fn handle_key_press(&mut self, code: KeyCode) -> Option<GameAction> {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
                self.last_key_time = std::time::Instant::now();
                if self.horizontal == Held::Left {
                    None
                } else {
                    self.horizontal = Held::Left;
                    self.horizontal_timer = 0;
                    Some(GameAction::MoveLeft)
                }
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
                self.last_key_time = std::time::Instant::now();
                if self.horizontal == Held::Right {
                    None
                } else {
                    self.horizontal = Held::Right;
                    self.horizontal_timer = 0;
                    Some(GameAction::MoveRight)
                }
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
                self.last_key_time = std::time::Instant::now();
                if self.down_held {
                    None
                } else {
                    self.down_held = true;
                    self.down_timer = 0;
                    Some(GameAction::MoveDown)
                }
            }
            _ => None,
        }
    }

    /// Register a key release, cancelling its repeat.
    pub fn handle_key_release(&mut self, code: KeyCode) {
        match code {
            KeyCode::Left | KeyCode::Char('a') | KeyCode::Char('A') | KeyCode::Char('h') => {
                if self.horizontal == Held::Left {
                    self.horizontal = Held::None;
                    self.horizontal_timer = 0;
                }
            }
            KeyCode::Right | KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Char('l') => {
                if self.horizontal == Held::Right {
                    self.horizontal = Held::None;
                    self.horizontal_timer = 0;
                }
            }
            KeyCode::Down | KeyCode::Char('s') | KeyCode::Char('S') | KeyCode::Char('j') => {
                self.down_held = false;
                self.down_timer = 0;
            }
            _ => {}
        }
    }

    /// Advance hold timers by `elapsed_ms` and collect due repeats.
    pub fn update(&mut self, elapsed_ms: u32) -> ArrayVec<GameAction, 16> {
        let mut actions = ArrayVec::new();

        // Auto-release when the terminal never reports releases.
        let since_last_key = self.last_key_time.elapsed().as_millis() as u32;
        if since_last_key > self.key_release_timeout_ms {
            self.horizontal = Held::None;
            self.horizontal_timer = 0;
            self.down_held = false;
            self.down_timer = 0;
        }

        match self.horizontal {
            Held::Left | Held::Right => {
                self.horizontal_timer += elapsed_ms;
                while self.horizontal_timer >= self.repeat_interval {
                    self.horizontal_timer -= self.repeat_interval;
                    let action = if self.horizontal == Held::Left {
                        GameAction::MoveLeft
                    } else {
                        GameAction::MoveRight
                    };
                    let _ = actions.try_push(action);
                }
            }
            Held::None => {}
        }

        if self.down_held {
            self.down_timer += elapsed_ms;
            while self.down_timer >= self.repeat_interval {
                self.down_timer -= self.repeat_interval;
                let _ = actions.try_push(GameAction::MoveDown);
            }
        }

        actions
    }

    /// Drop all held state, e.g. on restart.
    pub fn reset(&mut self) {
        self.horizontal = Held::None;
        self.down_held = false;
        self.horizontal_timer = 0;
        self.down_timer = 0;
        self.last_key_time = std::time::Instant::now();
    }
}

impl Default for InputHandler {
    fn default() -> Self {
        Self::new()
    }
}
