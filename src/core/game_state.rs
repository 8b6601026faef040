//! Game state module - the engine tying board, pieces, RNG and scoring
//! together.
//!
//! The engine loops `spawn -> move/rotate -> lock -> clear -> spawn`, with
//! `GameOver` as the single absorbing state. Game over is reached either by
//! block-out (a fresh piece has no legal spawn position) or by the optional
//! countdown expiring; it is a status transition, never an error. Every
//! mutating entry point checks the status first, so drivers need no guards
//! of their own after the game ends.

use crate::config::{ConfigError, GameConfig};
use crate::core::board::Board;
use crate::core::pieces::Shape;
use crate::core::rng::PiecePicker;
use crate::core::scoring::score_for_clear;
use crate::core::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::{Direction, GameAction, GameStatus, PieceKind};

/// Spawn column for a shape of the given width: horizontally centered.
pub fn spawn_x(cols: u16, shape_width: u16) -> i16 {
    (cols / 2) as i16 - (shape_width / 2) as i16
}

/// The active falling piece: kind, current shape matrix, and the offset of
/// the shape's local origin within the board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

impl Tetromino {
    /// A new piece of `kind` at its spawn position on a `cols`-wide board.
    pub fn spawn(kind: PieceKind, cols: u16) -> Self {
        let shape = kind.canonical_shape();
        let x = spawn_x(cols, shape.width());
        Self { kind, shape, x, y: 0 }
    }
}

/// Complete game state.
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    board: Board,
    active: Option<Tetromino>,
    picker: PiecePicker,
    score: u32,
    status: GameStatus,
    /// Remaining countdown seconds, `None` when the timer is disabled.
    time_left: Option<u32>,
}

impl GameState {
    /// Create a game and spawn the first piece.
    ///
    /// Fails fast on malformed configuration; gameplay itself never
    /// returns errors.
    pub fn new(config: GameConfig, seed: u32) -> Result<Self, ConfigError> {
        config.validate()?;

        let mut state = Self {
            board: Board::new(config.rows, config.cols),
            active: None,
            picker: PiecePicker::new(seed),
            score: 0,
            status: GameStatus::Playing,
            time_left: config.time_limit_secs,
            config,
        };
        state.spawn_piece();
        Ok(state)
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Mutable board access, for tests and scenario setup.
    pub fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    pub fn active(&self) -> Option<&Tetromino> {
        self.active.as_ref()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn time_left(&self) -> Option<u32> {
        self.time_left
    }

    /// The kind the next spawn will produce (preview).
    pub fn next_kind(&self) -> PieceKind {
        self.picker.peek()
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    /// Draw a kind and place it horizontally centered at the top.
    ///
    /// If the fresh piece has no legal spawn position the game is over
    /// (block-out). No-op once the game has ended.
    pub fn spawn_piece(&mut self) {
        if self.status.is_game_over() {
            return;
        }

        let piece = Tetromino::spawn(self.picker.draw(), self.board.cols());
        if self.board.can_place(&piece.shape, piece.x, piece.y) {
            self.active = Some(piece);
        } else {
            self.active = None;
            self.status = GameStatus::GameOver;
        }
    }

    /// Translate the active piece one step in `direction`.
    ///
    /// A blocked left/right move is simply ignored. A blocked down move is
    /// the lock event: the piece settles into the board, full rows clear,
    /// the score updates, and the next piece spawns - exactly once.
    /// Returns whether the piece moved.
    pub fn move_piece(&mut self, direction: Direction) -> bool {
        if self.status.is_game_over() {
            return false;
        }
        let Some(active) = &self.active else {
            return false;
        };

        let (dx, dy) = direction.offset();
        let (nx, ny) = (active.x + dx, active.y + dy);
        if self.board.can_place(&active.shape, nx, ny) {
            if let Some(active) = self.active.as_mut() {
                active.x = nx;
                active.y = ny;
            }
            return true;
        }

        if direction == Direction::Down {
            self.lock_and_respawn();
        }
        false
    }

    /// Settle the active piece, clear full rows, score, and respawn.
    fn lock_and_respawn(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.lock(&piece.shape, piece.x, piece.y, piece.kind);
        let cleared = self.board.clear_full_rows();
        self.score += score_for_clear(self.config.scoring, self.config.points_per_line, cleared);
        self.spawn_piece();
    }

    /// Rotate the active piece 90 degrees clockwise.
    ///
    /// The candidate shape must fit at the current position; there is no
    /// wall-kick search. Returns whether the rotation was accepted.
    pub fn rotate(&mut self) -> bool {
        if self.status.is_game_over() {
            return false;
        }
        let Some(active) = &self.active else {
            return false;
        };

        let candidate = active.shape.rotated_cw();
        if self.board.can_place(&candidate, active.x, active.y) {
            if let Some(active) = self.active.as_mut() {
                active.shape = candidate;
            }
            return true;
        }
        false
    }

    /// Gravity step, driven by the external fall cadence.
    pub fn tick(&mut self) -> bool {
        self.move_piece(Direction::Down)
    }

    /// Countdown step, driven once per real second.
    ///
    /// Reaching zero forces game over. No-op when the timer is disabled
    /// or the game has already ended.
    pub fn tick_second(&mut self) {
        if self.status.is_game_over() {
            return;
        }
        if let Some(time_left) = &mut self.time_left {
            *time_left = time_left.saturating_sub(1);
            if *time_left == 0 {
                self.status = GameStatus::GameOver;
            }
        }
    }

    /// Start over: empty board, zero score, restored countdown, fresh piece.
    pub fn reset(&mut self) {
        self.board.clear();
        self.score = 0;
        self.status = GameStatus::Playing;
        self.time_left = self.config.time_limit_secs;
        self.active = None;
        self.spawn_piece();
    }

    /// Apply an input-layer action. Returns whether it changed the piece.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_piece(Direction::Left),
            GameAction::MoveRight => self.move_piece(Direction::Right),
            GameAction::MoveDown => self.move_piece(Direction::Down),
            GameAction::Rotate => self.rotate(),
            GameAction::Restart => {
                self.reset();
                true
            }
        }
    }

    /// Fill a reusable snapshot buffer with the current state.
    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.rows = self.board.rows();
        out.cols = self.board.cols();
        out.grid.clear();
        out.grid.extend_from_slice(self.board.cells());
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.next = self.next_kind();
        out.score = self.score;
        out.status = self.status;
        out.time_left = self.time_left;
    }

    /// Allocate a fresh snapshot of the current state.
    pub fn snapshot(&self) -> GameSnapshot {
        let mut snapshot = GameSnapshot::default();
        self.snapshot_into(&mut snapshot);
        snapshot
    }
}
