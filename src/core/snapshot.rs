//! Read-only state snapshots consumed by the renderer.
//!
//! The render layer never touches `GameState` directly; it gets a plain
//! data view. `GameState::snapshot_into` refills an existing snapshot so a
//! frame loop can reuse one buffer.

use crate::core::game_state::Tetromino;
use crate::core::pieces::Shape;
use crate::types::{Cell, GameStatus, PieceKind};

/// The active piece as seen by the renderer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i16,
    pub y: i16,
}

impl From<&Tetromino> for ActiveSnapshot {
    fn from(piece: &Tetromino) -> Self {
        Self {
            kind: piece.kind,
            shape: piece.shape.clone(),
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Everything a render step needs, as plain data.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub rows: u16,
    pub cols: u16,
    /// Locked cells, row-major (`y * cols + x`).
    pub grid: Vec<Cell>,
    pub active: Option<ActiveSnapshot>,
    /// Preview of the next spawn.
    pub next: PieceKind,
    pub score: u32,
    pub status: GameStatus,
    /// Remaining countdown seconds, if the timer is enabled.
    pub time_left: Option<u32>,
}

impl GameSnapshot {
    /// Locked cell at `(x, y)`, or `None` when out of bounds.
    pub fn cell(&self, x: u16, y: u16) -> Cell {
        if x >= self.cols || y >= self.rows {
            return None;
        }
        self.grid[y as usize * self.cols as usize + x as usize]
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            rows: 0,
            cols: 0,
            grid: Vec::new(),
            active: None,
            next: PieceKind::I,
            score: 0,
            status: GameStatus::Playing,
            time_left: None,
        }
    }
}
