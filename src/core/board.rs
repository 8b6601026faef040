//! Board module - the occupancy grid and its settlement rules.
//!
//! Row-major flat storage with runtime dimensions. Coordinates are
//! `(x, y)` with x in `0..cols` (left to right) and y in `0..rows`
//! (top to bottom). y may be negative during placement checks: the strip
//! above the visible board is bounded horizontally but never occupied,
//! which lets a piece sit partially off-screen at spawn.

use crate::core::pieces::Shape;
use crate::types::{Cell, PieceKind};

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: u16,
    cols: u16,
    /// Flat cells, row-major (`y * cols + x`).
    cells: Vec<Cell>,
}

impl Board {
    /// Create an empty board. Dimensions are validated by `GameConfig`
    /// before the engine constructs one.
    pub fn new(rows: u16, cols: u16) -> Self {
        debug_assert!(rows > 0 && cols > 0);
        Self {
            rows,
            cols,
            cells: vec![None; rows as usize * cols as usize],
        }
    }

    pub fn rows(&self) -> u16 {
        self.rows
    }

    pub fn cols(&self) -> u16 {
        self.cols
    }

    #[inline]
    fn index(&self, x: i16, y: i16) -> Option<usize> {
        if x < 0 || x >= self.cols as i16 || y < 0 || y >= self.rows as i16 {
            return None;
        }
        Some(y as usize * self.cols as usize + x as usize)
    }

    /// Cell at `(x, y)`, or `None` when out of bounds.
    pub fn get(&self, x: i16, y: i16) -> Option<Cell> {
        self.index(x, y).map(|i| self.cells[i])
    }

    /// Write a cell. Returns false when out of bounds.
    pub fn set(&mut self, x: i16, y: i16, cell: Cell) -> bool {
        match self.index(x, y) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// Whether `(x, y)` is in bounds and filled.
    pub fn is_filled(&self, x: i16, y: i16) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// The single source of truth for collision.
    ///
    /// A placement is valid when every occupied shape cell lands in
    /// `0..cols` horizontally, above `rows` vertically, and - for rows
    /// at or below the top edge - on an empty cell. Rows above the board
    /// (`y < 0`) are only bounds-checked horizontally.
    pub fn can_place(&self, shape: &Shape, x: i16, y: i16) -> bool {
        shape.cells().all(|(sx, sy)| {
            let px = x + sx;
            let py = y + sy;
            if px < 0 || px >= self.cols as i16 || py >= self.rows as i16 {
                return false;
            }
            py < 0 || !self.is_filled(px, py)
        })
    }

    /// Settle a piece into the grid.
    ///
    /// Every occupied cell with board row >= 0 becomes `Filled(kind)`;
    /// cells mapped above the board are dropped silently. The caller is
    /// responsible for having validated the position when it mattered.
    pub fn lock(&mut self, shape: &Shape, x: i16, y: i16, kind: PieceKind) {
        for (sx, sy) in shape.cells() {
            let py = y + sy;
            if py >= 0 {
                self.set(x + sx, py, Some(kind));
            }
        }
    }

    /// Whether row `y` is completely filled.
    pub fn is_row_full(&self, y: u16) -> bool {
        if y >= self.rows {
            return false;
        }
        let start = y as usize * self.cols as usize;
        let end = start + self.cols as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Remove every full row in one pass and return how many were removed.
    ///
    /// Two-pointer compaction from the bottom: surviving rows shift down
    /// into the write cursor, then the vacated top rows are blanked. Row
    /// count stays constant and the relative order of survivors is kept.
    pub fn clear_full_rows(&mut self) -> usize {
        let cols = self.cols as usize;
        let mut cleared = 0usize;
        let mut write_y = self.rows as usize;

        for read_y in (0..self.rows as usize).rev() {
            if self.is_row_full(read_y as u16) {
                cleared += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src = read_y * cols;
                    self.cells.copy_within(src..src + cols, write_y * cols);
                }
            }
        }

        for cell in &mut self.cells[..write_y * cols] {
            *cell = None;
        }

        cleared
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(None);
    }

    /// Flat view of the cells, row-major.
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }
}
