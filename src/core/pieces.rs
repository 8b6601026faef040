//! Tetromino shapes as rectangular binary matrices.
//!
//! Each shape is a grid of occupied/empty cells relative to a local origin
//! (top-left). Rotation is the transpose-then-reverse-rows transform, a 90
//! degree clockwise turn that recomputes the bounding box. There is no
//! wall-kick search: a rotation either fits where the piece stands or is
//! rejected in full.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Maximum shape extent in either dimension (the I piece lying flat).
pub const MAX_SHAPE_SIZE: usize = 4;

/// A rectangular binary matrix, at most 4x4, stored inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Shape {
    rows: ArrayVec<ArrayVec<bool, MAX_SHAPE_SIZE>, MAX_SHAPE_SIZE>,
}

impl Shape {
    /// Build a shape from 0/1 rows. All rows must have equal width.
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        debug_assert!(!rows.is_empty() && rows.len() <= MAX_SHAPE_SIZE);
        debug_assert!(rows.iter().all(|r| r.len() == rows[0].len()));

        let mut out = ArrayVec::new();
        for row in rows {
            let mut cells = ArrayVec::new();
            for &v in *row {
                cells.push(v != 0);
            }
            out.push(cells);
        }
        Self { rows: out }
    }

    /// Width of the bounding box in columns.
    pub fn width(&self) -> u16 {
        self.rows[0].len() as u16
    }

    /// Height of the bounding box in rows.
    pub fn height(&self) -> u16 {
        self.rows.len() as u16
    }

    /// Whether the local cell `(x, y)` is occupied.
    pub fn is_set(&self, x: u16, y: u16) -> bool {
        self.rows
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
            .unwrap_or(false)
    }

    /// Iterate the occupied cells as `(x, y)` offsets from the local origin.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .filter(|&(_, &set)| set)
                .map(move |(x, _)| (x as i16, y as i16))
        })
    }

    /// The shape rotated 90 degrees clockwise.
    ///
    /// `new[i][j] = old[h-1-j][i]`: transpose, then reverse each row.
    /// Stays rectangular; an `h x w` shape becomes `w x h`.
    pub fn rotated_cw(&self) -> Shape {
        let h = self.rows.len();
        let w = self.rows[0].len();

        let mut out = ArrayVec::new();
        for i in 0..w {
            let mut row = ArrayVec::new();
            for j in 0..h {
                row.push(self.rows[h - 1 - j][i]);
            }
            out.push(row);
        }
        Shape { rows: out }
    }
}

impl PieceKind {
    /// The canonical (spawn) shape for this kind.
    pub fn canonical_shape(self) -> Shape {
        match self {
            PieceKind::I => Shape::from_rows(&[&[1, 1, 1, 1]]),
            PieceKind::O => Shape::from_rows(&[&[1, 1], &[1, 1]]),
            PieceKind::T => Shape::from_rows(&[&[0, 1, 0], &[1, 1, 1]]),
            PieceKind::L => Shape::from_rows(&[&[1, 0, 0], &[1, 1, 1]]),
            PieceKind::J => Shape::from_rows(&[&[0, 0, 1], &[1, 1, 1]]),
            PieceKind::S => Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]),
            PieceKind::Z => Shape::from_rows(&[&[0, 1, 1], &[1, 1, 0]]),
        }
    }
}
