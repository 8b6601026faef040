//! GameView: maps a `GameSnapshot` into a terminal frame.
//!
//! Pure (no I/O): bordered playfield, locked and active cells as colored
//! blocks, a side panel with score / remaining time / next-piece preview,
//! and a GAME OVER overlay.

use crate::core::snapshot::GameSnapshot;
use crate::term::fb::{Frame, Rgb, Style};
use crate::types::{GameStatus, PieceKind};

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Block color per piece kind, following the classic palette.
fn kind_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(0, 255, 255),  // cyan
        PieceKind::O => Rgb::new(255, 255, 0),  // yellow
        PieceKind::T => Rgb::new(160, 32, 192), // purple
        PieceKind::L => Rgb::new(255, 165, 0),  // orange
        PieceKind::J => Rgb::new(64, 96, 255),  // blue
        PieceKind::S => Rgb::new(0, 200, 80),   // green
        PieceKind::Z => Rgb::new(255, 40, 40),  // red
    }
}

/// Renders snapshots into frames.
///
/// `cell_w`/`cell_h` are the render-only block size: how many terminal
/// columns and rows one board cell occupies.
pub struct GameView {
    cell_w: u16,
    cell_h: u16,
}

impl Default for GameView {
    fn default() -> Self {
        // 2x1 compensates for the typical terminal glyph aspect ratio.
        Self { cell_w: 2, cell_h: 1 }
    }
}

impl GameView {
    pub fn new(cell_w: u16, cell_h: u16) -> Self {
        Self {
            cell_w: cell_w.max(1),
            cell_h: cell_h.max(1),
        }
    }

    /// Render one frame of the given snapshot, centered in the viewport.
    pub fn render(&self, snapshot: &GameSnapshot, viewport: Viewport) -> Frame {
        let mut frame = Frame::new(viewport.width, viewport.height);

        let field_w = snapshot.cols * self.cell_w;
        let field_h = snapshot.rows * self.cell_h;
        let frame_w = field_w + 2;
        let frame_h = field_h + 2;

        let start_x = viewport.width.saturating_sub(frame_w) / 2;
        let start_y = viewport.height.saturating_sub(frame_h) / 2;

        let field_bg = Style {
            fg: Rgb::new(70, 70, 80),
            bg: Rgb::new(20, 20, 28),
            bold: false,
        };
        let border = Style {
            fg: Rgb::new(190, 190, 190),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        frame.fill_rect(start_x + 1, start_y + 1, field_w, field_h, ' ', field_bg);
        self.draw_border(&mut frame, start_x, start_y, frame_w, frame_h, border);

        // Locked cells.
        for y in 0..snapshot.rows {
            for x in 0..snapshot.cols {
                if let Some(kind) = snapshot.cell(x, y) {
                    self.draw_block(&mut frame, start_x, start_y, x, y, kind);
                }
            }
        }

        // Active piece, offset by its position; rows above the board are
        // simply not drawn.
        if let Some(active) = &snapshot.active {
            for (sx, sy) in active.shape.cells() {
                let x = active.x + sx;
                let y = active.y + sy;
                if x >= 0 && (x as u16) < snapshot.cols && y >= 0 && (y as u16) < snapshot.rows {
                    self.draw_block(&mut frame, start_x, start_y, x as u16, y as u16, active.kind);
                }
            }
        }

        self.draw_side_panel(&mut frame, snapshot, viewport, start_x, start_y, frame_w);

        if snapshot.status == GameStatus::GameOver {
            self.draw_overlay(&mut frame, start_x, start_y, frame_w, frame_h, snapshot.score);
        }

        frame
    }

    fn draw_border(&self, frame: &mut Frame, x: u16, y: u16, w: u16, h: u16, style: Style) {
        if w < 2 || h < 2 {
            return;
        }

        frame.put_char(x, y, '┌', style);
        frame.put_char(x + w - 1, y, '┐', style);
        frame.put_char(x, y + h - 1, '└', style);
        frame.put_char(x + w - 1, y + h - 1, '┘', style);

        for dx in 1..w - 1 {
            frame.put_char(x + dx, y, '─', style);
            frame.put_char(x + dx, y + h - 1, '─', style);
        }
        for dy in 1..h - 1 {
            frame.put_char(x, y + dy, '│', style);
            frame.put_char(x + w - 1, y + dy, '│', style);
        }
    }

    fn draw_block(
        &self,
        frame: &mut Frame,
        start_x: u16,
        start_y: u16,
        cell_x: u16,
        cell_y: u16,
        kind: PieceKind,
    ) {
        let style = Style {
            fg: kind_color(kind),
            bg: Rgb::new(20, 20, 28),
            bold: true,
        };
        let px = start_x + 1 + cell_x * self.cell_w;
        let py = start_y + 1 + cell_y * self.cell_h;
        frame.fill_rect(px, py, self.cell_w, self.cell_h, '█', style);
    }

    fn draw_side_panel(
        &self,
        frame: &mut Frame,
        snapshot: &GameSnapshot,
        viewport: Viewport,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
    ) {
        let panel_x = start_x.saturating_add(frame_w).saturating_add(2);
        if panel_x >= viewport.width || viewport.width - panel_x < 10 {
            return;
        }

        let label = Style {
            fg: Rgb::new(220, 220, 220),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        let value = Style {
            fg: Rgb::new(190, 190, 190),
            bg: Rgb::new(0, 0, 0),
            bold: false,
        };

        let mut y = start_y;
        frame.put_str(panel_x, y, "SCORE", label);
        y = y.saturating_add(1);
        frame.put_str(panel_x, y, &snapshot.score.to_string(), value);
        y = y.saturating_add(2);

        if let Some(time_left) = snapshot.time_left {
            frame.put_str(panel_x, y, "TIME", label);
            y = y.saturating_add(1);
            frame.put_str(panel_x, y, &format!("{}s", time_left), value);
            y = y.saturating_add(2);
        }

        frame.put_str(panel_x, y, "NEXT", label);
        y = y.saturating_add(1);

        // Mini preview of the next piece's matrix.
        let next = snapshot.next.canonical_shape();
        let preview = Style {
            fg: kind_color(snapshot.next),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };
        for (sx, sy) in next.cells() {
            let px = panel_x + (sx as u16) * self.cell_w;
            let py = y + sy as u16;
            frame.fill_rect(px, py, self.cell_w, 1, '█', preview);
        }
    }

    fn draw_overlay(
        &self,
        frame: &mut Frame,
        start_x: u16,
        start_y: u16,
        frame_w: u16,
        frame_h: u16,
        score: u32,
    ) {
        let style = Style {
            fg: Rgb::new(255, 255, 255),
            bg: Rgb::new(0, 0, 0),
            bold: true,
        };

        let mid_y = start_y.saturating_add(frame_h / 2);
        let title = "GAME OVER";
        let detail = format!("score {} - r restarts", score);

        let tx = start_x.saturating_add(frame_w.saturating_sub(title.chars().count() as u16) / 2);
        frame.put_str(tx, mid_y, title, style);
        let dx = start_x.saturating_add(frame_w.saturating_sub(detail.chars().count() as u16) / 2);
        frame.put_str(dx, mid_y.saturating_add(1), &detail, style);
    }
}
