//! Scoring policy for line clears.
//!
//! Two observed variants are reconciled behind one function: a flat award
//! per clear event, or a per-line award multiplied by the lines removed in
//! that event. Nothing else in the game produces points.

use crate::config::ScoringMode;

/// Points awarded for a clear event that removed `lines` rows.
/// Returns 0 when nothing was cleared.
pub fn score_for_clear(mode: ScoringMode, points_per_line: u32, lines: usize) -> u32 {
    if lines == 0 {
        return 0;
    }
    match mode {
        ScoringMode::FlatPerClear => points_per_line,
        ScoringMode::PerLineMultiplied => points_per_line.saturating_mul(lines as u32),
    }
}
