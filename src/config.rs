//! Game configuration and fail-fast validation.
//!
//! Everything the core must accept from the outside lives here: board
//! dimensions, fall cadence, optional countdown, and the scoring policy.
//! Render-only options (cell size) stay in the terminal layer.

use thiserror::Error;

use crate::core::pieces::MAX_SHAPE_SIZE;

/// How a line-clear event is converted into points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum ScoringMode {
    /// A fixed award per clear event, regardless of how many lines fell.
    FlatPerClear,
    /// `points_per_line` multiplied by the lines cleared in one event.
    PerLineMultiplied,
}

/// Configuration rejected at construction time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("board dimensions must be positive, got {rows}x{cols}")]
    EmptyBoard { rows: u16, cols: u16 },
    #[error("board must be at least {min} columns wide to fit every piece, got {cols}")]
    BoardTooNarrow { cols: u16, min: u16 },
    #[error("fall interval must be positive")]
    ZeroFallInterval,
}

/// Core engine configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GameConfig {
    /// Board height in rows (row 0 = top).
    pub rows: u16,
    /// Board width in columns.
    pub cols: u16,
    /// Gravity cadence: one forced down-step per interval.
    pub fall_interval_ms: u32,
    /// Optional countdown in seconds; `None` disables the timer.
    pub time_limit_secs: Option<u32>,
    pub scoring: ScoringMode,
    pub points_per_line: u32,
}

impl GameConfig {
    /// Reject configurations the engine cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyBoard {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.cols < MAX_SHAPE_SIZE as u16 {
            return Err(ConfigError::BoardTooNarrow {
                cols: self.cols,
                min: MAX_SHAPE_SIZE as u16,
            });
        }
        if self.fall_interval_ms == 0 {
            return Err(ConfigError::ZeroFallInterval);
        }
        Ok(())
    }
}

impl Default for GameConfig {
    /// Defaults match the 15x10 variant: 500ms gravity, 30s countdown,
    /// one point per cleared line.
    fn default() -> Self {
        Self {
            rows: 15,
            cols: 10,
            fall_interval_ms: 500,
            time_limit_secs: Some(30),
            scoring: ScoringMode::PerLineMultiplied,
            points_per_line: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        assert_eq!(GameConfig::default().validate(), Ok(()));
    }

    #[test]
    fn zero_dimensions_rejected() {
        let config = GameConfig {
            rows: 0,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::EmptyBoard { rows: 0, cols: 10 })
        );

        let config = GameConfig {
            cols: 0,
            ..GameConfig::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyBoard { .. })
        ));
    }

    #[test]
    fn narrow_board_rejected() {
        let config = GameConfig {
            cols: 3,
            ..GameConfig::default()
        };
        assert_eq!(
            config.validate(),
            Err(ConfigError::BoardTooNarrow { cols: 3, min: 4 })
        );
    }

    #[test]
    fn zero_fall_interval_rejected() {
        let config = GameConfig {
            fall_interval_ms: 0,
            ..GameConfig::default()
        };
        assert_eq!(config.validate(), Err(ConfigError::ZeroFallInterval));
    }
}
