//! Core module - pure game logic with no I/O dependencies.
//!
//! Everything here is deterministic given a seed and a sequence of
//! operations; the terminal layers consume it through snapshots.

pub mod board;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use board::Board;
pub use game_state::{spawn_x, GameState, Tetromino};
pub use pieces::Shape;
pub use rng::{PiecePicker, SimpleRng};
pub use scoring::score_for_clear;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
