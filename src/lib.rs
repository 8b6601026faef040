//! Blockfall: a small falling-block game with a deterministic core.
//!
//! `core` holds the pure game engine (board, pieces, scoring, countdown)
//! and has no terminal or timing dependencies; `input` and `term` wrap it
//! for interactive play. The binary wires the three together.

pub mod config;
pub mod core;
pub mod input;
pub mod term;
pub mod types;
