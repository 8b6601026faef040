//! Input layer: key mapping plus hold-to-repeat state.

pub mod handler;
pub mod map;

pub use handler::InputHandler;
pub use map::{handle_key_event, should_quit};
