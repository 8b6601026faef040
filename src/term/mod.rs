//! Terminal rendering layer.
//!
//! The view renders snapshots into a plain character framebuffer; only
//! `TerminalRenderer` touches the terminal. Keeps `core` free of I/O.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use fb::{Frame, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
