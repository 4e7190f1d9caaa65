//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It renders into a simple framebuffer that is then flushed to the terminal
//! by [`TerminalRenderer`].
//!
//! Goals:
//! - Keep `core` free of any rendering handle: views read `&GameState` only
//! - Allow precise control over aspect ratio (e.g. 2 chars wide per cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, Viewport, MAX_CELL_SIZE};
pub use renderer::TerminalRenderer;
