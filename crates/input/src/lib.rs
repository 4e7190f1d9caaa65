//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] values.
//! Every recognized key press becomes exactly one engine command.

pub mod map;

pub use blockfall_types as types;

pub use map::handle_key_event;
