//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has
//! **zero dependencies** on terminals, files or clocks:
//!
//! - **Deterministic**: randomness is injected, so the same seed replays the same game
//! - **Testable**: every rule is a plain function or method on plain data
//! - **Portable**: the same engine runs in the terminal, in tests and in benchmarks
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven piece geometries as small occupancy grids
//! - [`piece`]: the falling piece, its spawn position and rotation
//! - [`board`]: 10x20 grid with collision detection, freezing and line clearing
//! - [`rng`]: the [`RandomSource`] capability and its implementations
//! - [`scoring`]: score, level and fall interval formulas
//! - [`game_state`]: the engine tying it all together
//!
//! # Game Rules
//!
//! - Pieces and colors are drawn uniformly at random
//! - Rotation is a plain 90° clockwise turn with no wall kicks
//! - A blocked downward move (or a hard drop) freezes the piece
//! - Each cleared line scores 10 points
//! - Level is `1 + lines / 10`; the fall interval is `max(100, 500 - (level - 1) * 40)` ms
//! - The game ends when a newly promoted piece collides at spawn
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.apply_action(GameAction::HardDrop);
//!
//! assert_eq!(game.board().occupied_count(), 4);
//! assert!(!game.game_over());
//! ```
//!
//! # Timing
//!
//! The engine has no clock. Call [`GameState::tick`](game_state::GameState::tick)
//! once per frame with a monotonic millisecond reading; it moves the piece down
//! whenever more than the current fall interval has elapsed since the last
//! automatic move.

pub mod board;
pub mod game_state;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod shapes;

pub use blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game_state::GameState;
pub use piece::{rotate, Piece};
pub use rng::{RandomSource, SequenceSource};
pub use shapes::{get_shape, Shape};
