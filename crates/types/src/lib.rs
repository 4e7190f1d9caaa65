//! Shared types module - plain data and constants used by every crate
//!
//! Everything here is pure data with no external dependencies, so it can be
//! used from the engine, the terminal adapter and the high-score store alike.
//!
//! # Board Dimensions
//!
//! - **Columns**: 10 (indexed 0-9, left to right)
//! - **Rows**: 20 (indexed 0-19, top to bottom)
//! - **Spawn**: horizontally centered, row 0
//!
//! # Progression Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `BASE_FALL_INTERVAL_MS` | 500 | Fall interval at level 1 |
//! | `FALL_INTERVAL_STEP_MS` | 40 | Speed-up per level |
//! | `MIN_FALL_INTERVAL_MS` | 100 | Fastest fall interval |
//! | `LINES_PER_LEVEL` | 10 | Cleared lines needed per level |
//! | `POINTS_PER_LINE` | 10 | Score per cleared line |
//! | `SCORE_MILESTONE` | 200 | Cosmetic "next level" points step |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{Cell, Rgb, ShapeKind, COLUMNS, ROWS};
//!
//! let cell = Cell::Occupied { color: Rgb::new(200, 60, 60) };
//! assert!(cell.is_occupied());
//! assert!(!Cell::Empty.is_occupied());
//! assert_eq!(ShapeKind::ALL.len(), 7);
//!
//! assert_eq!(COLUMNS, 10);
//! assert_eq!(ROWS, 20);
//! ```

/// Board width in cells
pub const COLUMNS: u8 = 10;

/// Board height in cells
pub const ROWS: u8 = 20;

/// Frame interval of the outer loop in milliseconds (~60 FPS)
pub const FRAME_MS: u64 = 16;

/// Fall interval at level 1
pub const BASE_FALL_INTERVAL_MS: u32 = 500;

/// Fall interval reduction per level
pub const FALL_INTERVAL_STEP_MS: u32 = 40;

/// Floor for the fall interval
pub const MIN_FALL_INTERVAL_MS: u32 = 100;

/// Lines needed to advance one level
pub const LINES_PER_LEVEL: u32 = 10;

/// Points awarded per cleared line
pub const POINTS_PER_LINE: u32 = 10;

/// Cosmetic score step shown as "points to next level" in the HUD.
///
/// Not used by the level formula.
pub const SCORE_MILESTONE: u32 = 200;

/// Lowest value of a random piece color channel
pub const COLOR_CHANNEL_MIN: u8 = 50;

/// Highest value of a random piece color channel
pub const COLOR_CHANNEL_MAX: u8 = 255;

/// How long the final "GAME OVER" frame stays up
pub const GAME_OVER_HOLD_MS: u64 = 3000;

/// 24-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}

/// The seven piece geometries
///
/// Declared in catalog order: I, Z, S, O, L, J, T.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ShapeKind {
    I,
    Z,
    S,
    O,
    L,
    J,
    T,
}

impl ShapeKind {
    /// Every kind, in catalog order
    pub const ALL: [ShapeKind; 7] = [
        ShapeKind::I,
        ShapeKind::Z,
        ShapeKind::S,
        ShapeKind::O,
        ShapeKind::L,
        ShapeKind::J,
        ShapeKind::T,
    ];
}

/// A cell on the game board
///
/// Frozen cells keep the color of the piece that produced them. How an
/// occupied cell is outlined is up to the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Cell {
    #[default]
    Empty,
    Occupied {
        color: Rgb,
    },
}

impl Cell {
    pub fn is_occupied(&self) -> bool {
        matches!(self, Cell::Occupied { .. })
    }

    pub fn color(&self) -> Option<Rgb> {
        match self {
            Cell::Empty => None,
            Cell::Occupied { color } => Some(*color),
        }
    }
}

/// Commands the outer loop feeds into the engine
///
/// Each action maps to exactly one engine operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameAction {
    /// Move piece one column left
    MoveLeft,
    /// Move piece one column right
    MoveRight,
    /// Move piece one row down (locks it if blocked)
    SoftDrop,
    /// Rotate piece 90° clockwise
    Rotate,
    /// Drop piece to the lowest free position and lock it
    HardDrop,
    /// End the game
    Quit,
}
