//! Board module - manages the game grid
//!
//! The board is a 10x20 grid where each cell is empty or holds the color of a
//! frozen piece. Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom).
//! Rows above the board (y < 0) are open space: pieces may overhang the top edge.

use crate::piece::Piece;
use crate::shapes::Shape;
use crate::types::{Cell, Rgb, COLUMNS, ROWS};

/// Total number of cells on the board
const BOARD_SIZE: usize = (COLUMNS as usize) * (ROWS as usize);

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Board {
    /// Flat array of cells, row-major order (y * COLUMNS + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if Self::is_out_of_bounds(x, y) {
            return None;
        }
        Some((y as usize) * (COLUMNS as usize) + (x as usize))
    }

    pub fn width(&self) -> u8 {
        COLUMNS
    }

    pub fn height(&self) -> u8 {
        ROWS
    }

    /// Get cell at position (x, y), `None` if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Cell::Occupied { .. }))
    }

    pub fn is_out_of_bounds(x: i8, y: i8) -> bool {
        x < 0 || x >= COLUMNS as i8 || y < 0 || y >= ROWS as i8
    }

    /// Fill every cell of row `y` with `color`
    pub fn fill_row(&mut self, y: usize, color: Rgb) {
        if let Some(row) = self.row_mut(y) {
            row.fill(Cell::Occupied { color });
        }
    }

    /// Cells of row `y`, left to right
    pub fn row(&self, y: usize) -> Option<&[Cell]> {
        if y >= ROWS as usize {
            return None;
        }
        let start = y * COLUMNS as usize;
        Some(&self.cells[start..start + COLUMNS as usize])
    }

    fn row_mut(&mut self, y: usize) -> Option<&mut [Cell]> {
        if y >= ROWS as usize {
            return None;
        }
        let start = y * COLUMNS as usize;
        Some(&mut self.cells[start..start + COLUMNS as usize])
    }

    /// Iterate over rows top to bottom
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(COLUMNS as usize)
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        self.row(y)
            .is_some_and(|row| row.iter().all(Cell::is_occupied))
    }

    /// Delete row `y` and insert an empty row at the top
    ///
    /// Rows above `y` shift down by one; rows below keep their index.
    pub fn clear_row(&mut self, y: usize) -> bool {
        if y >= ROWS as usize {
            return false;
        }

        let width = COLUMNS as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            self.cells
                .copy_within(src_start..src_start + width, row * width);
        }
        self.cells[..width].fill(Cell::Empty);

        true
    }

    /// Remove every full row, scanning top to bottom in a single pass
    ///
    /// Each full row is deleted as soon as it is found and an empty row is
    /// inserted at index 0; the scan then continues at the next index.
    /// Returns the number of rows removed.
    pub fn clear_lines(&mut self) -> u32 {
        let mut cleared = 0;
        for y in 0..ROWS as usize {
            if self.is_row_full(y) {
                self.clear_row(y);
                cleared += 1;
            }
        }
        cleared
    }

    /// Whether `piece`, offset by (dx, dy) and optionally given another shape,
    /// hits a side wall, the floor, or an occupied cell.
    ///
    /// Cells above the top edge never collide.
    pub fn check_collision(&self, piece: &Piece, dx: i8, dy: i8, shape: Option<&Shape>) -> bool {
        let shape = shape.unwrap_or(&piece.shape);
        // i16 sums: far-off offsets collide instead of overflowing
        shape.cells().any(|(col, row)| {
            let x = i16::from(piece.x) + i16::from(col) + i16::from(dx);
            let y = i16::from(piece.y) + i16::from(row) + i16::from(dy);
            if x < 0 || x >= i16::from(COLUMNS) || y >= i16::from(ROWS) {
                return true;
            }
            y >= 0 && self.is_occupied(x as i8, y as i8)
        })
    }

    /// Write the piece's color into every cell it covers
    ///
    /// Callers check for collision first. Cells above the top edge are dropped.
    pub fn freeze(&mut self, piece: &Piece) {
        let cell = Cell::Occupied { color: piece.color };
        for (x, y) in piece.cells() {
            self.set(x, y, cell);
        }
    }

    /// Number of occupied cells
    pub fn occupied_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_occupied()).count()
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
