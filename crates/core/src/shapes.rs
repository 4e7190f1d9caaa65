//! Shapes module - piece geometry and the seven-shape catalog
//!
//! A shape is a small rectangular grid of occupancy flags. Storage is a
//! fixed-capacity 4x4 `ArrayVec`, so creating and rotating shapes never
//! allocates.

use arrayvec::ArrayVec;

use crate::types::ShapeKind;

/// Largest width or height a shape grid may have
pub const MAX_SHAPE_SIZE: usize = 4;

type ShapeRow = ArrayVec<bool, MAX_SHAPE_SIZE>;

/// Rectangular occupancy grid of a piece (rows x columns)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct Shape {
    rows: ArrayVec<ShapeRow, MAX_SHAPE_SIZE>,
}

impl Shape {
    /// Build a shape from rows of 0/1 flags
    ///
    /// # Panics
    ///
    /// Panics if the grid is ragged or larger than 4x4.
    ///
    /// # Examples
    ///
    /// ```
    /// use blockfall_core::Shape;
    ///
    /// let z = Shape::from_rows(&[&[1, 1, 0], &[0, 1, 1]]);
    /// assert_eq!(z.width(), 3);
    /// assert_eq!(z.height(), 2);
    /// assert!(z.is_filled(0, 0));
    /// assert!(!z.is_filled(1, 0));
    /// ```
    pub fn from_rows(rows: &[&[u8]]) -> Self {
        assert!(rows.len() <= MAX_SHAPE_SIZE, "shape has too many rows");
        let width = rows.first().map_or(0, |r| r.len());
        assert!(width <= MAX_SHAPE_SIZE, "shape has too many columns");

        let mut grid = ArrayVec::new();
        for row in rows {
            assert_eq!(row.len(), width, "shape rows must have equal length");
            grid.push(row.iter().map(|&flag| flag != 0).collect());
        }
        Self { rows: grid }
    }

    /// Number of columns
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, |r| r.len())
    }

    /// Number of rows
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    /// Whether the flag at (row, col) is set; false outside the grid
    pub fn is_filled(&self, row: usize, col: usize) -> bool {
        self.rows
            .get(row)
            .and_then(|r| r.get(col))
            .copied()
            .unwrap_or(false)
    }

    /// Offsets `(col, row)` of every occupied flag, row-major
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.rows.iter().enumerate().flat_map(|(row, flags)| {
            flags
                .iter()
                .enumerate()
                .filter(|(_, filled)| **filled)
                .map(move |(col, _)| (col as i8, row as i8))
        })
    }

    /// Rotate 90° clockwise
    ///
    /// Transpose of the row-reversed grid: a `h x w` shape becomes `w x h`.
    pub fn rotated_cw(&self) -> Shape {
        let height = self.height();
        let rows = (0..self.width())
            .map(|col| {
                (0..height)
                    .map(|row| self.rows[height - 1 - row][col])
                    .collect::<ShapeRow>()
            })
            .collect();
        Shape { rows }
    }
}

const I_ROWS: &[&[u8]] = &[&[1, 1, 1, 1]];
const Z_ROWS: &[&[u8]] = &[&[1, 1, 0], &[0, 1, 1]];
const S_ROWS: &[&[u8]] = &[&[0, 1, 1], &[1, 1, 0]];
const O_ROWS: &[&[u8]] = &[&[1, 1], &[1, 1]];
const L_ROWS: &[&[u8]] = &[&[1, 0, 0], &[1, 1, 1]];
const J_ROWS: &[&[u8]] = &[&[0, 0, 1], &[1, 1, 1]];
const T_ROWS: &[&[u8]] = &[&[0, 1, 0], &[1, 1, 1]];

/// Spawn geometry of a shape kind
pub fn get_shape(kind: ShapeKind) -> Shape {
    let rows = match kind {
        ShapeKind::I => I_ROWS,
        ShapeKind::Z => Z_ROWS,
        ShapeKind::S => S_ROWS,
        ShapeKind::O => O_ROWS,
        ShapeKind::L => L_ROWS,
        ShapeKind::J => J_ROWS,
        ShapeKind::T => T_ROWS,
    };
    Shape::from_rows(rows)
}
