//! Piece module - the falling unit and its rotation

use crate::rng::RandomSource;
use crate::shapes::{get_shape, Shape};
use crate::types::{Rgb, ShapeKind, COLUMNS};

/// Falling piece: geometry, color and top-left anchor in board coordinates
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: ShapeKind,
    pub shape: Shape,
    pub color: Rgb,
    pub x: i8,
    pub y: i8,
}

impl Piece {
    /// Create a piece of the given kind at its spawn position
    pub fn new(kind: ShapeKind, color: Rgb) -> Self {
        let shape = get_shape(kind);
        Self {
            kind,
            x: spawn_x(&shape),
            y: 0,
            shape,
            color,
        }
    }

    /// Create a piece with a random shape and color
    pub fn random(rng: &mut impl RandomSource) -> Self {
        let kind = rng.next_shape();
        let color = rng.next_color();
        Self::new(kind, color)
    }

    /// Absolute board coordinates `(x, y)` of every occupied cell
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8)> + '_ {
        self.shape
            .cells()
            .map(move |(col, row)| (self.x.saturating_add(col), self.y.saturating_add(row)))
    }
}

/// Column that horizontally centers `shape` on the board
pub fn spawn_x(shape: &Shape) -> i8 {
    (COLUMNS / 2) as i8 - (shape.width() / 2) as i8
}

/// 90° clockwise rotation of a shape
///
/// Pure: position is untouched, so callers must re-check placement.
pub fn rotate(shape: &Shape) -> Shape {
    shape.rotated_cw()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::SequenceSource;

    #[test]
    fn test_spawn_is_centered() {
        let gray = Rgb::new(128, 128, 128);
        // I is 4 wide: 5 - 2
        assert_eq!(Piece::new(ShapeKind::I, gray).x, 3);
        // O is 2 wide: 5 - 1
        assert_eq!(Piece::new(ShapeKind::O, gray).x, 4);
        // T is 3 wide: 5 - 1
        assert_eq!(Piece::new(ShapeKind::T, gray).x, 4);
        assert_eq!(Piece::new(ShapeKind::T, gray).y, 0);
    }

    #[test]
    fn test_random_uses_source() {
        let color = Rgb::new(60, 70, 80);
        let mut src = SequenceSource::repeat(ShapeKind::S).with_colors(vec![color]);
        let piece = Piece::random(&mut src);
        assert_eq!(piece.kind, ShapeKind::S);
        assert_eq!(piece.color, color);
        assert_eq!(piece.shape, get_shape(ShapeKind::S));
    }

    #[test]
    fn test_cells_are_absolute() {
        let mut piece = Piece::new(ShapeKind::O, Rgb::default());
        piece.y = 5;
        let cells: Vec<_> = piece.cells().collect();
        assert_eq!(cells, vec![(4, 5), (5, 5), (4, 6), (5, 6)]);
    }

    #[test]
    fn test_four_rotations_identity() {
        for kind in ShapeKind::ALL {
            let shape = get_shape(kind);
            let back = rotate(&rotate(&rotate(&rotate(&shape))));
            assert_eq!(back, shape, "{:?}", kind);
        }
    }
}
