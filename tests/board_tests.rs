//! Board tests - collision, freezing and line clearing

use blockfall::core::{get_shape, Board, Piece};
use blockfall::types::{Cell, Rgb, ShapeKind, COLUMNS, ROWS};

const RED: Rgb = Rgb::new(220, 60, 60);
const GREEN: Rgb = Rgb::new(60, 220, 60);

fn piece_at(kind: ShapeKind, x: i8, y: i8) -> Piece {
    Piece {
        x,
        y,
        ..Piece::new(kind, GREEN)
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), COLUMNS);
    assert_eq!(board.height(), ROWS);

    for y in 0..ROWS as i8 {
        for x in 0..COLUMNS as i8 {
            assert_eq!(board.get(x, y), Some(Cell::Empty), "({}, {})", x, y);
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(COLUMNS as i8, 0), None);
    assert_eq!(board.get(0, ROWS as i8), None);
}

#[test]
fn test_board_set_out_of_bounds() {
    let mut board = Board::new();
    let cell = Cell::Occupied { color: RED };

    assert!(!board.set(-1, 0, cell));
    assert!(!board.set(0, -1, cell));
    assert!(!board.set(COLUMNS as i8, 0, cell));
    assert!(!board.set(0, ROWS as i8, cell));
    assert_eq!(board.occupied_count(), 0);
}

// ============== Collision ==============

#[test]
fn test_collision_outside_side_walls_and_floor() {
    let board = Board::new();

    for kind in ShapeKind::ALL {
        let shape = get_shape(kind);
        let w = shape.width() as i8;
        let h = shape.height() as i8;

        // Left wall
        assert!(board.check_collision(&piece_at(kind, -1, 5), 0, 0, None), "{:?}", kind);
        // Right wall
        assert!(
            board.check_collision(&piece_at(kind, COLUMNS as i8 - w + 1, 5), 0, 0, None),
            "{:?}",
            kind
        );
        // Floor
        assert!(
            board.check_collision(&piece_at(kind, 3, ROWS as i8 - h + 1), 0, 0, None),
            "{:?}",
            kind
        );
        // Flush against every edge is fine
        assert!(!board.check_collision(&piece_at(kind, 0, ROWS as i8 - h), 0, 0, None));
        assert!(!board.check_collision(
            &piece_at(kind, COLUMNS as i8 - w, ROWS as i8 - h),
            0,
            0,
            None
        ));
    }
}

#[test]
fn test_collision_far_outside_board() {
    let board = Board::new();
    let piece = piece_at(ShapeKind::T, 4, 0);

    // Offsets large enough to leave the i8 range once added to the position
    assert!(board.check_collision(&piece, 125, 0, None));
    assert!(board.check_collision(&piece, i8::MAX, 0, None));
    assert!(board.check_collision(&piece, i8::MIN, 0, None));
    assert!(board.check_collision(&piece, 0, i8::MAX, None));

    let edge = piece_at(ShapeKind::I, i8::MAX - 1, i8::MAX - 1);
    assert!(board.check_collision(&edge, 1, 1, None));

    // Far above the top edge only the walls matter
    assert!(!board.check_collision(&piece, 0, i8::MIN, None));
}

#[test]
fn test_collision_offset_is_applied() {
    let board = Board::new();
    let piece = piece_at(ShapeKind::O, 0, 0);

    assert!(board.check_collision(&piece, -1, 0, None));
    assert!(!board.check_collision(&piece, 1, 0, None));
    assert!(board.check_collision(&piece, 0, ROWS as i8 - 1, None));
}

#[test]
fn test_collision_with_occupied_cell() {
    let mut board = Board::new();
    board.set(5, 10, Cell::Occupied { color: RED });

    // O covers (4..=5, 9..=10)
    assert!(board.check_collision(&piece_at(ShapeKind::O, 4, 9), 0, 0, None));
    // One row higher it only touches from above
    assert!(!board.check_collision(&piece_at(ShapeKind::O, 4, 8), 0, 0, None));
    assert!(board.check_collision(&piece_at(ShapeKind::O, 4, 8), 0, 1, None));
}

#[test]
fn test_piece_above_top_never_collides() {
    let mut board = Board::new();
    for y in 0..ROWS as usize {
        board.fill_row(y, RED);
    }

    for kind in ShapeKind::ALL {
        let h = get_shape(kind).height() as i8;
        for x in 0..=(COLUMNS as i8 - 4) {
            let piece = piece_at(kind, x, -h);
            assert!(!board.check_collision(&piece, 0, 0, None), "{:?} at x={}", kind, x);
        }
    }
}

#[test]
fn test_above_top_still_checks_side_walls() {
    let board = Board::new();
    assert!(board.check_collision(&piece_at(ShapeKind::I, -1, -3), 0, 0, None));
    assert!(board.check_collision(&piece_at(ShapeKind::I, 7, -3), 0, 0, None));
}

// ============== Freezing ==============

#[test]
fn test_freeze_writes_piece_color() {
    let mut board = Board::new();
    let piece = piece_at(ShapeKind::T, 2, 17);

    board.freeze(&piece);

    // T: [[0,1,0],[1,1,1]]
    assert_eq!(board.get(3, 17), Some(Cell::Occupied { color: GREEN }));
    assert_eq!(board.get(2, 18), Some(Cell::Occupied { color: GREEN }));
    assert_eq!(board.get(4, 18), Some(Cell::Occupied { color: GREEN }));
    assert_eq!(board.get(2, 17), Some(Cell::Empty));
    assert_eq!(board.occupied_count(), 4);
}

// ============== Line clearing ==============

#[test]
fn test_clear_lines_no_full_rows() {
    let mut board = Board::new();
    for x in 0..COLUMNS as i8 - 1 {
        board.set(x, 19, Cell::Occupied { color: RED });
    }
    board.set(4, 12, Cell::Occupied { color: GREEN });
    let before = board.clone();

    assert_eq!(board.clear_lines(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_lines_single_full_row() {
    let mut board = Board::new();
    board.set(1, 15, Cell::Occupied { color: GREEN });
    board.set(2, 16, Cell::Occupied { color: RED });
    board.fill_row(17, RED);
    board.set(3, 18, Cell::Occupied { color: GREEN });
    board.set(9, 19, Cell::Occupied { color: GREEN });

    assert_eq!(board.clear_lines(), 1);

    // Rows above the cleared one moved down by one, in order
    assert_eq!(board.get(1, 16), Some(Cell::Occupied { color: GREEN }));
    assert_eq!(board.get(2, 17), Some(Cell::Occupied { color: RED }));
    // Rows below kept their place
    assert_eq!(board.get(3, 18), Some(Cell::Occupied { color: GREEN }));
    assert_eq!(board.get(9, 19), Some(Cell::Occupied { color: GREEN }));
    // Fresh empty row at the top
    assert!(board.row(0).unwrap().iter().all(|c| *c == Cell::Empty));
    assert_eq!(board.occupied_count(), 4);
}

#[test]
fn test_clear_lines_four_rows() {
    let mut board = Board::new();
    for y in 16..20 {
        board.fill_row(y, RED);
    }
    board.set(0, 15, Cell::Occupied { color: GREEN });

    assert_eq!(board.clear_lines(), 4);
    assert_eq!(board.get(0, 19), Some(Cell::Occupied { color: GREEN }));
    assert_eq!(board.occupied_count(), 1);
}

#[test]
fn test_cleared_cells_keep_their_color() {
    let mut board = Board::new();
    board.set(0, 18, Cell::Occupied { color: GREEN });
    board.set(1, 18, Cell::Occupied { color: RED });
    board.fill_row(19, RED);

    board.clear_lines();

    assert_eq!(board.get(0, 19).and_then(|c| c.color()), Some(GREEN));
    assert_eq!(board.get(1, 19).and_then(|c| c.color()), Some(RED));
}
