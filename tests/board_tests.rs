//! Board integration tests against the public API.

use blockfall::core::{shape_for, Board};
use blockfall::types::{PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(PieceKind::T)));
    assert_eq!(board.get(5, 10), Some(Some(PieceKind::T)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(PieceKind::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(PieceKind::T)));
}

#[test]
fn test_occupancy_rules() {
    let mut board = Board::new();

    // Side walls and the floor block unconditionally
    assert!(board.is_occupied(-1, 10));
    assert!(board.is_occupied(BOARD_WIDTH as i8, 10));
    assert!(board.is_occupied(5, BOARD_HEIGHT as i8));

    // Above the top row is open space
    assert!(!board.is_occupied(5, -1));
    assert!(!board.is_occupied(5, -3));

    // Interior cells block only once filled
    assert!(!board.is_occupied(5, 10));
    board.set(5, 10, Some(PieceKind::S));
    assert!(board.is_occupied(5, 10));
}

#[test]
fn test_collision_against_stack() {
    let mut board = Board::new();
    let t = &shape_for(PieceKind::T).matrix;

    assert!(!board.collides(t, 3, 10));
    // T's lowest cells sit at frame row 1
    board.set(4, 11, Some(PieceKind::I));
    assert!(board.collides(t, 3, 10));
}

#[test]
fn test_lock_then_clear() {
    let mut board = Board::new();

    // Complete the bottom row using set, except the I gap at columns 3..7
    for x in 0..BOARD_WIDTH as i8 {
        if !(3..7).contains(&x) {
            board.set(x, 19, Some(PieceKind::Z));
        }
    }

    // I's filled row is frame row 1; anchored at y = 18 it fills row 19
    let i = &shape_for(PieceKind::I).matrix;
    assert!(!board.collides(i, 3, 18));
    board.lock(i, 3, 18, PieceKind::I);

    assert!(board.is_row_full(19));
    assert_eq!(board.clear_full_rows(), 1);
    assert!(board.cells().iter().all(|c| c.is_none()));
}

#[test]
fn test_clear_preserves_rows_above() {
    let mut board = Board::new();
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, 19, Some(PieceKind::O));
    }
    board.set(2, 17, Some(PieceKind::L));
    board.set(7, 18, Some(PieceKind::J));

    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.get(2, 18), Some(Some(PieceKind::L)));
    assert_eq!(board.get(7, 19), Some(Some(PieceKind::J)));
    assert_eq!(board.get(2, 17), Some(None));
}
