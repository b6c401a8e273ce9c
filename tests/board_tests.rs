//! Board tests - placement checks and row clears

use proptest::prelude::*;

use mini_tetris::core::{shape_matrix, Board, Matrix};
use mini_tetris::types::{ShapeKind, BOARD_HEIGHT, BOARD_WIDTH};

fn single() -> Matrix {
    Matrix::from_rows([[1]])
}

#[test]
fn test_board_dimensions() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);
}

#[test]
fn test_get_covers_buffer_rows() {
    let board = Board::new();
    assert_eq!(board.get(-2, 0), Some(None));
    assert_eq!(board.get(-1, 9), Some(None));
    assert_eq!(board.get(-3, 0), None);
    assert_eq!(board.get(20, 0), None);
    assert_eq!(board.get(0, 10), None);
}

#[test]
fn test_valid_move_rejects_overlap() {
    let board = Board::from_rows(&["....S....."]);
    assert!(!board.is_valid_move(&single(), 19, 4));
    assert!(board.is_valid_move(&single(), 19, 3));
    assert!(board.is_valid_move(&single(), 18, 4));
}

#[test]
fn test_valid_move_rejects_walls_and_floor() {
    let board = Board::new();
    assert!(!board.is_valid_move(&single(), 5, -1));
    assert!(!board.is_valid_move(&single(), 5, 10));
    assert!(!board.is_valid_move(&single(), 20, 5));
    assert!(board.is_valid_move(&single(), 19, 0));
    assert!(board.is_valid_move(&single(), 19, 9));
}

#[test]
fn test_valid_move_above_board_still_checks_columns() {
    let board = Board::from_rows(&["IIIIIIIIII"; 20]);
    assert!(board.is_valid_move(&single(), -1, 0));
    assert!(!board.is_valid_move(&single(), -1, -1));
    assert!(!board.is_valid_move(&single(), -1, 10));
}

#[test]
fn test_i_piece_fits_flush_against_walls() {
    let board = Board::new();
    let i = shape_matrix(ShapeKind::I);
    assert!(board.is_valid_move(&i, 0, 0));
    assert!(board.is_valid_move(&i, 0, 6));
    assert!(!board.is_valid_move(&i, 0, 7));
    // Filled row of the I matrix is its second row
    assert!(board.is_valid_move(&i, 18, 0));
    assert!(!board.is_valid_move(&i, 19, 0));
}

#[test]
fn test_clear_bottom_row_shifts_rest_down() {
    let mut board = Board::from_rows(&[
        ".T........",
        "TTT...LLL.",
        "ZZZZZZZZZZ",
    ]);
    assert_eq!(board.clear_full_rows(), 1);

    let rows = board.to_rows();
    assert_eq!(rows.len(), BOARD_HEIGHT as usize);
    assert_eq!(rows[17], "..........");
    assert_eq!(rows[18], ".T........");
    assert_eq!(rows[19], "TTT...LLL.");
}

#[test]
fn test_clear_four_rows() {
    let mut board = Board::from_rows(&[
        "J.........",
        "IIIIIIIIII",
        "IIIIIIIIII",
        "IIIIIIIIII",
        "IIIIIIIIII",
    ]);
    assert_eq!(board.clear_full_rows(), 4);
    assert_eq!(board.occupied_count(), 1);
    assert!(board.is_occupied(19, 0));
}

#[test]
fn test_clear_nothing_when_no_full_rows() {
    let mut board = Board::from_rows(&["IIIIIIIII.", ".OOOOOOOOO"]);
    let before = board.clone();
    assert_eq!(board.clear_full_rows(), 0);
    assert_eq!(board, before);
}

#[test]
fn test_clear_top_visible_row() {
    let mut rows = vec![".........."; 20];
    rows[0] = "LLLLLLLLLL";
    rows[19] = "O.........";
    let mut board = Board::from_rows(&rows);
    assert_eq!(board.clear_full_rows(), 1);
    assert_eq!(board.occupied_count(), 1);
    assert!(board.is_occupied(19, 0));
    assert!(!board.is_occupied(0, 0));
}

#[test]
fn test_clear_empties_whole_board() {
    let mut board = Board::from_rows(&["SSSSSSSSSS"; 20]);
    assert_eq!(board.clear_full_rows(), 20);
    assert_eq!(board.occupied_count(), 0);
}

proptest! {
    #[test]
    fn prop_out_of_columns_is_invalid(row in -10i8..20, col in prop_oneof![-20i8..0, 10i8..30]) {
        prop_assert!(!Board::new().is_valid_move(&single(), row, col));
    }

    #[test]
    fn prop_below_floor_is_invalid(row in 20i8..100, col in 0i8..10) {
        prop_assert!(!Board::new().is_valid_move(&single(), row, col));
    }

    #[test]
    fn prop_clear_removes_exactly_the_full_rows(mask in proptest::collection::vec(any::<bool>(), 20)) {
        let texts: Vec<&str> = mask
            .iter()
            .map(|&full| if full { "TTTTTTTTTT" } else { "T.T.T.T.T." })
            .collect();
        let mut board = Board::from_rows(&texts);
        let full = mask.iter().filter(|&&f| f).count();

        prop_assert_eq!(board.clear_full_rows(), full);
        prop_assert_eq!(board.occupied_count(), (20 - full) * 5);
        let rows = board.to_rows();
        for (i, row) in rows.iter().enumerate() {
            let expected = if i < full { ".........." } else { "T.T.T.T.T." };
            prop_assert_eq!(row.as_str(), expected);
        }
    }
}
