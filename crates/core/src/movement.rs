//! Collision checking and piece movement.
//!
//! Every movement follows the same pattern: mutate the piece, check it with
//! [`is_valid`], and put it back exactly as it was if the check fails. The
//! return value tells the caller whether the move stuck.

use crate::board::Board;
use crate::pieces::Piece;
use crate::types::{BOARD_HEIGHT, BOARD_WIDTH};

/// Whether every occupied cell of `piece` is inside the side walls, above the
/// floor, and not on top of a locked cell.
///
/// Cells above the top row are not range-checked and count as free, so a piece
/// may hang partially off the top of the board.
pub fn is_valid(board: &Board, piece: &Piece) -> bool {
    piece.cells().all(|(x, y)| {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        !board.is_occupied(x, y)
    })
}

/// Shift one column left (`-1`) or right (`+1`).
pub fn move_horizontal(board: &Board, piece: &mut Piece, direction: i8) -> bool {
    piece.x += direction;
    if !is_valid(board, piece) {
        piece.x -= direction;
        return false;
    }
    true
}

/// Drop one row. `false` means the piece is resting and must lock.
pub fn move_down(board: &Board, piece: &mut Piece) -> bool {
    piece.y += 1;
    if !is_valid(board, piece) {
        piece.y -= 1;
        return false;
    }
    true
}

/// Turn the shape a quarter clockwise in place.
///
/// The O piece is left alone. A rotation that collides at the current
/// position is undone; no offsets are tried.
pub fn rotate(board: &Board, piece: &mut Piece) -> bool {
    if piece.shape.is_square() {
        return false;
    }

    let original = piece.shape;
    piece.shape = original.rotated_cw();
    if !is_valid(board, piece) {
        piece.shape = original;
        return false;
    }
    true
}

/// Write the piece's color into every board cell it covers.
///
/// Cells above the top row have nowhere to go and are dropped.
pub fn place(board: &mut Board, piece: &Piece) {
    for (x, y) in piece.cells() {
        board.set(x, y, Some(piece.color));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::pieces::{Shape, ShapeKind};
    use crate::types::BlockColor;

    fn piece(kind: ShapeKind, x: i8, y: i8) -> Piece {
        Piece::new(kind.shape(), BlockColor::Red).at(x, y)
    }

    #[test]
    fn cells_above_the_top_are_free() {
        let board = Board::new();
        let vertical_i = Piece::new(Shape::from_rows([[1], [1], [1], [1]]), BlockColor::Cyan);
        assert!(is_valid(&board, &vertical_i.at(0, -3)));
        assert!(is_valid(&board, &vertical_i.at(0, -100)));
    }

    #[test]
    fn side_walls_and_floor_are_checked() {
        let board = Board::new();
        assert!(!is_valid(&board, &piece(ShapeKind::I, -1, 0)));
        assert!(!is_valid(&board, &piece(ShapeKind::I, 7, 0)));
        assert!(is_valid(&board, &piece(ShapeKind::I, 6, 19)));
        assert!(!is_valid(&board, &piece(ShapeKind::T, 0, 19)));
    }

    #[test]
    fn empty_matrix_cells_do_not_collide() {
        let mut board = Board::new();
        // T = [[1,1,1],[0,1,0]]: (0,1) of the matrix is empty.
        board.set(3, 6, Some(BlockColor::Blue));
        assert!(is_valid(&board, &piece(ShapeKind::T, 3, 5)));
        board.set(4, 6, Some(BlockColor::Blue));
        assert!(!is_valid(&board, &piece(ShapeKind::T, 3, 5)));
    }

    #[test]
    fn place_skips_cells_above_the_top() {
        let mut board = Board::new();
        let vertical_i = Piece::new(Shape::from_rows([[1], [1], [1], [1]]), BlockColor::Green);
        place(&mut board, &vertical_i.at(2, -2));
        assert_eq!(board.occupied_count(), 2);
        assert!(board.is_occupied(2, 0));
        assert!(board.is_occupied(2, 1));
    }

    #[test]
    fn rotation_near_the_right_wall_is_refused() {
        let board = Board::new();
        // Vertical I in the last column: rotating to horizontal would poke out.
        let mut p = Piece::new(ShapeKind::I.shape().rotated_cw(), BlockColor::Red).at(9, 5);
        let before = p;
        assert!(!rotate(&board, &mut p));
        assert_eq!(p, before);
    }
}
