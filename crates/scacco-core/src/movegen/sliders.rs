//! Rook, bishop and queen movement with path occlusion.

use crate::board::Board;
use crate::square::Square;

#[inline]
fn is_straight(d_row: i8, d_col: i8) -> bool {
    d_row == 0 || d_col == 0
}

#[inline]
fn is_diagonal(d_row: i8, d_col: i8) -> bool {
    d_row.abs() == d_col.abs()
}

/// Return `true` if every cell strictly between `source` and `dest` is empty.
///
/// The two squares must share a row, a column or a diagonal.
pub(super) fn is_path_clear(board: &Board, source: Square, dest: Square) -> bool {
    let d_row = (dest.row() as i8 - source.row() as i8).signum();
    let d_col = (dest.col() as i8 - source.col() as i8).signum();

    let mut current = source;
    loop {
        current = match current.offset(d_row, d_col) {
            Some(next) => next,
            None => return false,
        };
        if current == dest {
            return true;
        }
        if !board.is_empty(current) {
            return false;
        }
    }
}

/// Rook: same row or column, clear path.
pub(super) fn rook_move(board: &Board, source: Square, dest: Square, d_row: i8, d_col: i8) -> bool {
    is_straight(d_row, d_col) && is_path_clear(board, source, dest)
}

/// Bishop: same diagonal, clear path.
pub(super) fn bishop_move(board: &Board, source: Square, dest: Square, d_row: i8, d_col: i8) -> bool {
    is_diagonal(d_row, d_col) && is_path_clear(board, source, dest)
}

/// Queen: rook or bishop geometry, clear path.
pub(super) fn queen_move(board: &Board, source: Square, dest: Square, d_row: i8, d_col: i8) -> bool {
    (is_straight(d_row, d_col) || is_diagonal(d_row, d_col)) && is_path_clear(board, source, dest)
}

#[cfg(test)]
mod tests {
    use super::is_path_clear;
    use crate::board::Board;
    use crate::color::Color;
    use crate::square::Square;

    #[test]
    fn path_clear_adjacent_is_trivially_clear() {
        let board = Board::starting_position();
        assert!(is_path_clear(&board, Square::A1, Square::A2));
        assert!(is_path_clear(&board, Square::C1, Square::D2));
    }

    #[test]
    fn path_blocked_by_any_piece() {
        let board = Board::starting_position();
        assert!(!is_path_clear(&board, Square::A1, Square::A3));
        assert!(!is_path_clear(&board, Square::C1, Square::E3));
        assert!(is_path_clear(&board, Square::A3, Square::H3));
    }

    #[test]
    fn rook_lines() {
        let board: Board = "4k3/8/8/8/R3p3/8/8/4K3".parse().unwrap();
        assert!(board.pseudo_legal(Color::White, Square::A4, Square::A8).is_some());
        assert!(board.pseudo_legal(Color::White, Square::A4, Square::A1).is_some());
        assert!(board.pseudo_legal(Color::White, Square::A4, Square::E4).is_some(), "capture at end of line");
        assert!(board.pseudo_legal(Color::White, Square::A4, Square::F4).is_none(), "blocked by e4");
        assert!(board.pseudo_legal(Color::White, Square::A4, Square::B5).is_none(), "rooks do not move diagonally");
    }

    #[test]
    fn bishop_diagonals() {
        let board: Board = "4k3/8/8/8/8/2P5/8/B3K3".parse().unwrap();
        assert!(board.pseudo_legal(Color::White, Square::A1, Square::B2).is_some());
        assert!(board.pseudo_legal(Color::White, Square::A1, Square::C3).is_none(), "own pawn on c3");
        assert!(board.pseudo_legal(Color::White, Square::A1, Square::D4).is_none(), "blocked by c3");
        assert!(board.pseudo_legal(Color::White, Square::A1, Square::A2).is_none(), "bishops do not move straight");
    }

    #[test]
    fn queen_combines_both() {
        let board: Board = "4k3/8/8/8/3Q4/8/8/4K3".parse().unwrap();
        assert!(board.pseudo_legal(Color::White, Square::D4, Square::D8).is_some());
        assert!(board.pseudo_legal(Color::White, Square::D4, Square::H8).is_some());
        assert!(board.pseudo_legal(Color::White, Square::D4, Square::A1).is_some());
        assert!(board.pseudo_legal(Color::White, Square::D4, Square::E6).is_none());
    }

    #[test]
    fn every_blocked_slider_move_is_rejected() {
        // A blocker sits between each slider and every square beyond it.
        let board: Board = "4k3/8/1p6/8/3Qp3/8/1P6/4K3".parse().unwrap();
        for dest in Square::all() {
            let d_row = dest.row() as i8 - Square::D4.row() as i8;
            let d_col = dest.col() as i8 - Square::D4.col() as i8;
            let beyond_e4 = d_row == 0 && d_col > 1;
            if beyond_e4 {
                assert!(
                    board.pseudo_legal(Color::White, Square::D4, dest).is_none(),
                    "queen should not pass through e4 to {dest}"
                );
            }
        }
        assert!(board.pseudo_legal(Color::White, Square::D4, Square::A7).is_none(), "blocked by b6");
        assert!(board.pseudo_legal(Color::White, Square::D4, Square::B6).is_some(), "capture b6");
        assert!(board.pseudo_legal(Color::White, Square::D4, Square::B2).is_none(), "own pawn on b2");
        assert!(board.pseudo_legal(Color::White, Square::D4, Square::A1).is_none(), "blocked by b2");
    }
}
