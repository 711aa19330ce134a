//! Pawn movement: pushes, double pushes from the starting row, diagonal captures.

use crate::board::Board;
use crate::color::Color;
use crate::square::Square;

/// Return `true` if the pawn of `side` on `source` may move to `dest`.
///
/// There is no en passant, and a pawn on the far row has no forward move.
pub(super) fn pawn_move(board: &Board, side: Color, source: Square, dest: Square) -> bool {
    let d_row = dest.row() as i8 - source.row() as i8;
    let d_col = dest.col() as i8 - source.col() as i8;
    let forward = side.forward();

    if d_col == 0 {
        if d_row == forward {
            return board.is_empty(dest);
        }
        if d_row == 2 * forward && source.row() == side.pawn_row() {
            // The starting row is never an edge row, so the step is on the board.
            return match source.offset(forward, 0) {
                Some(between) => board.is_empty(between) && board.is_empty(dest),
                None => false,
            };
        }
        return false;
    }

    d_row == forward && d_col.abs() == 1 && board.is_opponent(side, dest)
}
