//! Check detection.

use tracing::trace;

use crate::board::Board;
use crate::color::Color;
use crate::piece::Piece;
use crate::square::Square;

impl Board {
    /// Return the square of the king for the given side, if it is on the board.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = Piece::king(color);
        Square::all().find(|&sq| self.piece_at(sq) == Some(king))
    }

    /// Return `true` if the king of `color` is attacked by any opposing piece.
    ///
    /// A board without a king for `color` reports `true`.
    pub fn is_king_in_check(&self, color: Color) -> bool {
        let Some(king_sq) = self.king_square(color) else {
            trace!(%color, "king not found, treating as check");
            return true;
        };

        let them = color.flip();
        self.pieces_of(them)
            .any(|(sq, _)| self.pseudo_legal(them, sq, king_sq).is_some())
    }
}
