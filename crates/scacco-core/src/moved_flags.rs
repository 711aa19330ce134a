//! King/rook move history stored as a 6-bit field within a `u8`.
//!
//! The flags are maintained by [`Board::apply_move`](crate::Board::apply_move)
//! but nothing in the rules reads them: castling is not implemented.

use std::fmt;

use crate::color::Color;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Which rook of a side, named after the side of the board it starts on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RookSide {
    QueenSide,
    KingSide,
}

/// Move history bits: 0 = white king, 1 = black king, 2 = a1 rook,
/// 3 = h1 rook, 4 = a8 rook, 5 = h8 rook.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct MovedFlags(u8);

impl MovedFlags {
    /// Nothing has moved yet.
    pub const NONE: MovedFlags = MovedFlags(0);

    const WHITE_KING: u8 = 0b00_0001;
    const BLACK_KING: u8 = 0b00_0010;
    const WHITE_QUEEN_ROOK: u8 = 0b00_0100;
    const WHITE_KING_ROOK: u8 = 0b00_1000;
    const BLACK_QUEEN_ROOK: u8 = 0b01_0000;
    const BLACK_KING_ROOK: u8 = 0b10_0000;

    /// Return the raw bits.
    #[inline]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Return `true` if the king of `color` has moved.
    #[inline]
    pub const fn king_moved(self, color: Color) -> bool {
        self.0 & Self::king_bit(color) != 0
    }

    /// Return `true` if the rook that started on `side` for `color` has moved.
    #[inline]
    pub const fn rook_moved(self, color: Color, side: RookSide) -> bool {
        self.0 & Self::rook_bit(color, side) != 0
    }

    /// Record that `piece` left `source`.
    ///
    /// Kings set their flag from any square; rooks only from their original
    /// corner.
    pub fn record(&mut self, piece: Piece, source: Square) {
        match piece.kind() {
            PieceKind::King => self.0 |= Self::king_bit(piece.color()),
            PieceKind::Rook => {
                let color = piece.color();
                if source.row() != color.back_row() {
                    return;
                }
                match source.col() {
                    0 => self.0 |= Self::rook_bit(color, RookSide::QueenSide),
                    7 => self.0 |= Self::rook_bit(color, RookSide::KingSide),
                    _ => {}
                }
            }
            _ => {}
        }
    }

    #[inline]
    const fn king_bit(color: Color) -> u8 {
        match color {
            Color::White => Self::WHITE_KING,
            Color::Black => Self::BLACK_KING,
        }
    }

    #[inline]
    const fn rook_bit(color: Color, side: RookSide) -> u8 {
        match (color, side) {
            (Color::White, RookSide::QueenSide) => Self::WHITE_QUEEN_ROOK,
            (Color::White, RookSide::KingSide) => Self::WHITE_KING_ROOK,
            (Color::Black, RookSide::QueenSide) => Self::BLACK_QUEEN_ROOK,
            (Color::Black, RookSide::KingSide) => Self::BLACK_KING_ROOK,
        }
    }
}

impl fmt::Debug for MovedFlags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "MovedFlags({:06b})", self.0)
    }
}
