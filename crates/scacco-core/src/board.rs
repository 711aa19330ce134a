//! The chess board: an 8x8 grid of cells plus king/rook move history.

use std::fmt;

use crate::color::Color;
use crate::error::{BoardError, FenError};
use crate::moved_flags::MovedFlags;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// Back-row layout shared by both sides, from file a to file h.
const BACK_ROW: [PieceKind; 8] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

/// Complete board state.
///
/// The side to move is not stored here; every rule takes it as an argument.
#[derive(Clone, Copy, PartialEq, Eq)]
pub struct Board {
    /// Cells in row-major order, indexed by [`Square::index()`].
    cells: [Option<Piece>; Square::COUNT],
    /// Which kings and corner rooks have moved.
    moved: MovedFlags,
}

impl Board {
    /// Return a board with no pieces on it.
    pub const fn empty() -> Board {
        Board {
            cells: [None; Square::COUNT],
            moved: MovedFlags::NONE,
        }
    }

    /// Return the standard starting position.
    pub fn starting_position() -> Board {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row();
            let pawns = color.pawn_row();
            for col in 0..Square::SIZE {
                board.put(Square::new(back, col), Piece::new(BACK_ROW[col as usize], color));
                board.put(Square::new(pawns, col), Piece::new(PieceKind::Pawn, color));
            }
        }
        board
    }

    /// Reset to the standard starting position, clearing move history.
    pub fn reset(&mut self) {
        *self = Board::starting_position();
    }

    /// Build a board from eight row strings, row 0 (rank 8) first.
    ///
    /// Each row has exactly 8 characters: a piece letter or a space for an
    /// empty cell.
    pub fn from_rows(rows: &[&str; 8]) -> Result<Board, FenError> {
        let mut board = Board::empty();
        for (row, text) in rows.iter().enumerate() {
            let length = text.chars().count();
            if length != 8 {
                return Err(FenError::BadRowLength { row, length });
            }
            for (col, c) in text.chars().enumerate() {
                if c == ' ' {
                    continue;
                }
                let piece = Piece::from_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                board.put(Square::new(row as u8, col as u8), piece);
            }
        }
        board.validate()?;
        Ok(board)
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<Piece> {
        self.cells[sq.index()]
    }

    /// Return `true` if the given square holds no piece.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.cells[sq.index()].is_none()
    }

    /// Return `true` if the square holds a piece owned by `color`.
    #[inline]
    pub fn is_own(&self, color: Color, sq: Square) -> bool {
        matches!(self.cells[sq.index()], Some(p) if p.is(color))
    }

    /// Return `true` if the square holds a piece owned by the opponent of `color`.
    #[inline]
    pub fn is_opponent(&self, color: Color, sq: Square) -> bool {
        matches!(self.cells[sq.index()], Some(p) if !p.is(color))
    }

    /// Place a piece on a square, replacing whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: Piece) {
        self.cells[sq.index()] = Some(piece);
    }

    /// Remove whatever stands on a square.
    #[inline]
    pub fn clear(&mut self, sq: Square) {
        self.cells[sq.index()] = None;
    }

    /// Overwrite a cell with a saved value.
    #[inline]
    pub(crate) fn set_cell(&mut self, sq: Square, cell: Option<Piece>) {
        self.cells[sq.index()] = cell;
    }

    /// Return the king/rook move history.
    #[inline]
    pub fn moved_flags(&self) -> MovedFlags {
        self.moved
    }

    #[inline]
    pub(crate) fn moved_flags_mut(&mut self) -> &mut MovedFlags {
        &mut self.moved
    }

    #[inline]
    pub(crate) fn set_moved_flags(&mut self, flags: MovedFlags) {
        self.moved = flags;
    }

    /// Iterate over the occupied squares of `color` in row-major order.
    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |sq| match self.piece_at(sq) {
            Some(piece) if piece.is(color) => Some((sq, piece)),
            _ => None,
        })
    }

    /// Count the pieces of one kind and color.
    pub fn count(&self, piece: Piece) -> u32 {
        self.cells.iter().filter(|&&cell| cell == Some(piece)).count() as u32
    }

    /// Validate the structural integrity of the board.
    ///
    /// A missing king is allowed; the check detector reports such a side as
    /// in check.
    pub fn validate(&self) -> Result<(), BoardError> {
        for color in Color::ALL {
            let count = self.count(Piece::king(color));
            if count > 1 {
                let color_name = match color {
                    Color::White => "white",
                    Color::Black => "black",
                };
                return Err(BoardError::TooManyKings {
                    color: color_name,
                    count,
                });
            }
        }
        Ok(())
    }

    /// Return a pretty-printable wrapper for this board.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Board {
    fn default() -> Self {
        Board::starting_position()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board(\"{}\")", self)
    }
}

/// Wrapper for pretty-printing a board as an 8x8 grid with coordinates.
pub struct PrettyBoard<'a>(&'a Board);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let board = self.0;
        writeln!(f, "  a b c d e f g h")?;
        for row in 0..Square::SIZE {
            let rank = 8 - row;
            write!(f, "{rank} ")?;
            for col in 0..Square::SIZE {
                let c = board
                    .piece_at(Square::new(row, col))
                    .map_or('.', Piece::to_char);
                write!(f, "{c} ")?;
            }
            writeln!(f, "{rank}")?;
        }
        write!(f, "  a b c d e f g h")
    }
}
