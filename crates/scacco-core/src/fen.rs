//! FEN piece-placement parsing and serialization for [`Board`].
//!
//! Only the first FEN field is meaningful here. Side to move, castling and en
//! passant fields may follow and are ignored.

use std::fmt;
use std::str::FromStr;

use crate::board::Board;
use crate::error::FenError;
use crate::piece::Piece;
use crate::square::Square;

/// The piece placement of the standard starting position.
pub const STARTING_PLACEMENT: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR";

impl FromStr for Board {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Board, FenError> {
        let placement = fen.split_whitespace().next().ok_or(FenError::Empty)?;

        // FEN rows run from rank 8 to rank 1, which is row 0 to row 7.
        let rows: Vec<&str> = placement.split('/').collect();
        if rows.len() != 8 {
            return Err(FenError::WrongRowCount { found: rows.len() });
        }

        let mut board = Board::empty();

        for (row, row_str) in rows.iter().enumerate() {
            let mut col: usize = 0;

            for c in row_str.chars() {
                if let Some(digit) = c.to_digit(10) {
                    if !(1..=8).contains(&digit) {
                        return Err(FenError::InvalidPieceChar { character: c });
                    }
                    col += digit as usize;
                } else {
                    let piece =
                        Piece::from_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;

                    if col >= 8 {
                        return Err(FenError::BadRowLength {
                            row,
                            length: col + 1,
                        });
                    }

                    board.put(Square::new(row as u8, col as u8), piece);
                    col += 1;
                }
            }

            if col != 8 {
                return Err(FenError::BadRowLength { row, length: col });
            }
        }

        board.validate()?;
        Ok(board)
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..Square::SIZE {
            let mut empty = 0;
            for col in 0..Square::SIZE {
                match self.piece_at(Square::new(row, col)) {
                    Some(piece) => {
                        if empty > 0 {
                            write!(f, "{empty}")?;
                            empty = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                write!(f, "{empty}")?;
            }
            if row < 7 {
                write!(f, "/")?;
            }
        }
        Ok(())
    }
}
