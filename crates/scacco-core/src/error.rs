//! Error types for board parsing and validation.

/// Errors that occur when parsing a piece-placement string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FenError {
    /// The input contained no placement field at all.
    #[error("empty piece placement")]
    Empty,
    /// The piece placement section does not have exactly 8 rows.
    #[error("expected 8 rows in piece placement, found {found}")]
    WrongRowCount {
        /// Number of rows found.
        found: usize,
    },
    /// A row describes more or fewer than 8 squares.
    #[error("row {row} describes {length} squares, expected 8")]
    BadRowLength {
        /// Zero-based row index (0 = rank 8).
        row: usize,
        /// Number of squares described.
        length: usize,
    },
    /// An unrecognized character appeared in the piece placement.
    #[error("invalid piece character: '{character}'")]
    InvalidPieceChar {
        /// The invalid character.
        character: char,
    },
    /// The parsed board fails structural validation.
    #[error("invalid board: {source}")]
    InvalidBoard {
        /// The underlying board validation error.
        #[from]
        source: BoardError,
    },
}

/// Errors from structural validation of a [`Board`](crate::board::Board).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum BoardError {
    /// A side has more than one king.
    #[error("expected at most 1 king for {color}, found {count}")]
    TooManyKings {
        /// Which side has the extra king.
        color: &'static str,
        /// Number of kings found.
        count: u32,
    },
}

#[cfg(test)]
mod tests {
    use super::{BoardError, FenError};

    #[test]
    fn fen_error_display() {
        let err = FenError::WrongRowCount { found: 4 };
        assert_eq!(format!("{err}"), "expected 8 rows in piece placement, found 4");
    }

    #[test]
    fn board_error_display() {
        let err = BoardError::TooManyKings {
            color: "white",
            count: 2,
        };
        assert_eq!(format!("{err}"), "expected at most 1 king for white, found 2");
    }

    #[test]
    fn fen_error_from_board_error() {
        let board_err = BoardError::TooManyKings {
            color: "black",
            count: 3,
        };
        let fen_err: FenError = board_err.into();
        assert!(matches!(fen_err, FenError::InvalidBoard { .. }));
    }
}
