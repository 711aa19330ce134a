//! Material balance evaluation.
//!
//! Sums fixed piece values for each side. Scores are from White's
//! perspective (positive = White ahead).

use scacco_core::{Board, Color, PieceKind, Square};

/// Material values indexed by [`PieceKind::index()`].
///
/// | Piece  | value |
/// |--------|-------|
/// | Pawn   |  10   |
/// | Knight |  30   |
/// | Bishop |  30   |
/// | Rook   |  50   |
/// | Queen  |  90   |
/// | King   | 900   |
pub const MATERIAL_VALUE: [i32; PieceKind::COUNT] = [
    10,  // Pawn
    30,  // Knight
    30,  // Bishop
    50,  // Rook
    90,  // Queen
    900, // King
];

/// Evaluate material balance from White's perspective.
///
/// Every White piece adds its [`MATERIAL_VALUE`], every Black piece subtracts
/// it, empty cells add nothing.
pub fn material(board: &Board) -> i32 {
    Square::all()
        .filter_map(|sq| board.piece_at(sq))
        .map(|piece| {
            let value = MATERIAL_VALUE[piece.kind().index()];
            match piece.color() {
                Color::White => value,
                Color::Black => -value,
            }
        })
        .sum()
}

#[cfg(test)]
mod tests {
    use scacco_core::{Board, PieceKind};

    use super::{MATERIAL_VALUE, material};

    #[test]
    fn starting_position_is_zero() {
        assert_eq!(material(&Board::starting_position()), 0);
    }

    #[test]
    fn missing_black_queen_gives_queen_advantage() {
        let board: Board = "rnb1kbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR".parse().unwrap();
        assert_eq!(material(&board), MATERIAL_VALUE[PieceKind::Queen.index()]);
    }

    #[test]
    fn score_is_negated_when_black_is_ahead() {
        let board: Board = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNB1KBNR".parse().unwrap();
        assert_eq!(material(&board), -90);
    }

    #[test]
    fn lone_kings_cancel() {
        let board: Board = "4k3/8/8/8/8/8/8/4K3".parse().unwrap();
        assert_eq!(material(&board), 0);
    }

    #[test]
    fn missing_king_counts_fully() {
        let board: Board = "8/8/8/8/8/8/8/4K3".parse().unwrap();
        assert_eq!(material(&board), 900);
    }

    #[test]
    fn mixed_material() {
        // White: K, R, 2P = 900 + 50 + 20. Black: K, N, B = 900 + 30 + 30.
        let board: Board = "2b1k1n1/8/8/8/8/8/PP6/R3K3".parse().unwrap();
        assert_eq!(material(&board), 970 - 960);
    }

    #[test]
    fn value_table() {
        assert_eq!(MATERIAL_VALUE, [10, 30, 30, 50, 90, 900]);
    }
}
