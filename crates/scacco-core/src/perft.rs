//! Perft (performance test) for move generation correctness verification.

use crate::board::Board;
use crate::color::Color;
use crate::movegen::generate_legal_moves;

/// Count the number of leaf nodes at the given depth with `side` to move.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them.
pub fn perft(board: &mut Board, side: Color, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_legal_moves(board, side);

    if depth == 1 {
        return moves.len() as u64;
    }

    let mut nodes = 0u64;
    for &mv in &moves {
        let mut child = board.trial(mv);
        nodes += perft(&mut child, side.flip(), depth - 1);
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(coordinate_move, node_count)` pairs sorted alphabetically.
pub fn divide(board: &mut Board, side: Color, depth: usize) -> Vec<(String, u64)> {
    let moves = generate_legal_moves(board, side);
    let mut results: Vec<(String, u64)> = moves
        .as_slice()
        .iter()
        .map(|&mv| {
            let mut child = board.trial(mv);
            let count = if depth <= 1 {
                1
            } else {
                perft(&mut child, side.flip(), depth - 1)
            };
            (mv.to_coordinate(), count)
        })
        .collect();
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;

    // Castling, en passant and promotion cannot occur this close to the start,
    // so the standard node counts apply.

    #[test]
    fn perft_startpos_depth_1() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Color::White, 1), 20);
    }

    #[test]
    fn perft_startpos_depth_2() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Color::White, 2), 400);
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn perft_startpos_depth_3() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Color::White, 3), 8_902);
    }

    #[test]
    #[ignore] // slow
    fn perft_startpos_depth_4() {
        let mut board = Board::starting_position();
        assert_eq!(perft(&mut board, Color::White, 4), 197_281);
    }

    #[test]
    fn divide_sums_to_perft() {
        let mut board = Board::starting_position();
        let results = divide(&mut board, Color::White, 2);
        assert_eq!(results.len(), 20);
        assert!(results.iter().all(|(_, count)| *count == 20));
        let total: u64 = results.iter().map(|(_, c)| c).sum();
        assert_eq!(total, perft(&mut board, Color::White, 2));
        assert_eq!(results[0].0, "a2a3");
    }

    #[test]
    fn perft_king_and_rook_endgame() {
        // White: Ke1, Ra1. Black: Ke8. Rook covers the a-file and the first row.
        let mut board: Board = "4k3/8/8/8/8/8/8/R3K3".parse().unwrap();
        // Rook: 7 up the a-file + 3 along the row (b1, c1, d1) = 10.
        // King: d1, d2, e2, f2, f1 = 5.
        assert_eq!(perft(&mut board, Color::White, 1), 15);
    }
}
