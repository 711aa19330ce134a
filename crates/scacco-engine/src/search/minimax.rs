//! Fixed-depth minimax with alpha-beta pruning.
//!
//! White maximizes the material score and Black minimizes it. Moves are
//! searched in generation order; each child is visited through a
//! [`TrialMove`](scacco_core::TrialMove), so a cutoff cannot skip the undo.

use scacco_core::{Board, Color, generate_legal_moves};

use crate::evaluate;

/// Score bound wider than any reachable value.
pub const INF: i32 = 1_000_000;

/// Score of a checkmate, positive when Black is mated.
pub const MATE_SCORE: i32 = 10_000;

/// Search state threaded through minimax calls.
#[derive(Debug, Default)]
pub struct SearchContext {
    /// Total nodes visited.
    pub nodes: u64,
}

impl SearchContext {
    /// Create a context with a zero node count.
    pub fn new() -> Self {
        Self::default()
    }
}

/// Score for `side` being checkmated.
#[inline]
pub const fn mated_score(side: Color) -> i32 {
    match side {
        Color::White => -MATE_SCORE,
        Color::Black => MATE_SCORE,
    }
}

/// Minimax value of the board with `side` to move, searched `depth` plies.
///
/// Depth 0 returns the static evaluation. A side without legal moves scores
/// [`mated_score`] when in check and 0 (stalemate) otherwise. The board is
/// restored before returning.
pub fn minimax(
    board: &mut Board,
    depth: u8,
    side: Color,
    mut alpha: i32,
    mut beta: i32,
    ctx: &mut SearchContext,
) -> i32 {
    ctx.nodes += 1;

    if depth == 0 {
        return evaluate(board);
    }

    let moves = generate_legal_moves(board, side);

    // No legal moves: checkmate or stalemate
    if moves.is_empty() {
        return if board.is_king_in_check(side) {
            mated_score(side)
        } else {
            0
        };
    }

    match side {
        Color::White => {
            let mut best = -INF;
            for &mv in &moves {
                let mut child = board.trial(mv);
                let score = minimax(&mut child, depth - 1, Color::Black, alpha, beta, ctx);
                best = best.max(score);
                alpha = alpha.max(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
        Color::Black => {
            let mut best = INF;
            for &mv in &moves {
                let mut child = board.trial(mv);
                let score = minimax(&mut child, depth - 1, Color::White, alpha, beta, ctx);
                best = best.min(score);
                beta = beta.min(best);
                if beta <= alpha {
                    break;
                }
            }
            best
        }
    }
}
