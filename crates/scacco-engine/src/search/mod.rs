//! Root search and bot move selection.

pub mod minimax;
pub(crate) mod pool;

use std::time::Instant;

use scacco_core::{Board, Color, Move, generate_legal_moves};
use tracing::debug;

use crate::config::SearchConfig;
use pool::{score_root_moves, score_root_moves_parallel};

/// The side the bot plays.
pub const BOT_SIDE: Color = Color::Black;

/// Result of a completed search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchResult {
    /// Best root move. Ties go to the earliest move in generation order.
    pub best_move: Move,
    /// Minimax value of `best_move`, White-positive.
    pub score: i32,
    /// Total nodes visited below the root.
    pub nodes: u64,
    /// Depth searched, counting the root ply.
    pub depth: u8,
}

/// Fixed-depth minimax searcher.
#[derive(Debug, Clone, Default)]
pub struct Searcher {
    config: SearchConfig,
}

impl Searcher {
    /// Create a searcher with the given configuration.
    pub fn new(config: SearchConfig) -> Self {
        Self { config }
    }

    /// The active configuration.
    pub fn config(&self) -> SearchConfig {
        self.config
    }

    /// Replace the configuration. Takes effect on the next search.
    pub fn set_config(&mut self, config: SearchConfig) {
        self.config = config;
    }

    /// Find the best move for `side`.
    ///
    /// Every root move is searched with a full window. White keeps the
    /// highest score and Black the lowest; only a strictly better score
    /// replaces the current best. Returns `None` when `side` has no legal
    /// move. The board is left as it was.
    pub fn search(&self, board: &mut Board, side: Color) -> Option<SearchResult> {
        let start = Instant::now();
        let depth = self.config.depth;
        let child_depth = depth.saturating_sub(1);

        let moves = generate_legal_moves(board, side);
        if moves.is_empty() {
            debug!(%side, "no legal moves at root");
            return None;
        }

        let (scores, nodes) = if self.config.threads > 1 && moves.len() > 1 {
            score_root_moves_parallel(board, side, moves.as_slice(), child_depth, self.config.threads)
        } else {
            score_root_moves(board, side, moves.as_slice(), child_depth)
        };

        let (best_move, score) = pick_best(side, moves.as_slice(), &scores)?;

        debug!(
            %side,
            depth,
            threads = self.config.threads,
            nodes,
            score,
            best = %best_move,
            elapsed_ms = start.elapsed().as_millis() as u64,
            "search complete"
        );

        Some(SearchResult {
            best_move,
            score,
            nodes,
            depth,
        })
    }

    /// Search for `side` and commit the chosen move to the board.
    pub fn play(&self, board: &mut Board, side: Color) -> Option<SearchResult> {
        let result = self.search(board, side)?;
        board.apply_move(result.best_move);
        Some(result)
    }

    /// Choose and commit Black's move.
    pub fn bot_move(&self, board: &mut Board) -> Option<SearchResult> {
        self.play(board, BOT_SIDE)
    }
}

/// First move with the best score for `side`.
fn pick_best(side: Color, moves: &[Move], scores: &[i32]) -> Option<(Move, i32)> {
    let mut scored = moves.iter().copied().zip(scores.iter().copied());
    let mut best = scored.next()?;
    for (mv, score) in scored {
        let better = match side {
            Color::White => score > best.1,
            Color::Black => score < best.1,
        };
        if better {
            best = (mv, score);
        }
    }
    Some(best)
}
