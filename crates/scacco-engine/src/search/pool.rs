//! Root-split parallel search.
//!
//! The root moves are cut into contiguous chunks, one per thread. Each thread
//! searches its chunk on a private copy of the board, so no position state is
//! shared. Scores come back in generation order, which keeps the root tie-break
//! identical to the single-threaded search.

use std::sync::atomic::{AtomicU64, Ordering};

use scacco_core::{Board, Color, Move};

use crate::search::minimax::{INF, SearchContext, minimax};

/// Minimax value of one root move, searched `depth` plies below it.
pub(super) fn score_root_move(
    board: &mut Board,
    side: Color,
    mv: Move,
    depth: u8,
    ctx: &mut SearchContext,
) -> i32 {
    let mut child = board.trial(mv);
    minimax(&mut child, depth, side.flip(), -INF, INF, ctx)
}

/// Score every root move on the caller's thread.
///
/// Returns one score per move, in move order, and the node count.
pub(super) fn score_root_moves(
    board: &mut Board,
    side: Color,
    moves: &[Move],
    depth: u8,
) -> (Vec<i32>, u64) {
    let mut ctx = SearchContext::new();
    let scores = moves
        .iter()
        .map(|&mv| score_root_move(board, side, mv, depth, &mut ctx))
        .collect();
    (scores, ctx.nodes)
}

/// Score every root move across up to `threads` scoped threads.
///
/// Same contract as [`score_root_moves`]. Node counts from all threads are
/// summed.
pub(super) fn score_root_moves_parallel(
    board: &Board,
    side: Color,
    moves: &[Move],
    depth: u8,
    threads: usize,
) -> (Vec<i32>, u64) {
    let threads = threads.clamp(1, moves.len().max(1));
    let chunk_len = moves.len().div_ceil(threads).max(1);

    // One counter per thread to avoid contention
    let node_counters: Vec<AtomicU64> = (0..threads).map(|_| AtomicU64::new(0)).collect();
    let mut scores = vec![0; moves.len()];

    std::thread::scope(|s| {
        for ((chunk, out), counter) in moves
            .chunks(chunk_len)
            .zip(scores.chunks_mut(chunk_len))
            .zip(&node_counters)
        {
            let mut local = *board;
            s.spawn(move || {
                let mut ctx = SearchContext::new();
                for (&mv, slot) in chunk.iter().zip(out.iter_mut()) {
                    *slot = score_root_move(&mut local, side, mv, depth, &mut ctx);
                }
                counter.store(ctx.nodes, Ordering::Relaxed);
            });
        }
    });
    // scope joins every worker here

    let nodes = node_counters
        .iter()
        .map(|c| c.load(Ordering::Relaxed))
        .sum();
    (scores, nodes)
}
