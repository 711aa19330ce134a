//! Static evaluation.

pub mod material;

use scacco_core::Board;

/// Evaluate the board from White's perspective.
///
/// Material only: no positional, mobility or king-safety terms.
#[inline]
pub fn evaluate(board: &Board) -> i32 {
    material::material(board)
}
