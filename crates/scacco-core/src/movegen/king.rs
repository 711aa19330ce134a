//! King movement: one step in any direction. No castling.

/// Return `true` if the deltas are a single step.
#[inline]
pub(super) fn king_move(d_row: i8, d_col: i8) -> bool {
    d_row.abs() <= 1 && d_col.abs() <= 1
}
