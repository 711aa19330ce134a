//! Knight movement.

/// Return `true` if the deltas form an L-shape.
#[inline]
pub(super) fn knight_move(d_row: i8, d_col: i8) -> bool {
    matches!((d_row.abs(), d_col.abs()), (2, 1) | (1, 2))
}
