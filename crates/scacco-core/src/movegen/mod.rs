//! Piece rules and legal move generation.
//!
//! Generation is a plain scan: every own piece is tried against every
//! destination, and each pseudo-legal candidate is played on the board with a
//! [`TrialMove`](crate::TrialMove) to confirm the mover's king is safe.

mod check;
mod king;
mod knights;
mod pawns;
mod sliders;

use tracing::warn;

use crate::board::Board;
use crate::chess_move::{Move, MoveKind};
use crate::color::Color;
use crate::piece_kind::PieceKind;
use crate::square::Square;

use self::king::king_move;
use self::knights::knight_move;
use self::pawns::pawn_move;
use self::sliders::{bishop_move, queen_move, rook_move};

/// Stack-allocated, bounded buffer for generated moves.
///
/// Holds at most [`MoveList::CAPACITY`] moves. Pushing into a full list drops
/// the move and reports `false`; generation then returns the partial list.
pub struct MoveList {
    moves: [Move; MoveList::CAPACITY],
    len: u16,
}

impl MoveList {
    /// Maximum number of moves held. Legal positions stay far below it.
    pub const CAPACITY: usize = 256;

    /// Create an empty move list.
    pub fn new() -> MoveList {
        MoveList {
            moves: [Move::new(Square::A8, Square::A8); MoveList::CAPACITY],
            len: 0,
        }
    }

    /// Push a move, returning `false` (and dropping it) if the list is full.
    #[inline]
    pub fn push(&mut self, mv: Move) -> bool {
        if self.is_full() {
            return false;
        }
        self.moves[self.len as usize] = mv;
        self.len += 1;
        true
    }

    /// Return the number of moves in the list.
    #[inline]
    pub fn len(&self) -> usize {
        self.len as usize
    }

    /// Return `true` if the list is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Return `true` if no more moves fit.
    #[inline]
    pub fn is_full(&self) -> bool {
        self.len as usize == MoveList::CAPACITY
    }

    /// Return `true` if the list holds `mv`.
    pub fn contains(&self, mv: Move) -> bool {
        self.as_slice().contains(&mv)
    }

    /// Return a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len as usize]
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;
    #[inline]
    fn index(&self, index: usize) -> &Move {
        &self.as_slice()[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;
    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Outcome of a position for the side to move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// Not in check, with at least one legal move.
    Ongoing,
    /// In check, with at least one legal move.
    Check,
    /// In check, with no legal move.
    Checkmate,
    /// Not in check, with no legal move.
    Stalemate,
}

impl GameStatus {
    /// Return `true` for checkmate and stalemate.
    pub const fn is_over(self) -> bool {
        matches!(self, GameStatus::Checkmate | GameStatus::Stalemate)
    }
}

impl Board {
    /// Decide whether `side` may move the piece on `source` to `dest`,
    /// ignoring whether the move would leave its own king in check.
    ///
    /// Returns `None` when the move is illegal. The only kind produced is
    /// [`MoveKind::Normal`].
    pub fn pseudo_legal(&self, side: Color, source: Square, dest: Square) -> Option<MoveKind> {
        let piece = self.piece_at(source).filter(|p| p.is(side))?;
        if self.is_own(side, dest) {
            return None;
        }

        let d_row = dest.row() as i8 - source.row() as i8;
        let d_col = dest.col() as i8 - source.col() as i8;

        let geometry_ok = match piece.kind() {
            PieceKind::Pawn => pawn_move(self, side, source, dest),
            PieceKind::Knight => knight_move(d_row, d_col),
            PieceKind::Bishop => bishop_move(self, source, dest, d_row, d_col),
            PieceKind::Rook => rook_move(self, source, dest, d_row, d_col),
            PieceKind::Queen => queen_move(self, source, dest, d_row, d_col),
            PieceKind::King => king_move(d_row, d_col),
        };

        geometry_ok.then_some(MoveKind::Normal)
    }

    /// Numeric form of [`Board::pseudo_legal`]: 0 when illegal, otherwise the
    /// [`MoveKind::code`] of the move.
    #[inline]
    pub fn is_move_valid(&self, side: Color, source: Square, dest: Square) -> u8 {
        self.pseudo_legal(side, source, dest).map_or(0, MoveKind::code)
    }

    /// Return `true` if `mv` is pseudo-legal for `side` and does not leave the
    /// king of `side` in check.
    pub fn is_legal(&mut self, side: Color, mv: Move) -> bool {
        self.pseudo_legal(side, mv.source(), mv.dest()).is_some() && !leaves_king_in_check(self, side, mv)
    }
}

/// Play `mv` on a trial basis and report whether `side` ends up in check.
fn leaves_king_in_check(board: &mut Board, side: Color, mv: Move) -> bool {
    board.trial(mv).is_king_in_check(side)
}

/// Visit every legal move of `side` in generation order until `visit` returns
/// `false`.
///
/// Sources and destinations are both scanned in row-major order.
fn for_each_legal_move<F>(board: &mut Board, side: Color, mut visit: F)
where
    F: FnMut(Move) -> bool,
{
    for source in Square::all() {
        if !board.is_own(side, source) {
            continue;
        }
        for dest in Square::all() {
            let Some(kind) = board.pseudo_legal(side, source, dest) else {
                continue;
            };
            let mv = Move::with_kind(source, dest, kind);
            if leaves_king_in_check(board, side, mv) {
                continue;
            }
            if !visit(mv) {
                return;
            }
        }
    }
}

/// Generate all legal moves for `side`.
///
/// The board is mutated during generation and restored before returning.
/// More than [`MoveList::CAPACITY`] moves are silently truncated.
pub fn generate_legal_moves(board: &mut Board, side: Color) -> MoveList {
    let mut list = MoveList::new();
    for_each_legal_move(board, side, |mv| {
        if list.push(mv) {
            return true;
        }
        warn!(%side, capacity = MoveList::CAPACITY, "move list full, truncating");
        false
    });
    list
}

/// Return `true` as soon as one legal move for `side` is found.
pub fn has_legal_moves(board: &mut Board, side: Color) -> bool {
    let mut found = false;
    for_each_legal_move(board, side, |_| {
        found = true;
        false
    });
    found
}

/// Classify the position for `side`: ongoing, check, checkmate or stalemate.
pub fn game_status(board: &mut Board, side: Color) -> GameStatus {
    let in_check = board.is_king_in_check(side);
    match (in_check, has_legal_moves(board, side)) {
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Checkmate,
        (false, true) => GameStatus::Ongoing,
        (false, false) => GameStatus::Stalemate,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::board::Board;
    use crate::piece::Piece;

    const POSITIONS: [&str; 6] = [
        "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR",
        "r1bqkb1r/pppp1ppp/2n2n2/4p2Q/2B1P3/8/PPPP1PPP/RNB1K1NR",
        "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R",
        "4r2k/8/8/8/8/8/4N3/4K3",
        "4r1k1/8/8/8/8/5n2/8/4K3",
        "8/2p5/3p4/KP5r/1R3p1k/8/4P1P1/8",
    ];

    #[test]
    fn starting_position_20_moves() {
        let mut board = Board::starting_position();
        let moves = generate_legal_moves(&mut board, Color::White);
        assert_eq!(moves.len(), 20, "starting position should have 20 legal moves, got {}", moves.len());
        let black = generate_legal_moves(&mut board, Color::Black);
        assert_eq!(black.len(), 20);
        assert_eq!(board, Board::starting_position(), "generation must leave the board untouched");
    }

    #[test]
    fn generation_order_is_row_major() {
        let mut board = Board::starting_position();
        let moves = generate_legal_moves(&mut board, Color::White);
        // White's first own square in row-major order is a2.
        assert_eq!(moves[0], Move::new(Square::A2, Square::A4));
        assert_eq!(moves[1], Move::new(Square::A2, Square::A3));
        assert_eq!(moves[moves.len() - 1], Move::new(Square::G1, Square::H3));
    }

    #[test]
    fn every_move_is_normal_kind() {
        for text in POSITIONS {
            let mut board: Board = text.parse().unwrap();
            for side in Color::ALL {
                for mv in &generate_legal_moves(&mut board, side) {
                    assert_eq!(mv.kind(), MoveKind::Normal);
                }
            }
        }
    }

    #[test]
    fn own_pieces_and_foreign_pieces_rejected() {
        for text in POSITIONS {
            let board: Board = text.parse().unwrap();
            for side in Color::ALL {
                for source in Square::all() {
                    for dest in Square::all() {
                        let valid = board.pseudo_legal(side, source, dest).is_some();
                        if board.is_own(side, dest) {
                            assert!(!valid, "{side} captured its own piece {source}->{dest} in {text}");
                        }
                        if !board.is_own(side, source) {
                            assert!(!valid, "{side} moved a piece it does not own {source}->{dest} in {text}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn numeric_boundary_form() {
        let board = Board::starting_position();
        assert_eq!(board.is_move_valid(Color::White, Square::E2, Square::E4), 1);
        assert_eq!(board.is_move_valid(Color::White, Square::E2, Square::E5), 0);
        assert_eq!(board.is_move_valid(Color::Black, Square::E2, Square::E4), 0);
    }

    #[test]
    fn generated_moves_never_leave_king_in_check() {
        for text in POSITIONS {
            let mut board: Board = text.parse().unwrap();
            for side in Color::ALL {
                let moves = generate_legal_moves(&mut board, side);
                for &mv in &moves {
                    let trial = board.trial(mv);
                    assert!(!trial.is_king_in_check(side), "{mv} leaves {side} in check in {text}");
                }
            }
        }
    }

    #[test]
    fn has_legal_moves_agrees_with_generation() {
        let mut positions: Vec<&str> = POSITIONS.to_vec();
        positions.push("7k/5Q2/6K1/8/8/8/8/8"); // black stalemated
        positions.push("R5k1/5ppp/8/8/8/8/8/6K1"); // black mated
        for text in positions {
            let mut board: Board = text.parse().unwrap();
            for side in Color::ALL {
                let expected = !generate_legal_moves(&mut board, side).is_empty();
                assert_eq!(has_legal_moves(&mut board, side), expected, "{side} in {text}");
            }
        }
    }

    #[test]
    fn pinned_knight_has_no_moves() {
        let mut board: Board = "4r2k/8/8/8/8/8/4N3/4K3".parse().unwrap();
        let moves = generate_legal_moves(&mut board, Color::White);
        assert!(moves.as_slice().iter().all(|m| m.source() != Square::E2), "pinned knight moved: {moves:?}");
    }

    #[test]
    fn double_check_king_only() {
        let mut board: Board = "4r1k1/8/8/8/8/5n2/8/4K3".parse().unwrap();
        let moves = generate_legal_moves(&mut board, Color::White);
        assert!(!moves.is_empty());
        for mv in &moves {
            assert_eq!(board.piece_at(mv.source()), Some(Piece::WHITE_KING));
        }
    }

    #[test]
    fn is_legal_rejects_self_check() {
        let mut board: Board = "4r2k/8/8/8/8/8/4N3/4K3".parse().unwrap();
        let before = board;
        assert!(!board.is_legal(Color::White, Move::new(Square::E2, Square::C3)));
        assert!(board.is_legal(Color::White, Move::new(Square::E1, Square::D1)));
        assert!(!board.is_legal(Color::White, Move::new(Square::E1, Square::E3)));
        assert_eq!(board, before);
    }

    #[test]
    fn status_classification() {
        let mut board = Board::starting_position();
        assert_eq!(game_status(&mut board, Color::White), GameStatus::Ongoing);

        let mut board: Board = "4r1k1/8/8/8/8/8/8/4K3".parse().unwrap();
        assert_eq!(game_status(&mut board, Color::White), GameStatus::Check);

        let mut board: Board = "R5k1/5ppp/8/8/8/8/8/6K1".parse().unwrap();
        assert_eq!(game_status(&mut board, Color::Black), GameStatus::Checkmate);
        assert!(GameStatus::Checkmate.is_over());

        let mut board: Board = "7k/5Q2/6K1/8/8/8/8/8".parse().unwrap();
        assert_eq!(game_status(&mut board, Color::Black), GameStatus::Stalemate);
    }

    #[test]
    fn move_list_truncates_at_capacity() {
        let mut list = MoveList::new();
        let mv = Move::new(Square::E2, Square::E4);
        for _ in 0..MoveList::CAPACITY {
            assert!(list.push(mv));
        }
        assert!(list.is_full());
        assert!(!list.push(Move::new(Square::D2, Square::D4)));
        assert_eq!(list.len(), MoveList::CAPACITY);
        assert!(!list.contains(Move::new(Square::D2, Square::D4)));
    }
}
