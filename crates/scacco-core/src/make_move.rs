//! Move execution in place, and a scoped guard that undoes a trial move.

use std::ops::{Deref, DerefMut};

use crate::board::Board;
use crate::chess_move::Move;
use crate::moved_flags::MovedFlags;
use crate::piece::Piece;
use crate::square::Square;

impl Board {
    /// Move the piece on `mv.source()` to `mv.dest()`, capturing whatever
    /// stood there, and update the king/rook move history.
    ///
    /// Nothing is validated and nothing is recorded for undo. An empty source
    /// square, or a move onto its own square, leaves the board unchanged. Use
    /// [`Board::trial`] for a move that must be taken back.
    pub fn apply_move(&mut self, mv: Move) {
        if mv.source() == mv.dest() {
            return;
        }
        let Some(piece) = self.piece_at(mv.source()) else {
            return;
        };
        self.moved_flags_mut().record(piece, mv.source());
        self.put(mv.dest(), piece);
        self.clear(mv.source());
    }

    /// Apply `mv` and return a guard that restores the board when dropped.
    ///
    /// The guard dereferences to the board, so check detection and deeper
    /// search run through it. The two touched cells and the move history are
    /// restored on every exit path, unwinding included.
    pub fn trial(&mut self, mv: Move) -> TrialMove<'_> {
        let saved = Snapshot {
            source: mv.source(),
            dest: mv.dest(),
            source_cell: self.piece_at(mv.source()),
            dest_cell: self.piece_at(mv.dest()),
            moved: self.moved_flags(),
        };
        self.apply_move(mv);
        TrialMove { board: self, saved }
    }
}

/// The cells and history touched by one move.
struct Snapshot {
    source: Square,
    dest: Square,
    source_cell: Option<Piece>,
    dest_cell: Option<Piece>,
    moved: MovedFlags,
}

/// A move applied to a borrowed board, undone on drop.
pub struct TrialMove<'a> {
    board: &'a mut Board,
    saved: Snapshot,
}

impl Deref for TrialMove<'_> {
    type Target = Board;

    #[inline]
    fn deref(&self) -> &Board {
        &*self.board
    }
}

impl DerefMut for TrialMove<'_> {
    #[inline]
    fn deref_mut(&mut self) -> &mut Board {
        &mut *self.board
    }
}

impl Drop for TrialMove<'_> {
    fn drop(&mut self) {
        self.board.set_cell(self.saved.dest, self.saved.dest_cell);
        self.board.set_cell(self.saved.source, self.saved.source_cell);
        self.board.set_moved_flags(self.saved.moved);
    }
}

#[cfg(test)]
mod tests {
    use std::panic::{AssertUnwindSafe, catch_unwind};

    use crate::board::Board;
    use crate::chess_move::Move;
    use crate::color::Color;
    use crate::moved_flags::RookSide;
    use crate::piece::Piece;
    use crate::square::Square;

    #[test]
    fn apply_moves_piece_and_clears_source() {
        let mut board = Board::starting_position();
        board.apply_move(Move::new(Square::E2, Square::E4));
        assert_eq!(board.piece_at(Square::E4), Some(Piece::WHITE_PAWN));
        assert_eq!(board.piece_at(Square::E2), None);
    }

    #[test]
    fn apply_overwrites_captured_piece() {
        let mut board: Board = "4k3/8/8/3p4/4P3/8/8/4K3".parse().unwrap();
        board.apply_move(Move::new(Square::E4, Square::D5));
        assert_eq!(board.piece_at(Square::D5), Some(Piece::WHITE_PAWN));
        assert_eq!(board.count(Piece::BLACK_PAWN), 0);
    }

    #[test]
    fn apply_from_empty_square_is_noop() {
        let mut board = Board::starting_position();
        board.apply_move(Move::new(Square::E4, Square::E5));
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn apply_records_king_and_rook_history() {
        let mut board: Board = "r3k2r/8/8/8/8/8/8/R3K2R".parse().unwrap();
        board.apply_move(Move::new(Square::H1, Square::H4));
        board.apply_move(Move::new(Square::E8, Square::D8));
        let flags = board.moved_flags();
        assert!(flags.rook_moved(Color::White, RookSide::KingSide));
        assert!(!flags.rook_moved(Color::White, RookSide::QueenSide));
        assert!(flags.king_moved(Color::Black));
        assert!(!flags.king_moved(Color::White));
    }

    #[test]
    fn trial_restores_on_drop() {
        let mut board: Board = "r3k2r/8/8/3p4/4P3/8/8/R3K2R".parse().unwrap();
        let before = board;
        for mv in [
            Move::new(Square::E4, Square::D5),
            Move::new(Square::E1, Square::E2),
            Move::new(Square::A1, Square::A8),
        ] {
            {
                let trial = board.trial(mv);
                assert_eq!(trial.piece_at(mv.source()), None);
                assert!(trial.piece_at(mv.dest()).is_some());
            }
            assert_eq!(board, before, "board not restored after {mv}");
        }
    }

    #[test]
    fn nested_trials_unwind_in_order() {
        let mut board = Board::starting_position();
        {
            let mut first = board.trial(Move::new(Square::E2, Square::E4));
            {
                let second = first.trial(Move::new(Square::D7, Square::D5));
                assert_eq!(second.piece_at(Square::D5), Some(Piece::BLACK_PAWN));
                assert_eq!(second.piece_at(Square::E4), Some(Piece::WHITE_PAWN));
            }
            assert_eq!(first.piece_at(Square::D7), Some(Piece::BLACK_PAWN));
            assert_eq!(first.piece_at(Square::D5), None);
        }
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn trial_of_null_move_keeps_piece() {
        let mut board = Board::starting_position();
        drop(board.trial(Move::new(Square::E2, Square::E2)));
        assert_eq!(board, Board::starting_position());
    }

    #[test]
    fn trial_restores_during_unwind() {
        let mut board = Board::starting_position();
        let result = catch_unwind(AssertUnwindSafe(|| {
            let _trial = board.trial(Move::new(Square::G1, Square::F3));
            panic!("abort mid-search");
        }));
        assert!(result.is_err());
        assert_eq!(board, Board::starting_position());
    }
}
