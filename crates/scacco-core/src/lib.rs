//! Core chess types: board representation, piece rules, check detection and
//! legal move generation.

mod board;
mod chess_move;
mod color;
mod error;
mod fen;
mod make_move;
mod moved_flags;
pub mod movegen;
pub mod perft;
mod piece;
mod piece_kind;
mod square;

pub use board::{Board, PrettyBoard};
pub use chess_move::{Move, MoveKind};
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_PLACEMENT;
pub use make_move::TrialMove;
pub use moved_flags::{MovedFlags, RookSide};
pub use movegen::{GameStatus, MoveList, game_status, generate_legal_moves, has_legal_moves};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use square::Square;
