//! Move representation.

use std::fmt;

use crate::square::Square;

/// The category of a move.
///
/// Only [`MoveKind::Normal`] is ever produced by the rules. `Castling` keeps
/// the numeric tag free for a future castling implementation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum MoveKind {
    Normal = 1,
    Castling = 2,
}

impl MoveKind {
    /// Numeric tag at the caller boundary (1 = normal, 2 = castling).
    #[inline]
    pub const fn code(self) -> u8 {
        self as u8
    }

    /// Map a boundary tag back to a kind; 0 and unknown tags give `None`.
    #[inline]
    pub const fn from_code(code: u8) -> Option<MoveKind> {
        match code {
            1 => Some(MoveKind::Normal),
            2 => Some(MoveKind::Castling),
            _ => None,
        }
    }
}

/// A move from one square to another. Owns no board cells.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    kind: MoveKind,
}

impl Move {
    /// Create a normal move.
    #[inline]
    pub const fn new(source: Square, dest: Square) -> Move {
        Move {
            source,
            dest,
            kind: MoveKind::Normal,
        }
    }

    /// Create a move with an explicit kind.
    #[inline]
    pub const fn with_kind(source: Square, dest: Square, kind: MoveKind) -> Move {
        Move { source, dest, kind }
    }

    /// The square the piece leaves.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// The square the piece lands on.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// The move kind tag.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// Coordinate notation, e.g. `"e2e4"`.
    pub fn to_coordinate(self) -> String {
        format!("{}{}", self.source, self.dest)
    }

    /// Parse coordinate notation (`"e2e4"`) into a normal move.
    pub fn from_coordinate(s: &str) -> Option<Move> {
        if s.len() != 4 || !s.is_ascii() {
            return None;
        }
        let source = Square::from_algebraic(&s[..2])?;
        let dest = Square::from_algebraic(&s[2..])?;
        Some(Move::new(source, dest))
    }

    /// Human-readable description, e.g. `"e7 to e5"`.
    pub fn describe(self) -> String {
        format!("{} to {}", self.source, self.dest)
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?})", self, self.kind)
    }
}
