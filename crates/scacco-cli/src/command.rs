//! Console command parsing.

use scacco_core::{Move, Square};

use crate::error::CliError;

/// Usage line printed by `help`.
pub const HELP: &str =
    "Commands: a move such as e2e4, board, depth <1-8>, threads <1-64>, help, exit";

/// A parsed console command.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move the piece on `source` to `dest`.
    Move {
        /// Square the piece leaves.
        source: Square,
        /// Square the piece lands on.
        dest: Square,
    },
    /// `exit` or `quit`: leave the game.
    Quit,
    /// `depth N`: change the bot's search depth.
    Depth(u8),
    /// `threads N`: change the bot's thread count.
    Threads(usize),
    /// `board`: redraw the board.
    Board,
    /// `help`: print the usage line.
    Help,
}

impl Command {
    /// The move this command plays, if it is one.
    pub fn as_move(self) -> Option<Move> {
        match self {
            Command::Move { source, dest } => Some(Move::new(source, dest)),
            _ => None,
        }
    }
}

/// Parse a single line of console input into a [`Command`].
///
/// Coordinates are bounds-checked here: `e9e4` or `i2i4` is an
/// [`CliError::InvalidMove`] and never reaches the board.
pub fn parse_command(line: &str) -> Result<Command, CliError> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let Some(&first) = tokens.first() else {
        return Err(CliError::Empty);
    };

    match first {
        "exit" | "quit" => Ok(Command::Quit),
        "board" => Ok(Command::Board),
        "help" => Ok(Command::Help),
        "depth" => parse_value(tokens.get(1), "depth").map(Command::Depth),
        "threads" => parse_value(tokens.get(1), "threads").map(Command::Threads),
        _ => parse_move(first),
    }
}

/// Parse coordinate notation such as `e2e4`.
fn parse_move(token: &str) -> Result<Command, CliError> {
    let mv = Move::from_coordinate(token).ok_or_else(|| CliError::InvalidMove {
        input: token.to_string(),
    })?;
    Ok(Command::Move {
        source: mv.source(),
        dest: mv.dest(),
    })
}

/// Parse the value following a command name.
fn parse_value<T: std::str::FromStr>(
    token: Option<&&str>,
    command: &'static str,
) -> Result<T, CliError> {
    let value = token.ok_or(CliError::MissingValue { command })?;
    value.parse().map_err(|_| CliError::InvalidValue {
        command,
        value: value.to_string(),
    })
}
