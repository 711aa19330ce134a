//! Human-versus-bot console game loop.
//!
//! The human plays White and the bot plays Black. Input and output are
//! generic so the loop runs the same against stdin/stdout and in-memory
//! buffers.

use std::io::{BufRead, Write};

use tracing::{debug, info, warn};

use scacco_core::{Board, Color, GameStatus, Move, game_status};
use scacco_engine::{BOT_SIDE, SearchConfig, Searcher};

use crate::command::{Command, HELP, parse_command};
use crate::error::CliError;

/// Prompt printed before each human move.
pub const PROMPT: &str = "Your move (e.g., e2e4 or type 'exit' to quit): ";

/// How a game ended.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    /// The side to move was checkmated.
    Checkmate {
        /// The side that delivered mate.
        winner: Color,
    },
    /// The side to move had no legal move and was not in check.
    Stalemate,
    /// The human typed `exit` or `quit`.
    Quit,
    /// Input reached end of file.
    InputClosed,
}

/// What a human turn produced.
enum Turn {
    Played,
    Retry,
    Finished(Outcome),
}

/// A console game between a human (White) and the bot (Black).
pub struct Game<R, W> {
    board: Board,
    turn: Color,
    searcher: Searcher,
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Game<R, W> {
    /// Start a game from the initial position with the default search settings.
    pub fn new(input: R, output: W) -> Self {
        Self::with_config(input, output, SearchConfig::default())
    }

    /// Start a game from the initial position with the given search settings.
    pub fn with_config(input: R, output: W, config: SearchConfig) -> Self {
        Self {
            board: Board::starting_position(),
            turn: Color::White,
            searcher: Searcher::new(config),
            input,
            output,
        }
    }

    /// Replace the position and the side to move.
    pub fn with_position(mut self, board: Board, turn: Color) -> Self {
        self.board = board;
        self.turn = turn;
        self
    }

    /// The current position.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The side to move.
    pub fn turn(&self) -> Color {
        self.turn
    }

    /// The active search settings.
    pub fn config(&self) -> SearchConfig {
        self.searcher.config()
    }

    /// Consume the game and return its output sink.
    pub fn into_output(self) -> W {
        self.output
    }

    /// Play until checkmate, stalemate, `exit` or end of input.
    pub fn run(&mut self) -> Result<Outcome, CliError> {
        loop {
            writeln!(self.output, "{}", self.board.pretty())?;

            match game_status(&mut self.board, self.turn) {
                GameStatus::Checkmate => {
                    let winner = self.turn.flip();
                    writeln!(self.output, "Checkmate! {winner} wins!")?;
                    info!(%winner, "checkmate");
                    return Ok(Outcome::Checkmate { winner });
                }
                GameStatus::Stalemate => {
                    writeln!(self.output, "Stalemate!")?;
                    info!("stalemate");
                    return Ok(Outcome::Stalemate);
                }
                GameStatus::Check => writeln!(self.output, "Check!")?,
                GameStatus::Ongoing => {}
            }

            if self.turn == BOT_SIDE {
                self.bot_turn()?;
                continue;
            }

            match self.human_turn()? {
                Turn::Played => self.turn = self.turn.flip(),
                Turn::Retry => {}
                Turn::Finished(outcome) => return Ok(outcome),
            }
        }
    }

    /// Let the bot choose and play its move.
    fn bot_turn(&mut self) -> Result<(), CliError> {
        writeln!(self.output, "{} is thinking...", self.turn)?;
        self.output.flush()?;

        // The status check above guarantees at least one legal move.
        if let Some(result) = self.searcher.play(&mut self.board, self.turn) {
            writeln!(
                self.output,
                "{} plays {}",
                self.turn,
                result.best_move.describe()
            )?;
            self.turn = self.turn.flip();
        }
        Ok(())
    }

    /// Read one line from the human and act on it.
    fn human_turn(&mut self) -> Result<Turn, CliError> {
        write!(self.output, "{PROMPT}")?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            debug!("input closed");
            return Ok(Turn::Finished(Outcome::InputClosed));
        }
        writeln!(self.output)?;

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(CliError::Empty | CliError::InvalidMove { .. }) => {
                warn!(input = %line.trim(), "rejected input");
                writeln!(self.output, "Invalid move.")?;
                return Ok(Turn::Retry);
            }
            Err(e) => {
                warn!(error = %e, "rejected command");
                writeln!(self.output, "{e}")?;
                return Ok(Turn::Retry);
            }
        };

        match command {
            Command::Move { source, dest } => self.human_move(Move::new(source, dest)),
            Command::Quit => Ok(Turn::Finished(Outcome::Quit)),
            Command::Board => Ok(Turn::Retry),
            Command::Help => {
                writeln!(self.output, "{HELP}")?;
                Ok(Turn::Retry)
            }
            Command::Depth(_) | Command::Threads(_) => {
                match self.apply_setting(command) {
                    Ok(config) => writeln!(
                        self.output,
                        "Search depth {}, threads {}",
                        config.depth, config.threads
                    )?,
                    Err(e) => {
                        warn!(error = %e, "rejected setting");
                        writeln!(self.output, "{e}")?;
                    }
                }
                Ok(Turn::Retry)
            }
        }
    }

    /// Play a human move if it is legal, otherwise explain why not.
    fn human_move(&mut self, mv: Move) -> Result<Turn, CliError> {
        let side = self.turn;
        let Some(kind) = self.board.pseudo_legal(side, mv.source(), mv.dest()) else {
            warn!(%mv, "illegal move");
            writeln!(self.output, "Invalid move.")?;
            return Ok(Turn::Retry);
        };
        let mv = Move::with_kind(mv.source(), mv.dest(), kind);

        if self.board.trial(mv).is_king_in_check(side) {
            warn!(%mv, "move leaves king in check");
            writeln!(self.output, "Move puts own king in check.")?;
            return Ok(Turn::Retry);
        }

        self.board.apply_move(mv);
        debug!(%side, %mv, "human move");
        Ok(Turn::Played)
    }

    /// Apply a `depth` or `threads` command to the search settings.
    fn apply_setting(&mut self, command: Command) -> Result<SearchConfig, CliError> {
        let current = self.searcher.config();
        let config = match command {
            Command::Depth(depth) => current.with_depth(depth)?,
            Command::Threads(threads) => current.with_threads(threads)?,
            _ => current,
        };
        self.searcher.set_config(config);
        Ok(config)
    }
}
