//! Console front-end for scacco: command parsing and the human-versus-bot
//! game loop.

pub mod command;
pub mod error;
pub mod game;

pub use command::{Command, HELP, parse_command};
pub use error::CliError;
pub use game::{Game, Outcome, PROMPT};
