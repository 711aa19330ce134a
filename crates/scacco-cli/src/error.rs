//! Console front-end errors.

use scacco_engine::ConfigError;

/// Errors that can occur while reading and acting on console input.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// The input line was blank.
    #[error("empty input")]
    Empty,

    /// The input is neither a known command nor a move in coordinate notation.
    #[error("invalid move: {input}")]
    InvalidMove {
        /// The rejected token.
        input: String,
    },

    /// A command that takes a value was given none.
    #[error("missing value for {command}")]
    MissingValue {
        /// The command name.
        command: &'static str,
    },

    /// A command value could not be parsed.
    #[error("invalid value for {command}: {value}")]
    InvalidValue {
        /// The command name.
        command: &'static str,
        /// The value that failed to parse.
        value: String,
    },

    /// A parsed value was rejected by the search configuration.
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Reading input or writing output failed.
    #[error("I/O error: {source}")]
    Io {
        /// The underlying I/O error.
        #[from]
        source: std::io::Error,
    },
}
