//! Search and evaluation for scacco.

pub mod config;
pub mod error;
pub mod eval;
pub mod search;

pub use config::SearchConfig;
pub use error::ConfigError;
pub use eval::evaluate;
pub use search::minimax::{INF, MATE_SCORE, SearchContext, mated_score, minimax};
pub use search::{BOT_SIDE, SearchResult, Searcher};
