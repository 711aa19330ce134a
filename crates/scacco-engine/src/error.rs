//! Search configuration errors.

use crate::config::SearchConfig;

/// Errors raised when building a [`SearchConfig`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    /// The requested depth is 0 or above [`SearchConfig::MAX_DEPTH`].
    #[error("search depth must be between 1 and {max}, got {depth}", max = SearchConfig::MAX_DEPTH)]
    DepthOutOfRange {
        /// The rejected depth.
        depth: u8,
    },
    /// The requested thread count is 0 or above [`SearchConfig::MAX_THREADS`].
    #[error("thread count must be between 1 and {max}, got {threads}", max = SearchConfig::MAX_THREADS)]
    ThreadsOutOfRange {
        /// The rejected thread count.
        threads: usize,
    },
}
