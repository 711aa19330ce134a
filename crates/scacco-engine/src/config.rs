//! Search configuration.

use crate::error::ConfigError;

/// Knobs for [`Searcher`](crate::Searcher).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Plies searched, counting the root move itself.
    pub depth: u8,
    /// Threads used to split the root moves. 1 searches on the caller's thread.
    pub threads: usize,
}

impl SearchConfig {
    /// Default depth: the root ply plus four plies below it.
    pub const DEFAULT_DEPTH: u8 = 5;

    /// Deepest search accepted. The exhaustive generator makes anything past
    /// this impractically slow.
    pub const MAX_DEPTH: u8 = 8;

    /// Largest thread count accepted.
    pub const MAX_THREADS: usize = 64;

    /// Build a configuration, rejecting out-of-range values.
    pub fn new(depth: u8, threads: usize) -> Result<SearchConfig, ConfigError> {
        SearchConfig::default().with_depth(depth)?.with_threads(threads)
    }

    /// Return a copy with a different depth.
    pub fn with_depth(self, depth: u8) -> Result<SearchConfig, ConfigError> {
        if depth == 0 || depth > Self::MAX_DEPTH {
            return Err(ConfigError::DepthOutOfRange { depth });
        }
        Ok(SearchConfig { depth, ..self })
    }

    /// Return a copy with a different thread count.
    pub fn with_threads(self, threads: usize) -> Result<SearchConfig, ConfigError> {
        if threads == 0 || threads > Self::MAX_THREADS {
            return Err(ConfigError::ThreadsOutOfRange { threads });
        }
        Ok(SearchConfig { threads, ..self })
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            depth: Self::DEFAULT_DEPTH,
            threads: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::SearchConfig;
    use crate::error::ConfigError;

    #[test]
    fn default_is_depth_five_single_thread() {
        let config = SearchConfig::default();
        assert_eq!(config.depth, 5);
        assert_eq!(config.threads, 1);
    }

    #[test]
    fn depth_bounds() {
        assert_eq!(
            SearchConfig::default().with_depth(0),
            Err(ConfigError::DepthOutOfRange { depth: 0 })
        );
        assert!(SearchConfig::default().with_depth(SearchConfig::MAX_DEPTH).is_ok());
        assert!(SearchConfig::default().with_depth(SearchConfig::MAX_DEPTH + 1).is_err());
    }

    #[test]
    fn thread_bounds() {
        assert_eq!(
            SearchConfig::default().with_threads(0),
            Err(ConfigError::ThreadsOutOfRange { threads: 0 })
        );
        let config = SearchConfig::new(3, 4).unwrap();
        assert_eq!(config, SearchConfig { depth: 3, threads: 4 });
    }

    #[test]
    fn error_messages() {
        let err = SearchConfig::new(0, 1).unwrap_err();
        assert_eq!(err.to_string(), "search depth must be between 1 and 8, got 0");
        let err = SearchConfig::new(2, 65).unwrap_err();
        assert_eq!(err.to_string(), "thread count must be between 1 and 64, got 65");
    }
}
