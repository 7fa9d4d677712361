//! Search configuration for the route planner.

/// Configuration parameters for route search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchConfig {
    /// Maximum number of states to expand before giving up.
    /// `None` lets the search run until the frontier is exhausted.
    pub max_expansions: Option<usize>,
}

impl SearchConfig {
    /// Create a new configuration with the given parameters.
    pub fn new(max_expansions: Option<usize>) -> Self {
        Self { max_expansions }
    }

    /// Whether `expansions` has reached the configured cap.
    pub fn expansion_limit_reached(&self, expansions: usize) -> bool {
        self.max_expansions.is_some_and(|max| expansions >= max)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            max_expansions: Some(1_000_000),
        }
    }
}
