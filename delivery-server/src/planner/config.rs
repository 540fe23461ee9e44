//! Search limits for trip planning.

/// Configuration parameters for trip search.
///
/// Both limits default to unbounded: every simple path is enumerated.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PlannerConfig {
    /// Maximum number of routes in a trip.
    /// Longer paths are not explored.
    pub max_hops: Option<usize>,

    /// Maximum number of trips to return.
    /// Enumeration stops once this many have been found.
    pub max_results: Option<usize>,
}

impl PlannerConfig {
    /// Create a new configuration with the given limits.
    pub fn new(max_hops: Option<usize>, max_results: Option<usize>) -> Self {
        Self {
            max_hops,
            max_results,
        }
    }

    /// Configuration with no limits.
    pub fn unbounded() -> Self {
        Self::default()
    }

    /// Set the maximum number of routes per trip.
    pub fn with_max_hops(mut self, hops: usize) -> Self {
        self.max_hops = Some(hops);
        self
    }

    /// Set the maximum number of trips.
    pub fn with_max_results(mut self, results: usize) -> Self {
        self.max_results = Some(results);
        self
    }

    /// Whether a path of `hops` routes is within the hop limit.
    pub fn allows_hops(&self, hops: usize) -> bool {
        self.max_hops.is_none_or(|max| hops <= max)
    }

    /// Whether `found` trips have reached the result limit.
    pub fn results_full(&self, found: usize) -> bool {
        self.max_results.is_some_and(|max| found >= max)
    }
}
