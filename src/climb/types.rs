//! Records produced by hill climbing.

/// A closed tour as an ordered permutation of point indices.
pub type Route = Vec<usize>;

/// Outcome of one hill-climbing run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartRecord {
    /// Locally optimal route the run converged to.
    pub route: Route,
    /// Closed-tour length of `route`.
    pub distance: f64,
    /// Number of strictly improving moves taken before convergence.
    pub iterations: usize,
}

/// Snapshot of a completed restart batch.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RestartSummary {
    /// Shortest route found across the batch.
    pub best_route: Route,
    /// Length of `best_route`.
    pub best_distance: f64,
    /// Number of restarts executed.
    pub restarts: usize,
}
