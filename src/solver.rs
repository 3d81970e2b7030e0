//! Random-restart TSP solver.
//!
//! [`TspSolver`] owns one problem instance (points and distance matrix)
//! together with the results of the latest restart batch. Results are
//! replaced as a whole when a batch completes and are only exposed
//! through accessors.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::climb::{ClimbConfig, RestartRecord, RestartSummary, Restarts, Route};
use crate::distance::{DistanceMatrix, Point};
use crate::error::{Error, Result};
use crate::stats::{self, Statistics};

/// Separator used by [`TspSolver::format_route`].
pub const ROUTE_SEPARATOR: &str = " → ";

/// Hill-climbing TSP solver with random restarts.
///
/// # Examples
///
/// ```
/// use u_tsp_climb::dataset;
/// use u_tsp_climb::TspSolver;
///
/// let mut solver = TspSolver::new(dataset::unit_square())?.with_seed(42);
/// solver.run(10)?;
///
/// assert_eq!(solver.history().len(), 10);
/// assert!((solver.best_distance() - 4.0).abs() < 1e-10);
/// # Ok::<(), u_tsp_climb::Error>(())
/// ```
#[derive(Debug, Clone)]
pub struct TspSolver {
    points: Vec<Point>,
    matrix: DistanceMatrix,
    config: ClimbConfig,
    history: Vec<RestartRecord>,
    best_route: Option<Route>,
    best_distance: f64,
}

impl TspSolver {
    /// Creates a solver for `points`.
    ///
    /// Fails with [`Error::InvalidConfig`] for fewer than two points or
    /// any non-finite coordinate.
    pub fn new(points: Vec<Point>) -> Result<Self> {
        if points.len() < 2 {
            return Err(Error::invalid_config(format!(
                "need at least 2 points, got {}",
                points.len()
            )));
        }
        if let Some((idx, p)) = points.iter().enumerate().find(|(_, p)| !p.is_finite()) {
            return Err(Error::invalid_config(format!(
                "point {idx} ({}) has non-finite coordinates ({}, {})",
                p.label(),
                p.x(),
                p.y()
            )));
        }

        let matrix = DistanceMatrix::from_points(&points);
        log::debug!("solver created for {} points", points.len());

        Ok(Self {
            points,
            matrix,
            config: ClimbConfig::default(),
            history: Vec::new(),
            best_route: None,
            best_distance: f64::INFINITY,
        })
    }

    /// Replaces the configuration.
    pub fn with_config(mut self, config: ClimbConfig) -> Result<Self> {
        config.validate()?;
        self.config = config;
        Ok(self)
    }

    /// Fixes the random seed so every batch replays the same restarts.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.config.seed = Some(seed);
        self
    }

    /// Runs `max_restarts` independent hill climbs, replacing any
    /// previous history and best route.
    ///
    /// Uses the configured seed when set, otherwise a fresh one.
    pub fn run(&mut self, max_restarts: usize) -> Result<()> {
        let seed = self.config.seed.unwrap_or_else(rand::random);
        let mut rng = StdRng::seed_from_u64(seed);
        self.run_with_rng(max_restarts, &mut rng)
    }

    /// Runs a batch with the configured restart count.
    pub fn run_default(&mut self) -> Result<()> {
        self.run(self.config.max_restarts)
    }

    /// Runs a batch drawing initial routes from `rng`.
    pub fn run_with_rng<R: Rng>(&mut self, max_restarts: usize, rng: &mut R) -> Result<()> {
        let restarts = self.restarts(max_restarts, rng)?;

        let mut history = Vec::with_capacity(max_restarts);
        let mut best_route: Option<Route> = None;
        let mut best_distance = f64::INFINITY;

        for (idx, record) in restarts.enumerate() {
            log::debug!(
                "restart {}: distance {:.4} after {} iterations",
                idx + 1,
                record.distance,
                record.iterations
            );
            if record.distance < best_distance {
                best_distance = record.distance;
                best_route = Some(record.route.clone());
            }
            history.push(record);
        }

        log::info!(
            "completed {} restarts, best distance {:.4}",
            history.len(),
            best_distance
        );

        self.history = history;
        self.best_route = best_route;
        self.best_distance = best_distance;
        Ok(())
    }

    /// Returns a lazy stream of `max_restarts` restarts for incremental
    /// consumption. Does not touch the stored results.
    pub fn restarts<R: Rng>(&self, max_restarts: usize, rng: R) -> Result<Restarts<'_, R>> {
        if max_restarts == 0 {
            return Err(Error::invalid_argument("max_restarts must be at least 1"));
        }
        Ok(Restarts::new(&self.matrix, max_restarts, rng))
    }

    /// Restart records of the latest batch, in execution order.
    pub fn history(&self) -> &[RestartRecord] {
        &self.history
    }

    /// Shortest route of the latest batch, `None` before any run.
    pub fn best_route(&self) -> Option<&[usize]> {
        self.best_route.as_deref()
    }

    /// Length of [`best_route`](Self::best_route); infinite before any run.
    pub fn best_distance(&self) -> f64 {
        self.best_distance
    }

    pub fn distance_matrix(&self) -> &DistanceMatrix {
        &self.matrix
    }

    pub fn points(&self) -> &[Point] {
        &self.points
    }

    pub fn config(&self) -> &ClimbConfig {
        &self.config
    }

    /// Distance statistics of the latest batch, with `best` taken from
    /// the solver's global best.
    pub fn statistics(&self) -> Option<Statistics> {
        Statistics::from_history(&self.history).map(|s| Statistics {
            best: self.best_distance,
            ..s
        })
    }

    /// Best-so-far distance after each restart of the latest batch.
    pub fn convergence(&self) -> Vec<f64> {
        stats::convergence_curve(&self.history)
    }

    /// Snapshot of the latest batch, `None` before any run.
    pub fn summary(&self) -> Option<RestartSummary> {
        self.best_route.as_ref().map(|route| RestartSummary {
            best_route: route.clone(),
            best_distance: self.best_distance,
            restarts: self.history.len(),
        })
    }

    /// Labels of the points visited by `route`, in order.
    ///
    /// # Panics
    ///
    /// Panics if `route` holds an out-of-range index.
    pub fn route_labels(&self, route: &[usize]) -> Vec<&str> {
        route.iter().map(|&i| self.points[i].label()).collect()
    }

    /// Renders `route` as labels joined by [`ROUTE_SEPARATOR`].
    pub fn format_route(&self, route: &[usize]) -> String {
        self.route_labels(route).join(ROUTE_SEPARATOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset;

    #[test]
    fn test_new_rejects_too_few_points() {
        let err = TspSolver::new(vec![Point::new(0.0, 0.0, "A")]).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
        assert!(TspSolver::new(Vec::new()).is_err());
    }

    #[test]
    fn test_new_rejects_non_finite_point() {
        let points = vec![Point::new(0.0, 0.0, "A"), Point::new(f64::NAN, 1.0, "B")];
        let err = TspSolver::new(points).unwrap_err();
        assert!(matches!(err, Error::InvalidConfig(_)));
    }

    #[test]
    fn test_initial_state() {
        let solver = TspSolver::new(dataset::campuses()).expect("valid");
        assert!(solver.history().is_empty());
        assert!(solver.best_route().is_none());
        assert_eq!(solver.best_distance(), f64::INFINITY);
        assert!(solver.statistics().is_none());
        assert!(solver.summary().is_none());
        assert_eq!(solver.points().len(), 10);
        assert_eq!(solver.distance_matrix().size(), 10);
    }

    #[test]
    fn test_run_zero_restarts_is_error() {
        let mut solver = TspSolver::new(dataset::campuses()).expect("valid");
        let err = solver.run(0).unwrap_err();
        assert!(matches!(err, Error::InvalidArgument(_)));
        assert!(solver.history().is_empty());
    }

    #[test]
    fn test_run_fills_history_and_best() {
        let mut solver = TspSolver::new(dataset::campuses()).expect("valid").with_seed(7);
        solver.run(15).expect("run");

        assert_eq!(solver.history().len(), 15);
        let min = solver
            .history()
            .iter()
            .map(|r| r.distance)
            .fold(f64::INFINITY, f64::min);
        assert_eq!(solver.best_distance(), min);

        let best = solver.best_route().expect("best route");
        assert_eq!(solver.distance_matrix().tour_length(best), solver.best_distance());
    }

    #[test]
    fn test_best_is_first_minimal_record() {
        let mut solver = TspSolver::new(dataset::unit_square()).expect("valid").with_seed(3);
        solver.run(10).expect("run");
        // every restart reaches the perimeter; strict update keeps the first
        assert_eq!(solver.best_route(), Some(solver.history()[0].route.as_slice()));
    }

    #[test]
    fn test_rerun_replaces_results() {
        let mut solver = TspSolver::new(dataset::campuses()).expect("valid");
        solver.run(12).expect("run");
        assert_eq!(solver.history().len(), 12);
        solver.run(3).expect("run");
        assert_eq!(solver.history().len(), 3);
        assert_eq!(solver.summary().expect("summary").restarts, 3);
    }

    #[test]
    fn test_seeded_runs_are_identical() {
        let mut solver = TspSolver::new(dataset::campuses()).expect("valid").with_seed(99);
        solver.run(8).expect("run");
        let first = solver.history().to_vec();
        solver.run(8).expect("run");
        assert_eq!(solver.history(), first.as_slice());
    }

    #[test]
    fn test_run_default_uses_config() {
        let config = ClimbConfig::default().with_max_restarts(6).with_seed(1);
        let mut solver = TspSolver::new(dataset::campuses())
            .expect("valid")
            .with_config(config)
            .expect("valid config");
        solver.run_default().expect("run");
        assert_eq!(solver.history().len(), 6);
    }

    #[test]
    fn test_with_config_rejects_invalid() {
        let config = ClimbConfig::default().with_max_restarts(0);
        let result = TspSolver::new(dataset::campuses())
            .expect("valid")
            .with_config(config);
        assert!(matches!(result, Err(Error::InvalidConfig(_))));
    }

    #[test]
    fn test_statistics_uses_global_best() {
        let mut solver = TspSolver::new(dataset::campuses()).expect("valid").with_seed(5);
        solver.run(10).expect("run");
        let stats = solver.statistics().expect("stats");
        assert_eq!(stats.count, 10);
        assert_eq!(stats.best, solver.best_distance());
        assert!(stats.mean >= stats.best);
    }

    #[test]
    fn test_convergence_tracks_best() {
        let mut solver = TspSolver::new(dataset::campuses()).expect("valid").with_seed(11);
        solver.run(20).expect("run");
        let curve = solver.convergence();
        assert_eq!(curve.len(), 20);
        assert_eq!(curve.last().copied(), Some(solver.best_distance()));
        for w in curve.windows(2) {
            assert!(w[1] <= w[0]);
        }
    }

    #[test]
    fn test_restarts_stream_matches_run() {
        let mut solver = TspSolver::new(dataset::campuses()).expect("valid");
        let streamed: Vec<_> = solver
            .restarts(5, StdRng::seed_from_u64(21))
            .expect("stream")
            .collect();
        solver
            .run_with_rng(5, &mut StdRng::seed_from_u64(21))
            .expect("run");
        assert_eq!(solver.history(), streamed.as_slice());
    }

    #[test]
    fn test_restarts_zero_is_error() {
        let solver = TspSolver::new(dataset::campuses()).expect("valid");
        let result = solver.restarts(0, StdRng::seed_from_u64(1));
        assert!(matches!(result, Err(Error::InvalidArgument(_))));
    }

    #[test]
    fn test_format_route() {
        let solver = TspSolver::new(dataset::unit_square()).expect("valid");
        assert_eq!(solver.route_labels(&[2, 0, 1]), vec!["C", "A", "B"]);
        assert_eq!(solver.format_route(&[0, 1, 2, 3]), "A → B → C → D");
    }
}
