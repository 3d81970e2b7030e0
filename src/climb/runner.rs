//! Steepest-descent hill climbing over the 2-swap neighborhood.
//!
//! # Algorithm
//!
//! 1. Start from the given route, `current = tour_length(route)`
//! 2. At each step:
//!    a. Evaluate every neighbor obtained by exchanging positions `a < b`,
//!    with `1 <= a`, in lexicographic `(a, b)` order
//!    b. Keep the first neighbor of minimum length
//!    c. Accept it only if strictly shorter than `current`
//! 3. Stop when no neighbor is strictly shorter
//!
//! Position 0 never moves. The tour is cyclic, so fixing its start
//! loses no solutions.

use crate::distance::DistanceMatrix;

use super::types::{RestartRecord, Route};

/// Result of a single hill-climbing run.
#[derive(Debug, Clone)]
pub struct ClimbResult {
    /// Converged route, its length and the number of accepted moves.
    pub record: RestartRecord,
    /// Tour length of the starting route followed by the length after
    /// each accepted move. Strictly decreasing.
    pub cost_history: Vec<f64>,
}

/// A 2-swap move between two route positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapMove {
    pub a: usize,
    pub b: usize,
}

/// Hill-climbing runner.
pub struct HillClimber;

impl HillClimber {
    /// Climbs from `initial` to a 2-swap local optimum.
    ///
    /// `initial` must be a permutation of `0..matrix.size()`. Routes with
    /// two or fewer points have an empty neighborhood and return
    /// immediately with zero iterations.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_tsp_climb::climb::HillClimber;
    /// use u_tsp_climb::distance::{DistanceMatrix, Point};
    ///
    /// let points = vec![
    ///     Point::new(0.0, 0.0, "A"),
    ///     Point::new(0.0, 1.0, "B"),
    ///     Point::new(1.0, 1.0, "C"),
    ///     Point::new(1.0, 0.0, "D"),
    /// ];
    /// let matrix = DistanceMatrix::from_points(&points);
    /// let result = HillClimber::climb(&matrix, vec![0, 2, 1, 3]);
    /// assert!((result.record.distance - 4.0).abs() < 1e-10);
    /// assert_eq!(result.record.iterations, 1);
    /// ```
    pub fn climb(matrix: &DistanceMatrix, initial: Route) -> ClimbResult {
        let mut current = initial;
        let mut current_distance = matrix.tour_length(&current);
        let mut cost_history = vec![current_distance];
        let mut iterations = 0;

        while let Some((mv, distance)) = Self::best_neighbor(matrix, &mut current) {
            if distance >= current_distance {
                break;
            }
            current.swap(mv.a, mv.b);
            current_distance = distance;
            iterations += 1;
            cost_history.push(current_distance);
            log::trace!(
                "step {iterations}: swap({}, {}) -> {current_distance:.6}",
                mv.a,
                mv.b
            );
        }

        ClimbResult {
            record: RestartRecord {
                route: current,
                distance: current_distance,
                iterations,
            },
            cost_history,
        }
    }

    /// Finds the shortest 2-swap neighbor of `route`.
    ///
    /// Ties resolve to the lowest `(a, b)`. Returns `None` when the
    /// neighborhood is empty. `route` is swapped in place for evaluation
    /// and left unchanged on return.
    pub fn best_neighbor(matrix: &DistanceMatrix, route: &mut [usize]) -> Option<(SwapMove, f64)> {
        let n = route.len();
        let mut best: Option<(SwapMove, f64)> = None;

        for mv in Self::moves(n) {
            route.swap(mv.a, mv.b);
            let d = matrix.tour_length(route);
            route.swap(mv.a, mv.b);

            let improves = match best {
                Some((_, best_d)) => d < best_d,
                None => true,
            };
            if improves {
                best = Some((mv, d));
            }
        }

        best
    }

    /// Enumerates the 2-swap neighborhood of a route of length `n` in
    /// evaluation order.
    pub fn moves(n: usize) -> impl Iterator<Item = SwapMove> {
        (1..n).flat_map(move |a| ((a + 1)..n).map(move |b| SwapMove { a, b }))
    }
}
