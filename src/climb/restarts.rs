//! Lazy stream of independent random restarts.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::distance::DistanceMatrix;

use super::runner::HillClimber;
use super::types::{RestartRecord, Route};

/// A finite, lazily evaluated sequence of hill-climbing restarts.
///
/// Each call to [`Iterator::next`] shuffles a fresh route, climbs it to
/// convergence and yields the resulting [`RestartRecord`]. Nothing is
/// computed ahead of the consumer, so a display layer can pace the
/// search one restart at a time.
///
/// # Examples
///
/// ```
/// use rand::rngs::StdRng;
/// use rand::SeedableRng;
/// use u_tsp_climb::climb::Restarts;
/// use u_tsp_climb::dataset;
/// use u_tsp_climb::distance::DistanceMatrix;
///
/// let matrix = DistanceMatrix::from_points(&dataset::unit_square());
/// let restarts = Restarts::new(&matrix, 3, StdRng::seed_from_u64(1));
/// assert_eq!(restarts.len(), 3);
/// for record in restarts {
///     assert!((record.distance - 4.0).abs() < 1e-10);
/// }
/// ```
pub struct Restarts<'a, R: Rng> {
    matrix: &'a DistanceMatrix,
    rng: R,
    remaining: usize,
}

impl<'a, R: Rng> Restarts<'a, R> {
    /// Creates a stream of `count` restarts over `matrix`.
    pub fn new(matrix: &'a DistanceMatrix, count: usize, rng: R) -> Self {
        Self {
            matrix,
            rng,
            remaining: count,
        }
    }

    /// Draws a uniformly random permutation of all point indices.
    fn random_route(&mut self) -> Route {
        let mut route: Route = (0..self.matrix.size()).collect();
        route.shuffle(&mut self.rng);
        route
    }
}

impl<R: Rng> Iterator for Restarts<'_, R> {
    type Item = RestartRecord;

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        self.remaining -= 1;

        let initial = self.random_route();
        Some(HillClimber::climb(self.matrix, initial).record)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl<R: Rng> ExactSizeIterator for Restarts<'_, R> {}
