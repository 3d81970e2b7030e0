//! Dense distance matrix and tour cost.

use super::point::Point;

/// A dense n×n Euclidean distance matrix stored in row-major order.
///
/// Built once from a point list and immutable afterwards. Entries are
/// computed on the upper triangle and mirrored, so `get(i, j)` and
/// `get(j, i)` are bitwise equal.
///
/// # Examples
///
/// ```
/// use u_tsp_climb::distance::{DistanceMatrix, Point};
///
/// let points = vec![
///     Point::new(0.0, 0.0, "A"),
///     Point::new(3.0, 4.0, "B"),
///     Point::new(6.0, 8.0, "C"),
/// ];
/// let dm = DistanceMatrix::from_points(&points);
/// assert!((dm.get(0, 1) - 5.0).abs() < 1e-10);
/// assert!((dm.tour_length(&[0, 1, 2]) - 20.0).abs() < 1e-10);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    data: Vec<f64>,
    size: usize,
}

impl DistanceMatrix {
    /// Computes the Euclidean distance matrix of `points`.
    pub fn from_points(points: &[Point]) -> Self {
        let n = points.len();
        let mut data = vec![0.0; n * n];
        for i in 0..n {
            for j in (i + 1)..n {
                let d = points[i].distance_to(&points[j]);
                data[i * n + j] = d;
                data[j * n + i] = d;
            }
        }
        Self { data, size: n }
    }

    /// Returns the distance between point `i` and point `j`.
    ///
    /// # Panics
    ///
    /// Panics if either index is out of bounds.
    #[inline]
    pub fn get(&self, i: usize, j: usize) -> f64 {
        assert!(
            i < self.size && j < self.size,
            "distance index ({i}, {j}) out of bounds for {} points",
            self.size
        );
        self.data[i * self.size + j]
    }

    /// Returns row `i` (distances from point `i` to every point).
    ///
    /// # Panics
    ///
    /// Panics if `i` is out of bounds.
    pub fn row(&self, i: usize) -> &[f64] {
        assert!(
            i < self.size,
            "row index {i} out of bounds for {} points",
            self.size
        );
        &self.data[i * self.size..(i + 1) * self.size]
    }

    /// Number of points covered by this matrix.
    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns `true` if the matrix is symmetric within the given tolerance.
    pub fn is_symmetric(&self, tol: f64) -> bool {
        for i in 0..self.size {
            for j in (i + 1)..self.size {
                if (self.get(i, j) - self.get(j, i)).abs() > tol {
                    return false;
                }
            }
        }
        true
    }

    /// Length of the closed tour visiting `route` in order and returning
    /// from the last index to the first.
    ///
    /// The route is expected to be a permutation of `0..size()`; see
    /// [`is_permutation`].
    pub fn tour_length(&self, route: &[usize]) -> f64 {
        let n = route.len();
        (0..n).map(|k| self.get(route[k], route[(k + 1) % n])).sum()
    }
}

/// Returns `true` if `route` contains every index in `0..n` exactly once.
pub fn is_permutation(route: &[usize], n: usize) -> bool {
    if route.len() != n {
        return false;
    }
    let mut seen = vec![false; n];
    for &idx in route {
        if idx >= n || seen[idx] {
            return false;
        }
        seen[idx] = true;
    }
    true
}
