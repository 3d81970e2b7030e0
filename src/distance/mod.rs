//! Distance model.
//!
//! Labelled points, the precomputed symmetric Euclidean distance matrix,
//! and the cost of a closed tour over point indices.

mod matrix;
mod point;

pub use matrix::{is_permutation, DistanceMatrix};
pub use point::Point;
