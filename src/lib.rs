//! Small-instance Traveling Salesman solver.
//!
//! Finds short closed tours over a fixed set of labelled points using
//! steepest-descent hill climbing on the 2-swap neighborhood, repeated
//! from independent random permutations (random restarts).
//!
//! - **Distance model** ([`distance`]): labelled points, the symmetric
//!   Euclidean distance matrix and closed-tour length.
//! - **Hill climbing** ([`climb`]): one run to a local optimum, plus a
//!   lazy stream of independent restarts.
//! - **Solver** ([`TspSolver`]): owns a problem instance and the results
//!   of the latest restart batch (history, best route, statistics).
//! - **Statistics** ([`stats`]): mean and sample deviation of restart
//!   distances, convergence curve and histogram.
//!
//! # Architecture
//!
//! The crate has no presentation layer. Charts, tables and animated
//! replays consume the read accessors on [`TspSolver`] or pull records
//! one at a time from [`climb::Restarts`].

pub mod climb;
pub mod dataset;
pub mod distance;
mod error;
pub mod solver;
pub mod stats;

pub use error::{Error, Result};
pub use solver::TspSolver;
