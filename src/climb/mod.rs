//! Random-restart hill climbing.
//!
//! A single hill-climbing run performs steepest descent over the 2-swap
//! neighborhood of a closed tour and stops at the first local optimum.
//! Restarts repeat the run from independent uniformly random
//! permutations to escape poor local optima.
//!
//! # Key Types
//!
//! - [`HillClimber`]: one run to convergence
//! - [`Restarts`]: lazy, finite stream of independent runs
//! - [`ClimbConfig`]: restart count and seeding
//! - [`RestartRecord`]: outcome of one run
//!
//! # References
//!
//! - Russell, S. & Norvig, P. (2010). *Artificial Intelligence: A Modern
//!   Approach*, 3rd ed., §4.1.1 "Hill-climbing search".

mod config;
mod restarts;
mod runner;
mod types;

pub use config::ClimbConfig;
pub use restarts::Restarts;
pub use runner::{ClimbResult, HillClimber, SwapMove};
pub use types::{RestartRecord, RestartSummary, Route};
