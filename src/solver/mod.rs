//! End-to-end driver.
//!
//! [`Solver`] keeps the current base solution of one instance and enforces
//! that local search only runs after construction. [`Solver::solve`] runs
//! both phases in one call and times them.

mod config;
mod runner;

pub use config::SolverConfig;
pub use runner::{SolveReport, Solver};
