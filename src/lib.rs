//! Workforce procurement by GRASP construction and local search.
//!
//! Given providers that each offer a pool of workers for a one-time contract
//! cost plus a per-worker rate, hire at most one provider per region so that
//! the required workforce is met at minimum cost under a progressive,
//! batch-size dependent tax.
//!
//! - **Model** ([`model`]): providers, instances, selections and solutions.
//! - **Cost** ([`cost`]): tax brackets, selection cost and total cost.
//! - **GRASP** ([`grasp`]): greedy or randomized-restricted construction with
//!   rollback on dead ends, plus multi-start.
//! - **Local search** ([`local_search`]): time-boxed first-improvement
//!   substitution of hired providers.
//! - **Solver** ([`solver`]): runs both phases and reports timings.
//! - **Format / generator** ([`format`], [`generator`]): the `key=value;`
//!   instance format and seeded random instances.
//!
//! The solver is a heuristic; it does not guarantee optimality.
//!
//! # Example
//!
//! ```
//! use u_workforce::generator::{GeneratorConfig, InstanceGenerator};
//! use u_workforce::grasp::GraspConfig;
//! use u_workforce::local_search::LocalSearchConfig;
//! use u_workforce::solver::{Solver, SolverConfig};
//!
//! let instance = InstanceGenerator::new(GeneratorConfig::default().with_providers(50).with_seed(1))
//!     .generate()
//!     .unwrap();
//! let config = SolverConfig::default()
//!     .with_grasp(GraspConfig::randomized(0.9).with_seed(1))
//!     .with_local_search(LocalSearchConfig::default().with_time_limit_ms(10_000));
//!
//! let report = Solver::solve(&instance, &config).unwrap();
//! assert!(report.cost <= report.construction_cost);
//! ```

pub mod context;
pub mod cost;
pub mod error;
pub mod format;
pub mod generator;
pub mod grasp;
pub mod local_search;
pub mod model;
pub mod solver;

pub use context::SolverContext;
pub use error::{FormatError, InstanceError, SolveError};
