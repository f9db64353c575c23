//! Construction followed by local search.

use std::time::{Duration, Instant};

use log::info;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::SolverConfig;
use crate::error::SolveError;
use crate::grasp::{Construction, GraspConfig, GraspRunner};
use crate::local_search::{LocalSearchConfig, LocalSearchResult, LocalSearchRunner};
use crate::model::{Instance, Solution};

/// Outcome of [`Solver::solve`].
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolveReport {
    /// Final selections.
    pub solution: Solution,
    /// Total cost of `solution`.
    pub cost: f64,
    /// Cost of the constructed solution before local search.
    pub construction_cost: f64,
    /// Rollback steps taken during construction.
    pub rollbacks: usize,
    /// Substitutions accepted by local search.
    pub accepted_swaps: usize,
    /// Whether local search ran out of time.
    pub timed_out: bool,
    /// Wall-clock time spent constructing.
    pub construction_time: Duration,
    /// Wall-clock time of the whole run.
    pub total_time: Duration,
}

/// Stateful driver for one instance.
///
/// Holds the current base solution so that local search can only run once a
/// construction exists.
///
/// # Examples
///
/// ```
/// use u_workforce::grasp::GraspConfig;
/// use u_workforce::local_search::LocalSearchConfig;
/// use u_workforce::model::{Instance, TaxBrackets};
/// use u_workforce::solver::Solver;
/// use u_workforce::SolveError;
///
/// let instance = Instance::builder(20, TaxBrackets::new(10.0, 20.0, 30.0).unwrap())
///     .provider(10.0, 1.0, 10, 1)
///     .provider(0.0, 0.0, 20, 2)
///     .build()
///     .unwrap();
///
/// let mut solver = Solver::new(&instance);
/// assert_eq!(
///     solver.improve(&LocalSearchConfig::default()).unwrap_err(),
///     SolveError::NoBaseSolution
/// );
///
/// solver.construct(&GraspConfig::greedy()).unwrap();
/// let improved = solver.improve(&LocalSearchConfig::default()).unwrap();
/// assert!(improved.cost <= improved.initial_cost);
/// assert_eq!(solver.cost(), Some(improved.cost));
/// ```
pub struct Solver<'a> {
    instance: &'a Instance,
    base: Option<Construction>,
}

impl<'a> Solver<'a> {
    /// Creates a solver without a base solution.
    pub fn new(instance: &'a Instance) -> Self {
        Self {
            instance,
            base: None,
        }
    }

    /// The instance being solved.
    pub fn instance(&self) -> &'a Instance {
        self.instance
    }

    /// Current base solution, if any.
    pub fn current(&self) -> Option<&Construction> {
        self.base.as_ref()
    }

    /// Cost of the current base solution, if any.
    pub fn cost(&self) -> Option<f64> {
        self.base.as_ref().map(|b| b.cost)
    }

    /// Builds a new base solution, replacing any previous one.
    pub fn construct(&mut self, config: &GraspConfig) -> Result<&Construction, SolveError> {
        let construction = GraspRunner::run(self.instance, config)?;
        Ok(self.base.insert(construction))
    }

    /// Improves the current base solution in place.
    ///
    /// Fails with [`SolveError::NoBaseSolution`] if nothing was constructed.
    pub fn improve(&mut self, config: &LocalSearchConfig) -> Result<LocalSearchResult, SolveError> {
        config.validate().map_err(SolveError::InvalidConfig)?;
        let base = self.base.take().ok_or(SolveError::NoBaseSolution)?;
        let rollbacks = base.rollbacks;

        let result = LocalSearchRunner::run(self.instance, base, config)?;
        self.base = Some(Construction {
            solution: result.solution.clone(),
            context: result.context.clone(),
            cost: result.cost,
            rollbacks,
        });
        Ok(result)
    }

    /// Consumes the solver and returns the current base solution.
    pub fn into_construction(self) -> Option<Construction> {
        self.base
    }

    /// Constructs (possibly from several starts) and then improves.
    pub fn solve(instance: &Instance, config: &SolverConfig) -> Result<SolveReport, SolveError> {
        config.validate().map_err(SolveError::InvalidConfig)?;
        let start = Instant::now();

        let construction = if config.starts > 1 {
            GraspRunner::multi_start(instance, &config.grasp, config.starts)?
        } else {
            GraspRunner::run(instance, &config.grasp)?
        };
        let construction_time = start.elapsed();
        let construction_cost = construction.cost;
        let rollbacks = construction.rollbacks;

        let report = match &config.local_search {
            Some(ls) => {
                let result = LocalSearchRunner::run(instance, construction, ls)?;
                SolveReport {
                    solution: result.solution,
                    cost: result.cost,
                    construction_cost,
                    rollbacks,
                    accepted_swaps: result.accepted_swaps,
                    timed_out: result.timed_out,
                    construction_time,
                    total_time: start.elapsed(),
                }
            }
            None => SolveReport {
                solution: construction.solution,
                cost: construction_cost,
                construction_cost,
                rollbacks,
                accepted_swaps: 0,
                timed_out: false,
                construction_time,
                total_time: start.elapsed(),
            },
        };

        info!(
            "solved in {:?}: cost {} (construction {construction_cost})",
            report.total_time, report.cost
        );
        Ok(report)
    }
}
