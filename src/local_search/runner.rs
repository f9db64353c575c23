//! First-improvement substitution search.
//!
//! # Algorithm
//!
//! 1. For each selection in order, scan the providers whose id and region
//!    are unused
//! 2. For each compatible candidate, evaluate the substituted solution
//! 3. Apply the first move that strictly lowers the total cost and restart
//!    the scan from the first selection
//! 4. Stop when a full pass finds no improving move or the time budget runs
//!    out

use std::time::{Duration, Instant};

use log::{debug, info};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::LocalSearchConfig;
use super::swap::{apply_swap, evaluate_swap, SwapMove};
use crate::context::SolverContext;
use crate::error::SolveError;
use crate::grasp::Construction;
use crate::model::{Instance, Solution};

/// Minimum cost decrease for a move to count as an improvement.
const IMPROVEMENT_EPSILON: f64 = 1e-9;

/// Result of a local search run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct LocalSearchResult {
    /// Improved solution.
    pub solution: Solution,
    /// Run state matching `solution`.
    pub context: SolverContext,
    /// Total cost of `solution`.
    pub cost: f64,
    /// Cost of the starting solution.
    pub initial_cost: f64,
    /// Passes started, including the final one without improvement.
    pub passes: usize,
    /// Number of accepted substitutions.
    pub accepted_swaps: usize,
    /// Whether the time budget ended the search.
    pub timed_out: bool,
    /// Cost after each accepted substitution, starting with the initial cost.
    pub cost_history: Vec<f64>,
}

impl LocalSearchResult {
    /// Reuses the result as the starting point of another search.
    pub fn into_construction(self) -> Construction {
        Construction {
            solution: self.solution,
            context: self.context,
            cost: self.cost,
            rollbacks: 0,
        }
    }
}

enum ScanOutcome {
    Improved(SwapMove),
    LocalOptimum,
    OutOfTime,
}

/// Improves constructed solutions.
pub struct LocalSearchRunner;

impl LocalSearchRunner {
    /// Runs local search from `base`.
    ///
    /// The returned solution is never worse than `base`, and every accepted
    /// move keeps the supply unchanged.
    pub fn run(
        instance: &Instance,
        base: Construction,
        config: &LocalSearchConfig,
    ) -> Result<LocalSearchResult, SolveError> {
        config.validate().map_err(SolveError::InvalidConfig)?;

        let start = Instant::now();
        let budget = config.time_limit();

        let Construction {
            mut solution,
            mut context,
            cost: initial_cost,
            ..
        } = base;
        let mut cost = initial_cost;
        let mut cost_history = vec![cost];
        let mut passes = 0usize;
        let mut timed_out = false;

        loop {
            if start.elapsed() > budget {
                timed_out = true;
                break;
            }
            passes += 1;

            match first_improvement(instance, &solution, &context, cost, start, budget) {
                ScanOutcome::Improved(mv) => {
                    debug!(
                        "replacing {} with {}: cost {cost} -> {}",
                        solution.selections()[mv.index].provider,
                        mv.replacement.provider,
                        mv.cost
                    );
                    apply_swap(instance, &mut solution, &mut context, &mv);
                    cost = mv.cost;
                    cost_history.push(cost);
                }
                ScanOutcome::LocalOptimum => break,
                ScanOutcome::OutOfTime => {
                    timed_out = true;
                    break;
                }
            }
        }

        if timed_out {
            info!("local search budget of {budget:?} exhausted");
        }
        info!(
            "local search finished: {passes} passes, {} swaps, cost {initial_cost} -> {cost}",
            cost_history.len() - 1
        );

        Ok(LocalSearchResult {
            solution,
            context,
            cost,
            initial_cost,
            passes,
            accepted_swaps: cost_history.len() - 1,
            timed_out,
            cost_history,
        })
    }
}

fn first_improvement(
    instance: &Instance,
    solution: &Solution,
    context: &SolverContext,
    cost: f64,
    start: Instant,
    budget: Duration,
) -> ScanOutcome {
    for index in 0..solution.len() {
        if start.elapsed() > budget {
            return ScanOutcome::OutOfTime;
        }
        for candidate in instance.providers() {
            if !context.is_available(candidate) {
                continue;
            }
            let Some(mv) = evaluate_swap(instance, solution, context, index, candidate) else {
                continue;
            };
            if mv.cost < cost - IMPROVEMENT_EPSILON {
                return ScanOutcome::Improved(mv);
            }
        }
    }
    ScanOutcome::LocalOptimum
}
