//! Construction loop.
//!
//! # Algorithm
//!
//! While the hired workforce is below the requirement:
//!
//! 1. Filter providers whose id and region are unused and whose half
//!    capacity does not exceed the remaining demand
//! 2. If none qualify, zero the additional batch at the rollback cursor and
//!    move the cursor one selection back
//! 3. Score each candidate and choose one (greedy or restricted random)
//! 4. Size the selection against the remaining demand and commit it

use log::{debug, info, warn};
use rand::rngs::StdRng;
use rand::SeedableRng;
#[cfg(feature = "parallel")]
use rayon::prelude::*;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::config::{GraspConfig, Strategy};
use super::rcl::{restricted_choice, CandidatePicker, RngPicker};
use crate::context::SolverContext;
use crate::cost::total_cost;
use crate::error::SolveError;
use crate::model::{Instance, Provider, ProviderId, Selection, Solution};

/// A feasible provider and its construction score.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Candidate {
    /// Candidate provider.
    pub provider: ProviderId,
    /// Lower is better.
    pub score: f64,
}

/// Result of a construction run.
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Construction {
    /// Feasible selections covering the required workforce.
    pub solution: Solution,
    /// Run state after the last commit.
    pub context: SolverContext,
    /// Total cost of `solution`.
    pub cost: f64,
    /// Number of rollback steps taken on dead ends.
    pub rollbacks: usize,
}

/// Construction score of a provider.
///
/// Candidates are always unused when scored, so the contract cost is always
/// part of the score.
pub fn score(instance: &Instance, provider: &Provider) -> f64 {
    provider.contract_cost() + provider.worker_rate() + instance.tax().tax(provider.capacity())
}

/// Returns `true` if hiring `provider` cannot overshoot `remaining` by more
/// than its own half capacity.
pub fn fits_remaining(provider: &Provider, remaining: u32) -> bool {
    provider.capacity() <= remaining || provider.half_capacity() <= remaining
}

/// Feasible candidates in provider order.
pub fn feasible_candidates(instance: &Instance, context: &SolverContext) -> Vec<Candidate> {
    let remaining = context.remaining(instance);
    instance
        .providers()
        .iter()
        .filter(|p| context.is_available(p) && fits_remaining(p, remaining))
        .map(|p| Candidate {
            provider: p.id(),
            score: score(instance, p),
        })
        .collect()
}

/// Chooses one of `candidates` according to `strategy`.
///
/// Returns `None` if `candidates` is empty.
pub fn choose<P>(candidates: &[Candidate], strategy: Strategy, picker: &mut P) -> Option<ProviderId>
where
    P: CandidatePicker + ?Sized,
{
    match strategy {
        Strategy::Greedy => {
            let mut best: Option<&Candidate> = None;
            for c in candidates {
                if best.map_or(true, |b| c.score < b.score) {
                    best = Some(c);
                }
            }
            best.map(|c| c.provider)
        }
        Strategy::Randomized { alpha } => {
            let mut sorted = candidates.to_vec();
            sorted.sort_by(|a, b| a.score.total_cmp(&b.score));
            let scores: Vec<f64> = sorted.iter().map(|c| c.score).collect();
            restricted_choice(&scores, alpha, picker).map(|i| sorted[i].provider)
        }
    }
}

/// Builds initial solutions.
pub struct GraspRunner;

impl GraspRunner {
    /// Runs one construction.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_workforce::grasp::{GraspConfig, GraspRunner};
    /// use u_workforce::model::{Instance, TaxBrackets};
    ///
    /// let instance = Instance::builder(14, TaxBrackets::new(10.0, 20.0, 30.0).unwrap())
    ///     .provider(100.0, 5.0, 10, 1)
    ///     .provider(100.0, 5.0, 20, 2)
    ///     .provider(100.0, 5.0, 40, 3)
    ///     .build()
    ///     .unwrap();
    ///
    /// let result = GraspRunner::run(&instance, &GraspConfig::greedy()).unwrap();
    /// assert_eq!(result.context.hired(), 14);
    /// assert_eq!(result.cost, 440.0);
    /// ```
    pub fn run(instance: &Instance, config: &GraspConfig) -> Result<Construction, SolveError> {
        config.validate().map_err(SolveError::InvalidConfig)?;
        let mut picker = RngPicker(create_rng(config.seed));
        Self::run_with_picker(instance, config.strategy, &mut picker)
    }

    /// Runs one construction drawing restricted-list choices from `picker`.
    pub fn run_with_picker<P>(
        instance: &Instance,
        strategy: Strategy,
        picker: &mut P,
    ) -> Result<Construction, SolveError>
    where
        P: CandidatePicker + ?Sized,
    {
        let required = instance.required_workforce();
        let mut solution = Solution::new();
        let mut context = SolverContext::new();
        let mut rollbacks = 0usize;

        if instance.providers().is_empty() {
            if required > 0 {
                warn!("instance has no providers, {required} required workers stay unhired");
            }
            return Ok(Construction {
                solution,
                context,
                cost: 0.0,
                rollbacks,
            });
        }

        // Selections before this position may still be rolled back.
        let mut cursor = 0usize;

        while context.hired() < required {
            let remaining = context.remaining(instance);
            let candidates = feasible_candidates(instance, &context);

            let Some(chosen) = choose(&candidates, strategy, picker) else {
                let Some(index) = cursor.checked_sub(1) else {
                    return Err(SolveError::Infeasible {
                        hired: context.hired(),
                        required,
                    });
                };
                let released = solution
                    .get_mut(index)
                    .map(|s| std::mem::take(&mut s.additional))
                    .unwrap_or(0);
                context.unhire(released);
                cursor = index;
                rollbacks += 1;
                debug!(
                    "dead end at {remaining} remaining, released {released} additional workers from selection {index}"
                );
                continue;
            };

            let selection = Selection::sized(instance.provider(chosen), remaining);
            context.engage(instance, &selection);
            solution.push(selection);
            cursor = solution.len();
        }

        let cost = total_cost(instance, solution.selections());
        info!(
            "construction finished: {} selections, {} workers, cost {cost}",
            solution.len(),
            context.hired()
        );

        Ok(Construction {
            solution,
            context,
            cost,
            rollbacks,
        })
    }

    /// Runs `starts` independent constructions and keeps the cheapest.
    ///
    /// Start `i` is seeded with `seed + i`. With the `parallel` feature the
    /// starts run on the rayon thread pool.
    pub fn multi_start(
        instance: &Instance,
        config: &GraspConfig,
        starts: usize,
    ) -> Result<Construction, SolveError> {
        config.validate().map_err(SolveError::InvalidConfig)?;
        if starts == 0 {
            return Err(SolveError::InvalidConfig("starts must be at least 1".into()));
        }

        let base = config.seed.unwrap_or_else(rand::random);
        let run_start = |i: usize| {
            let start_config = config.clone().with_seed(base.wrapping_add(i as u64));
            Self::run(instance, &start_config)
        };

        #[cfg(feature = "parallel")]
        let results: Vec<_> = (0..starts).into_par_iter().map(run_start).collect();
        #[cfg(not(feature = "parallel"))]
        let results: Vec<_> = (0..starts).map(run_start).collect();

        let mut best: Option<Construction> = None;
        let mut first_err = None;
        for result in results {
            match result {
                Ok(c) => {
                    if best.as_ref().map_or(true, |b| c.cost < b.cost) {
                        best = Some(c);
                    }
                }
                Err(e) => {
                    first_err.get_or_insert(e);
                }
            }
        }

        match (best, first_err) {
            (Some(c), _) => Ok(c),
            (None, Some(e)) => Err(e),
            (None, None) => Err(SolveError::InvalidConfig("starts must be at least 1".into())),
        }
    }
}

pub(crate) fn create_rng(seed: Option<u64>) -> StdRng {
    StdRng::seed_from_u64(seed.unwrap_or_else(rand::random))
}
