//! Greedy Randomized Adaptive Search Procedure (GRASP) construction.
//!
//! Builds an initial feasible selection by repeatedly scoring the feasible
//! providers and hiring either the best one (greedy) or a uniformly drawn
//! member of the restricted candidate list. Dead ends, where no unused
//! provider fits the remaining demand, are recovered by releasing the
//! additional batches of earlier selections one at a time.
//!
//! # References
//!
//! - Feo, T. A. & Resende, M. G. C. (1995). "Greedy Randomized Adaptive
//!   Search Procedures", *Journal of Global Optimization* 6, 109-133.

mod config;
mod rcl;
mod runner;

pub use config::{GraspConfig, Strategy};
pub use rcl::{restricted_choice, restricted_len, CandidatePicker, FixedPicker, RngPicker};
pub use runner::{choose, feasible_candidates, fits_remaining, score, Candidate, Construction, GraspRunner};

pub(crate) use runner::create_rng;
