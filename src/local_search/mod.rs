//! Time-boxed local search by provider substitution.
//!
//! Starting from a constructed solution, each selection is tentatively
//! replaced by an unused provider from an unused region that can cover the
//! same number of workers. The first replacement that lowers the total cost
//! is applied and the scan restarts.

mod config;
mod runner;
mod swap;

pub use config::LocalSearchConfig;
pub use runner::{LocalSearchResult, LocalSearchRunner};
pub use swap::{apply_swap, can_substitute, evaluate_swap, SwapMove};
