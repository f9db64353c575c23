//! Problem and solution data model.
//!
//! An [`Instance`] is the read-only problem definition: the required
//! workforce, the progressive [`TaxBrackets`], and the ordered set of
//! [`Provider`]s. A [`Solution`] is an ordered sequence of [`Selection`]s,
//! each hiring a regular and an additional batch from one provider.

mod instance;
mod provider;
mod solution;

pub use instance::{Instance, InstanceBuilder, TaxBrackets};
pub use provider::{Provider, ProviderId, RegionId};
pub use solution::{Selection, Solution};
