//! Explicit run state shared by construction and local search.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::model::{Instance, Provider, ProviderId, RegionId, Selection};

/// Bookkeeping for one solver run.
///
/// Tracks the committed worker count and which providers and regions are
/// already engaged. The context is owned by whichever phase is running and
/// handed over by value to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SolverContext {
    hired: u32,
    used_providers: HashSet<ProviderId>,
    used_regions: HashSet<RegionId>,
}

impl SolverContext {
    /// Creates an empty context.
    pub fn new() -> Self {
        Self::default()
    }

    /// Workers committed so far.
    pub fn hired(&self) -> u32 {
        self.hired
    }

    /// Demand not yet covered.
    pub fn remaining(&self, instance: &Instance) -> u32 {
        instance.required_workforce().saturating_sub(self.hired)
    }

    /// Returns `true` if neither the provider nor its region is engaged.
    pub fn is_available(&self, provider: &Provider) -> bool {
        !self.used_providers.contains(&provider.id())
            && !self.used_regions.contains(&provider.region())
    }

    /// Returns `true` if the provider is engaged.
    pub fn is_used(&self, id: ProviderId) -> bool {
        self.used_providers.contains(&id)
    }

    /// Engaged providers.
    pub fn used_providers(&self) -> &HashSet<ProviderId> {
        &self.used_providers
    }

    /// Engaged regions.
    pub fn used_regions(&self) -> &HashSet<RegionId> {
        &self.used_regions
    }

    /// Records a newly committed selection.
    pub(crate) fn engage(&mut self, instance: &Instance, selection: &Selection) {
        let provider = instance.provider(selection.provider);
        self.hired += selection.supplied();
        self.used_providers.insert(provider.id());
        self.used_regions.insert(provider.region());
    }

    /// Forgets a selection that was taken out of the solution.
    pub(crate) fn release(&mut self, instance: &Instance, selection: &Selection) {
        let provider = instance.provider(selection.provider);
        self.hired -= selection.supplied();
        self.used_providers.remove(&provider.id());
        self.used_regions.remove(&provider.region());
    }

    /// Un-hires `workers` without releasing any provider.
    pub(crate) fn unhire(&mut self, workers: u32) {
        self.hired -= workers;
    }
}
