//! Providers: hireable worker pools.

use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Stable provider identifier, equal to the provider's position in its
/// [`Instance`](super::Instance).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ProviderId(pub usize);

impl ProviderId {
    /// Returns the index of the provider within its instance.
    pub fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Region identifier. At most one provider per region may be hired.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct RegionId(pub u32);

impl fmt::Display for RegionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "region {}", self.0)
    }
}

/// A hireable pool of workers.
///
/// Engaging a provider costs `contract_cost` once, plus `worker_rate` per
/// hired worker. Providers are created by
/// [`InstanceBuilder`](super::InstanceBuilder) and never change afterwards.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Provider {
    id: ProviderId,
    contract_cost: f64,
    worker_rate: f64,
    capacity: u32,
    region: RegionId,
}

impl Provider {
    pub(crate) fn new(
        id: ProviderId,
        contract_cost: f64,
        worker_rate: f64,
        capacity: u32,
        region: RegionId,
    ) -> Self {
        Self {
            id,
            contract_cost,
            worker_rate,
            capacity,
            region,
        }
    }

    /// Identifier of this provider.
    pub fn id(&self) -> ProviderId {
        self.id
    }

    /// One-time engagement fee.
    pub fn contract_cost(&self) -> f64 {
        self.contract_cost
    }

    /// Cost per hired worker.
    pub fn worker_rate(&self) -> f64 {
        self.worker_rate
    }

    /// Nominal number of available workers.
    pub fn capacity(&self) -> u32 {
        self.capacity
    }

    /// Half the capacity, rounded down.
    pub fn half_capacity(&self) -> u32 {
        self.capacity / 2
    }

    /// Region this provider belongs to.
    pub fn region(&self) -> RegionId {
        self.region
    }
}
