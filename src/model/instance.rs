//! Problem instance and its builder.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::provider::{Provider, ProviderId, RegionId};
use crate::error::InstanceError;

/// Unit rates of the three progressive tax brackets.
///
/// Workers `1..=5` of a batch are taxed at `rate1`, workers `6..=10` at
/// `rate2`, and every further worker at `rate3`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct TaxBrackets {
    rate1: f64,
    rate2: f64,
    rate3: f64,
}

impl TaxBrackets {
    /// Upper bound (inclusive) of the first bracket.
    pub const FIRST_BRACKET: u32 = 5;
    /// Upper bound (inclusive) of the second bracket.
    pub const SECOND_BRACKET: u32 = 10;

    /// Creates the brackets, requiring `0 <= rate1 < rate2 < rate3`.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_workforce::model::TaxBrackets;
    ///
    /// assert!(TaxBrackets::new(10.0, 20.0, 30.0).is_ok());
    /// assert!(TaxBrackets::new(10.0, 10.0, 30.0).is_err());
    /// ```
    pub fn new(rate1: f64, rate2: f64, rate3: f64) -> Result<Self, InstanceError> {
        let finite = rate1.is_finite() && rate2.is_finite() && rate3.is_finite();
        if !finite || rate1 < 0.0 || rate1 >= rate2 || rate2 >= rate3 {
            return Err(InstanceError::TaxRates {
                rate1,
                rate2,
                rate3,
            });
        }
        Ok(Self {
            rate1,
            rate2,
            rate3,
        })
    }

    /// Rates as `(rate1, rate2, rate3)`.
    pub fn rates(&self) -> (f64, f64, f64) {
        (self.rate1, self.rate2, self.rate3)
    }
}

/// Complete problem definition.
///
/// Read-only for the whole run. Provider ids equal their positions in
/// [`providers`](Self::providers).
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Instance {
    required_workforce: u32,
    tax: TaxBrackets,
    providers: Vec<Provider>,
}

impl Instance {
    /// Starts building an instance.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_workforce::model::{Instance, TaxBrackets};
    ///
    /// let instance = Instance::builder(14, TaxBrackets::new(10.0, 20.0, 30.0).unwrap())
    ///     .provider(100.0, 5.0, 10, 1)
    ///     .provider(100.0, 5.0, 20, 2)
    ///     .build()
    ///     .unwrap();
    /// assert_eq!(instance.providers().len(), 2);
    /// ```
    pub fn builder(required_workforce: u32, tax: TaxBrackets) -> InstanceBuilder {
        InstanceBuilder {
            required_workforce,
            tax,
            providers: Vec::new(),
        }
    }

    /// Total number of workers that must be hired.
    pub fn required_workforce(&self) -> u32 {
        self.required_workforce
    }

    /// Tax brackets.
    pub fn tax(&self) -> &TaxBrackets {
        &self.tax
    }

    /// All providers in load order.
    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    /// Looks up a provider by id.
    ///
    /// # Panics
    ///
    /// Panics if `id` does not belong to this instance.
    pub fn provider(&self, id: ProviderId) -> &Provider {
        &self.providers[id.index()]
    }

    /// Sum of all provider capacities.
    pub fn total_capacity(&self) -> u64 {
        self.providers.iter().map(|p| u64::from(p.capacity())).sum()
    }
}

/// Builder for [`Instance`]. Ids are assigned in insertion order.
#[derive(Debug, Clone)]
pub struct InstanceBuilder {
    required_workforce: u32,
    tax: TaxBrackets,
    providers: Vec<Provider>,
}

impl InstanceBuilder {
    /// Appends a provider.
    pub fn provider(mut self, contract_cost: f64, worker_rate: f64, capacity: u32, region: u32) -> Self {
        let id = ProviderId(self.providers.len());
        self.providers.push(Provider::new(
            id,
            contract_cost,
            worker_rate,
            capacity,
            RegionId(region),
        ));
        self
    }

    /// Validates the providers and returns the instance.
    pub fn build(self) -> Result<Instance, InstanceError> {
        for p in &self.providers {
            if !p.contract_cost().is_finite() || p.contract_cost() < 0.0 {
                return Err(InstanceError::ContractCost {
                    provider: p.id(),
                    value: p.contract_cost(),
                });
            }
            if !p.worker_rate().is_finite() || p.worker_rate() < 0.0 {
                return Err(InstanceError::WorkerRate {
                    provider: p.id(),
                    value: p.worker_rate(),
                });
            }
            if p.capacity() == 0 {
                return Err(InstanceError::ZeroCapacity { provider: p.id() });
            }
            if p.region().0 == 0 {
                return Err(InstanceError::ZeroRegion { provider: p.id() });
            }
        }

        Ok(Instance {
            required_workforce: self.required_workforce,
            tax: self.tax,
            providers: self.providers,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn brackets() -> TaxBrackets {
        TaxBrackets::new(10.0, 20.0, 30.0).unwrap()
    }

    #[test]
    fn test_ids_follow_insertion_order() {
        let instance = Instance::builder(10, brackets())
            .provider(100.0, 5.0, 10, 7)
            .provider(200.0, 6.0, 20, 3)
            .build()
            .unwrap();

        assert_eq!(instance.providers()[0].id(), ProviderId(0));
        assert_eq!(instance.providers()[1].id(), ProviderId(1));
        assert_eq!(instance.provider(ProviderId(1)).region(), RegionId(3));
        assert_eq!(instance.total_capacity(), 30);
    }

    #[test]
    fn test_tax_rates_must_ascend() {
        assert!(TaxBrackets::new(10.0, 20.0, 30.0).is_ok());
        assert!(TaxBrackets::new(20.0, 10.0, 30.0).is_err());
        assert!(TaxBrackets::new(10.0, 30.0, 30.0).is_err());
        assert!(TaxBrackets::new(-1.0, 20.0, 30.0).is_err());
        assert!(TaxBrackets::new(10.0, f64::NAN, 30.0).is_err());
    }

    #[test]
    fn test_rejects_zero_capacity() {
        let err = Instance::builder(10, brackets())
            .provider(100.0, 5.0, 0, 1)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            InstanceError::ZeroCapacity {
                provider: ProviderId(0)
            }
        );
    }

    #[test]
    fn test_rejects_region_zero() {
        let err = Instance::builder(10, brackets())
            .provider(100.0, 5.0, 10, 1)
            .provider(100.0, 5.0, 10, 0)
            .build()
            .unwrap_err();
        assert_eq!(
            err,
            InstanceError::ZeroRegion {
                provider: ProviderId(1)
            }
        );
    }

    #[test]
    fn test_rejects_negative_costs() {
        let err = Instance::builder(10, brackets())
            .provider(100.0, 5.0, 10, 1)
            .provider(-1.0, 5.0, 10, 2)
            .build()
            .unwrap_err();
        assert!(matches!(err, InstanceError::ContractCost { provider, .. } if provider == ProviderId(1)));

        let err = Instance::builder(10, brackets())
            .provider(100.0, f64::INFINITY, 10, 1)
            .build()
            .unwrap_err();
        assert!(matches!(err, InstanceError::WorkerRate { .. }));
    }

    #[test]
    fn test_odd_capacity_half_floors() {
        let instance = Instance::builder(10, brackets())
            .provider(100.0, 5.0, 11, 1)
            .build()
            .unwrap();
        assert_eq!(instance.providers()[0].half_capacity(), 5);
    }
}
