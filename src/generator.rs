//! Random instance generation.
//!
//! Produces instances of the same shape the solver consumes: integer
//! prices, even capacities, about 0.9 regions per provider, and a required
//! workforce of one fifth of the total capacity.

use std::ops::Range;

use rand::Rng;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::InstanceError;
use crate::grasp::create_rng;
use crate::model::{Instance, TaxBrackets};

/// Sampling ranges for [`InstanceGenerator`].
///
/// # Examples
///
/// ```
/// use u_workforce::generator::GeneratorConfig;
///
/// let config = GeneratorConfig::default().with_providers(500).with_seed(1);
/// assert_eq!(config.providers, 500);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeneratorConfig {
    /// Number of providers.
    pub providers: usize,
    /// Per-worker rate range (half-open).
    pub worker_rate: Range<u32>,
    /// Capacity range (half-open) before rounding odd values up.
    pub capacity: Range<u32>,
    /// Contract cost range (half-open).
    pub contract_cost: Range<u32>,
    /// Number of regions per provider.
    pub region_ratio: f64,
    /// Tax bracket rates.
    pub tax_rates: (f64, f64, f64),
    /// Divisor applied to the total capacity to get the required workforce.
    pub demand_divisor: u32,
    /// Random seed (None for random).
    pub seed: Option<u64>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            providers: 100,
            worker_rate: 100..1000,
            capacity: 10..50,
            contract_cost: 500..2500,
            region_ratio: 0.9,
            tax_rates: (10.0, 20.0, 30.0),
            demand_divisor: 5,
            seed: None,
        }
    }
}

impl GeneratorConfig {
    /// Sets the number of providers.
    pub fn with_providers(mut self, n: usize) -> Self {
        self.providers = n;
        self
    }

    /// Sets the region ratio.
    pub fn with_region_ratio(mut self, ratio: f64) -> Self {
        self.region_ratio = ratio;
        self
    }

    /// Sets the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.worker_rate.is_empty() || self.capacity.is_empty() || self.contract_cost.is_empty() {
            return Err("sampling ranges must be non-empty".into());
        }
        if self.capacity.start == 0 {
            return Err("capacity range must start above zero".into());
        }
        if !(self.region_ratio > 0.0 && self.region_ratio.is_finite()) {
            return Err("region_ratio must be positive".into());
        }
        if self.demand_divisor == 0 {
            return Err("demand_divisor must be positive".into());
        }
        Ok(())
    }

    fn region_count(&self) -> u32 {
        let count = (self.providers as f64 * self.region_ratio).floor();
        (count as u32).max(1)
    }
}

/// Generates random instances.
pub struct InstanceGenerator {
    config: GeneratorConfig,
}

impl InstanceGenerator {
    /// Creates a generator.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Samples an instance.
    pub fn generate(&self) -> Result<Instance, InstanceError> {
        let config = &self.config;
        config.validate().map_err(InstanceError::Generator)?;

        let mut rng = create_rng(config.seed);
        let regions = config.region_count();

        let samples: Vec<(f64, f64, u32, u32)> = (0..config.providers)
            .map(|_| {
                let rate = rng.random_range(config.worker_rate.clone());
                let capacity = rng.random_range(config.capacity.clone());
                let contract = rng.random_range(config.contract_cost.clone());
                let region = rng.random_range(1..=regions);
                let even = capacity + capacity % 2;
                (f64::from(contract), f64::from(rate), even, region)
            })
            .collect();

        let total: u64 = samples.iter().map(|s| u64::from(s.2)).sum();
        let required = total / u64::from(config.demand_divisor);
        let required = u32::try_from(required).map_err(|_| {
            InstanceError::Generator(format!("required workforce {required} does not fit in u32"))
        })?;

        let (r1, r2, r3) = config.tax_rates;
        let builder = samples.into_iter().fold(
            Instance::builder(required, TaxBrackets::new(r1, r2, r3)?),
            |b, (contract, rate, capacity, region)| b.provider(contract, rate, capacity, region),
        );
        builder.build()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_generated_shape() {
        let inst = InstanceGenerator::new(GeneratorConfig::default().with_providers(200).with_seed(42))
            .generate()
            .unwrap();

        assert_eq!(inst.providers().len(), 200);
        assert_eq!(u64::from(inst.required_workforce()), inst.total_capacity() / 5);

        let regions: HashSet<_> = inst.providers().iter().map(|p| p.region()).collect();
        assert!(regions.len() < 200);
        for p in inst.providers() {
            assert_eq!(p.capacity() % 2, 0);
            assert!((10..=50).contains(&p.capacity()));
            assert!((100.0..1000.0).contains(&p.worker_rate()));
            assert!((500.0..2500.0).contains(&p.contract_cost()));
            assert!((1..=180).contains(&p.region().0));
        }
    }

    #[test]
    fn test_same_seed_same_instance() {
        let config = GeneratorConfig::default().with_providers(50).with_seed(9);
        let a = InstanceGenerator::new(config.clone()).generate().unwrap();
        let b = InstanceGenerator::new(config).generate().unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_single_provider_gets_a_region() {
        let inst = InstanceGenerator::new(GeneratorConfig::default().with_providers(1).with_seed(3))
            .generate()
            .unwrap();
        assert_eq!(inst.providers()[0].region().0, 1);
    }

    #[test]
    fn test_validate_rejects_bad_ranges() {
        let mut config = GeneratorConfig::default();
        config.capacity = 0..10;
        assert!(config.validate().is_err());

        let config = GeneratorConfig::default().with_region_ratio(0.0);
        assert!(config.validate().is_err());
        assert!(matches!(
            InstanceGenerator::new(config).generate(),
            Err(InstanceError::Generator(_))
        ));
    }

    #[test]
    fn test_demand_overflow_is_an_error() {
        let mut config = GeneratorConfig::default().with_providers(10).with_seed(3);
        config.capacity = 4_000_000_000..4_000_000_001;
        config.demand_divisor = 1;

        let err = InstanceGenerator::new(config).generate().unwrap_err();
        assert!(matches!(err, InstanceError::Generator(_)));
    }
}
