//! Cost model.
//!
//! Pure functions shared by construction and local search. The cost of a
//! selection is its contract cost (charged once), plus the per-worker rate
//! and the progressive tax on the whole batch.

use crate::model::{Instance, Selection, TaxBrackets};

impl TaxBrackets {
    /// Progressive tax on a batch of `batch` workers.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_workforce::model::TaxBrackets;
    ///
    /// let tax = TaxBrackets::new(10.0, 20.0, 30.0).unwrap();
    /// assert_eq!(tax.tax(4), 40.0);
    /// assert_eq!(tax.tax(7), 50.0 + 40.0);
    /// assert_eq!(tax.tax(12), 50.0 + 100.0 + 60.0);
    /// ```
    pub fn tax(&self, batch: u32) -> f64 {
        let (rate1, rate2, rate3) = self.rates();
        let first = f64::from(Self::FIRST_BRACKET);
        let second = f64::from(Self::SECOND_BRACKET - Self::FIRST_BRACKET);
        let n = f64::from(batch);

        if batch <= Self::FIRST_BRACKET {
            n * rate1
        } else if batch <= Self::SECOND_BRACKET {
            first * rate1 + (n - first) * rate2
        } else {
            first * rate1 + second * rate2 + (n - first - second) * rate3
        }
    }
}

/// Cost of one selection.
pub fn selection_cost(instance: &Instance, selection: &Selection) -> f64 {
    let provider = instance.provider(selection.provider);
    let batch = selection.supplied();
    provider.contract_cost()
        + f64::from(batch) * provider.worker_rate()
        + instance.tax().tax(batch)
}

/// Total cost of a sequence of selections.
pub fn total_cost<'a, I>(instance: &Instance, selections: I) -> f64
where
    I: IntoIterator<Item = &'a Selection>,
{
    selections
        .into_iter()
        .map(|s| selection_cost(instance, s))
        .sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::ProviderId;
    use proptest::prelude::*;

    fn brackets() -> TaxBrackets {
        TaxBrackets::new(10.0, 20.0, 30.0).unwrap()
    }

    #[test]
    fn test_tax_bracket_boundaries() {
        let tax = brackets();
        assert_eq!(tax.tax(0), 0.0);
        assert_eq!(tax.tax(5), 50.0);
        assert_eq!(tax.tax(6), 70.0);
        assert_eq!(tax.tax(10), 150.0);
        assert_eq!(tax.tax(11), 180.0);
        assert_eq!(tax.tax(40), 150.0 + 30.0 * 30.0);
    }

    #[test]
    fn test_selection_cost_charges_contract_once() {
        let instance = Instance::builder(20, brackets())
            .provider(100.0, 5.0, 10, 1)
            .build()
            .unwrap();
        let selection = Selection {
            provider: ProviderId(0),
            regular: 10,
            additional: 4,
        };

        // 100 + 14 * 5 + (50 + 100 + 4 * 30)
        assert_eq!(selection_cost(&instance, &selection), 440.0);
    }

    #[test]
    fn test_total_cost_sums_selections() {
        let instance = Instance::builder(20, brackets())
            .provider(100.0, 5.0, 10, 1)
            .provider(50.0, 1.0, 4, 2)
            .build()
            .unwrap();
        let selections = [
            Selection {
                provider: ProviderId(0),
                regular: 10,
                additional: 0,
            },
            Selection {
                provider: ProviderId(1),
                regular: 2,
                additional: 0,
            },
        ];

        let expected = (100.0 + 50.0 + 150.0) + (50.0 + 2.0 + 20.0);
        assert_eq!(total_cost(&instance, &selections), expected);
        assert_eq!(total_cost(&instance, &[]), 0.0);
    }

    proptest! {
        #[test]
        fn prop_tax_non_decreasing(n in 0u32..200) {
            let tax = brackets();
            prop_assert!(tax.tax(n + 1) >= tax.tax(n));
        }

        #[test]
        fn prop_tax_slope_matches_bracket(
            r1 in 0.0f64..100.0,
            d2 in 0.1f64..100.0,
            d3 in 0.1f64..100.0,
            n in 0u32..200,
        ) {
            let tax = TaxBrackets::new(r1, r1 + d2, r1 + d2 + d3).unwrap();
            let slope = tax.tax(n + 1) - tax.tax(n);
            let expected = if n < 5 {
                r1
            } else if n < 10 {
                r1 + d2
            } else {
                r1 + d2 + d3
            };
            prop_assert!((slope - expected).abs() < 1e-6);
        }
    }
}
