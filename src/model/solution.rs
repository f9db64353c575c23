//! Selections and solutions.

use std::collections::HashSet;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::instance::Instance;
use super::provider::{Provider, ProviderId};

/// Workers hired from one provider.
///
/// `regular` never exceeds the provider's capacity. `additional` is drawn
/// from the same provider beyond its capacity and never exceeds `regular`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Selection {
    /// Hired provider.
    pub provider: ProviderId,
    /// Workers hired within the provider's capacity.
    pub regular: u32,
    /// Extra workers hired beyond the capacity.
    pub additional: u32,
}

impl Selection {
    /// Sizes a selection of `provider` against `remaining` unmet demand.
    ///
    /// If the full capacity fits, it is taken as the regular batch and the
    /// rest of the demand is covered by an additional batch of at most one
    /// more capacity. Otherwise half the capacity (rounded down) is taken.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_workforce::model::{Instance, Selection, TaxBrackets};
    ///
    /// let instance = Instance::builder(30, TaxBrackets::new(1.0, 2.0, 3.0).unwrap())
    ///     .provider(0.0, 1.0, 10, 1)
    ///     .build()
    ///     .unwrap();
    /// let p = &instance.providers()[0];
    ///
    /// let s = Selection::sized(p, 14);
    /// assert_eq!((s.regular, s.additional), (10, 4));
    ///
    /// let s = Selection::sized(p, 30);
    /// assert_eq!((s.regular, s.additional), (10, 10));
    ///
    /// let s = Selection::sized(p, 6);
    /// assert_eq!((s.regular, s.additional), (5, 0));
    /// ```
    pub fn sized(provider: &Provider, remaining: u32) -> Self {
        let capacity = provider.capacity();
        if capacity <= remaining {
            Self {
                provider: provider.id(),
                regular: capacity,
                additional: (remaining - capacity).min(capacity),
            }
        } else {
            Self {
                provider: provider.id(),
                regular: provider.half_capacity(),
                additional: 0,
            }
        }
    }

    /// Total workers supplied by this selection.
    pub fn supplied(&self) -> u32 {
        self.regular + self.additional
    }
}

/// An ordered sequence of selections.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Solution {
    selections: Vec<Selection>,
}

impl Solution {
    /// Creates an empty solution.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selections in commit order.
    pub fn selections(&self) -> &[Selection] {
        &self.selections
    }

    /// Number of selections.
    pub fn len(&self) -> usize {
        self.selections.len()
    }

    /// Returns `true` if nothing has been hired.
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty()
    }

    /// Total workers supplied by all selections.
    pub fn total_supplied(&self) -> u64 {
        self.selections
            .iter()
            .map(|s| u64::from(s.supplied()))
            .sum()
    }

    /// Returns `true` if no provider and no region is hired twice.
    pub fn is_unique(&self, instance: &Instance) -> bool {
        let mut providers = HashSet::with_capacity(self.selections.len());
        let mut regions = HashSet::with_capacity(self.selections.len());
        self.selections.iter().all(|s| {
            providers.insert(s.provider) && regions.insert(instance.provider(s.provider).region())
        })
    }

    pub(crate) fn push(&mut self, selection: Selection) {
        self.selections.push(selection);
    }

    pub(crate) fn remove(&mut self, index: usize) -> Selection {
        self.selections.remove(index)
    }

    pub(crate) fn get_mut(&mut self, index: usize) -> Option<&mut Selection> {
        self.selections.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TaxBrackets;

    fn instance() -> Instance {
        Instance::builder(40, TaxBrackets::new(10.0, 20.0, 30.0).unwrap())
            .provider(100.0, 5.0, 10, 1)
            .provider(100.0, 5.0, 20, 1)
            .provider(100.0, 5.0, 40, 2)
            .build()
            .unwrap()
    }

    #[test]
    fn test_sized_full_capacity_without_remainder() {
        let inst = instance();
        let s = Selection::sized(&inst.providers()[1], 20);
        assert_eq!(s.regular, 20);
        assert_eq!(s.additional, 0);
    }

    #[test]
    fn test_sized_additional_capped_by_capacity() {
        let inst = instance();
        let s = Selection::sized(&inst.providers()[0], 100);
        assert_eq!(s.regular, 10);
        assert_eq!(s.additional, 10);
        assert!(s.additional <= s.regular);
    }

    #[test]
    fn test_sized_half_when_capacity_exceeds_demand() {
        let inst = instance();
        let s = Selection::sized(&inst.providers()[2], 25);
        assert_eq!(s.regular, 20);
        assert_eq!(s.additional, 0);
    }

    #[test]
    fn test_uniqueness_detects_shared_region() {
        let inst = instance();
        let mut sol = Solution::new();
        sol.push(Selection::sized(&inst.providers()[0], 10));
        sol.push(Selection::sized(&inst.providers()[2], 10));
        assert!(sol.is_unique(&inst));

        sol.push(Selection::sized(&inst.providers()[1], 10));
        assert!(!sol.is_unique(&inst));
        assert_eq!(sol.total_supplied(), 10 + 20 + 10);
    }
}
