//! Substitution moves.
//!
//! A move replaces one selection with a selection of an unused provider.
//! Moves are evaluated without touching the solution and applied only once
//! accepted.

use std::iter;

use crate::context::SolverContext;
use crate::cost::total_cost;
use crate::model::{Instance, Provider, Selection, Solution};

/// An evaluated substitution.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwapMove {
    /// Position of the replaced selection.
    pub index: usize,
    /// Selection of the incoming provider.
    pub replacement: Selection,
    /// Total cost of the solution after the move.
    pub cost: f64,
}

/// Returns `true` if `candidate` can cover what `old` supplies within its
/// own doubling range, or with exactly half its capacity.
///
/// # Examples
///
/// ```
/// use u_workforce::local_search::can_substitute;
/// use u_workforce::model::{Instance, ProviderId, Selection, TaxBrackets};
///
/// let instance = Instance::builder(30, TaxBrackets::new(1.0, 2.0, 3.0).unwrap())
///     .provider(0.0, 1.0, 10, 1)
///     .build()
///     .unwrap();
/// let candidate = &instance.providers()[0];
/// let old = |n| Selection { provider: ProviderId(9), regular: n, additional: 0 };
///
/// assert!(can_substitute(candidate, &old(10)));
/// assert!(can_substitute(candidate, &old(20)));
/// assert!(can_substitute(candidate, &old(5)));
/// assert!(!can_substitute(candidate, &old(21)));
/// assert!(!can_substitute(candidate, &old(7)));
/// ```
pub fn can_substitute(candidate: &Provider, old: &Selection) -> bool {
    let supplied = u64::from(old.supplied());
    let capacity = u64::from(candidate.capacity());
    (capacity <= supplied && supplied <= 2 * capacity)
        || supplied == u64::from(candidate.half_capacity())
}

/// Evaluates replacing `solution[index]` with `candidate`.
///
/// The replacement is sized against the demand left open once the old
/// selection is removed, and the total cost is recomputed over the trial
/// sequence (old selection removed, replacement appended). Returns `None`
/// if the candidate is not compatible or `index` is out of range.
pub fn evaluate_swap(
    instance: &Instance,
    solution: &Solution,
    context: &SolverContext,
    index: usize,
    candidate: &Provider,
) -> Option<SwapMove> {
    let old = solution.selections().get(index)?;
    if !can_substitute(candidate, old) {
        return None;
    }

    let remaining = context.remaining(instance) + old.supplied();
    let replacement = Selection::sized(candidate, remaining);

    let kept = solution
        .selections()
        .iter()
        .enumerate()
        .filter(|&(i, _)| i != index)
        .map(|(_, s)| s);
    let cost = total_cost(instance, kept.chain(iter::once(&replacement)));

    Some(SwapMove {
        index,
        replacement,
        cost,
    })
}

/// Applies an accepted move: the old selection is removed, the replacement
/// appended, and the context updated.
pub fn apply_swap(
    instance: &Instance,
    solution: &mut Solution,
    context: &mut SolverContext,
    mv: &SwapMove,
) {
    let old = solution.remove(mv.index);
    context.release(instance, &old);
    context.engage(instance, &mv.replacement);
    solution.push(mv.replacement);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{ProviderId, TaxBrackets};

    fn instance() -> Instance {
        Instance::builder(20, TaxBrackets::new(10.0, 20.0, 30.0).unwrap())
            .provider(500.0, 10.0, 20, 1)
            .provider(100.0, 5.0, 12, 2)
            .provider(100.0, 5.0, 40, 3)
            .build()
            .unwrap()
    }

    fn base(inst: &Instance) -> (Solution, SolverContext) {
        let mut solution = Solution::new();
        let mut context = SolverContext::new();
        let selection = Selection::sized(&inst.providers()[0], 20);
        context.engage(inst, &selection);
        solution.push(selection);
        (solution, context)
    }

    #[test]
    fn test_can_substitute_counts_additional_batch() {
        let inst = instance();
        let old = Selection {
            provider: ProviderId(0),
            regular: 12,
            additional: 8,
        };
        assert!(can_substitute(&inst.providers()[1], &old));
        assert!(can_substitute(&inst.providers()[2], &old));
    }

    #[test]
    fn test_evaluate_does_not_mutate() {
        let inst = instance();
        let (solution, context) = base(&inst);
        let before = solution.clone();

        let mv = evaluate_swap(&inst, &solution, &context, 0, &inst.providers()[1]).unwrap();

        assert_eq!(solution, before);
        assert_eq!(
            mv.replacement,
            Selection {
                provider: ProviderId(1),
                regular: 12,
                additional: 8,
            }
        );
        // 100 + 20 * 5 + tax(20)
        assert_eq!(mv.cost, 100.0 + 100.0 + 150.0 + 300.0);
    }

    #[test]
    fn test_half_capacity_replacement() {
        let inst = instance();
        let (solution, context) = base(&inst);

        let mv = evaluate_swap(&inst, &solution, &context, 0, &inst.providers()[2]).unwrap();
        assert_eq!(mv.replacement.regular, 20);
        assert_eq!(mv.replacement.additional, 0);
    }

    #[test]
    fn test_incompatible_candidate() {
        let inst = Instance::builder(20, TaxBrackets::new(10.0, 20.0, 30.0).unwrap())
            .provider(500.0, 10.0, 20, 1)
            .provider(100.0, 5.0, 6, 2)
            .build()
            .unwrap();
        let (solution, context) = base(&inst);
        assert!(evaluate_swap(&inst, &solution, &context, 0, &inst.providers()[1]).is_none());
        assert!(evaluate_swap(&inst, &solution, &context, 3, &inst.providers()[1]).is_none());
    }

    #[test]
    fn test_apply_preserves_supply() {
        let inst = instance();
        let (mut solution, mut context) = base(&inst);
        let mv = evaluate_swap(&inst, &solution, &context, 0, &inst.providers()[1]).unwrap();

        apply_swap(&inst, &mut solution, &mut context, &mv);

        assert_eq!(solution.selections(), &[mv.replacement]);
        assert_eq!(context.hired(), 20);
        assert!(!context.is_used(ProviderId(0)));
        assert!(context.is_used(ProviderId(1)));
        assert!(context.is_available(&inst.providers()[0]));
    }
}
