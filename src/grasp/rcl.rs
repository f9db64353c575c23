//! Restricted candidate list selection.
//!
//! The list is built from candidates sorted by ascending score: every
//! candidate within `alpha * (worst - best)` of the best score qualifies,
//! and one of them is drawn by a [`CandidatePicker`].

use rand::Rng;

/// Source of the uniform draw within the restricted list.
///
/// Production runs use [`RngPicker`]; tests can inject [`FixedPicker`] to
/// pin the choice.
pub trait CandidatePicker {
    /// Returns an index in `0..len`. `len` is always at least 1.
    fn pick(&mut self, len: usize) -> usize;
}

/// Draws uniformly using a random number generator.
#[derive(Debug, Clone)]
pub struct RngPicker<R>(pub R);

impl<R: Rng> CandidatePicker for RngPicker<R> {
    fn pick(&mut self, len: usize) -> usize {
        self.0.random_range(0..len)
    }
}

/// Always picks the same position, clamped to the list length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedPicker(pub usize);

impl CandidatePicker for FixedPicker {
    fn pick(&mut self, len: usize) -> usize {
        self.0.min(len - 1)
    }
}

/// Length of the restricted list for `sorted_scores` (ascending).
///
/// With `alpha = 0` the list is the single first best candidate, so the
/// randomized rule reproduces the greedy choice even when scores tie.
pub fn restricted_len(sorted_scores: &[f64], alpha: f64) -> usize {
    let (Some(&best), Some(&worst)) = (sorted_scores.first(), sorted_scores.last()) else {
        return 0;
    };
    if alpha <= 0.0 {
        return 1;
    }
    let threshold = best + alpha * (worst - best);
    sorted_scores.iter().take_while(|&&q| q <= threshold).count().max(1)
}

/// Picks a position in `sorted_scores` from the restricted list.
///
/// Returns `None` if there are no candidates.
///
/// # Examples
///
/// ```
/// use u_workforce::grasp::{restricted_choice, FixedPicker};
///
/// let scores = [1.0, 2.0, 5.0, 9.0];
/// // threshold = 1 + 0.5 * 8 = 5, so the list is [1, 2, 5]
/// assert_eq!(restricted_choice(&scores, 0.5, &mut FixedPicker(10)), Some(2));
/// assert_eq!(restricted_choice(&scores, 0.0, &mut FixedPicker(10)), Some(0));
/// assert_eq!(restricted_choice(&[], 0.5, &mut FixedPicker(0)), None);
/// ```
pub fn restricted_choice<P>(sorted_scores: &[f64], alpha: f64, picker: &mut P) -> Option<usize>
where
    P: CandidatePicker + ?Sized,
{
    match restricted_len(sorted_scores, alpha) {
        0 => None,
        len => Some(picker.pick(len).min(len - 1)),
    }
}
