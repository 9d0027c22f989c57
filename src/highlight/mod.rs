//! Per-element highlight classification
//!
//! [`classify`] decides which single highlight an element gets at a given
//! step. Several concerns can hold for one index at once (an element being
//! compared inside the active range, a pivot that is also sorted), so the
//! checks run in a fixed priority order and the first match wins:
//!
//! ```text
//! found / sorted > searching / comparing > eliminated > swapping
//!     > pivot > current > active range / merged > default
//! ```

use crate::recorder::Step;

/// Visual category of one element
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Highlight {
    Found,
    Sorted,
    Comparing,
    Eliminated,
    Swapping,
    Pivot,
    Current,
    Range,
    Default,
}

fn flag(mask: &[bool], index: usize) -> bool {
    mask.get(index).copied().unwrap_or(false)
}

fn in_pair(pair: Option<(usize, usize)>, index: usize) -> bool {
    pair.is_some_and(|(a, b)| a == index || b == index)
}

/// Highlight for element `index` at `step`
pub fn classify(step: &Step, index: usize) -> Highlight {
    if step.found == Some(index) {
        Highlight::Found
    } else if flag(&step.sorted, index) {
        Highlight::Sorted
    } else if step.searching == Some(index) || in_pair(step.comparing, index) {
        Highlight::Comparing
    } else if flag(&step.eliminated, index) {
        Highlight::Eliminated
    } else if in_pair(step.swapping, index) {
        Highlight::Swapping
    } else if step.pivot == Some(index) {
        Highlight::Pivot
    } else if step.current == Some(index) {
        Highlight::Current
    } else if step
        .range
        .is_some_and(|(low, high)| (low..=high).contains(&index))
        || flag(&step.merged, index)
    {
        Highlight::Range
    } else {
        Highlight::Default
    }
}

/// Highlights for every element of `step`
pub fn classify_all(step: &Step) -> Vec<Highlight> {
    (0..step.array.len()).map(|i| classify(step, i)).collect()
}
