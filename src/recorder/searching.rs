//! Searching recorders
//!
//! Each search records one comparison step per element tested against the
//! target and ends with either a [`StepKind::Found`] or a
//! [`StepKind::NotFound`] step. Binary and jump search assume sorted input
//! and do not check it.

use super::{Step, StepKind, Trace};
use std::cmp::Ordering;

fn start(trace: &mut Trace, arr: &[i32], name: &str, target: i32) {
    trace.note(Step::new(
        StepKind::None,
        arr,
        format!("Starting {} for {}", name, target),
    ));
}

fn found(mut trace: Trace, arr: &[i32], index: usize, eliminated: &[bool]) -> Vec<Step> {
    trace.note(
        Step::new(
            StepKind::Found,
            arr,
            format!("Found {} at index {}", arr[index], index),
        )
        .with_found(index)
        .with_eliminated(eliminated),
    );
    trace.into_steps()
}

fn not_found(mut trace: Trace, arr: &[i32], target: i32, eliminated: &[bool]) -> Vec<Step> {
    trace.note(
        Step::new(
            StepKind::NotFound,
            arr,
            format!("{} is not in the array", target),
        )
        .with_eliminated(eliminated),
    );
    trace.into_steps()
}

/// Linear search: scan left to right until the first match
pub fn linear_search(values: &[i32], target: i32) -> Vec<Step> {
    let arr = values.to_vec();
    let mut eliminated = vec![false; arr.len()];
    let mut trace = Trace::new();
    start(&mut trace, &arr, "linear search", target);

    for i in 0..arr.len() {
        trace.comparison(
            Step::new(
                StepKind::Search,
                &arr,
                format!("Is {} equal to {}?", arr[i], target),
            )
            .with_searching(i)
            .with_eliminated(&eliminated),
        );

        if arr[i] == target {
            return found(trace, &arr, i, &eliminated);
        }
        eliminated[i] = true;
    }

    not_found(trace, &arr, target, &eliminated)
}

/// Binary search over a sorted slice
pub fn binary_search(values: &[i32], target: i32) -> Vec<Step> {
    let arr = values.to_vec();
    let mut eliminated = vec![false; arr.len()];
    let mut trace = Trace::new();
    start(&mut trace, &arr, "binary search", target);

    let mut left: isize = 0;
    let mut right: isize = arr.len() as isize - 1;

    while left <= right {
        let mid = ((left + right) / 2) as usize;
        trace.comparison(
            Step::new(
                StepKind::Search,
                &arr,
                format!("Middle element {} vs target {}", arr[mid], target),
            )
            .with_searching(mid)
            .with_range(left as usize, right as usize)
            .with_eliminated(&eliminated),
        );

        let message = match arr[mid].cmp(&target) {
            Ordering::Equal => return found(trace, &arr, mid, &eliminated),
            Ordering::Less => {
                eliminated[left as usize..=mid].fill(true);
                left = mid as isize + 1;
                format!("{} < {}, searching the right half", arr[mid], target)
            }
            Ordering::Greater => {
                eliminated[mid..=right as usize].fill(true);
                right = mid as isize - 1;
                format!("{} > {}, searching the left half", arr[mid], target)
            }
        };

        let mut step = Step::new(StepKind::Range, &arr, message).with_eliminated(&eliminated);
        if left <= right {
            step = step.with_range(left as usize, right as usize);
        }
        trace.note(step);
    }

    not_found(trace, &arr, target, &eliminated)
}

/// Largest `b` with `b * b <= n`
fn block_size(n: usize) -> usize {
    let mut b = 0;
    while (b + 1) * (b + 1) <= n {
        b += 1;
    }
    b
}

/// Jump search: probe block ends, then scan the block that may hold the target
pub fn jump_search(values: &[i32], target: i32) -> Vec<Step> {
    let arr = values.to_vec();
    let n = arr.len();
    let mut eliminated = vec![false; n];
    let mut trace = Trace::new();
    start(&mut trace, &arr, "jump search", target);

    if n == 0 {
        return not_found(trace, &arr, target, &eliminated);
    }

    let block = block_size(n);
    let mut prev = 0;
    let mut jump = block;

    loop {
        let probe = jump.min(n) - 1;
        trace.comparison(
            Step::new(
                StepKind::Jump,
                &arr,
                format!("Is block end {} at least {}?", arr[probe], target),
            )
            .with_searching(probe)
            .with_range(prev, probe)
            .with_eliminated(&eliminated),
        );

        if arr[probe] >= target {
            break;
        }

        eliminated[prev..=probe].fill(true);
        prev = jump;
        jump += block;
        if prev >= n {
            return not_found(trace, &arr, target, &eliminated);
        }

        trace.note(
            Step::new(
                StepKind::Range,
                &arr,
                format!("Jumped to block starting at index {}", prev),
            )
            .with_range(prev, jump.min(n) - 1)
            .with_eliminated(&eliminated),
        );
    }

    let end = jump.min(n);
    for i in prev..end {
        trace.comparison(
            Step::new(
                StepKind::Search,
                &arr,
                format!("Is {} equal to {}?", arr[i], target),
            )
            .with_searching(i)
            .with_range(prev, end - 1)
            .with_eliminated(&eliminated),
        );

        if arr[i] == target {
            return found(trace, &arr, i, &eliminated);
        }
        if arr[i] > target {
            break;
        }
        eliminated[i] = true;
    }

    not_found(trace, &arr, target, &eliminated)
}
