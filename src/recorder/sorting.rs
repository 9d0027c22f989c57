//! Sorting recorders
//!
//! All five sorts copy their input, record one step per comparison and per
//! write, and finish with a single fully-sorted step. Tie policies matter for
//! replay: bubble only swaps on a strict `>`, insertion only shifts on a
//! strict `>`, quick sort only moves elements strictly below the pivot and
//! merge sort takes the left run on equality.

use super::{Step, StepKind, Trace};

fn start(trace: &mut Trace, arr: &[i32], name: &str, sorted: &[bool]) {
    trace.note(
        Step::new(StepKind::None, arr, format!("Starting {} on {} elements", name, arr.len()))
            .with_sorted(sorted),
    );
}

/// Mark `index` as in its final place. The step that would complete the
/// mask is left to `finish`, so every run has exactly one terminal step.
fn settle(trace: &mut Trace, arr: &[i32], sorted: &mut [bool], index: usize, message: String) {
    sorted[index] = true;
    if sorted.iter().all(|&s| s) {
        return;
    }
    trace.note(Step::new(StepKind::Sorted, arr, message).with_sorted(sorted));
}

fn finish(mut trace: Trace, arr: &[i32], name: &str) -> Vec<Step> {
    let all_sorted = vec![true; arr.len()];
    trace.note(
        Step::new(StepKind::Sorted, arr, format!("{} complete", name)).with_sorted(&all_sorted),
    );
    trace.into_steps()
}

/// Bubble sort: N-1 passes, swapping adjacent pairs that are out of order
pub fn bubble_sort(values: &[i32]) -> Vec<Step> {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut sorted = vec![false; n];
    let mut trace = Trace::new();
    start(&mut trace, &arr, "bubble sort", &sorted);

    for i in 0..n.saturating_sub(1) {
        for j in 0..n - 1 - i {
            trace.comparison(
                Step::new(
                    StepKind::Compare,
                    &arr,
                    format!("Comparing {} and {}", arr[j], arr[j + 1]),
                )
                .with_comparing(j, j + 1)
                .with_sorted(&sorted),
            );

            if arr[j] > arr[j + 1] {
                arr.swap(j, j + 1);
                trace.operation(
                    Step::new(
                        StepKind::Swap,
                        &arr,
                        format!("Swapped {} and {}", arr[j + 1], arr[j]),
                    )
                    .with_swapping(j, j + 1)
                    .with_sorted(&sorted),
                );
            }
        }

        let settled = n - 1 - i;
        let message = format!("{} is in its final position", arr[settled]);
        settle(&mut trace, &arr, &mut sorted, settled, message);
    }

    finish(trace, &arr, "Bubble sort")
}

/// Selection sort: move the minimum of the unsorted suffix to its front
pub fn selection_sort(values: &[i32]) -> Vec<Step> {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut sorted = vec![false; n];
    let mut trace = Trace::new();
    start(&mut trace, &arr, "selection sort", &sorted);

    for i in 0..n.saturating_sub(1) {
        let mut min = i;
        for j in i + 1..n {
            trace.comparison(
                Step::new(
                    StepKind::Compare,
                    &arr,
                    format!("Comparing minimum {} with {}", arr[min], arr[j]),
                )
                .with_comparing(min, j)
                .with_current(min)
                .with_sorted(&sorted),
            );
            if arr[j] < arr[min] {
                min = j;
            }
        }

        if min != i {
            arr.swap(i, min);
            trace.operation(
                Step::new(
                    StepKind::Swap,
                    &arr,
                    format!("Swapped {} into position {}", arr[i], i),
                )
                .with_swapping(i, min)
                .with_sorted(&sorted),
            );
        }

        let message = format!("{} is in its final position", arr[i]);
        settle(&mut trace, &arr, &mut sorted, i, message);
    }

    finish(trace, &arr, "Selection sort")
}

/// Insertion sort: slide each key left over larger elements
pub fn insertion_sort(values: &[i32]) -> Vec<Step> {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut sorted = vec![false; n];
    let mut trace = Trace::new();
    if n > 0 {
        sorted[0] = true;
    }
    start(&mut trace, &arr, "insertion sort", &sorted);

    for i in 1..n {
        let key = arr[i];
        // `j` is the open slot the key would land in
        let mut j = i;

        while j > 0 {
            trace.comparison(
                Step::new(
                    StepKind::Compare,
                    &arr,
                    format!("Is {} greater than key {}?", arr[j - 1], key),
                )
                .with_comparing(j - 1, j)
                .with_current(j)
                .with_sorted(&sorted),
            );

            if arr[j - 1] > key {
                arr[j] = arr[j - 1];
                trace.operation(
                    Step::new(
                        StepKind::Write,
                        &arr,
                        format!("Shifted {} right to index {}", arr[j], j),
                    )
                    .with_swapping(j - 1, j)
                    .with_sorted(&sorted),
                );
                j -= 1;
            } else {
                break;
            }
        }

        if j != i {
            arr[j] = key;
            trace.operation(
                Step::new(
                    StepKind::Write,
                    &arr,
                    format!("Inserted key {} at index {}", key, j),
                )
                .with_current(j)
                .with_sorted(&sorted),
            );
        }

        let message = format!("First {} elements are in order", i + 1);
        settle(&mut trace, &arr, &mut sorted, i, message);
    }

    finish(trace, &arr, "Insertion sort")
}

/// Quick sort with Lomuto partitioning around the last element
pub fn quick_sort(values: &[i32]) -> Vec<Step> {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut sorted = vec![false; n];
    let mut trace = Trace::new();
    start(&mut trace, &arr, "quick sort", &sorted);

    if n > 0 {
        quick_sort_range(&mut arr, 0, n - 1, &mut sorted, &mut trace);
    }

    finish(trace, &arr, "Quick sort")
}

fn quick_sort_range(
    arr: &mut [i32],
    low: usize,
    high: usize,
    sorted: &mut [bool],
    trace: &mut Trace,
) {
    if low < high {
        let p = partition(arr, low, high, sorted, trace);
        if p > low {
            quick_sort_range(arr, low, p - 1, sorted, trace);
        }
        quick_sort_range(arr, p + 1, high, sorted, trace);
    } else if low == high {
        let message = format!("{} is in its final position", arr[low]);
        settle(trace, arr, sorted, low, message);
    }
}

fn partition(
    arr: &mut [i32],
    low: usize,
    high: usize,
    sorted: &mut [bool],
    trace: &mut Trace,
) -> usize {
    let pivot = arr[high];
    trace.note(
        Step::new(
            StepKind::Pivot,
            arr,
            format!("Pivot is {} for indices {}..={}", pivot, low, high),
        )
        .with_pivot(high)
        .with_range(low, high)
        .with_sorted(sorted),
    );

    // next slot for an element smaller than the pivot
    let mut i = low;
    for j in low..high {
        trace.comparison(
            Step::new(
                StepKind::Compare,
                arr,
                format!("Is {} less than pivot {}?", arr[j], pivot),
            )
            .with_comparing(j, high)
            .with_pivot(high)
            .with_range(low, high)
            .with_current(i)
            .with_sorted(sorted),
        );

        if arr[j] < pivot {
            if i != j {
                arr.swap(i, j);
                trace.operation(
                    Step::new(
                        StepKind::Swap,
                        arr,
                        format!("Swapped {} and {}", arr[i], arr[j]),
                    )
                    .with_swapping(i, j)
                    .with_pivot(high)
                    .with_range(low, high)
                    .with_sorted(sorted),
                );
            }
            i += 1;
        }
    }

    arr.swap(i, high);
    trace.operation(
        Step::new(
            StepKind::Swap,
            arr,
            format!("Placed pivot {} at index {}", pivot, i),
        )
        .with_swapping(i, high)
        .with_pivot(i)
        .with_range(low, high)
        .with_sorted(sorted),
    );
    sorted[i] = true;

    i
}

/// Top-down merge sort
pub fn merge_sort(values: &[i32]) -> Vec<Step> {
    let mut arr = values.to_vec();
    let n = arr.len();
    let mut trace = Trace::new();
    start(&mut trace, &arr, "merge sort", &[]);

    if n > 0 {
        merge_sort_range(&mut arr, 0, n - 1, &mut trace);
    }

    finish(trace, &arr, "Merge sort")
}

fn merge_sort_range(arr: &mut [i32], left: usize, right: usize, trace: &mut Trace) {
    if left >= right {
        return;
    }

    let mid = left + (right - left) / 2;
    merge_sort_range(arr, left, mid, trace);
    merge_sort_range(arr, mid + 1, right, trace);
    merge(arr, left, mid, right, trace);
}

fn merge(arr: &mut [i32], left: usize, mid: usize, right: usize, trace: &mut Trace) {
    let left_run = arr[left..=mid].to_vec();
    let right_run = arr[mid + 1..=right].to_vec();
    let (mut i, mut j, mut k) = (0, 0, left);

    while i < left_run.len() && j < right_run.len() {
        trace.comparison(
            Step::new(
                StepKind::Compare,
                arr,
                format!("Comparing {} and {}", left_run[i], right_run[j]),
            )
            .with_comparing(left + i, mid + 1 + j)
            .with_range(left, right),
        );

        // `<=` keeps equal elements in their original order
        if left_run[i] <= right_run[j] {
            arr[k] = left_run[i];
            i += 1;
        } else {
            arr[k] = right_run[j];
            j += 1;
        }
        write_merged(arr, k, left, right, trace);
        k += 1;
    }

    for &value in left_run[i..].iter().chain(&right_run[j..]) {
        arr[k] = value;
        write_merged(arr, k, left, right, trace);
        k += 1;
    }

    let mut merged = vec![false; arr.len()];
    merged[left..=right].fill(true);
    trace.note(
        Step::new(
            StepKind::Merged,
            arr,
            format!("Merged indices {}..={}", left, right),
        )
        .with_merged(&merged)
        .with_range(left, right),
    );
}

fn write_merged(arr: &[i32], k: usize, left: usize, right: usize, trace: &mut Trace) {
    trace.operation(
        Step::new(
            StepKind::Write,
            arr,
            format!("Placed {} at index {}", arr[k], k),
        )
        .with_current(k)
        .with_range(left, right),
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    fn count(steps: &[Step], kind: StepKind) -> usize {
        steps.iter().filter(|s| s.kind == kind).count()
    }

    #[test]
    fn test_bubble_sort_small() {
        let steps = bubble_sort(&[5, 3, 8, 1]);
        let last = steps.last().unwrap();

        assert_eq!(last.array, vec![1, 3, 5, 8]);
        assert_eq!(last.comparisons, 6);
        assert_eq!(last.operations, 4);
        assert_eq!(count(&steps, StepKind::Swap), 4);
        assert!(last.is_terminal());
    }

    #[test]
    fn test_bubble_sort_never_swaps_equal() {
        let steps = bubble_sort(&[4, 4, 4]);
        assert_eq!(count(&steps, StepKind::Swap), 0);
        assert_eq!(steps.last().unwrap().comparisons, 3);
    }

    #[test]
    fn test_bubble_marks_trailing_after_each_pass() {
        let steps = bubble_sort(&[3, 2, 1]);
        let pass_marks: Vec<&Vec<bool>> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Sorted)
            .map(|s| &s.sorted)
            .collect();
        assert_eq!(pass_marks[0], &vec![false, false, true]);
        assert_eq!(pass_marks[1], &vec![false, true, true]);
        assert_eq!(pass_marks[2], &vec![true, true, true]);
    }

    #[test]
    fn test_selection_sort_skips_self_swap() {
        let steps = selection_sort(&[1, 2, 3]);
        assert_eq!(count(&steps, StepKind::Swap), 0);
        assert_eq!(steps.last().unwrap().comparisons, 3);

        let steps = selection_sort(&[3, 1, 2]);
        assert_eq!(steps.last().unwrap().array, vec![1, 2, 3]);
        assert_eq!(count(&steps, StepKind::Swap), 2);
    }

    #[test]
    fn test_insertion_sort_shift_counts() {
        // 1 has to move over 3 and 2: two shifts, then one insertion write
        let steps = insertion_sort(&[2, 3, 1]);
        let last = steps.last().unwrap();

        assert_eq!(last.array, vec![1, 2, 3]);
        // i=1: 2>3? no (1). i=2: 3>1 yes, 2>1 yes (2)
        assert_eq!(last.comparisons, 3);
        assert_eq!(last.operations, 3);
    }

    #[test]
    fn test_insertion_sort_equal_keys_stay() {
        let steps = insertion_sort(&[5, 5]);
        assert_eq!(steps.last().unwrap().operations, 0);
    }

    #[test]
    fn test_quick_sort_self_swap_recorded() {
        // Already sorted: every partition places its pivot in place
        let steps = quick_sort(&[1, 2, 3]);
        let last = steps.last().unwrap();

        assert_eq!(last.array, vec![1, 2, 3]);
        // partition(0,2): 2 compares, partition(0,1): 1 compare
        assert_eq!(last.comparisons, 3);
        // only the two pivot placements are swaps (i == j every time)
        assert_eq!(last.operations, 2);
        assert_eq!(count(&steps, StepKind::Pivot), 2);
    }

    #[test]
    fn test_quick_sort_pivot_is_last_element() {
        let steps = quick_sort(&[7, 2, 9, 4]);
        let first_pivot = steps.iter().find(|s| s.kind == StepKind::Pivot).unwrap();
        assert_eq!(first_pivot.pivot, Some(3));
        assert_eq!(first_pivot.range, Some((0, 3)));
    }

    #[test]
    fn test_merge_sort_two_elements() {
        let steps = merge_sort(&[2, 1]);

        assert_eq!(count(&steps, StepKind::Compare), 1);
        assert_eq!(count(&steps, StepKind::Merged), 1);
        assert_eq!(steps.last().unwrap().array, vec![1, 2]);

        // right run placed first
        let first_write = steps.iter().find(|s| s.kind == StepKind::Write).unwrap();
        assert_eq!(first_write.array, vec![1, 1]);
    }

    #[test]
    fn test_merge_sort_is_stable_on_ties() {
        // Equal keys compare `<=` so the left copy is written first; with
        // plain integers we can only observe the write order.
        let steps = merge_sort(&[1, 1]);
        let writes: Vec<usize> = steps
            .iter()
            .filter(|s| s.kind == StepKind::Write)
            .filter_map(|s| s.current)
            .collect();
        assert_eq!(writes, vec![0, 1]);
        assert_eq!(count(&steps, StepKind::Compare), 1);
    }

    #[test]
    fn test_merged_mask_covers_merged_range() {
        let steps = merge_sort(&[4, 3, 2, 1]);
        let merged: Vec<&Step> = steps.iter().filter(|s| s.kind == StepKind::Merged).collect();

        assert_eq!(merged.len(), 3);
        assert_eq!(merged[2].merged, vec![true; 4]);
        assert_eq!(merged[0].merged, vec![true, true, false, false]);
    }

    #[test]
    fn test_degenerate_inputs() {
        for sort in [bubble_sort, selection_sort, insertion_sort, merge_sort, quick_sort] {
            let empty = sort(&[]);
            assert_eq!(empty.len(), 2);
            assert!(empty.last().unwrap().is_terminal());

            let single = sort(&[42]);
            let last = single.last().unwrap();
            assert_eq!(last.array, vec![42]);
            assert_eq!(last.sorted, vec![true]);
            assert_eq!(last.comparisons, 0);
        }
    }
}
