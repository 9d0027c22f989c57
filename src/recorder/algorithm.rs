//! Algorithm registry
//!
//! [`Algorithm`] is the single place that maps an algorithm id to its
//! category, its input requirements and its recorder. The engine only ever
//! goes through [`Algorithm::record`], so a new algorithm needs a variant
//! here and a recorder function, nothing else.

use super::{searching, sorting, Step, StepKind};
use std::fmt;
use std::str::FromStr;

/// Algorithm family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Category {
    Sorting,
    Searching,
}

impl Category {
    pub fn id(self) -> &'static str {
        match self {
            Category::Sorting => "sorting",
            Category::Searching => "searching",
        }
    }

    /// Algorithms in this category, in menu order
    pub fn algorithms(self) -> impl Iterator<Item = Algorithm> {
        Algorithm::ALL
            .into_iter()
            .filter(move |a| a.category() == self)
    }

    /// Algorithm selected when none is named
    pub fn default_algorithm(self) -> Algorithm {
        match self {
            Category::Sorting => Algorithm::BubbleSort,
            Category::Searching => Algorithm::LinearSearch,
        }
    }

    /// The other category
    pub fn toggle(self) -> Self {
        match self {
            Category::Sorting => Category::Searching,
            Category::Searching => Category::Sorting,
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "sorting" => Ok(Category::Sorting),
            "searching" => Ok(Category::Searching),
            other => Err(other.to_string()),
        }
    }
}

/// Static description shown next to the visualization
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlgorithmInfo {
    pub description: &'static str,
    pub best: &'static str,
    pub average: &'static str,
    pub worst: &'static str,
    pub space: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Algorithm {
    BubbleSort,
    SelectionSort,
    InsertionSort,
    MergeSort,
    QuickSort,
    LinearSearch,
    BinarySearch,
    JumpSearch,
}

impl Algorithm {
    pub const ALL: [Algorithm; 8] = [
        Algorithm::BubbleSort,
        Algorithm::SelectionSort,
        Algorithm::InsertionSort,
        Algorithm::MergeSort,
        Algorithm::QuickSort,
        Algorithm::LinearSearch,
        Algorithm::BinarySearch,
        Algorithm::JumpSearch,
    ];

    pub fn id(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "bubble",
            Algorithm::SelectionSort => "selection",
            Algorithm::InsertionSort => "insertion",
            Algorithm::MergeSort => "merge",
            Algorithm::QuickSort => "quick",
            Algorithm::LinearSearch => "linear",
            Algorithm::BinarySearch => "binary",
            Algorithm::JumpSearch => "jump",
        }
    }

    /// Look up an algorithm by id (case-insensitive)
    pub fn from_id(id: &str) -> Option<Algorithm> {
        let id = id.trim().to_ascii_lowercase();
        Algorithm::ALL.into_iter().find(|a| a.id() == id)
    }

    pub fn name(self) -> &'static str {
        match self {
            Algorithm::BubbleSort => "Bubble Sort",
            Algorithm::SelectionSort => "Selection Sort",
            Algorithm::InsertionSort => "Insertion Sort",
            Algorithm::MergeSort => "Merge Sort",
            Algorithm::QuickSort => "Quick Sort",
            Algorithm::LinearSearch => "Linear Search",
            Algorithm::BinarySearch => "Binary Search",
            Algorithm::JumpSearch => "Jump Search",
        }
    }

    pub fn category(self) -> Category {
        match self {
            Algorithm::BubbleSort
            | Algorithm::SelectionSort
            | Algorithm::InsertionSort
            | Algorithm::MergeSort
            | Algorithm::QuickSort => Category::Sorting,
            Algorithm::LinearSearch | Algorithm::BinarySearch | Algorithm::JumpSearch => {
                Category::Searching
            }
        }
    }

    /// Whether the recorder assumes sorted input
    pub fn requires_sorted(self) -> bool {
        matches!(self, Algorithm::BinarySearch | Algorithm::JumpSearch)
    }

    /// Next algorithm in the same category, wrapping around
    pub fn next_in_category(self) -> Algorithm {
        self.cycle(1)
    }

    /// Previous algorithm in the same category, wrapping around
    pub fn prev_in_category(self) -> Algorithm {
        self.cycle(-1)
    }

    fn cycle(self, delta: isize) -> Algorithm {
        let peers: Vec<Algorithm> = self.category().algorithms().collect();
        let pos = peers.iter().position(|&a| a == self).unwrap_or(0) as isize;
        let len = peers.len() as isize;
        peers[(pos + delta).rem_euclid(len) as usize]
    }

    pub fn info(self) -> AlgorithmInfo {
        match self {
            Algorithm::BubbleSort => AlgorithmInfo {
                description: "Repeatedly swaps adjacent elements that are out of order.",
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::SelectionSort => AlgorithmInfo {
                description: "Selects the minimum of the unsorted part and moves it to the front.",
                best: "O(n²)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::InsertionSort => AlgorithmInfo {
                description: "Inserts each element into its place within the sorted prefix.",
                best: "O(n)",
                average: "O(n²)",
                worst: "O(n²)",
                space: "O(1)",
            },
            Algorithm::MergeSort => AlgorithmInfo {
                description: "Splits the array in halves, sorts them and merges the results.",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n log n)",
                space: "O(n)",
            },
            Algorithm::QuickSort => AlgorithmInfo {
                description: "Partitions around the last element, then sorts each side.",
                best: "O(n log n)",
                average: "O(n log n)",
                worst: "O(n²)",
                space: "O(log n)",
            },
            Algorithm::LinearSearch => AlgorithmInfo {
                description: "Checks every element from left to right.",
                best: "O(1)",
                average: "O(n)",
                worst: "O(n)",
                space: "O(1)",
            },
            Algorithm::BinarySearch => AlgorithmInfo {
                description: "Halves the sorted search range after each comparison.",
                best: "O(1)",
                average: "O(log n)",
                worst: "O(log n)",
                space: "O(1)",
            },
            Algorithm::JumpSearch => AlgorithmInfo {
                description: "Jumps ahead in blocks of √n, then scans the matching block.",
                best: "O(1)",
                average: "O(√n)",
                worst: "O(√n)",
                space: "O(1)",
            },
        }
    }

    /// Record the full step sequence for `values`
    ///
    /// Sorts ignore `target`. A search without a target records the input
    /// and an immediate not-found step.
    pub fn record(self, values: &[i32], target: Option<i32>) -> Vec<Step> {
        match (self, target) {
            (Algorithm::BubbleSort, _) => sorting::bubble_sort(values),
            (Algorithm::SelectionSort, _) => sorting::selection_sort(values),
            (Algorithm::InsertionSort, _) => sorting::insertion_sort(values),
            (Algorithm::MergeSort, _) => sorting::merge_sort(values),
            (Algorithm::QuickSort, _) => sorting::quick_sort(values),
            (Algorithm::LinearSearch, Some(t)) => searching::linear_search(values, t),
            (Algorithm::BinarySearch, Some(t)) => searching::binary_search(values, t),
            (Algorithm::JumpSearch, Some(t)) => searching::jump_search(values, t),
            (_, None) => vec![
                Step::new(StepKind::None, values, "No search target"),
                Step::new(StepKind::NotFound, values, "Nothing to search for"),
            ],
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for algorithm in Algorithm::ALL {
            assert_eq!(Algorithm::from_id(algorithm.id()), Some(algorithm));
        }
        assert_eq!(Algorithm::from_id(" Binary "), Some(Algorithm::BinarySearch));
        assert_eq!(Algorithm::from_id("bogo"), None);
    }

    #[test]
    fn test_category_membership() {
        assert_eq!(Category::Sorting.algorithms().count(), 5);
        assert_eq!(Category::Searching.algorithms().count(), 3);
        assert!(Category::Searching
            .algorithms()
            .all(|a| a.category() == Category::Searching));
    }

    #[test]
    fn test_only_binary_and_jump_need_sorted_input() {
        let needs: Vec<Algorithm> = Algorithm::ALL
            .into_iter()
            .filter(|a| a.requires_sorted())
            .collect();
        assert_eq!(needs, vec![Algorithm::BinarySearch, Algorithm::JumpSearch]);
    }

    #[test]
    fn test_cycle_stays_in_category() {
        assert_eq!(Algorithm::QuickSort.next_in_category(), Algorithm::BubbleSort);
        assert_eq!(Algorithm::BubbleSort.prev_in_category(), Algorithm::QuickSort);
        assert_eq!(Algorithm::JumpSearch.next_in_category(), Algorithm::LinearSearch);
    }

    #[test]
    fn test_default_algorithm_is_first_in_menu() {
        for category in [Category::Sorting, Category::Searching] {
            assert_eq!(category.algorithms().next(), Some(category.default_algorithm()));
        }
    }

    #[test]
    fn test_category_parse() {
        assert_eq!("Sorting".parse::<Category>(), Ok(Category::Sorting));
        assert_eq!("searching".parse::<Category>(), Ok(Category::Searching));
        assert!("graphs".parse::<Category>().is_err());
    }
}
