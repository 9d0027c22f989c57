//! Step recorders
//!
//! Each algorithm is a pure function from an input slice (and, for searches,
//! a target) to a `Vec<Step>`. A [`Step`] is a full value snapshot of the
//! working array plus the event that produced it, so any position in the
//! sequence can be displayed without replaying the ones before it.
//!
//! - [`algorithm`]: the [`Algorithm`] registry and [`Category`]
//! - [`sorting`]: bubble, selection, insertion, merge and quick sort
//! - [`searching`]: linear, binary and jump search
//!
//! # Counters
//!
//! Steps are pushed through a [`Trace`], which stamps the cumulative
//! comparison and operation counters on every step. A counter only moves on
//! the step pushed through [`Trace::comparison`] or [`Trace::operation`], so
//! both counters are non-decreasing across the whole sequence.
//!
//! # Sequence shape
//!
//! Every sequence starts with one [`StepKind::None`] step showing the
//! untouched input and ends with exactly one terminal step: a fully-sorted
//! [`StepKind::Sorted`] step for sorts, [`StepKind::Found`] or
//! [`StepKind::NotFound`] for searches.

pub mod algorithm;
pub mod searching;
pub mod sorting;

pub use algorithm::{Algorithm, AlgorithmInfo, Category};

/// What happened at a step
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StepKind {
    /// Nothing happened (initial snapshot)
    None,
    /// Two elements were compared
    Compare,
    /// Two elements were exchanged
    Swap,
    /// A single element was written (shift, merge write, insertion)
    Write,
    /// The sorted mask grew
    Sorted,
    /// A merge call finished
    Merged,
    /// A pivot was chosen
    Pivot,
    /// The active range changed
    Range,
    /// Part of the array was ruled out of a search
    Eliminate,
    /// An element was tested against the search target
    Search,
    /// A jump search block boundary was probed
    Jump,
    /// The target was found
    Found,
    /// The search ran out of candidates
    NotFound,
}

/// One replayable moment of an algorithm run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Step {
    /// Snapshot of the working array
    pub array: Vec<i32>,
    pub kind: StepKind,
    pub comparing: Option<(usize, usize)>,
    pub swapping: Option<(usize, usize)>,
    /// Elements in their final position (empty or one flag per element)
    pub sorted: Vec<bool>,
    /// Range covered by the last merge (empty or one flag per element)
    pub merged: Vec<bool>,
    pub pivot: Option<usize>,
    /// Inclusive bounds of the active subrange
    pub range: Option<(usize, usize)>,
    /// Positions ruled out of a search (empty or one flag per element)
    pub eliminated: Vec<bool>,
    pub searching: Option<usize>,
    pub found: Option<usize>,
    pub current: Option<usize>,
    pub comparisons: usize,
    pub operations: usize,
    pub message: String,
}

impl Step {
    pub fn new(kind: StepKind, array: &[i32], message: impl Into<String>) -> Self {
        Step {
            array: array.to_vec(),
            kind,
            comparing: None,
            swapping: None,
            sorted: Vec::new(),
            merged: Vec::new(),
            pivot: None,
            range: None,
            eliminated: Vec::new(),
            searching: None,
            found: None,
            current: None,
            comparisons: 0,
            operations: 0,
            message: message.into(),
        }
    }

    pub fn with_comparing(mut self, a: usize, b: usize) -> Self {
        self.comparing = Some((a, b));
        self
    }

    pub fn with_swapping(mut self, a: usize, b: usize) -> Self {
        self.swapping = Some((a, b));
        self
    }

    pub fn with_sorted(mut self, mask: &[bool]) -> Self {
        self.sorted = mask.to_vec();
        self
    }

    pub fn with_merged(mut self, mask: &[bool]) -> Self {
        self.merged = mask.to_vec();
        self
    }

    pub fn with_pivot(mut self, index: usize) -> Self {
        self.pivot = Some(index);
        self
    }

    pub fn with_range(mut self, low: usize, high: usize) -> Self {
        self.range = Some((low, high));
        self
    }

    pub fn with_eliminated(mut self, mask: &[bool]) -> Self {
        self.eliminated = mask.to_vec();
        self
    }

    pub fn with_searching(mut self, index: usize) -> Self {
        self.searching = Some(index);
        self
    }

    pub fn with_found(mut self, index: usize) -> Self {
        self.found = Some(index);
        self
    }

    pub fn with_current(mut self, index: usize) -> Self {
        self.current = Some(index);
        self
    }

    /// Whether this step ends its sequence
    pub fn is_terminal(&self) -> bool {
        match self.kind {
            StepKind::Found | StepKind::NotFound => true,
            StepKind::Sorted => {
                self.sorted.len() == self.array.len() && self.sorted.iter().all(|&s| s)
            }
            _ => false,
        }
    }
}

/// Step accumulator shared by a recorder and its helpers
#[derive(Debug, Default)]
pub struct Trace {
    steps: Vec<Step>,
    comparisons: usize,
    operations: usize,
}

impl Trace {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a step that performed one comparison
    pub fn comparison(&mut self, step: Step) {
        self.comparisons += 1;
        self.push(step);
    }

    /// Record a step that performed one write or swap
    pub fn operation(&mut self, step: Step) {
        self.operations += 1;
        self.push(step);
    }

    /// Record a step that changes no counter
    pub fn note(&mut self, step: Step) {
        self.push(step);
    }

    fn push(&mut self, mut step: Step) {
        step.comparisons = self.comparisons;
        step.operations = self.operations;
        self.steps.push(step);
    }

    pub fn into_steps(self) -> Vec<Step> {
        self.steps
    }
}
