// Recorded step sequences for the current dataset

use crate::recorder::{Algorithm, Step};
use rustc_hash::FxHashMap;
use std::rc::Rc;

/// Step sequences keyed by algorithm and target
///
/// Only valid for one dataset: the owner must [`clear`](StepCache::clear) it
/// whenever the dataset is replaced.
#[derive(Debug, Default)]
pub struct StepCache {
    entries: FxHashMap<(Algorithm, Option<i32>), Rc<[Step]>>,
}

impl StepCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Cached sequence, recording it on first use
    pub fn get_or_record(
        &mut self,
        algorithm: Algorithm,
        target: Option<i32>,
        values: &[i32],
    ) -> Rc<[Step]> {
        self.entries
            .entry((algorithm, target))
            .or_insert_with(|| algorithm.record(values, target).into())
            .clone()
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
