//! Dataset generation
//!
//! A [`Dataset`] is the input array handed to a recorder. It is produced by
//! [`generate`] from an injected random source, so the same seed always
//! yields the same data:
//!
//! - random mode: independent values in [`MIN_VALUE`]`..=`[`MAX_VALUE`]
//! - sorted mode: `5 + 7*i + jitter` with `jitter < 5`, which keeps every
//!   consecutive gap at 3 or more (strictly increasing)
//!
//! Sizes outside [`MIN_SIZE`]`..=`[`MAX_SIZE`] are clamped, never rejected.

use rand::Rng;

/// Default number of elements
pub const DEFAULT_SIZE: usize = 15;

/// Smallest dataset the generator produces
pub const MIN_SIZE: usize = 5;

/// Largest dataset the generator produces
pub const MAX_SIZE: usize = 50;

/// Smallest value in random mode
pub const MIN_VALUE: i32 = 10;

/// Largest value in random mode
pub const MAX_VALUE: i32 = 109;

const SORTED_BASE: i32 = 5;
const SORTED_STRIDE: i32 = 7;
const SORTED_JITTER: i32 = 5;

/// An input array plus how it was produced
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dataset {
    values: Vec<i32>,
    sorted: bool,
}

impl Dataset {
    /// Wrap caller-supplied values as-is (no clamping)
    pub fn from_values(values: Vec<i32>) -> Self {
        let sorted = values.windows(2).all(|w| w[0] <= w[1]);
        Dataset { values, sorted }
    }

    pub fn values(&self) -> &[i32] {
        &self.values
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether the values are in non-decreasing order
    pub fn is_sorted(&self) -> bool {
        self.sorted
    }

    /// The same values in ascending order
    pub fn into_sorted(mut self) -> Self {
        if !self.sorted {
            self.values.sort_unstable();
            self.sorted = true;
        }
        self
    }
}

/// Clamp a requested size into the supported range
pub fn clamp_size(size: usize) -> usize {
    size.clamp(MIN_SIZE, MAX_SIZE)
}

/// Generate a dataset of `size` elements (clamped)
pub fn generate<R: Rng + ?Sized>(size: usize, requires_sorted: bool, rng: &mut R) -> Dataset {
    let size = clamp_size(size);

    let values: Vec<i32> = if requires_sorted {
        (0..size as i32)
            .map(|i| SORTED_BASE + i * SORTED_STRIDE + rng.gen_range(0..SORTED_JITTER))
            .collect()
    } else {
        (0..size)
            .map(|_| rng.gen_range(MIN_VALUE..=MAX_VALUE))
            .collect()
    };

    Dataset {
        values,
        sorted: requires_sorted,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_random_values_in_range() {
        let mut rng = StdRng::seed_from_u64(7);
        let data = generate(DEFAULT_SIZE, false, &mut rng);

        assert_eq!(data.len(), DEFAULT_SIZE);
        assert!(data
            .values()
            .iter()
            .all(|v| (MIN_VALUE..=MAX_VALUE).contains(v)));
    }

    #[test]
    fn test_sorted_mode_strictly_increasing() {
        let mut rng = StdRng::seed_from_u64(99);
        for size in [MIN_SIZE, 16, MAX_SIZE] {
            let data = generate(size, true, &mut rng);
            assert!(data.is_sorted());
            assert!(data.values().windows(2).all(|w| w[0] < w[1]));
        }
    }

    #[test]
    fn test_size_is_clamped() {
        let mut rng = StdRng::seed_from_u64(1);
        assert_eq!(generate(0, false, &mut rng).len(), MIN_SIZE);
        assert_eq!(generate(500, true, &mut rng).len(), MAX_SIZE);
    }

    #[test]
    fn test_same_seed_same_data() {
        let a = generate(20, false, &mut StdRng::seed_from_u64(42));
        let b = generate(20, false, &mut StdRng::seed_from_u64(42));
        assert_eq!(a, b);
    }

    #[test]
    fn test_into_sorted_keeps_values() {
        let data = Dataset::from_values(vec![9, 3, 7, 3]).into_sorted();
        assert!(data.is_sorted());
        assert_eq!(data.values(), &[3, 3, 7, 9]);
    }

    #[test]
    fn test_from_values_detects_order() {
        assert!(Dataset::from_values(vec![1, 2, 2, 5]).is_sorted());
        assert!(!Dataset::from_values(vec![3, 1]).is_sorted());
        assert!(Dataset::from_values(Vec::new()).is_sorted());
    }
}
