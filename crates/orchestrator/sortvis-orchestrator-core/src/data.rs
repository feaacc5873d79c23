//! Seedable random dataset generator.

use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use sortvis_core::{Dataset, Element, SortError};
use tracing::debug;

#[derive(Debug)]
pub struct DataGenerator {
    rng: SmallRng,
    min: Element,
    max: Element,
}

impl DataGenerator {
    /// Values are drawn uniformly from `min..=max`. Without a seed the
    /// generator seeds itself from the clock.
    pub fn new(min: Element, max: Element, seed: Option<u64>) -> Result<Self, SortError> {
        if min > max {
            return Err(SortError::InvalidConfig(format!(
                "value range {min}..={max} is empty"
            )));
        }
        let seed = seed.unwrap_or_else(clock_seed);
        debug!(seed, min, max, "data generator seeded");
        Ok(Self {
            rng: SmallRng::seed_from_u64(seed),
            min,
            max,
        })
    }

    pub fn generate(&mut self, size: usize) -> Dataset {
        (0..size)
            .map(|_| self.rng.random_range(self.min..=self.max))
            .collect::<Vec<_>>()
            .into()
    }

    pub fn range(&self) -> (Element, Element) {
        (self.min, self.max)
    }
}

#[cfg(not(target_arch = "wasm32"))]
fn clock_seed() -> u64 {
    use std::time::{SystemTime, UNIX_EPOCH};
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as u64)
        .unwrap_or(0x5eed_5eed)
}

// std::time has no clock on wasm32-unknown-unknown; the browser binding
// always passes a seed.
#[cfg(target_arch = "wasm32")]
fn clock_seed() -> u64 {
    0x5eed_5eed
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn values_stay_in_range() {
        let mut generator = DataGenerator::new(5, 100, Some(7)).unwrap();
        let data = generator.generate(500);
        assert_eq!(data.len(), 500);
        assert!(data.as_slice().iter().all(|v| (5..=100).contains(v)));
    }

    #[test]
    fn same_seed_same_data() {
        let mut a = DataGenerator::new(5, 100, Some(42)).unwrap();
        let mut b = DataGenerator::new(5, 100, Some(42)).unwrap();
        assert_eq!(a.generate(20), b.generate(20));
    }

    #[test]
    fn empty_range_is_rejected() {
        assert!(matches!(
            DataGenerator::new(10, 5, None),
            Err(SortError::InvalidConfig(_))
        ));
    }

    #[test]
    fn zero_size_is_empty() {
        let mut generator = DataGenerator::new(1, 1, Some(0)).unwrap();
        assert!(generator.generate(0).is_empty());
    }
}
