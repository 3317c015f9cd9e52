//! Ward (locality) name generation.

use fake::Fake;
use fake::faker::address::en::StreetName;
use rand::SeedableRng;
use rand::rngs::StdRng;

/// Generates the ward list that every other stage draws localities from.
pub struct WardGenerator;

impl WardGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generates `count` ward names, reseeding the shared rng with `seed`.
    ///
    /// Deterministic: the same seed and count always yield the same sequence.
    pub fn generate(&self, seed: u64, count: usize, rng: &mut StdRng) -> Vec<String> {
        *rng = StdRng::seed_from_u64(seed);
        (0..count)
            .map(|_| StreetName().fake_with_rng(rng))
            .collect()
    }
}

impl Default for WardGenerator {
    fn default() -> Self {
        Self::new()
    }
}
