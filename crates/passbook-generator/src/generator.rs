//! Password generator

use rand::seq::SliceRandom;
use rand::Rng;

use crate::charset::CharClass;

#[derive(Debug, Clone, Copy, Default)]
pub struct PasswordGenerator;

impl PasswordGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Generate a password using the thread-local RNG
    pub fn generate(&self) -> String {
        self.generate_with(&mut rand::thread_rng())
    }

    /// Generate a password drawing all randomness from `rng`.
    ///
    /// Each class contributes a random number of characters within its
    /// count range, drawn with replacement. The whole sequence is then
    /// shuffled so character classes are not grouped.
    pub fn generate_with<R: Rng>(&self, rng: &mut R) -> String {
        let mut chars: Vec<char> = Vec::with_capacity(18);

        for class in CharClass::ALL {
            let count = rng.gen_range(class.count_range());
            let pool = class.pool();
            chars.extend((0..count).filter_map(|_| pool.choose(&mut *rng).copied()));
        }

        chars.shuffle(rng);

        tracing::debug!(length = chars.len(), "Generated password");

        chars.into_iter().collect()
    }
}
