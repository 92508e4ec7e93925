//! Randomness primitives for phrase generation.
//!
//! A [`RandomSource`] is a sequential stream with a mutable position: every
//! draw advances it, and the order of draws is part of the determinism
//! contract. One instance must not be shared across concurrent generation
//! calls without external serialization.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha20Rng;
use std::collections::VecDeque;

/// A sequential source of randomness for generation.
///
/// Implementations must be uniform over the requested ranges; everything
/// else (weighted flips, coin flips) is derived so that independent
/// implementations given the same draw sequence produce the same output.
pub trait RandomSource {
    /// Returns a uniform value in `[0, upper_exclusive)`; `next(0)` is `0`.
    fn next(&mut self, upper_exclusive: usize) -> usize;

    /// Returns `n` random bytes.
    fn random_bytes(&mut self, n: usize) -> Vec<u8>;

    /// A fair coin flip.
    fn coin_flip(&mut self) -> bool {
        self.next(2) == 0
    }

    /// Returns `true` with probability `a / (a + b)`.
    ///
    /// `a = 0` is always `false` (including `a = 0, b = 0`) and `b = 0` with
    /// `a > 0` is always `true`, without consuming a draw. The deterministic
    /// all-zero result is load-bearing: each call site orders its arguments
    /// so that `false` realizes its documented fallback, and the
    /// combinatorics bake that fallback in.
    ///
    /// Arguments are `u64` so callers may pass sums of `u32` weights without
    /// overflow.
    fn weighted_coin_flip(&mut self, a: u64, b: u64) -> bool {
        if a == 0 {
            return false;
        }
        if b == 0 {
            return true;
        }
        let total = a.saturating_add(b);
        let draw = self.next(usize::try_from(total).unwrap_or(usize::MAX));
        u64::try_from(draw).is_ok_and(|draw| draw < a)
    }
}

/// Draws one option index from a weighted list.
///
/// The draw is uniform over `[0, Σw)` and cumulative sub-ranges map to
/// options in declared order, so zero-weight options are unreachable but the
/// mapping is reproducible under a seeded source. A total weight of zero
/// returns the first declared option without consuming a draw.
pub fn weighted_choice(rng: &mut dyn RandomSource, weights: &[u32]) -> usize {
    // The sum is widened so maximal weights cannot overflow.
    let total: u64 = weights.iter().map(|&weight| u64::from(weight)).sum();
    if total == 0 {
        return 0;
    }
    let drawn = rng.next(usize::try_from(total).unwrap_or(usize::MAX));
    let mut draw = u64::try_from(drawn).unwrap_or(0);
    for (index, &weight) in weights.iter().enumerate() {
        if draw < u64::from(weight) {
            return index;
        }
        draw -= u64::from(weight);
    }
    weights.len() - 1
}

/// A deterministic, seedable randomness source backed by ChaCha20.
///
/// Use [`SeededRandomSource::from_seed`] for replayable streams (tests,
/// `seed` console command) and [`SeededRandomSource::from_entropy`] for
/// production passphrases.
pub struct SeededRandomSource {
    rng: ChaCha20Rng,
}

impl SeededRandomSource {
    /// Creates a source that replays deterministically for a given seed.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: ChaCha20Rng::seed_from_u64(seed),
        }
    }

    /// Creates a source seeded from operating-system entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            rng: ChaCha20Rng::from_entropy(),
        }
    }
}

impl RandomSource for SeededRandomSource {
    fn next(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        self.rng.gen_range(0..upper_exclusive)
    }

    fn random_bytes(&mut self, n: usize) -> Vec<u8> {
        let mut bytes = vec![0u8; n];
        self.rng.fill(bytes.as_mut_slice());
        bytes
    }
}

/// A source that replays a scripted sequence of draw values.
///
/// Intended for tests that need to force a specific branch: each `next`
/// call pops the front of the script (clamped into range), and an exhausted
/// script yields `0`.
#[derive(Clone, Debug, Default)]
pub struct ScriptedRandomSource {
    script: VecDeque<usize>,
}

impl ScriptedRandomSource {
    /// Creates a source that will replay `script` in order.
    #[must_use]
    pub fn new(script: impl IntoIterator<Item = usize>) -> Self {
        Self {
            script: script.into_iter().collect(),
        }
    }

    /// Returns how many scripted draws remain unconsumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.script.len()
    }
}

impl RandomSource for ScriptedRandomSource {
    fn next(&mut self, upper_exclusive: usize) -> usize {
        if upper_exclusive == 0 {
            return 0;
        }
        self.script
            .pop_front()
            .map_or(0, |value| value.min(upper_exclusive - 1))
    }

    fn random_bytes(&mut self, n: usize) -> Vec<u8> {
        (0..n)
            .map(|_| u8::try_from(self.next(256)).unwrap_or(0))
            .collect()
    }
}
