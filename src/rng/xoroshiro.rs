//! Xoroshiro128+ seeded through two SplitMix64 rounds.
//!
//! Every arithmetic step wraps at 2^64. The constants, shift amounts and
//! rotation amounts below are part of the output contract: changing any of
//! them changes every word list ever generated.

use thiserror::Error;

const MIX_MUL_1: u64 = 0xbf58_476d_1ce4_e5b9;
const MIX_MUL_2: u64 = 0x94d0_49bb_1331_11eb;

/// 2^32, the divisor that maps a `u32` into `[0, 1)`.
const U32_RANGE: f64 = 4_294_967_296.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("cannot choose from an empty sequence")]
pub struct EmptySequence;

/// SplitMix64 finalizer, applied without the usual golden-gamma increment.
fn splitmix(mut z: u64) -> u64 {
    z = (z ^ (z >> 30)).wrapping_mul(MIX_MUL_1);
    z = (z ^ (z >> 27)).wrapping_mul(MIX_MUL_2);
    z ^ (z >> 31)
}

/// Deterministic generator. Owned by a single generation call and dropped
/// after it; never shared.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Xoroshiro128Plus {
    state0: u64,
    state1: u64,
}

impl Xoroshiro128Plus {
    pub fn new(seed: u64) -> Self {
        let state0 = splitmix(seed);
        let state1 = splitmix(state0.wrapping_add(1));
        Self { state0, state1 }
    }

    /// One Xoroshiro128+ step. Returns the sum computed before the update.
    pub fn next_u64(&mut self) -> u64 {
        let s0 = self.state0;
        let result = s0.wrapping_add(self.state1);
        let s1 = self.state1 ^ s0;

        self.state0 = s0.rotate_left(24) ^ s1 ^ (s1 << 16);
        self.state1 = s1.rotate_left(37);

        result
    }

    /// Upper half of [`next_u64`](Self::next_u64); the low bits of `+`
    /// generators are the weak ones.
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform in `[0, 1)` with 32 bits of resolution.
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_u32()) / U32_RANGE
    }

    /// `floor(next_f64() * len)`, always `< len` for `len > 0`.
    fn index_below(&mut self, len: usize) -> usize {
        (self.next_f64() * len as f64) as usize
    }

    /// Fisher-Yates over a copy of `items`, walking `i` from the end down to 1.
    ///
    /// The swap index is float-derived (`floor(f * (i + 1))`), not `next % n`;
    /// both give a valid shuffle but only this one reproduces existing output.
    pub fn shuffle<T: Clone>(&mut self, items: &[T]) -> Vec<T> {
        let mut out = items.to_vec();
        for i in (1..out.len()).rev() {
            let j = self.index_below(i + 1);
            out.swap(i, j);
        }
        out
    }

    pub fn choice<'a, T>(&mut self, items: &'a [T]) -> Result<&'a T, EmptySequence> {
        if items.is_empty() {
            return Err(EmptySequence);
        }
        let idx = self.index_below(items.len());
        items.get(idx).ok_or(EmptySequence)
    }
}
