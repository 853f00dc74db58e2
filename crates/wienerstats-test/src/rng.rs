//! Deterministic pseudo-random generator
//!
//! Regression tests need the same sample streams on every run and every
//! platform, so that precomputed statistics stay valid.

/// Simple linear congruential generator for reproducible randomness
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u64,
}

impl SimpleRng {
    /// Create a generator from a seed.
    pub fn new(seed: u32) -> Self {
        Self { state: seed as u64 }
    }

    /// Next raw 64-bit state.
    pub fn next_u64(&mut self) -> u64 {
        // LCG parameters from Numerical Recipes
        self.state = self
            .state
            .wrapping_mul(6_364_136_223_846_793_005)
            .wrapping_add(1_442_695_040_888_963_407);
        self.state
    }

    /// High 32 bits of the next state.
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Uniform value in `0..2^bits`, taken from the high bits.
    pub fn next_sample(&mut self, bits: u32) -> u32 {
        debug_assert!((1..=16).contains(&bits));
        self.next_u32() >> (32 - bits)
    }

    /// Uniform value in `0..bound`.
    ///
    /// A zero `bound` yields zero.
    pub fn below(&mut self, bound: usize) -> usize {
        if bound == 0 {
            return 0;
        }
        (self.next_u32() as usize) % bound
    }
}
