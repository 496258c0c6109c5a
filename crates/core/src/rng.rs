//! RNG module - random source for map generation
//!
//! Generation only needs "a uniform integer in [0, n)", so that is the whole
//! [`RandomSource`] contract. [`SimpleRng`] is a small deterministic LCG so a
//! seed fully determines a map; tests can plug in a scripted source instead.

/// Uniform integer generator over `[0, bound)`.
pub trait RandomSource {
    fn next_below(&mut self, bound: u32) -> u32;
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_below(&mut self, bound: u32) -> u32 {
        if bound == 0 {
            return 0;
        }
        // The low bits of an LCG are weak; take the high half.
        (self.next_u32() >> 16) % bound
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}
