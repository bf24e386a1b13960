//! RNG module - randomness behind tile spawns
//!
//! The engine never touches a global generator. It draws through [`TileRng`],
//! which needs only two operations: a uniform integer below a bound (which
//! empty cell) and a uniform real in `[0, 1)` (which value).
//!
//! Two sources are provided:
//! - [`SimpleRng`]: a tiny LCG for deterministic tests and replays
//! - [`RandSource`]: an adapter over any `rand::Rng` (e.g. `StdRng`)

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Randomness consumed by the spawn step.
pub trait TileRng {
    /// Uniform integer in `[0, bound)`. `bound` is never zero.
    fn next_below(&mut self, bound: usize) -> usize;

    /// Uniform real in `[0, 1)`.
    fn next_unit(&mut self) -> f64;
}

impl<T: TileRng + ?Sized> TileRng for &mut T {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
}

impl<T: TileRng + ?Sized> TileRng for Box<T> {
    fn next_below(&mut self, bound: usize) -> usize {
        (**self).next_below(bound)
    }

    fn next_unit(&mut self) -> f64 {
        (**self).next_unit()
    }
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

    /// Current internal state (restarting from it replays the same sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl TileRng for SimpleRng {
    fn next_below(&mut self, bound: usize) -> usize {
        // High bits of an LCG are far better distributed than the low ones.
        ((self.next_u32() as u64 * bound as u64) >> 32) as usize
    }

    fn next_unit(&mut self) -> f64 {
        (self.next_u32() >> 8) as f64 / (1u32 << 24) as f64
    }
}

/// Adapter that lets any `rand` generator drive spawns.
#[derive(Debug, Clone)]
pub struct RandSource<R> {
    inner: R,
}

impl<R: Rng> RandSource<R> {
    pub fn new(inner: R) -> Self {
        Self { inner }
    }

    pub fn into_inner(self) -> R {
        self.inner
    }
}

impl RandSource<StdRng> {
    /// Seeded `StdRng`, reproducible across runs.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// `StdRng` seeded from the operating system.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_entropy())
    }
}

impl<R: Rng> TileRng for RandSource<R> {
    fn next_below(&mut self, bound: usize) -> usize {
        self.inner.gen_range(0..bound)
    }

    fn next_unit(&mut self) -> f64 {
        self.inner.gen::<f64>()
    }
}
