//! RNG module - deterministic random color generation
//!
//! A simple LCG keeps the whole game reproducible from a single seed, which
//! the refill pipeline depends on: the number and order of draws is part of
//! the engine's observable behavior.

use tui_gemswap_types::GemColor;

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
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Draw a uniform random palette color.
    pub fn gem_color(&mut self) -> GemColor {
        GemColor::ALL[self.next_range(GemColor::ALL.len() as u32) as usize]
    }

    /// Current internal state (for restarting with the same sequence).
    pub fn state(&self) -> u32 {
        self.state
    }
}
