//! RNG module - 7-bag piece sequence
//!
//! The bag holds a permutation of all seven shapes and is dealt like a stack.
//! When it runs dry it is refilled with a fresh permutation, never partially,
//! so every window of seven draws that starts on a refill contains each shape
//! exactly once.
//!
//! The random source is a small seeded LCG, which keeps games reproducible.

use arrayvec::ArrayVec;

use crate::types::ShapeKind;

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // A zero state would only ever advance by the increment
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Random value in `[0, bound)`. `bound` must be non-zero.
    ///
    /// Uses the high bits: the low bits of a power-of-two LCG have short periods.
    pub fn next_below(&mut self, bound: u32) -> u32 {
        ((self.next_u32() as u64 * bound as u64) >> 32) as u32
    }

    /// Current internal state
    pub fn state(&self) -> u32 {
        self.state
    }
}

/// Stack of undealt shapes
#[derive(Debug, Clone)]
pub struct PieceBag {
    bag: ArrayVec<ShapeKind, 7>,
    rng: SimpleRng,
    refills: u64,
}

impl PieceBag {
    /// Create an empty bag; the first draw triggers the first refill.
    pub fn new(seed: u32) -> Self {
        Self {
            bag: ArrayVec::new(),
            rng: SimpleRng::new(seed),
            refills: 0,
        }
    }

    /// Refill with a uniformly random permutation of all seven shapes.
    ///
    /// Repeatedly removes a uniformly chosen remaining shape and pushes it,
    /// which gives each of the 5040 orderings the same probability.
    fn refill(&mut self) {
        debug_assert!(self.bag.is_empty());
        let mut remaining: ArrayVec<ShapeKind, 7> = ShapeKind::ALL.into_iter().collect();
        while !remaining.is_empty() {
            let pick = self.rng.next_below(remaining.len() as u32) as usize;
            self.bag.push(remaining.remove(pick));
        }
        self.refills += 1;
    }

    /// Deal the next shape, refilling first if the bag is empty.
    pub fn next_shape(&mut self) -> ShapeKind {
        if self.bag.is_empty() {
            self.refill();
        }
        // Refill always leaves seven shapes behind
        self.bag.pop().unwrap_or(ShapeKind::I)
    }

    /// Number of undealt shapes, always in `[0, 7]`
    pub fn len(&self) -> usize {
        self.bag.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bag.is_empty()
    }

    /// Undealt shapes in stack order (the last element is dealt next)
    pub fn remaining(&self) -> &[ShapeKind] {
        &self.bag
    }

    /// How many times the bag has been refilled
    pub fn refills(&self) -> u64 {
        self.refills
    }
}

impl Default for PieceBag {
    fn default() -> Self {
        Self::new(1)
    }
}
