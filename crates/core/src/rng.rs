//! RNG module - random piece selection
//!
//! Pieces are drawn uniformly from the seven kinds, independently on every draw
//! (no bag, no history). The random source sits behind [`PieceSource`] so a
//! session can be driven by a seeded generator in play and by a fixed sequence
//! in tests or replays.

use crate::types::PieceKind;

/// Anything that can hand out the kind of the next piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

impl<S: PieceSource + ?Sized> PieceSource for &mut S {
    fn next_kind(&mut self) -> PieceKind {
        (**self).next_kind()
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone, PartialEq, Eq)]
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

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG
    /// cycle with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }

    /// Current generator state (feeding it back to `new` resumes the sequence)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

impl PieceSource for SimpleRng {
    fn next_kind(&mut self) -> PieceKind {
        PieceKind::ALL[self.next_range(PieceKind::ALL.len() as u32) as usize]
    }
}

/// Cycles through a fixed list of kinds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PieceSequence {
    kinds: Vec<PieceKind>,
    index: usize,
}

impl PieceSequence {
    /// Returns None for an empty list, which could never produce a piece.
    pub fn new(kinds: Vec<PieceKind>) -> Option<Self> {
        if kinds.is_empty() {
            return None;
        }
        Some(Self { kinds, index: 0 })
    }

    /// A sequence that always yields `kind`
    pub fn repeat(kind: PieceKind) -> Self {
        Self {
            kinds: vec![kind],
            index: 0,
        }
    }
}

impl PieceSource for PieceSequence {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.index % self.kinds.len()];
        self.index = self.index.wrapping_add(1);
        kind
    }
}
