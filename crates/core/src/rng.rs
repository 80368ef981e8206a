//! RNG module - piece selection for spawning
//!
//! Pieces are drawn uniformly at random: every spawn independently picks one of
//! the 7 kinds. A small LCG keeps games reproducible from a seed.
//!
//! [`PieceSource`] is the seam the engine draws from, so replays and tests can
//! feed a fixed sequence instead.

use crate::types::PieceKind;

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

    /// Generate random value in range [0, max)
    ///
    /// Uses the high half of the state; the low bits of a power-of-two LCG cycle
    /// with short periods.
    pub fn next_range(&mut self, max: u32) -> u32 {
        (self.next_u32() >> 16) % max
    }
}

/// Supplies the kind of each newly spawned piece.
pub trait PieceSource {
    fn next_kind(&mut self) -> PieceKind;
}

/// Uniform random piece kinds.
#[derive(Debug, Clone)]
pub struct UniformPieces {
    seed: u32,
    rng: SimpleRng,
}

impl UniformPieces {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            rng: SimpleRng::new(seed),
        }
    }

    pub fn seed(&self) -> u32 {
        self.seed
    }
}

impl PieceSource for UniformPieces {
    fn next_kind(&mut self) -> PieceKind {
        let idx = self.rng.next_range(PieceKind::ALL.len() as u32) as usize;
        PieceKind::ALL[idx]
    }
}

/// Repeats a fixed sequence of kinds forever.
#[derive(Debug, Clone)]
pub struct FixedPieces {
    kinds: Vec<PieceKind>,
    next: usize,
}

impl FixedPieces {
    /// Returns None for an empty sequence.
    pub fn new(kinds: impl Into<Vec<PieceKind>>) -> Option<Self> {
        let kinds = kinds.into();
        if kinds.is_empty() {
            return None;
        }
        Some(Self { kinds, next: 0 })
    }

    /// A source that only ever yields `kind`.
    pub fn repeat(kind: PieceKind) -> Self {
        Self {
            kinds: vec![kind],
            next: 0,
        }
    }
}

impl PieceSource for FixedPieces {
    fn next_kind(&mut self) -> PieceKind {
        let kind = self.kinds[self.next];
        self.next = (self.next + 1) % self.kinds.len();
        kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simple_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_zero_seed_does_not_stick() {
        let mut rng = SimpleRng::new(0);
        let a = rng.next_u32();
        let b = rng.next_u32();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_bounds() {
        let mut rng = SimpleRng::new(7);
        for _ in 0..1000 {
            assert!(rng.next_range(7) < 7);
        }
    }

    #[test]
    fn test_uniform_pieces_reach_every_kind() {
        let mut source = UniformPieces::new(42);
        let mut counts = [0u32; 7];
        for _ in 0..7000 {
            let kind = source.next_kind();
            let idx = PieceKind::ALL.iter().position(|&k| k == kind).unwrap();
            counts[idx] += 1;
        }
        // Loose bounds: expected 1000 each.
        for (i, &c) in counts.iter().enumerate() {
            assert!(c > 700 && c < 1300, "kind {} drawn {} times", i, c);
        }
    }

    #[test]
    fn test_uniform_pieces_same_seed_same_sequence() {
        let mut a = UniformPieces::new(99);
        let mut b = UniformPieces::new(99);
        for _ in 0..50 {
            assert_eq!(a.next_kind(), b.next_kind());
        }
        assert_eq!(a.seed(), 99);
    }

    #[test]
    fn test_fixed_pieces_cycle() {
        let mut source = FixedPieces::new([PieceKind::I, PieceKind::O]).unwrap();
        assert_eq!(source.next_kind(), PieceKind::I);
        assert_eq!(source.next_kind(), PieceKind::O);
        assert_eq!(source.next_kind(), PieceKind::I);
    }

    #[test]
    fn test_fixed_pieces_rejects_empty() {
        assert!(FixedPieces::new(Vec::new()).is_none());
    }
}
