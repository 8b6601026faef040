//! Seeded randomness for piece selection.
//!
//! A small LCG keeps the engine deterministic under test: the same seed
//! always yields the same piece sequence. Kinds are drawn uniformly from
//! the seven canonical pieces, with a one-piece lookahead so the renderer
//! can show a NEXT preview.

use crate::types::PieceKind;

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed (0 is remapped to avoid a
    /// degenerate all-zero stream).
    pub fn new(seed: u32) -> Self {
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    pub fn next_u32(&mut self) -> u32 {
        self.state = self.state.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.state
    }

    /// Random value in `[0, max)`.
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }
}

/// Uniform tetromino picker with a one-piece preview.
#[derive(Debug, Clone)]
pub struct PiecePicker {
    rng: SimpleRng,
    next: PieceKind,
}

impl PiecePicker {
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = Self::pick(&mut rng);
        Self { rng, next }
    }

    fn pick(rng: &mut SimpleRng) -> PieceKind {
        PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
    }

    /// The kind the next `draw` will return.
    pub fn peek(&self) -> PieceKind {
        self.next
    }

    /// Take the previewed kind and advance the lookahead.
    pub fn draw(&mut self) -> PieceKind {
        let kind = self.next;
        self.next = Self::pick(&mut self.rng);
        kind
    }
}
