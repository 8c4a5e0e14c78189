//! # engine::random
//!
//! [`RandomSource`] is the seam through which the price walk and the volume
//! spike check draw randomness. Any `rand` generator works as a source; tests
//! can also script exact draws with [`ScriptedRandom`].

use rand::{Rng, RngCore};

/// Uniform draws in `[0, 1)`.
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;

    /// Uniform draw in `[-half_width, +half_width)`.
    fn symmetric(&mut self, half_width: f64) -> f64 {
        (self.next_unit() - 0.5) * 2.0 * half_width
    }
}

impl<R: RngCore> RandomSource for R {
    fn next_unit(&mut self) -> f64 {
        self.gen::<f64>()
    }
}

/// Replays a fixed list of draws, cycling when exhausted.
#[cfg(test)]
#[derive(Debug, Clone)]
pub struct ScriptedRandom {
    draws: Vec<f64>,
    cursor: usize,
}

#[cfg(test)]
impl ScriptedRandom {
    pub fn new(draws: &[f64]) -> Self {
        assert!(!draws.is_empty(), "scripted source needs at least one draw");
        Self { draws: draws.to_vec(), cursor: 0 }
    }

    pub fn constant(draw: f64) -> Self {
        Self::new(&[draw])
    }

    pub fn consumed(&self) -> usize {
        self.cursor
    }
}

#[cfg(test)]
impl RandomSource for ScriptedRandom {
    fn next_unit(&mut self) -> f64 {
        let draw = self.draws[self.cursor % self.draws.len()];
        self.cursor += 1;
        draw
    }
}

// ─── Tests ────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn std_rng_stays_in_unit_interval() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..10_000 {
            let x = rng.next_unit();
            assert!((0.0..1.0).contains(&x));
        }
    }

    #[test]
    fn symmetric_maps_endpoints() {
        let mut src = ScriptedRandom::new(&[0.0, 0.5, 0.75]);
        assert_eq!(src.symmetric(0.01), -0.01);
        assert_eq!(src.symmetric(0.01), 0.0);
        assert!((src.symmetric(1.0) - 0.5).abs() < 1e-12);
        assert_eq!(src.consumed(), 3);
    }
}
