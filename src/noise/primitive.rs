//! Coherent noise primitives sampled by the fractal accumulator.

use ::noise::{NoiseFn, Perlin as PerlinLattice};
use serde::{Deserialize, Serialize};

/// Native output range of a noise primitive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SampleRange {
    /// Values roughly in [-1, 1].
    Signed,
    /// Values roughly in [0, 1].
    Unit,
}

/// A deterministic, continuous 2D noise function.
///
/// Implementations must return the same value for the same coordinates on
/// every call. The map seed never reaches the primitive. Seeding happens
/// through the per-octave offsets.
pub trait CoherentNoise: Send + Sync {
    /// Samples the raw primitive at `(x, y)`.
    fn sample(&self, x: f32, y: f32) -> f32;

    /// Returns the native range of [`CoherentNoise::sample`].
    fn range(&self) -> SampleRange;

    /// Samples the primitive and remaps unit-range output into [-1, 1].
    fn signed_sample(&self, x: f32, y: f32) -> f32 {
        let value = self.sample(x, y);
        match self.range() {
            SampleRange::Signed => value,
            SampleRange::Unit => value * 2.0 - 1.0,
        }
    }
}

impl<N: CoherentNoise + ?Sized> CoherentNoise for &N {
    fn sample(&self, x: f32, y: f32) -> f32 {
        (**self).sample(x, y)
    }

    fn range(&self) -> SampleRange {
        (**self).range()
    }
}

impl<N: CoherentNoise + ?Sized> CoherentNoise for Box<N> {
    fn sample(&self, x: f32, y: f32) -> f32 {
        (**self).sample(x, y)
    }

    fn range(&self) -> SampleRange {
        (**self).range()
    }
}

/// Classic gradient-lattice Perlin noise.
#[derive(Clone)]
pub struct Perlin {
    lattice: PerlinLattice,
}

impl Perlin {
    /// Lattice seed used by [`Perlin::default`].
    pub const DEFAULT_LATTICE_SEED: u32 = 0;

    /// Creates Perlin noise over the permutation lattice for `lattice_seed`.
    pub fn new(lattice_seed: u32) -> Self {
        Self {
            lattice: PerlinLattice::new(lattice_seed),
        }
    }
}

impl Default for Perlin {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATTICE_SEED)
    }
}

impl std::fmt::Debug for Perlin {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Perlin").finish_non_exhaustive()
    }
}

impl CoherentNoise for Perlin {
    fn sample(&self, x: f32, y: f32) -> f32 {
        self.lattice.get([x as f64, y as f64]) as f32
    }

    fn range(&self) -> SampleRange {
        SampleRange::Signed
    }
}
