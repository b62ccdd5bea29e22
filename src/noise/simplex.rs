//! Simplex gradient noise backed by simdnoise.

use simdnoise::*;

use super::primitive::{CoherentNoise, SampleRange};

/// Single-octave simplex noise sampled one point at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Simplex {
    /// Lattice seed handed to simdnoise.
    pub lattice_seed: i32,
}

impl Simplex {
    /// Lattice seed used by [`Simplex::default`].
    pub const DEFAULT_LATTICE_SEED: i32 = 1337;

    pub fn new(lattice_seed: i32) -> Self {
        Self { lattice_seed }
    }
}

impl Default for Simplex {
    fn default() -> Self {
        Self::new(Self::DEFAULT_LATTICE_SEED)
    }
}

impl CoherentNoise for Simplex {
    fn sample(&self, x: f32, y: f32) -> f32 {
        // One-cell window at (x, y); octave layering happens in the caller.
        NoiseBuilder::fbm_2d_offset(x, 1, y, 1)
            .with_seed(self.lattice_seed)
            .with_freq(1.0)
            .with_octaves(1)
            .generate()
            .0[0]
    }

    fn range(&self) -> SampleRange {
        SampleRange::Signed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_simplex_reproducibility() {
        let noise = Simplex::default();
        assert_eq!(noise.sample(1.25, -3.5), noise.sample(1.25, -3.5));
    }

    #[test]
    fn test_simplex_varies_over_space() {
        let noise = Simplex::default();
        let samples: Vec<f32> = (0..16)
            .map(|i| noise.sample(i as f32 * 0.731, i as f32 * 0.419))
            .collect();
        assert!(samples.iter().any(|&v| v != samples[0]));
    }
}
