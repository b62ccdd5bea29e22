//! Multi-octave fractal Brownian motion (fBm) sampling over a 2D plane.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::offsets::octave_offsets;
use super::primitive::CoherentNoise;

/// Scale substituted when the configured scale is not positive.
pub const MIN_SCALE: f32 = 1e-4;

/// Configuration for multi-octave fractal noise generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FractalNoiseConfig {
    /// Random seed for the per-octave offsets.
    pub seed: i32,
    /// Cells per noise unit; larger values zoom in.
    pub scale: f32,
    /// Number of noise octaves (0 yields a flat field).
    pub octaves: u32,
    /// Amplitude decay per octave (0-1 typical).
    pub persistence: f32,
    /// Frequency multiplier per octave (>= 1 typical).
    pub lacunarity: f32,
    /// Translation applied to the sampling domain of every octave.
    pub offset: Vec2,
}

impl Default for FractalNoiseConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            scale: 25.0,
            octaves: 4,
            persistence: 0.5,
            lacunarity: 2.0,
            offset: Vec2::ZERO,
        }
    }
}

impl FractalNoiseConfig {
    /// Creates a new noise configuration with the given seed.
    pub fn with_seed(seed: i32) -> Self {
        Self {
            seed,
            ..Default::default()
        }
    }

    /// Broad landmasses with sharp coastal detail.
    pub fn islands(seed: i32) -> Self {
        Self {
            seed,
            scale: 40.0,
            octaves: 5,
            persistence: 0.5,
            lacunarity: 2.2,
            offset: Vec2::ZERO,
        }
    }

    /// Smooth, low-detail terrain.
    pub fn rolling_hills(seed: i32) -> Self {
        Self {
            seed,
            scale: 80.0,
            octaves: 3,
            persistence: 0.35,
            lacunarity: 1.8,
            offset: Vec2::ZERO,
        }
    }

    /// Returns the scale actually used for sampling.
    ///
    /// Non-positive (and NaN) scales are replaced by [`MIN_SCALE`].
    pub fn effective_scale(&self) -> f32 {
        if self.scale > 0.0 {
            self.scale
        } else {
            MIN_SCALE
        }
    }

    /// Derives the per-octave sampling offsets for this configuration.
    pub fn octave_offsets(&self) -> Vec<Vec2> {
        octave_offsets(self.seed, self.octaves, self.offset)
    }
}

/// Samples fractal noise at a position relative to the map center.
///
/// `pos` is in cells; it is divided by the configured scale, multiplied by
/// each octave's frequency and shifted by that octave's offset before the
/// primitive is sampled. One octave is accumulated per entry of
/// `octave_offsets`, in order.
///
/// # Returns
/// The raw (unnormalized) height. With persistence in [0, 1) the magnitude
/// stays below `1 / (1 - persistence)`.
pub fn sample_fractal_noise<N: CoherentNoise + ?Sized>(
    noise: &N,
    pos: Vec2,
    octave_offsets: &[Vec2],
    config: &FractalNoiseConfig,
) -> f32 {
    let scale = config.effective_scale();
    let mut total = 0.0f32;
    let mut amplitude = 1.0f32;
    let mut frequency = 1.0f32;

    for octave_offset in octave_offsets {
        let sample_x = pos.x / scale * frequency + octave_offset.x;
        let sample_y = pos.y / scale * frequency + octave_offset.y;

        total += noise.signed_sample(sample_x, sample_y) * amplitude;

        amplitude *= config.persistence;
        frequency *= config.lacunarity;
    }

    total
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noise::{Perlin, SampleRange};

    /// Returns the sample x coordinate so tests can see where octaves land.
    struct EchoX;

    impl CoherentNoise for EchoX {
        fn sample(&self, x: f32, _y: f32) -> f32 {
            x
        }

        fn range(&self) -> SampleRange {
            SampleRange::Signed
        }
    }

    struct HalfUnit;

    impl CoherentNoise for HalfUnit {
        fn sample(&self, _x: f32, _y: f32) -> f32 {
            0.75
        }

        fn range(&self) -> SampleRange {
            SampleRange::Unit
        }
    }

    #[test]
    fn test_default_config() {
        let config = FractalNoiseConfig::default();
        assert_eq!(config.octaves, 4);
        assert_eq!(config.lacunarity, 2.0);
        assert_eq!(config.persistence, 0.5);
        assert_eq!(config.offset, Vec2::ZERO);
    }

    #[test]
    fn test_effective_scale() {
        let mut config = FractalNoiseConfig::default();
        assert_eq!(config.effective_scale(), 25.0);

        config.scale = 0.0;
        assert_eq!(config.effective_scale(), MIN_SCALE);

        config.scale = -3.0;
        assert_eq!(config.effective_scale(), MIN_SCALE);

        config.scale = f32::NAN;
        assert_eq!(config.effective_scale(), MIN_SCALE);
    }

    #[test]
    fn test_no_octaves_is_flat() {
        let config = FractalNoiseConfig::default();
        let value = sample_fractal_noise(&Perlin::default(), Vec2::new(3.0, 4.0), &[], &config);
        assert_eq!(value, 0.0);
    }

    #[test]
    fn test_octave_frequency_and_amplitude_progression() {
        let config = FractalNoiseConfig {
            scale: 2.0,
            persistence: 0.5,
            lacunarity: 3.0,
            ..Default::default()
        };
        let offsets = [Vec2::new(10.0, 0.0), Vec2::new(100.0, 0.0)];

        // octave 0: 4/2*1 + 10 = 12, weight 1
        // octave 1: 4/2*3 + 100 = 106, weight 0.5
        let value = sample_fractal_noise(&EchoX, Vec2::new(4.0, 0.0), &offsets, &config);
        assert_eq!(value, 12.0 + 106.0 * 0.5);
    }

    #[test]
    fn test_unit_primitive_is_signed_before_accumulation() {
        let config = FractalNoiseConfig {
            persistence: 1.0,
            ..Default::default()
        };
        let offsets = [Vec2::ZERO; 3];
        let value = sample_fractal_noise(&HalfUnit, Vec2::ZERO, &offsets, &config);
        assert_eq!(value, 1.5);
    }

    #[test]
    fn test_noise_reproducibility() {
        let config = FractalNoiseConfig::with_seed(12345);
        let offsets = config.octave_offsets();
        let noise = Perlin::default();
        let pos = Vec2::new(-7.5, 3.25);

        let result1 = sample_fractal_noise(&noise, pos, &offsets, &config);
        let result2 = sample_fractal_noise(&noise, pos, &offsets, &config);

        assert_eq!(result1, result2, "Same seed and position should produce same result");
    }

    #[test]
    fn test_noise_range() {
        let config = FractalNoiseConfig::default();
        let offsets = config.octave_offsets();
        let noise = Perlin::default();
        // 1 + 0.5 + 0.25 + 0.125 with a little headroom for the primitive
        let bound = 1.875 * 1.5;

        for i in 0..64 {
            let pos = Vec2::new(i as f32 * 1.7 - 50.0, i as f32 * 0.9 - 20.0);
            let value = sample_fractal_noise(&noise, pos, &offsets, &config);
            assert!(
                value.abs() <= bound,
                "Noise value {} at {:?} out of expected range",
                value,
                pos
            );
        }
    }

    #[test]
    fn test_zero_persistence_keeps_only_first_octave() {
        let config = FractalNoiseConfig {
            persistence: 0.0,
            ..FractalNoiseConfig::with_seed(9)
        };
        let offsets = config.octave_offsets();
        let noise = Perlin::default();
        let pos = Vec2::new(12.0, -3.0);

        let all = sample_fractal_noise(&noise, pos, &offsets, &config);
        let first = sample_fractal_noise(&noise, pos, &offsets[..1], &config);
        assert_eq!(all, first);
    }

    #[test]
    fn test_presets_keep_seed() {
        assert_eq!(FractalNoiseConfig::islands(77).seed, 77);
        assert_eq!(FractalNoiseConfig::rolling_hills(-4).seed, -4);
        assert!(FractalNoiseConfig::rolling_hills(0).scale > FractalNoiseConfig::islands(0).scale);
    }
}
