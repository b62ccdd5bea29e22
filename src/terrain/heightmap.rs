//! Noise map generation using fractal noise.

use glam::Vec2;
use rayon::prelude::*;
use thiserror::Error;
use tracing::{debug, warn};

use crate::noise::{CoherentNoise, FractalNoiseConfig, MIN_SCALE, Perlin, sample_fractal_noise};
use super::noise_map::NoiseMap;
use super::params::NoiseMapParams;
use super::range::{HeightRange, RangeTracking};

/// Errors that can occur during noise map generation.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum NoiseMapError {
    #[error("Invalid map dimensions {width}x{height}: both must be at least 1")]
    InvalidDimension { width: i32, height: i32 },
}

/// Generates a normalized noise map with the default [`Perlin`] primitive.
pub fn generate(params: &NoiseMapParams) -> Result<NoiseMap, NoiseMapError> {
    generate_with(params, &Perlin::default())
}

/// Positional form of [`generate`].
#[allow(clippy::too_many_arguments)]
pub fn generate_map(
    width: i32,
    height: i32,
    seed: i32,
    scale: f32,
    octaves: u32,
    persistence: f32,
    lacunarity: f32,
    offset_x: f32,
    offset_y: f32,
) -> Result<NoiseMap, NoiseMapError> {
    let noise = FractalNoiseConfig {
        seed,
        scale,
        octaves,
        persistence,
        lacunarity,
        offset: Vec2::new(offset_x, offset_y),
    };
    generate(&NoiseMapParams::new(width, height, noise))
}

/// Generates a normalized noise map from any coherent noise primitive.
///
/// Raw heights are sampled in parallel, the range is then tracked
/// sequentially in row-major order and every cell is remapped into [0, 1].
/// The result is identical to a fully sequential evaluation.
pub fn generate_with<N: CoherentNoise + ?Sized>(
    params: &NoiseMapParams,
    noise: &N,
) -> Result<NoiseMap, NoiseMapError> {
    let mut map = sample_raw_heights(params, noise)?;
    let range = observe_range(&map, params.range_tracking);
    normalize(&mut map, range);
    Ok(map)
}

/// Samples the unnormalized fractal height of every cell.
///
/// The sampling window is centered on the origin: cell `(x, y)` samples at
/// `(x - width / 2, y - height / 2)` in cell units.
pub fn sample_raw_heights<N: CoherentNoise + ?Sized>(
    params: &NoiseMapParams,
    noise: &N,
) -> Result<NoiseMap, NoiseMapError> {
    let (width, height) = map_dimensions(params)?;
    let config = &params.noise;

    if !(config.scale > 0.0) {
        warn!(scale = config.scale, substitute = MIN_SCALE, "non-positive noise scale replaced");
    }

    // Drawn sequentially before any parallel sampling.
    let octave_offsets = config.octave_offsets();
    let half_width = width as f32 / 2.0;
    let half_height = height as f32 / 2.0;

    debug!(
        width,
        height,
        seed = config.seed,
        octaves = config.octaves,
        "sampling raw heights"
    );

    let mut map = NoiseMap::new(width, height);
    map.values
        .par_chunks_mut(width)
        .enumerate()
        .for_each(|(y, row)| {
            let pos_y = y as f32 - half_height;
            for (x, cell) in row.iter_mut().enumerate() {
                let pos = Vec2::new(x as f32 - half_width, pos_y);
                *cell = sample_fractal_noise(noise, pos, &octave_offsets, config);
            }
        });

    Ok(map)
}

/// Tracks the normalization range of raw heights in row-major visit order.
pub fn observe_range(map: &NoiseMap, tracking: RangeTracking) -> HeightRange {
    let range = HeightRange::observe(map.values().iter().copied(), tracking);
    debug!(min = range.min, max = range.max, ?tracking, "observed height range");
    if range.is_degenerate() {
        debug!("degenerate height range, map normalizes to 0.0");
    }
    range
}

/// Remaps every cell to its clamped inverse-lerp position within `range`.
pub fn normalize(map: &mut NoiseMap, range: HeightRange) {
    map.values
        .par_iter_mut()
        .for_each(|value| *value = range.inverse_lerp(*value));
}

fn map_dimensions(params: &NoiseMapParams) -> Result<(usize, usize), NoiseMapError> {
    if params.width < 1 || params.height < 1 {
        return Err(NoiseMapError::InvalidDimension {
            width: params.width,
            height: params.height,
        });
    }
    Ok((params.width as usize, params.height as usize))
}
