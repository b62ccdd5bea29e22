//! Noise map synthesis.
//!
//! Provides the [`NoiseMap`] grid, the parameter bundle and the generator
//! that seeds, samples, tracks and normalizes a height field.

mod heightmap;
mod noise_map;
mod params;
mod range;

pub use heightmap::{
    generate, generate_map, generate_with, normalize, observe_range, sample_raw_heights,
    NoiseMapError,
};
pub use noise_map::NoiseMap;
pub use params::{NoiseMapParams, ParamsError};
pub use range::{HeightRange, RangeTracking};
