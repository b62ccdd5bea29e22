//! Seeded fractal noise height maps.
//!
//! This crate synthesizes 2D height fields for procedural terrain or
//! textures: per-octave offsets are derived from a seed, octaves of a
//! coherent noise primitive are summed, and the result is normalized into
//! [0, 1].

pub mod noise;
pub mod terrain;

pub use crate::noise::{CoherentNoise, FractalNoiseConfig, Perlin, SampleRange, Simplex};
pub use crate::terrain::{
    generate, generate_map, generate_with, HeightRange, NoiseMap, NoiseMapError, NoiseMapParams,
    ParamsError, RangeTracking,
};
