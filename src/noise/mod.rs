//! Noise generation module for height-field synthesis.
//!
//! Coherent primitives sit behind [`CoherentNoise`]; the fractal sampler
//! layers octaves of a primitive at seeded offsets.

mod fractal;
mod offsets;
mod primitive;
mod simplex;

pub use fractal::{FractalNoiseConfig, MIN_SCALE, sample_fractal_noise};
pub use offsets::{OCTAVE_OFFSET_BOUND, octave_offsets};
pub use primitive::{CoherentNoise, Perlin, SampleRange};
pub use simplex::Simplex;
