//! Generation parameters for a single noise map.

use std::path::Path;

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::noise::FractalNoiseConfig;
use super::range::RangeTracking;

/// Errors that can occur while loading parameters.
#[derive(Error, Debug)]
pub enum ParamsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Invalid parameters: {0}")]
    Json(#[from] serde_json::Error),
}

/// Immutable input bundle for one generation call.
///
/// Dimensions are signed so that out-of-range requests reach the generator
/// and are rejected there rather than wrapping.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NoiseMapParams {
    /// Map width in cells (must be >= 1).
    pub width: i32,
    /// Map height in cells (must be >= 1).
    pub height: i32,
    /// Fractal noise settings.
    #[serde(flatten)]
    pub noise: FractalNoiseConfig,
    /// Range tracking used for normalization.
    pub range_tracking: RangeTracking,
}

impl Default for NoiseMapParams {
    fn default() -> Self {
        Self {
            width: 100,
            height: 100,
            noise: FractalNoiseConfig::default(),
            range_tracking: RangeTracking::default(),
        }
    }
}

impl NoiseMapParams {
    /// Creates parameters for a `width` x `height` map.
    pub fn new(width: i32, height: i32, noise: FractalNoiseConfig) -> Self {
        Self {
            width,
            height,
            noise,
            range_tracking: RangeTracking::default(),
        }
    }

    /// Default-sized map with the given seed.
    pub fn with_seed(seed: i32) -> Self {
        Self {
            noise: FractalNoiseConfig::with_seed(seed),
            ..Default::default()
        }
    }

    /// Default-sized map using the islands preset.
    pub fn islands(seed: i32) -> Self {
        Self {
            noise: FractalNoiseConfig::islands(seed),
            ..Default::default()
        }
    }

    /// Default-sized map using the rolling hills preset.
    pub fn rolling_hills(seed: i32) -> Self {
        Self {
            noise: FractalNoiseConfig::rolling_hills(seed),
            ..Default::default()
        }
    }

    /// Sets the sampling offset.
    pub fn with_offset(mut self, offset: Vec2) -> Self {
        self.noise.offset = offset;
        self
    }

    /// Sets the range tracking mode.
    pub fn with_range_tracking(mut self, tracking: RangeTracking) -> Self {
        self.range_tracking = tracking;
        self
    }

    /// Clamps values into the ranges an interactive host would allow.
    ///
    /// Width and height become at least 1 and lacunarity at least 1.
    /// Scale is left alone; the generator substitutes a minimum itself.
    pub fn sanitized(&self) -> Self {
        let mut params = self.clone();
        params.width = params.width.max(1);
        params.height = params.height.max(1);
        if !(params.noise.lacunarity >= 1.0) {
            params.noise.lacunarity = 1.0;
        }
        params
    }

    /// Parses parameters from JSON. Missing fields take default values.
    pub fn from_json_str(json: &str) -> Result<Self, ParamsError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Reads parameters from a JSON file.
    pub fn from_json_file(path: &Path) -> Result<Self, ParamsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json_str(&json)
    }

    /// Serializes the parameters as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, ParamsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
