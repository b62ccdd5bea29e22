//! Height range tracking and inverse-lerp normalization.

use serde::{Deserialize, Serialize};

/// How the normalization range is gathered from the raw heights.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RangeTracking {
    /// Byte-compatible with the classic noise-map routine.
    ///
    /// Cells are visited row by row. A cell above the running maximum
    /// becomes the maximum; otherwise a cell strictly below the running
    /// maximum *replaces* the minimum. The resulting minimum depends on
    /// visit order and is often not the global minimum; cells below it
    /// clamp to 0.
    #[default]
    Reference,
    /// Plain global minimum and maximum.
    Global,
}

/// Observed pre-normalization range.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct HeightRange {
    pub min: f32,
    pub max: f32,
}

impl HeightRange {
    /// Range reported for an empty sequence.
    pub const EMPTY: HeightRange = HeightRange { min: 0.0, max: 0.0 };

    /// Gathers the range of `values` in visit order.
    ///
    /// With [`RangeTracking::Reference`], if no value ever falls below the
    /// running maximum the sequence was non-decreasing and its first value
    /// is used as the minimum.
    pub fn observe<I>(values: I, tracking: RangeTracking) -> Self
    where
        I: IntoIterator<Item = f32>,
    {
        let mut values = values.into_iter();
        let Some(first) = values.next() else {
            return Self::EMPTY;
        };

        match tracking {
            RangeTracking::Reference => {
                let mut max = first;
                let mut min = None;
                for value in values {
                    if value > max {
                        max = value;
                    } else if value < max {
                        min = Some(value);
                    }
                }
                Self {
                    min: min.unwrap_or(first),
                    max,
                }
            }
            RangeTracking::Global => values.fold(Self { min: first, max: first }, |range, value| Self {
                min: range.min.min(value),
                max: range.max.max(value),
            }),
        }
    }

    /// Returns true when the range has no positive width.
    pub fn is_degenerate(&self) -> bool {
        !(self.max > self.min)
    }

    /// Maps `value` to its position between `min` and `max`, clamped to [0, 1].
    ///
    /// A degenerate range maps every value to 0.0.
    pub fn inverse_lerp(&self, value: f32) -> f32 {
        if self.is_degenerate() {
            return 0.0;
        }
        ((value - self.min) / (self.max - self.min)).clamp(0.0, 1.0)
    }
}
