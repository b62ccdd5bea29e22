//! Seeded per-octave sampling offsets.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Bound on the random component of each octave offset.
///
/// Keeps sample coordinates small enough that f32 still resolves
/// sub-cell steps at typical scales.
pub const OCTAVE_OFFSET_BOUND: i32 = 10_000;

/// Derives one sampling offset per octave from `seed`.
///
/// A single generator is seeded once and drawn in octave order, x before y,
/// each component uniform in `[-OCTAVE_OFFSET_BOUND, OCTAVE_OFFSET_BOUND)`.
/// `offset` is added to every entry. The first `n` offsets for a seed do not
/// depend on how many octaves are requested.
pub fn octave_offsets(seed: i32, octaves: u32, offset: Vec2) -> Vec<Vec2> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed as i64 as u64);

    (0..octaves)
        .map(|_| {
            let x = rng.random_range(-OCTAVE_OFFSET_BOUND..OCTAVE_OFFSET_BOUND);
            let y = rng.random_range(-OCTAVE_OFFSET_BOUND..OCTAVE_OFFSET_BOUND);
            Vec2::new(x as f32 + offset.x, y as f32 + offset.y)
        })
        .collect()
}
