//! Injected randomness
//!
//! The simulation only needs randomness when serving after a point. It draws
//! through `RandomSource` so the driver can hand in a seeded PCG and tests
//! can hand in a fixed sequence.

use rand::Rng;
use rand_pcg::Pcg32;

/// Source of uniform samples in `[0, 1)`
pub trait RandomSource {
    fn next_unit(&mut self) -> f64;
}

impl RandomSource for Pcg32 {
    fn next_unit(&mut self) -> f64 {
        self.random::<f64>()
    }
}

/// Vertical serve velocity: magnitude in `[min, max)` with a random sign
///
/// Draws the magnitude first, then the sign (positive iff the second sample
/// is above one half).
pub fn serve_velocity_y(rng: &mut impl RandomSource, min: f32, max: f32) -> f32 {
    let (min_f64, max_f64) = (f64::from(min), f64::from(max));
    let magnitude = (min_f64 + rng.next_unit() * (max_f64 - min_f64)) as f32;
    // Samples just below one round up to `max` once narrowed
    let magnitude = if magnitude < max {
        magnitude
    } else {
        largest_below(max)
    };
    let sign = if rng.next_unit() > 0.5 { 1.0 } else { -1.0 };
    magnitude * sign
}

/// Largest f32 strictly below a positive finite `value`
fn largest_below(value: f32) -> f32 {
    f32::from_bits(value.to_bits() - 1)
}
