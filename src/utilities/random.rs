// src/utilities/random.rs
//
// The single seam all "random in range" draws go through.
// Anything implementing `rand::Rng` is a source, so a seeded Pcg64
// gives reproducible runs.

use rand::Rng;

pub trait RandomSource {
    /// Uniform draw from the closed range `[min, max]`.
    /// Returns `min` when the range is empty or degenerate.
    fn uniform_inclusive(&mut self, min: f64, max: f64) -> f64;

    /// Uniform draw from the half-open range `[min, max)`.
    /// Returns `min` when the range is empty or degenerate.
    fn uniform_exclusive(&mut self, min: f64, max: f64) -> f64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_inclusive(&mut self, min: f64, max: f64) -> f64 {
        // also catches NaN bounds
        if !(max > min) {
            return min;
        }
        self.gen_range(min..=max)
    }

    fn uniform_exclusive(&mut self, min: f64, max: f64) -> f64 {
        if !(max > min) {
            return min;
        }
        self.gen_range(min..max)
    }
}
