// src/models/color.rs
//
// Stroke colour that glides one small step per tick toward a target,
// picking a new random target whenever it arrives.

use crate::utilities::RandomSource;

/// Per-channel step size, also the "close enough" tolerance.
pub const COLOR_STEP: f64 = 0.001;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Color {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Color {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b }
    }

    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        Self {
            r: rng.uniform_inclusive(0.0, 1.0),
            g: rng.uniform_inclusive(0.0, 1.0),
            b: rng.uniform_inclusive(0.0, 1.0),
        }
    }

    pub fn close_enough(&self, other: &Color) -> bool {
        close_enough(self.r, other.r, COLOR_STEP)
            && close_enough(self.g, other.g, COLOR_STEP)
            && close_enough(self.b, other.b, COLOR_STEP)
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorState {
    pub current: Color,
    pub target: Color,
}

impl ColorState {
    pub fn new(current: Color, target: Color) -> Self {
        Self { current, target }
    }

    pub fn random<R: RandomSource + ?Sized>(rng: &mut R) -> Self {
        let current = Color::random(rng);
        let target = Color::random(rng);
        Self { current, target }
    }

    /// One tick of colour travel. The target is replaced before stepping
    /// when the current colour has already arrived.
    pub fn advance<R: RandomSource + ?Sized>(&self, rng: &mut R) -> ColorState {
        let target = if self.current.close_enough(&self.target) {
            let next = Color::random(rng);
            log::trace!("colour reached {:?}, retargeting to {:?}", self.target, next);
            next
        } else {
            self.target
        };

        let current = Color {
            r: step_channel(self.current.r, target.r),
            g: step_channel(self.current.g, target.g),
            b: step_channel(self.current.b, target.b),
        };

        ColorState { current, target }
    }
}

/// Inclusive tolerance test: `|a - b| <= tolerance`.
pub fn close_enough(a: f64, b: f64, tolerance: f64) -> bool {
    (b - tolerance..=b + tolerance).contains(&a)
}

fn step_channel(value: f64, target: f64) -> f64 {
    if close_enough(value, target, COLOR_STEP) {
        return value;
    }
    let step = if value < target { COLOR_STEP } else { -COLOR_STEP };
    (value + step).clamp(0.0, 1.0)
}
