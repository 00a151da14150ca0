// src/models/geometry.rs
// Value types for figure geometry

/// Horizontal and vertical step range, as a fraction of surface width.
pub const MIN_STEP_FACTOR: f64 = 0.0008;
pub const MAX_STEP_FACTOR: f64 = 0.008;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Per-tick displacement of a vertex.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Velocity {
    pub x: f64,
    pub y: f64,
}

impl Velocity {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vertex {
    pub position: Point,
    pub velocity: Velocity,
}

impl Vertex {
    pub fn new(position: Point, velocity: Velocity) -> Self {
        Self { position, velocity }
    }
}

/// The drawable size handed in on every step.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Boundaries {
    pub width: f64,
    pub height: f64,
}

impl Boundaries {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    // Both step bounds come from the width, for the vertical axis too.
    pub fn min_step(&self) -> f64 {
        self.width.max(0.0) * MIN_STEP_FACTOR
    }

    pub fn max_step(&self) -> f64 {
        self.width.max(0.0) * MAX_STEP_FACTOR
    }
}
