// src/models/figure.rs
//
// A Figure is a closed polygon whose corners drift independently.
// Each tick every corner moves by its velocity; a corner that would cross
// an edge of the surface gets a fresh random speed pointing back inward.

use super::color::{Color, ColorState};
use super::geometry::{Boundaries, Point, Velocity, Vertex};
use crate::utilities::RandomSource;

/// Corners per figure.
pub const CORNER_COUNT: usize = 4;

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    vertices: Vec<Vertex>,
    color: ColorState,
}

impl Figure {
    pub fn new(vertices: Vec<Vertex>, color: ColorState) -> Self {
        Self { vertices, color }
    }

    /// Scatters `corner_count` corners over the surface with random
    /// velocities and random current/target colours.
    pub fn create<R: RandomSource + ?Sized>(
        corner_count: usize,
        boundaries: &Boundaries,
        rng: &mut R,
    ) -> Self {
        let min_step = boundaries.min_step();
        let max_step = boundaries.max_step();

        let vertices = (0..corner_count)
            .map(|_| {
                let position = Point::new(
                    rng.uniform_exclusive(0.0, boundaries.width),
                    rng.uniform_exclusive(0.0, boundaries.height),
                );
                let velocity = Velocity::new(
                    rng.uniform_inclusive(min_step, max_step),
                    rng.uniform_inclusive(min_step, max_step),
                );
                Vertex::new(position, velocity)
            })
            .collect();

        Self {
            vertices,
            color: ColorState::random(rng),
        }
    }

    /// Returns the figure one tick later. Corner order is preserved.
    pub fn step<R: RandomSource + ?Sized>(&self, boundaries: &Boundaries, rng: &mut R) -> Figure {
        let min_step = boundaries.min_step();
        let max_step = boundaries.max_step();

        let vertices = self
            .vertices
            .iter()
            .map(|vertex| {
                let (x, vx) = step_axis(
                    vertex.position.x,
                    vertex.velocity.x,
                    boundaries.width,
                    (min_step, max_step),
                    rng,
                );
                let (y, vy) = step_axis(
                    vertex.position.y,
                    vertex.velocity.y,
                    boundaries.height,
                    (min_step, max_step),
                    rng,
                );
                Vertex::new(Point::new(x, y), Velocity::new(vx, vy))
            })
            .collect();

        Figure {
            vertices,
            color: self.color.advance(rng),
        }
    }

    pub fn positions(&self) -> impl ExactSizeIterator<Item = Point> + '_ {
        self.vertices.iter().map(|v| v.position)
    }

    pub fn stroke_color(&self) -> Color {
        self.color.current
    }

    pub fn color_state(&self) -> &ColorState {
        &self.color
    }

    pub(crate) fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }
}

// Moves one coordinate along one axis. Returns the new coordinate and the
// velocity that produced it.
fn step_axis<R: RandomSource + ?Sized>(
    position: f64,
    velocity: f64,
    bound: f64,
    (min_step, max_step): (f64, f64),
    rng: &mut R,
) -> (f64, f64) {
    let tentative = position + velocity;
    let velocity = if tentative < 0.0 {
        rng.uniform_inclusive(min_step, max_step)
    } else if tentative > bound {
        -rng.uniform_inclusive(min_step, max_step)
    } else {
        velocity
    };
    (position + velocity, velocity)
}
