pub mod color;
pub mod figure;
pub mod geometry;

pub use color::{Color, ColorState, COLOR_STEP};
pub use figure::{Figure, CORNER_COUNT};
pub use geometry::{Boundaries, Point, Velocity, Vertex};
