// src/render/mod.rs
// Drawing figures with nannou

pub mod figure_renderer;

pub use figure_renderer::{draw_figure, stroke_color, to_window_point, FigureRenderer};
