// src/render/figure_renderer.rs
//
// Strokes figures as closed nannou paths.
// Figure coordinates have their origin at the bottom-left corner of the
// surface; nannou puts the origin at the centre of the window.

use nannou::prelude::*;

use crate::animation::Scene;
use crate::models::{Boundaries, Color, Figure, Point};

pub struct FigureRenderer {
    pub stroke_weight: f32,
}

impl FigureRenderer {
    pub fn new(stroke_weight: f32) -> Self {
        Self { stroke_weight }
    }

    pub fn draw_scene(&self, draw: &Draw, scene: &Scene, surface: &Boundaries) {
        for figure in scene.figures() {
            draw_figure(draw, figure, surface, self.stroke_weight);
        }
    }
}

/// Move to the first corner, line through the rest in order, close back
/// to the first, stroke in the figure's current colour.
pub fn draw_figure(draw: &Draw, figure: &Figure, surface: &Boundaries, stroke_weight: f32) {
    let mut corners = figure.positions().map(|p| to_window_point(p, surface));

    let Some(first) = corners.next() else {
        return;
    };

    let mut builder = nannou::geom::Path::builder().begin(first);
    for corner in corners {
        builder = builder.line_to(corner);
    }
    let path = builder.close().build();

    draw.path()
        .stroke()
        .weight(stroke_weight)
        .color(stroke_color(&figure.stroke_color()))
        .events(path.iter());
}

pub fn to_window_point(point: Point, surface: &Boundaries) -> Point2 {
    pt2(
        (point.x - surface.width / 2.0) as f32,
        (point.y - surface.height / 2.0) as f32,
    )
}

pub fn stroke_color(color: &Color) -> Rgba {
    rgba(color.r as f32, color.g as f32, color.b as f32, 1.0)
}
