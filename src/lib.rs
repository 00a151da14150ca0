// src/lib.rs
//
// Drifting polygons with colour-gliding strokes and a short motion trail.
// The model lives in `models` and `animation`; `render` and `config` are
// what the nannou host needs to put it on screen.

pub mod animation;
pub mod config;
pub mod models;
pub mod render;
pub mod utilities;
