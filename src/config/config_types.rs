// src/config/config_types.rs
//
// Config types for the host window

use serde::Deserialize;

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
    pub title: String,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1280,
            height: 800,
            title: "mystic".into(),
        }
    }
}

#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct StyleConfig {
    pub stroke_weight: f32,
    pub background: [f32; 3],
}

impl Default for StyleConfig {
    fn default() -> Self {
        Self {
            stroke_weight: 1.0,
            background: [0.0, 0.0, 0.0],
        }
    }
}

/// Fixed seed for reproducible runs; fresh entropy when absent.
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct SeedConfig {
    pub value: Option<u64>,
}
