use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// RGBA colour in [0, 1]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::new(1.0, 1.0, 1.0, 1.0);
    pub const GREEN: Rgba = Rgba::new(0.0, 1.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetBoxConfig {
    /// Boxes whose world x passes this value score automatically
    pub off_screen_x: f64,
    /// Mass of the box, also the points it is worth
    pub mass: f64,
    pub scored_color: Rgba,
}

impl Default for TargetBoxConfig {
    fn default() -> Self {
        Self {
            off_screen_x: 10.0,
            mass: 1.0,
            scored_color: Rgba::GREEN,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TargetState {
    pub color: Rgba,
    pub scored: bool,
}

impl Default for TargetState {
    fn default() -> Self {
        Self {
            color: Rgba::WHITE,
            scored: false,
        }
    }
}
