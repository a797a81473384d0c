use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Internal flight state of the player aircraft. Angles are in degrees.
#[derive(Component, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightState {
    /// Rotation about the z axis, within ±roll_range
    pub roll: f64,
    /// Rotation about the x axis, within ±pitch_range
    pub pitch: f64,
    /// Rotation about the y axis, unbounded
    pub yaw: f64,
    /// Forward thrust, within [0, maximum_thrust]
    pub thrust: f64,
}

/// Axis inputs for one step, each nominally in [-1, 1]
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct FlightControls {
    pub roll: f64,
    pub pitch: f64,
    pub thrust: f64,
}

impl FlightControls {
    pub fn new(roll: f64, pitch: f64, thrust: f64) -> Self {
        Self {
            roll,
            pitch,
            thrust,
        }
    }
}
