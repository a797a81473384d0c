use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::components::FlightControls;

/// Named input axes polled by gameplay code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    /// Roll stick
    Horizontal,
    /// Pitch stick
    Vertical,
    Thrust,
}

/// Source of axis values, nominally in [-1, 1]
pub trait AxisSource {
    fn axis(&self, axis: Axis) -> f64;

    fn flight_controls(&self) -> FlightControls {
        FlightControls::new(
            self.axis(Axis::Horizontal),
            self.axis(Axis::Vertical),
            self.axis(Axis::Thrust),
        )
    }
}

/// Latest polled axis values
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct AxisState {
    pub horizontal: f64,
    pub vertical: f64,
    pub thrust: f64,
}

impl AxisState {
    pub fn new(horizontal: f64, vertical: f64, thrust: f64) -> Self {
        Self {
            horizontal,
            vertical,
            thrust,
        }
    }

    /// All axes centred
    pub fn neutral() -> Self {
        Self::default()
    }

    pub fn set(&mut self, axis: Axis, value: f64) {
        let value = value.clamp(-1.0, 1.0);
        match axis {
            Axis::Horizontal => self.horizontal = value,
            Axis::Vertical => self.vertical = value,
            Axis::Thrust => self.thrust = value,
        }
    }
}

impl AxisSource for AxisState {
    fn axis(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
            Axis::Thrust => self.thrust,
        }
    }
}
