use serde::{Deserialize, Serialize};

use crate::utils::{SimError, MAX_LERP_WEIGHT, MIN_LERP_WEIGHT};

/// Aerodynamic coefficients for the player aircraft.
///
/// Loaded with the rest of the flight configuration. The arcade integrator
/// overwrites velocity directly and does not read them.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AerodynamicCoefficients {
    /// Drag coefficient for head winds
    pub forward_drag: f64,
    /// Drag coefficient for winds blowing up/down across the wings
    pub vertical_drag: f64,
    /// Lift generated by the wings
    pub lift: f64,
}

impl Default for AerodynamicCoefficients {
    fn default() -> Self {
        Self {
            forward_drag: 0.01,
            vertical_drag: 0.5,
            lift: 0.01,
        }
    }
}

/// Tuning for the arcade flight model. Angles are in degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlightConfig {
    pub aero: AerodynamicCoefficients,
    /// How far the plane can tilt about the x axis
    pub pitch_range: f64,
    /// How far the plane can rotate about the z axis
    pub roll_range: f64,
    /// Yaw gained per degree of roll each step
    pub rotational_speed: f64,
    /// Thrust with the throttle fully open
    pub maximum_thrust: f64,
    /// Smoothing weight applied to every angle update, in [0.01, 1]
    pub lerp_weight: f64,
    /// Launch speed along the forward axis [m/s]
    pub initial_speed: f64,
}

impl Default for FlightConfig {
    fn default() -> Self {
        Self {
            aero: AerodynamicCoefficients::default(),
            pitch_range: 45.0,
            roll_range: 45.0,
            rotational_speed: 5.0,
            maximum_thrust: 20.0,
            lerp_weight: 0.5,
            initial_speed: 3.0,
        }
    }
}

impl FlightConfig {
    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.pitch_range > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "pitch_range must be positive, got {}",
                self.pitch_range
            )));
        }
        if !(self.roll_range > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "roll_range must be positive, got {}",
                self.roll_range
            )));
        }
        if !(self.maximum_thrust >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "maximum_thrust must not be negative, got {}",
                self.maximum_thrust
            )));
        }
        if !(self.initial_speed >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "initial_speed must not be negative, got {}",
                self.initial_speed
            )));
        }
        if !(MIN_LERP_WEIGHT..=MAX_LERP_WEIGHT).contains(&self.lerp_weight) {
            return Err(SimError::InvalidConfig(format!(
                "lerp_weight must be within [{MIN_LERP_WEIGHT}, {MAX_LERP_WEIGHT}], got {}",
                self.lerp_weight
            )));
        }
        Ok(())
    }
}
