use bevy::prelude::*;
use nalgebra::{UnitQuaternion, Vector3};
use serde::{Deserialize, Serialize};

use crate::physics::RigidBody;

/// Motion locks applied to a rigid body
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum BodyConstraints {
    #[default]
    None,
    /// No translation or rotation is accepted
    FreezeAll,
}

/// Stand-in for the host engine's rigid body
#[derive(Component, Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RigidBodyComponent {
    /// Position in world space [m]
    pub position: Vector3<f64>,

    /// Linear velocity in world space [m/s]
    pub velocity: Vector3<f64>,

    /// Attitude quaternion (rotation from body to world frame)
    pub attitude: UnitQuaternion<f64>,

    /// Mass [kg]
    pub mass: f64,

    pub use_gravity: bool,
    pub constraints: BodyConstraints,
}

impl Default for RigidBodyComponent {
    fn default() -> Self {
        Self {
            position: Vector3::zeros(),
            velocity: Vector3::zeros(),
            attitude: UnitQuaternion::identity(),
            mass: 1.0,
            use_gravity: true,
            constraints: BodyConstraints::None,
        }
    }
}

impl RigidBodyComponent {
    /// Create a body at rest at a specific position
    pub fn at_position(position: Vector3<f64>) -> Self {
        Self {
            position,
            ..Default::default()
        }
    }

    pub fn with_mass(mut self, mass: f64) -> Self {
        self.mass = mass;
        self
    }

    pub fn is_frozen(&self) -> bool {
        self.constraints == BodyConstraints::FreezeAll
    }

    /// Move the body, as the host physics solver would. Ignored while frozen.
    pub fn set_position(&mut self, position: Vector3<f64>) {
        if !self.is_frozen() {
            self.position = position;
        }
    }
}

impl RigidBody for RigidBodyComponent {
    fn position(&self) -> Vector3<f64> {
        self.position
    }

    fn velocity(&self) -> Vector3<f64> {
        self.velocity
    }

    fn attitude(&self) -> UnitQuaternion<f64> {
        self.attitude
    }

    fn mass(&self) -> f64 {
        self.mass
    }

    fn set_velocity(&mut self, velocity: Vector3<f64>) {
        if !self.is_frozen() {
            self.velocity = velocity;
        }
    }

    fn set_attitude(&mut self, attitude: UnitQuaternion<f64>) {
        if !self.is_frozen() {
            self.attitude = attitude;
        }
    }

    fn freeze(&mut self) {
        self.velocity = Vector3::zeros();
        self.use_gravity = false;
        self.constraints = BodyConstraints::FreezeAll;
    }
}
