use nalgebra::Vector3;
use serde::{Deserialize, Serialize};

/// Tag carried by the collider on the other side of a contact
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ColliderTag {
    #[default]
    Untagged,
    Ground,
    Goal,
    Custom(String),
}

/// A single contact reported by the host physics engine
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ContactPoint {
    /// Point of impact in world space
    pub point: Vector3<f64>,
    /// Surface normal at impact point
    pub normal: Vector3<f64>,
    /// Impulse applied along the normal to resolve the contact [N·s]
    pub normal_impulse: f64,
}

impl ContactPoint {
    pub fn new(point: Vector3<f64>, normal: Vector3<f64>, normal_impulse: f64) -> Self {
        Self {
            point,
            normal,
            normal_impulse,
        }
    }
}

/// A collision-enter notification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Collision {
    pub other: ColliderTag,
    pub contacts: Vec<ContactPoint>,
}

impl Collision {
    pub fn new(other: ColliderTag, contacts: Vec<ContactPoint>) -> Self {
        Self { other, contacts }
    }

    /// Collision with a single contact of the given impulse, normal pointing up
    pub fn with_impulse(other: ColliderTag, normal_impulse: f64) -> Self {
        Self::new(
            other,
            vec![ContactPoint::new(
                Vector3::zeros(),
                Vector3::y(),
                normal_impulse,
            )],
        )
    }

    pub fn max_normal_impulse(&self) -> Option<f64> {
        self.contacts
            .iter()
            .map(|c| c.normal_impulse)
            .reduce(f64::max)
    }
}
