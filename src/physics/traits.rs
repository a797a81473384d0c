use nalgebra::{UnitQuaternion, Vector3};

/// Seam to the host engine's rigid body.
///
/// Gameplay code writes absolute attitude and velocity through this trait
/// and never integrates forces itself.
pub trait RigidBody {
    fn position(&self) -> Vector3<f64>;
    fn velocity(&self) -> Vector3<f64>;
    fn attitude(&self) -> UnitQuaternion<f64>;
    fn mass(&self) -> f64;

    fn set_velocity(&mut self, velocity: Vector3<f64>);
    fn set_attitude(&mut self, attitude: UnitQuaternion<f64>);

    /// Zero velocity, detach from gravity and lock all further motion.
    fn freeze(&mut self);

    /// Unit forward axis in world space
    fn forward(&self) -> Vector3<f64> {
        crate::utils::forward_axis(&self.attitude())
    }
}
