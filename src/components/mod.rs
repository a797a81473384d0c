pub mod bomb;
pub mod collision;
pub mod flight;
pub mod spatial;
pub mod target;

pub use bomb::{BombConfig, BombState};
pub use collision::{ColliderTag, Collision, ContactPoint};
pub use flight::{AerodynamicCoefficients, FlightConfig, FlightControls, FlightState};
pub use spatial::{BodyConstraints, RigidBodyComponent};
pub use target::{Rgba, TargetBoxConfig, TargetState};
