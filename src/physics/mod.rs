pub mod traits;

pub use traits::RigidBody;
