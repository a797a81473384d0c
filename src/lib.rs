pub mod components;
pub mod driver;
pub mod objects;
pub mod physics;
pub mod plugins;
pub mod resources;
pub mod systems;
pub mod utils;

pub use driver::StepDriver;
pub use objects::{
    Bomb, GameOutcome, ObjectId, PlayerAircraft, SimEvent, SimulatedObject, StepContext,
    TargetBox,
};
pub use resources::SimulationConfig;
pub use utils::SimError;
