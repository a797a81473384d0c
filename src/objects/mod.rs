mod aircraft;
mod bomb;
mod target;

pub use aircraft::{GameOutcome, PlayerAircraft};
pub use bomb::Bomb;
pub use target::TargetBox;

use nalgebra::Vector3;
use serde::{Deserialize, Serialize};
use std::{any::Any, fmt};

use crate::{
    components::{Collision, RigidBodyComponent},
    resources::{AxisSource, Hud, ScoreKeeper},
};

/// Handle for an object registered with the step driver
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ObjectId(pub(crate) u64);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// Something that happened during a step, for the host to act on
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum SimEvent {
    ExplosionSpawned { source: ObjectId, position: Vector3<f64> },
    ObjectDestroyed { id: ObjectId, name: String },
    Scored { id: ObjectId, points: f64 },
    GameOver { id: ObjectId, outcome: GameOutcome },
}

/// Requests queued by objects and applied by the driver after the callback
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    Destroy { id: ObjectId, delay: f64 },
    Emit(SimEvent),
}

/// Everything an object may touch while one of its callbacks runs
pub struct StepContext<'a> {
    pub id: ObjectId,
    /// Simulated time [s]
    pub time: f64,
    pub input: &'a dyn AxisSource,
    pub score: &'a mut ScoreKeeper,
    pub hud: &'a mut Hud,
    pub(crate) commands: &'a mut Vec<Command>,
}

impl StepContext<'_> {
    /// Remove this object after `delay` seconds of simulated time
    pub fn destroy_self_after(&mut self, delay: f64) {
        self.commands.push(Command::Destroy { id: self.id, delay });
    }

    pub fn emit(&mut self, event: SimEvent) {
        self.commands.push(Command::Emit(event));
    }
}

/// Gameplay behaviour attached to a single body.
///
/// The driver calls `start` once before the first step or frame, then
/// `fixed_update` every physics step and `update` every rendered frame.
/// Collisions are forwarded as the host reports them.
pub trait SimulatedObject: Send + Sync + 'static {
    fn name(&self) -> &str;

    fn body(&self) -> &RigidBodyComponent;
    fn body_mut(&mut self) -> &mut RigidBodyComponent;

    fn start(&mut self, _ctx: &mut StepContext) {}

    fn fixed_update(&mut self, _ctx: &mut StepContext) {}

    fn update(&mut self, _ctx: &mut StepContext) {}

    fn on_collision_enter(&mut self, _collision: &Collision, _ctx: &mut StepContext) {}

    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}
