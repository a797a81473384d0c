use bevy::log::{debug, info};
use bevy::prelude::Resource;

use crate::{
    components::{Collision, RigidBodyComponent},
    objects::{Command, GameOutcome, ObjectId, PlayerAircraft, SimEvent, SimulatedObject, StepContext},
    resources::{AxisSource, AxisState, Hud, ScoreKeeper},
    utils::{SimError, DEFAULT_TIMESTEP},
};

/// Slack when comparing timer deadlines against accumulated step time
const TIMER_EPSILON: f64 = 1e-9;

struct Slot {
    id: ObjectId,
    object: Box<dyn SimulatedObject>,
    started: bool,
}

struct Timer {
    due: f64,
    id: ObjectId,
}

/// State shared by every object during a callback
#[derive(Default)]
struct Shared {
    score: ScoreKeeper,
    hud: Hud,
    commands: Vec<Command>,
}

impl Shared {
    fn context<'a>(
        &'a mut self,
        id: ObjectId,
        time: f64,
        input: &'a dyn AxisSource,
    ) -> StepContext<'a> {
        StepContext {
            id,
            time,
            input,
            score: &mut self.score,
            hud: &mut self.hud,
            commands: &mut self.commands,
        }
    }
}

/// Owns the simulated objects and drives their life-cycle callbacks.
///
/// The host calls [`StepDriver::fixed_step`] at the physics rate,
/// [`StepDriver::frame`] once per rendered frame, and forwards contacts with
/// [`StepDriver::notify_collision`]. Objects are visited in insertion order.
#[derive(Resource)]
pub struct StepDriver {
    timestep: f64,
    time: f64,
    steps: u64,
    next_id: u64,
    objects: Vec<Slot>,
    timers: Vec<Timer>,
    shared: Shared,
    events: Vec<SimEvent>,
}

impl Default for StepDriver {
    fn default() -> Self {
        Self::new(DEFAULT_TIMESTEP)
    }
}

impl StepDriver {
    pub fn new(timestep: f64) -> Self {
        Self {
            timestep,
            time: 0.0,
            steps: 0,
            next_id: 0,
            objects: Vec::new(),
            timers: Vec::new(),
            shared: Shared::default(),
            events: Vec::new(),
        }
    }

    /// Register an object. Its `start` runs before its first step or frame.
    pub fn add<T: SimulatedObject>(&mut self, object: T) -> ObjectId {
        let id = ObjectId(self.next_id);
        self.next_id += 1;
        debug!("adding {} as {}", object.name(), id);
        self.objects.push(Slot {
            id,
            object: Box::new(object),
            started: false,
        });
        id
    }

    /// Remove an object immediately, without emitting an event
    pub fn remove(&mut self, id: ObjectId) -> Option<Box<dyn SimulatedObject>> {
        let index = self.objects.iter().position(|slot| slot.id == id)?;
        self.timers.retain(|timer| timer.id != id);
        Some(self.objects.remove(index).object)
    }

    /// Advance one fixed physics step
    pub fn fixed_step(&mut self, input: &dyn AxisSource) {
        self.time += self.timestep;
        self.steps += 1;

        self.start_pending(input);
        self.fire_timers();

        for slot in self.objects.iter_mut() {
            let mut ctx = self.shared.context(slot.id, self.time, input);
            slot.object.fixed_update(&mut ctx);
        }
        self.apply_commands();
    }

    /// Run the per-frame callbacks
    pub fn frame(&mut self, input: &dyn AxisSource) {
        self.start_pending(input);

        for slot in self.objects.iter_mut() {
            let mut ctx = self.shared.context(slot.id, self.time, input);
            slot.object.update(&mut ctx);
        }
        self.apply_commands();
    }

    /// Forward a collision-enter notification from the host physics
    pub fn notify_collision(&mut self, id: ObjectId, collision: &Collision) -> Result<(), SimError> {
        self.with_context(id, |object, ctx| object.on_collision_enter(collision, ctx))
    }

    /// End the game for a player aircraft
    pub fn game_over(&mut self, id: ObjectId, outcome: GameOutcome) -> Result<(), SimError> {
        self.with_context(id, |object, ctx| {
            object
                .as_any_mut()
                .downcast_mut::<PlayerAircraft>()
                .map(|aircraft| aircraft.game_over(outcome, ctx))
                .ok_or_else(|| SimError::ObjectNotFound(format!("{id} is not a player aircraft")))
        })?
    }

    pub fn get<T: SimulatedObject>(&self, id: ObjectId) -> Option<&T> {
        self.slot(id)?.object.as_any().downcast_ref::<T>()
    }

    pub fn get_mut<T: SimulatedObject>(&mut self, id: ObjectId) -> Option<&mut T> {
        self.slot_mut(id)?.object.as_any_mut().downcast_mut::<T>()
    }

    pub fn body(&self, id: ObjectId) -> Option<&RigidBodyComponent> {
        Some(self.slot(id)?.object.body())
    }

    /// Host physics writes positions back through here
    pub fn body_mut(&mut self, id: ObjectId) -> Option<&mut RigidBodyComponent> {
        Some(self.slot_mut(id)?.object.body_mut())
    }

    pub fn contains(&self, id: ObjectId) -> bool {
        self.slot(id).is_some()
    }

    pub fn ids(&self) -> impl Iterator<Item = ObjectId> + '_ {
        self.objects.iter().map(|slot| slot.id)
    }

    pub fn len(&self) -> usize {
        self.objects.len()
    }

    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }

    pub fn score(&self) -> &ScoreKeeper {
        &self.shared.score
    }

    pub fn hud(&self) -> &Hud {
        &self.shared.hud
    }

    /// Simulated time [s]
    pub fn time(&self) -> f64 {
        self.time
    }

    pub fn steps(&self) -> u64 {
        self.steps
    }

    pub fn timestep(&self) -> f64 {
        self.timestep
    }

    /// Hand accumulated events to the host
    pub fn drain_events(&mut self) -> Vec<SimEvent> {
        std::mem::take(&mut self.events)
    }

    fn slot(&self, id: ObjectId) -> Option<&Slot> {
        self.objects.iter().find(|slot| slot.id == id)
    }

    fn slot_mut(&mut self, id: ObjectId) -> Option<&mut Slot> {
        self.objects.iter_mut().find(|slot| slot.id == id)
    }

    fn with_context<R>(
        &mut self,
        id: ObjectId,
        f: impl FnOnce(&mut dyn SimulatedObject, &mut StepContext) -> R,
    ) -> Result<R, SimError> {
        let neutral = AxisState::neutral();
        self.start_pending(&neutral);

        let slot = self
            .objects
            .iter_mut()
            .find(|slot| slot.id == id)
            .ok_or_else(|| SimError::ObjectNotFound(id.to_string()))?;
        let mut ctx = self.shared.context(id, self.time, &neutral);
        let result = f(slot.object.as_mut(), &mut ctx);
        self.apply_commands();
        Ok(result)
    }

    fn start_pending(&mut self, input: &dyn AxisSource) {
        let mut started_any = false;
        for slot in self.objects.iter_mut().filter(|slot| !slot.started) {
            let mut ctx = self.shared.context(slot.id, self.time, input);
            slot.object.start(&mut ctx);
            slot.started = true;
            started_any = true;
        }
        if started_any {
            self.apply_commands();
        }
    }

    fn fire_timers(&mut self) {
        let now = self.time + TIMER_EPSILON;
        let (expired, pending): (Vec<Timer>, Vec<Timer>) =
            self.timers.drain(..).partition(|timer| timer.due <= now);
        self.timers = pending;

        for timer in expired {
            self.destroy(timer.id);
        }
    }

    fn apply_commands(&mut self) {
        for command in std::mem::take(&mut self.shared.commands) {
            match command {
                Command::Destroy { id, delay } if delay <= 0.0 => self.destroy(id),
                Command::Destroy { id, delay } => {
                    debug!("{} scheduled for removal in {}s", id, delay);
                    self.timers.push(Timer {
                        due: self.time + delay,
                        id,
                    });
                }
                Command::Emit(event) => self.events.push(event),
            }
        }
    }

    fn destroy(&mut self, id: ObjectId) {
        if let Some(object) = self.remove(id) {
            info!("destroyed {} ({})", object.name(), id);
            self.events.push(SimEvent::ObjectDestroyed {
                id,
                name: object.name().to_string(),
            });
        }
    }
}
