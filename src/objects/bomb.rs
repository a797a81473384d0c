use bevy::log::{debug, info};
use std::any::Any;

use super::{SimEvent, SimulatedObject, StepContext};
use crate::components::{BombConfig, BombState, Collision, RigidBodyComponent};

/// Explodes when struck harder than its threshold impulse
pub struct Bomb {
    name: String,
    config: BombConfig,
    state: BombState,
    body: RigidBodyComponent,
}

impl Bomb {
    pub fn new(config: BombConfig, body: RigidBodyComponent) -> Self {
        Self {
            name: "bomb".to_string(),
            config,
            state: BombState::default(),
            body,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn state(&self) -> &BombState {
        &self.state
    }

    fn boom(&mut self, ctx: &mut StepContext) {
        info!(
            "{}: boom at {:?}, t={:.2}s",
            self.name, self.body.position, ctx.time
        );
        self.state.exploded = true;
        self.state.effector_enabled = true;
        self.state.visible = false;
        ctx.emit(SimEvent::ExplosionSpawned {
            source: ctx.id,
            position: self.body.position,
        });
        ctx.destroy_self_after(self.config.fuse_delay);
    }
}

impl SimulatedObject for Bomb {
    fn name(&self) -> &str {
        &self.name
    }

    fn body(&self) -> &RigidBodyComponent {
        &self.body
    }

    fn body_mut(&mut self) -> &mut RigidBodyComponent {
        &mut self.body
    }

    fn on_collision_enter(&mut self, collision: &Collision, ctx: &mut StepContext) {
        if self.state.exploded {
            return;
        }
        let hard_hit = collision
            .contacts
            .iter()
            .any(|hit| hit.normal_impulse > self.config.threshold_impulse);
        if hard_hit {
            self.boom(ctx);
        } else {
            debug!(
                "{}: contact with {:?} below threshold ({:?})",
                self.name,
                collision.other,
                collision.max_normal_impulse()
            );
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
