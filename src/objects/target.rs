use bevy::log::info;
use std::any::Any;

use super::{SimEvent, SimulatedObject, StepContext};
use crate::components::{
    ColliderTag, Collision, RigidBodyComponent, TargetBoxConfig, TargetState,
};

/// Scores once it is knocked off screen or lands on the ground
pub struct TargetBox {
    name: String,
    config: TargetBoxConfig,
    state: TargetState,
    body: RigidBodyComponent,
}

impl TargetBox {
    /// The body takes its mass from `config`.
    pub fn new(config: TargetBoxConfig, body: RigidBodyComponent) -> Self {
        Self {
            name: "target".to_string(),
            state: TargetState::default(),
            body: body.with_mass(config.mass),
            config,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn state(&self) -> &TargetState {
        &self.state
    }

    fn scored(&mut self, ctx: &mut StepContext) {
        if self.state.scored {
            return;
        }
        self.state.scored = true;
        self.state.color = self.config.scored_color;

        let points = self.body.mass;
        ctx.score.add(points);
        info!(
            "{}: scored {} (total {})",
            self.name,
            points,
            ctx.score.total()
        );
        ctx.emit(SimEvent::Scored { id: ctx.id, points });
    }
}

impl SimulatedObject for TargetBox {
    fn name(&self) -> &str {
        &self.name
    }

    fn body(&self) -> &RigidBodyComponent {
        &self.body
    }

    fn body_mut(&mut self) -> &mut RigidBodyComponent {
        &mut self.body
    }

    fn update(&mut self, ctx: &mut StepContext) {
        if self.body.position.x > self.config.off_screen_x {
            self.scored(ctx);
        }
    }

    fn on_collision_enter(&mut self, collision: &Collision, ctx: &mut StepContext) {
        if collision.other == ColliderTag::Ground {
            self.scored(ctx);
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
