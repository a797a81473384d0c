use bevy::log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::any::Any;

use super::{SimEvent, SimulatedObject, StepContext};
use crate::{
    components::{ColliderTag, Collision, FlightConfig, FlightState, RigidBodyComponent},
    physics::RigidBody,
    resources::format_status,
    systems::FlightIntegrator,
    utils::{SimError, CRASH_MESSAGE, WIN_MESSAGE},
};

/// How a flight ended
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameOutcome {
    Win,
    Crash,
}

impl GameOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            GameOutcome::Win => WIN_MESSAGE,
            GameOutcome::Crash => CRASH_MESSAGE,
        }
    }
}

/// Player-controlled aircraft flown by the arcade flight model
pub struct PlayerAircraft {
    name: String,
    flight: FlightIntegrator,
    body: RigidBodyComponent,
    outcome: Option<GameOutcome>,
    ended_at: Option<f64>,
}

impl Default for PlayerAircraft {
    fn default() -> Self {
        Self {
            name: "player".to_string(),
            flight: FlightIntegrator::default(),
            body: RigidBodyComponent::default(),
            outcome: None,
            ended_at: None,
        }
    }
}

impl PlayerAircraft {
    pub fn new(config: FlightConfig, body: RigidBodyComponent) -> Result<Self, SimError> {
        Ok(Self {
            name: "player".to_string(),
            flight: FlightIntegrator::new(config)?,
            body,
            outcome: None,
            ended_at: None,
        })
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn state(&self) -> &FlightState {
        self.flight.state()
    }

    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Simulated time [s] at which the game ended
    pub fn ended_at(&self) -> Option<f64> {
        self.ended_at
    }

    pub fn is_game_over(&self) -> bool {
        self.outcome.is_some()
    }

    /// Freeze the aircraft and show the result. Only the first call counts.
    pub fn game_over(&mut self, outcome: GameOutcome, ctx: &mut StepContext) {
        if let Some(previous) = self.outcome {
            warn!(
                "{}: game over ({:?}) ignored, already ended with {:?}",
                self.name, outcome, previous
            );
            return;
        }

        info!("{}: game over at t={:.2}s, {:?}", self.name, ctx.time, outcome);
        self.outcome = Some(outcome);
        self.ended_at = Some(ctx.time);
        self.body.freeze();
        ctx.hud.set_game_over(outcome.message());
        ctx.emit(SimEvent::GameOver {
            id: ctx.id,
            outcome,
        });
    }
}

impl SimulatedObject for PlayerAircraft {
    fn name(&self) -> &str {
        &self.name
    }

    fn body(&self) -> &RigidBodyComponent {
        &self.body
    }

    fn body_mut(&mut self) -> &mut RigidBodyComponent {
        &mut self.body
    }

    fn start(&mut self, _ctx: &mut StepContext) {
        self.flight.reset();
        let launch = self.body.forward() * self.flight.config().initial_speed;
        self.body.set_velocity(launch);
        debug!("{}: launched at {:?}", self.name, launch);
    }

    fn fixed_update(&mut self, ctx: &mut StepContext) {
        if self.outcome.is_some() {
            return;
        }
        let controls = ctx.input.flight_controls();
        self.flight.step(controls, &mut self.body);
    }

    fn update(&mut self, ctx: &mut StepContext) {
        ctx.hud.set_status(format_status(
            self.body.velocity().norm(),
            self.body.position().y,
            self.flight.state().thrust,
        ));
    }

    fn on_collision_enter(&mut self, collision: &Collision, ctx: &mut StepContext) {
        match collision.other {
            ColliderTag::Goal => self.game_over(GameOutcome::Win, ctx),
            ColliderTag::Ground => self.game_over(GameOutcome::Crash, ctx),
            _ => {}
        }
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn as_any_mut(&mut self) -> &mut dyn Any {
        self
    }
}
