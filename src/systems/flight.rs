use crate::{
    components::{FlightConfig, FlightControls, FlightState},
    physics::RigidBody,
    utils::{attitude_from_euler_deg, forward_axis, lerp, SimError},
};

/// Arcade flight model.
///
/// Each step smooths roll, pitch and yaw towards their targets, then
/// overwrites the body's attitude and velocity. Nothing is integrated from
/// forces, so mass and the aerodynamic coefficients play no part.
#[derive(Debug, Clone)]
pub struct FlightIntegrator {
    config: FlightConfig,
    state: FlightState,
}

impl Default for FlightIntegrator {
    fn default() -> Self {
        Self {
            config: FlightConfig::default(),
            state: FlightState::default(),
        }
    }
}

impl FlightIntegrator {
    /// Fails when `config` is out of range, since the clamps in [`Self::step`]
    /// need ordered, finite limits.
    pub fn new(config: FlightConfig) -> Result<Self, SimError> {
        config.validate()?;
        Ok(Self {
            config,
            state: FlightState::default(),
        })
    }

    pub fn config(&self) -> &FlightConfig {
        &self.config
    }

    pub fn state(&self) -> &FlightState {
        &self.state
    }

    pub fn reset(&mut self) {
        self.state = FlightState::default();
    }

    /// Advance one fixed step and write the result to `body`.
    pub fn step<B: RigidBody + ?Sized>(&mut self, controls: FlightControls, body: &mut B) {
        self.update_state(controls);

        let attitude = attitude_from_euler_deg(self.state.pitch, self.state.yaw, self.state.roll);
        body.set_attitude(attitude);
        body.set_velocity(forward_axis(&attitude) * self.state.thrust);
    }

    fn update_state(&mut self, controls: FlightControls) {
        let config = &self.config;
        let weight = config.lerp_weight;
        let state = &mut self.state;

        // Roll chases an absolute target set by the stick.
        let target_roll = controls.roll * config.roll_range;
        state.roll =
            lerp(state.roll, target_roll, weight).clamp(-config.roll_range, config.roll_range);

        // Pitch chases a target relative to where it already is, so a held
        // stick keeps pitching until the range limit.
        let target_pitch = state.pitch + controls.pitch * config.pitch_range;
        state.pitch =
            lerp(state.pitch, target_pitch, weight).clamp(-config.pitch_range, config.pitch_range);

        // d(yaw)/dt = -roll * rotational_speed
        state.yaw = lerp(
            state.yaw,
            state.yaw - state.roll * config.rotational_speed,
            weight,
        );

        state.thrust = (state.thrust + controls.thrust).clamp(0.0, config.maximum_thrust);
    }
}
