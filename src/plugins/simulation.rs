use bevy::prelude::*;

use crate::{
    components::RigidBodyComponent,
    driver::StepDriver,
    objects::PlayerAircraft,
    resources::{AxisState, SimulationConfig},
    systems::{
        driver_fixed_step_system, driver_frame_system, hud_text_system, keyboard_axes_system,
        log_simulation_events, spawn_hud, spawn_player_marker, sync_player_transform_system,
        PlayerHandle, SimulationEvent,
    },
};

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SimulationSet {
    Input,
    Step,
}

/// Hosts a [`StepDriver`] inside a Bevy app.
///
/// The driver ticks on `FixedUpdate` at the configured timestep and runs its
/// frame callbacks on `Update`. A player aircraft is registered at build time.
pub struct SimulationPlugin {
    config: SimulationConfig,
    hud: bool,
}

impl SimulationPlugin {
    pub fn new(config: SimulationConfig) -> Self {
        Self { config, hud: true }
    }

    /// Skip spawning UI text, for headless apps and tests
    pub fn without_hud(mut self) -> Self {
        self.hud = false;
        self
    }
}

impl Default for SimulationPlugin {
    fn default() -> Self {
        Self::new(SimulationConfig::default())
    }
}

impl Plugin for SimulationPlugin {
    fn build(&self, app: &mut App) {
        let built = self.config.validate().and_then(|()| {
            PlayerAircraft::new(self.config.flight, RigidBodyComponent::default())
        });
        let (config, aircraft) = match built {
            Ok(aircraft) => (self.config.clone(), aircraft),
            Err(e) => {
                error!(
                    "Invalid simulation config: {:?}. Falling back to defaults",
                    e
                );
                (SimulationConfig::default(), PlayerAircraft::default())
            }
        };

        let mut driver = StepDriver::new(config.timestep);
        let player = driver.add(aircraft);

        app.insert_resource(driver)
            .insert_resource(PlayerHandle(player))
            .insert_resource(Time::<Fixed>::from_seconds(config.timestep))
            .insert_resource(config)
            .init_resource::<AxisState>()
            .init_resource::<ButtonInput<KeyCode>>()
            .add_event::<SimulationEvent>()
            .configure_sets(
                FixedUpdate,
                (SimulationSet::Input, SimulationSet::Step).chain(),
            )
            .add_systems(Startup, spawn_player_marker)
            .add_systems(
                FixedUpdate,
                (
                    keyboard_axes_system.in_set(SimulationSet::Input),
                    driver_fixed_step_system.in_set(SimulationSet::Step),
                ),
            )
            .add_systems(
                Update,
                (
                    driver_frame_system,
                    sync_player_transform_system,
                    log_simulation_events,
                )
                    .chain(),
            );

        if self.hud {
            app.add_systems(Startup, spawn_hud)
                .add_systems(Update, hud_text_system.after(driver_frame_system));
        }
    }
}
