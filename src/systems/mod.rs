mod controller;
mod flight;
mod host;

pub use controller::keyboard_axes_system;
pub use flight::FlightIntegrator;
pub use host::{
    driver_fixed_step_system, driver_frame_system, hud_text_system, log_simulation_events,
    spawn_hud, spawn_player_marker, sync_player_transform_system, to_quat, to_vec3,
    GameOverText, PlayerAircraftMarker, PlayerHandle, SimulationEvent, StatusText,
};
