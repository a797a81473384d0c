pub const DEFAULT_TIMESTEP: f64 = 1.0 / 50.0; // Fixed physics step [s]

pub const MIN_LERP_WEIGHT: f64 = 0.01;
pub const MAX_LERP_WEIGHT: f64 = 1.0;

// HUD text
pub const WIN_MESSAGE: &str = "You Win!";
pub const CRASH_MESSAGE: &str = "OOPS";
