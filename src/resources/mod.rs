pub mod config;
mod hud;
mod input;
mod score;

pub use config::SimulationConfig;
pub use hud::{format_status, Hud};
pub use input::{Axis, AxisSource, AxisState};
pub use score::ScoreKeeper;
