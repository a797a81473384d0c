pub mod config;
pub mod state;

pub use config::{AerodynamicCoefficients, FlightConfig};
pub use state::{FlightControls, FlightState};
