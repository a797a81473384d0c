use bevy::prelude::Resource;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::{
    components::{BombConfig, FlightConfig, TargetBoxConfig},
    utils::{SimError, DEFAULT_TIMESTEP},
};

#[derive(Resource, Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SimulationConfig {
    /// Fixed physics step [s]
    pub timestep: f64,
    pub flight: FlightConfig,
    pub bomb: BombConfig,
    pub target: TargetBoxConfig,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            timestep: DEFAULT_TIMESTEP,
            flight: FlightConfig::default(),
            bomb: BombConfig::default(),
            target: TargetBoxConfig::default(),
        }
    }
}

impl SimulationConfig {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, SimError> {
        let file = std::fs::File::open(path)?;
        let config: Self = serde_yaml::from_reader(file)?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_yaml(yaml: &str) -> Result<Self, SimError> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    pub fn save<P: AsRef<Path>>(&self, path: P) -> Result<(), SimError> {
        let file = std::fs::File::create(path)?;
        serde_yaml::to_writer(file, self)?;
        Ok(())
    }

    pub fn validate(&self) -> Result<(), SimError> {
        if !(self.timestep > 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "timestep must be positive, got {}",
                self.timestep
            )));
        }
        self.flight.validate()?;
        if !(self.bomb.threshold_impulse >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "bomb threshold_impulse must not be negative, got {}",
                self.bomb.threshold_impulse
            )));
        }
        if !(self.bomb.fuse_delay >= 0.0) {
            return Err(SimError::InvalidConfig(format!(
                "bomb fuse_delay must not be negative, got {}",
                self.bomb.fuse_delay
            )));
        }
        Ok(())
    }
}
