use bevy::prelude::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BombConfig {
    /// Contact impulse above which the bomb goes off [N·s]
    pub threshold_impulse: f64,
    /// Delay between the explosion and removal of the bomb [s]
    pub fuse_delay: f64,
}

impl Default for BombConfig {
    fn default() -> Self {
        Self {
            threshold_impulse: 5.0,
            fuse_delay: 0.1,
        }
    }
}

#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BombState {
    /// Whether the radial blast effector is pushing nearby bodies
    pub effector_enabled: bool,
    /// Whether the bomb sprite is drawn
    pub visible: bool,
    pub exploded: bool,
}

impl Default for BombState {
    fn default() -> Self {
        Self {
            effector_enabled: false,
            visible: true,
            exploded: false,
        }
    }
}
