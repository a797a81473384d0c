use serde::{Deserialize, Serialize};

use crate::utils::format_fixed;

/// Text shown to the player
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hud {
    pub status: String,
    pub game_over: Option<String>,
}

impl Hud {
    pub fn set_status(&mut self, status: String) {
        self.status = status;
    }

    pub fn set_game_over(&mut self, message: &str) {
        self.game_over = Some(message.to_string());
    }
}

/// Status line for the flight HUD
pub fn format_status(speed: f64, altitude: f64, thrust: f64) -> String {
    format!(
        "Speed: {}    altitude: {}    Thrust {}",
        format_fixed(speed, 2, 2),
        format_fixed(altitude, 2, 2),
        format_fixed(thrust, 1, 1),
    )
}
