use serde::{Deserialize, Serialize};

/// Running score for a session
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreKeeper {
    total: f64,
    hits: u32,
}

impl ScoreKeeper {
    pub fn add(&mut self, points: f64) {
        self.total += points;
        self.hits += 1;
    }

    pub fn total(&self) -> f64 {
        self.total
    }

    /// Number of times points were added
    pub fn hits(&self) -> u32 {
        self.hits
    }
}
