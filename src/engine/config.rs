use serde::{Deserialize, Serialize};

/// Tunable engine parameters. Piece values keep the 3:2 king:man ratio the
/// evaluation contract requires; depths back the medium and hard
/// difficulty levels.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    pub val_man: f32,
    pub val_king: f32,
    pub depth_medium: u8,
    pub depth_hard: u8,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            val_man: 1.0,
            val_king: 1.5,
            depth_medium: 3,
            depth_hard: 5,
        }
    }
}

impl EngineConfig {
    /// Loads a configuration from JSON; absent fields fall back to their
    /// defaults.
    pub fn load_from_json(json_str: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json_str)
    }
}
