//! Player-facing settings, loaded from JSON text.
//!
//! Every section is `#[serde(default)]` so a partial file still loads, and
//! out-of-range values are clamped after parsing.

use super::constants::*;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Difficulty {
    Easy,
    #[default]
    Normal,
    Hard,
}

impl Difficulty {
    /// Scales monster damage at spawn time.
    pub fn damage_multiplier(&self) -> f64 {
        match self {
            Difficulty::Easy => 0.75,
            Difficulty::Normal => 1.0,
            Difficulty::Hard => 1.25,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AudioSettings {
    pub music_volume: f64,
    pub sound_volume: f64,
    pub muted: bool,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            music_volume: 0.7,
            sound_volume: 0.8,
            muted: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameplaySettings {
    pub difficulty: Difficulty,
    pub autosave: bool,
    pub autosave_interval_seconds: f64,
}

impl Default for GameplaySettings {
    fn default() -> Self {
        Self {
            difficulty: Difficulty::Normal,
            autosave: true,
            autosave_interval_seconds: DEFAULT_AUTOSAVE_INTERVAL_SECONDS,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub audio: AudioSettings,
    pub gameplay: GameplaySettings,
}

fn clamp_or(value: f64, min: f64, max: f64, fallback: f64) -> f64 {
    if value.is_finite() {
        value.clamp(min, max)
    } else {
        fallback
    }
}

impl GameConfig {
    /// Parses config text. Malformed text yields the defaults.
    pub fn from_json_str(text: &str) -> Self {
        match serde_json::from_str::<GameConfig>(text) {
            Ok(mut config) => {
                config.clamp();
                config
            }
            Err(e) => {
                tracing::warn!(error = %e, "invalid config, using defaults");
                Self::default()
            }
        }
    }

    pub fn clamp(&mut self) {
        let defaults = GameConfig::default();
        self.audio.music_volume =
            clamp_or(self.audio.music_volume, 0.0, 1.0, defaults.audio.music_volume);
        self.audio.sound_volume =
            clamp_or(self.audio.sound_volume, 0.0, 1.0, defaults.audio.sound_volume);
        self.gameplay.autosave_interval_seconds = clamp_or(
            self.gameplay.autosave_interval_seconds,
            MIN_AUTOSAVE_INTERVAL_SECONDS,
            MAX_AUTOSAVE_INTERVAL_SECONDS,
            DEFAULT_AUTOSAVE_INTERVAL_SECONDS,
        );
    }

    pub fn to_json_string(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
