//! Save text codec.
//!
//! The payload is the JSON of [`SaveData`], wrapped in an envelope carrying
//! the format version, a timestamp, and a SHA-256 checksum over version and
//! payload. Writing the text somewhere is the caller's business.

use crate::character::Player;
use crate::core::constants::SAVE_FORMAT_VERSION;
use crate::core::context::GameContext;
use crate::core::game_state::GameState;
use crate::quests::QuestTracker;
use crate::zones::{ZoneId, ZoneSnapshot};
use rand::Rng;
use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SaveError {
    #[error("save text is not valid: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("unsupported save version {found}")]
    UnsupportedVersion { found: u32 },
    #[error("save checksum does not match its contents")]
    ChecksumMismatch,
}

/// Everything that outlives a session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveData {
    pub player: Player,
    pub quests: QuestTracker,
    pub current_zone: ZoneId,
    pub zones: Vec<ZoneSnapshot>,
    #[serde(default)]
    pub play_time: f64,
}

impl SaveData {
    pub fn capture(state: &GameState) -> Self {
        Self {
            player: state.player.clone(),
            quests: state.quests.clone(),
            current_zone: state.world.current_zone,
            zones: state.world.snapshots(),
            play_time: state.play_time,
        }
    }

    fn normalize(&mut self) {
        self.player.normalize();
        self.quests.normalize();
        if !self.play_time.is_finite() || self.play_time < 0.0 {
            self.play_time = 0.0;
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Envelope {
    version: u32,
    saved_at: String,
    checksum: String,
    payload: String,
}

fn checksum(version: u32, payload: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(version.to_le_bytes());
    hasher.update(payload.as_bytes());
    hasher
        .finalize()
        .iter()
        .map(|byte| format!("{:02x}", byte))
        .collect()
}

/// Serializes the persistent part of `state` into save text.
pub fn serialize(state: &GameState) -> Result<String, SaveError> {
    let payload = serde_json::to_string(&SaveData::capture(state))?;
    let envelope = Envelope {
        version: SAVE_FORMAT_VERSION,
        saved_at: chrono::Utc::now().to_rfc3339(),
        checksum: checksum(SAVE_FORMAT_VERSION, &payload),
        payload,
    };
    Ok(serde_json::to_string(&envelope)?)
}

/// Parses save text. Checks the version, then the checksum, then the
/// payload, and re-establishes invariants on what it loaded.
pub fn deserialize(text: &str) -> Result<SaveData, SaveError> {
    let envelope: Envelope = serde_json::from_str(text)?;
    if envelope.version != SAVE_FORMAT_VERSION {
        return Err(SaveError::UnsupportedVersion {
            found: envelope.version,
        });
    }
    if checksum(envelope.version, &envelope.payload) != envelope.checksum {
        return Err(SaveError::ChecksumMismatch);
    }
    let mut data: SaveData = serde_json::from_str(&envelope.payload)?;
    data.normalize();
    Ok(data)
}

/// Restores a game from save text, or starts a fresh one if the text is
/// missing or unusable.
pub fn restore_or_new(text: &str, ctx: &GameContext, rng: &mut impl Rng) -> GameState {
    match deserialize(text) {
        Ok(data) => GameState::from_save(data, ctx),
        Err(e) => {
            tracing::warn!(error = %e, "could not restore save, starting a new game");
            GameState::new_game(ctx, rng)
        }
    }
}
