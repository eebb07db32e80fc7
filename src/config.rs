//! Runtime game configuration loaded from `assets/game.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`].  At startup, [`load_game_config`] reads
//! `assets/game.toml` and overwrites the defaults with any values present in
//! the file.  Missing keys fall back to the compile-time defaults, so a minimal
//! TOML can override just the values you care about.
//!
//! Keep `src/constants.rs` in sync: it remains the **authoritative default**
//! source used by `GameConfig::default()`.

use crate::constants::*;
use crate::error::{validate_time_scale, validate_volume, validate_volume_step, GameResult};
use bevy::prelude::*;
use serde::Deserialize;

/// Path of the optional override file, relative to the working directory.
pub const GAME_CONFIG_PATH: &str = "assets/game.toml";

/// Runtime-tunable game configuration.
#[derive(Resource, Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Time ──────────────────────────────────────────────────────────────────
    pub normal_time_scale: f32,

    // ── Scene loading ─────────────────────────────────────────────────────────
    pub loading_screen_frames: u32,

    // ── Audio ─────────────────────────────────────────────────────────────────
    pub volume_step: f32,
    pub sound_effects_volume: f32,
    pub music_volume: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            normal_time_scale: NORMAL_TIME_SCALE,
            loading_screen_frames: LOADING_SCREEN_FRAMES,
            volume_step: VOLUME_STEP,
            sound_effects_volume: SOUND_EFFECTS_VOLUME,
            music_volume: MUSIC_VOLUME,
        }
    }
}

impl GameConfig {
    /// Parse a TOML document and validate every value in it.
    pub fn from_toml_str(contents: &str) -> Result<Self, String> {
        let config: GameConfig = toml::from_str(contents).map_err(|e| e.to_string())?;
        config.validate().map_err(|e| e.to_string())?;
        Ok(config)
    }

    /// Check every value against its safe range.
    pub fn validate(&self) -> GameResult<()> {
        validate_time_scale(self.normal_time_scale)?;
        validate_volume_step(self.volume_step)?;
        validate_volume("sound_effects_volume", self.sound_effects_volume)?;
        validate_volume("music_volume", self.music_volume)?;
        Ok(())
    }
}

/// Startup system: attempt to load `assets/game.toml` and overwrite the
/// `GameConfig` resource with any values present in the file.
///
/// Parse or validation errors are logged but do not abort the game.  A missing
/// file is not an error (defaults are already in place from `insert_resource`).
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    match std::fs::read_to_string(GAME_CONFIG_PATH) {
        Ok(contents) => match GameConfig::from_toml_str(&contents) {
            Ok(loaded) => {
                *config = loaded;
                info!("Loaded game config from {GAME_CONFIG_PATH}");
            }
            Err(e) => {
                warn!("Failed to load {GAME_CONFIG_PATH}: {e}; using defaults");
            }
        },
        Err(_) => {
            info!("No {GAME_CONFIG_PATH} found; using compiled defaults");
        }
    }
}
