//! Compile-time defaults for every value in [`crate::config::GameConfig`].
//!
//! `GameConfig::default()` reads from here; `assets/game.toml` can override
//! any subset at startup.

// ── Time ──────────────────────────────────────────────────────────────────────

/// Relative speed of `Time<Virtual>` during normal play.
pub const NORMAL_TIME_SCALE: f32 = 1.0;

/// Upper bound accepted for `normal_time_scale`; faster clocks make the
/// kitchen timers unplayable.
pub const MAX_TIME_SCALE: f32 = 4.0;

// ── Scene loading ─────────────────────────────────────────────────────────────

/// Update frames the loading screen stays up before the target scene is entered.
pub const LOADING_SCREEN_FRAMES: u32 = 1;

// ── Audio ─────────────────────────────────────────────────────────────────────

/// Increment applied by the options-panel volume buttons.
pub const VOLUME_STEP: f32 = 0.1;

/// Initial sound-effects volume (0.0 – 1.0).
pub const SOUND_EFFECTS_VOLUME: f32 = 1.0;

/// Initial music volume (0.0 – 1.0).
pub const MUSIC_VOLUME: f32 = 0.3;
