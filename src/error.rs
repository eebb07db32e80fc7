//! Game-level error types.
//!
//! Setup systems return these through Bevy's system `Result` so that a broken
//! app configuration fails fast through the default error handler instead of
//! limping along with a half-wired UI.

use std::fmt;

use crate::constants::MAX_TIME_SCALE;
use crate::loader::GameScene;

/// Top-level error enum for the kitchen game.
#[derive(Debug, Clone, PartialEq)]
pub enum GameError {
    /// A resource the caller cannot work without was never inserted.
    /// Usually means a plugin was left out of the `App`.
    MissingCollaborator {
        /// Type name of the missing resource.
        name: &'static str,
    },

    /// Config value is outside its safe operating range.
    UnsafeConstant {
        /// Name of the config key (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// A scene that cannot be the target of a load request.
    InvalidSceneRequest {
        /// The scene that was requested.
        scene: GameScene,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::MissingCollaborator { name } => write!(
                f,
                "missing collaborator `{}`; is its plugin added to the app?",
                name
            ),
            GameError::UnsafeConstant {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "config '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            GameError::InvalidSceneRequest { scene } => {
                write!(f, "scene {:?} cannot be loaded directly", scene)
            }
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if `value` is not a usable relative speed for `Time<Virtual>`.
pub fn validate_time_scale(value: f32) -> GameResult<()> {
    if value <= 0.0 || value > MAX_TIME_SCALE || value.is_nan() {
        Err(GameError::UnsafeConstant {
            name: "normal_time_scale",
            value,
            safe_range: "(0.0, 4.0]",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if `value` cannot step a 0.0 – 1.0 volume.
pub fn validate_volume_step(value: f32) -> GameResult<()> {
    if value <= 0.0 || value > 1.0 || value.is_nan() {
        Err(GameError::UnsafeConstant {
            name: "volume_step",
            value,
            safe_range: "(0.0, 1.0]",
        })
    } else {
        Ok(())
    }
}

/// Returns an error if `value` is not a volume in 0.0 – 1.0.
pub fn validate_volume(name: &'static str, value: f32) -> GameResult<()> {
    if !(0.0..=1.0).contains(&value) {
        Err(GameError::UnsafeConstant {
            name,
            value,
            safe_range: "[0.0, 1.0]",
        })
    } else {
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn time_scale_bounds() {
        assert!(validate_time_scale(1.0).is_ok());
        assert!(validate_time_scale(MAX_TIME_SCALE).is_ok());
        assert!(validate_time_scale(0.0).is_err());
        assert!(validate_time_scale(-1.0).is_err());
        assert!(validate_time_scale(f32::NAN).is_err());
        assert!(validate_time_scale(MAX_TIME_SCALE + 0.5).is_err());
    }

    #[test]
    fn volume_step_bounds() {
        assert!(validate_volume_step(0.1).is_ok());
        assert!(validate_volume_step(1.0).is_ok());
        assert!(validate_volume_step(0.0).is_err());
        assert!(validate_volume_step(1.5).is_err());
    }

    #[test]
    fn missing_collaborator_names_the_type() {
        let err = GameError::MissingCollaborator {
            name: "KitchenGameManager",
        };
        assert!(err.to_string().contains("KitchenGameManager"));
    }
}
