use bevy::ecs::system::SystemId;
use bevy::prelude::*;

use crate::config::GameConfig;
use crate::constants::{MUSIC_VOLUME, SOUND_EFFECTS_VOLUME};

/// Root node of the main-menu UI; entire tree is despawned on `OnExit(MainMenu)`.
#[derive(Component)]
pub struct MainMenuRoot;

/// Tags the "Play" button.
#[derive(Component)]
pub struct MenuPlayButton;

/// Tags the "Quit" button.
#[derive(Component)]
pub struct MenuQuitButton;

/// Root node of the loading screen; despawned on `OnExit(Loading)`.
#[derive(Component)]
pub struct LoadingScreenRoot;

/// Root node of the pause-menu overlay.
///
/// Spawned hidden on `OnEnter(Game)` and despawned on `OnExit(Game)`.
#[derive(Component)]
pub struct PausePanelRoot;

/// Per-panel wiring kept on [`PausePanelRoot`].
#[derive(Component, Debug, Clone, Copy)]
pub struct PausePanel {
    /// Registered one-shot system that shows this panel.  Handed to the
    /// options panel as its close callback.
    pub show: SystemId,
    /// Observer entities for `GamePaused` and `GameUnpaused`; despawned on
    /// teardown.
    pub subscriptions: [Entity; 2],
}

/// Tags the "Resume" button in the pause menu.
#[derive(Component)]
pub struct PauseResumeButton;

/// Tags the "Main Menu" button in the pause menu.
#[derive(Component)]
pub struct PauseMainMenuButton;

/// Tags the "Options" button in the pause menu.
#[derive(Component)]
pub struct PauseOptionsButton;

/// Tags the "Restart" button in the pause menu.
#[derive(Component)]
pub struct PauseRestartButton;

/// Tags the delivered-recipe count text in the pause menu.
#[derive(Component)]
pub struct RecipesDeliveredText;

/// Root node of the options overlay.
#[derive(Component)]
pub struct OptionsPanelRoot;

/// Tags the sound-effects volume button.
#[derive(Component)]
pub struct OptionsSoundEffectsButton;

/// Tags the music volume button.
#[derive(Component)]
pub struct OptionsMusicButton;

/// Tags the "Close" button in the options panel.
#[derive(Component)]
pub struct OptionsCloseButton;

/// Label showing the current sound-effects volume.
#[derive(Component)]
pub struct OptionsSoundEffectsText;

/// Label showing the current music volume.
#[derive(Component)]
pub struct OptionsMusicText;

/// Open the options panel.
///
/// `on_close` is run exactly once, after the options panel has hidden itself,
/// when the player closes it.  It is dropped without running if the game
/// unpauses or the scene changes first.
#[derive(Event, Debug, Clone, Copy)]
pub struct ShowOptions {
    pub on_close: SystemId,
}

/// Close callback of the currently open options panel, if any.
#[derive(Resource, Debug, Default)]
pub struct OptionsPanelState {
    pub on_close: Option<SystemId>,
}

/// Player volume preferences edited from the options panel.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct AudioSettings {
    pub sound_effects: f32,
    pub music: f32,
}

impl Default for AudioSettings {
    fn default() -> Self {
        Self {
            sound_effects: SOUND_EFFECTS_VOLUME,
            music: MUSIC_VOLUME,
        }
    }
}

impl AudioSettings {
    pub fn from_config(config: &GameConfig) -> Self {
        Self {
            sound_effects: config.sound_effects_volume,
            music: config.music_volume,
        }
    }

    /// Step `volume` up by `step`, wrapping to silence once it passes 1.0.
    pub fn cycle(volume: f32, step: f32) -> f32 {
        let next = volume + step;
        // Tolerate float drift so ten 0.1 steps still land on 1.0.
        if next > 1.0 + f32::EPSILON * 8.0 {
            0.0
        } else {
            next.min(1.0)
        }
    }

    /// Volume on the 0 – 10 scale shown in button labels.
    pub fn display_level(volume: f32) -> u32 {
        (volume * 10.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cycle_steps_up_then_wraps() {
        assert_eq!(AudioSettings::display_level(AudioSettings::cycle(0.3, 0.1)), 4);
        assert_eq!(AudioSettings::cycle(1.0, 0.1), 0.0);
    }

    #[test]
    fn ten_steps_reach_full_volume_before_wrapping() {
        let mut volume = 0.0;
        for _ in 0..10 {
            volume = AudioSettings::cycle(volume, 0.1);
        }
        assert_eq!(AudioSettings::display_level(volume), 10);
        assert_eq!(AudioSettings::cycle(volume, 0.1), 0.0);
    }
}
