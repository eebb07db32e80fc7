//! Kitchen game manager. Owns the game-wide pause flag.
//!
//! Anything that wants to pause writes a [`TogglePause`] message; the pause
//! menu's Resume button writes [`ResumeGame`].
//! [`apply_pause_toggles`] flips the flag, freezes or releases
//! `Time<Virtual>`, and triggers [`GamePaused`] / [`GameUnpaused`] for
//! observers such as the pause menu.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::loader::GameScene;

/// Request to flip the pause flag.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct TogglePause;

/// Request to leave the paused state.  Ignored while the game is running, so
/// a resume that lands in the same frame as a toggle cannot re-pause.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct ResumeGame;

/// Triggered when the game enters the paused state.
#[derive(Event, Debug, Clone, Copy)]
pub struct GamePaused;

/// Triggered when the game leaves the paused state.
#[derive(Event, Debug, Clone, Copy)]
pub struct GameUnpaused;

/// Outcome of a single [`KitchenGameManager::toggle_pause`] call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PauseTransition {
    Paused,
    Unpaused,
}

#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct KitchenGameManager {
    paused: bool,
}

impl KitchenGameManager {
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// Flip the pause flag and report which way it went.
    pub fn toggle_pause(&mut self) -> PauseTransition {
        self.paused = !self.paused;
        if self.paused {
            PauseTransition::Paused
        } else {
            PauseTransition::Unpaused
        }
    }

    /// Clear the pause flag; `None` if the game was already running.
    pub fn resume(&mut self) -> Option<PauseTransition> {
        if self.paused {
            self.paused = false;
            Some(PauseTransition::Unpaused)
        } else {
            None
        }
    }
}

pub struct GameManagerPlugin;

impl Plugin for GameManagerPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<TogglePause>()
            .add_message::<ResumeGame>()
            .init_resource::<KitchenGameManager>()
            .add_systems(OnEnter(GameScene::Game), reset_kitchen_game_manager)
            .add_systems(OnExit(GameScene::Game), reset_kitchen_game_manager)
            .add_systems(
                Update,
                (
                    pause_input_system.before(apply_pause_toggles),
                    apply_pause_toggles,
                )
                    .run_if(in_state(GameScene::Game)),
            );
    }
}

/// ESC during gameplay → toggle pause.
pub fn pause_input_system(keys: Res<ButtonInput<KeyCode>>, mut toggles: MessageWriter<TogglePause>) {
    if keys.just_pressed(KeyCode::Escape) {
        toggles.write(TogglePause);
    }
}

/// Consume pause toggles and resumes, keep `Time<Virtual>` in step with the
/// flag, and notify observers.
///
/// Toggles are applied before resumes, so ESC and a Resume click in the same
/// frame leave the game running.
pub fn apply_pause_toggles(
    mut commands: Commands,
    mut toggles: MessageReader<TogglePause>,
    mut resumes: MessageReader<ResumeGame>,
    mut manager: ResMut<KitchenGameManager>,
    mut time: ResMut<Time<Virtual>>,
) {
    for _ in toggles.read() {
        let transition = manager.toggle_pause();
        announce(transition, &mut time, &mut commands);
    }
    for _ in resumes.read() {
        if let Some(transition) = manager.resume() {
            announce(transition, &mut time, &mut commands);
        }
    }
}

fn announce(transition: PauseTransition, time: &mut Time<Virtual>, commands: &mut Commands) {
    match transition {
        PauseTransition::Paused => {
            time.pause();
            info!("Game paused");
            commands.trigger(GamePaused);
        }
        PauseTransition::Unpaused => {
            time.unpause();
            info!("Game unpaused");
            commands.trigger(GameUnpaused);
        }
    }
}

/// A fresh (or abandoned) game session is never paused.
pub fn reset_kitchen_game_manager(
    mut manager: ResMut<KitchenGameManager>,
    mut time: ResMut<Time<Virtual>>,
    config: Res<GameConfig>,
) {
    *manager = KitchenGameManager::default();
    time.unpause();
    time.set_relative_speed(config.normal_time_scale);
}
