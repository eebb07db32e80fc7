//! Scene loader: `GameScene` states and the load-by-identifier request.
//!
//! ## States
//!
//! | State      | Description                                        |
//! |------------|----------------------------------------------------|
//! | `MainMenu` | Initial state; main menu shown                     |
//! | `Loading`  | Loading screen shown between any two scenes        |
//! | `Game`     | Kitchen gameplay; pause and options panels live here |
//!
//! Every load hops through `Loading`, so requesting the scene that is already
//! active (restart) still runs its full `OnExit` / `OnEnter` cycle.

use bevy::prelude::*;

use crate::config::GameConfig;
use crate::error::GameError;

/// Top-level scene state machine.
#[derive(States, Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameScene {
    /// Main menu; shown on startup.
    #[default]
    MainMenu,
    /// Transitional loading screen.
    Loading,
    /// Kitchen gameplay.
    Game,
}

/// Ask the loader to transition to the given scene.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoadSceneRequest(pub GameScene);

/// Pending load target and how long the loading screen has left.
#[derive(Resource, Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Loader {
    pub target: Option<GameScene>,
    pub frames_remaining: u32,
}

pub struct LoaderPlugin;

impl Plugin for LoaderPlugin {
    fn build(&self, app: &mut App) {
        app.init_state::<GameScene>()
            .add_message::<LoadSceneRequest>()
            .init_resource::<Loader>()
            .init_resource::<GameConfig>()
            .add_systems(OnEnter(GameScene::Loading), start_loading_screen)
            .add_systems(
                Update,
                loader_callback.run_if(in_state(GameScene::Loading)),
            )
            // PostUpdate so requests written by Update button systems are
            // picked up in the same frame.
            .add_systems(PostUpdate, handle_load_requests);
    }
}

/// Record the newest valid request and switch to the loading screen.
pub fn handle_load_requests(
    mut requests: MessageReader<LoadSceneRequest>,
    mut loader: ResMut<Loader>,
    mut next_state: ResMut<NextState<GameScene>>,
) {
    for LoadSceneRequest(scene) in requests.read() {
        if *scene == GameScene::Loading {
            warn!("{}", GameError::InvalidSceneRequest { scene: *scene });
            continue;
        }
        info!("Loading scene {:?}", scene);
        loader.target = Some(*scene);
        next_state.set(GameScene::Loading);
    }
}

fn start_loading_screen(mut loader: ResMut<Loader>, config: Res<GameConfig>) {
    loader.frames_remaining = config.loading_screen_frames;
}

/// Let the loading screen render for the configured number of frames, then
/// enter the target scene.
pub fn loader_callback(mut loader: ResMut<Loader>, mut next_state: ResMut<NextState<GameScene>>) {
    if loader.frames_remaining > 0 {
        loader.frames_remaining -= 1;
        return;
    }
    match loader.target.take() {
        Some(scene) => next_state.set(scene),
        None => {
            warn!("Loading screen entered without a target; returning to main menu");
            next_state.set(GameScene::MainMenu);
        }
    }
}
