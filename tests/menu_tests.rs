//! Headless unit tests for the [`GameScene`] state machine and the loader.
//!
//! These tests use [`MinimalPlugins`] (no window, no rendering),
//! so they run fast and deterministically in CI.
//!
//! Covered scenarios:
//! 1. Default initial scene is `MainMenu`.
//! 2. A `LoadSceneRequest` hops through `Loading` before entering the target.
//! 3. `Loading` itself cannot be requested.
//! 4. The main-menu Play button loads the game scene.
//! 5. `Game` persists across frames with no new request.

use bevy::prelude::*;
use bevy::state::app::StatesPlugin;
use kitchen_chaos::loader::{GameScene, LoadSceneRequest, Loader};
use kitchen_chaos::menu::MenuPlayButton;
use kitchen_chaos::KitchenPlugins;

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Build a minimal headless app with every kitchen plugin.
///
/// `MinimalPlugins` provides the required scheduling infrastructure.
/// `StatesPlugin` adds the `StateTransition` schedule needed by `init_state`.
/// No window or rendering is created.
fn headless_app() -> App {
    let mut app = App::new();
    app.add_plugins((MinimalPlugins, StatesPlugin));
    app.init_resource::<ButtonInput<KeyCode>>();
    app.add_plugins(KitchenPlugins);
    app
}

fn scene(app: &App) -> GameScene {
    *app.world().resource::<State<GameScene>>().get()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

/// The default variant of `GameScene` is `MainMenu`.
#[test]
fn default_scene_is_main_menu() {
    let mut app = headless_app();
    app.update(); // run one frame so StateTransition fires
    assert_eq!(scene(&app), GameScene::MainMenu, "initial scene must be MainMenu");
}

/// A load request shows the loading screen for the configured frames, then
/// enters the target.
#[test]
fn load_request_passes_through_loading() {
    let mut app = headless_app();
    app.update();

    app.world_mut()
        .write_message(LoadSceneRequest(GameScene::Game));
    app.update(); // request consumed in PostUpdate
    assert_eq!(
        app.world().resource::<Loader>().target,
        Some(GameScene::Game)
    );

    app.update(); // StateTransition → Loading; loading frame counts down
    assert_eq!(scene(&app), GameScene::Loading);

    app.update(); // loader hands over to the target
    app.update(); // StateTransition → Game
    assert_eq!(scene(&app), GameScene::Game);
    assert_eq!(app.world().resource::<Loader>().target, None);
}

/// Requesting the loading screen directly is ignored.
#[test]
fn loading_scene_cannot_be_requested() {
    let mut app = headless_app();
    app.update();

    app.world_mut()
        .write_message(LoadSceneRequest(GameScene::Loading));
    app.update();
    app.update();

    assert_eq!(scene(&app), GameScene::MainMenu);
    assert_eq!(app.world().resource::<Loader>().target, None);
}

/// Pressing Play on the main menu requests the game scene.
#[test]
fn play_button_loads_game() {
    let mut app = headless_app();
    app.update();

    let mut buttons = app
        .world_mut()
        .query_filtered::<Entity, With<MenuPlayButton>>();
    let play = buttons.single(app.world()).expect("one Play button");
    app.world_mut().entity_mut(play).insert(Interaction::Pressed);

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(scene(&app), GameScene::Game);
}

/// `Game` persists across additional frames with no accidental reversion.
#[test]
fn game_scene_persists_across_frames() {
    let mut app = headless_app();
    app.update();

    app.world_mut()
        .resource_mut::<NextState<GameScene>>()
        .set(GameScene::Game);
    app.update();

    for _ in 0..5 {
        app.update();
    }
    assert_eq!(
        scene(&app),
        GameScene::Game,
        "Game must remain stable without a new request"
    );
}
