//! Menu screens: main menu, loading screen, pause panel and options panel.
//!
//! ## Systems (registered by `MenuPlugin`)
//!
//! | System                           | Schedule                 | Purpose                              |
//! |----------------------------------|--------------------------|--------------------------------------|
//! | `setup_main_menu`                | `OnEnter(MainMenu)`      | Spawn main-menu UI                   |
//! | `restore_normal_time`            | `OnEnter(MainMenu)`      | Unfreeze the virtual clock           |
//! | `menu_button_system`             | `Update / in MainMenu`   | Handle Play / Quit clicks            |
//! | `setup_loading_screen`           | `OnEnter(Loading)`       | Spawn loading text                   |
//! | `setup_pause_panel`              | `OnEnter(Game)`          | Spawn hidden pause panel + observers |
//! | `setup_options_panel`            | `OnEnter(Game)`          | Spawn hidden options panel           |
//! | `pause_menu_button_system`       | `Update / in Game`       | Resume / Options / Restart / Menu    |
//! | `options_button_system`          | `Update / in Game`       | Volume buttons and Close             |
//! | `teardown_pause_panel`           | `OnExit(Game)`           | Deregister observers, despawn panel  |
//! | `activate_focused_button`        | `Update`                 | Enter / Space / pad South → press    |
//! | `highlight_focused_button`       | `Update / focus changed` | Outline the focused button           |
//!
//! The pause panel is shown by the `GamePaused` event and hidden by
//! `GameUnpaused`, both triggered by [`crate::game_manager`].

use bevy::ecs::error::BevyError;
use bevy::ecs::system::SystemId;
use bevy::input_focus::InputFocus;
use bevy::prelude::*;

use crate::config::GameConfig;
use crate::delivery::DeliveryCounter;
use crate::error::GameError;
use crate::game_manager::{
    apply_pause_toggles, reset_kitchen_game_manager, GamePaused, GameUnpaused,
    KitchenGameManager, ResumeGame,
};
use crate::loader::{GameScene, LoadSceneRequest};

mod common;
mod focus;
mod loading;
mod main_menu;
pub mod options;
pub mod pause;
mod types;

use common::*;
pub use types::*;

pub struct MenuPlugin;

impl Plugin for MenuPlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<InputFocus>()
            .init_resource::<OptionsPanelState>()
            .init_resource::<AudioSettings>()
            .add_observer(options::on_show_options)
            .add_observer(options::close_options_on_unpause)
            .add_systems(
                Startup,
                options::init_audio_settings.after(crate::config::load_game_config),
            )
            .add_systems(
                OnEnter(GameScene::MainMenu),
                (main_menu::setup_main_menu, main_menu::restore_normal_time),
            )
            .add_systems(OnExit(GameScene::MainMenu), main_menu::cleanup_main_menu)
            .add_systems(
                Update,
                main_menu::menu_button_system.run_if(in_state(GameScene::MainMenu)),
            )
            .add_systems(
                Update,
                (
                    focus::activate_focused_button
                        .before(main_menu::menu_button_system)
                        .before(pause::pause_menu_button_system)
                        .before(options::options_button_system),
                    focus::highlight_focused_button.run_if(resource_changed::<InputFocus>),
                ),
            )
            .add_systems(OnEnter(GameScene::Loading), loading::setup_loading_screen)
            .add_systems(OnExit(GameScene::Loading), loading::cleanup_loading_screen)
            .add_systems(
                OnEnter(GameScene::Game),
                (
                    pause::setup_pause_panel.after(reset_kitchen_game_manager),
                    options::setup_options_panel,
                ),
            )
            .add_systems(
                OnExit(GameScene::Game),
                (pause::teardown_pause_panel, options::teardown_options_panel),
            )
            .add_systems(
                Update,
                (
                    pause::pause_menu_button_system.before(apply_pause_toggles),
                    pause::refresh_recipes_delivered_text
                        .run_if(resource_changed::<DeliveryCounter>),
                    options::options_button_system,
                )
                    .run_if(in_state(GameScene::Game)),
            );
    }
}
