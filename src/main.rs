use bevy::prelude::*;
use bevy::window::WindowResolution;

use kitchen_chaos::config::{self, GameConfig};
use kitchen_chaos::KitchenPlugins;

fn setup_camera(mut commands: Commands) {
    commands.spawn(Camera2d);
}

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: "Kitchen Chaos".into(),
                resolution: WindowResolution::new(1280, 720),
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        // Compiled defaults; load_game_config overwrites them from
        // assets/game.toml (if present) before anything else reads them.
        .insert_resource(GameConfig::default())
        .add_plugins(KitchenPlugins)
        .add_systems(Startup, (config::load_game_config, setup_camera))
        .run();
}
