//! Kitchen Chaos game-flow library
//!
//! Scene loading, the game-wide pause flag, and the menus layered on top of
//! them: main menu, loading screen, in-game pause panel and options panel.

pub mod config;
pub mod constants;
pub mod delivery;
pub mod error;
pub mod game_manager;
pub mod loader;
pub mod menu;

use bevy::prelude::*;

/// Every gameplay-flow plugin in dependency order.
pub struct KitchenPlugins;

impl Plugin for KitchenPlugins {
    fn build(&self, app: &mut App) {
        app.add_plugins((
            loader::LoaderPlugin,
            game_manager::GameManagerPlugin,
            delivery::DeliveryPlugin,
            menu::MenuPlugin,
        ));
    }
}
