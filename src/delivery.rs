//! Delivered-recipe counter shown on the pause menu.
//!
//! Kitchen systems write a [`RecipeDelivered`] message whenever a plate is
//! handed in; [`count_deliveries`] folds them into [`DeliveryCounter`].

use bevy::prelude::*;

use crate::loader::GameScene;

/// Written once per successfully delivered recipe.
#[derive(Message, Debug, Clone, Copy, Default)]
pub struct RecipeDelivered;

/// Number of recipes delivered in the current game session.
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct DeliveryCounter {
    pub recipes_delivered: u32,
}

pub struct DeliveryPlugin;

impl Plugin for DeliveryPlugin {
    fn build(&self, app: &mut App) {
        app.add_message::<RecipeDelivered>()
            .init_resource::<DeliveryCounter>()
            .add_systems(OnEnter(GameScene::Game), reset_delivery_counter)
            .add_systems(Update, count_deliveries);
    }
}

/// Every game session starts from zero deliveries.
pub fn reset_delivery_counter(mut counter: ResMut<DeliveryCounter>) {
    *counter = DeliveryCounter::default();
}

pub fn count_deliveries(
    mut delivered: MessageReader<RecipeDelivered>,
    mut counter: ResMut<DeliveryCounter>,
) {
    let count = delivered.read().count() as u32;
    if count > 0 {
        counter.recipes_delivered = counter.recipes_delivered.saturating_add(count);
    }
}
