use super::*;

/// Spawn the full-screen main-menu overlay.
///
/// Layout:
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │              KITCHEN CHAOS                  │
/// │        Cook, plate, deliver. Fast.          │
/// │                                             │
/// │               [ PLAY ]                      │
/// │               [ QUIT ]                      │
/// │                                             │
/// │          v0.1.0  ·  Bevy 0.17               │
/// └─────────────────────────────────────────────┘
/// ```
pub(super) fn setup_main_menu(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                flex_direction: FlexDirection::Column,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            MainMenuRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("KITCHEN CHAOS"),
                TextFont {
                    font_size: 56.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            spacer(root, 10.0);

            root.spawn((
                Text::new("Cook, plate, deliver. Fast."),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));

            spacer(root, 52.0);

            spawn_button(root, "PLAY", start_palette(), MenuPlayButton, ());

            spacer(root, 14.0);

            spawn_button(root, "QUIT", quit_palette(), MenuQuitButton, ());

            spacer(root, 52.0);

            root.spawn((
                Text::new("v0.1.0  ·  Bevy 0.17"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        });
}

/// Back at the main menu the clock always runs at normal speed, whatever
/// state the last game session left it in.
pub(super) fn restore_normal_time(mut time: ResMut<Time<Virtual>>, config: Res<GameConfig>) {
    time.unpause();
    time.set_relative_speed(config.normal_time_scale);
}

pub(super) fn cleanup_main_menu(mut commands: Commands, query: Query<Entity, With<MainMenuRoot>>) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle Play and Quit button presses.
///
/// - **Play** → loads the game scene through the loader.
/// - **Quit** → sends [`AppExit`] to gracefully shut down.
#[allow(clippy::type_complexity)]
pub(super) fn menu_button_system(
    play_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuPlayButton>)>,
    quit_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<MenuQuitButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut loads: MessageWriter<LoadSceneRequest>,
    mut exit: MessageWriter<AppExit>,
) {
    for (interaction, children) in play_query.iter() {
        if *interaction == Interaction::Pressed {
            loads.write(LoadSceneRequest(GameScene::Game));
        }
        tint_label(interaction, children, &mut btn_text, start_text());
    }

    for (interaction, children) in quit_query.iter() {
        if *interaction == Interaction::Pressed {
            exit.write(AppExit::Success);
        }
        tint_label(interaction, children, &mut btn_text, quit_text());
    }
}
