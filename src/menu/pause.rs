use super::*;

/// Label text for the delivered-recipe counter.
pub fn recipes_delivered_label(count: u32) -> String {
    format!("RECIPES DELIVERED: {count}")
}

/// Spawn the pause overlay (hidden) and wire it to the game manager.
///
/// Layout (appears centred over the frozen kitchen):
/// ```text
/// ┌─────────────────────────────────────────────┐
/// │ ░░░░░░░░░ semi-transparent overlay ░░░░░░░░ │
/// │ ░░░░░   ┌───────────────────────┐   ░░░░░░ │
/// │ ░░░░░   │        PAUSED         │   ░░░░░░ │
/// │ ░░░░░   │ RECIPES DELIVERED: 3  │   ░░░░░░ │
/// │ ░░░░░   │    [ RESUME     ]     │   ░░░░░░ │
/// │ ░░░░░   │    [ OPTIONS    ]     │   ░░░░░░ │
/// │ ░░░░░   │    [ RESTART    ]     │   ░░░░░░ │
/// │ ░░░░░   │    [ MAIN MENU  ]     │   ░░░░░░ │
/// │ ░░░░░   │   ESC to resume       │   ░░░░░░ │
/// │ ░░░░░   └───────────────────────┘   ░░░░░░ │
/// └─────────────────────────────────────────────┘
/// ```
///
/// Also resets the virtual clock to normal speed.  The clock is only
/// unpaused when the game manager agrees the game is running, so a scene
/// that is still paused keeps its frozen clock.
///
/// Fails (and, with Bevy's default error handler, panics) if the
/// [`KitchenGameManager`] resource is missing: the panel cannot work
/// without it.
pub fn setup_pause_panel(
    mut commands: Commands,
    manager: Option<Res<KitchenGameManager>>,
    counter: Res<DeliveryCounter>,
    config: Res<GameConfig>,
    mut time: ResMut<Time<Virtual>>,
) -> Result<(), BevyError> {
    let Some(manager) = manager else {
        return Err(GameError::MissingCollaborator {
            name: "KitchenGameManager",
        }
        .into());
    };

    time.set_relative_speed(config.normal_time_scale);
    if !manager.is_paused() {
        time.unpause();
    }

    let show = commands.register_system(show_pause_panel);
    let subscriptions = [
        commands.spawn(Observer::new(on_game_paused)).id(),
        commands.spawn(Observer::new(on_game_unpaused)).id(),
    ];
    let recipes_delivered = counter.recipes_delivered;

    spawn_overlay_card(
        &mut commands,
        (
            PausePanelRoot,
            PausePanel {
                show,
                subscriptions,
            },
        ),
        |card| {
            card.spawn((
                Text::new("PAUSED"),
                TextFont {
                    font_size: 38.0,
                    ..default()
                },
                TextColor(title_color()),
            ));

            card.spawn((
                Text::new(recipes_delivered_label(recipes_delivered)),
                TextFont {
                    font_size: 16.0,
                    ..default()
                },
                TextColor(subtitle_color()),
                RecipesDeliveredText,
            ));

            spacer(card, 4.0);

            spawn_button(card, "RESUME", start_palette(), PauseResumeButton, ());
            spawn_button(card, "OPTIONS", neutral_palette(), PauseOptionsButton, ());
            spawn_button(card, "RESTART", close_palette(), PauseRestartButton, ());
            spawn_button(card, "MAIN MENU", quit_palette(), PauseMainMenuButton, ());

            spacer(card, 4.0);

            card.spawn((
                Text::new("ESC → resume"),
                TextFont {
                    font_size: 12.0,
                    ..default()
                },
                TextColor(hint_color()),
            ));
        },
    );

    debug!("Pause panel ready (hidden)");
    Ok(())
}

/// Make the panel visible and move input focus to the resume button.
///
/// Registered as a one-shot system on setup; the [`SystemId`] doubles as the
/// options panel's close callback.
pub fn show_pause_panel(
    mut panel: Query<&mut Visibility, With<PausePanelRoot>>,
    resume: Query<Entity, With<PauseResumeButton>>,
    mut input_focus: ResMut<InputFocus>,
) {
    for mut visibility in panel.iter_mut() {
        *visibility = Visibility::Visible;
    }
    if let Ok(button) = resume.single() {
        input_focus.set(button);
    }
    debug!("Pause panel shown");
}

/// Make the panel invisible.
pub fn hide_pause_panel(mut panel: Query<&mut Visibility, With<PausePanelRoot>>) {
    for mut visibility in panel.iter_mut() {
        *visibility = Visibility::Hidden;
    }
    debug!("Pause panel hidden");
}

/// `GamePaused` → run the panel's registered show callback.
pub fn on_game_paused(
    _paused: On<GamePaused>,
    panels: Query<&PausePanel>,
    mut commands: Commands,
) {
    for panel in panels.iter() {
        commands.run_system(panel.show);
    }
}

/// `GameUnpaused` → hide.
pub fn on_game_unpaused(
    _unpaused: On<GameUnpaused>,
    panel: Query<&mut Visibility, With<PausePanelRoot>>,
) {
    hide_pause_panel(panel);
}

/// Deregister the observers and show callback, then despawn the panel tree.
pub fn teardown_pause_panel(
    mut commands: Commands,
    panels: Query<(Entity, &PausePanel), With<PausePanelRoot>>,
) {
    for (root, panel) in panels.iter() {
        for observer in panel.subscriptions {
            commands.entity(observer).despawn();
        }
        commands.unregister_system(panel.show);
        commands.entity(root).despawn();
    }
}

/// Keep the counter label in step with [`DeliveryCounter`].
pub fn refresh_recipes_delivered_text(
    counter: Res<DeliveryCounter>,
    mut texts: Query<&mut Text, With<RecipesDeliveredText>>,
) {
    for mut text in texts.iter_mut() {
        text.0 = recipes_delivered_label(counter.recipes_delivered);
    }
}

/// Handle Resume, Options, Restart, and Main Menu button presses.
///
/// - **Resume** → asks the game manager to resume; its `GameUnpaused` event
///   then hides the panel.
/// - **Options** → hides the panel and opens the options panel with the
///   panel's show callback, so closing options returns here.
/// - **Restart** → reloads the game scene.
/// - **Main Menu** → loads the main-menu scene.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn pause_menu_button_system(
    resume_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<PauseResumeButton>)>,
    options_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<PauseOptionsButton>),
    >,
    restart_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<PauseRestartButton>),
    >,
    main_menu_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<PauseMainMenuButton>),
    >,
    mut btn_text: Query<&mut TextColor>,
    mut panels: Query<(&PausePanel, &mut Visibility), With<PausePanelRoot>>,
    mut resumes: MessageWriter<ResumeGame>,
    mut loads: MessageWriter<LoadSceneRequest>,
    mut commands: Commands,
) {
    for (interaction, children) in resume_query.iter() {
        if *interaction == Interaction::Pressed {
            resumes.write(ResumeGame);
        }
        tint_label(interaction, children, &mut btn_text, start_text());
    }

    for (interaction, children) in options_query.iter() {
        if *interaction == Interaction::Pressed {
            for (panel, mut visibility) in panels.iter_mut() {
                *visibility = Visibility::Hidden;
                commands.trigger(ShowOptions {
                    on_close: panel.show,
                });
            }
        }
        tint_label(interaction, children, &mut btn_text, neutral_text());
    }

    for (interaction, children) in restart_query.iter() {
        if *interaction == Interaction::Pressed {
            loads.write(LoadSceneRequest(GameScene::Game));
        }
        tint_label(interaction, children, &mut btn_text, close_text());
    }

    for (interaction, children) in main_menu_query.iter() {
        if *interaction == Interaction::Pressed {
            loads.write(LoadSceneRequest(GameScene::MainMenu));
        }
        tint_label(interaction, children, &mut btn_text, quit_text());
    }
}
