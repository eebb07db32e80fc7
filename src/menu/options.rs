use super::*;

pub fn sound_effects_label(volume: f32) -> String {
    format!("SOUND EFFECTS: {}", AudioSettings::display_level(volume))
}

pub fn music_label(volume: f32) -> String {
    format!("MUSIC: {}", AudioSettings::display_level(volume))
}

/// Startup system: seed [`AudioSettings`] from the loaded [`GameConfig`].
pub fn init_audio_settings(mut commands: Commands, config: Res<GameConfig>) {
    commands.insert_resource(AudioSettings::from_config(&config));
}

/// Spawn the options overlay (hidden) for the game scene.
///
/// ```text
/// ┌───────────────────────┐
/// │        OPTIONS        │
/// │ [ SOUND EFFECTS: 10 ] │
/// │ [ MUSIC: 3          ] │
/// │ [ CLOSE             ] │
/// └───────────────────────┘
/// ```
pub fn setup_options_panel(mut commands: Commands, audio: Res<AudioSettings>) {
    let sound_effects = audio.sound_effects;
    let music = audio.music;
    spawn_overlay_card(&mut commands, OptionsPanelRoot, |card| {
        card.spawn((
            Text::new("OPTIONS"),
            TextFont {
                font_size: 38.0,
                ..default()
            },
            TextColor(title_color()),
        ));

        spacer(card, 4.0);

        spawn_button(
            card,
            &sound_effects_label(sound_effects),
            neutral_palette(),
            OptionsSoundEffectsButton,
            OptionsSoundEffectsText,
        );
        spawn_button(
            card,
            &music_label(music),
            neutral_palette(),
            OptionsMusicButton,
            OptionsMusicText,
        );
        spawn_button(card, "CLOSE", close_palette(), OptionsCloseButton, ());
    });
}

/// `ShowOptions` → show the overlay and remember who to call back on close.
pub fn on_show_options(
    show: On<ShowOptions>,
    mut state: ResMut<OptionsPanelState>,
    mut panel: Query<&mut Visibility, With<OptionsPanelRoot>>,
    first_button: Query<Entity, With<OptionsSoundEffectsButton>>,
    mut input_focus: ResMut<InputFocus>,
) {
    if state.on_close.is_some() {
        warn!("Options panel opened twice; replacing the pending close callback");
    }
    state.on_close = Some(show.on_close);
    for mut visibility in panel.iter_mut() {
        *visibility = Visibility::Visible;
    }
    if let Ok(button) = first_button.single() {
        input_focus.set(button);
    }
}

/// Hide the overlay.  The close callback is handed back so the caller can
/// decide whether to run it.
fn hide_options(
    state: &mut OptionsPanelState,
    panel: &mut Query<&mut Visibility, With<OptionsPanelRoot>>,
) -> Option<SystemId> {
    for mut visibility in panel.iter_mut() {
        *visibility = Visibility::Hidden;
    }
    state.on_close.take()
}

/// `GameUnpaused` → close without returning to the pause panel.
pub fn close_options_on_unpause(
    _unpaused: On<GameUnpaused>,
    mut state: ResMut<OptionsPanelState>,
    mut panel: Query<&mut Visibility, With<OptionsPanelRoot>>,
) {
    if hide_options(&mut state, &mut panel).is_some() {
        debug!("Options closed by unpause; close callback dropped");
    }
}

/// Despawn the overlay and forget any pending callback.
pub fn teardown_options_panel(
    mut commands: Commands,
    mut state: ResMut<OptionsPanelState>,
    roots: Query<Entity, With<OptionsPanelRoot>>,
) {
    state.on_close = None;
    for entity in roots.iter() {
        commands.entity(entity).despawn();
    }
}

/// Handle the volume buttons and Close.
///
/// - **Sound effects / Music** → step the volume, wrapping after full.
/// - **Close** → hide, then run the stored close callback once.
#[allow(clippy::too_many_arguments, clippy::type_complexity)]
pub fn options_button_system(
    sound_effects_query: Query<
        (&Interaction, &Children),
        (Changed<Interaction>, With<OptionsSoundEffectsButton>),
    >,
    music_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<OptionsMusicButton>)>,
    close_query: Query<(&Interaction, &Children), (Changed<Interaction>, With<OptionsCloseButton>)>,
    mut btn_text: Query<&mut TextColor>,
    mut sound_effects_text: Query<
        &mut Text,
        (With<OptionsSoundEffectsText>, Without<OptionsMusicText>),
    >,
    mut music_text: Query<&mut Text, (With<OptionsMusicText>, Without<OptionsSoundEffectsText>)>,
    mut audio: ResMut<AudioSettings>,
    config: Res<GameConfig>,
    mut state: ResMut<OptionsPanelState>,
    mut panel: Query<&mut Visibility, With<OptionsPanelRoot>>,
    mut commands: Commands,
) {
    for (interaction, children) in sound_effects_query.iter() {
        if *interaction == Interaction::Pressed {
            audio.sound_effects = AudioSettings::cycle(audio.sound_effects, config.volume_step);
            for mut text in sound_effects_text.iter_mut() {
                text.0 = sound_effects_label(audio.sound_effects);
            }
        }
        tint_label(interaction, children, &mut btn_text, neutral_text());
    }

    for (interaction, children) in music_query.iter() {
        if *interaction == Interaction::Pressed {
            audio.music = AudioSettings::cycle(audio.music, config.volume_step);
            for mut text in music_text.iter_mut() {
                text.0 = music_label(audio.music);
            }
        }
        tint_label(interaction, children, &mut btn_text, neutral_text());
    }

    for (interaction, children) in close_query.iter() {
        if *interaction == Interaction::Pressed {
            if let Some(on_close) = hide_options(&mut state, &mut panel) {
                commands.run_system(on_close);
            }
        }
        tint_label(interaction, children, &mut btn_text, close_text());
    }
}
