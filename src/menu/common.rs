use bevy::prelude::*;

pub(super) fn title_color() -> Color {
    Color::srgb(0.95, 0.88, 0.45)
}
pub(super) fn subtitle_color() -> Color {
    Color::srgb(0.55, 0.55, 0.65)
}
pub(super) fn hint_color() -> Color {
    Color::srgb(0.28, 0.28, 0.35)
}

pub(super) fn start_bg() -> Color {
    Color::srgb(0.08, 0.36, 0.14)
}
pub(super) fn start_border() -> Color {
    Color::srgb(0.18, 0.72, 0.28)
}
pub(super) fn start_text() -> Color {
    Color::srgb(0.75, 1.0, 0.80)
}
pub(super) fn quit_bg() -> Color {
    Color::srgb(0.28, 0.06, 0.06)
}
pub(super) fn quit_border() -> Color {
    Color::srgb(0.60, 0.12, 0.12)
}
pub(super) fn quit_text() -> Color {
    Color::srgb(1.0, 0.65, 0.65)
}
pub(super) fn neutral_bg() -> Color {
    Color::srgb(0.10, 0.18, 0.36)
}
pub(super) fn neutral_border() -> Color {
    Color::srgb(0.22, 0.44, 0.78)
}
pub(super) fn neutral_text() -> Color {
    Color::srgb(0.65, 0.80, 1.0)
}
pub(super) fn close_bg() -> Color {
    Color::srgb(0.14, 0.14, 0.20)
}
pub(super) fn close_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}
pub(super) fn close_text() -> Color {
    Color::srgb(0.65, 0.65, 0.80)
}
pub(super) fn card_bg() -> Color {
    Color::srgb(0.04, 0.04, 0.07)
}
pub(super) fn card_border() -> Color {
    Color::srgb(0.30, 0.30, 0.46)
}

/// Colours for one button style: background, border, label.
#[derive(Clone, Copy)]
pub(super) struct ButtonPalette {
    pub bg: Color,
    pub border: Color,
    pub text: Color,
}

pub(super) fn start_palette() -> ButtonPalette {
    ButtonPalette {
        bg: start_bg(),
        border: start_border(),
        text: start_text(),
    }
}
pub(super) fn quit_palette() -> ButtonPalette {
    ButtonPalette {
        bg: quit_bg(),
        border: quit_border(),
        text: quit_text(),
    }
}
pub(super) fn neutral_palette() -> ButtonPalette {
    ButtonPalette {
        bg: neutral_bg(),
        border: neutral_border(),
        text: neutral_text(),
    }
}
pub(super) fn close_palette() -> ButtonPalette {
    ButtonPalette {
        bg: close_bg(),
        border: close_border(),
        text: close_text(),
    }
}

/// Spawn a 220×48 labelled button tagged with `marker`; `label_marker` goes on
/// the label text entity.  Returns the button entity.
pub(super) fn spawn_button(
    parent: &mut ChildSpawnerCommands<'_>,
    label: &str,
    palette: ButtonPalette,
    marker: impl Bundle,
    label_marker: impl Bundle,
) -> Entity {
    parent
        .spawn((
            Button,
            Node {
                width: Val::Px(220.0),
                height: Val::Px(48.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                border: UiRect::all(Val::Px(2.0)),
                ..default()
            },
            BackgroundColor(palette.bg),
            BorderColor::all(palette.border),
            marker,
        ))
        .with_children(|btn| {
            btn.spawn((
                Text::new(label),
                TextFont {
                    font_size: 18.0,
                    ..default()
                },
                TextColor(palette.text),
                label_marker,
            ));
        })
        .id()
}

/// Full-screen dim overlay holding a centred column card.  Returns the
/// overlay entity; `build` fills the card.
pub(super) fn spawn_overlay_card(
    commands: &mut Commands,
    root: impl Bundle,
    build: impl FnOnce(&mut ChildSpawnerCommands<'_>),
) -> Entity {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                position_type: PositionType::Absolute,
                left: Val::Px(0.0),
                top: Val::Px(0.0),
                ..default()
            },
            BackgroundColor(Color::srgba(0.0, 0.0, 0.0, 0.70)),
            ZIndex(200),
            Visibility::Hidden,
            root,
        ))
        .with_children(|overlay| {
            overlay
                .spawn((
                    Node {
                        flex_direction: FlexDirection::Column,
                        align_items: AlignItems::Center,
                        padding: UiRect::all(Val::Px(36.0)),
                        row_gap: Val::Px(14.0),
                        border: UiRect::all(Val::Px(2.0)),
                        min_width: Val::Px(280.0),
                        ..default()
                    },
                    BackgroundColor(card_bg()),
                    BorderColor::all(card_border()),
                ))
                .with_children(build);
        })
        .id()
}

/// Tint button label white on hover and back to `normal` otherwise.
pub(super) fn tint_label(
    interaction: &Interaction,
    children: &Children,
    btn_text: &mut Query<&mut TextColor>,
    normal: Color,
) {
    let color = match interaction {
        Interaction::Hovered => Color::WHITE,
        Interaction::None => normal,
        Interaction::Pressed => return,
    };
    for child in children.iter() {
        if let Ok(mut text_color) = btn_text.get_mut(child) {
            *text_color = TextColor(color);
        }
    }
}

pub(super) fn spacer(parent: &mut ChildSpawnerCommands<'_>, px: f32) {
    parent.spawn(Node {
        height: Val::Px(px),
        ..default()
    });
}
