use super::*;

pub(super) fn setup_loading_screen(mut commands: Commands) {
    commands
        .spawn((
            Node {
                width: Val::Percent(100.0),
                height: Val::Percent(100.0),
                justify_content: JustifyContent::Center,
                align_items: AlignItems::Center,
                ..default()
            },
            BackgroundColor(Color::BLACK),
            LoadingScreenRoot,
        ))
        .with_children(|root| {
            root.spawn((
                Text::new("LOADING..."),
                TextFont {
                    font_size: 38.0,
                    ..default()
                },
                TextColor(subtitle_color()),
            ));
        });
}

pub(super) fn cleanup_loading_screen(
    mut commands: Commands,
    query: Query<Entity, With<LoadingScreenRoot>>,
) {
    for entity in query.iter() {
        commands.entity(entity).despawn();
    }
}
