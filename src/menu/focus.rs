use super::*;

const OUTLINE_WIDTH: f32 = 2.0;

fn activation_pressed(keys: &ButtonInput<KeyCode>, gamepads: &Query<&Gamepad>) -> bool {
    keys.any_just_pressed([KeyCode::Enter, KeyCode::NumpadEnter, KeyCode::Space])
        || gamepads
            .iter()
            .any(|gamepad| gamepad.just_pressed(GamepadButton::South))
}

/// Enter, Space or the gamepad's south button presses whichever button owns
/// [`InputFocus`], as long as it is on screen.
///
/// The press is written as `Interaction::Pressed` so the regular button
/// systems handle it exactly like a click, and released again on the next run.
pub(super) fn activate_focused_button(
    keys: Res<ButtonInput<KeyCode>>,
    gamepads: Query<&Gamepad>,
    focus: Res<InputFocus>,
    parents: Query<&ChildOf>,
    visibility: Query<&Visibility>,
    mut buttons: Query<&mut Interaction, With<Button>>,
    mut pressed_last_frame: Local<Option<Entity>>,
) {
    if let Some(entity) = pressed_last_frame.take() {
        if let Ok(mut interaction) = buttons.get_mut(entity) {
            if *interaction == Interaction::Pressed {
                *interaction = Interaction::None;
            }
        }
    }

    if !activation_pressed(&keys, &gamepads) {
        return;
    }
    let Some(focused) = focus.get() else {
        return;
    };
    let hidden = std::iter::once(focused)
        .chain(parents.iter_ancestors(focused))
        .any(|entity| matches!(visibility.get(entity), Ok(Visibility::Hidden)));
    if hidden {
        debug!("Ignoring activation of hidden button {focused}");
        return;
    }

    if let Ok(mut interaction) = buttons.get_mut(focused) {
        *interaction = Interaction::Pressed;
        *pressed_last_frame = Some(focused);
    }
}

/// Outline the focused button and clear the outline from every other one.
pub(super) fn highlight_focused_button(
    mut commands: Commands,
    focus: Res<InputFocus>,
    buttons: Query<(Entity, Has<Outline>), With<Button>>,
) {
    let focused = focus.get();
    for (entity, outlined) in buttons.iter() {
        if Some(entity) == focused {
            commands.entity(entity).insert(Outline::new(
                Val::Px(OUTLINE_WIDTH),
                Val::Px(OUTLINE_WIDTH),
                Color::WHITE,
            ));
        } else if outlined {
            commands.entity(entity).remove::<Outline>();
        }
    }
}
