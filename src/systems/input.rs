//! Input systems.
//!
//! - [`update_input_state`] reads hardware input from Raylib each frame and
//!   writes the results into [`crate::resources::input::InputState`].
//! - Pressing the debug key emits a
//!   [`SwitchDebugEvent`](crate::events::switchdebug::SwitchDebugEvent).
use bevy_ecs::prelude::*;

use crate::events::switchdebug::SwitchDebugEvent;
use crate::resources::input::InputState;

/// Poll Raylib for keyboard and mouse input and update the `InputState` resource.
pub fn update_input_state(
    mut input: ResMut<InputState>,
    rl: NonSendMut<raylib::RaylibHandle>,
    mut commands: Commands,
) {
    let input = &mut *input;
    for state in [
        &mut input.move_forward,
        &mut input.move_back,
        &mut input.move_left,
        &mut input.move_right,
        &mut input.action,
        &mut input.interact,
        &mut input.jump,
        &mut input.mode_debug,
    ] {
        state.update(rl.is_key_down(state.key_binding));
    }
    input.look_delta = rl.get_mouse_delta();

    if input.mode_debug.just_pressed {
        commands.trigger(SwitchDebugEvent {});
    }
}
