//! Input systems.
//!
//! [`update_input_state`] drains this frame's key and mouse transitions from
//! raylib, in binding order, and applies them to the
//! [`InputState`](crate::resources::input::InputState) latches. Raylib
//! refreshes its key state once per frame inside `EndDrawing`, so everything
//! that happened since the previous present is seen here.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::input::{InputAction, InputEvent};
use crate::resources::input::InputState;

/// Collect every input transition raylib reports for this frame.
pub fn poll_events(rl: &RaylibHandle, input: &InputState) -> Vec<InputEvent> {
    let mut events = Vec::new();

    if rl.window_should_close() {
        events.push(InputEvent {
            action: InputAction::Quit,
            pressed: true,
        });
    }

    for key in input.bound_keys() {
        let Some(action) = input.action_for_key(key) else {
            continue;
        };
        if rl.is_key_pressed(key) {
            events.push(InputEvent {
                action,
                pressed: true,
            });
        }
        if rl.is_key_released(key) {
            events.push(InputEvent {
                action,
                pressed: false,
            });
        }
    }

    if rl.is_mouse_button_pressed(MouseButton::MOUSE_BUTTON_LEFT) {
        events.push(InputEvent {
            action: InputAction::Shoot,
            pressed: true,
        });
    }
    if rl.is_mouse_button_released(MouseButton::MOUSE_BUTTON_LEFT) {
        events.push(InputEvent {
            action: InputAction::Shoot,
            pressed: false,
        });
    }

    events
}

/// Poll Raylib for input and update the `InputState` resource.
pub fn update_input_state(mut input: ResMut<InputState>, rl: NonSend<raylib::RaylibHandle>) {
    for event in poll_events(&rl, &input) {
        log::trace!("input {:?}", event);
        input.apply(event);
    }
}
