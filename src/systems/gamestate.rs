use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::input::InputState;
use bevy_ecs::prelude::*;

/// Move to [`GameStates::Quitting`] once input asked for it.
pub fn check_quit_request(input: Res<InputState>, mut state: ResMut<GameState>) {
    if input.quit_requested && !state.is_quitting() {
        state.set(GameStates::Quitting);
    }
}

pub fn state_is_playing(state: Res<GameState>) -> bool {
    matches!(state.get(), GameStates::Playing)
}
