//! High-level game state resource.
//!
//! The main loop keeps ticking while the state is [`GameStates::Playing`] and
//! exits once the input system moves it to [`GameStates::Quitting`].

use bevy_ecs::prelude::Resource;

/// Discrete high-level states the game can be in.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStates {
    #[default]
    Setup,
    Playing,
    Quitting,
}

/// Authoritative current game state.
#[derive(Resource, Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct GameState {
    current: GameStates,
}

impl GameState {
    /// Create a new state initialized to [`GameStates::Setup`].
    pub fn new() -> Self {
        Self::default()
    }
    /// Read-only access to the current state.
    pub fn get(&self) -> GameStates {
        self.current
    }
    pub fn set(&mut self, state: GameStates) {
        if self.current != state {
            log::info!("game state {:?} -> {:?}", self.current, state);
        }
        self.current = state;
    }
    pub fn is_quitting(&self) -> bool {
        self.current == GameStates::Quitting
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_in_setup() {
        let state = GameState::new();
        assert_eq!(state.get(), GameStates::Setup);
        assert!(!state.is_quitting());
    }

    #[test]
    fn test_set_quitting() {
        let mut state = GameState::new();
        state.set(GameStates::Playing);
        state.set(GameStates::Quitting);
        assert!(state.is_quitting());
    }
}
