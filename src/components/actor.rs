use bevy_ecs::prelude::Component;

/// Identity and liveness of an animated entity.
///
/// `entity_type` names the asset directory its frames were loaded from.
/// Nothing clears `alive` yet; the controller only drives living actors.
#[derive(Component, Clone, Debug)]
pub struct Actor {
    pub entity_type: String,
    pub alive: bool,
}

impl Actor {
    pub fn new(entity_type: impl Into<String>) -> Self {
        Self {
            entity_type: entity_type.into(),
            alive: true,
        }
    }
}

/// Marks the keyboard-driven entity.
#[derive(Component, Clone, Copy, Debug, Default)]
pub struct Player;
