//! World-space position of an entity.
//!
//! The position is the sprite's center point. The move rule writes it
//! directly (pixels per tick), and the render system centers the current
//! frame on it.
use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

#[derive(Component, Clone, Copy, Debug)]
pub struct MapPosition {
    pub pos: Vector2,
}

impl MapPosition {
    pub fn new(x: f32, y: f32) -> Self {
        Self {
            pos: Vector2 { x, y },
        }
    }
}
