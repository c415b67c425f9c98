//! Keyboard-driven movement component.
//!
//! [`InputControlled`] stores the walking speed and the sticky facing of an
//! entity. The [`player_controller`](crate::systems::inputsimplecontroller::player_controller)
//! system feeds it the current [`MovementLatch`] once per tick.
//!
//! Directions are evaluated up, left, down, right and each firing branch
//! assigns its displacement instead of adding it, so down overrides up and
//! right overrides left. Motion is in pixels per tick with no delta-time
//! scaling.

use bevy_ecs::prelude::Component;
use raylib::prelude::Vector2;

use crate::resources::input::MovementLatch;

/// Movement intent derived from player keyboard input.
#[derive(Component, Clone, Copy, Debug)]
pub struct InputControlled {
    /// Displacement per tick along each axis.
    pub speed: f32,
    /// Last horizontal direction walked: -1 left, 1 right.
    pub direction_x: i8,
    /// Last vertical direction walked: -1 up, 1 down.
    pub direction_y: i8,
}

/// Result of one movement step.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Step {
    pub delta: Vector2,
    /// New horizontal mirroring, if a side branch fired.
    pub flip: Option<bool>,
}

impl InputControlled {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            direction_x: 1,
            direction_y: 1,
        }
    }

    /// Compute this tick's displacement and update the sticky facing.
    pub fn step(&mut self, latch: &MovementLatch) -> Step {
        let mut dx = 0.0;
        let mut dy = 0.0;
        let mut flip = None;

        if latch.up {
            dy = -self.speed;
            self.direction_y = -1;
        }
        if latch.left {
            dx = -self.speed;
            flip = Some(true);
            self.direction_x = -1;
        }
        if latch.down {
            dy = self.speed;
            self.direction_y = 1;
        }
        if latch.right {
            dx = self.speed;
            flip = Some(false);
            self.direction_x = 1;
        }

        Step {
            delta: Vector2 { x: dx, y: dy },
            flip,
        }
    }
}
