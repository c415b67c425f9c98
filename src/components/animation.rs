//! Directional walk animation state machine.
//!
//! An entity carries one frame list per [`WalkAction`]. Each tick the
//! controller turns the movement latch into an [`ActionRequest`] and the
//! animation system advances the frame index on a fixed wall-clock cooldown.
//!
//! Idle is a request, never a stored state: it pins the frame index to 0 and
//! leaves the stored walk action alone, so an idle entity keeps showing the
//! first frame of the direction it last walked in.
use bevy_ecs::prelude::Component;

use crate::components::sprite::Frame;
use crate::resources::input::MovementLatch;

/// Minimum time between two frame advances, in seconds.
pub const ANIMATION_COOLDOWN: f64 = 0.2;

/// Concrete walk animations, in asset order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WalkAction {
    Down,
    Horizontal,
    Up,
}

impl WalkAction {
    pub const ALL: [WalkAction; 3] = [WalkAction::Down, WalkAction::Horizontal, WalkAction::Up];

    /// Index into an entity's per-action frame lists.
    pub fn index(self) -> usize {
        match self {
            WalkAction::Down => 0,
            WalkAction::Horizontal => 1,
            WalkAction::Up => 2,
        }
    }

    /// Asset directory holding this action's frames.
    pub fn dir_name(self) -> &'static str {
        match self {
            WalkAction::Down => "walking_down",
            WalkAction::Horizontal => "walking_horizontally",
            WalkAction::Up => "walking_up",
        }
    }
}

/// What the controller asks the animation to show this tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionRequest {
    Idle,
    Walking(WalkAction),
}

impl ActionRequest {
    /// Pick the animation for the held directions.
    ///
    /// Priority is down, then either side, then up. Up+side plays the side
    /// walk and up+down+side plays the down walk.
    pub fn from_latch(latch: &MovementLatch) -> Self {
        if latch.down {
            ActionRequest::Walking(WalkAction::Down)
        } else if latch.right || latch.left {
            ActionRequest::Walking(WalkAction::Horizontal)
        } else if latch.up {
            ActionRequest::Walking(WalkAction::Up)
        } else {
            ActionRequest::Idle
        }
    }
}

#[derive(Debug, Clone, Component)]
pub struct Animation {
    frames: [Vec<Frame>; 3],
    pub action: WalkAction,
    pub frame_index: usize,
    /// World time (seconds) of the last frame advance.
    pub last_update_time: f64,
    pub cooldown: f64,
}

impl Animation {
    /// Build the animation state starting on the first walking-down frame.
    ///
    /// Returns `None` if any action has no frames.
    pub fn new(frames: [Vec<Frame>; 3], now: f64) -> Option<Self> {
        if frames.iter().any(|list| list.is_empty()) {
            return None;
        }
        Some(Self {
            frames,
            action: WalkAction::Down,
            frame_index: 0,
            last_update_time: now,
            cooldown: ANIMATION_COOLDOWN,
        })
    }

    pub fn with_cooldown(mut self, cooldown: f64) -> Self {
        self.cooldown = cooldown;
        self
    }

    pub fn frames(&self, action: WalkAction) -> &[Frame] {
        &self.frames[action.index()]
    }

    pub fn current_frame(&self) -> Option<&Frame> {
        self.frames(self.action).get(self.frame_index)
    }

    /// Advance playback and return the frame to display this tick.
    ///
    /// The returned frame is read before the advance, so an increment only
    /// shows up on the next tick. The timer moves only when a frame advances.
    pub fn update_animation(&mut self, now: f64) -> Option<&Frame> {
        let shown = self.frame_index;

        if now - self.last_update_time >= self.cooldown {
            self.last_update_time = now;
            self.frame_index += 1;
        }
        if self.frame_index >= self.frames(self.action).len() {
            self.frame_index = 0;
        }
        self.frames(self.action).get(shown)
    }

    /// Apply the controller's request.
    pub fn update_action(&mut self, request: ActionRequest, now: f64) {
        match request {
            ActionRequest::Idle => {
                self.frame_index = 0;
            }
            ActionRequest::Walking(action) if action != self.action => {
                log::debug!("animation action {:?} -> {:?}", self.action, action);
                self.action = action;
                self.frame_index = 0;
                self.last_update_time = now;
            }
            ActionRequest::Walking(_) => {}
        }
    }
}
