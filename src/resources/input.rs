//! Keyboard and mouse latch resource.
//!
//! [`InputState`] holds one persistent latch per movement direction. A
//! key-down event sets the latch and a key-up event clears it; the latch then
//! stays put until the next event for that direction. Each direction answers
//! to a WASD key and an arrow-key alias, and releasing either alias clears
//! the latch.
//!
//! The simulation never reads `InputState` directly: it takes a
//! [`MovementLatch`] copy once per tick.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::events::input::{InputAction, InputEvent};

#[derive(Debug, Clone, Copy)]
/// Persistent latch with its keyboard bindings.
pub struct BoolState {
    /// Whether the latch is currently set.
    pub active: bool,
    /// Main binding.
    pub key_binding: KeyboardKey,
    /// Alias binding.
    pub alt_binding: KeyboardKey,
}

impl Default for BoolState {
    fn default() -> Self {
        Self {
            active: false,
            key_binding: KeyboardKey::KEY_NULL,
            alt_binding: KeyboardKey::KEY_NULL,
        }
    }
}

impl BoolState {
    fn bound(key_binding: KeyboardKey, alt_binding: KeyboardKey) -> Self {
        Self {
            active: false,
            key_binding,
            alt_binding,
        }
    }

    /// Whether `key` is either of this latch's bindings.
    pub fn is_bound_to(&self, key: KeyboardKey) -> bool {
        key != KeyboardKey::KEY_NULL && (key == self.key_binding || key == self.alt_binding)
    }
}

/// The four movement latches as plain data, copied out once per tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementLatch {
    pub up: bool,
    pub down: bool,
    pub left: bool,
    pub right: bool,
}

/// Resource capturing the held-key state relevant to gameplay.
#[derive(Resource, Debug, Clone)]
pub struct InputState {
    pub up: BoolState,
    pub down: BoolState,
    pub left: BoolState,
    pub right: BoolState,
    /// Quits the game when pressed.
    pub back: BoolState,
    /// Left mouse button. Tracked but not read by any gameplay system.
    pub shoot: bool,
    /// Set once a quit was requested (window close or back key).
    pub quit_requested: bool,
}

impl Default for InputState {
    fn default() -> Self {
        Self {
            up: BoolState::bound(KeyboardKey::KEY_W, KeyboardKey::KEY_UP),
            down: BoolState::bound(KeyboardKey::KEY_S, KeyboardKey::KEY_DOWN),
            left: BoolState::bound(KeyboardKey::KEY_A, KeyboardKey::KEY_LEFT),
            right: BoolState::bound(KeyboardKey::KEY_D, KeyboardKey::KEY_RIGHT),
            back: BoolState::bound(KeyboardKey::KEY_ESCAPE, KeyboardKey::KEY_NULL),
            shoot: false,
            quit_requested: false,
        }
    }
}

impl InputState {
    /// Every key the game listens to.
    pub fn bound_keys(&self) -> Vec<KeyboardKey> {
        [self.up, self.down, self.left, self.right, self.back]
            .iter()
            .flat_map(|s| [s.key_binding, s.alt_binding])
            .filter(|k| *k != KeyboardKey::KEY_NULL)
            .collect()
    }

    /// Map a physical key to its action.
    pub fn action_for_key(&self, key: KeyboardKey) -> Option<InputAction> {
        if self.up.is_bound_to(key) {
            Some(InputAction::Up)
        } else if self.down.is_bound_to(key) {
            Some(InputAction::Down)
        } else if self.left.is_bound_to(key) {
            Some(InputAction::Left)
        } else if self.right.is_bound_to(key) {
            Some(InputAction::Right)
        } else if self.back.is_bound_to(key) {
            Some(InputAction::Back)
        } else {
            None
        }
    }

    /// Apply one polled event to the latches.
    pub fn apply(&mut self, event: InputEvent) {
        match event.action {
            InputAction::Up => self.up.active = event.pressed,
            InputAction::Down => self.down.active = event.pressed,
            InputAction::Left => self.left.active = event.pressed,
            InputAction::Right => self.right.active = event.pressed,
            InputAction::Back => {
                self.back.active = event.pressed;
                if event.pressed {
                    self.quit_requested = true;
                }
            }
            InputAction::Shoot => self.shoot = event.pressed,
            InputAction::Quit => self.quit_requested = true,
        }
    }

    pub fn movement(&self) -> MovementLatch {
        MovementLatch {
            up: self.up.active,
            down: self.down.active,
            left: self.left.active,
            right: self.right.active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(action: InputAction) -> InputEvent {
        InputEvent {
            action,
            pressed: true,
        }
    }

    fn release(action: InputAction) -> InputEvent {
        InputEvent {
            action,
            pressed: false,
        }
    }

    #[test]
    fn test_inputstate_default_all_inactive() {
        let input = InputState::default();
        assert_eq!(input.movement(), MovementLatch::default());
        assert!(!input.back.active);
        assert!(!input.shoot);
        assert!(!input.quit_requested);
    }

    #[test]
    fn test_inputstate_default_key_bindings() {
        let input = InputState::default();
        assert_eq!(input.up.key_binding, KeyboardKey::KEY_W);
        assert_eq!(input.up.alt_binding, KeyboardKey::KEY_UP);
        assert_eq!(input.left.key_binding, KeyboardKey::KEY_A);
        assert_eq!(input.left.alt_binding, KeyboardKey::KEY_LEFT);
        assert_eq!(input.down.key_binding, KeyboardKey::KEY_S);
        assert_eq!(input.down.alt_binding, KeyboardKey::KEY_DOWN);
        assert_eq!(input.right.key_binding, KeyboardKey::KEY_D);
        assert_eq!(input.right.alt_binding, KeyboardKey::KEY_RIGHT);
        assert_eq!(input.back.key_binding, KeyboardKey::KEY_ESCAPE);
    }

    #[test]
    fn test_action_for_key_aliases() {
        let input = InputState::default();
        assert_eq!(input.action_for_key(KeyboardKey::KEY_W), Some(InputAction::Up));
        assert_eq!(input.action_for_key(KeyboardKey::KEY_UP), Some(InputAction::Up));
        assert_eq!(input.action_for_key(KeyboardKey::KEY_RIGHT), Some(InputAction::Right));
        assert_eq!(input.action_for_key(KeyboardKey::KEY_ESCAPE), Some(InputAction::Back));
        assert_eq!(input.action_for_key(KeyboardKey::KEY_SPACE), None);
        assert_eq!(input.action_for_key(KeyboardKey::KEY_NULL), None);
    }

    #[test]
    fn test_bound_keys_skip_null() {
        let keys = InputState::default().bound_keys();
        assert_eq!(keys.len(), 9);
        assert!(!keys.contains(&KeyboardKey::KEY_NULL));
    }

    #[test]
    fn test_latch_holds_until_release() {
        let mut input = InputState::default();
        input.apply(press(InputAction::Left));
        assert!(input.movement().left);
        // no new events: still held
        assert!(input.movement().left);
        input.apply(release(InputAction::Left));
        assert!(!input.movement().left);
    }

    #[test]
    fn test_latches_are_independent() {
        let mut input = InputState::default();
        input.apply(press(InputAction::Up));
        input.apply(press(InputAction::Right));
        input.apply(release(InputAction::Up));
        let latch = input.movement();
        assert!(!latch.up);
        assert!(latch.right);
        assert!(!latch.down);
        assert!(!latch.left);
    }

    #[test]
    fn test_back_and_quit_request_exit() {
        let mut input = InputState::default();
        input.apply(press(InputAction::Back));
        assert!(input.quit_requested);

        let mut input = InputState::default();
        input.apply(press(InputAction::Quit));
        assert!(input.quit_requested);
    }

    #[test]
    fn test_shoot_is_a_plain_flag() {
        let mut input = InputState::default();
        input.apply(press(InputAction::Shoot));
        assert!(input.shoot);
        assert_eq!(input.movement(), MovementLatch::default());
        input.apply(release(InputAction::Shoot));
        assert!(!input.shoot);
    }
}
