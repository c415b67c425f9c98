//! Input action events.
//!
//! The input system turns raylib key and mouse transitions into
//! [`InputEvent`] values and applies them, in polling order, to the
//! [`InputState`](crate::resources::input::InputState) latches.

/// Enumeration of logical input actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum InputAction {
    /// W or Up arrow.
    Up,
    /// S or Down arrow.
    Down,
    /// A or Left arrow.
    Left,
    /// D or Right arrow.
    Right,
    /// Escape.
    Back,
    /// Left mouse button.
    Shoot,
    /// Window close request.
    Quit,
}

/// A press (`pressed == true`) or release of an input action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputEvent {
    pub action: InputAction,
    pub pressed: bool,
}
