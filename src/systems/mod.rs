//! Game systems.
//!
//! Submodules overview
//! - [`animation`] – advance sprite animations on the cooldown clock
//! - [`gamestate`] – quit handling and state run conditions
//! - [`input`] – read raylib input into [`crate::resources::input::InputState`]
//! - [`inputsimplecontroller`] – action selection and movement for the player
//! - [`projectile`] – advance the projectile pool
//! - [`render`] – clear, draw and present the frame
//! - [`time`] – update simulation time

pub mod animation;
pub mod gamestate;
pub mod input;
pub mod inputsimplecontroller;
pub mod projectile;
pub mod render;
pub mod time;
