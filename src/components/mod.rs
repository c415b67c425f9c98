//! ECS components for entities.
//!
//! Submodules overview:
//! - [`actor`] – entity type, liveness and the player marker
//! - [`animation`] – walk actions and the frame-advance state machine
//! - [`inputcontrolled`] – speed, sticky facing and the move rule
//! - [`mapposition`] – world-space center point
//! - [`projectile`] – pooled projectile state
//! - [`sprite`] – current frame and horizontal mirroring

pub mod actor;
pub mod animation;
pub mod inputcontrolled;
pub mod mapposition;
pub mod projectile;
pub mod sprite;
