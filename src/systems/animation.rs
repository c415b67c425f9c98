//! Animation system.
//!
//! [`animation`] advances every [`Animation`] against the world clock and
//! copies the frame to display into the entity's [`Sprite`] when it differs
//! from the one already shown. The frame is read before the advance, so a
//! new index is first drawn on the next tick.
//!
//! # Related
//!
//! - [`crate::components::animation::Animation`] – per-entity animation state
//! - [`crate::systems::inputsimplecontroller::player_controller`] – picks the action

use bevy_ecs::prelude::*;

use crate::components::animation::Animation;
use crate::components::sprite::Sprite;
use crate::resources::worldtime::WorldTime;

/// Advance animation playback and update the sprite frame.
pub fn animation(mut query: Query<(&mut Animation, &mut Sprite)>, time: Res<WorldTime>) {
    for (mut anim, mut sprite) in query.iter_mut() {
        let Some(image) = anim.update_animation(time.elapsed) else {
            continue;
        };
        if sprite.image != *image {
            sprite.image = image.clone();
        }
    }
}
