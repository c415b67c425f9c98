//! Player controller.
//!
//! Once per tick, for every living player: pick the animation from the
//! latch (down, then side, then up, else idle), then move by the
//! overwrite rule of [`InputControlled::step`].
use bevy_ecs::prelude::*;

use crate::components::actor::{Actor, Player};
use crate::components::animation::{ActionRequest, Animation};
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::sprite::Sprite;
use crate::resources::input::InputState;
use crate::resources::worldtime::WorldTime;

pub fn player_controller(
    mut query: Query<
        (
            &Actor,
            &mut Animation,
            &mut InputControlled,
            &mut MapPosition,
            &mut Sprite,
        ),
        With<Player>,
    >,
    input_state: Res<InputState>,
    time: Res<WorldTime>,
) {
    let latch = input_state.movement();
    for (actor, mut anim, mut controlled, mut position, mut sprite) in query.iter_mut() {
        if !actor.alive {
            continue;
        }
        anim.update_action(ActionRequest::from_latch(&latch), time.elapsed);

        let step = controlled.step(&latch);
        position.pos.x += step.delta.x;
        position.pos.y += step.delta.y;
        if let Some(flip) = step.flip {
            sprite.flip_h = flip;
        }
    }
}
