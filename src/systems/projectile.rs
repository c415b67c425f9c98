use bevy_ecs::prelude::*;

use crate::resources::projectilepool::ProjectilePool;
use crate::resources::worldtime::WorldTime;

/// Advance all pooled projectiles one tick.
pub fn update_projectiles(mut pool: ResMut<ProjectilePool>, time: Res<WorldTime>) {
    pool.update(time.elapsed);
}
