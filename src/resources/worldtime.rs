use bevy_ecs::prelude::Resource;

/// Simulation clock.
///
/// `elapsed` is the animation cooldown clock; it advances by the measured
/// frame time so cooldowns follow the wall clock. It is kept in `f64` so
/// frame-sized steps still register after days of uptime. Movement ignores
/// `delta` and steps a fixed amount per tick.
#[derive(Resource, Clone, Copy, Debug)]
pub struct WorldTime {
    pub elapsed: f64,
    pub delta: f32,
    pub time_scale: f32,
    pub frame_count: u64,
}

impl Default for WorldTime {
    fn default() -> Self {
        WorldTime {
            elapsed: 0.0,
            delta: 0.0,
            time_scale: 1.0,
            frame_count: 0,
        }
    }
}

impl WorldTime {
    pub fn with_time_scale(mut self, time_scale: f32) -> Self {
        self.time_scale = time_scale;
        self
    }
}
