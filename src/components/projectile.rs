//! Projectile state.
//!
//! Projectiles are not ECS entities: they live in the fixed-capacity
//! [`ProjectilePool`](crate::resources::projectilepool::ProjectilePool).
//! Each one plays a single flat frame list on its kind's frame cooldown, moves a fixed distance per tick and expires when its lifetime
//! in ticks runs out.

use std::sync::Arc;

use raylib::prelude::Vector2;

use crate::components::animation::ANIMATION_COOLDOWN;
use crate::components::sprite::Frame;

/// Shared, immutable description of a projectile type.
#[derive(Debug, Clone)]
pub struct ProjectileKind {
    pub projectile_type: String,
    pub frames: Arc<[Frame]>,
    /// Pixels per tick.
    pub speed: f32,
    pub lifetime_ticks: u32,
    /// Seconds between frame advances.
    pub cooldown: f64,
}

impl ProjectileKind {
    /// Returns `None` when `frames` is empty.
    pub fn new(
        projectile_type: impl Into<String>,
        frames: Vec<Frame>,
        speed: f32,
        lifetime_ticks: u32,
    ) -> Option<Self> {
        if frames.is_empty() {
            return None;
        }
        Some(Self {
            projectile_type: projectile_type.into(),
            frames: frames.into(),
            speed,
            lifetime_ticks,
            cooldown: ANIMATION_COOLDOWN,
        })
    }

    pub fn with_cooldown(mut self, cooldown: f64) -> Self {
        self.cooldown = cooldown;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProjectilePhase {
    Live,
    Expired,
}

#[derive(Debug, Clone)]
pub struct Projectile {
    pub projectile_type: String,
    frames: Arc<[Frame]>,
    pub pos: Vector2,
    /// Unit vector, or zero for a projectile that stays put.
    pub direction: Vector2,
    pub speed: f32,
    pub frame_index: usize,
    pub last_update_time: f64,
    pub cooldown: f64,
    pub remaining_ticks: u32,
    pub phase: ProjectilePhase,
}

impl Projectile {
    pub fn spawn(kind: &ProjectileKind, pos: Vector2, direction: Vector2, now: f64) -> Self {
        let len = (direction.x * direction.x + direction.y * direction.y).sqrt();
        let direction = if len > 0.0 {
            Vector2 {
                x: direction.x / len,
                y: direction.y / len,
            }
        } else {
            Vector2 { x: 0.0, y: 0.0 }
        };
        let phase = if kind.lifetime_ticks == 0 {
            ProjectilePhase::Expired
        } else {
            ProjectilePhase::Live
        };
        Self {
            projectile_type: kind.projectile_type.clone(),
            frames: Arc::clone(&kind.frames),
            pos,
            direction,
            speed: kind.speed,
            frame_index: 0,
            last_update_time: now,
            cooldown: kind.cooldown,
            remaining_ticks: kind.lifetime_ticks,
            phase,
        }
    }

    pub fn image(&self) -> Option<&Frame> {
        self.frames.get(self.frame_index)
    }

    pub fn is_expired(&self) -> bool {
        self.phase == ProjectilePhase::Expired
    }

    /// One tick: advance the frame, move, burn one tick of lifetime.
    pub fn update(&mut self, now: f64) {
        if self.is_expired() {
            return;
        }
        if now - self.last_update_time >= self.cooldown {
            self.last_update_time = now;
            self.frame_index += 1;
        }
        if self.frame_index >= self.frames.len() {
            self.frame_index = 0;
        }

        self.pos.x += self.direction.x * self.speed;
        self.pos.y += self.direction.y * self.speed;

        self.remaining_ticks = self.remaining_ticks.saturating_sub(1);
        if self.remaining_ticks == 0 {
            self.phase = ProjectilePhase::Expired;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kind(frames: usize, lifetime_ticks: u32) -> ProjectileKind {
        let frames = (0..frames)
            .map(|i| Frame::new(format!("gfx/fireball/{}.png", i), 16.0, 16.0))
            .collect();
        ProjectileKind::new("fireball", frames, 4.0, lifetime_ticks).unwrap()
    }

    #[test]
    fn test_kind_requires_frames() {
        assert!(ProjectileKind::new("fireball", Vec::new(), 4.0, 10).is_none());
    }

    #[test]
    fn test_spawn_normalizes_direction() {
        let p = Projectile::spawn(
            &kind(2, 10),
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 3.0, y: 4.0 },
            0.0,
        );
        assert!((p.direction.x - 0.6).abs() < 1e-6);
        assert!((p.direction.y - 0.8).abs() < 1e-6);
        assert_eq!(p.phase, ProjectilePhase::Live);
    }

    #[test]
    fn test_update_moves_by_speed() {
        let mut p = Projectile::spawn(
            &kind(2, 10),
            Vector2 { x: 10.0, y: 10.0 },
            Vector2 { x: -1.0, y: 0.0 },
            0.0,
        );
        p.update(0.0);
        p.update(0.0);
        assert_eq!(p.pos.x, 2.0);
        assert_eq!(p.pos.y, 10.0);
    }

    #[test]
    fn test_expires_after_lifetime() {
        let mut p = Projectile::spawn(
            &kind(1, 3),
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 1.0, y: 0.0 },
            0.0,
        );
        p.update(0.0);
        p.update(0.0);
        assert!(!p.is_expired());
        p.update(0.0);
        assert!(p.is_expired());
        let x = p.pos.x;
        p.update(1.0);
        assert_eq!(p.pos.x, x);
    }

    #[test]
    fn test_frames_cycle_on_cooldown() {
        let mut p = Projectile::spawn(
            &kind(2, 100),
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 1.0, y: 0.0 },
            0.0,
        );
        p.update(0.1);
        assert_eq!(p.frame_index, 0);
        p.update(0.25);
        assert_eq!(p.frame_index, 1);
        assert_eq!(p.image().unwrap().tex_key, "gfx/fireball/1.png");
        p.update(0.5);
        assert_eq!(p.frame_index, 0);
    }

    #[test]
    fn test_kind_cooldown_carries_to_projectile() {
        let slow = kind(2, 100).with_cooldown(0.5);
        assert_eq!(kind(2, 100).cooldown, ANIMATION_COOLDOWN);
        let mut p = Projectile::spawn(
            &slow,
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 1.0, y: 0.0 },
            0.0,
        );
        p.update(0.25);
        assert_eq!(p.frame_index, 0);
        p.update(0.5);
        assert_eq!(p.frame_index, 1);
        assert_eq!(p.last_update_time, 0.5);
    }
}
