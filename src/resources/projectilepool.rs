//! Fixed-capacity projectile pool.
//!
//! Slots are reused: [`ProjectilePool::spawn`] fills the first free slot and
//! [`ProjectilePool::update`] frees a slot in the same tick its projectile
//! expires. Nothing in the shipped game fires, so the pool is updated and
//! drawn every tick while staying empty.

use bevy_ecs::prelude::Resource;
use raylib::prelude::Vector2;

use crate::components::projectile::{Projectile, ProjectileKind};

#[derive(Resource, Debug, Clone)]
pub struct ProjectilePool {
    slots: Vec<Option<Projectile>>,
    /// Projectile type fired by [`ProjectilePool::fire`], if one was loaded.
    kind: Option<ProjectileKind>,
}

impl ProjectilePool {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: vec![None; capacity],
            kind: None,
        }
    }

    pub fn with_kind(mut self, kind: ProjectileKind) -> Self {
        self.kind = Some(kind);
        self
    }

    /// Spawn the loaded projectile type at `pos` heading along `direction`.
    pub fn fire(&mut self, pos: Vector2, direction: Vector2, now: f64) -> Option<usize> {
        let projectile = Projectile::spawn(self.kind.as_ref()?, pos, direction, now);
        self.spawn(projectile)
    }

    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    pub fn live_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Store a projectile; returns its slot, or `None` when the pool is full
    /// or the projectile is already expired.
    pub fn spawn(&mut self, projectile: Projectile) -> Option<usize> {
        if projectile.is_expired() {
            return None;
        }
        let slot = self.slots.iter().position(|s| s.is_none())?;
        log::debug!(
            "spawned {} in slot {} at ({}, {})",
            projectile.projectile_type,
            slot,
            projectile.pos.x,
            projectile.pos.y
        );
        self.slots[slot] = Some(projectile);
        Some(slot)
    }

    /// Advance every live projectile one tick and free the expired ones.
    pub fn update(&mut self, now: f64) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            let Some(projectile) = slot.as_mut() else { continue };
            projectile.update(now);
            if projectile.is_expired() {
                log::debug!("{} in slot {} expired", projectile.projectile_type, index);
                *slot = None;
            }
        }
    }

    pub fn live(&self) -> impl Iterator<Item = &Projectile> {
        self.slots.iter().flatten()
    }

    pub fn get(&self, slot: usize) -> Option<&Projectile> {
        self.slots.get(slot)?.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::components::sprite::Frame;

    fn fireball_kind(lifetime_ticks: u32) -> ProjectileKind {
        ProjectileKind::new(
            "fireball",
            vec![Frame::new("gfx/fireball/0.png", 16.0, 16.0)],
            3.0,
            lifetime_ticks,
        )
        .unwrap()
    }

    fn fireball(lifetime_ticks: u32) -> Projectile {
        Projectile::spawn(
            &fireball_kind(lifetime_ticks),
            Vector2 { x: 0.0, y: 0.0 },
            Vector2 { x: 0.0, y: 1.0 },
            0.0,
        )
    }

    #[test]
    fn test_new_pool_is_empty() {
        let pool = ProjectilePool::with_capacity(4);
        assert_eq!(pool.capacity(), 4);
        assert_eq!(pool.live_count(), 0);
        assert_eq!(pool.live().count(), 0);
    }

    #[test]
    fn test_update_on_empty_pool_is_noop() {
        let mut pool = ProjectilePool::with_capacity(4);
        pool.update(1.0);
        assert_eq!(pool.live_count(), 0);
    }

    #[test]
    fn test_spawn_until_full() {
        let mut pool = ProjectilePool::with_capacity(2);
        assert_eq!(pool.spawn(fireball(10)), Some(0));
        assert_eq!(pool.spawn(fireball(10)), Some(1));
        assert_eq!(pool.spawn(fireball(10)), None);
        assert_eq!(pool.live_count(), 2);
    }

    #[test]
    fn test_expired_slot_is_reused() {
        let mut pool = ProjectilePool::with_capacity(2);
        pool.spawn(fireball(1));
        pool.spawn(fireball(10));
        pool.update(0.0);
        assert!(pool.get(0).is_none());
        assert!(pool.get(1).is_some());
        assert_eq!(pool.spawn(fireball(10)), Some(0));
    }

    #[test]
    fn test_update_moves_live_projectiles() {
        let mut pool = ProjectilePool::with_capacity(1);
        pool.spawn(fireball(10));
        pool.update(0.0);
        pool.update(0.0);
        assert_eq!(pool.get(0).unwrap().pos.y, 6.0);
    }

    #[test]
    fn test_already_expired_projectile_rejected() {
        let mut pool = ProjectilePool::with_capacity(1);
        assert_eq!(pool.spawn(fireball(0)), None);
    }

    #[test]
    fn test_fire_without_kind_does_nothing() {
        let mut pool = ProjectilePool::with_capacity(2);
        let fired = pool.fire(Vector2 { x: 0.0, y: 0.0 }, Vector2 { x: 1.0, y: 0.0 }, 0.0);
        assert_eq!(fired, None);
        assert_eq!(pool.live_count(), 0);
    }

    #[test]
    fn test_fire_uses_loaded_kind() {
        let mut pool = ProjectilePool::with_capacity(2).with_kind(fireball_kind(5));
        let slot = pool
            .fire(Vector2 { x: 10.0, y: 0.0 }, Vector2 { x: 2.0, y: 0.0 }, 0.0)
            .unwrap();
        let projectile = pool.get(slot).unwrap();
        assert_eq!(projectile.projectile_type, "fireball");
        assert_eq!(projectile.direction.x, 1.0);
        assert_eq!(projectile.remaining_ticks, 5);
    }
}
