//! Startup: load the map and the player's frames, spawn the player.
//!
//! Everything here runs once before the first tick. Any asset problem is
//! returned as an [`AssetError`] and aborts startup.

use std::path::Path;

use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::actor::{Actor, Player};
use crate::components::animation::{Animation, WalkAction};
use crate::components::inputcontrolled::InputControlled;
use crate::components::mapposition::MapPosition;
use crate::components::projectile::ProjectileKind;
use crate::components::sprite::{Frame, Sprite};
use crate::resources::assetmanifest::{
    AssetError, EntityFramePaths, resolve_entity_frames, resolve_projectile_frames,
};
use crate::resources::gameconfig::GameConfig;
use crate::resources::gamestate::{GameState, GameStates};
use crate::resources::projectilepool::ProjectilePool;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemapstore::{Tilemap, TilemapStore};
use crate::resources::worldtime::WorldTime;

/// Key of the startup map in the [`TilemapStore`].
pub const MAP_KEY: &str = "level";

/// Scaled pixel size, truncated like the source art pipeline.
pub fn scaled_size(width: i32, height: i32, scale: f32) -> (i32, i32) {
    (
        (width as f32 * scale) as i32,
        (height as f32 * scale) as i32,
    )
}

/// Load one image, scale it and register the texture under its path.
fn load_frame(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    textures: &mut TextureStore,
    path: &Path,
    scale: f32,
) -> Result<Frame, AssetError> {
    let key = path.to_string_lossy().into_owned();
    let mut image = Image::load_image(&key).map_err(|e| AssetError::Image {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    let (width, height) = scaled_size(image.width, image.height, scale);
    if width <= 0 || height <= 0 {
        return Err(AssetError::Image {
            path: path.to_path_buf(),
            reason: format!("scaled size {}x{} is empty", width, height),
        });
    }
    image.resize_nn(width, height);
    let texture = rl
        .load_texture_from_image(thread, &image)
        .map_err(|e| AssetError::Texture {
            path: path.to_path_buf(),
            reason: e.to_string(),
        })?;
    textures.insert(key.clone(), texture);
    Ok(Frame::new(key, width as f32, height as f32))
}

/// Load every frame of a walking entity.
pub fn load_entity_frames(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    textures: &mut TextureStore,
    paths: &EntityFramePaths,
    scale: f32,
) -> Result<[Vec<Frame>; 3], AssetError> {
    let mut frames: [Vec<Frame>; 3] = Default::default();
    for action in WalkAction::ALL {
        frames[action.index()] = paths.actions[action.index()]
            .iter()
            .map(|path| load_frame(rl, thread, textures, path, scale))
            .collect::<Result<_, _>>()?;
    }
    Ok(frames)
}

/// Load a projectile type's frames into a [`ProjectileKind`].
///
/// Projectiles share the player's scale.
pub fn load_projectile_kind(
    rl: &mut RaylibHandle,
    thread: &RaylibThread,
    textures: &mut TextureStore,
    config: &GameConfig,
    projectile_type: &str,
) -> Result<ProjectileKind, AssetError> {
    let paths = resolve_projectile_frames(&config.gfx_dir, projectile_type)?;
    let frames = paths
        .iter()
        .map(|path| load_frame(rl, thread, textures, path, config.player_scale))
        .collect::<Result<Vec<_>, _>>()?;
    let kind = ProjectileKind::new(
        projectile_type,
        frames,
        config.projectile_speed,
        config.projectile_lifetime_ticks,
    )
    .ok_or_else(|| AssetError::EmptySequence {
        name: projectile_type.to_string(),
        path: config.gfx_dir.join(projectile_type),
    })?;
    Ok(kind.with_cooldown(config.animation_cooldown()))
}

/// Spawn the player entity from already loaded frames.
pub fn spawn_player(
    commands: &mut Commands,
    config: &GameConfig,
    frames: [Vec<Frame>; 3],
    now: f64,
) -> Result<Entity, AssetError> {
    let animation = Animation::new(frames, now)
        .ok_or_else(|| AssetError::EmptySequence {
            name: config.player_type.clone(),
            path: config.gfx_dir.join(&config.player_type),
        })?
        .with_cooldown(config.animation_cooldown());
    let first = animation
        .current_frame()
        .cloned()
        .ok_or_else(|| AssetError::EmptySequence {
            name: WalkAction::Down.dir_name().to_string(),
            path: config.gfx_dir.join(&config.player_type),
        })?;

    let entity = commands
        .spawn((
            Player,
            Actor::new(config.player_type.clone()),
            MapPosition::new(config.player_x, config.player_y),
            InputControlled::new(config.player_speed),
            Sprite::new(first),
            animation,
        ))
        .id();
    Ok(entity)
}

/// Startup system: map, textures, player, projectile pool.
pub fn setup(
    mut commands: Commands,
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    config: Res<GameConfig>,
    time: Res<WorldTime>,
    mut state: ResMut<GameState>,
) -> Result<(), AssetError> {
    let map = Tilemap::load(&config.map_path)?;
    log::info!(
        "Loaded map {:?}: {}x{} tiles, {} layers",
        config.map_path,
        map.width,
        map.height,
        map.layers.len()
    );
    let mut tilemaps = TilemapStore::new();
    tilemaps.insert(MAP_KEY, map);
    commands.insert_resource(tilemaps);

    let mut textures = TextureStore::new();
    let paths = resolve_entity_frames(&config.gfx_dir, &config.player_type)?;
    let frames = load_entity_frames(&mut rl, &th, &mut textures, &paths, config.player_scale)?;
    log::info!(
        "Loaded '{}': {} textures at scale {}",
        config.player_type,
        textures.map.len(),
        config.player_scale
    );
    spawn_player(&mut commands, &config, frames, time.elapsed)?;

    let mut pool = ProjectilePool::with_capacity(config.projectile_capacity);
    if let Some(projectile_type) = &config.projectile_type {
        let kind = load_projectile_kind(&mut rl, &th, &mut textures, &config, projectile_type)?;
        log::info!(
            "Loaded projectile '{}': {} frames",
            projectile_type,
            kind.frames.len()
        );
        pool = pool.with_kind(kind);
    }
    commands.insert_resource(pool);
    commands.insert_resource(textures);

    state.set(GameStates::Playing);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use bevy_ecs::system::RunSystemOnce;

    #[test]
    fn test_scaled_size_truncates() {
        assert_eq!(scaled_size(16, 16, 3.0), (48, 48));
        assert_eq!(scaled_size(15, 7, 1.5), (22, 10));
        assert_eq!(scaled_size(16, 16, 0.01), (0, 0));
    }

    fn test_frames() -> [Vec<Frame>; 3] {
        [
            vec![Frame::new("d0", 48.0, 48.0), Frame::new("d1", 48.0, 48.0)],
            vec![Frame::new("h0", 48.0, 48.0)],
            vec![Frame::new("u0", 48.0, 48.0)],
        ]
    }

    #[test]
    fn test_spawn_player_uses_config() {
        let mut world = World::new();
        world.insert_resource(GameConfig::new());
        let entity = world
            .run_system_once(|mut commands: Commands, config: Res<GameConfig>| {
                spawn_player(&mut commands, &config, test_frames(), 0.0)
            })
            .unwrap()
            .unwrap();

        let pos = world.get::<MapPosition>(entity).unwrap();
        assert_eq!((pos.pos.x, pos.pos.y), (640.0, 360.0));
        assert_eq!(world.get::<InputControlled>(entity).unwrap().speed, 5.0);
        assert_eq!(world.get::<Sprite>(entity).unwrap().image.tex_key, "d0");
        let actor = world.get::<Actor>(entity).unwrap();
        assert!(actor.alive);
        assert_eq!(actor.entity_type, "player");
        assert!(world.get::<Player>(entity).is_some());
        assert_eq!(world.get::<Animation>(entity).unwrap().action, WalkAction::Down);
    }

    #[test]
    fn test_spawn_player_rejects_empty_action() {
        let mut world = World::new();
        world.insert_resource(GameConfig::new());
        let result = world
            .run_system_once(|mut commands: Commands, config: Res<GameConfig>| {
                let frames = [vec![Frame::new("d0", 1.0, 1.0)], Vec::new(), Vec::new()];
                spawn_player(&mut commands, &config, frames, 0.0)
            })
            .unwrap();
        assert!(matches!(result, Err(AssetError::EmptySequence { .. })));
    }
}
