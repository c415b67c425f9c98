//! ECS resources made available to systems.
//!
//! Overview
//! - `assetmanifest` – frame manifests, asset path resolution and [`assetmanifest::AssetError`]
//! - `gameconfig` – INI-backed settings with built-in defaults
//! - `gamestate` – setup / playing / quitting
//! - `input` – persistent movement latches fed by input events
//! - `projectilepool` – fixed-capacity projectile slots
//! - `texturestore` – loaded textures keyed by file path
//! - `tilemapstore` – loaded Tiled JSON maps
//! - `worldtime` – simulation clock driving animation cooldowns
pub mod assetmanifest;
pub mod gameconfig;
pub mod gamestate;
pub mod input;
pub mod projectilepool;
pub mod texturestore;
pub mod tilemapstore;
pub mod worldtime;
