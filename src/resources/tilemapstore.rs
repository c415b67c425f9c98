//! Tilemap storage and data types.
//!
//! Maps are authored in Tiled and exported as Tiled JSON. Only the parts the
//! game reads are modelled: map and tile size, tile layers with their gid
//! data and tileset first-gids. Gids are kept raw, flip flags included. The map is loaded once at startup and kept in
//! the [`TilemapStore`]; gameplay does not consult it yet.

use std::fs;
use std::path::Path;

use bevy_ecs::prelude::Resource;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::resources::assetmanifest::AssetError;

/// A tileset reference; embedded and external tilesets both carry `firstgid`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TilesetRef {
    pub firstgid: u32,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub source: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

/// A map layer. Non-tile layers deserialize with empty `data`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilelayer {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: String,
    #[serde(default)]
    pub width: u32,
    #[serde(default)]
    pub height: u32,
    #[serde(default)]
    pub data: Vec<u32>,
    #[serde(default = "default_visible")]
    pub visible: bool,
}

fn default_visible() -> bool {
    true
}

/// Tilemap metadata and layers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilemap {
    /// Map width in tiles.
    pub width: u32,
    /// Map height in tiles.
    pub height: u32,
    /// Tile size in pixels.
    pub tilewidth: u32,
    pub tileheight: u32,
    #[serde(default)]
    pub layers: Vec<Tilelayer>,
    #[serde(default)]
    pub tilesets: Vec<TilesetRef>,
}

impl Tilemap {
    /// Read and parse a Tiled JSON map.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, AssetError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| AssetError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&text).map_err(|source| AssetError::InvalidMap {
            path: path.to_path_buf(),
            source,
        })
    }
}

/// Registry of loaded tilemaps by key.
#[derive(Resource, Debug, Default)]
pub struct TilemapStore {
    pub map: FxHashMap<String, Tilemap>,
}

impl TilemapStore {
    /// Create an empty store.
    pub fn new() -> Self {
        TilemapStore {
            map: FxHashMap::default(),
        }
    }
    /// Insert a tilemap with a specific key.
    pub fn insert(&mut self, key: impl Into<String>, tilemap: Tilemap) {
        self.map.insert(key.into(), tilemap);
    }
}
