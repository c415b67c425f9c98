//! Game configuration resource.
//!
//! Settings come from an optional INI file. Every key is optional and the
//! defaults reproduce the stock game, so running without a config file is
//! the normal case.
//!
//! # Configuration File Format
//!
//! ```ini
//! [window]
//! width = 1280
//! height = 720
//! title = Dungeon game
//! target_fps = 60
//!
//! [world]
//! background = 16,120,38
//!
//! [assets]
//! gfx_dir = gfx
//! map = map/test.json
//!
//! [player]
//! entity_type = player
//! x = 640
//! y = 360
//! scale = 3
//! speed = 5
//!
//! [animation]
//! cooldown_ms = 200
//!
//! [projectiles]
//! capacity = 32
//! lifetime_ticks = 120
//! ; optional: load gfx/<type>/ as the projectile sprite
//! type = fireball
//! speed = 8
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_WINDOW_WIDTH: u32 = 1280;
const DEFAULT_WINDOW_HEIGHT: u32 = 720;
const DEFAULT_WINDOW_TITLE: &str = "Dungeon game";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_BACKGROUND: [u8; 3] = [16, 120, 38];
const DEFAULT_GFX_DIR: &str = "gfx";
const DEFAULT_MAP_PATH: &str = "map/test.json";
const DEFAULT_PLAYER_TYPE: &str = "player";
const DEFAULT_PLAYER_X: f32 = 640.0;
const DEFAULT_PLAYER_Y: f32 = 360.0;
const DEFAULT_PLAYER_SCALE: f32 = 3.0;
const DEFAULT_PLAYER_SPEED: f32 = 5.0;
const DEFAULT_COOLDOWN_MS: u32 = 200;
const DEFAULT_PROJECTILE_CAPACITY: usize = 32;
const DEFAULT_PROJECTILE_LIFETIME: u32 = 120;
const DEFAULT_PROJECTILE_SPEED: f32 = 8.0;
pub const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone)]
pub struct GameConfig {
    pub window_width: u32,
    pub window_height: u32,
    pub window_title: String,
    /// Tick rate; also the frame pacing target.
    pub target_fps: u32,
    /// Clear color, RGB.
    pub background: [u8; 3],
    /// Root of the sprite frame directories.
    pub gfx_dir: PathBuf,
    /// Tiled JSON map loaded at startup.
    pub map_path: PathBuf,
    pub player_type: String,
    pub player_x: f32,
    pub player_y: f32,
    /// Uniform scale applied to every loaded frame.
    pub player_scale: f32,
    /// Pixels per tick.
    pub player_speed: f32,
    pub animation_cooldown_ms: u32,
    pub projectile_capacity: usize,
    pub projectile_lifetime_ticks: u32,
    /// Projectile frames to load at startup; none by default.
    pub projectile_type: Option<String>,
    /// Pixels per tick.
    pub projectile_speed: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

fn parse_rgb(value: &str) -> Option<[u8; 3]> {
    let parts: Vec<u8> = value
        .split(',')
        .map(|p| p.trim().parse::<u8>())
        .collect::<Result<_, _>>()
        .ok()?;
    match parts.as_slice() {
        [r, g, b] => Some([*r, *g, *b]),
        _ => None,
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            window_width: DEFAULT_WINDOW_WIDTH,
            window_height: DEFAULT_WINDOW_HEIGHT,
            window_title: DEFAULT_WINDOW_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            background: DEFAULT_BACKGROUND,
            gfx_dir: PathBuf::from(DEFAULT_GFX_DIR),
            map_path: PathBuf::from(DEFAULT_MAP_PATH),
            player_type: DEFAULT_PLAYER_TYPE.to_string(),
            player_x: DEFAULT_PLAYER_X,
            player_y: DEFAULT_PLAYER_Y,
            player_scale: DEFAULT_PLAYER_SCALE,
            player_speed: DEFAULT_PLAYER_SPEED,
            animation_cooldown_ms: DEFAULT_COOLDOWN_MS,
            projectile_capacity: DEFAULT_PROJECTILE_CAPACITY,
            projectile_lifetime_ticks: DEFAULT_PROJECTILE_LIFETIME,
            projectile_type: None,
            projectile_speed: DEFAULT_PROJECTILE_SPEED,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Animation cooldown in seconds.
    pub fn animation_cooldown(&self) -> f64 {
        f64::from(self.animation_cooldown_ms) / 1000.0
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);
        info!(
            "Loaded config from {:?}: {}x{} window, fps={}, player '{}' at ({}, {})",
            self.config_path,
            self.window_width,
            self.window_height,
            self.target_fps,
            self.player_type,
            self.player_x,
            self.player_y
        );
        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        let uint = |section: &str, key: &str| config.getuint(section, key).ok().flatten();
        let uint32 = |section: &str, key: &str| {
            let value = uint(section, key)?;
            match u32::try_from(value) {
                Ok(v) => Some(v),
                Err(_) => {
                    log::warn!("Ignoring out of range [{}] {} = {}", section, key, value);
                    None
                }
            }
        };
        let float = |section: &str, key: &str| {
            config
                .getfloat(section, key)
                .ok()
                .flatten()
                .map(|v| v as f32)
        };

        // [window] section
        if let Some(width) = uint32("window", "width") {
            self.window_width = width;
        }
        if let Some(height) = uint32("window", "height") {
            self.window_height = height;
        }
        if let Some(title) = config.get("window", "title") {
            self.window_title = title;
        }
        if let Some(fps) = uint32("window", "target_fps") {
            self.target_fps = fps;
        }

        // [world] section
        if let Some(value) = config.get("world", "background") {
            match parse_rgb(&value) {
                Some(rgb) => self.background = rgb,
                None => log::warn!("Ignoring invalid background color '{}'", value),
            }
        }

        // [assets] section
        if let Some(dir) = config.get("assets", "gfx_dir") {
            self.gfx_dir = PathBuf::from(dir);
        }
        if let Some(map) = config.get("assets", "map") {
            self.map_path = PathBuf::from(map);
        }

        // [player] section
        if let Some(entity_type) = config.get("player", "entity_type") {
            self.player_type = entity_type;
        }
        if let Some(x) = float("player", "x") {
            self.player_x = x;
        }
        if let Some(y) = float("player", "y") {
            self.player_y = y;
        }
        if let Some(scale) = float("player", "scale") {
            self.player_scale = scale;
        }
        if let Some(speed) = float("player", "speed") {
            self.player_speed = speed;
        }

        // [animation] section
        if let Some(ms) = uint32("animation", "cooldown_ms") {
            self.animation_cooldown_ms = ms;
        }

        // [projectiles] section
        if let Some(capacity) = uint32("projectiles", "capacity") {
            self.projectile_capacity = capacity as usize;
        }
        if let Some(ticks) = uint32("projectiles", "lifetime_ticks") {
            self.projectile_lifetime_ticks = ticks;
        }
        if let Some(projectile_type) = config.get("projectiles", "type") {
            self.projectile_type = Some(projectile_type).filter(|t| !t.is_empty());
        }
        if let Some(speed) = float("projectiles", "speed") {
            self.projectile_speed = speed;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        config.set("window", "width", Some(self.window_width.to_string()));
        config.set("window", "height", Some(self.window_height.to_string()));
        config.set("window", "title", Some(self.window_title.clone()));
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        let [r, g, b] = self.background;
        config.set("world", "background", Some(format!("{},{},{}", r, g, b)));

        config.set(
            "assets",
            "gfx_dir",
            Some(self.gfx_dir.to_string_lossy().into_owned()),
        );
        config.set(
            "assets",
            "map",
            Some(self.map_path.to_string_lossy().into_owned()),
        );

        config.set("player", "entity_type", Some(self.player_type.clone()));
        config.set("player", "x", Some(self.player_x.to_string()));
        config.set("player", "y", Some(self.player_y.to_string()));
        config.set("player", "scale", Some(self.player_scale.to_string()));
        config.set("player", "speed", Some(self.player_speed.to_string()));

        config.set(
            "animation",
            "cooldown_ms",
            Some(self.animation_cooldown_ms.to_string()),
        );

        config.set(
            "projectiles",
            "capacity",
            Some(self.projectile_capacity.to_string()),
        );
        config.set(
            "projectiles",
            "lifetime_ticks",
            Some(self.projectile_lifetime_ticks.to_string()),
        );
        if let Some(projectile_type) = &self.projectile_type {
            config.set("projectiles", "type", Some(projectile_type.clone()));
        }
        config.set(
            "projectiles",
            "speed",
            Some(self.projectile_speed.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }
}
