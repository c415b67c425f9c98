//! Render system.
//!
//! Clears to the configured background, draws the projectile pool, then
//! every sprite centered on its [`MapPosition`]. Dropping the draw handle
//! ends the frame: raylib presents it, waits out the target frame time and
//! polls the OS input queue.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::components::mapposition::MapPosition;
use crate::components::sprite::{Frame, Sprite};
use crate::resources::gameconfig::GameConfig;
use crate::resources::projectilepool::ProjectilePool;
use crate::resources::texturestore::TextureStore;

/// Source rect, destination rect and pivot for drawing `frame` centered on
/// `pos`. A negative source width mirrors the texture horizontally.
pub fn frame_rects(frame: &Frame, pos: Vector2, flip_h: bool) -> (Rectangle, Rectangle, Vector2) {
    let src = Rectangle {
        x: 0.0,
        y: 0.0,
        width: if flip_h { -frame.width } else { frame.width },
        height: frame.height,
    };
    let dest = Rectangle {
        x: pos.x,
        y: pos.y,
        width: frame.width,
        height: frame.height,
    };
    let origin = Vector2 {
        x: frame.width * 0.5,
        y: frame.height * 0.5,
    };
    (src, dest, origin)
}

fn draw_frame(
    d: &mut RaylibDrawHandle,
    textures: &TextureStore,
    frame: &Frame,
    pos: Vector2,
    flip_h: bool,
) {
    match textures.get(&frame.tex_key) {
        Some(tex) => {
            let (src, dest, origin) = frame_rects(frame, pos, flip_h);
            d.draw_texture_pro(tex, src, dest, origin, 0.0, Color::WHITE);
        }
        None => log::warn!("texture '{}' not loaded", frame.tex_key),
    }
}

pub fn render_system(
    mut rl: NonSendMut<raylib::RaylibHandle>,
    th: NonSend<raylib::RaylibThread>,
    config: Res<GameConfig>,
    textures: Res<TextureStore>,
    projectiles: Res<ProjectilePool>,
    sprites: Query<(&Sprite, &MapPosition)>,
) {
    let [r, g, b] = config.background;
    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::new(r, g, b, 255));

    for projectile in projectiles.live() {
        if let Some(frame) = projectile.image() {
            draw_frame(&mut d, &textures, frame, projectile.pos, false);
        }
    }

    for (sprite, position) in sprites.iter() {
        draw_frame(&mut d, &textures, &sprite.image, position.pos, sprite.flip_h);
    }
}
