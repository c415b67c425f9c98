use bevy_ecs::prelude::Component;

/// One scaled animation frame: the texture key registered in the
/// [`TextureStore`](crate::resources::texturestore::TextureStore) plus its
/// size in pixels after scaling.
#[derive(Clone, Debug, PartialEq)]
pub struct Frame {
    pub tex_key: String,
    pub width: f32,
    pub height: f32,
}

impl Frame {
    pub fn new(tex_key: impl Into<String>, width: f32, height: f32) -> Self {
        Self {
            tex_key: tex_key.into(),
            width,
            height,
        }
    }
}

/// Sprite is the image currently shown for an entity.
///
/// The animation system swaps `image` when the displayed frame changes; the move rule owns
/// `flip_h`. Frames are drawn centered on the entity's
/// [`MapPosition`](super::mapposition::MapPosition).
#[derive(Component, Clone, Debug)]
pub struct Sprite {
    pub image: Frame,
    /// Mirror horizontally when drawing. There is no vertical flip.
    pub flip_h: bool,
}

impl Sprite {
    pub fn new(image: Frame) -> Self {
        Self {
            image,
            flip_h: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sprite_starts_unflipped() {
        let sprite = Sprite::new(Frame::new("gfx/player/walking_down/0.png", 48.0, 48.0));
        assert!(!sprite.flip_h);
    }
}
