//! Windowless scene backend
//!
//! Implements the `Scene` seam with no rendering or audio device so the
//! scenarios can run under tests and in the scripted demo binary. Draw and
//! viewport calls are recorded for assertions.

use glam::Vec2;

use crate::aabb_overlap;
use crate::error::SetupError;
use crate::settings::DisplayConfig;

use super::backend::{PlatformerPhysics, Scene};
use super::sprite::{SoundHandle, Sprite, SpriteId, SpriteList, TextureHandle};

/// Base size given to textures the backend has no registered size for
pub const DEFAULT_TEXTURE_SIZE: Vec2 = Vec2::new(64.0, 64.0);

/// Scene backend with no window, recording calls instead of rendering
#[derive(Debug, Default)]
pub struct HeadlessScene {
    textures: Vec<String>,
    sounds: Vec<String>,
    sized: Vec<(String, Vec2)>,
    missing: Vec<String>,
    /// Sounds played, in order
    pub played: Vec<SoundHandle>,
    /// Viewport rectangles applied, in order (left, right, bottom, top)
    pub viewports: Vec<(f32, f32, f32, f32)>,
    /// Count of sprite/list/text draw calls
    pub draw_calls: usize,
    /// Last configuration applied
    pub config: Option<DisplayConfig>,
}

impl HeadlessScene {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a base size for a texture path (defaults to 64x64)
    pub fn set_texture_size(&mut self, path: &str, size: Vec2) {
        self.sized.push((path.to_string(), size));
    }

    /// Make a resource path fail to load, for asset-error tests
    pub fn deny_asset(&mut self, path: &str) {
        self.missing.push(path.to_string());
    }

    fn check_missing(&self, path: &str) -> Result<(), SetupError> {
        if self.missing.iter().any(|p| p == path) {
            return Err(SetupError::AssetLoad {
                path: path.to_string(),
                source: std::io::Error::from(std::io::ErrorKind::NotFound),
            });
        }
        Ok(())
    }
}

impl Scene for HeadlessScene {
    fn apply_config(&mut self, config: &DisplayConfig) {
        self.config = Some(config.clone());
    }

    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, SetupError> {
        self.check_missing(path)?;
        let size = self
            .sized
            .iter()
            .find(|(p, _)| p == path)
            .map(|(_, s)| *s)
            .unwrap_or(DEFAULT_TEXTURE_SIZE);
        self.textures.push(path.to_string());
        Ok(TextureHandle {
            id: self.textures.len() as u32,
            size,
        })
    }

    fn load_sound(&mut self, path: &str) -> Result<SoundHandle, SetupError> {
        self.check_missing(path)?;
        self.sounds.push(path.to_string());
        Ok(SoundHandle(self.sounds.len() as u32))
    }

    fn play_sound(&mut self, sound: SoundHandle) {
        self.played.push(sound);
    }

    fn set_viewport(&mut self, left: f32, right: f32, bottom: f32, top: f32) {
        self.viewports.push((left, right, bottom, top));
    }

    fn draw_sprite(&mut self, _sprite: &Sprite) {
        self.draw_calls += 1;
    }

    fn draw_list(&mut self, _list: &SpriteList) {
        self.draw_calls += 1;
    }

    fn draw_text(&mut self, _text: &str, _x: f32, _y: f32) {
        self.draw_calls += 1;
    }

    fn overlapping(&self, sprite: &Sprite, list: &SpriteList) -> Vec<SpriteId> {
        list.iter()
            .filter(|other| aabb_overlap(sprite.pos, sprite.size, other.pos, other.size))
            .map(|other| other.id)
            .collect()
    }
}

/// Velocity-integrating stand-in for the platformer physics collaborator
///
/// Applies gravity to the vertical velocity and the velocity to the
/// position. Does not resolve wall overlap; solid-wall behavior belongs to
/// the real backend behind `PlatformerPhysics`.
#[derive(Debug, Clone, Copy)]
pub struct FreeMovePhysics {
    pub gravity: f32,
}

impl FreeMovePhysics {
    pub fn new(gravity: f32) -> Self {
        Self { gravity }
    }
}

impl PlatformerPhysics for FreeMovePhysics {
    fn step(&mut self, player: &mut Sprite, _walls: &SpriteList) {
        player.velocity.y -= self.gravity;
        player.pos += player.velocity;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sprite_at(x: f32, y: f32) -> Sprite {
        let texture = TextureHandle {
            id: 1,
            size: Vec2::new(10.0, 10.0),
        };
        let mut sprite = Sprite::new(texture, 1.0);
        sprite.pos = Vec2::new(x, y);
        sprite
    }

    #[test]
    fn test_overlap_query_returns_ids() {
        let scene = HeadlessScene::new();
        let mut list = SpriteList::new();
        let near = list.push(sprite_at(3.0, 0.0));
        let _far = list.push(sprite_at(30.0, 0.0));

        let hits = scene.overlapping(&sprite_at(0.0, 0.0), &list);
        assert_eq!(hits, vec![near]);
    }

    #[test]
    fn test_denied_asset_fails() {
        let mut scene = HeadlessScene::new();
        scene.deny_asset("images/missing.png");
        assert!(matches!(
            scene.load_texture("images/missing.png"),
            Err(SetupError::AssetLoad { .. })
        ));
        assert!(scene.load_texture("images/present.png").is_ok());
    }

    #[test]
    fn test_free_move_applies_gravity() {
        let mut physics = FreeMovePhysics::new(1.5);
        let mut player = sprite_at(0.0, 100.0);
        let walls = SpriteList::new();

        physics.step(&mut player, &walls);
        assert_eq!(player.velocity.y, -1.5);
        assert_eq!(player.pos.y, 98.5);
    }

    #[test]
    fn test_registered_texture_size() {
        let mut scene = HeadlessScene::new();
        scene.set_texture_size("images/tall.png", Vec2::new(32.0, 128.0));
        let handle = scene.load_texture("images/tall.png").unwrap();
        assert_eq!(handle.size, Vec2::new(32.0, 128.0));
        let other = scene.load_texture("images/other.png").unwrap();
        assert_eq!(other.size, DEFAULT_TEXTURE_SIZE);
    }
}
