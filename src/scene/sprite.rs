//! Sprite and sprite-list types
//!
//! Sprites are plain data: center position, size, velocity, angle, and the
//! texture they render with. Size is the texture's base size times the
//! sprite scale, so the bounding box follows the artwork.

use glam::Vec2;

/// Backend texture reference plus its base pixel size
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextureHandle {
    pub id: u32,
    pub size: Vec2,
}

/// Backend sound reference
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SoundHandle(pub u32);

/// Stable sprite identifier within one `SpriteList`
pub type SpriteId = u32;

/// A positioned, renderable entity
#[derive(Debug, Clone)]
pub struct Sprite {
    /// Assigned when pushed onto a `SpriteList`; 0 for free-standing sprites
    pub id: SpriteId,
    /// Center position in world units
    pub pos: Vec2,
    /// Bounding-box size in world units
    pub size: Vec2,
    /// Per-frame displacement, applied by the physics step or `SpriteList::update`
    pub velocity: Vec2,
    /// Render rotation in radians (cosmetic, not part of the bounding box)
    pub angle: f32,
    pub texture: TextureHandle,
}

impl Sprite {
    pub fn new(texture: TextureHandle, scale: f32) -> Self {
        Self {
            id: 0,
            pos: Vec2::ZERO,
            size: texture.size * scale,
            velocity: Vec2::ZERO,
            angle: 0.0,
            texture,
        }
    }

    #[inline]
    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    #[inline]
    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    #[inline]
    pub fn top(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    /// Move the sprite so its left edge sits at `x`
    pub fn set_left(&mut self, x: f32) {
        self.pos.x = x + self.size.x / 2.0;
    }

    /// Move the sprite so its right edge sits at `x`
    pub fn set_right(&mut self, x: f32) {
        self.pos.x = x - self.size.x / 2.0;
    }

    /// Move the sprite so its top edge sits at `y`
    pub fn set_top(&mut self, y: f32) {
        self.pos.y = y - self.size.y / 2.0;
    }

    /// Move the sprite so its bottom edge sits at `y`
    pub fn set_bottom(&mut self, y: f32) {
        self.pos.y = y + self.size.y / 2.0;
    }
}

/// An ordered sprite collection with stable ids and batched operations
#[derive(Debug, Clone)]
pub struct SpriteList {
    sprites: Vec<Sprite>,
    next_id: SpriteId,
}

impl Default for SpriteList {
    fn default() -> Self {
        Self::new()
    }
}

impl SpriteList {
    pub fn new() -> Self {
        Self {
            sprites: Vec::new(),
            next_id: 1,
        }
    }

    /// Append a sprite, assigning it the next id
    pub fn push(&mut self, mut sprite: Sprite) -> SpriteId {
        let id = self.next_id;
        self.next_id += 1;
        sprite.id = id;
        self.sprites.push(sprite);
        id
    }

    pub fn get(&self, id: SpriteId) -> Option<&Sprite> {
        self.sprites.iter().find(|s| s.id == id)
    }

    pub fn get_mut(&mut self, id: SpriteId) -> Option<&mut Sprite> {
        self.sprites.iter_mut().find(|s| s.id == id)
    }

    /// Remove a sprite from the list
    pub fn kill(&mut self, id: SpriteId) {
        self.sprites.retain(|s| s.id != id);
    }

    pub fn retain(&mut self, f: impl FnMut(&Sprite) -> bool) {
        self.sprites.retain(f);
    }

    /// Apply each sprite's velocity as a per-frame displacement
    pub fn update(&mut self) {
        for sprite in &mut self.sprites {
            sprite.pos += sprite.velocity;
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sprite> {
        self.sprites.iter()
    }

    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut Sprite> {
        self.sprites.iter_mut()
    }

    pub fn len(&self) -> usize {
        self.sprites.len()
    }

    pub fn is_empty(&self) -> bool {
        self.sprites.is_empty()
    }
}
