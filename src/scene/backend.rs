//! Traits the scene framework implements
//!
//! The game never talks to a window, GPU, or mixer directly. A backend
//! supplies asset loading, drawing, the camera offset, collision queries,
//! and keyboard/mouse event identity; the driver loop calls back into the
//! game with `update`/`draw` once per frame.

use crate::error::SetupError;
use crate::settings::DisplayConfig;

use super::sprite::{SoundHandle, Sprite, SpriteId, SpriteList, TextureHandle};

/// Keyboard identity delivered by the driver between frames
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Up,
    Down,
    Left,
    Right,
    /// Anything the game does not bind; ignored by the controllers
    Other(u32),
}

/// Everything the 2D framework provides to the game
pub trait Scene {
    /// Apply window-level configuration (size, title, background, cursor)
    fn apply_config(&mut self, config: &DisplayConfig);

    /// Load an image resource, returning its handle and base size
    fn load_texture(&mut self, path: &str) -> Result<TextureHandle, SetupError>;

    /// Load a sound resource
    fn load_sound(&mut self, path: &str) -> Result<SoundHandle, SetupError>;

    /// Fire-and-forget playback
    fn play_sound(&mut self, sound: SoundHandle);

    /// Set the visible world-space rectangle
    fn set_viewport(&mut self, left: f32, right: f32, bottom: f32, top: f32);

    fn draw_sprite(&mut self, sprite: &Sprite);

    /// Batched draw of a whole list
    fn draw_list(&mut self, list: &SpriteList);

    /// Draw text at a world-space position
    fn draw_text(&mut self, text: &str, x: f32, y: f32);

    /// Ids of all sprites in `list` overlapping `sprite`'s bounding box
    fn overlapping(&self, sprite: &Sprite, list: &SpriteList) -> Vec<SpriteId>;
}

/// The platformer physics collaborator
///
/// One call resolves one frame: apply the player's velocity and the engine's
/// gravity, treating `walls` as solid in all four directions. The game calls
/// this exactly once per frame while playing and never after game over.
pub trait PlatformerPhysics {
    fn step(&mut self, player: &mut Sprite, walls: &SpriteList);
}
