//! Grid Runner - scrolling tile-map runner and bullet demos
//!
//! Core modules:
//! - `map`: CSV tile-map parsing
//! - `level`: tile codes to positioned wall sprites
//! - `game`: per-frame gameplay (controller, dead-zone viewport, scenarios)
//! - `scene`: collaborator seam (sprites, rendering, physics, audio)
//! - `settings`: explicit display configuration

pub mod error;
pub mod game;
pub mod level;
pub mod map;
pub mod scene;
pub mod settings;

pub use error::SetupError;
pub use map::TileGrid;
pub use settings::DisplayConfig;

use glam::Vec2;

/// Game configuration constants
pub mod consts {
    use glam::Vec2;

    /// Screen dimensions in world units
    pub const SCREEN_WIDTH: f32 = 800.0;
    pub const SCREEN_HEIGHT: f32 = 600.0;

    /// Edge length of one map tile in world units
    pub const TILE_SIZE: f32 = 64.0;
    /// Height of the visible tile band; file row 0 is the top of this band
    pub const MAP_ROWS: u32 = 8;

    /// Minimum gap kept between the player and the screen edge
    pub const VIEWPORT_MARGIN: f32 = 40.0;
    /// Wider forward gap on the right so the player can see ahead
    pub const RIGHT_MARGIN: f32 = 150.0;

    /// Player speed per active axis (world units per frame)
    pub const MOVEMENT_SPEED: f32 = 5.0;
    /// Downward pull handed to the physics step (the runner plays flat)
    pub const GRAVITY: f32 = 0.0;

    /// World-space x the run ends at, measured as `view_left + player.right`
    pub const FINISH_LINE: f32 = 5630.0;
    /// Player spawn, independent of map contents
    pub const PLAYER_START: Vec2 = Vec2::new(64.0, 270.0);
    /// Sprite scale for the runner scenario
    pub const RUNNER_SCALING: f32 = 1.0;

    /// Bullet speed per frame (target gallery, upward)
    pub const BULLET_SPEED: f32 = 5.0;
    /// Coins placed by the target gallery
    pub const COIN_COUNT: usize = 50;
}

/// Axis-aligned overlap test on sprite bounds
#[inline]
pub fn aabb_overlap(center_a: Vec2, size_a: Vec2, center_b: Vec2, size_b: Vec2) -> bool {
    let delta = (center_a - center_b).abs();
    delta.x * 2.0 < size_a.x + size_b.x && delta.y * 2.0 < size_a.y + size_b.y
}
