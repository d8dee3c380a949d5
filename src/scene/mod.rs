//! Collaborator seam for the 2D scene framework
//!
//! The crate owns the sprite model and the gameplay; everything the
//! framework provides crosses this boundary:
//! - texture/sound loading and sound playback
//! - batched sprite drawing, text drawing, viewport offset
//! - axis-aligned collision queries
//! - the platformer physics step
//!
//! `HeadlessScene` implements the seam without a window for tests and the
//! scripted demo run.

pub mod backend;
pub mod headless;
pub mod sprite;

pub use backend::{Key, PlatformerPhysics, Scene};
pub use headless::{FreeMovePhysics, HeadlessScene};
pub use sprite::{SoundHandle, Sprite, SpriteId, SpriteList, TextureHandle};
