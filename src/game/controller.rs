//! Directional input state
//!
//! Four press/release axes feed a velocity vector at a fixed speed per
//! axis. Each dimension follows a last-writer-wins rule: a press overwrites
//! the dimension's velocity, and a release zeroes it unless the opposing
//! key is still held, in which case the opposing direction takes over.

use glam::Vec2;

use crate::scene::Key;

/// Key-held state and the velocity it implies
#[derive(Debug, Clone)]
pub struct DirectionalInput {
    speed: f32,
    up: bool,
    down: bool,
    left: bool,
    right: bool,
    velocity: Vec2,
}

impl DirectionalInput {
    pub fn new(speed: f32) -> Self {
        Self {
            speed,
            up: false,
            down: false,
            left: false,
            right: false,
            velocity: Vec2::ZERO,
        }
    }

    /// Velocity in world units per frame
    pub fn velocity(&self) -> Vec2 {
        self.velocity
    }

    pub fn press(&mut self, key: Key) {
        match key {
            Key::Up => {
                self.up = true;
                self.velocity.y = self.speed;
            }
            Key::Down => {
                self.down = true;
                self.velocity.y = -self.speed;
            }
            Key::Left => {
                self.left = true;
                self.velocity.x = -self.speed;
            }
            Key::Right => {
                self.right = true;
                self.velocity.x = self.speed;
            }
            Key::Other(_) => {}
        }
    }

    pub fn release(&mut self, key: Key) {
        match key {
            Key::Up => {
                self.up = false;
                self.velocity.y = if self.down { -self.speed } else { 0.0 };
            }
            Key::Down => {
                self.down = false;
                self.velocity.y = if self.up { self.speed } else { 0.0 };
            }
            Key::Left => {
                self.left = false;
                self.velocity.x = if self.right { self.speed } else { 0.0 };
            }
            Key::Right => {
                self.right = false;
                self.velocity.x = if self.left { -self.speed } else { 0.0 };
            }
            Key::Other(_) => {}
        }
    }
}
