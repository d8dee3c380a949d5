//! Enemy volley scenario
//!
//! Two fixed emplacements fire bullets downward at random intervals while
//! the player shadows the mouse along the bottom of the screen. Randomness
//! is seeded, so a run is reproducible.

use glam::Vec2;
use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::SetupError;
use crate::scene::{Scene, Sprite, SpriteList, TextureHandle};
use crate::settings::DisplayConfig;

const SHIP_SCALING: f32 = 0.5;
const PLAYER_TEXTURE: &str = "images/playerShip1_orange.png";
const ENEMY_TEXTURE: &str = "images/playerShip1_green.png";
const BULLET_TEXTURE: &str = "images/laserBlue01.png";

/// Downward bullet speed per frame
const ENEMY_BULLET_SPEED: f32 = 2.0;
/// One-in-N fire chance per enemy per frame
const FIRE_ODDS: u32 = 200;

/// Fixed enemies shooting at random intervals
#[derive(Debug)]
pub struct EnemyVolley {
    pub player: Sprite,
    pub enemies: SpriteList,
    pub bullets: SpriteList,
    pub frame_count: u64,
    bullet_texture: TextureHandle,
    rng: Pcg32,
}

impl EnemyVolley {
    pub fn setup(
        scene: &mut dyn Scene,
        config: &DisplayConfig,
        seed: u64,
    ) -> Result<Self, SetupError> {
        scene.apply_config(config);

        let player_texture = scene.load_texture(PLAYER_TEXTURE)?;
        let enemy_texture = scene.load_texture(ENEMY_TEXTURE)?;
        let bullet_texture = scene.load_texture(BULLET_TEXTURE)?;

        let player = Sprite::new(player_texture, SHIP_SCALING);

        let mut enemies = SpriteList::new();
        for x in [120.0, SCREEN_WIDTH - 120.0] {
            let mut enemy = Sprite::new(enemy_texture, SHIP_SCALING);
            enemy.pos = Vec2::new(x, SCREEN_HEIGHT - enemy.size.y);
            enemy.angle = std::f32::consts::PI;
            enemies.push(enemy);
        }

        Ok(Self {
            player,
            enemies,
            bullets: SpriteList::new(),
            frame_count: 0,
            bullet_texture,
            rng: Pcg32::seed_from_u64(seed),
        })
    }

    /// The player shadows the mouse along the bottom row
    pub fn on_mouse_motion(&mut self, x: f32, _y: f32) {
        self.player.pos = Vec2::new(x, 20.0);
    }

    /// Advance one frame: maybe fire, cull fallen bullets, move the rest
    pub fn update(&mut self) {
        self.frame_count += 1;

        let mouths: Vec<(f32, f32)> = self
            .enemies
            .iter()
            .map(|e| (e.pos.x, e.bottom()))
            .collect();
        for (x, bottom) in mouths {
            if self.rng.random_range(0..FIRE_ODDS) == 0 {
                let mut bullet = Sprite::new(self.bullet_texture, 1.0);
                bullet.pos.x = x;
                bullet.angle = -std::f32::consts::PI;
                bullet.set_top(bottom);
                bullet.velocity.y = -ENEMY_BULLET_SPEED;
                self.bullets.push(bullet);
            }
        }

        self.bullets.retain(|b| b.top() >= 0.0);
        self.bullets.update();
    }

    pub fn draw(&self, scene: &mut dyn Scene) {
        scene.draw_list(&self.enemies);
        scene.draw_list(&self.bullets);
        scene.draw_sprite(&self.player);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::HeadlessScene;
    use crate::settings::{BLACK, DisplayConfig};

    fn volley(scene: &mut HeadlessScene, seed: u64) -> EnemyVolley {
        let config = DisplayConfig {
            background: BLACK,
            ..Default::default()
        };
        EnemyVolley::setup(scene, &config, seed).unwrap()
    }

    #[test]
    fn test_enemy_emplacements() {
        let mut scene = HeadlessScene::new();
        let volley = volley(&mut scene, 1);

        let xs: Vec<f32> = volley.enemies.iter().map(|e| e.pos.x).collect();
        assert_eq!(xs, vec![120.0, 680.0]);
        for enemy in volley.enemies.iter() {
            assert_eq!(enemy.pos.y, SCREEN_HEIGHT - enemy.size.y);
        }
    }

    #[test]
    fn test_seeded_run_fires_eventually() {
        let mut scene = HeadlessScene::new();
        let mut volley = volley(&mut scene, 42);

        let mut frames = 0u64;
        while volley.bullets.is_empty() && frames < 5000 {
            volley.update();
            frames += 1;
        }

        assert!(!volley.bullets.is_empty(), "no enemy ever fired");
        let bullet = volley.bullets.iter().next().unwrap();
        assert_eq!(bullet.velocity.y, -ENEMY_BULLET_SPEED);
        assert!([120.0, 680.0].contains(&bullet.pos.x));
        assert_eq!(volley.frame_count, frames);
    }

    #[test]
    fn test_fallen_bullets_are_culled() {
        let mut scene = HeadlessScene::new();
        let mut volley = volley(&mut scene, 42);

        for _ in 0..5000 {
            volley.update();
        }
        // Culling runs before movement, so nothing sits deeper than one step
        for bullet in volley.bullets.iter() {
            assert!(bullet.top() >= -ENEMY_BULLET_SPEED);
        }
    }

    #[test]
    fn test_same_seed_same_volley() {
        let mut scene = HeadlessScene::new();
        let mut a = volley(&mut scene, 9);
        let mut b = volley(&mut scene, 9);

        for _ in 0..1000 {
            a.update();
            b.update();
        }
        assert_eq!(a.bullets.len(), b.bullets.len());
        let pos_a: Vec<_> = a.bullets.iter().map(|s| s.pos).collect();
        let pos_b: Vec<_> = b.bullets.iter().map(|s| s.pos).collect();
        assert_eq!(pos_a, pos_b);
    }

    #[test]
    fn test_mouse_pins_player_to_bottom_row() {
        let mut scene = HeadlessScene::new();
        let mut volley = volley(&mut scene, 1);
        volley.on_mouse_motion(333.0, 480.0);
        assert_eq!(volley.player.pos, Vec2::new(333.0, 20.0));
    }
}
