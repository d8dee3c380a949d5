//! Target gallery scenario
//!
//! The player slides along the bottom with the mouse and fires bullets
//! straight up; coins are scattered at seeded-random positions and score a
//! point each when hit. Collision queries and sound playback go through
//! the scene seam.

use rand::Rng;
use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::consts::{BULLET_SPEED, COIN_COUNT, SCREEN_HEIGHT, SCREEN_WIDTH};
use crate::error::SetupError;
use crate::scene::{Scene, SoundHandle, Sprite, SpriteId, SpriteList, TextureHandle};
use crate::settings::DisplayConfig;

const PLAYER_SCALING: f32 = 0.5;
const COIN_SCALING: f32 = 0.2;
const LASER_SCALING: f32 = 0.8;

const PLAYER_TEXTURE: &str = "images/female_idle.png";
const COIN_TEXTURE: &str = "images/coinGold.png";
const LASER_TEXTURE: &str = "images/laserBlue01.png";
const GUN_SOUND: &str = "sounds/laser1.ogg";
const HIT_SOUND: &str = "sounds/phaseJump1.ogg";

/// Mouse-aimed shooting range
#[derive(Debug)]
pub struct TargetGallery {
    pub player: Sprite,
    pub coins: SpriteList,
    pub bullets: SpriteList,
    pub score: u32,
    laser_texture: TextureHandle,
    gun_sound: SoundHandle,
    hit_sound: SoundHandle,
    rng: Pcg32,
}

impl TargetGallery {
    /// Load assets and scatter the coins; the same seed gives the same
    /// layout
    pub fn setup(
        scene: &mut dyn Scene,
        config: &DisplayConfig,
        seed: u64,
    ) -> Result<Self, SetupError> {
        scene.apply_config(config);

        let player_texture = scene.load_texture(PLAYER_TEXTURE)?;
        let coin_texture = scene.load_texture(COIN_TEXTURE)?;
        let laser_texture = scene.load_texture(LASER_TEXTURE)?;
        let gun_sound = scene.load_sound(GUN_SOUND)?;
        let hit_sound = scene.load_sound(HIT_SOUND)?;

        let mut player = Sprite::new(player_texture, PLAYER_SCALING);
        player.pos = glam::Vec2::new(50.0, 70.0);

        let mut rng = Pcg32::seed_from_u64(seed);
        let mut coins = SpriteList::new();
        for _ in 0..COIN_COUNT {
            let mut coin = Sprite::new(coin_texture, COIN_SCALING);
            coin.pos.x = rng.random_range(0..SCREEN_WIDTH as i32) as f32;
            coin.pos.y = rng.random_range(120..SCREEN_HEIGHT as i32) as f32;
            coins.push(coin);
        }

        log::info!("Target gallery ready ({} coins, seed {seed})", coins.len());

        Ok(Self {
            player,
            coins,
            bullets: SpriteList::new(),
            score: 0,
            laser_texture,
            gun_sound,
            hit_sound,
            rng,
        })
    }

    /// The player follows the mouse horizontally
    pub fn on_mouse_motion(&mut self, x: f32, _y: f32) {
        self.player.pos.x = x;
    }

    /// Fire a bullet from the player's top edge
    pub fn on_mouse_press(&mut self, _x: f32, _y: f32, scene: &mut dyn Scene) {
        scene.play_sound(self.gun_sound);

        let mut bullet = Sprite::new(self.laser_texture, LASER_SCALING);
        // Small rotation jitter so the volley looks less uniform
        let jitter: f32 = self.rng.random_range(-5.0..5.0);
        bullet.angle = jitter.to_radians();
        bullet.pos.x = self.player.pos.x;
        bullet.set_bottom(self.player.top());
        bullet.velocity.y = BULLET_SPEED;
        self.bullets.push(bullet);
    }

    /// Advance one frame: move bullets, resolve coin hits, cull strays
    pub fn update(&mut self, scene: &mut dyn Scene) {
        self.bullets.update();

        let bullet_ids: Vec<SpriteId> = self.bullets.iter().map(|b| b.id).collect();
        for id in bullet_ids {
            let Some(bullet) = self.bullets.get(id) else {
                continue;
            };

            let hits = scene.overlapping(bullet, &self.coins);
            if !hits.is_empty() {
                self.bullets.kill(id);
            }
            for coin in hits {
                self.coins.kill(coin);
                self.score += 1;
                scene.play_sound(self.hit_sound);
            }

            if let Some(bullet) = self.bullets.get(id) {
                if bullet.bottom() > SCREEN_HEIGHT {
                    self.bullets.kill(id);
                }
            }
        }
    }

    pub fn draw(&self, scene: &mut dyn Scene) {
        scene.draw_list(&self.coins);
        scene.draw_list(&self.bullets);
        scene.draw_sprite(&self.player);
        scene.draw_text(&format!("Score: {}", self.score), 10.0, 20.0);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scene::HeadlessScene;

    fn gallery(scene: &mut HeadlessScene, seed: u64) -> TargetGallery {
        let config = DisplayConfig {
            mouse_visible: false,
            ..Default::default()
        };
        TargetGallery::setup(scene, &config, seed).unwrap()
    }

    #[test]
    fn test_same_seed_same_layout() {
        let mut scene = HeadlessScene::new();
        let a = gallery(&mut scene, 7);
        let b = gallery(&mut scene, 7);

        let pos_a: Vec<_> = a.coins.iter().map(|c| c.pos).collect();
        let pos_b: Vec<_> = b.coins.iter().map(|c| c.pos).collect();
        assert_eq!(pos_a, pos_b);
        assert_eq!(a.coins.len(), COIN_COUNT);
    }

    #[test]
    fn test_coins_inside_spawn_band() {
        let mut scene = HeadlessScene::new();
        let gallery = gallery(&mut scene, 99);
        for coin in gallery.coins.iter() {
            assert!((0.0..SCREEN_WIDTH).contains(&coin.pos.x));
            assert!((120.0..SCREEN_HEIGHT).contains(&coin.pos.y));
        }
    }

    #[test]
    fn test_shooting_a_coin_scores() {
        let mut scene = HeadlessScene::new();
        let mut gallery = gallery(&mut scene, 3);

        // Park the player directly under the first coin and fire
        let target_x = gallery.coins.iter().next().unwrap().pos.x;
        gallery.on_mouse_motion(target_x, 0.0);
        gallery.on_mouse_press(target_x, 0.0, &mut scene);
        assert_eq!(gallery.bullets.len(), 1);
        assert_eq!(scene.played.len(), 1);

        for _ in 0..200 {
            gallery.update(&mut scene);
        }

        assert!(gallery.score >= 1);
        assert_eq!(gallery.coins.len(), COIN_COUNT - gallery.score as usize);
        // Gun shot plus one hit per coin
        assert_eq!(scene.played.len(), 1 + gallery.score as usize);
        assert!(gallery.bullets.is_empty());
    }

    #[test]
    fn test_stray_bullets_are_culled() {
        let mut scene = HeadlessScene::new();
        let mut gallery = gallery(&mut scene, 3);
        gallery.coins.retain(|_| false);

        gallery.on_mouse_press(0.0, 0.0, &mut scene);
        for _ in 0..200 {
            gallery.update(&mut scene);
        }
        assert!(gallery.bullets.is_empty());
        assert_eq!(gallery.score, 0);
    }

    #[test]
    fn test_mouse_motion_moves_player_horizontally() {
        let mut scene = HeadlessScene::new();
        let mut gallery = gallery(&mut scene, 1);
        let y = gallery.player.pos.y;

        gallery.on_mouse_motion(400.0, 555.0);
        assert_eq!(gallery.player.pos.x, 400.0);
        assert_eq!(gallery.player.pos.y, y);
    }
}
