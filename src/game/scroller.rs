//! Tile-map runner scenario
//!
//! Loads a CSV level, walks the player with the arrow keys, scrolls with
//! the dead-zone viewport, and ends the run at a fixed finish line. The
//! driver calls `update` then `draw` once per frame and feeds key events
//! between frames.

use crate::consts::{FINISH_LINE, GRAVITY, MOVEMENT_SPEED, RUNNER_SCALING};
use crate::error::SetupError;
use crate::level::build_level;
use crate::map::TileGrid;
use crate::scene::{Key, PlatformerPhysics, Scene, Sprite, SpriteList};
use crate::settings::DisplayConfig;

use super::controller::DirectionalInput;
use super::viewport::Viewport;

/// Texture the player renders with
const PLAYER_TEXTURE: &str = "images/female_idle.png";

/// Run state; `GameOver` is terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GamePhase {
    Playing,
    GameOver,
}

/// The scrolling runner
#[derive(Debug)]
pub struct ScrollerGame {
    pub player: Sprite,
    pub walls: SpriteList,
    pub viewport: Viewport,
    pub input: DirectionalInput,
    phase: GamePhase,
}

impl ScrollerGame {
    /// Build the scenario from an already-parsed grid
    pub fn setup(
        scene: &mut dyn Scene,
        config: &DisplayConfig,
        grid: &TileGrid,
    ) -> Result<Self, SetupError> {
        scene.apply_config(config);

        let level = build_level(grid, scene, RUNNER_SCALING)?;
        let texture = scene.load_texture(PLAYER_TEXTURE)?;
        let mut player = Sprite::new(texture, RUNNER_SCALING);
        player.pos = level.player_start;

        Ok(Self {
            player,
            walls: level.walls,
            viewport: Viewport::new(config.width, config.height),
            input: DirectionalInput::new(MOVEMENT_SPEED),
            phase: GamePhase::Playing,
        })
    }

    /// Load the map file and build the scenario
    pub fn from_map_file(
        scene: &mut dyn Scene,
        config: &DisplayConfig,
        path: &str,
    ) -> Result<Self, SetupError> {
        let grid = TileGrid::from_file(path)?;
        Self::setup(scene, config, &grid)
    }

    /// Gravity constant handed to the physics collaborator
    pub fn gravity(&self) -> f32 {
        GRAVITY
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    /// Distance traveled, measured as `view_left + player.right`
    pub fn distance(&self) -> f32 {
        self.viewport.left + self.player.right()
    }

    pub fn on_key_press(&mut self, key: Key) {
        self.input.press(key);
    }

    pub fn on_key_release(&mut self, key: Key) {
        self.input.release(key);
    }

    /// Advance one frame: finish-line check, physics while playing, then
    /// viewport tracking. The camera is re-applied only when it moved.
    pub fn update(&mut self, physics: &mut dyn PlatformerPhysics, scene: &mut dyn Scene) {
        if self.distance() >= FINISH_LINE && self.phase == GamePhase::Playing {
            self.phase = GamePhase::GameOver;
            log::info!("Finish line crossed at distance {}", self.distance());
        }

        if self.phase == GamePhase::Playing {
            self.player.velocity = self.input.velocity();
            physics.step(&mut self.player, &self.walls);
        }

        if self.viewport.track(&self.player) {
            let (left, right, bottom, top) = self.viewport.bounds();
            scene.set_viewport(left, right, bottom, top);
        }
    }

    /// Render the frame; HUD text is offset by the viewport so it stays
    /// fixed on screen
    pub fn draw(&self, scene: &mut dyn Scene) {
        scene.draw_sprite(&self.player);
        scene.draw_list(&self.walls);

        let text = format!("Distance: {}", self.distance());
        scene.draw_text(&text, self.viewport.left + 10.0, self.viewport.bottom + 20.0);

        if self.phase == GamePhase::GameOver {
            scene.draw_text(
                "Game Over",
                self.viewport.left + 200.0,
                self.viewport.bottom + 200.0,
            );
        }
    }
}
