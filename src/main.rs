//! Grid Runner entry point
//!
//! Runs the tile-map scroller headless with a scripted right-arrow hold,
//! logging progress until the finish line. Hook a real scene backend in
//! place of `HeadlessScene` to put the same game on screen.

use grid_runner::DisplayConfig;
use grid_runner::game::ScrollerGame;
use grid_runner::scene::{FreeMovePhysics, HeadlessScene, Key};

const MAP_PATH: &str = "assets/level_plains.csv";
const CONFIG_PATH: &str = "display.json";
const MAX_FRAMES: u32 = 5000;

fn main() {
    env_logger::init();
    log::info!("Grid Runner starting...");

    let config = DisplayConfig::load(CONFIG_PATH);
    let mut scene = HeadlessScene::new();

    let mut game = match ScrollerGame::from_map_file(&mut scene, &config, MAP_PATH) {
        Ok(game) => game,
        Err(e) => {
            log::error!("Setup failed: {e}");
            std::process::exit(1);
        }
    };
    let mut physics = FreeMovePhysics::new(game.gravity());

    // Scripted input: hold right until the run ends
    game.on_key_press(Key::Right);

    let mut frames = 0;
    while !game.game_over() && frames < MAX_FRAMES {
        game.update(&mut physics, &mut scene);
        game.draw(&mut scene);
        frames += 1;

        if frames % 120 == 0 {
            log::info!("frame {frames}: distance {:.0}", game.distance());
        }
    }

    if game.game_over() {
        log::info!(
            "Game over after {frames} frames at distance {:.0}",
            game.distance()
        );
    } else {
        log::warn!("Stopped after {MAX_FRAMES} frames without reaching the finish line");
    }
}
