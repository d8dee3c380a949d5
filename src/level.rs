//! Level construction from a tile grid
//!
//! Each non-empty cell becomes one immutable wall sprite. File row 0 is the
//! top of the visible band, so vertical placement flips the row index.

use glam::Vec2;

use crate::consts::{MAP_ROWS, PLAYER_START, TILE_SIZE};
use crate::error::SetupError;
use crate::map::TileGrid;
use crate::scene::{Scene, Sprite, SpriteList, TextureHandle};

/// Wall sprite variants a tile code can name
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TileKind {
    CrateBox,
    GrassLeft,
    GrassMid,
    GrassRight,
}

impl TileKind {
    /// Map a non-empty tile code to its sprite kind
    ///
    /// Codes outside {-1, 0, 1, 2, 3} have no kind; callers must treat that
    /// as an error rather than skip the cell.
    pub fn from_code(code: i32) -> Option<Self> {
        match code {
            0 => Some(Self::CrateBox),
            1 => Some(Self::GrassLeft),
            2 => Some(Self::GrassMid),
            3 => Some(Self::GrassRight),
            _ => None,
        }
    }

    pub fn texture_path(&self) -> &'static str {
        match self {
            Self::CrateBox => "images/boxCrate_double.png",
            Self::GrassLeft => "images/grassLeft.png",
            Self::GrassMid => "images/grassMid.png",
            Self::GrassRight => "images/grassRight.png",
        }
    }
}

/// Walls and player placement for one playable level
#[derive(Debug)]
pub struct Level {
    pub walls: SpriteList,
    /// Spawn point, a fixed constant independent of the grid contents
    pub player_start: Vec2,
}

/// Build wall sprites from a grid
///
/// Placement: right edge at `col * TILE_SIZE`, top edge at
/// `(MAP_ROWS - 1 - row) * TILE_SIZE`. Rows beyond the visible band land
/// below the world origin; the arithmetic is floating point so deep maps
/// cannot wrap.
pub fn build_level(
    grid: &TileGrid,
    scene: &mut dyn Scene,
    scale: f32,
) -> Result<Level, SetupError> {
    let mut walls = SpriteList::new();
    // One texture per kind, loaded on first use
    let mut textures: [Option<TextureHandle>; 4] = [None; 4];

    for (row, col, code) in grid.cells() {
        if code == -1 {
            continue;
        }
        let kind = TileKind::from_code(code)
            .ok_or(SetupError::UnknownTileCode { row, col, code })?;

        let slot = &mut textures[kind as usize];
        let texture = match *slot {
            Some(texture) => texture,
            None => {
                let texture = scene.load_texture(kind.texture_path())?;
                *slot = Some(texture);
                texture
            }
        };

        let mut wall = Sprite::new(texture, scale);
        wall.set_right(col as f32 * TILE_SIZE);
        wall.set_top((MAP_ROWS as f32 - 1.0 - row as f32) * TILE_SIZE);
        walls.push(wall);
    }

    log::info!("Built level with {} walls", walls.len());
    Ok(Level {
        walls,
        player_start: PLAYER_START,
    })
}
