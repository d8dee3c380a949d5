//! Display configuration
//!
//! Window-level state (background color, cursor visibility, screen size)
//! travels in one explicit struct handed to the backend at setup, never
//! through ambient framework calls.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::consts::{SCREEN_HEIGHT, SCREEN_WIDTH};

/// RGB background color
pub type Color = [u8; 3];

/// Kenney-palette green the tile demos clear to
pub const AMAZON: Color = [59, 122, 87];
pub const BLACK: Color = [0, 0, 0];

/// Window-level configuration applied by the backend at setup
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DisplayConfig {
    pub width: f32,
    pub height: f32,
    pub title: String,
    pub background: Color,
    pub mouse_visible: bool,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            width: SCREEN_WIDTH,
            height: SCREEN_HEIGHT,
            title: "Grid Runner".to_string(),
            background: AMAZON,
            mouse_visible: true,
        }
    }
}

impl DisplayConfig {
    /// Load configuration from a JSON file, falling back to defaults
    pub fn load(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match fs::read_to_string(path) {
            Ok(json) => match serde_json::from_str(&json) {
                Ok(config) => {
                    log::info!("Loaded display config from {}", path.display());
                    config
                }
                Err(e) => {
                    log::warn!("Ignoring bad display config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => {
                log::info!("Using default display config");
                Self::default()
            }
        }
    }

    /// Persist configuration as JSON
    pub fn save(&self, path: impl AsRef<Path>) -> std::io::Result<()> {
        let json = serde_json::to_string_pretty(self).map_err(std::io::Error::other)?;
        fs::write(path, json)
    }
}
