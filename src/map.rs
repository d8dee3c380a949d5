//! CSV tile-map parsing
//!
//! A map is plain text, one row per line, comma-separated integers, no
//! header. Row 0 is the top of the file and maps to the highest world band.

use std::fs;
use std::path::Path;

use crate::error::SetupError;

/// Rectangular grid of tile codes, indexed `[row][col]`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TileGrid {
    tiles: Vec<Vec<i32>>,
    cols: usize,
}

impl TileGrid {
    /// Parse a grid from map text
    ///
    /// Rejects blank lines, non-integer cells, ragged rows, and empty input.
    pub fn parse(text: &str) -> Result<Self, SetupError> {
        let mut tiles: Vec<Vec<i32>> = Vec::new();
        let mut cols = 0;

        for (index, line) in text.lines().enumerate() {
            let line_no = index + 1;
            let line = line.trim();
            if line.is_empty() {
                return Err(SetupError::malformed(line_no, "blank line"));
            }

            let mut row = Vec::new();
            for item in line.split(',') {
                let item = item.trim();
                let code = item.parse::<i32>().map_err(|_| {
                    SetupError::malformed(line_no, format!("not an integer: {item:?}"))
                })?;
                row.push(code);
            }

            if tiles.is_empty() {
                cols = row.len();
            } else if row.len() != cols {
                return Err(SetupError::malformed(
                    line_no,
                    format!("expected {} columns, found {}", cols, row.len()),
                ));
            }
            tiles.push(row);
        }

        if tiles.is_empty() {
            return Err(SetupError::malformed(1, "empty map"));
        }

        Ok(Self { tiles, cols })
    }

    /// Read and parse a map file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, SetupError> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| SetupError::AssetLoad {
            path: path.display().to_string(),
            source,
        })?;
        let grid = Self::parse(&text)?;
        log::info!(
            "Loaded map {} ({} rows x {} cols)",
            path.display(),
            grid.rows(),
            grid.cols()
        );
        Ok(grid)
    }

    pub fn rows(&self) -> usize {
        self.tiles.len()
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    /// Tile code at `[row][col]`
    pub fn get(&self, row: usize, col: usize) -> i32 {
        self.tiles[row][col]
    }

    /// Iterate all cells as `(row, col, code)` in row-major order
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, i32)> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .flat_map(|(row, codes)| codes.iter().enumerate().map(move |(col, &c)| (row, col, c)))
    }
}
