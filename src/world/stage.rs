//! Stage loading and validation
//!
//! Stages are RON files holding a rectangular character grid. Each cell is
//! one 32px tile:
//!
//! - `#` solid terrain
//! - `^` hazard (kills on touch, not solid)
//! - `c` coin spawn
//! - `e` enemy spawn
//! - `S` player start (exactly one)
//! - `P` portal tile (at least one)
//! - `.` empty
//!
//! Loading is strict: ragged or oversized grids, unknown characters, and
//! missing start/portal tiles are all rejected up front so the game loop
//! never has to second-guess the data.

use std::fs;
use std::path::Path;

use macroquad::prelude::{Rect, Vec2};
use serde::Deserialize;

/// Side length of one tile in map pixels
pub const TILE_SIZE: f32 = 32.0;

/// Validation limits to prevent resource exhaustion from malicious files
pub mod limits {
    /// Maximum grid dimension (columns or rows)
    pub const MAX_GRID: usize = 256;
    /// Maximum stage name length
    pub const MAX_NAME_LEN: usize = 64;
}

/// Error type for stage loading
#[derive(Debug)]
pub enum StageError {
    IoError(std::io::Error),
    ParseError(ron::error::SpannedError),
    ValidationError(String),
}

impl From<std::io::Error> for StageError {
    fn from(e: std::io::Error) -> Self {
        StageError::IoError(e)
    }
}

impl From<ron::error::SpannedError> for StageError {
    fn from(e: ron::error::SpannedError) -> Self {
        StageError::ParseError(e)
    }
}

impl std::fmt::Display for StageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StageError::IoError(e) => write!(f, "IO error: {}", e),
            StageError::ParseError(e) => write!(f, "Parse error: {}", e),
            StageError::ValidationError(e) => write!(f, "Validation error: {}", e),
        }
    }
}

impl std::error::Error for StageError {}

/// On-disk stage representation
#[derive(Debug, Deserialize)]
struct StageFile {
    name: String,
    rows: Vec<String>,
}

/// A loaded, validated stage
#[derive(Debug, Clone)]
pub struct Stage {
    pub name: String,
    width: usize,
    height: usize,
    solid: Vec<bool>,
    hazard: Vec<bool>,
    /// Player start, at the center of the `S` tile
    pub spawn: Vec2,
    pub coins: Vec<Vec2>,
    pub enemies: Vec<Vec2>,
    pub portal_tiles: Vec<Vec2>,
}

impl Stage {
    /// Load and validate a stage from a RON file
    pub fn load(path: impl AsRef<Path>) -> Result<Stage, StageError> {
        let text = fs::read_to_string(path)?;
        let file: StageFile = ron::from_str(&text)?;
        let rows: Vec<&str> = file.rows.iter().map(|s| s.as_str()).collect();
        Stage::from_rows(&file.name, &rows)
    }

    /// Build a stage from its character grid, validating as we go
    pub fn from_rows(name: &str, rows: &[&str]) -> Result<Stage, StageError> {
        if name.len() > limits::MAX_NAME_LEN {
            return Err(StageError::ValidationError(format!(
                "stage name too long ({} > {})",
                name.len(),
                limits::MAX_NAME_LEN
            )));
        }
        if rows.is_empty() {
            return Err(StageError::ValidationError("stage has no rows".into()));
        }
        let width = rows[0].chars().count();
        let height = rows.len();
        if width == 0 {
            return Err(StageError::ValidationError("stage rows are empty".into()));
        }
        if width > limits::MAX_GRID || height > limits::MAX_GRID {
            return Err(StageError::ValidationError(format!(
                "grid {}x{} exceeds maximum {}",
                width,
                height,
                limits::MAX_GRID
            )));
        }

        let mut stage = Stage {
            name: name.to_string(),
            width,
            height,
            solid: vec![false; width * height],
            hazard: vec![false; width * height],
            spawn: Vec2::ZERO,
            coins: Vec::new(),
            enemies: Vec::new(),
            portal_tiles: Vec::new(),
        };
        let mut starts = 0usize;

        for (ty, row) in rows.iter().enumerate() {
            let chars: Vec<char> = row.chars().collect();
            if chars.len() != width {
                return Err(StageError::ValidationError(format!(
                    "row {} has {} cells, expected {}",
                    ty,
                    chars.len(),
                    width
                )));
            }
            for (tx, ch) in chars.iter().copied().enumerate() {
                let center = tile_center(tx, ty);
                match ch {
                    '.' => {}
                    '#' => stage.solid[ty * width + tx] = true,
                    '^' => stage.hazard[ty * width + tx] = true,
                    'c' => stage.coins.push(center),
                    'e' => stage.enemies.push(center),
                    'P' => stage.portal_tiles.push(center),
                    'S' => {
                        starts += 1;
                        stage.spawn = center;
                    }
                    other => {
                        return Err(StageError::ValidationError(format!(
                            "unknown cell '{}' at row {} col {}",
                            other, ty, tx
                        )));
                    }
                }
            }
        }

        if starts != 1 {
            return Err(StageError::ValidationError(format!(
                "expected exactly one start tile, found {}",
                starts
            )));
        }
        if stage.portal_tiles.is_empty() {
            return Err(StageError::ValidationError("stage has no portal tile".into()));
        }
        Ok(stage)
    }

    pub fn width_tiles(&self) -> usize {
        self.width
    }

    pub fn height_tiles(&self) -> usize {
        self.height
    }

    pub fn pixel_width(&self) -> f32 {
        self.width as f32 * TILE_SIZE
    }

    pub fn pixel_height(&self) -> f32 {
        self.height as f32 * TILE_SIZE
    }

    /// Is the tile at (tx, ty) solid? Out-of-grid tiles are open so sprites
    /// can leave the map and be handled by the bounds checks.
    pub fn is_solid(&self, tx: i32, ty: i32) -> bool {
        if tx < 0 || ty < 0 || tx as usize >= self.width || ty as usize >= self.height {
            return false;
        }
        self.solid[ty as usize * self.width + tx as usize]
    }

    pub fn is_hazard(&self, tx: i32, ty: i32) -> bool {
        if tx < 0 || ty < 0 || tx as usize >= self.width || ty as usize >= self.height {
            return false;
        }
        self.hazard[ty as usize * self.width + tx as usize]
    }

    /// Does the rect overlap any solid tile?
    pub fn solid_overlap(&self, rect: Rect) -> bool {
        self.overlap(rect, |s, tx, ty| s.is_solid(tx, ty))
    }

    /// Does the rect overlap any hazard tile?
    pub fn hazard_overlap(&self, rect: Rect) -> bool {
        self.overlap(rect, |s, tx, ty| s.is_hazard(tx, ty))
    }

    fn overlap(&self, rect: Rect, pred: impl Fn(&Stage, i32, i32) -> bool) -> bool {
        let x0 = (rect.x / TILE_SIZE).floor() as i32;
        let y0 = (rect.y / TILE_SIZE).floor() as i32;
        let x1 = ((rect.x + rect.w) / TILE_SIZE).ceil() as i32 - 1;
        let y1 = ((rect.y + rect.h) / TILE_SIZE).ceil() as i32 - 1;
        for ty in y0..=y1 {
            for tx in x0..=x1 {
                if pred(self, tx, ty) {
                    return true;
                }
            }
        }
        false
    }
}

/// Center of the tile at grid position (tx, ty), in map pixels
pub fn tile_center(tx: usize, ty: usize) -> Vec2 {
    Vec2::new(
        tx as f32 * TILE_SIZE + TILE_SIZE / 2.0,
        ty as f32 * TILE_SIZE + TILE_SIZE / 2.0,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn stage(rows: &[&str]) -> Stage {
        Stage::from_rows("test", rows).expect("valid stage")
    }

    #[test]
    fn test_parse_grid() {
        let s = stage(&[
            ".....",
            ".c.e.",
            "S...P",
            "#####",
        ]);
        assert_eq!(s.width_tiles(), 5);
        assert_eq!(s.height_tiles(), 4);
        assert_eq!(s.coins.len(), 1);
        assert_eq!(s.enemies.len(), 1);
        assert_eq!(s.portal_tiles.len(), 1);
        assert_eq!(s.spawn, tile_center(0, 2));
        assert!(s.is_solid(0, 3));
        assert!(!s.is_solid(0, 0));
        // Out-of-grid cells are open
        assert!(!s.is_solid(-1, 3));
        assert!(!s.is_solid(0, 99));
    }

    #[test]
    fn test_ragged_rows_rejected() {
        let err = Stage::from_rows("bad", &["S..P", "###"]).unwrap_err();
        assert!(matches!(err, StageError::ValidationError(_)));
    }

    #[test]
    fn test_unknown_cell_rejected() {
        let err = Stage::from_rows("bad", &["S?.P"]).unwrap_err();
        assert!(matches!(err, StageError::ValidationError(_)));
    }

    #[test]
    fn test_start_and_portal_required() {
        assert!(Stage::from_rows("bad", &["...P"]).is_err());
        assert!(Stage::from_rows("bad", &["S..."]).is_err());
        assert!(Stage::from_rows("bad", &["SS.P"]).is_err());
    }

    #[test]
    fn test_solid_overlap() {
        let s = stage(&[
            "....",
            "S..P",
            "####",
        ]);
        // Rect inside the open row
        let open = Rect::new(10.0, 10.0, 12.0, 12.0);
        assert!(!s.solid_overlap(open));
        // Rect dipping into the floor row (y = 64..96)
        let floor = Rect::new(10.0, 60.0, 12.0, 12.0);
        assert!(s.solid_overlap(floor));
    }

    #[test]
    fn test_hazard_overlap() {
        let s = stage(&[
            "S..P",
            "^###",
        ]);
        let spike = Rect::new(4.0, 30.0, 10.0, 10.0);
        assert!(s.hazard_overlap(spike));
        assert!(!s.solid_overlap(Rect::new(4.0, 30.0, 10.0, 1.0)));
    }

    #[test]
    fn test_load_from_file() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(
            f,
            "(name: \"round trip\", rows: [\".c..\", \"S..P\", \"####\"])"
        )
        .unwrap();
        let s = Stage::load(f.path()).unwrap();
        assert_eq!(s.name, "round trip");
        assert_eq!(s.coins.len(), 1);
    }

    #[test]
    fn test_load_rejects_bad_ron() {
        let mut f = tempfile::NamedTempFile::new().unwrap();
        write!(f, "not ron at all").unwrap();
        let err = Stage::load(f.path()).unwrap_err();
        assert!(matches!(err, StageError::ParseError(_)));
    }
}
