//! Level geometry: platforms, obstacles and their side walls
//!
//! A level is loaded once at startup from a JSON file and stays read-only
//! while the simulation runs.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::rect::Rect;
use crate::consts::{WALL_INSET, WALL_THICKNESS};
use crate::settings::Settings;

/// Errors reading a level file
#[derive(Error, Debug)]
pub enum LevelError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Size and placement of the walls hung off a platform's sides
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallGeometry {
    pub thickness: f32,
    /// Distance from the platform top down to the wall top
    pub inset: f32,
}

impl Default for WallGeometry {
    fn default() -> Self {
        Self {
            thickness: WALL_THICKNESS,
            inset: WALL_INSET,
        }
    }
}

impl From<&Settings> for WallGeometry {
    fn from(settings: &Settings) -> Self {
        Self {
            thickness: settings.wall_thickness,
            inset: settings.wall_inset,
        }
    }
}

/// A rectangular platform record as stored in the level file
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Platform {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
    /// Obstacles knock the player back instead of carrying them
    pub is_obstacle: bool,
    pub visible: bool,
    #[serde(default)]
    pub has_left_wall: bool,
    #[serde(default)]
    pub has_right_wall: bool,
}

impl Platform {
    pub fn new(x: i32, y: i32, width: i32, height: i32, is_obstacle: bool, visible: bool) -> Self {
        Self {
            x,
            y,
            width,
            height,
            is_obstacle,
            visible,
            has_left_wall: false,
            has_right_wall: false,
        }
    }

    pub fn with_walls(mut self, left: bool, right: bool) -> Self {
        self.has_left_wall = left;
        self.has_right_wall = right;
        self
    }

    /// Bounding box of the platform body
    pub fn bounds(&self) -> Rect {
        Rect::new(
            self.x as f32,
            self.y as f32,
            self.width as f32,
            self.height as f32,
        )
    }

    /// Wall hugging the platform's left side, if it has one
    pub fn left_wall(&self, walls: &WallGeometry) -> Option<Rect> {
        self.has_left_wall.then(|| {
            Rect::new(
                self.x as f32 - walls.thickness,
                self.y as f32 + walls.inset,
                walls.thickness,
                self.height as f32 - walls.inset,
            )
        })
    }

    /// Wall hugging the platform's right side, if it has one
    pub fn right_wall(&self, walls: &WallGeometry) -> Option<Rect> {
        self.has_right_wall.then(|| {
            Rect::new(
                self.x as f32 + self.width as f32,
                self.y as f32 + walls.inset,
                walls.thickness,
                self.height as f32 - walls.inset,
            )
        })
    }
}

/// Accepted level file layouts
#[derive(Deserialize)]
#[serde(untagged)]
enum LevelFile {
    List(Vec<Platform>),
    Wrapped { platforms: Vec<Platform> },
}

/// Ordered platform list
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Level {
    pub platforms: Vec<Platform>,
}

impl Level {
    pub fn new(platforms: Vec<Platform>) -> Self {
        Self { platforms }
    }

    pub fn empty() -> Self {
        Self::default()
    }

    /// Parse a level from JSON. One malformed record rejects the whole file.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let platforms = match serde_json::from_str::<LevelFile>(json)? {
            LevelFile::List(platforms) => platforms,
            LevelFile::Wrapped { platforms } => platforms,
        };
        Ok(Self { platforms })
    }

    /// Read a level from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, LevelError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read a level, logging the failure and returning an empty level on error
    pub fn load_or_empty(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(level) => {
                log::info!(
                    "Loaded level {} ({} platforms, {} obstacles)",
                    path.display(),
                    level.len(),
                    level.platforms.iter().filter(|p| p.is_obstacle).count()
                );
                level
            }
            Err(e) => {
                log::error!("Failed to load level {}: {}", path.display(), e);
                Self::empty()
            }
        }
    }

    pub fn len(&self) -> usize {
        self.platforms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.platforms.is_empty()
    }
}
