//! Game tuning and startup configuration
//!
//! Loaded from a JSON file next to the level data. Any missing field falls
//! back to the value in `consts`, and a missing or broken file falls back
//! to `Settings::default()`.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Errors reading a settings file
#[derive(Error, Debug)]
pub enum SettingsError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Game settings/tuning
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    // === Loop ===
    /// Sleep between ticks (milliseconds)
    pub tick_interval_ms: u64,
    /// Initial viewport size
    pub viewport_width: f32,
    pub viewport_height: f32,

    // === Movement ===
    pub gravity: f32,
    pub move_speed: f32,
    pub jump_velocity: f32,
    pub down_velocity: f32,
    pub edge_nudge_x: f32,
    pub edge_nudge_y: f32,

    // === Collisions ===
    pub landing_tolerance: f32,
    pub obstacle_knockback: f32,
    pub wall_nudge: f32,
    pub wall_thickness: f32,
    pub wall_inset: f32,

    // === Parallax ===
    pub scroll_step: f32,
    pub layer_speeds: [f32; LAYER_COUNT],

    // === Player sprite ===
    pub animation_threshold: u32,
    pub player_spawn_x: f32,
    pub player_spawn_y: f32,
    pub player_frame_width: u32,
    pub player_frame_height: u32,
    pub player_scale: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            tick_interval_ms: TICK_INTERVAL_MS,
            viewport_width: VIEWPORT_WIDTH,
            viewport_height: VIEWPORT_HEIGHT,

            gravity: GRAVITY,
            move_speed: MOVE_SPEED,
            jump_velocity: JUMP_VELOCITY,
            down_velocity: DOWN_VELOCITY,
            edge_nudge_x: EDGE_NUDGE_X,
            edge_nudge_y: EDGE_NUDGE_Y,

            landing_tolerance: LANDING_TOLERANCE,
            obstacle_knockback: OBSTACLE_KNOCKBACK,
            wall_nudge: WALL_NUDGE,
            wall_thickness: WALL_THICKNESS,
            wall_inset: WALL_INSET,

            scroll_step: SCROLL_STEP,
            layer_speeds: LAYER_SPEEDS,

            animation_threshold: ANIMATION_THRESHOLD,
            player_spawn_x: PLAYER_SPAWN_X,
            player_spawn_y: PLAYER_SPAWN_Y,
            player_frame_width: PLAYER_FRAME_WIDTH,
            player_frame_height: PLAYER_FRAME_HEIGHT,
            player_scale: PLAYER_SCALE,
        }
    }
}

impl Settings {
    /// Parse settings from a JSON string
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Read settings, falling back to defaults on any error
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(SettingsError::Io(e)) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings at {}, using defaults", path.display());
                Self::default()
            }
            Err(e) => {
                log::warn!("Failed to load settings from {}: {}", path.display(), e);
                Self::default()
            }
        }
    }

    /// Tick interval as a `Duration`
    pub fn tick_interval(&self) -> std::time::Duration {
        std::time::Duration::from_millis(self.tick_interval_ms)
    }

    /// Replace values that would break the simulation
    fn sanitize(&mut self) {
        if self.player_scale <= 0.0 {
            log::warn!("player_scale must be > 0 (got {}), using default", self.player_scale);
            self.player_scale = PLAYER_SCALE;
        }
        if self.animation_threshold == 0 {
            log::warn!("animation_threshold must be > 0, using default");
            self.animation_threshold = ANIMATION_THRESHOLD;
        }
    }
}
