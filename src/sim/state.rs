//! Simulation state and core types
//!
//! Everything the game loop mutates between ticks lives in `SimulationState`.

use glam::Vec2;
use serde::{Deserialize, Serialize};

use super::parallax::ParallaxState;
use super::rect::Rect;
use super::sprite::{SpriteAnimator, SpriteSheet, SpriteTransform, StripOrientation};
use crate::settings::Settings;

/// Size of the visible play area in pixels
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }
}

impl From<&Settings> for Viewport {
    fn from(settings: &Settings) -> Self {
        Self::new(settings.viewport_width, settings.viewport_height)
    }
}

/// The player character
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Player {
    /// Top-left corner
    pub pos: Vec2,
    pub vel: Vec2,
    pub sheet: SpriteSheet,
    pub animator: SpriteAnimator,
    /// Facing left
    pub flip_horizontal: bool,
    /// Sprite scale factor (> 0)
    pub scale: f32,
}

impl Player {
    pub fn new(pos: Vec2, sheet: SpriteSheet, scale: f32, animation_threshold: u32) -> Self {
        Self {
            pos,
            vel: Vec2::ZERO,
            animator: SpriteAnimator::new(sheet.total_frames, animation_threshold),
            sheet,
            flip_horizontal: false,
            scale,
        }
    }

    /// Scaled on-screen width
    #[inline]
    pub fn width(&self) -> f32 {
        self.sheet.frame_width as f32 * self.scale
    }

    /// Scaled on-screen height
    #[inline]
    pub fn height(&self) -> f32 {
        self.sheet.frame_height as f32 * self.scale
    }

    #[inline]
    pub fn size(&self) -> Vec2 {
        Vec2::new(self.width(), self.height())
    }

    /// Collision box
    pub fn bounds(&self) -> Rect {
        Rect::from_pos_size(self.pos, self.size())
    }

    #[inline]
    pub fn bottom(&self) -> f32 {
        self.pos.y + self.height()
    }

    /// Draw transform for the current frame
    pub fn transform(&self) -> SpriteTransform {
        SpriteTransform::new(
            self.pos.x,
            self.pos.y,
            self.sheet.frame_width,
            self.scale,
            self.flip_horizontal,
        )
    }
}

/// Complete simulation state, owned by the game loop
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SimulationState {
    pub player: Player,
    pub parallax: ParallaxState,
    pub viewport: Viewport,
    /// Draw collision wireframes
    pub debug_overlay: bool,
    /// Requested window mode, applied by the window layer
    pub fullscreen: bool,
    /// Simulation tick counter
    pub time_ticks: u64,
}

impl SimulationState {
    /// Create the startup state. `sheet_size` is the pixel size of the
    /// player's sprite sheet (0x0 if it failed to load).
    pub fn new(settings: &Settings, sheet_size: (u32, u32), orientation: StripOrientation) -> Self {
        let sheet = SpriteSheet::new(
            sheet_size.0,
            sheet_size.1,
            settings.player_frame_width,
            settings.player_frame_height,
            orientation,
        );
        let player = Player::new(
            Vec2::new(settings.player_spawn_x, settings.player_spawn_y),
            sheet,
            settings.player_scale,
            settings.animation_threshold,
        );
        Self {
            player,
            parallax: ParallaxState::new(settings.layer_speeds),
            viewport: Viewport::from(settings),
            debug_overlay: false,
            fullscreen: false,
            time_ticks: 0,
        }
    }

    /// True when vertical velocity is exactly zero.
    ///
    /// This holds while standing on the floor or a platform, and also for the
    /// single tick at the apex of a jump, where a new jump is accepted too.
    #[inline]
    pub fn is_grounded(&self) -> bool {
        self.player.vel.y == 0.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_player_bounds_are_scaled() {
        let sheet = SpriteSheet::new(32, 288, 32, 48, StripOrientation::Vertical);
        let player = Player::new(Vec2::new(100.0, 400.0), sheet, 3.0, 10);
        assert_eq!(player.bounds(), Rect::new(100.0, 400.0, 96.0, 144.0));
        assert_eq!(player.bottom(), 544.0);
        assert_eq!(player.animator.total_frames(), 6);
    }

    #[test]
    fn test_new_state_uses_settings() {
        let settings = Settings::default();
        let state = SimulationState::new(&settings, (32, 288), StripOrientation::Vertical);
        assert_eq!(state.player.pos, Vec2::new(100.0, 400.0));
        assert_eq!(state.viewport, Viewport::new(800.0, 600.0));
        assert!(!state.debug_overlay);
        assert!(!state.fullscreen);
        assert!(state.is_grounded());
    }
}
