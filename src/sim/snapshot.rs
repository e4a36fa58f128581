//! Immutable per-tick view of the scene for the render thread

use serde::{Deserialize, Serialize};

use super::level::{Level, WallGeometry};
use super::parallax::LayerPlacement;
use super::rect::Rect;
use super::sprite::SpriteTransform;
use super::state::{SimulationState, Viewport};
use crate::consts::LAYER_COUNT;

/// How a platform body should be filled
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlatformStyle {
    Regular,
    Obstacle,
}

/// A visible platform with its walls
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlatformView {
    pub bounds: Rect,
    pub style: PlatformStyle,
    pub walls: Vec<Rect>,
}

/// Player sprite draw data
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlayerView {
    pub frame_index: u32,
    /// Frame sub-rect within the sprite sheet
    pub frame_source: Rect,
    pub transform: SpriteTransform,
    pub flip_horizontal: bool,
    /// On-screen bounds
    pub bounds: Rect,
}

/// Collision wireframes (platform, wall and player boxes)
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct DebugOverlay {
    pub platforms: Vec<Rect>,
    pub walls: Vec<Rect>,
    pub player: Rect,
}

/// Everything needed to draw one frame
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderSnapshot {
    pub tick: u64,
    pub viewport: Viewport,
    pub layers: [LayerPlacement; LAYER_COUNT],
    pub platforms: Vec<PlatformView>,
    pub player: PlayerView,
    pub debug: Option<DebugOverlay>,
    pub fullscreen: bool,
}

impl RenderSnapshot {
    pub fn capture(state: &SimulationState, level: &Level, walls: &WallGeometry) -> Self {
        let player = &state.player;
        let frame_index = player.animator.current_frame();

        let platforms = level
            .platforms
            .iter()
            .filter(|p| p.visible)
            .map(|p| PlatformView {
                bounds: p.bounds(),
                style: if p.is_obstacle {
                    PlatformStyle::Obstacle
                } else {
                    PlatformStyle::Regular
                },
                walls: p.left_wall(walls).into_iter().chain(p.right_wall(walls)).collect(),
            })
            .collect();

        // Wireframes cover hidden platforms too
        let debug = state.debug_overlay.then(|| DebugOverlay {
            platforms: level.platforms.iter().map(|p| p.bounds()).collect(),
            walls: level
                .platforms
                .iter()
                .flat_map(|p| p.left_wall(walls).into_iter().chain(p.right_wall(walls)))
                .collect(),
            player: player.bounds(),
        });

        Self {
            tick: state.time_ticks,
            viewport: state.viewport,
            layers: state.parallax.placements(state.viewport.width),
            platforms,
            player: PlayerView {
                frame_index,
                frame_source: player.sheet.frame_source(frame_index),
                transform: player.transform(),
                flip_horizontal: player.flip_horizontal,
                bounds: player.bounds(),
            },
            debug,
            fullscreen: state.fullscreen,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::level::Platform;
    use crate::sim::sprite::StripOrientation;

    fn level() -> Level {
        Level::new(vec![
            Platform::new(80, 430, 200, 20, false, true),
            Platform::new(300, 400, 60, 120, true, true).with_walls(true, true),
            Platform::new(500, 300, 100, 20, false, false),
        ])
    }

    #[test]
    fn test_hidden_platforms_not_filled() {
        let state = SimulationState::new(&Settings::default(), (192, 48), StripOrientation::Horizontal);
        let snap = RenderSnapshot::capture(&state, &level(), &WallGeometry::default());
        assert_eq!(snap.platforms.len(), 2);
        assert_eq!(snap.platforms[0].style, PlatformStyle::Regular);
        assert_eq!(snap.platforms[1].style, PlatformStyle::Obstacle);
        assert_eq!(snap.platforms[1].walls.len(), 2);
        assert!(snap.debug.is_none());
    }

    #[test]
    fn test_debug_overlay_includes_everything() {
        let mut state = SimulationState::new(&Settings::default(), (192, 48), StripOrientation::Horizontal);
        state.debug_overlay = true;
        let snap = RenderSnapshot::capture(&state, &level(), &WallGeometry::default());
        let debug = snap.debug.unwrap();
        assert_eq!(debug.platforms.len(), 3);
        assert_eq!(debug.walls.len(), 2);
        assert_eq!(debug.player, state.player.bounds());
    }

    #[test]
    fn test_player_view_follows_flip() {
        let mut state = SimulationState::new(&Settings::default(), (192, 48), StripOrientation::Horizontal);
        state.player.flip_horizontal = true;
        state.player.animator.set_current_frame(2);
        let snap = RenderSnapshot::capture(&state, &Level::empty(), &WallGeometry::default());
        assert_eq!(snap.player.frame_index, 2);
        assert_eq!(snap.player.frame_source, Rect::new(64.0, 0.0, 32.0, 48.0));
        assert_eq!(snap.player.transform.scale_x, -3.0);
        assert_eq!(snap.player.transform.origin_x, 100.0 + 96.0);
    }
}
