//! Shape generation for 2D primitives
//!
//! Turns a `RenderSnapshot` into flat-colored triangles. Sprites and
//! background images are drawn by the window layer from the snapshot's
//! placements; only untextured geometry is built here.

use super::vertex::{Vertex, colors};
use crate::sim::{PlatformStyle, Rect, RenderSnapshot};

/// Width of debug wireframe lines
pub const OUTLINE_WIDTH: f32 = 1.0;

/// Two triangles covering a rect
pub fn filled_rect(rect: &Rect, color: [f32; 4]) -> [Vertex; 6] {
    let (l, t, r, b) = (rect.left(), rect.top(), rect.right(), rect.bottom());
    [
        Vertex::new(l, t, color),
        Vertex::new(r, t, color),
        Vertex::new(r, b, color),
        Vertex::new(l, t, color),
        Vertex::new(r, b, color),
        Vertex::new(l, b, color),
    ]
}

/// Four thin quads tracing a rect's border
pub fn outlined_rect(rect: &Rect, width: f32, color: [f32; 4]) -> Vec<Vertex> {
    if rect.is_empty() {
        return Vec::new();
    }
    let w = width.min(rect.width / 2.0).min(rect.height / 2.0);
    let inner_height = rect.height - 2.0 * w;
    // Top, bottom, left, right
    let edges = [
        Rect::new(rect.x, rect.y, rect.width, w),
        Rect::new(rect.x, rect.bottom() - w, rect.width, w),
        Rect::new(rect.x, rect.y + w, w, inner_height),
        Rect::new(rect.right() - w, rect.y + w, w, inner_height),
    ];
    let mut vertices = Vec::with_capacity(24);
    for edge in edges.iter().filter(|e| !e.is_empty()) {
        vertices.extend_from_slice(&filled_rect(edge, color));
    }
    vertices
}

/// Platform fills, then debug wireframes on top
pub fn scene_vertices(snapshot: &RenderSnapshot) -> Vec<Vertex> {
    let mut vertices = Vec::with_capacity(snapshot.platforms.len() * 18);

    for platform in &snapshot.platforms {
        let color = match platform.style {
            PlatformStyle::Regular => colors::PLATFORM,
            PlatformStyle::Obstacle => colors::OBSTACLE,
        };
        vertices.extend_from_slice(&filled_rect(&platform.bounds, color));
        for wall in platform.walls.iter().filter(|w| !w.is_empty()) {
            vertices.extend_from_slice(&filled_rect(wall, colors::WALL));
        }
    }

    if let Some(debug) = &snapshot.debug {
        for rect in &debug.platforms {
            vertices.extend(outlined_rect(rect, OUTLINE_WIDTH, colors::DEBUG_PLATFORM));
        }
        for rect in &debug.walls {
            vertices.extend(outlined_rect(rect, OUTLINE_WIDTH, colors::DEBUG_WALL));
        }
        vertices.extend(outlined_rect(&debug.player, OUTLINE_WIDTH, colors::DEBUG_PLAYER));
    }

    vertices
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::settings::Settings;
    use crate::sim::{Level, Platform, SimulationState, StripOrientation, WallGeometry};

    #[test]
    fn test_filled_rect_corners() {
        let v = filled_rect(&Rect::new(10.0, 20.0, 30.0, 40.0), colors::PLATFORM);
        assert_eq!(v[0].position, [10.0, 20.0]);
        assert_eq!(v[2].position, [40.0, 60.0]);
        assert_eq!(v[5].position, [10.0, 60.0]);
    }

    #[test]
    fn test_outline_is_four_quads() {
        let v = outlined_rect(&Rect::new(0.0, 0.0, 100.0, 50.0), 1.0, colors::DEBUG_PLAYER);
        assert_eq!(v.len(), 24);
        assert!(outlined_rect(&Rect::new(0.0, 0.0, 0.0, 50.0), 1.0, colors::DEBUG_PLAYER).is_empty());
    }

    #[test]
    fn test_scene_colors_by_kind() {
        let mut state = SimulationState::new(&Settings::default(), (192, 48), StripOrientation::Horizontal);
        let level = Level::new(vec![
            Platform::new(80, 430, 200, 20, false, true),
            Platform::new(300, 400, 60, 120, true, true).with_walls(true, false),
        ]);

        let snap = RenderSnapshot::capture(&state, &level, &WallGeometry::default());
        let v = scene_vertices(&snap);
        // 3 filled rects: platform, obstacle, one wall
        assert_eq!(v.len(), 18);
        assert_eq!(v[0].color, colors::PLATFORM);
        assert_eq!(v[6].color, colors::OBSTACLE);
        assert_eq!(v[12].color, colors::WALL);

        state.debug_overlay = true;
        let snap = RenderSnapshot::capture(&state, &level, &WallGeometry::default());
        // + 2 platform outlines, 1 wall outline, 1 player outline
        assert_eq!(scene_vertices(&snap).len(), 18 + 4 * 24);
    }

    #[test]
    fn test_vertices_cast_to_bytes() {
        let v = filled_rect(&Rect::new(0.0, 0.0, 1.0, 1.0), colors::WALL);
        let bytes: &[u8] = bytemuck::cast_slice(&v);
        assert_eq!(bytes.len(), 6 * Vertex::STRIDE);
    }
}
