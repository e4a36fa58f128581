//! Vertex types for 2D rendering

use bytemuck::{Pod, Zeroable};

/// Simple 2D vertex with position and color
#[repr(C)]
#[derive(Copy, Clone, Debug, PartialEq, Pod, Zeroable)]
pub struct Vertex {
    pub position: [f32; 2],
    pub color: [f32; 4],
}

impl Vertex {
    pub const fn new(x: f32, y: f32, color: [f32; 4]) -> Self {
        Self {
            position: [x, y],
            color,
        }
    }

    /// Byte stride of one vertex in a buffer
    pub const STRIDE: usize = std::mem::size_of::<Vertex>();
}

/// Colors for scene elements
pub mod colors {
    pub const PLATFORM: [f32; 4] = [0.5, 0.5, 0.5, 1.0]; // Gray
    pub const OBSTACLE: [f32; 4] = [0.9, 0.15, 0.15, 1.0]; // Red
    pub const WALL: [f32; 4] = [0.15, 0.25, 0.9, 1.0]; // Blue

    // Debug wireframes
    pub const DEBUG_PLATFORM: [f32; 4] = [0.1, 1.0, 0.2, 1.0];
    pub const DEBUG_WALL: [f32; 4] = [0.2, 0.6, 1.0, 1.0];
    pub const DEBUG_PLAYER: [f32; 4] = [1.0, 0.2, 0.2, 1.0];
}
