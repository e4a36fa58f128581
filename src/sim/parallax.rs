//! Parallax background scrolling
//!
//! A single scroll accumulator drifts every tick. Each background layer
//! scrolls at its own multiple of it, and is drawn twice (one viewport width
//! apart) so the wrap is seamless.

use serde::{Deserialize, Serialize};

use crate::consts::LAYER_COUNT;

/// Scroll accumulator plus per-layer speed multipliers
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParallaxState {
    /// Kept in f64 so the per-tick step stays visible after hours of scrolling
    pub accumulator: f64,
    pub speeds: [f32; LAYER_COUNT],
}

/// Where to draw the two tiled copies of one background layer
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LayerPlacement {
    pub layer: usize,
    pub offset: f32,
    /// x of the first copy (== offset)
    pub first_x: f32,
    /// x of the second copy (offset + viewport width)
    pub second_x: f32,
    pub width: f32,
}

impl ParallaxState {
    pub fn new(speeds: [f32; LAYER_COUNT]) -> Self {
        Self {
            accumulator: 0.0,
            speeds,
        }
    }

    /// Drift the accumulator by one tick
    pub fn update(&mut self, step: f32) {
        self.accumulator -= f64::from(step);
    }

    /// Offset of a layer, wrapped to the viewport width.
    ///
    /// Uses remainder semantics, so offsets share the accumulator's sign.
    pub fn layer_offset(&self, layer: usize, viewport_width: f32) -> f32 {
        if viewport_width <= 0.0 {
            return 0.0;
        }
        let speed = self.speeds.get(layer).copied().unwrap_or(0.0);
        ((self.accumulator * f64::from(speed)) % f64::from(viewport_width)) as f32
    }

    /// Offsets of every layer
    pub fn offsets(&self, viewport_width: f32) -> [f32; LAYER_COUNT] {
        std::array::from_fn(|i| self.layer_offset(i, viewport_width))
    }

    /// Placements for rendering both tiled copies of every layer
    pub fn placements(&self, viewport_width: f32) -> [LayerPlacement; LAYER_COUNT] {
        std::array::from_fn(|layer| {
            let offset = self.layer_offset(layer, viewport_width);
            LayerPlacement {
                layer,
                offset,
                first_x: offset,
                second_x: offset + viewport_width,
                width: viewport_width,
            }
        })
    }
}
