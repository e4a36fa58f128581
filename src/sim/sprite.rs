//! Sprite sheet slicing and frame animation
//!
//! A sprite sheet is a single image holding a strip of equally sized frames,
//! laid out left-to-right or top-to-bottom. Only the sheet's pixel size is
//! needed here; decoding the image is left to the caller.

use serde::{Deserialize, Serialize};

use super::rect::Rect;

/// Direction in which frames are laid out on the sheet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StripOrientation {
    #[default]
    Horizontal,
    Vertical,
}

/// Frame layout of a sprite sheet
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteSheet {
    pub frame_width: u32,
    pub frame_height: u32,
    pub orientation: StripOrientation,
    pub total_frames: u32,
}

impl SpriteSheet {
    /// Slice a sheet of `sheet_width` x `sheet_height` pixels into frames.
    ///
    /// A sheet that failed to load is passed as 0x0 and yields zero frames.
    pub fn new(
        sheet_width: u32,
        sheet_height: u32,
        frame_width: u32,
        frame_height: u32,
        orientation: StripOrientation,
    ) -> Self {
        let total_frames = match orientation {
            StripOrientation::Horizontal => sheet_width.checked_div(frame_width).unwrap_or(0),
            StripOrientation::Vertical => sheet_height.checked_div(frame_height).unwrap_or(0),
        };
        if total_frames == 0 {
            log::warn!(
                "Sprite sheet {}x{} holds no {}x{} frames",
                sheet_width,
                sheet_height,
                frame_width,
                frame_height
            );
        }
        Self {
            frame_width,
            frame_height,
            orientation,
            total_frames,
        }
    }

    /// Source rect of a frame within the sheet
    pub fn frame_source(&self, index: u32) -> Rect {
        let (w, h) = (self.frame_width as f32, self.frame_height as f32);
        match self.orientation {
            StripOrientation::Horizontal => Rect::new(index as f32 * w, 0.0, w, h),
            StripOrientation::Vertical => Rect::new(0.0, index as f32 * h, w, h),
        }
    }
}

/// Draw transform for a sprite frame: where the frame origin goes and the
/// signed horizontal scale (negative when mirrored).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SpriteTransform {
    pub origin_x: f32,
    pub origin_y: f32,
    pub scale_x: f32,
    pub scale_y: f32,
}

impl SpriteTransform {
    pub fn new(x: f32, y: f32, frame_width: u32, scale: f32, flip_horizontal: bool) -> Self {
        if flip_horizontal {
            // Mirror around the frame's right edge so the bounds stay put
            Self {
                origin_x: x + frame_width as f32 * scale,
                origin_y: y,
                scale_x: -scale,
                scale_y: scale,
            }
        } else {
            Self {
                origin_x: x,
                origin_y: y,
                scale_x: scale,
                scale_y: scale,
            }
        }
    }
}

/// Cycles a frame index at a fixed tick cadence
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SpriteAnimator {
    /// Ticks since the last frame change
    counter: u32,
    /// Ticks per frame
    threshold: u32,
    current_frame: u32,
    total_frames: u32,
}

impl SpriteAnimator {
    pub fn new(total_frames: u32, threshold: u32) -> Self {
        Self {
            counter: 0,
            threshold: threshold.max(1),
            current_frame: 0,
            total_frames,
        }
    }

    /// Count one tick; every `threshold` ticks move to the next frame.
    ///
    /// Returns the frame index after the tick.
    pub fn advance(&mut self) -> u32 {
        self.counter += 1;
        if self.counter >= self.threshold {
            self.counter = 0;
            if self.total_frames > 0 {
                self.set_current_frame((self.current_frame + 1) % self.total_frames);
            }
        }
        self.current_frame
    }

    /// Jump to a frame. Indices outside `[0, total_frames)` are ignored.
    pub fn set_current_frame(&mut self, index: u32) {
        if index < self.total_frames {
            self.current_frame = index;
        }
    }

    #[inline]
    pub fn current_frame(&self) -> u32 {
        self.current_frame
    }

    #[inline]
    pub fn total_frames(&self) -> u32 {
        self.total_frames
    }

    #[inline]
    pub fn counter(&self) -> u32 {
        self.counter
    }
}
