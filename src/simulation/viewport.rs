//! Viewport geometry and device classification supplied by the host window.

use serde::{Deserialize, Serialize};

/// Size and capabilities of the drawing surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    /// Width in logical pixels.
    pub width: f32,
    /// Height in logical pixels.
    pub height: f32,
    /// Device pixel ratio, clamped to `[1, 2]`.
    pub dpr: f32,
    /// Whether touch is the primary input.
    pub touch_primary: bool,
}

impl Viewport {
    /// Creates a viewport, clamping the pixel ratio the way the backing store is sized.
    pub fn new(width: f32, height: f32, dpr: f32, touch_primary: bool) -> Self {
        Self {
            width: width.max(1.0),
            height: height.max(1.0),
            dpr: dpr.clamp(1.0, 2.0),
            touch_primary,
        }
    }

    /// Whether the viewport is a touch device or narrower than `breakpoint`.
    pub fn is_compact(&self, breakpoint: f32) -> bool {
        self.touch_primary || self.width < breakpoint
    }

    /// The shorter side in pixels.
    pub fn min_dim(&self) -> f32 {
        self.width.min(self.height)
    }

    /// Converts a pixel position into the unit square.
    pub fn to_unit(&self, x: f32, y: f32) -> [f32; 2] {
        [x / self.width, y / self.height]
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 800.0, 1.0, false)
    }
}
