// File: crates/chart-core/src/types.rs
// Summary: Shared types and constants (canvas size, margins, inner layout).

use crate::error::{ChartError, Result};

/// Default canvas width in pixels.
pub const WIDTH: u32 = 800;
/// Default canvas height in pixels.
pub const HEIGHT: u32 = 500;

/// Outer dimensions of every chart container.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Canvas {
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Inner drawing area left after subtracting `insets`.
    /// Fails when either inner dimension would be zero or negative.
    pub fn layout(&self, insets: Insets) -> Result<Layout> {
        let inner_width = self.width as i64 - insets.hsum() as i64;
        let inner_height = self.height as i64 - insets.vsum() as i64;
        if inner_width <= 0 || inner_height <= 0 {
            return Err(ChartError::InvalidLayout {
                width: self.width,
                height: self.height,
                insets,
            });
        }
        Ok(Layout {
            insets,
            inner_width: inner_width as f64,
            inner_height: inner_height as f64,
        })
    }
}

impl Default for Canvas {
    fn default() -> Self {
        Self::new(WIDTH, HEIGHT)
    }
}

/// Screen margins, in pixels.
/// Contract: all fields are non-negative.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Insets {
    pub left: u32,
    pub right: u32,
    pub top: u32,
    pub bottom: u32,
}

impl Insets {
    /// Create new insets (non-negative by type).
    pub const fn new(left: u32, right: u32, top: u32, bottom: u32) -> Self {
        Self { left, right, top, bottom }
    }
    /// Total horizontal inset (left + right).
    pub const fn hsum(&self) -> u32 { self.left + self.right }
    /// Total vertical inset (top + bottom).
    pub const fn vsum(&self) -> u32 { self.top + self.bottom }
}

impl Default for Insets {
    fn default() -> Self {
        Self::new(120, 20, 40, 50)
    }
}

/// Result of `Canvas::layout`: margins plus the positive inner size.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Layout {
    pub insets: Insets,
    pub inner_width: f64,
    pub inner_height: f64,
}

impl Layout {
    /// `translate(left, top)` for the plot group.
    pub fn plot_transform(&self) -> String {
        format!("translate({}, {})", self.insets.left, self.insets.top)
    }
}
