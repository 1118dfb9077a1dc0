use serde::{Deserialize, Serialize};

/// A position on the easel plane. `x` runs along the width, `y` along the height.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Height/width pair. Used for paper sheets, image content and easel slots alike.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Size {
    pub height: f64,
    pub width: f64,
}

impl Size {
    pub const fn new(height: f64, width: f64) -> Self {
        Self { height, width }
    }

    /// Height divided by width, the same convention the aspect-ratio table uses.
    pub fn aspect(&self) -> f64 {
        self.height / self.width
    }

    /// Returns true if `self` fits inside `outer` without rotation (inclusive edges).
    pub fn fits_within(&self, outer: &Size) -> bool {
        self.height <= outer.height && self.width <= outer.width
    }

    /// Geometric center, with the origin at the top-left corner.
    pub fn center(&self) -> Point {
        Point::new(self.width / 2.0, self.height / 2.0)
    }
}

/// Blade offsets, each measured as twice the distance from the easel center to the
/// corresponding image edge.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EaselBlades {
    pub left: f64,
    pub right: f64,
    pub top: f64,
    pub bottom: f64,
}

impl EaselBlades {
    pub const fn new(left: f64, right: f64, top: f64, bottom: f64) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }
}

/// Everything needed at the easel for one print: which slot to use, the image size
/// that was fitted, and where to set the blades.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EaselPlan {
    pub slot: Size,
    pub image: Size,
    pub blades: EaselBlades,
}
