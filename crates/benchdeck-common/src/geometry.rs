//! Pixel-space geometry shared by the frame layer and panel chrome.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub fn new(origin: Point, size: Size) -> Self {
        Self { origin, size }
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.origin.x
            && p.x < self.origin.x + self.size.width
            && p.y >= self.origin.y
            && p.y < self.origin.y + self.size.height
    }
}

/// Clamp a candidate position so a box of `own` size stays inside a
/// container of `container` size on both axes.
///
/// The valid range per axis is `[0, container - own]`. Containers smaller
/// than the box degrade to pinning at the origin.
pub fn clamp_to_bounds(candidate: Point, container: Size, own: Size) -> Point {
    let max_x = (container.width - own.width).max(0.0);
    let max_y = (container.height - own.height).max(0.0);
    Point {
        x: candidate.x.clamp(0.0, max_x),
        y: candidate.y.clamp(0.0, max_y),
    }
}
