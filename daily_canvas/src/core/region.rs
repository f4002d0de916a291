//! Axis-aligned regions derived from node geometry.

/// Bounding box `[x1, x2] x [y1, y2]`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Region {
    pub x1: f64,
    pub x2: f64,
    pub y1: f64,
    pub y2: f64,
}

impl Region {
    pub fn from_origin_size(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x1: x,
            x2: x + width,
            y1: y,
            y2: y + height,
        }
    }

    /// True if `inner` lies inside `self` without sharing any edge.
    ///
    /// A region never strictly contains itself.
    pub fn strictly_contains(&self, inner: &Region) -> bool {
        inner.x1 > self.x1 && inner.x2 < self.x2 && inner.y1 > self.y1 && inner.y2 < self.y2
    }
}
