use crate::error::GeometryError;
use crate::math::vec2::Vec2;

/// Directed side of a polygon, from one vertex to the next in winding order.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Edge {
    pub from: Vec2,
    pub to: Vec2,
}

impl Edge {
    pub fn new(from: Vec2, to: Vec2) -> Self {
        Self { from, to }
    }

    /// Returns the direction vector of the edge (from `from` to `to`).
    pub fn direction(&self) -> Vec2 {
        self.to - self.from
    }

    /// Calculates the length of the edge.
    pub fn length(&self) -> f64 {
        self.from.distance(self.to)
    }

    /// Unit normal of the edge, using the clockwise-winding sign convention:
    /// with `d = to - from`, the normal is `(d.y, -d.x)` when `d.x < 0` or
    /// `d.y > 0`, and `(-d.y, d.x)` otherwise.
    ///
    /// The convention only fixes the sign. SAT decisions do not depend on it.
    pub fn outward_normal(&self) -> Result<Vec2, GeometryError> {
        let d = self.direction();
        let normal = if d.x < 0.0 || d.y > 0.0 {
            Vec2::new(d.y, -d.x)
        } else {
            Vec2::new(-d.y, d.x)
        };
        normal.normalize()
    }
}
