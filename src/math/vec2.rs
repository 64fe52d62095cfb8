use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

use serde::{Deserialize, Serialize};

use crate::error::GeometryError;

/// 2D vector or point. A plain value: every operation returns a new one.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub const ZERO: Vec2 = Vec2::new(0.0, 0.0);

    pub const fn new(x: f64, y: f64) -> Vec2 {
        Vec2 { x, y }
    }

    pub fn dot(self, rhs: Vec2) -> f64 {
        self.x * rhs.x + self.y * rhs.y
    }

    /// Scalar projection of this point onto `axis`.
    ///
    /// The axis must already be a unit vector. It is not re-validated here:
    /// an unnormalized axis gives a scaled value instead of an error.
    pub fn project_onto(self, axis: Vec2) -> f64 {
        self.dot(axis)
    }

    pub fn magnitude_squared(self) -> f64 {
        self.dot(self)
    }

    /// Euclidean length.
    pub fn magnitude(self) -> f64 {
        self.x.hypot(self.y)
    }

    /// Returns the unit vector pointing the same way.
    ///
    /// Fails with [`GeometryError::DegenerateVector`] for a zero vector, and
    /// for one whose length is NaN or infinite.
    pub fn normalize(self) -> Result<Vec2, GeometryError> {
        match self.magnitude() {
            len if len == 0.0 || !len.is_finite() => Err(GeometryError::DegenerateVector),
            len => Ok(self / len),
        }
    }

    pub fn distance(self, to: Vec2) -> f64 {
        (to - self).magnitude()
    }

    /// `(x, y) -> (-y, x)`, a quarter turn counter-clockwise. Edge normals
    /// use their own sign rule, see [`crate::shapes::Edge::outward_normal`].
    pub fn perpendicular(self) -> Vec2 {
        Vec2::new(-self.y, self.x)
    }

    /// Counter-clockwise rotation by `angle` radians.
    pub fn rotate(self, angle: f64) -> Vec2 {
        let (s, c) = angle.sin_cos();
        Vec2::new(c * self.x - s * self.y, s * self.x + c * self.y)
    }

    /// Signed area of the parallelogram spanned by the two vectors.
    pub fn cross(self, rhs: Vec2) -> f64 {
        self.x * rhs.y - self.y * rhs.x
    }
}

impl Add for Vec2 {
    type Output = Vec2;

    fn add(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x + rhs.x, self.y + rhs.y)
    }
}

impl Sub for Vec2 {
    type Output = Vec2;

    fn sub(self, rhs: Vec2) -> Vec2 {
        Vec2::new(self.x - rhs.x, self.y - rhs.y)
    }
}

impl Mul<f64> for Vec2 {
    type Output = Vec2;

    fn mul(self, k: f64) -> Vec2 {
        Vec2::new(self.x * k, self.y * k)
    }
}

impl Mul<Vec2> for f64 {
    type Output = Vec2;

    fn mul(self, v: Vec2) -> Vec2 {
        v * self
    }
}

// No zero check: normalize() is the guarded path.
impl Div<f64> for Vec2 {
    type Output = Vec2;

    fn div(self, k: f64) -> Vec2 {
        Vec2::new(self.x / k, self.y / k)
    }
}

impl Neg for Vec2 {
    type Output = Vec2;

    fn neg(self) -> Vec2 {
        Vec2::new(-self.x, -self.y)
    }
}

impl AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Vec2) {
        *self = *self + rhs;
    }
}

impl SubAssign for Vec2 {
    fn sub_assign(&mut self, rhs: Vec2) {
        *self = *self - rhs;
    }
}
