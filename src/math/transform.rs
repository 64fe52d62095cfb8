use super::vec2::Vec2;
use crate::error::GeometryError;

/// Affine transform laid out like a canvas `setTransform(a, b, c, d, e, f)`:
/// `x' = m11*x + m21*y + dx`, `y' = m12*x + m22*y + dy`.
///
/// Presentation uses the whole matrix. Collision only ever reads
/// `translation`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub m11: f64,
    pub m12: f64,
    pub m21: f64,
    pub m22: f64,
    pub translation: Vec2,
}

impl Transform {
    /// Creates a new transform from its matrix entries and translation.
    pub fn new(m11: f64, m12: f64, m21: f64, m22: f64, translation: Vec2) -> Self {
        Self { m11, m12, m21, m22, translation }
    }

    /// Creates an identity transform (no translation, no rotation).
    pub fn identity() -> Self {
        Self::from_translation(Vec2::ZERO)
    }

    /// Pure translation.
    pub fn from_translation(translation: Vec2) -> Self {
        Self::new(1.0, 0.0, 0.0, 1.0, translation)
    }

    /// Counter-clockwise rotation by `angle` radians followed by a translation.
    pub fn from_rotation(angle: f64, translation: Vec2) -> Self {
        let (sin_a, cos_a) = angle.sin_cos();
        Self::new(cos_a, sin_a, -sin_a, cos_a, translation)
    }

    /// Points the local x axis along `direction`, keeping the translation.
    ///
    /// A zero direction has no heading; the matrix is left untouched and
    /// [`GeometryError::DegenerateVector`] is returned.
    pub fn set_heading(&mut self, direction: Vec2) -> Result<(), GeometryError> {
        let unit = direction.normalize()?;
        self.m11 = unit.x;
        self.m22 = unit.x;
        self.m12 = unit.y;
        self.m21 = -unit.y;
        Ok(())
    }

    /// Rotation angle encoded in the matrix, in radians.
    pub fn rotation(&self) -> f64 {
        self.m12.atan2(self.m11)
    }

    /// Applies only the matrix part to a vector.
    pub fn apply_linear(&self, v: Vec2) -> Vec2 {
        Vec2::new(
            self.m11 * v.x + self.m21 * v.y,
            self.m12 * v.x + self.m22 * v.y,
        )
    }

    /// Applies the full transform (matrix then translation) to a point.
    pub fn apply(&self, point: Vec2) -> Vec2 {
        self.apply_linear(point) + self.translation
    }

    /// Applies only the translation. This is what collision geometry uses.
    pub fn translate(&self, point: Vec2) -> Vec2 {
        point + self.translation
    }

    /// Transform equivalent to applying `inner` first, then `self`.
    pub fn compose(&self, inner: &Transform) -> Transform {
        Transform {
            m11: self.m11 * inner.m11 + self.m21 * inner.m12,
            m12: self.m12 * inner.m11 + self.m22 * inner.m12,
            m21: self.m11 * inner.m21 + self.m21 * inner.m22,
            m22: self.m12 * inner.m21 + self.m22 * inner.m22,
            translation: self.apply(inner.translation),
        }
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}
