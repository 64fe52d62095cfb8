use crate::math::transform::Transform;
use crate::math::vec2::Vec2;
use crate::shapes::Polygon;

/// An entity that takes part in collision: a fixed local-space shape plus the
/// kinematic state the motion behaviors update every tick.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    // Geometry, defined once at creation and never mutated
    shape: Polygon,

    // Primary state
    pub transform: Transform,
    pub velocity: Vec2,     // units per second
    pub acceleration: Vec2, // units per second squared
}

impl Body {
    /// Creates a body at the origin, at rest.
    pub fn new(shape: Polygon) -> Self {
        Self {
            shape,
            transform: Transform::identity(),
            velocity: Vec2::ZERO,
            acceleration: Vec2::ZERO,
        }
    }

    /// Creates a body whose local origin sits at `position`.
    pub fn at(shape: Polygon, position: Vec2) -> Self {
        Self {
            transform: Transform::from_translation(position),
            ..Self::new(shape)
        }
    }

    /// The local-space shape.
    pub fn shape(&self) -> &Polygon {
        &self.shape
    }

    /// World position of the local origin.
    pub fn position(&self) -> Vec2 {
        self.transform.translation
    }

    /// Transform used to draw the body. The camera is applied to the local
    /// point first, then the body's own transform.
    pub fn screen_transform(&self, camera: &Transform) -> Transform {
        self.transform.compose(camera)
    }

    /// World-space polygon used for collision.
    ///
    /// Only the translation of the transform is applied; rotation and scale
    /// are presentation-only.
    pub fn world_polygon(&self) -> Polygon {
        self.shape.translated(self.transform.translation)
    }
}
