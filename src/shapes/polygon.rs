use crate::collision::interval::{project_points, Interval};
use crate::error::GeometryError;
use crate::math::transform::Transform;
use crate::math::vec2::Vec2;

use super::edge::Edge;

/// A convex polygon: an implicitly closed ring of at least 3 vertices,
/// wound clockwise by convention.
///
/// Immutable once built. Moving a shape produces a new polygon, see
/// [`Polygon::translated`].
#[derive(Debug, Clone, PartialEq)]
pub struct Polygon {
    vertices: Vec<Vec2>,
}

impl Polygon {
    /// Creates a new polygon from a vector of vertices.
    ///
    /// Fails with [`GeometryError::InvalidPolygon`] for fewer than 3 vertices.
    /// Convexity is not checked.
    pub fn new(vertices: Vec<Vec2>) -> Result<Self, GeometryError> {
        if vertices.len() < 3 {
            return Err(GeometryError::InvalidPolygon {
                count: vertices.len(),
            });
        }
        Ok(Polygon { vertices })
    }

    /// Axis-aligned `width` x `height` rectangle centred on the origin,
    /// wound clockwise starting from the top-left corner (y up).
    pub fn rectangle(width: f64, height: f64) -> Self {
        let (hw, hh) = (width / 2.0, height / 2.0);
        Polygon {
            vertices: vec![
                Vec2::new(-hw, hh),
                Vec2::new(hw, hh),
                Vec2::new(hw, -hh),
                Vec2::new(-hw, -hh),
            ],
        }
    }

    pub fn vertices(&self) -> &[Vec2] {
        &self.vertices
    }

    /// Number of vertices (and of edges).
    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    /// Always false; a polygon holds at least 3 vertices.
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Edges in winding order: edge `i` runs from vertex `i` to vertex
    /// `(i + 1) % n`, so the last edge closes the ring.
    pub fn edges(&self) -> impl Iterator<Item = Edge> + '_ {
        let n = self.vertices.len();
        (0..n).map(move |i| Edge::new(self.vertices[i], self.vertices[(i + 1) % n]))
    }

    /// Normal of every edge, in [`Polygon::edges`] order.
    ///
    /// Fails on the first zero-length edge (coincident consecutive vertices).
    pub fn normals(&self) -> Result<Vec<Vec2>, GeometryError> {
        self.edges().map(|edge| edge.outward_normal()).collect()
    }

    /// Projects every vertex onto `axis` (a unit vector).
    pub fn project(&self, axis: Vec2) -> Interval {
        // Non-empty by construction
        project_points(&self.vertices, axis).unwrap_or_else(|| Interval::point(0.0))
    }

    /// Copy of this polygon moved by `offset`.
    pub fn translated(&self, offset: Vec2) -> Polygon {
        self.map_vertices(|v| v + offset)
    }

    /// Copy of this polygon rotated by `angle` radians around `pivot`.
    pub fn rotated_about(&self, angle: f64, pivot: Vec2) -> Polygon {
        self.map_vertices(|v| pivot + (v - pivot).rotate(angle))
    }

    /// Copy of this polygon with the full affine transform applied.
    pub fn transformed(&self, transform: &Transform) -> Polygon {
        self.map_vertices(|v| transform.apply(v))
    }

    fn map_vertices(&self, f: impl Fn(Vec2) -> Vec2) -> Polygon {
        Polygon {
            vertices: self.vertices.iter().map(|&v| f(v)).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::PI;

    const EPSILON: f64 = 1e-9;

    fn square(min: Vec2, size: f64) -> Polygon {
        Polygon::new(vec![
            Vec2::new(min.x, min.y + size),
            Vec2::new(min.x + size, min.y + size),
            Vec2::new(min.x + size, min.y),
            Vec2::new(min.x, min.y),
        ])
        .unwrap()
    }

    #[test]
    fn test_polygon_new() {
        let vertices = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0), Vec2::new(0.0, 1.0)];
        let polygon = Polygon::new(vertices).unwrap();
        assert_eq!(polygon.len(), 3);
        assert!(!polygon.is_empty());
    }

    #[test]
    fn test_polygon_new_too_few_vertices() {
        let vertices = vec![Vec2::new(0.0, 0.0), Vec2::new(1.0, 0.0)];
        assert_eq!(
            Polygon::new(vertices),
            Err(GeometryError::InvalidPolygon { count: 2 })
        );
        assert_eq!(
            Polygon::new(Vec::new()),
            Err(GeometryError::InvalidPolygon { count: 0 })
        );
    }

    #[test]
    fn test_rectangle_vertices_clockwise() {
        let rect = Polygon::rectangle(10.0, 100.0);
        assert_eq!(
            rect.vertices(),
            &[
                Vec2::new(-5.0, 50.0),
                Vec2::new(5.0, 50.0),
                Vec2::new(5.0, -50.0),
                Vec2::new(-5.0, -50.0),
            ]
        );
    }

    #[test]
    fn test_edges_wrap_around() {
        let poly = square(Vec2::ZERO, 1.0);
        let edges: Vec<Edge> = poly.edges().collect();
        assert_eq!(edges.len(), 4);
        for (i, edge) in edges.iter().enumerate() {
            assert_eq!(edge.from, poly.vertices()[i]);
            assert_eq!(edge.to, poly.vertices()[(i + 1) % 4]);
        }
        assert_eq!(edges[3].to, edges[0].from);
    }

    #[test]
    fn test_normals_of_rectangle() {
        let normals = Polygon::rectangle(10.0, 10.0).normals().unwrap();
        assert_eq!(
            normals,
            vec![
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 0.0),
                Vec2::new(0.0, 1.0),
                Vec2::new(1.0, 0.0),
            ]
        );
    }

    #[test]
    fn test_normals_depend_on_winding() {
        let triangle = vec![Vec2::new(0.0, 0.0), Vec2::new(0.0, 4.0), Vec2::new(3.0, 0.0)];
        let mut reversed = triangle.clone();
        reversed.reverse();
        let forward = Polygon::new(triangle).unwrap();
        let backward = Polygon::new(reversed).unwrap();
        assert_ne!(forward.normals().unwrap(), backward.normals().unwrap());
    }

    #[test]
    fn test_normals_fail_on_coincident_vertices() {
        let poly = Polygon::new(vec![
            Vec2::new(0.0, 0.0),
            Vec2::new(0.0, 0.0),
            Vec2::new(1.0, 1.0),
        ])
        .unwrap();
        assert_eq!(poly.normals(), Err(GeometryError::DegenerateVector));
    }

    #[test]
    fn test_normals_fail_on_non_finite_vertices() {
        let with_nan = Polygon::new(vec![
            Vec2::new(f64::NAN, 0.0),
            Vec2::new(1000.0, 10.0),
            Vec2::new(1010.0, 0.0),
        ])
        .unwrap();
        assert_eq!(with_nan.normals(), Err(GeometryError::DegenerateVector));

        // Every vertex is finite, but the edge vectors overflow
        let huge = Polygon::new(vec![
            Vec2::new(-1.5e308, 1.5e308),
            Vec2::new(1.5e308, 1.5e308),
            Vec2::new(1.5e308, -1.5e308),
        ])
        .unwrap();
        assert_eq!(huge.normals(), Err(GeometryError::DegenerateVector));
    }

    #[test]
    fn test_project_is_order_independent() {
        let poly = square(Vec2::new(2.0, 3.0), 4.0);
        let mut shuffled = poly.vertices().to_vec();
        shuffled.swap(0, 2);
        shuffled.swap(1, 3);
        let shuffled = Polygon::new(shuffled).unwrap();

        let axis = Vec2::new(1.0, 1.0).normalize().unwrap();
        assert_eq!(poly.project(axis), shuffled.project(axis));

        let x = poly.project(Vec2::new(1.0, 0.0));
        assert!((x.min - 2.0).abs() < EPSILON);
        assert!((x.max - 6.0).abs() < EPSILON);
    }

    #[test]
    fn test_translated_leaves_original_untouched() {
        let local = Polygon::rectangle(10.0, 10.0);
        let moved = local.translated(Vec2::new(100.0, 100.0));
        assert_eq!(moved.vertices()[0], Vec2::new(95.0, 105.0));
        assert_eq!(local.vertices()[0], Vec2::new(-5.0, 5.0));
    }

    #[test]
    fn test_rotated_about_pivot() {
        let poly = square(Vec2::ZERO, 2.0);
        let rotated = poly.rotated_about(PI, Vec2::new(1.0, 1.0));
        // Half turn around the centre maps each corner to the opposite one
        for (v, original) in rotated.vertices().iter().zip(poly.vertices().iter().cycle().skip(2)) {
            assert!((v.x - original.x).abs() < EPSILON);
            assert!((v.y - original.y).abs() < EPSILON);
        }
    }

    #[test]
    fn test_transformed_applies_matrix() {
        let poly = Polygon::rectangle(2.0, 2.0);
        let t = Transform::from_rotation(PI / 2.0, Vec2::new(10.0, 0.0));
        let moved = poly.transformed(&t);
        // (-1, 1) rotated a quarter turn is (-1, -1)
        assert!((moved.vertices()[0].x - 9.0).abs() < EPSILON);
        assert!((moved.vertices()[0].y + 1.0).abs() < EPSILON);
    }
}
