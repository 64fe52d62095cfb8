//! Error types shared by the geometry and collision code.

use thiserror::Error;

/// Failures raised while deriving geometry from vertices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeometryError {
    /// A zero-length vector was normalized (coincident vertices, or a body
    /// with zero velocity asked for its heading).
    #[error("cannot normalize a zero-length vector")]
    DegenerateVector,
    /// A polygon was built from fewer than 3 vertices.
    #[error("polygon needs at least 3 vertices, got {count}")]
    InvalidPolygon { count: usize },
}

/// Failures for a single candidate pair in the broad phase.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CollisionError {
    #[error(transparent)]
    Geometry(#[from] GeometryError),
    /// An explicit pair named a body index that is not in the world.
    #[error("no body at index {index}")]
    MissingBody { index: usize },
}
