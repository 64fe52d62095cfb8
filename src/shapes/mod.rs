pub mod edge;
pub mod polygon;

pub use edge::Edge;
pub use polygon::Polygon;
