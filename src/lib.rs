//! 2D convex polygon collision detection using the separating axis test,
//! plus the small cooperative frame loop and dot/wall scenario built on it.

pub mod collision;
pub mod error;
pub mod integration;
pub mod math;
pub mod objects;
pub mod scenario;
pub mod scheduler;
pub mod shapes;
pub mod world;

// Re-export key types for easier use
pub use collision::{detect_collisions, overlaps, BodyPair, CollisionReport, Interval};
pub use error::{CollisionError, GeometryError};
pub use math::{Transform, Vec2};
pub use objects::Body;
pub use scenario::{Scenario, ScenarioConfig};
pub use scheduler::{Signal, Task, TaskList};
pub use shapes::{Edge, Polygon};
pub use world::{BodyId, Scene, Simulation, Stage, World};
