pub mod scene;
pub mod simulation;
#[allow(clippy::module_inception)]
pub mod world;

pub use scene::{Flag, Scene};
pub use simulation::{Simulation, Stage};
pub use world::{BodyId, World};
