pub mod motion;

pub use motion::{AcceleratedMotion, Heading, Translation};
