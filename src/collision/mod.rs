pub mod broad_phase;
pub mod interval;
pub mod sat;

// Re-export key types
pub use broad_phase::{
    all_pairs, consecutive_pairs, detect_collisions, detect_collisions_among, BodyPair,
    CollisionReport, PairFailure,
};
pub use interval::{project_points, Interval};
pub use sat::{
    find_separating_axis, find_separating_axis_observed, overlaps, AxisObserver, AxisProbe,
    AxisSource, NoObserver,
};
