//! Projection of vertex sets onto an axis.

use crate::math::vec2::Vec2;

/// Range of scalar projections on one axis. `min <= max` always holds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    /// Degenerate interval holding a single value.
    pub fn point(value: f64) -> Self {
        Self { min: value, max: value }
    }

    /// Widens the interval to cover `value`. Equal values leave it unchanged.
    pub fn including(mut self, value: f64) -> Self {
        if value < self.min {
            self.min = value;
        } else if value > self.max {
            self.max = value;
        }
        self
    }

    pub fn length(&self) -> f64 {
        self.max - self.min
    }

    /// True when there is a gap between the two intervals.
    ///
    /// Touching intervals (`self.max == other.min`) are not separated.
    pub fn is_separated_from(&self, other: &Interval) -> bool {
        self.max < other.min || other.max < self.min
    }
}

/// Projects every point onto `axis` and returns the covering interval.
///
/// The first point seeds both bounds and the rest are folded in. Returns
/// `None` only for an empty slice. `axis` must be a unit vector.
pub fn project_points(points: &[Vec2], axis: Vec2) -> Option<Interval> {
    let (first, rest) = points.split_first()?;
    Some(
        rest.iter()
            .fold(Interval::point(first.project_onto(axis)), |interval, p| {
                interval.including(p.project_onto(axis))
            }),
    )
}
