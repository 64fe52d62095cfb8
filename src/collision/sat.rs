//! Separating axis test for pairs of convex polygons.
//!
//! Candidate axes are the edge normals of the first polygon followed by the
//! edge normals of the second, in edge order. The first axis whose projected
//! intervals have a gap ends the test. Intervals that only touch do not
//! count as a gap, so exact contact is reported as overlap.

use tracing::{debug, trace};

use super::interval::Interval;
use crate::error::GeometryError;
use crate::math::vec2::Vec2;
use crate::shapes::Polygon;

/// Which polygon contributed an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AxisSource {
    First,
    Second,
}

/// Result of projecting both polygons on one candidate axis.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AxisProbe {
    pub source: AxisSource,
    /// Index of the edge the axis is the normal of.
    pub edge_index: usize,
    pub axis: Vec2,
    pub first: Interval,
    pub second: Interval,
}

impl AxisProbe {
    pub fn separates(&self) -> bool {
        self.first.is_separated_from(&self.second)
    }
}

/// Diagnostic hook called once per axis actually tested.
pub trait AxisObserver {
    fn observe(&mut self, probe: &AxisProbe);
}

impl<F> AxisObserver for F
where
    F: FnMut(&AxisProbe),
{
    fn observe(&mut self, probe: &AxisProbe) {
        self(probe)
    }
}

/// Observer that ignores every probe.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoObserver;

impl AxisObserver for NoObserver {
    fn observe(&mut self, _probe: &AxisProbe) {}
}

/// True when the two world-space polygons overlap (touching included).
pub fn overlaps(first: &Polygon, second: &Polygon) -> Result<bool, GeometryError> {
    Ok(find_separating_axis(first, second)?.is_none())
}

/// Returns the first separating axis, or `None` when the polygons overlap.
pub fn find_separating_axis(
    first: &Polygon,
    second: &Polygon,
) -> Result<Option<AxisProbe>, GeometryError> {
    find_separating_axis_observed(first, second, &mut NoObserver)
}

/// Same as [`find_separating_axis`], reporting every tested axis to `observer`.
///
/// Both normal sets are derived before any projection, so degenerate
/// geometry fails before the observer sees anything.
pub fn find_separating_axis_observed<O>(
    first: &Polygon,
    second: &Polygon,
    observer: &mut O,
) -> Result<Option<AxisProbe>, GeometryError>
where
    O: AxisObserver + ?Sized,
{
    let first_axes = first.normals()?;
    let second_axes = second.normals()?;

    let candidates = first_axes
        .iter()
        .enumerate()
        .map(|(i, &axis)| (AxisSource::First, i, axis))
        .chain(
            second_axes
                .iter()
                .enumerate()
                .map(|(i, &axis)| (AxisSource::Second, i, axis)),
        );

    for (source, edge_index, axis) in candidates {
        let probe = AxisProbe {
            source,
            edge_index,
            axis,
            first: first.project(axis),
            second: second.project(axis),
        };
        trace!(
            ?source,
            edge_index,
            axis.x = axis.x,
            axis.y = axis.y,
            first.min = probe.first.min,
            first.max = probe.first.max,
            second.min = probe.second.min,
            second.max = probe.second.max,
            "sat axis"
        );
        observer.observe(&probe);

        if probe.separates() {
            debug!(?source, edge_index, "separating axis found");
            return Ok(Some(probe));
        }
    }

    Ok(None)
}
