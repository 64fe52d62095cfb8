//! Selects body pairs and runs the SAT test on each.
//!
//! The default policy only tests neighbours in list order: `(0, 1)`,
//! `(1, 2)`, ... A collision between bodies that are not adjacent in the list
//! is not reported. Callers that need every pair pass [`all_pairs`] (or any
//! other pair list) to [`detect_collisions_among`].

use tracing::{info, warn};

use super::sat;
use crate::error::CollisionError;
use crate::objects::Body;

/// Indices of two bodies in the world's body list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct BodyPair {
    pub first: usize,
    pub second: usize,
}

impl BodyPair {
    pub fn new(first: usize, second: usize) -> Self {
        Self { first, second }
    }
}

/// A pair that could not be tested.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PairFailure {
    pub pair: BodyPair,
    pub error: CollisionError,
}

/// Outcome of one broad-phase pass.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CollisionReport {
    /// Number of pairs that went through the SAT test without error.
    pub tested: usize,
    /// Pairs found overlapping, in test order.
    pub collisions: Vec<BodyPair>,
    /// Pairs skipped because of bad geometry or bad indices.
    pub failures: Vec<PairFailure>,
}

impl CollisionReport {
    pub fn is_colliding(&self, pair: BodyPair) -> bool {
        self.collisions.contains(&pair)
    }
}

/// `(i - 1, i)` for every `i` in `1..count`.
pub fn consecutive_pairs(count: usize) -> impl Iterator<Item = BodyPair> {
    (1..count).map(|i| BodyPair::new(i - 1, i))
}

/// Every unordered pair `(i, j)` with `i < j < count`.
pub fn all_pairs(count: usize) -> impl Iterator<Item = BodyPair> {
    (0..count).flat_map(move |i| ((i + 1)..count).map(move |j| BodyPair::new(i, j)))
}

/// Tests consecutive pairs of `bodies`.
pub fn detect_collisions(bodies: &[Body]) -> CollisionReport {
    detect_collisions_among(bodies, consecutive_pairs(bodies.len()))
}

/// Tests the given pairs. A failing pair is recorded and logged; the pass
/// carries on with the remaining pairs.
pub fn detect_collisions_among<I>(bodies: &[Body], pairs: I) -> CollisionReport
where
    I: IntoIterator<Item = BodyPair>,
{
    let mut report = CollisionReport::default();

    for pair in pairs {
        match test_pair(bodies, pair) {
            Ok(colliding) => {
                report.tested += 1;
                if colliding {
                    info!(first = pair.first, second = pair.second, "collision");
                    report.collisions.push(pair);
                }
            }
            Err(error) => {
                warn!(first = pair.first, second = pair.second, %error, "skipping pair");
                report.failures.push(PairFailure { pair, error });
            }
        }
    }

    report
}

fn test_pair(bodies: &[Body], pair: BodyPair) -> Result<bool, CollisionError> {
    let first = body_at(bodies, pair.first)?;
    let second = body_at(bodies, pair.second)?;
    Ok(sat::overlaps(&first.world_polygon(), &second.world_polygon())?)
}

fn body_at(bodies: &[Body], index: usize) -> Result<&Body, CollisionError> {
    bodies.get(index).ok_or(CollisionError::MissingBody { index })
}
