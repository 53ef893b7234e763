//! Radius chain walk and feasibility check.
//!
//! Once `x1` is known every radius follows from the spans: the last gear is
//! `½ · x1` and each earlier one is `d_k − (next radius)`.

use std::iter::Rev;
use std::slice::Iter;

use num_bigint::BigInt;
use num_rational::BigRational;
use tracing::debug;

use super::cfg::{widen, GearCfg, LAST_TO_FIRST_RATIO};
use super::types::LinearRelation;

/// Iterator over gear radii from the last peg back to the first.
///
/// Yields `distances.len() + 1` values; the final one is the first gear
/// re-derived from the spans.
#[derive(Clone, Debug)]
pub struct RadiusChain<'a> {
    spans: Rev<Iter<'a, BigInt>>,
    current: Option<BigRational>,
}

impl<'a> RadiusChain<'a> {
    pub fn new(distances: &'a [BigInt], first_radius: BigRational) -> Self {
        Self {
            spans: distances.iter().rev(),
            current: Some(widen(LAST_TO_FIRST_RATIO) * first_radius),
        }
    }
}

impl Iterator for RadiusChain<'_> {
    type Item = BigRational;

    fn next(&mut self) -> Option<BigRational> {
        let radius = self.current.take()?;
        if let Some(d) = self.spans.next() {
            self.current = Some(BigRational::from_integer(d.clone()) - &radius);
        }
        Some(radius)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let n = self.spans.len() + usize::from(self.current.is_some());
        (n, Some(n))
    }
}

impl ExactSizeIterator for RadiusChain<'_> {}

/// All radii in peg order (first gear at index 0, last gear at the end).
pub fn radii(distances: &[BigInt], first_radius: BigRational) -> Vec<BigRational> {
    let mut out: Vec<_> = RadiusChain::new(distances, first_radius).collect();
    out.reverse();
    out
}

/// First radius of the relation if its whole chain meets `cfg`.
pub(crate) fn feasible_first_radius(
    distances: &[BigInt],
    relation: &LinearRelation,
    cfg: GearCfg,
) -> Option<BigRational> {
    let Some(x1) = relation.first_radius() else {
        debug!("degenerate relation: 1 - coefficient = 0");
        return None;
    };
    if x1 < widen(cfg.min_first_radius) {
        debug!(first_radius = %x1, "first gear below minimum");
        return None;
    }
    let min_radius = widen(cfg.min_radius);
    if let Some(from_back) = RadiusChain::new(distances, x1.clone()).position(|r| r < min_radius) {
        debug!(
            peg = distances.len() - from_back,
            "gear below minimum radius"
        );
        return None;
    }
    Some(x1)
}

/// True iff the relation has a solution whose whole chain meets `cfg`.
pub fn is_feasible(distances: &[BigInt], relation: &LinearRelation, cfg: GearCfg) -> bool {
    feasible_first_radius(distances, relation, cfg).is_some()
}
