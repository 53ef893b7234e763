//! Gear train: solve, validate and reduce the first-gear radius.
//!
//! Purpose
//! - Pegs sit at integer positions along a beam; adjacent gears mesh, so each
//!   span equals the sum of the two radii on it. The last gear must turn at
//!   double the first gear's speed, i.e. its radius is half the first radius.
//! - The stages are pure functions over an immutable span slice, so the same
//!   spans feed both the solve and the validation walk.
//!
//! Stages
//! - `solve.rs`: `distances`, `solve` (right-to-left elimination).
//! - `chain.rs`: `RadiusChain`, `radii`, `is_feasible`.
//! - `reduce.rs`: `reduce` to coprime integers.
//! - `cfg.rs`: minimum-radius policy.

mod cfg;
mod chain;
mod reduce;
mod solve;
mod types;

pub use cfg::{GearCfg, LAST_TO_FIRST_RATIO, MIN_FIRST_RADIUS, MIN_RADIUS};
pub use chain::{is_feasible, radii, RadiusChain};
pub use reduce::reduce;
pub use solve::{distances, solve};
pub use types::{Fraction, LinearRelation};

use num_bigint::BigInt;
use num_rational::BigRational;
use tracing::debug;

use crate::error::GearError;

/// Radius of the first gear for `pegs` under the default size policy.
///
/// Returns `Fraction::infeasible()` when no valid train exists and
/// `GearError::TooFewPegs` for fewer than two pegs.
pub fn answer(pegs: &[i64]) -> Result<Fraction, GearError> {
    answer_with_cfg(pegs, GearCfg::default())
}

/// As `answer`, with an explicit size policy.
pub fn answer_with_cfg(pegs: &[i64], cfg: GearCfg) -> Result<Fraction, GearError> {
    Ok(match solved(pegs, cfg)? {
        Some(s) => s.reduced(),
        None => Fraction::infeasible(),
    })
}

/// A validated train: the reduced first radius and every radius in peg order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GearTrain {
    pub first_radius: Fraction,
    pub radii: Vec<BigRational>,
}

impl GearTrain {
    /// Solve and validate; `Ok(None)` when no valid train exists.
    pub fn solve(pegs: &[i64], cfg: GearCfg) -> Result<Option<Self>, GearError> {
        Ok(solved(pegs, cfg)?.map(|s| Self {
            first_radius: s.reduced(),
            radii: radii(&s.spans, s.first_radius),
        }))
    }

    /// Radius of the last gear (half the first).
    pub fn last_radius(&self) -> Option<&BigRational> {
        self.radii.last()
    }
}

/// Output of the solve and validate stages for a feasible train.
struct Solved {
    spans: Vec<BigInt>,
    relation: LinearRelation,
    first_radius: BigRational,
}

impl Solved {
    fn reduced(&self) -> Fraction {
        reduce(self.relation.constant.clone(), self.relation.denominator())
    }
}

/// Shared front of `answer_with_cfg` and `GearTrain::solve`.
fn solved(pegs: &[i64], cfg: GearCfg) -> Result<Option<Solved>, GearError> {
    if pegs.len() < 2 {
        return Err(GearError::TooFewPegs { found: pegs.len() });
    }
    let spans = distances(pegs);
    let relation = solve(&spans)?;
    let first_radius = chain::feasible_first_radius(&spans, &relation, cfg);
    debug!(pegs = pegs.len(), feasible = first_radius.is_some(), "validated gear train");
    Ok(first_radius.map(|first_radius| Solved {
        spans,
        relation,
        first_radius,
    }))
}
