//! Size policy for gear validation.
//!
//! Policy
//! - The first gear must have radius at least 1.
//! - Every gear must have radius at least 1/2. The last gear is half the first,
//!   so 1/2 is the smallest radius the first-gear floor already admits.
//! - Values are exact rationals; boundaries are inclusive. They are small, so
//!   they live as `Rational64` and are widened to `BigRational` for comparison.

use num_bigint::BigInt;
use num_rational::{BigRational, Rational64};

/// Minimum radius of the first gear.
pub const MIN_FIRST_RADIUS: Rational64 = Rational64::new_raw(1, 1);
/// Minimum radius of any gear in the train.
pub const MIN_RADIUS: Rational64 = Rational64::new_raw(1, 2);
/// Last gear radius as a multiple of the first (last gear turns at double RPM).
pub const LAST_TO_FIRST_RATIO: Rational64 = Rational64::new_raw(1, 2);

/// Validation policy (minimum radii).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct GearCfg {
    pub min_first_radius: Rational64,
    pub min_radius: Rational64,
}

impl Default for GearCfg {
    fn default() -> Self {
        Self {
            min_first_radius: MIN_FIRST_RADIUS,
            min_radius: MIN_RADIUS,
        }
    }
}

/// Widen a policy value to the pipeline's unbounded rationals.
#[inline]
pub(crate) fn widen(r: Rational64) -> BigRational {
    BigRational::new(BigInt::from(*r.numer()), BigInt::from(*r.denom()))
}
