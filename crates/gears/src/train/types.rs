//! Value types passed between pipeline stages.
//!
//! - `LinearRelation`: `x1 = constant + coefficient · x1`, the eliminated chain.
//! - `Fraction`: reduced first radius, or the `[-1, -1]` sentinel.

use std::fmt;

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

/// Unresolved relation for the first gear radius: `x1 = constant + coefficient · x1`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LinearRelation {
    pub constant: BigRational,
    pub coefficient: BigRational,
}

impl LinearRelation {
    #[inline]
    pub fn new(constant: BigRational, coefficient: BigRational) -> Self {
        Self {
            constant,
            coefficient,
        }
    }
    /// `1 − coefficient`, so that `x1 · denominator() = constant`.
    #[inline]
    pub fn denominator(&self) -> BigRational {
        BigRational::one() - &self.coefficient
    }
    /// Closed-form first radius; `None` if the relation is degenerate.
    pub fn first_radius(&self) -> Option<BigRational> {
        let denom = self.denominator();
        if denom.is_zero() {
            None
        } else {
            Some(&self.constant / denom)
        }
    }
}

/// First-gear radius as `numer / denom` in lowest terms.
///
/// `Fraction::infeasible()` (`-1 / -1`) stands for "no valid configuration" and
/// is never produced by reduction of a non-zero denominator.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Fraction {
    pub numer: BigInt,
    pub denom: BigInt,
}

impl Fraction {
    #[inline]
    pub fn new(numer: impl Into<BigInt>, denom: impl Into<BigInt>) -> Self {
        Self {
            numer: numer.into(),
            denom: denom.into(),
        }
    }
    /// The `[-1, -1]` sentinel.
    pub fn infeasible() -> Self {
        Self::new(-1, -1)
    }
    pub fn is_infeasible(&self) -> bool {
        let minus_one = -BigInt::one();
        self.numer == minus_one && self.denom == minus_one
    }
    /// Exact value of a real solution; `None` for the sentinel.
    pub fn to_rational(&self) -> Option<BigRational> {
        if self.is_infeasible() || self.denom.is_zero() {
            None
        } else {
            Some(BigRational::new(self.numer.clone(), self.denom.clone()))
        }
    }
}

impl From<Fraction> for (BigInt, BigInt) {
    fn from(f: Fraction) -> Self {
        (f.numer, f.denom)
    }
}

impl fmt::Display for Fraction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}, {}]", self.numer, self.denom)
    }
}
