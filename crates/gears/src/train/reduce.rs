//! Exact fraction reduction.

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, Zero};

use super::types::Fraction;

/// Reduce `numer / denom` to coprime integers with a positive denominator.
///
/// The chain only ever produces half-integers, so clearing fractional parts
/// means doubling both sides; other denominators are cleared the same way by
/// their least common multiple. A zero denominator yields the sentinel.
pub fn reduce(numer: BigRational, denom: BigRational) -> Fraction {
    if denom.is_zero() {
        return Fraction::infeasible();
    }
    let (numer, denom) = if numer.is_integer() && denom.is_integer() {
        (numer, denom)
    } else {
        let scale = BigRational::from_integer(numer.denom().lcm(denom.denom()));
        (numer * &scale, denom * scale)
    };
    let (mut n, mut d): (BigInt, BigInt) = (numer.to_integer(), denom.to_integer());
    if d.is_one() {
        return Fraction::new(n, d);
    }
    let divisor = n.gcd(&d);
    if !divisor.is_one() {
        n /= &divisor;
        d /= &divisor;
    }
    if d.is_negative() {
        n = -n;
        d = -d;
    }
    Fraction::new(n, d)
}
