//! Spans and right-to-left elimination of the span equations.
//!
//! For spans `d_1..d_m` the system is
//!
//! ```text
//!   x_1 + x_2       = d_1
//!   x_2 + x_3       = d_2
//!   ...
//!   x_m + ½ · x_1   = d_m
//! ```
//!
//! Folding from the last span back to the first leaves a single relation in `x_1`.

use num_bigint::BigInt;
use num_rational::BigRational;
use tracing::debug;

use super::cfg::{widen, LAST_TO_FIRST_RATIO};
use super::types::LinearRelation;
use crate::error::GearError;

/// Signed gaps between consecutive pegs. No ordering check: a repeated or
/// decreasing peg yields a non-positive span, which validation rejects.
pub fn distances(pegs: &[i64]) -> Vec<BigInt> {
    pegs.windows(2)
        .map(|w| BigInt::from(w[1]) - w[0])
        .collect()
}

/// Eliminate every radius but the first.
///
/// Base: `x_m = d_m − ½ · x_1` → `(d_m, −½)`.
/// Step: `x_k = d_k − x_{k+1}` → `(d_k − constant', −coefficient')`.
pub fn solve(distances: &[BigInt]) -> Result<LinearRelation, GearError> {
    let (last, rest) = distances.split_last().ok_or(GearError::NoSpans)?;
    let base = LinearRelation::new(
        BigRational::from_integer(last.clone()),
        -widen(LAST_TO_FIRST_RATIO),
    );
    let relation = rest.iter().rev().fold(base, |tail, d| {
        LinearRelation::new(
            BigRational::from_integer(d.clone()) - tail.constant,
            -tail.coefficient,
        )
    });
    debug!(
        spans = distances.len(),
        constant = %relation.constant,
        coefficient = %relation.coefficient,
        "solved span chain"
    );
    Ok(relation)
}
