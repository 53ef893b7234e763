//! Gear-train sizing on a straight beam.
//!
//! Given peg positions along a beam, find the radius of the first gear such
//! that the last gear turns at exactly double the first gear's speed. The
//! answer is an exact fraction in lowest terms, or the sentinel `[-1, -1]`
//! when no physically valid train exists.
//!
//! Pipeline
//! - `distances`: peg positions → consecutive spans.
//! - `solve`: right-to-left elimination → `x1 = constant + coefficient · x1`.
//! - `is_feasible`: every radius in the chain meets the size policy (`GearCfg`).
//! - `reduce`: numerator/denominator → coprime integers.
//!
//! All arithmetic is exact and unbounded (`BigRational`); nothing here performs I/O.

pub mod error;
pub mod train;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use error::GearError;
pub use num_bigint::BigInt;
pub use num_rational::{BigRational, Rational64};
pub use train::{answer, answer_with_cfg, Fraction, GearCfg, GearTrain};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::error::GearError;
    pub use crate::train::{
        answer, answer_with_cfg, distances, is_feasible, radii, reduce, solve, Fraction, GearCfg,
        GearTrain, LinearRelation, RadiusChain,
    };
    pub use num_bigint::BigInt;
    pub use num_rational::{BigRational, Rational64};
}
