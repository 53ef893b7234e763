//! Error types for the gear-train pipeline.
//!
//! An infeasible train is not an error: it is reported as `Fraction::INFEASIBLE`.
//! Errors here are precondition violations only.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GearError {
    /// Fewer than two pegs leave no span to put gears on.
    #[error("a gear train needs at least 2 pegs, got {found}")]
    TooFewPegs { found: usize },
    /// `solve` was handed an empty span list.
    #[error("cannot solve a gear train without spans")]
    NoSpans,
}
