//! Error types for affinum operations.

use thiserror::Error;

/// Errors that can occur while building or transforming affine matrices.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AffineError {
    /// A matrix string did not contain six finite numbers.
    #[error("malformed matrix string: {0}")]
    Parse(String),

    /// Inversion was requested for a matrix with zero determinant.
    #[error("matrix with zero determinant has no inverse")]
    Singular,

    /// `at` was called before any `morph` stored a destination.
    #[error("no interpolation destination: call morph() before at()")]
    NoDestination,
}
