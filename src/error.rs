//! Error types for Chebyshev approximation
//!
//! This module defines the failures that can occur while constructing or
//! evaluating an approximation, along with a convenient `Result` alias.

/// Errors that can occur during Chebyshev approximation.
///
/// All of these are raised synchronously at the point of detection, and carry the
/// offending input. Nothing is retried or swallowed internally.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum Error {
    /// The requested degree cannot produce an expansion.
    ///
    /// At least one coefficient (and one node) is required.
    #[error("Degree `{0}` is invalid; at least 1 coefficient is required")]
    InvalidDegree(usize),

    /// The interval bounds do not describe a non-empty, finite domain.
    #[error("Interval {0}..{1} is invalid; bounds must be finite with a < b")]
    InvalidInterval(String, String),

    /// The source function was undefined or non-finite at a required node.
    #[error("Source function is not finite at node x = {x} (got {value})")]
    Evaluation {
        /// The node at which the source was evaluated
        x: String,

        /// What the source produced there
        value: String,
    },

    /// An externally supplied coefficient sequence has the wrong length.
    #[error("Expected exactly {expected} coefficients, got {got}")]
    InvalidParameterCount {
        /// Degree of the approximation
        expected: usize,

        /// Length of the supplied sequence
        got: usize,
    },

    /// Normalized coefficients were requested but `c0` is zero.
    ///
    /// The shape coefficients are divided by `c0`, so a zero-mean source cannot be normalized.
    /// Use [`crate::Normalization::Raw`] for such functions.
    #[error("Cannot normalize coefficients: c0 is zero")]
    ZeroNormalization,

    /// A numeric value could not be cast to the target type.
    #[error("Failed to cast value to target type")]
    CastFailed,
}

/// Result type for Chebyshev approximation
pub type Result<T> = std::result::Result<T, Error>;
