//! Error type for data-dependent failures.

use thiserror::Error;

/// Errors returned by fallible vector and orientation operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum GeomError {
    /// Coordinate index outside `[0, dim)`.
    #[error("index {index} out of bounds for dimension {dim}")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// Dimension of the vector.
        dim: usize,
    },

    /// Normalizing a vector whose magnitude is within tolerance of zero.
    #[error("cannot normalize a zero-length vector")]
    ZeroVector,

    /// A NaN or infinite coordinate where a finite one is required.
    #[error("non-finite coordinate")]
    NonFinite,

    /// Classifying against a segment whose endpoints coincide.
    #[error("degenerate segment: origin and destination coincide")]
    DegenerateSegment,
}
