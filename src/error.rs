use num_bigint::BigInt;
use num_rational::BigRational;
use thiserror::Error;

/// Result type specialized for polynomial and sharing operations.
pub type Result<T> = core::result::Result<T, Error>;

/// Errors returned by interpolation, splitting and recovery.
#[derive(Debug, Error)]
pub enum Error {
    /// Interpolation was requested without any point.
    #[error("no points given")]
    EmptyInput,
    /// Two of the supplied points share an x-coordinate.
    #[error("duplicate x {x}")]
    DuplicatePoint { x: BigInt },
    /// The recovered constant term is not an integer, so the shares are
    /// corrupted or come from different splits.
    #[error("invalid reconstruction: constant term {constant} is not an integer")]
    NonIntegerReconstruction { constant: BigRational },
    /// The random number generator could not fill a coefficient buffer.
    #[error("random source failure: {0}")]
    RandomSourceFailure(rand::Error),
    #[error("malformed point encoding: {0}")]
    MalformedPoint(&'static str),
}
