//! Errors raised by the Jack polynomial operations.

use jackpoly_partitions::PartitionError;
use thiserror::Error;

/// Errors that can occur when building a Jack-family polynomial.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum JackError {
    /// The number of variables was zero.
    #[error("the number of variables must be a strictly positive integer")]
    InvalidVariableCount,

    /// The partition argument is not a partition.
    #[error("invalid partition: {0}")]
    InvalidPartition(#[from] PartitionError),

    /// The Jack parameter is not a positive real number, or the configured
    /// policy refused it.
    #[error("invalid Jack parameter: {0}")]
    InvalidParameter(String),

    /// The normalization tag is not one of `J`, `C`, `P`, `Q`.
    #[error("unknown normalization {0:?}, expected one of \"J\", \"C\", \"P\", \"Q\"")]
    InvalidNormalization(String),

    /// A hook product or beta-ratio denominator vanished.
    #[error("a denominator vanished at this Jack parameter")]
    SingularParameter,
}
