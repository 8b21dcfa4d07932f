// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use core::fmt;

// MATH ERROR
// ================================================================================================

/// Represents an error raised by a field, vector, matrix, or polynomial operation.
///
/// Errors are raised synchronously and surfaced to the caller verbatim; no operation retries
/// internally or returns partial results.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MathError {
    /// An argument was outside the contract of the operation
    InvalidArgument(String),
    /// Operands of shapes {0} and {1} were passed to an operation requiring equal shapes
    DimensionMismatch(usize, usize),
    /// An evaluation domain was malformed
    InvalidDomain(String),
    /// An index or encoded value was outside the addressable range
    OutOfRange(String),
    /// A search completed without finding a result
    NotFound(String),
}

impl fmt::Display for MathError {
    #[rustfmt::skip]
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument(msg) => {
                write!(f, "invalid argument: {}", msg)
            }
            Self::DimensionMismatch(expected, actual) => {
                write!(f, "operand shapes must be the same, but were {} and {}", expected, actual)
            }
            Self::InvalidDomain(msg) => {
                write!(f, "invalid evaluation domain: {}", msg)
            }
            Self::OutOfRange(msg) => {
                write!(f, "out of range: {}", msg)
            }
            Self::NotFound(msg) => {
                write!(f, "not found: {}", msg)
            }
        }
    }
}

impl std::error::Error for MathError {}
