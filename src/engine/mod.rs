// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Bulk operations over contiguous arrays of field elements.
//!
//! Two engines implement the same contract: an in-core serial engine and a lane-parallel engine
//! built on rayon (available when the `concurrent` feature is enabled). The engine is selected
//! once, at field construction time, and the two must produce identical results for every
//! operation; parallelism is applied only across independent lanes.

use crate::field::PrimeField;

mod serial;

#[cfg(feature = "concurrent")]
mod concurrent;

#[cfg(test)]
mod tests;

// BACKEND SELECTION
// ================================================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Backend {
    Serial,
    #[cfg(feature = "concurrent")]
    Concurrent,
}

/// Returns the accelerated backend compiled into this build, if any.
pub(crate) fn accelerated_backend() -> Option<Backend> {
    #[cfg(feature = "concurrent")]
    {
        Some(Backend::Concurrent)
    }
    #[cfg(not(feature = "concurrent"))]
    {
        None
    }
}

// OPERANDS
// ================================================================================================

/// The second operand of an elementwise binary operation: either an array of equal length, or
/// a single scalar broadcast across every lane.
#[derive(Clone, Copy)]
pub(crate) enum Operand<'a> {
    Slice(&'a [u128]),
    Scalar(u128),
}

// DISPATCH
// ================================================================================================

/// Applies a binary operation elementwise; both broadcast forms share this code path. Operand
/// lengths are assumed to have been validated by the caller.
pub(crate) fn bin_op<F>(field: &PrimeField, a: &[u128], b: Operand<'_>, f: F) -> Vec<u128>
where
    F: Fn(u128, u128) -> u128 + Send + Sync,
{
    match field.backend() {
        Backend::Serial => serial::bin_op(a, b, f),
        #[cfg(feature = "concurrent")]
        Backend::Concurrent => concurrent::bin_op(a, b, f),
    }
}

/// Computes a multiplicative inverse of a sequence of elements using batch inversion; zero
/// elements are mapped to zeros.
///
/// This is significantly faster than inverting elements one-by-one because it essentially
/// transforms n inversions into 3 * n multiplications + 1 inversion.
pub(crate) fn batch_inversion(field: &PrimeField, values: &[u128]) -> Vec<u128> {
    match field.backend() {
        Backend::Serial => serial::batch_inversion(field, values),
        #[cfg(feature = "concurrent")]
        Backend::Concurrent => concurrent::batch_inversion(field, values),
    }
}

/// Returns a vector containing successive powers of b: [1, b, b^2, ..., b^(n - 1)].
pub(crate) fn get_power_series(field: &PrimeField, b: u128, n: usize) -> Vec<u128> {
    match field.backend() {
        Backend::Serial => serial::get_power_series(field, b, n),
        #[cfg(feature = "concurrent")]
        Backend::Concurrent => concurrent::get_power_series(field, b, n),
    }
}

/// Multiplies an n x m matrix by an m x p matrix, both in row-major form; returns the n x p
/// row-major result. Shapes are assumed to have been validated by the caller.
pub(crate) fn mul_matrixes(
    field: &PrimeField,
    a: &[u128],
    b: &[u128],
    n: usize,
    m: usize,
    p: usize,
) -> Vec<u128> {
    debug_assert_eq!(a.len(), n * m);
    debug_assert_eq!(b.len(), m * p);
    match field.backend() {
        Backend::Serial => serial::mul_matrixes(field, a, b, n, m, p),
        #[cfg(feature = "concurrent")]
        Backend::Concurrent => concurrent::mul_matrixes(field, a, b, n, m, p),
    }
}

/// Computes the sum of a[i] * b[i] over all i. Lengths are assumed to have been validated by
/// the caller.
pub(crate) fn combine_vectors(field: &PrimeField, a: &[u128], b: &[u128]) -> u128 {
    match field.backend() {
        Backend::Serial => serial::combine_vectors(field, a, b),
        #[cfg(feature = "concurrent")]
        Backend::Concurrent => concurrent::combine_vectors(field, a, b),
    }
}
