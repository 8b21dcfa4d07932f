// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use rayon::prelude::*;

use super::{serial, Operand};
use crate::{field::PrimeField, utils::uninit_vector};

// CONSTANTS
// ================================================================================================

/// Number of lanes processed by a single task; sequential chains (batch inversion, power
/// series) restart at batch boundaries so that every batch is independent of its neighbors.
const BATCH_SIZE: usize = 1024;

// ELEMENTWISE OPERATIONS
// ================================================================================================

pub fn bin_op<F>(a: &[u128], b: Operand<'_>, f: F) -> Vec<u128>
where
    F: Fn(u128, u128) -> u128 + Send + Sync,
{
    match b {
        Operand::Slice(b) => a.par_iter().zip(b.par_iter()).map(|(&x, &y)| f(x, y)).collect(),
        Operand::Scalar(s) => a.par_iter().map(|&x| f(x, s)).collect(),
    }
}

// BATCH INVERSION
// ================================================================================================

pub fn batch_inversion(field: &PrimeField, values: &[u128]) -> Vec<u128> {
    let mut result = uninit_vector(values.len());
    result
        .par_chunks_mut(BATCH_SIZE)
        .zip(values.par_chunks(BATCH_SIZE))
        .for_each(|(result, values)| serial::batch_inversion_into(field, values, result));
    result
}

// POWER SERIES
// ================================================================================================

pub fn get_power_series(field: &PrimeField, b: u128, n: usize) -> Vec<u128> {
    let mut result = uninit_vector(n);
    result.par_chunks_mut(BATCH_SIZE).enumerate().for_each(|(i, batch)| {
        let start = field.pow(b, (i * BATCH_SIZE) as u128);
        serial::fill_power_series(field, batch, b, start);
    });
    result
}

// MATRIX MULTIPLICATION
// ================================================================================================

pub fn mul_matrixes(
    field: &PrimeField,
    a: &[u128],
    b: &[u128],
    n: usize,
    m: usize,
    p: usize,
) -> Vec<u128> {
    let mut result = uninit_vector(n * p);
    result
        .par_chunks_mut(p.max(1))
        .enumerate()
        .take(n)
        .for_each(|(i, row)| serial::mul_matrix_row(field, a, b, m, p, i, row));
    result
}

// LINEAR COMBINATION
// ================================================================================================

pub fn combine_vectors(field: &PrimeField, a: &[u128], b: &[u128]) -> u128 {
    a.par_iter()
        .zip(b.par_iter())
        .map(|(&x, &y)| field.mul(x, y))
        .reduce(|| 0u128, |x, y| field.add(x, y))
}
