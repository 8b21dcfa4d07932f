// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::Operand;
use crate::{field::PrimeField, utils::uninit_vector};

// ELEMENTWISE OPERATIONS
// ================================================================================================

pub fn bin_op<F>(a: &[u128], b: Operand<'_>, f: F) -> Vec<u128>
where
    F: Fn(u128, u128) -> u128,
{
    match b {
        Operand::Slice(b) => a.iter().zip(b).map(|(&x, &y)| f(x, y)).collect(),
        Operand::Scalar(s) => a.iter().map(|&x| f(x, s)).collect(),
    }
}

// BATCH INVERSION
// ================================================================================================

pub fn batch_inversion(field: &PrimeField, values: &[u128]) -> Vec<u128> {
    let mut result = uninit_vector(values.len());
    batch_inversion_into(field, values, &mut result);
    result
}

/// Inverts a sequence of elements into the provided slice using one scalar inversion: a forward
/// pass accumulates running products of the non-zero elements, and a backward pass unwinds them
/// against the single inverted product. Zero elements pass through as zeros.
pub(super) fn batch_inversion_into(field: &PrimeField, values: &[u128], result: &mut [u128]) {
    let mut last = 1u128;
    for (result, &value) in result.iter_mut().zip(values.iter()) {
        *result = last;
        if value != 0 {
            last = field.mul(last, value);
        }
    }

    last = field.inv(last);

    for i in (0..values.len()).rev() {
        if values[i] == 0 {
            result[i] = 0;
        } else {
            result[i] = field.mul(result[i], last);
            last = field.mul(last, values[i]);
        }
    }
}

// POWER SERIES
// ================================================================================================

pub fn get_power_series(field: &PrimeField, b: u128, n: usize) -> Vec<u128> {
    let mut result = uninit_vector(n);
    fill_power_series(field, &mut result, b, 1);
    result
}

#[inline(always)]
pub(super) fn fill_power_series(field: &PrimeField, result: &mut [u128], base: u128, start: u128) {
    if result.is_empty() {
        return;
    }
    result[0] = start;
    for i in 1..result.len() {
        result[i] = field.mul(result[i - 1], base);
    }
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
    for (i, row) in result.chunks_mut(p.max(1)).enumerate().take(n) {
        mul_matrix_row(field, a, b, m, p, i, row);
    }
    result
}

/// Fills row i of the product of an n x m and an m x p row-major matrix.
pub(super) fn mul_matrix_row(
    field: &PrimeField,
    a: &[u128],
    b: &[u128],
    m: usize,
    p: usize,
    i: usize,
    row: &mut [u128],
) {
    for (j, cell) in row.iter_mut().enumerate() {
        let mut acc = 0u128;
        for k in 0..m {
            acc = field.add(acc, field.mul(a[i * m + k], b[k * p + j]));
        }
        *cell = acc;
    }
}

// LINEAR COMBINATION
// ================================================================================================

pub fn combine_vectors(field: &PrimeField, a: &[u128], b: &[u128]) -> u128 {
    a.iter().zip(b).fold(0u128, |acc, (&x, &y)| field.add(acc, field.mul(x, y)))
}
