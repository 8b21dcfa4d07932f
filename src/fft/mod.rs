// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! FFT-based polynomial evaluation and interpolation.
//!
//! Functions in this module evaluate and interpolate polynomials over domains which are
//! multiplicative subgroups of the field and have lengths equal to powers of two. As compared
//! to the evaluation and interpolation functions available in the `polynom` module, these
//! functions are much more efficient: their runtime complexity is O(`n` log `n`), where `n` is
//! the domain size.
//!
//! The domain is supplied as the full power cycle of a root of unity (see
//! [crate::PrimeField::get_power_cycle]); the twiddle factors consumed by the transform are the
//! bit-reversed first half of the cycle.

use crate::{errors::MathError, field::PrimeField};

mod serial;

#[cfg(test)]
mod tests;

// POLYNOMIAL EVALUATION
// ================================================================================================

/// Evaluates polynomial `p` at all points of the domain formed by the power cycle of a root of
/// unity; `p` is zero-padded when it is shorter than the domain.
///
/// # Errors
/// Returns an error if:
/// * The domain length is not a power of two.
/// * The polynomial is longer than the domain.
pub fn evaluate_poly(
    field: &PrimeField,
    p: &[u128],
    roots: &[u128],
) -> Result<Vec<u128>, MathError> {
    let n = roots.len();
    if !n.is_power_of_two() {
        return Err(MathError::InvalidDomain(format!(
            "domain length must be a power of two, but was {n}"
        )));
    }
    if p.len() > n {
        return Err(MathError::InvalidDomain(format!(
            "polynomial length ({}) cannot exceed domain length ({n})",
            p.len()
        )));
    }

    let mut values = vec![0u128; n];
    values[..p.len()].copy_from_slice(p);
    if n == 1 {
        return Ok(values);
    }

    let twiddles = get_twiddles(roots);
    serial::fft_in_place(field, &mut values, &twiddles);
    serial::permute(&mut values);
    Ok(values)
}

// POLYNOMIAL INTERPOLATION
// ================================================================================================

/// Interpolates a polynomial in coefficient form from its evaluations `ys` over the domain
/// formed by the power cycle of a root of unity.
///
/// The transform runs over the reversed root cycle and every output is scaled by the inverse
/// of the domain length.
///
/// # Errors
/// Returns an error if:
/// * The domain length is not a power of two.
/// * The number of evaluations does not match the domain length.
pub fn interpolate_poly(
    field: &PrimeField,
    roots: &[u128],
    ys: &[u128],
) -> Result<Vec<u128>, MathError> {
    let n = roots.len();
    if !n.is_power_of_two() {
        return Err(MathError::InvalidDomain(format!(
            "domain length must be a power of two, but was {n}"
        )));
    }
    if ys.len() != n {
        return Err(MathError::DimensionMismatch(n, ys.len()));
    }

    let mut values = ys.to_vec();
    if n == 1 {
        return Ok(values);
    }

    let inv_twiddles = get_inv_twiddles(roots);
    serial::fft_in_place(field, &mut values, &inv_twiddles);

    let inv_length = field.inv(n as u128);
    for value in values.iter_mut() {
        *value = field.mul(*value, inv_length);
    }

    serial::permute(&mut values);
    Ok(values)
}

// TWIDDLES
// ================================================================================================

/// Returns the twiddle factors for the forward transform: the first half of the root cycle in
/// bit-reversed order.
fn get_twiddles(roots: &[u128]) -> Vec<u128> {
    let mut twiddles = roots[..roots.len() / 2].to_vec();
    serial::permute(&mut twiddles);
    twiddles
}

/// Returns the twiddle factors for the inverse transform: the first half of the reversed root
/// cycle in bit-reversed order.
fn get_inv_twiddles(roots: &[u128]) -> Vec<u128> {
    let n = roots.len();
    let mut twiddles = Vec::with_capacity(n / 2);
    twiddles.push(roots[0]);
    for i in 1..n / 2 {
        twiddles.push(roots[n - i]);
    }
    serial::permute(&mut twiddles);
    twiddles
}
