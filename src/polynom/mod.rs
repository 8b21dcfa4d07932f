// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Basic polynomial operations over prime fields.
//!
//! Polynomials are stored in reverse-coefficient form: index i holds the coefficient of x^i.
//! The degree of a polynomial is the index of its last non-zero coefficient.

use crate::{engine, errors::MathError, field::PrimeField, utils::uninit_vector};


// POLYNOMIAL EVALUATION
// ================================================================================================

/// Evaluates polynomial `p` at coordinate `x` using Horner's method; polynomials of fewer than
/// six coefficients are evaluated directly to avoid loop overhead.
pub fn eval(field: &PrimeField, p: &[u128], x: u128) -> u128 {
    match p.len() {
        0 => 0,
        1 => p[0],
        2 => field.add(p[0], field.mul(p[1], x)),
        3 => {
            let x2 = field.mul(x, x);
            let mut y = field.add(p[0], field.mul(p[1], x));
            y = field.add(y, field.mul(p[2], x2));
            y
        }
        4 => {
            let x2 = field.mul(x, x);
            let x3 = field.mul(x2, x);
            let mut y = field.add(p[0], field.mul(p[1], x));
            y = field.add(y, field.mul(p[2], x2));
            y = field.add(y, field.mul(p[3], x3));
            y
        }
        5 => {
            let x2 = field.mul(x, x);
            let x3 = field.mul(x2, x);
            let x4 = field.mul(x3, x);
            let mut y = field.add(p[0], field.mul(p[1], x));
            y = field.add(y, field.mul(p[2], x2));
            y = field.add(y, field.mul(p[3], x3));
            y = field.add(y, field.mul(p[4], x4));
            y
        }
        _ => p
            .iter()
            .rev()
            .fold(0u128, |acc, &coeff| field.add(field.mul(acc, x), coeff)),
    }
}

/// Evaluates polynomial `p` at all coordinates in the `xs` slice.
pub fn eval_many(field: &PrimeField, p: &[u128], xs: &[u128]) -> Vec<u128> {
    xs.iter().map(|&x| eval(field, p, x)).collect()
}

// POLYNOMIAL MATH OPERATIONS
// ================================================================================================

/// Adds polynomial `a` to polynomial `b`; the shorter operand is zero-extended.
pub fn add(field: &PrimeField, a: &[u128], b: &[u128]) -> Vec<u128> {
    let result_len = core::cmp::max(a.len(), b.len());
    let mut result = Vec::with_capacity(result_len);
    for i in 0..result_len {
        let c1 = if i < a.len() { a[i] } else { 0 };
        let c2 = if i < b.len() { b[i] } else { 0 };
        result.push(field.add(c1, c2));
    }
    result
}

/// Subtracts polynomial `b` from polynomial `a`; the shorter operand is zero-extended.
pub fn sub(field: &PrimeField, a: &[u128], b: &[u128]) -> Vec<u128> {
    let result_len = core::cmp::max(a.len(), b.len());
    let mut result = Vec::with_capacity(result_len);
    for i in 0..result_len {
        let c1 = if i < a.len() { a[i] } else { 0 };
        let c2 = if i < b.len() { b[i] } else { 0 };
        result.push(field.sub(c1, c2));
    }
    result
}

/// Multiplies polynomial `a` by polynomial `b` using schoolbook convolution; the result has
/// length a.len() + b.len() - 1.
///
/// # Panics
/// Panics if either polynomial is empty.
pub fn mul(field: &PrimeField, a: &[u128], b: &[u128]) -> Vec<u128> {
    assert!(!a.is_empty() && !b.is_empty(), "polynomials cannot be empty");
    let result_len = a.len() + b.len() - 1;
    let mut result = vec![0u128; result_len];
    for i in 0..a.len() {
        for j in 0..b.len() {
            let s = field.mul(a[i], b[j]);
            result[i + j] = field.add(result[i + j], s);
        }
    }
    result
}

/// Multiplies every coefficient of polynomial `p` by constant `k`.
pub fn mul_by_scalar(field: &PrimeField, p: &[u128], k: u128) -> Vec<u128> {
    p.iter().map(|&coeff| field.mul(coeff, k)).collect()
}

/// Divides polynomial `a` by polynomial `b`; if the polynomials don't divide evenly, the
/// remainder is ignored.
///
/// # Errors
/// Returns an error if:
/// * The dividend is shorter or of lower degree than the divisor.
/// * The divisor is the zero polynomial.
pub fn div(field: &PrimeField, a: &[u128], b: &[u128]) -> Result<Vec<u128>, MathError> {
    if a.len() < b.len() {
        return Err(MathError::InvalidArgument(format!(
            "dividend length ({}) cannot be smaller than divisor length ({})",
            a.len(),
            b.len()
        )));
    }

    let mut apos = degree_of(a);
    let bpos = degree_of(b);
    if b.is_empty() || b[bpos] == 0 {
        return Err(MathError::InvalidArgument(
            "cannot divide by zero polynomial".to_string(),
        ));
    }
    if apos < bpos {
        return Err(MathError::InvalidArgument(format!(
            "dividend degree ({apos}) cannot be smaller than divisor degree ({bpos})"
        )));
    }

    let mut a = a.to_vec();
    let mut result = vec![0u128; apos - bpos + 1];
    for i in (0..result.len()).rev() {
        let quot = field.div(a[apos], b[bpos]);
        result[i] = quot;
        for j in (0..bpos).rev() {
            a[i + j] = field.sub(a[i + j], field.mul(b[j], quot));
        }
        apos = apos.wrapping_sub(1);
    }

    Ok(result)
}

// DEGREE INFERENCE
// ================================================================================================

/// Returns degree of the polynomial `poly`; the zero polynomial maps to degree 0.
pub fn degree_of(poly: &[u128]) -> usize {
    for i in (0..poly.len()).rev() {
        if poly[i] != 0 {
            return i;
        }
    }
    0
}

// ZERO POLYNOMIAL
// ================================================================================================

/// Builds the vanishing polynomial of the specified roots: the product of (x - x_i) over all
/// x_i, in reverse-coefficient form of length xs.len() + 1.
pub fn zero_poly(field: &PrimeField, xs: &[u128]) -> Vec<u128> {
    let mut n = xs.len() + 1;
    let mut result = uninit_vector(n);

    n -= 1;
    result[n] = 1;

    for i in 0..xs.len() {
        n -= 1;
        result[n] = 0;
        for j in n..xs.len() {
            result[j] = field.sub(result[j], field.mul(result[j + 1], xs[i]));
        }
    }

    result
}

// POLYNOMIAL INTERPOLATION
// ================================================================================================

/// Uses Lagrange interpolation to build a polynomial from X and Y coordinates; the X
/// coordinates must be distinct.
///
/// The numerator polynomials are synthesized by dividing the vanishing polynomial of the X
/// coordinates by (x - x_i), and all denominators are inverted with a single batch inversion.
///
/// # Errors
/// Returns an error if the numbers of X and Y coordinates differ.
pub fn interpolate(field: &PrimeField, xs: &[u128], ys: &[u128]) -> Result<Vec<u128>, MathError> {
    if xs.len() != ys.len() {
        return Err(MathError::DimensionMismatch(xs.len(), ys.len()));
    }

    let roots = zero_poly(field, xs);
    let mut divisor = [0u128, 1u128];
    let mut numerators: Vec<Vec<u128>> = Vec::with_capacity(xs.len());
    for &xcoord in xs {
        divisor[0] = field.neg(xcoord);
        numerators.push(div(field, &roots, &divisor)?);
    }

    let mut denominators = Vec::with_capacity(xs.len());
    for i in 0..xs.len() {
        denominators.push(eval(field, &numerators[i], xs[i]));
    }
    let denominators = engine::batch_inversion(field, &denominators);

    let mut result = vec![0u128; xs.len()];
    for i in 0..xs.len() {
        if ys[i] != 0 {
            let y_slice = field.mul(ys[i], denominators[i]);
            for (j, res) in result.iter_mut().enumerate() {
                if numerators[i][j] != 0 {
                    *res = field.add(*res, field.mul(numerators[i][j], y_slice));
                }
            }
        }
    }

    Ok(result)
}

/// Interpolates a batch of degree-3 polynomials, one per row of 4 X and 4 Y coordinates.
///
/// For every row, the four cubic numerators are built in expanded form from precomputed pair
/// products of the X coordinates; the denominators of the entire batch are then inverted with
/// a single batch inversion, which is what makes the batch form worthwhile.
///
/// # Errors
/// Returns an error if the numbers of X and Y rows differ.
pub fn interpolate_quartic_batch(
    field: &PrimeField,
    xs: &[[u128; 4]],
    ys: &[[u128; 4]],
) -> Result<Vec<[u128; 4]>, MathError> {
    if xs.len() != ys.len() {
        return Err(MathError::DimensionMismatch(xs.len(), ys.len()));
    }

    let mut equations: Vec<[u128; 4]> = Vec::with_capacity(xs.len() * 4);
    let mut denominators: Vec<u128> = Vec::with_capacity(xs.len() * 4);

    for &[x0, x1, x2, x3] in xs {
        // products of all pairs of x coordinates
        let x01 = field.mul(x0, x1);
        let x02 = field.mul(x0, x2);
        let x03 = field.mul(x0, x3);
        let x12 = field.mul(x1, x2);
        let x13 = field.mul(x1, x3);
        let x23 = field.mul(x2, x3);

        // eq0 = (x - x1) * (x - x2) * (x - x3)
        let eq0 = [
            field.neg(field.mul(x12, x3)),
            field.add(field.add(x12, x13), x23),
            field.neg(field.add(field.add(x1, x2), x3)),
            1,
        ];
        // eq1 = (x - x0) * (x - x2) * (x - x3)
        let eq1 = [
            field.neg(field.mul(x02, x3)),
            field.add(field.add(x02, x03), x23),
            field.neg(field.add(field.add(x0, x2), x3)),
            1,
        ];
        // eq2 = (x - x0) * (x - x1) * (x - x3)
        let eq2 = [
            field.neg(field.mul(x01, x3)),
            field.add(field.add(x01, x03), x13),
            field.neg(field.add(field.add(x0, x1), x3)),
            1,
        ];
        // eq3 = (x - x0) * (x - x1) * (x - x2)
        let eq3 = [
            field.neg(field.mul(x01, x2)),
            field.add(field.add(x01, x02), x12),
            field.neg(field.add(field.add(x0, x1), x2)),
            1,
        ];

        denominators.push(eval(field, &eq0, x0));
        denominators.push(eval(field, &eq1, x1));
        denominators.push(eval(field, &eq2, x2));
        denominators.push(eval(field, &eq3, x3));

        equations.push(eq0);
        equations.push(eq1);
        equations.push(eq2);
        equations.push(eq3);
    }

    let inv_denominators = engine::batch_inversion(field, &denominators);

    let mut result = Vec::with_capacity(xs.len());
    for (i, row_ys) in ys.iter().enumerate() {
        let mut poly = [0u128; 4];
        for k in 0..4 {
            let y_slice = field.mul(row_ys[k], inv_denominators[i * 4 + k]);
            if y_slice != 0 {
                let eq = &equations[i * 4 + k];
                for j in 0..4 {
                    if eq[j] != 0 {
                        poly[j] = field.add(poly[j], field.mul(eq[j], y_slice));
                    }
                }
            }
        }
        result.push(poly);
    }

    Ok(result)
}
