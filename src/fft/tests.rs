// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use super::{evaluate_poly, interpolate_poly};
use crate::{errors::MathError, field::PrimeField, polynom};

// CONSTANTS
// ================================================================================================

/// The largest 128-bit prime: 2^128 - 159; its 2-adicity is 5, so domains of up to 32 points
/// exist in this field.
const M: u128 = 340282366920938463463374607431768211297;

/// A 128-bit prime with 2-adicity 40: 2^128 - 45 * 2^40 + 1.
const M40: u128 = 340282366920938463463374557953744961537;

// POLYNOMIAL EVALUATION
// ================================================================================================

#[test]
fn evaluate_poly_matches_direct_evaluation() {
    let f = PrimeField::new(M40);

    for n in [4usize, 8, 16, 256] {
        let p: Vec<u128> = (0..n).map(|_| f.rand()).collect();
        let domain = build_domain(&f, n);
        let expected = polynom::eval_many(&f, &p, &domain);
        let actual = evaluate_poly(&f, &p, &domain).unwrap();
        assert_eq!(expected, actual, "failed for domain of size {n}");
    }
}

#[test]
fn evaluate_poly_zero_pads_short_polynomials() {
    let f = PrimeField::new(M40);

    let p: Vec<u128> = (0..3).map(|_| f.rand()).collect();
    let domain = build_domain(&f, 8);
    let expected = polynom::eval_many(&f, &p, &domain);
    assert_eq!(expected, evaluate_poly(&f, &p, &domain).unwrap());
}

#[test]
fn evaluate_poly_on_trivial_domain() {
    let f = PrimeField::new(M);

    // a length-1 polynomial over a length-1 domain is returned unchanged
    let domain = [1u128];
    assert_eq!(vec![7], evaluate_poly(&f, &[7], &domain).unwrap());
    assert_eq!(vec![7], interpolate_poly(&f, &domain, &[7]).unwrap());

    // an empty polynomial zero-pads to the domain length
    assert_eq!(vec![0], evaluate_poly(&f, &[], &domain).unwrap());
}

#[test]
fn evaluate_poly_domain_errors() {
    let f = PrimeField::new(M);

    // domain length must be a power of two
    let g = f.get_root_of_unity(4).unwrap();
    let bad_domain = [1, g, f.mul(g, g)];
    assert!(matches!(
        evaluate_poly(&f, &[1, 2], &bad_domain),
        Err(MathError::InvalidDomain(_))
    ));

    // the polynomial cannot be longer than the domain
    let domain = build_domain(&f, 4);
    assert!(matches!(
        evaluate_poly(&f, &[1, 2, 3, 4, 5], &domain),
        Err(MathError::InvalidDomain(_))
    ));
}

// POLYNOMIAL INTERPOLATION
// ================================================================================================

#[test]
fn interpolate_poly_inverts_evaluation() {
    let f = PrimeField::new(M40);

    for n in [4usize, 8, 64, 1024] {
        let p: Vec<u128> = (0..n).map(|_| f.rand()).collect();
        let domain = build_domain(&f, n);
        let evaluations = evaluate_poly(&f, &p, &domain).unwrap();
        let interpolated = interpolate_poly(&f, &domain, &evaluations).unwrap();
        assert_eq!(p, interpolated, "failed for domain of size {n}");
    }
}

#[test]
fn interpolate_poly_pads_to_domain_length() {
    let f = PrimeField::new(M40);

    // interpolating evaluations of a short polynomial returns the polynomial zero-padded
    // to the domain length
    let p = [3u128, 5, 7];
    let domain = build_domain(&f, 8);
    let evaluations = evaluate_poly(&f, &p, &domain).unwrap();
    let interpolated = interpolate_poly(&f, &domain, &evaluations).unwrap();
    assert_eq!(vec![3, 5, 7, 0, 0, 0, 0, 0], interpolated);
}

#[test]
fn interpolate_poly_small_field_roundtrip() {
    // the roundtrip over the 4th roots of unity in GF(2^128 - 159)
    let f = PrimeField::new(M);
    let g = f.get_root_of_unity(4).unwrap();
    let domain = f.get_power_cycle(g).unwrap();

    let p = f.vector_from_values(vec![1, 2, 3, 4]);
    let evaluations = f.eval_poly_at_roots(&p, &domain).unwrap();
    let interpolated = f.interpolate_roots(&domain, &evaluations).unwrap();
    assert_eq!(p, interpolated);
}

#[test]
fn interpolate_poly_domain_errors() {
    let f = PrimeField::new(M);
    let domain = build_domain(&f, 4);

    // evaluations must match the domain length
    assert_eq!(
        Err(MathError::DimensionMismatch(4, 3)),
        interpolate_poly(&f, &domain, &[1, 2, 3])
    );

    // domain length must be a power of two
    assert!(matches!(
        interpolate_poly(&f, &domain[..3], &[1, 2, 3]),
        Err(MathError::InvalidDomain(_))
    ));
}

// HELPER FUNCTIONS
// ================================================================================================

fn build_domain(f: &PrimeField, size: usize) -> Vec<u128> {
    let g = f.get_root_of_unity(size).unwrap();
    f.get_power_cycle(g).unwrap().to_values()
}
