// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

use crate::{errors::MathError, field::PrimeField};

// CONSTANTS
// ================================================================================================

/// The largest 128-bit prime: 2^128 - 159.
const M: u128 = 340282366920938463463374607431768211297;

// ELEMENTWISE OPERATIONS
// ================================================================================================

#[test]
fn elementwise_vector_ops() {
    let f = field();
    let a = f.vector_from_values(vec![1, 2, 3, 4]);
    let b = f.vector_from_values(vec![5, 6, 7, 8]);

    assert_eq!(vec![6, 8, 10, 12], f.add_vector_elements(&a, &b).unwrap().to_values());
    assert_eq!(vec![4, 4, 4, 4], f.sub_vector_elements(&b, &a).unwrap().to_values());
    assert_eq!(vec![5, 12, 21, 32], f.mul_vector_elements(&a, &b).unwrap().to_values());

    let q = f.div_vector_elements(&a, &b).unwrap();
    assert_eq!(a, f.mul_vector_elements(&q, &b).unwrap());

    let e = f.exp_vector_elements(&a, &b).unwrap();
    assert_eq!(
        vec![1, 64, f.exp(3, 7).unwrap(), f.exp(4, 8).unwrap()],
        e.to_values()
    );
}

#[test]
fn elementwise_vector_scalar_ops() {
    let f = field();
    let a = f.vector_from_values(vec![1, 2, 3, 4]);

    assert_eq!(vec![5, 10, 15, 20], f.mul_vector_scalar(&a, 5).to_values());
    assert_eq!(vec![8, 9, 10, 11], f.add_vector_scalar(&a, 7).to_values());
    assert_eq!(vec![M - 1, 0, 1, 2], f.sub_vector_scalar(&a, 2).to_values());
    assert_eq!(vec![1, 4, 9, 16], f.exp_vector_scalar(&a, 2).to_values());

    let q = f.div_vector_scalar(&a, 4);
    assert_eq!(a, f.mul_vector_scalar(&q, 4));
}

#[test]
fn elementwise_dimension_mismatch() {
    let f = field();
    let a = f.vector_from_values(vec![1, 2, 3]);
    let b = f.vector_from_values(vec![1, 2, 3, 4]);

    assert_eq!(Err(MathError::DimensionMismatch(3, 4)), f.add_vector_elements(&a, &b));
    assert_eq!(Err(MathError::DimensionMismatch(3, 4)), f.mul_vector_elements(&a, &b));
}

#[test]
fn elementwise_empty_vectors() {
    let f = field();
    let a = f.new_vector(0);
    let b = f.new_vector(0);
    assert_eq!(0, f.add_vector_elements(&a, &b).unwrap().length());
}

#[test]
fn elementwise_matrix_ops() {
    let f = field();
    let a = f.matrix_from_values(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
    let b = f.matrix_from_values(vec![6, 5, 4, 3, 2, 1], 2, 3).unwrap();

    let sum = f.add_matrix_elements(&a, &b).unwrap();
    assert_eq!(vec![7u128; 6], sum.values().to_vec());
    assert_eq!(2, sum.row_count());
    assert_eq!(3, sum.col_count());

    let diff = f.sub_matrix_elements(&a, &b).unwrap();
    assert_eq!(vec![M - 5, M - 3, M - 1, 1, 3, 5], diff.values().to_vec());

    let prod = f.mul_matrix_elements(&a, &b).unwrap();
    assert_eq!(vec![6, 10, 12, 12, 10, 6], prod.values().to_vec());

    let q = f.div_matrix_elements(&a, &b).unwrap();
    assert_eq!(a, f.mul_matrix_elements(&q, &b).unwrap());

    assert_eq!(vec![2, 4, 6, 8, 10, 12], f.mul_matrix_scalar(&a, 2).values().to_vec());
    assert_eq!(vec![2, 3, 4, 5, 6, 7], f.add_matrix_scalar(&a, 1).values().to_vec());
    assert_eq!(vec![0, 1, 2, 3, 4, 5], f.sub_matrix_scalar(&a, 1).values().to_vec());
    assert_eq!(a, f.mul_matrix_scalar(&f.div_matrix_scalar(&a, 3), 3));

    // shape mismatch
    let c = f.matrix_from_values(vec![1, 2, 3, 4, 5, 6], 3, 2).unwrap();
    assert!(matches!(f.add_matrix_elements(&a, &c), Err(MathError::DimensionMismatch(_, _))));
}

// BATCH INVERSION
// ================================================================================================

#[test]
fn inv_vector_elements() {
    let f = field();

    let v = f.rand_vector(1000);
    let inv = f.inv_vector_elements(&v);
    for (&x, &y) in v.values().iter().zip(inv.values()) {
        assert_eq!(f.inv(x), y);
    }

    // inverting twice is the identity, and zeros pass through
    let v = f.vector_from_values(vec![1, 0, 2, 0, 3, 17, 0, M - 1]);
    let double_inv = f.inv_vector_elements(&f.inv_vector_elements(&v));
    assert_eq!(v, double_inv);

    // an all-zero vector maps to all zeros
    let zeros = f.new_vector(8);
    assert_eq!(zeros, f.inv_vector_elements(&zeros));
}

#[test]
fn inv_matrix_elements() {
    let f = field();
    let m = f.matrix_from_values(vec![1, 2, 0, 4], 2, 2).unwrap();
    let inv = f.inv_matrix_elements(&m);
    assert_eq!(
        vec![1, f.inv(2), 0, f.inv(4)],
        inv.values().to_vec()
    );
}

// POWER SERIES
// ================================================================================================

#[test]
fn get_power_series() {
    let f = field();

    assert_eq!(vec![1, 3, 9, 27, 81], f.get_power_series(3, 5).to_values());
    assert_eq!(vec![1u128], f.get_power_series(3, 1).to_values());
    assert_eq!(0, f.get_power_series(3, 0).length());

    // a series long enough to span multiple lane batches
    let b = f.rand();
    let series = f.get_power_series(b, 3000);
    let mut expected = 1u128;
    for (i, &value) in series.values().iter().enumerate() {
        assert_eq!(expected, value, "failed at power {i}");
        expected = f.mul(expected, b);
    }
}

// MATRIX MULTIPLICATION
// ================================================================================================

#[test]
fn mul_matrixes() {
    let f = field();

    let a = f.matrix_from_values(vec![1, 2, 3, 4], 2, 2).unwrap();
    let b = f.matrix_from_values(vec![5, 6, 7, 8], 2, 2).unwrap();
    let c = f.mul_matrixes(&a, &b).unwrap();
    assert_eq!(vec![19, 22, 43, 50], c.values().to_vec());

    // non-square shapes
    let a = f.matrix_from_values(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
    let b = f.matrix_from_values(vec![7, 8, 9, 10, 11, 12], 3, 2).unwrap();
    let c = f.mul_matrixes(&a, &b).unwrap();
    assert_eq!(2, c.row_count());
    assert_eq!(2, c.col_count());
    assert_eq!(vec![58, 64, 139, 154], c.values().to_vec());

    // inner dimension mismatch
    let bad = f.matrix_from_values(vec![1, 2, 3, 4], 2, 2).unwrap();
    assert_eq!(Err(MathError::DimensionMismatch(3, 2)), f.mul_matrixes(&a, &bad).map(|_| ()));
}

#[test]
fn mul_matrixes_associativity() {
    let f = field();

    let a = rand_matrix(&f, 3, 4);
    let b = rand_matrix(&f, 4, 5);
    let c = rand_matrix(&f, 5, 2);

    let ab_c = f.mul_matrixes(&f.mul_matrixes(&a, &b).unwrap(), &c).unwrap();
    let a_bc = f.mul_matrixes(&a, &f.mul_matrixes(&b, &c).unwrap()).unwrap();
    assert_eq!(ab_c, a_bc);
}

#[test]
fn mul_matrix_by_vector() {
    let f = field();

    let a = f.matrix_from_values(vec![1, 2, 3, 4, 5, 6], 2, 3).unwrap();
    let v = f.vector_from_values(vec![1, 10, 100]);
    let result = f.mul_matrix_by_vector(&a, &v).unwrap();
    assert_eq!(vec![321, 654], result.to_values());

    let short = f.vector_from_values(vec![1, 10]);
    assert_eq!(Err(MathError::DimensionMismatch(3, 2)), f.mul_matrix_by_vector(&a, &short));
}

// LINEAR COMBINATION
// ================================================================================================

#[test]
fn combine_vectors() {
    let f = field();

    let a = f.vector_from_values(vec![1, 2, 3]);
    let b = f.vector_from_values(vec![4, 5, 6]);
    assert_eq!(32, f.combine_vectors(&a, &b).unwrap());

    let c = f.vector_from_values(vec![4, 5]);
    assert_eq!(Err(MathError::DimensionMismatch(3, 2)), f.combine_vectors(&a, &c));

    // zero-length combination is zero
    let empty = f.new_vector(0);
    assert_eq!(0, f.combine_vectors(&empty, &empty).unwrap());
}

// ENGINE EQUIVALENCE
// ================================================================================================

#[cfg(feature = "concurrent")]
#[test]
fn engines_produce_identical_results() {
    use crate::field::FieldOptions;

    let serial = field();
    let accelerated = PrimeField::with_options(M, FieldOptions { use_accelerated: true });
    assert!(accelerated.is_accelerated());

    let a = serial.rand_vector(2500);
    let b = serial.rand_vector(2500);
    let s = serial.rand();

    assert_eq!(
        serial.add_vector_elements(&a, &b).unwrap(),
        accelerated.add_vector_elements(&a, &b).unwrap()
    );
    assert_eq!(serial.mul_vector_scalar(&a, s), accelerated.mul_vector_scalar(&a, s));
    assert_eq!(serial.inv_vector_elements(&a), accelerated.inv_vector_elements(&a));
    assert_eq!(serial.get_power_series(s, 2500), accelerated.get_power_series(s, 2500));
    assert_eq!(
        serial.combine_vectors(&a, &b).unwrap(),
        accelerated.combine_vectors(&a, &b).unwrap()
    );

    let m1 = rand_matrix(&serial, 17, 33);
    let m2 = rand_matrix(&serial, 33, 9);
    assert_eq!(
        serial.mul_matrixes(&m1, &m2).unwrap(),
        accelerated.mul_matrixes(&m1, &m2).unwrap()
    );
}

// HELPER FUNCTIONS
// ================================================================================================

fn field() -> PrimeField {
    PrimeField::new(M)
}

fn rand_matrix(f: &PrimeField, rows: usize, cols: usize) -> crate::arrays::FieldMatrix {
    f.matrix_from_values(f.rand_vector(rows * cols).to_values(), rows, cols).unwrap()
}
