// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! An implementation of prime fields GF(p) with a modulus selected at runtime.
//!
//! Unlike fields with a compile-time modulus, elements of a runtime field are plain `u128`
//! values in their canonical form (fully reduced into the range [0, p)), and all arithmetic goes
//! through a [PrimeField] instance. The instance is an immutable configuration object: it is
//! created once and can then be shared freely across threads.

use rand::Rng;
use sha2::{Digest, Sha256};

use crate::{
    arrays::{FieldMatrix, FieldVector},
    engine::{self, Backend, Operand},
    errors::MathError,
    fft, polynom,
    utils::group_slice_elements,
};

pub(crate) mod arith;
use arith::{add128, inv128, mul_128x128, reduce_256, sub128};


// FIELD OPTIONS
// ================================================================================================

/// Configuration accepted by [crate::create_prime_field].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldOptions {
    /// When true, bulk operations run on the lane-parallel engine, provided one is available in
    /// this build; otherwise the in-core engine is used. Both engines produce identical results.
    pub use_accelerated: bool,
}

// PRIME FIELD
// ================================================================================================

/// A prime field GF(p) for a modulus p of up to 128 bits.
///
/// The modulus is expected to be an odd prime; primality itself is the caller's contract and is
/// not verified. All operations produce canonical values in [0, p) and never mutate their
/// operands; operations returning vectors or matrices allocate fresh storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrimeField {
    modulus: u128,
    element_bits: u32,
    element_bytes: usize,
    backend: Backend,
}

impl PrimeField {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a new prime field with the specified modulus, backed by the in-core engine.
    ///
    /// # Panics
    /// Panics if the modulus is even or smaller than 3.
    pub fn new(modulus: u128) -> Self {
        Self::with_options(modulus, FieldOptions::default())
    }

    /// Returns a new prime field with the specified modulus and options.
    ///
    /// The engine choice is fixed here and does not change for the lifetime of the field; when
    /// acceleration is requested but no accelerated engine is available in this build, the
    /// in-core engine is used.
    ///
    /// # Panics
    /// Panics if the modulus is even or smaller than 3.
    pub fn with_options(modulus: u128, options: FieldOptions) -> Self {
        assert!(modulus >= 3 && modulus & 1 == 1, "modulus must be an odd prime");
        let element_bits = 128 - modulus.leading_zeros();
        let backend = if options.use_accelerated {
            engine::accelerated_backend().unwrap_or(Backend::Serial)
        } else {
            Backend::Serial
        };
        PrimeField {
            modulus,
            element_bits,
            element_bytes: element_bits.div_ceil(8) as usize,
            backend,
        }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the modulus of this field.
    pub fn modulus(&self) -> u128 {
        self.modulus
    }

    /// Returns the characteristic of this field; same as the modulus.
    pub fn characteristic(&self) -> u128 {
        self.modulus
    }

    /// Returns the extension degree of this field; always 1.
    pub fn extension_degree(&self) -> u32 {
        1
    }

    /// Returns the number of bits needed to represent the modulus.
    pub fn element_bits(&self) -> u32 {
        self.element_bits
    }

    /// Returns the number of bytes needed to encode a field element.
    pub fn element_bytes(&self) -> usize {
        self.element_bytes
    }

    /// Returns the additive identity.
    pub fn zero(&self) -> u128 {
        0
    }

    /// Returns the multiplicative identity.
    pub fn one(&self) -> u128 {
        1
    }

    /// Returns true if the value is a canonical element of this field.
    pub fn is_element(&self, value: u128) -> bool {
        value < self.modulus
    }

    /// Returns true if bulk operations of this field run on the lane-parallel engine.
    pub fn is_accelerated(&self) -> bool {
        self.backend != Backend::Serial
    }

    pub(crate) fn backend(&self) -> Backend {
        self.backend
    }

    // ALGEBRA
    // --------------------------------------------------------------------------------------------

    /// Computes (x + y) % p; x and y are assumed to be valid field elements.
    #[inline]
    pub fn add(&self, x: u128, y: u128) -> u128 {
        let (sum, carry) = add128(x, y);
        // for canonical operands the true sum is below 2p, so a single conditional subtraction
        // brings it back into range; on carry the wrapping subtraction supplies the missing 2^128
        if carry == 1 || sum >= self.modulus {
            sum.wrapping_sub(self.modulus)
        } else {
            sum
        }
    }

    /// Computes (x - y) % p; x and y are assumed to be valid field elements.
    #[inline]
    pub fn sub(&self, x: u128, y: u128) -> u128 {
        let (diff, borrow) = sub128(x, y);
        if borrow == 1 {
            diff.wrapping_add(self.modulus)
        } else {
            diff
        }
    }

    /// Computes (x * y) % p via a full 256-bit intermediate product; the result is canonical for
    /// arbitrary 128-bit operands.
    #[inline]
    pub fn mul(&self, x: u128, y: u128) -> u128 {
        reduce_256(mul_128x128(x, y), self.modulus)
    }

    /// Computes x * inv(y) % p; division by zero yields zero by the inv(0) = 0 convention.
    #[inline]
    pub fn div(&self, x: u128, y: u128) -> u128 {
        self.mul(x, inv128(y, self.modulus))
    }

    /// Computes y such that (x * y) % p = 1 except for when x = 0; in such a case, 0 is returned.
    #[inline]
    pub fn inv(&self, x: u128) -> u128 {
        inv128(x, self.modulus)
    }

    /// Computes (p - x) % p; x is assumed to be a valid field element.
    #[inline]
    pub fn neg(&self, x: u128) -> u128 {
        self.sub(0, x)
    }

    /// Computes b^e % p using square-and-multiply.
    ///
    /// # Errors
    /// Returns an error if both b and e are zero.
    pub fn exp(&self, b: u128, e: u128) -> Result<u128, MathError> {
        if b == 0 && e == 0 {
            return Err(MathError::InvalidArgument(
                "zero cannot be raised to the power of zero".to_string(),
            ));
        }
        Ok(self.pow(b, e))
    }

    /// Computes b^e % p for a signed exponent: a negative e raises the inverse of b to -e.
    ///
    /// # Errors
    /// Returns an error if both b and e are zero.
    pub fn exp_signed(&self, b: u128, e: i128) -> Result<u128, MathError> {
        if e < 0 {
            self.exp(self.inv(b), e.unsigned_abs())
        } else {
            self.exp(b, e as u128)
        }
    }

    /// Exponentiation without the zero-to-the-zero check; 0^0 yields 1 here.
    pub(crate) fn pow(&self, b: u128, e: u128) -> u128 {
        if e == 0 {
            return 1;
        } else if b == 0 {
            return 0;
        }

        let mut r = 1u128;
        let mut b = b;
        let mut e = e;
        while e > 0 {
            if e & 1 == 1 {
                r = self.mul(r, b);
            }
            e >>= 1;
            b = self.mul(b, b);
        }

        r
    }

    // RANDOMNESS
    // --------------------------------------------------------------------------------------------

    /// Returns a random field element drawn from a cryptographically secure source.
    pub fn rand(&self) -> u128 {
        let mut bytes = [0u8; 16];
        rand::thread_rng().fill(&mut bytes[..self.element_bytes]);
        u128::from_le_bytes(bytes) % self.modulus
    }

    /// Returns a vector of n random field elements.
    pub fn rand_vector(&self, n: usize) -> FieldVector {
        let values = (0..n).map(|_| self.rand()).collect();
        self.vector_from_values(values)
    }

    /// Returns a pseudo-random field element computed as sha256(seed) reduced modulo p.
    pub fn prng(&self, seed: &[u8]) -> u128 {
        let digest = Sha256::digest(seed);
        self.digest_to_element(&digest)
    }

    /// Returns a vector of n pseudo-random field elements derived from the specified seed by
    /// repeated hashing: the i-th element is sha256^(i+1)(seed) reduced modulo p.
    pub fn prng_vector(&self, seed: &[u8], n: usize) -> FieldVector {
        let mut values = Vec::with_capacity(n);
        let mut digest = Sha256::digest(seed);
        for _ in 0..n {
            values.push(self.digest_to_element(&digest));
            digest = Sha256::digest(digest);
        }
        self.vector_from_values(values)
    }

    /// Interprets a 32-byte digest as a little-endian 256-bit integer and reduces it modulo p.
    fn digest_to_element(&self, digest: &[u8]) -> u128 {
        debug_assert_eq!(digest.len(), 32);
        let mut limbs = [0u64; 4];
        for (limb, chunk) in limbs.iter_mut().zip(digest.chunks(8)) {
            let mut buf = [0u8; 8];
            buf.copy_from_slice(chunk);
            *limb = u64::from_le_bytes(buf);
        }
        reduce_256(limbs, self.modulus)
    }

    // ROOTS OF UNITY
    // --------------------------------------------------------------------------------------------

    /// Returns a root of unity of the specified order: a value g such that g^order = 1 and
    /// g^(order / 2) != 1.
    ///
    /// The search walks candidates 2, 3, ... and returns the first one whose
    /// (p - 1) / order power satisfies both conditions. Order 1 always yields 1.
    ///
    /// # Errors
    /// Returns an error if the order is not a power of two, or if the field has no
    /// multiplicative subgroup of the specified size.
    pub fn get_root_of_unity(&self, order: usize) -> Result<u128, MathError> {
        if order == 0 || !order.is_power_of_two() {
            return Err(MathError::InvalidArgument(format!(
                "order must be a power of two, but was {order}"
            )));
        }
        if order == 1 {
            return Ok(1);
        }

        let order = order as u128;
        if (self.modulus - 1) % order != 0 {
            return Err(MathError::NotFound(format!(
                "field has no multiplicative subgroup of size {order}"
            )));
        }

        let exponent = (self.modulus - 1) / order;
        let mut candidate = 2u128;
        while candidate < self.modulus {
            let g = self.pow(candidate, exponent);
            if self.pow(g, order) == 1 && self.pow(g, order / 2) != 1 {
                return Ok(g);
            }
            candidate += 1;
        }

        Err(MathError::NotFound(format!(
            "no root of unity of order {order} exists in this field"
        )))
    }

    /// Returns the full power cycle of a root of unity: [1, g, g^2, ...] up to, but not
    /// including, the power at which the cycle returns to 1.
    ///
    /// # Errors
    /// Returns an error if the root is zero.
    pub fn get_power_cycle(&self, root: u128) -> Result<FieldVector, MathError> {
        if root == 0 {
            return Err(MathError::InvalidArgument(
                "root of unity cannot be zero".to_string(),
            ));
        }

        let mut values = vec![1u128];
        let mut value = root;
        while value != 1 {
            values.push(value);
            value = self.mul(value, root);
        }
        Ok(self.vector_from_values(values))
    }

    // ELEMENT ENCODING
    // --------------------------------------------------------------------------------------------

    /// Serializes a field element into its little-endian byte representation of
    /// [element_bytes](Self::element_bytes) bytes; the value is assumed to be a valid element.
    pub fn element_to_bytes(&self, value: u128) -> Vec<u8> {
        value.to_le_bytes()[..self.element_bytes].to_vec()
    }

    /// Deserializes a field element from its little-endian byte representation.
    ///
    /// # Errors
    /// Returns an error if the slice is not exactly [element_bytes](Self::element_bytes) long.
    pub fn element_from_bytes(&self, bytes: &[u8]) -> Result<u128, MathError> {
        if bytes.len() != self.element_bytes {
            return Err(MathError::OutOfRange(format!(
                "expected {} bytes per element, but was {}",
                self.element_bytes,
                bytes.len()
            )));
        }
        let mut buf = [0u8; 16];
        buf[..bytes.len()].copy_from_slice(bytes);
        Ok(u128::from_le_bytes(buf))
    }

    // VECTOR CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    /// Returns a new zero-filled vector of the specified length.
    pub fn new_vector(&self, length: usize) -> FieldVector {
        FieldVector::new(length, self.element_bytes)
    }

    /// Returns a new vector wrapping the provided values; the values are not reduced.
    pub fn vector_from_values(&self, values: Vec<u128>) -> FieldVector {
        FieldVector::from_values(values, self.element_bytes)
    }

    /// Returns a new zero-filled matrix of the specified shape.
    pub fn new_matrix(&self, row_count: usize, col_count: usize) -> FieldMatrix {
        FieldMatrix::new(row_count, col_count, self.element_bytes)
    }

    /// Returns a new matrix wrapping the provided row-major values; the values are not reduced.
    ///
    /// # Errors
    /// Returns an error if the number of values does not match the shape.
    pub fn matrix_from_values(
        &self,
        values: Vec<u128>,
        row_count: usize,
        col_count: usize,
    ) -> Result<FieldMatrix, MathError> {
        if values.len() != row_count * col_count {
            return Err(MathError::DimensionMismatch(values.len(), row_count * col_count));
        }
        Ok(FieldMatrix::from_values(values, row_count, col_count, self.element_bytes))
    }

    // ELEMENTWISE VECTOR OPERATIONS
    // --------------------------------------------------------------------------------------------

    /// Computes a[i] + b[i] for all i.
    pub fn add_vector_elements(
        &self,
        a: &FieldVector,
        b: &FieldVector,
    ) -> Result<FieldVector, MathError> {
        self.vector_vv_op(a, b, |x, y| self.add(x, y))
    }

    /// Computes a[i] + b for all i.
    pub fn add_vector_scalar(&self, a: &FieldVector, b: u128) -> FieldVector {
        self.vector_vs_op(a, b, |x, y| self.add(x, y))
    }

    /// Computes a[i] - b[i] for all i.
    pub fn sub_vector_elements(
        &self,
        a: &FieldVector,
        b: &FieldVector,
    ) -> Result<FieldVector, MathError> {
        self.vector_vv_op(a, b, |x, y| self.sub(x, y))
    }

    /// Computes a[i] - b for all i.
    pub fn sub_vector_scalar(&self, a: &FieldVector, b: u128) -> FieldVector {
        self.vector_vs_op(a, b, |x, y| self.sub(x, y))
    }

    /// Computes a[i] * b[i] for all i.
    pub fn mul_vector_elements(
        &self,
        a: &FieldVector,
        b: &FieldVector,
    ) -> Result<FieldVector, MathError> {
        self.vector_vv_op(a, b, |x, y| self.mul(x, y))
    }

    /// Computes a[i] * b for all i.
    pub fn mul_vector_scalar(&self, a: &FieldVector, b: u128) -> FieldVector {
        self.vector_vs_op(a, b, |x, y| self.mul(x, y))
    }

    /// Computes a[i] / b[i] for all i, with division by zero yielding zero.
    pub fn div_vector_elements(
        &self,
        a: &FieldVector,
        b: &FieldVector,
    ) -> Result<FieldVector, MathError> {
        self.vector_vv_op(a, b, |x, y| self.div(x, y))
    }

    /// Computes a[i] / b for all i.
    pub fn div_vector_scalar(&self, a: &FieldVector, b: u128) -> FieldVector {
        // invert the scalar once and multiply across the lanes
        self.vector_vs_op(a, self.inv(b), |x, y| self.mul(x, y))
    }

    /// Computes a[i]^b[i] for all i; a zero base raised to the power of zero yields one.
    pub fn exp_vector_elements(
        &self,
        a: &FieldVector,
        b: &FieldVector,
    ) -> Result<FieldVector, MathError> {
        self.vector_vv_op(a, b, |x, y| self.pow(x, y))
    }

    /// Computes a[i]^b for all i.
    pub fn exp_vector_scalar(&self, a: &FieldVector, b: u128) -> FieldVector {
        self.vector_vs_op(a, b, |x, y| self.pow(x, y))
    }

    /// Computes the multiplicative inverse of every element using batch inversion; zero elements
    /// are mapped to zeros. The whole vector costs a single scalar inversion plus O(n) multiplies.
    pub fn inv_vector_elements(&self, v: &FieldVector) -> FieldVector {
        self.vector_from_values(engine::batch_inversion(self, v.values()))
    }

    /// Computes the linear combination of two vectors: the sum of a[i] * b[i] over all i.
    ///
    /// # Errors
    /// Returns an error if the vectors have different lengths.
    pub fn combine_vectors(&self, a: &FieldVector, b: &FieldVector) -> Result<u128, MathError> {
        if a.length() != b.length() {
            return Err(MathError::DimensionMismatch(a.length(), b.length()));
        }
        Ok(engine::combine_vectors(self, a.values(), b.values()))
    }

    /// Returns a vector with values [1, seed, seed^2, ..., seed^(length - 1)].
    pub fn get_power_series(&self, seed: u128, length: usize) -> FieldVector {
        self.vector_from_values(engine::get_power_series(self, seed, length))
    }

    // ELEMENTWISE MATRIX OPERATIONS
    // --------------------------------------------------------------------------------------------

    /// Computes a[i,j] + b[i,j] for all cells.
    pub fn add_matrix_elements(
        &self,
        a: &FieldMatrix,
        b: &FieldMatrix,
    ) -> Result<FieldMatrix, MathError> {
        self.matrix_vv_op(a, b, |x, y| self.add(x, y))
    }

    /// Computes a[i,j] + b for all cells.
    pub fn add_matrix_scalar(&self, a: &FieldMatrix, b: u128) -> FieldMatrix {
        self.matrix_vs_op(a, b, |x, y| self.add(x, y))
    }

    /// Computes a[i,j] - b[i,j] for all cells.
    pub fn sub_matrix_elements(
        &self,
        a: &FieldMatrix,
        b: &FieldMatrix,
    ) -> Result<FieldMatrix, MathError> {
        self.matrix_vv_op(a, b, |x, y| self.sub(x, y))
    }

    /// Computes a[i,j] - b for all cells.
    pub fn sub_matrix_scalar(&self, a: &FieldMatrix, b: u128) -> FieldMatrix {
        self.matrix_vs_op(a, b, |x, y| self.sub(x, y))
    }

    /// Computes a[i,j] * b[i,j] for all cells.
    pub fn mul_matrix_elements(
        &self,
        a: &FieldMatrix,
        b: &FieldMatrix,
    ) -> Result<FieldMatrix, MathError> {
        self.matrix_vv_op(a, b, |x, y| self.mul(x, y))
    }

    /// Computes a[i,j] * b for all cells.
    pub fn mul_matrix_scalar(&self, a: &FieldMatrix, b: u128) -> FieldMatrix {
        self.matrix_vs_op(a, b, |x, y| self.mul(x, y))
    }

    /// Computes a[i,j] / b[i,j] for all cells, with division by zero yielding zero.
    pub fn div_matrix_elements(
        &self,
        a: &FieldMatrix,
        b: &FieldMatrix,
    ) -> Result<FieldMatrix, MathError> {
        self.matrix_vv_op(a, b, |x, y| self.div(x, y))
    }

    /// Computes a[i,j] / b for all cells.
    pub fn div_matrix_scalar(&self, a: &FieldMatrix, b: u128) -> FieldMatrix {
        self.matrix_vs_op(a, self.inv(b), |x, y| self.mul(x, y))
    }

    /// Computes the multiplicative inverse of every cell using batch inversion; zero cells are
    /// mapped to zeros.
    pub fn inv_matrix_elements(&self, m: &FieldMatrix) -> FieldMatrix {
        FieldMatrix::from_values(
            engine::batch_inversion(self, m.values()),
            m.row_count(),
            m.col_count(),
            self.element_bytes,
        )
    }

    // MATRIX MULTIPLICATION
    // --------------------------------------------------------------------------------------------

    /// Computes the matrix product of an n x m matrix a and an m x p matrix b.
    ///
    /// # Errors
    /// Returns an error if the column count of a does not match the row count of b.
    pub fn mul_matrixes(
        &self,
        a: &FieldMatrix,
        b: &FieldMatrix,
    ) -> Result<FieldMatrix, MathError> {
        if a.col_count() != b.row_count() {
            return Err(MathError::DimensionMismatch(a.col_count(), b.row_count()));
        }
        let values = engine::mul_matrixes(
            self,
            a.values(),
            b.values(),
            a.row_count(),
            a.col_count(),
            b.col_count(),
        );
        Ok(FieldMatrix::from_values(values, a.row_count(), b.col_count(), self.element_bytes))
    }

    /// Computes the product of an n x m matrix and a length-m vector.
    ///
    /// # Errors
    /// Returns an error if the column count of the matrix does not match the vector length.
    pub fn mul_matrix_by_vector(
        &self,
        a: &FieldMatrix,
        v: &FieldVector,
    ) -> Result<FieldVector, MathError> {
        if a.col_count() != v.length() {
            return Err(MathError::DimensionMismatch(a.col_count(), v.length()));
        }
        let values =
            engine::mul_matrixes(self, a.values(), v.values(), a.row_count(), a.col_count(), 1);
        Ok(self.vector_from_values(values))
    }

    // POLYNOMIAL OPERATIONS
    // --------------------------------------------------------------------------------------------

    /// Evaluates the polynomial at the specified coordinate.
    pub fn eval_poly_at(&self, p: &FieldVector, x: u128) -> u128 {
        polynom::eval(self, p.values(), x)
    }

    /// Adds polynomial a to polynomial b.
    pub fn add_polys(&self, a: &FieldVector, b: &FieldVector) -> FieldVector {
        self.vector_from_values(polynom::add(self, a.values(), b.values()))
    }

    /// Subtracts polynomial b from polynomial a.
    pub fn sub_polys(&self, a: &FieldVector, b: &FieldVector) -> FieldVector {
        self.vector_from_values(polynom::sub(self, a.values(), b.values()))
    }

    /// Multiplies polynomial a by polynomial b.
    pub fn mul_polys(&self, a: &FieldVector, b: &FieldVector) -> FieldVector {
        self.vector_from_values(polynom::mul(self, a.values(), b.values()))
    }

    /// Multiplies every coefficient of the polynomial by the constant.
    pub fn mul_poly_by_constant(&self, p: &FieldVector, k: u128) -> FieldVector {
        self.vector_from_values(polynom::mul_by_scalar(self, p.values(), k))
    }

    /// Divides polynomial a by polynomial b; if the polynomials don't divide evenly, the
    /// remainder is ignored.
    ///
    /// # Errors
    /// Returns an error if the dividend is shorter or of lower degree than the divisor, or if
    /// the divisor is the zero polynomial.
    pub fn div_polys(&self, a: &FieldVector, b: &FieldVector) -> Result<FieldVector, MathError> {
        polynom::div(self, a.values(), b.values()).map(|v| self.vector_from_values(v))
    }

    /// Evaluates the polynomial over the domain formed by the power cycle of a root of unity.
    ///
    /// # Errors
    /// Returns an error if the domain length is not a power of two, or if the polynomial is
    /// longer than the domain.
    pub fn eval_poly_at_roots(
        &self,
        p: &FieldVector,
        roots: &FieldVector,
    ) -> Result<FieldVector, MathError> {
        fft::evaluate_poly(self, p.values(), roots.values()).map(|v| self.vector_from_values(v))
    }

    /// Interpolates a polynomial from its evaluations over the domain formed by the power cycle
    /// of a root of unity.
    ///
    /// # Errors
    /// Returns an error if the domain length is not a power of two, or if the number of
    /// evaluations does not match the domain length.
    pub fn interpolate_roots(
        &self,
        roots: &FieldVector,
        ys: &FieldVector,
    ) -> Result<FieldVector, MathError> {
        fft::interpolate_poly(self, roots.values(), ys.values())
            .map(|v| self.vector_from_values(v))
    }

    /// Uses Lagrange interpolation to build a polynomial from X and Y coordinates.
    ///
    /// # Errors
    /// Returns an error if the numbers of X and Y coordinates differ.
    pub fn interpolate(
        &self,
        xs: &FieldVector,
        ys: &FieldVector,
    ) -> Result<FieldVector, MathError> {
        polynom::interpolate(self, xs.values(), ys.values()).map(|v| self.vector_from_values(v))
    }

    /// Interpolates a batch of degree-3 polynomials, one per row of 4 X and 4 Y coordinates;
    /// all inversions of the batch are funneled through a single batch inversion.
    ///
    /// # Errors
    /// Returns an error if either matrix does not have exactly 4 columns, or if the two
    /// matrices have different row counts.
    pub fn interpolate_quartic_batch(
        &self,
        x_sets: &FieldMatrix,
        y_sets: &FieldMatrix,
    ) -> Result<FieldMatrix, MathError> {
        if x_sets.col_count() != 4 {
            return Err(MathError::DimensionMismatch(x_sets.col_count(), 4));
        }
        if y_sets.col_count() != 4 {
            return Err(MathError::DimensionMismatch(y_sets.col_count(), 4));
        }
        let xs = group_slice_elements(x_sets.values());
        let ys = group_slice_elements(y_sets.values());
        let rows = polynom::interpolate_quartic_batch(self, xs, ys)?;
        let values = rows.into_iter().flatten().collect();
        Ok(FieldMatrix::from_values(values, x_sets.row_count(), 4, self.element_bytes))
    }

    // HELPER FUNCTIONS
    // --------------------------------------------------------------------------------------------

    fn vector_vv_op<F>(
        &self,
        a: &FieldVector,
        b: &FieldVector,
        f: F,
    ) -> Result<FieldVector, MathError>
    where
        F: Fn(u128, u128) -> u128 + Send + Sync,
    {
        if a.length() != b.length() {
            return Err(MathError::DimensionMismatch(a.length(), b.length()));
        }
        let values = engine::bin_op(self, a.values(), Operand::Slice(b.values()), f);
        Ok(self.vector_from_values(values))
    }

    fn vector_vs_op<F>(&self, a: &FieldVector, b: u128, f: F) -> FieldVector
    where
        F: Fn(u128, u128) -> u128 + Send + Sync,
    {
        let values = engine::bin_op(self, a.values(), Operand::Scalar(b), f);
        self.vector_from_values(values)
    }

    fn matrix_vv_op<F>(
        &self,
        a: &FieldMatrix,
        b: &FieldMatrix,
        f: F,
    ) -> Result<FieldMatrix, MathError>
    where
        F: Fn(u128, u128) -> u128 + Send + Sync,
    {
        if a.row_count() != b.row_count() || a.col_count() != b.col_count() {
            return Err(MathError::DimensionMismatch(a.element_count(), b.element_count()));
        }
        let values = engine::bin_op(self, a.values(), Operand::Slice(b.values()), f);
        Ok(FieldMatrix::from_values(values, a.row_count(), a.col_count(), self.element_bytes))
    }

    fn matrix_vs_op<F>(&self, a: &FieldMatrix, b: u128, f: F) -> FieldMatrix
    where
        F: Fn(u128, u128) -> u128 + Send + Sync,
    {
        let values = engine::bin_op(self, a.values(), Operand::Scalar(b), f);
        FieldMatrix::from_values(values, a.row_count(), a.col_count(), self.element_bytes)
    }
}
