// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Finite field arithmetic over prime fields GF(p) with moduli of up to 128 bits.
//!
//! This crate supplies the algebraic primitives consumed by verifiable-computation and proof
//! systems: scalar field arithmetic with a runtime-selected prime modulus, elementwise vector
//! and matrix operations, Montgomery batch inversion, power series generation, dense matrix
//! multiplication, FFT-based polynomial evaluation and interpolation over root-of-unity
//! domains, Lagrange interpolation, and batched degree-3 interpolation.
//!
//! A field is created once and shared read-only across all operations:
//!
//! ```
//! use galois128::{create_prime_field, FieldOptions};
//!
//! // the largest 128-bit prime: 2^128 - 159
//! let field = create_prime_field(340282366920938463463374607431768211297, FieldOptions::default());
//!
//! let x = field.rand();
//! assert_eq!(field.one(), field.mul(x, field.inv(x)));
//! ```
//!
//! When the `concurrent` feature is enabled and acceleration is requested via [FieldOptions],
//! bulk operations run on a lane-parallel engine; results are identical to the in-core engine
//! in all cases.

pub mod fft;
pub mod polynom;
pub mod utils;

mod arrays;
pub use arrays::{FieldMatrix, FieldVector};

mod engine;

mod errors;
pub use errors::MathError;

mod field;
pub use field::{FieldOptions, PrimeField};

// FIELD CONSTRUCTION
// ================================================================================================

/// Creates a prime field with the specified modulus.
///
/// The modulus must be an odd prime; primality is the caller's contract. The element size in
/// bytes is computed from the bit width of the modulus.
///
/// # Panics
/// Panics if the modulus is even or smaller than 3.
pub fn create_prime_field(modulus: u128, options: FieldOptions) -> PrimeField {
    PrimeField::with_options(modulus, options)
}
