// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Utility functions shared by the field, vector, and polynomial layers.

use core::slice;


// VECTOR FUNCTIONS
// ================================================================================================

/// Allocates a vector of the given length without writing to its contents.
///
/// Intended for buffers where every slot is about to be overwritten anyway; skipping the
/// zero-fill saves a full pass over the memory. Reading a slot before it has been written is
/// undefined behavior.
pub fn uninit_vector<T>(length: usize) -> Vec<T> {
    let mut result = Vec::with_capacity(length);
    unsafe { result.set_len(length) };
    result
}

/// Reinterprets a flat slice as a slice of fixed-size arrays, N consecutive elements at a time.
///
/// # Panics
/// Panics if the slice length is not a multiple of N.
pub fn group_slice_elements<T, const N: usize>(source: &[T]) -> &[[T; N]] {
    assert!(source.len() % N == 0, "slice of {} elements cannot be grouped by {}", source.len(), N);
    let groups = source.len() / N;
    unsafe { slice::from_raw_parts(source.as_ptr().cast::<[T; N]>(), groups) }
}

// MATH FUNCTIONS
// ================================================================================================

/// Returns base 2 logarithm of `n`, where `n` is a power of two.
pub fn log2(n: usize) -> u32 {
    assert!(n.is_power_of_two(), "n must be a power of two");
    n.trailing_zeros()
}

// POLYNOMIAL HELPERS
// ================================================================================================

/// Returns a copy of the polynomial with all leading zero coefficients removed; an all-zero
/// polynomial collapses to an empty vector.
pub fn remove_leading_zeros(values: &[u128]) -> Vec<u128> {
    for i in (0..values.len()).rev() {
        if values[i] != 0 {
            return values[..=i].to_vec();
        }
    }
    vec![]
}
