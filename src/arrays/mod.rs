// Copyright (c) Facebook, Inc. and its affiliates.
//
// This source code is licensed under the MIT license found in the
// LICENSE file in the root directory of this source tree.

//! Vector and matrix handles over contiguous blocks of field elements.
//!
//! Handles own their backing storage and are created through a [crate::PrimeField] instance,
//! which stamps them with the element byte width used for serialization. Values are stored as
//! raw 128-bit lanes in row-major order; the byte encoding is little-endian with
//! `element_bytes` bytes per element.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::errors::MathError;


// FIELD VECTOR
// ================================================================================================

/// An ordered sequence of field elements stored contiguously.
///
/// The setter writes raw values without reducing them; callers storing values that may exceed
/// the field modulus must reduce first. Values produced by field operations are always
/// canonical.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct FieldVector {
    elements: Vec<u128>,
    element_bytes: usize,
}

impl FieldVector {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    pub(crate) fn new(length: usize, element_bytes: usize) -> Self {
        FieldVector { elements: vec![0; length], element_bytes }
    }

    pub(crate) fn from_values(values: Vec<u128>, element_bytes: usize) -> Self {
        FieldVector { elements: values, element_bytes }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of elements in this vector.
    pub fn length(&self) -> usize {
        self.elements.len()
    }

    /// Returns true if this vector contains no elements.
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Returns the number of bytes needed to encode a single element.
    pub fn element_bytes(&self) -> usize {
        self.element_bytes
    }

    /// Returns the number of bytes needed to encode the entire vector.
    pub fn byte_length(&self) -> usize {
        self.elements.len() * self.element_bytes
    }

    /// Returns the element at the specified index.
    ///
    /// # Errors
    /// Returns an error if the index is out of bounds.
    pub fn get_value(&self, idx: usize) -> Result<u128, MathError> {
        self.elements.get(idx).copied().ok_or_else(|| {
            MathError::OutOfRange(format!(
                "index {idx} is out of bounds for a vector of length {}",
                self.elements.len()
            ))
        })
    }

    /// Sets the element at the specified index; the value is stored as is and is not reduced.
    ///
    /// # Errors
    /// Returns an error if the index is out of bounds.
    pub fn set_value(&mut self, idx: usize, value: u128) -> Result<(), MathError> {
        let length = self.elements.len();
        match self.elements.get_mut(idx) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(MathError::OutOfRange(format!(
                "index {idx} is out of bounds for a vector of length {length}"
            ))),
        }
    }

    /// Returns the elements of this vector as a slice.
    pub fn values(&self) -> &[u128] {
        &self.elements
    }

    /// Returns a copy of the elements of this vector.
    pub fn to_values(&self) -> Vec<u128> {
        self.elements.clone()
    }

    // SERIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Serializes this vector into bytes, little-endian, `element_bytes` bytes per element.
    pub fn to_bytes(&self) -> Vec<u8> {
        write_elements(&self.elements, self.element_bytes)
    }

    /// Serializes a sub-range of `count` elements starting at `start` into bytes.
    ///
    /// # Errors
    /// Returns an error if the range extends beyond the end of the vector.
    pub fn to_buffer(&self, start: usize, count: usize) -> Result<Vec<u8>, MathError> {
        let end = start
            .checked_add(count)
            .filter(|&end| end <= self.elements.len())
            .ok_or_else(|| {
                MathError::OutOfRange(format!(
                    "range [{start}, {start} + {count}) is out of bounds for a vector of length {}",
                    self.elements.len()
                ))
            })?;
        Ok(write_elements(&self.elements[start..end], self.element_bytes))
    }
}

// FIELD MATRIX
// ================================================================================================

/// A row-major contiguous block of `rows * cols` field elements.
///
/// Follows the same storage and mutation discipline as [FieldVector].
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Deserialize, Serialize))]
pub struct FieldMatrix {
    elements: Vec<u128>,
    row_count: usize,
    col_count: usize,
    element_bytes: usize,
}

impl FieldMatrix {
    // CONSTRUCTORS
    // --------------------------------------------------------------------------------------------

    pub(crate) fn new(row_count: usize, col_count: usize, element_bytes: usize) -> Self {
        FieldMatrix {
            elements: vec![0; row_count * col_count],
            row_count,
            col_count,
            element_bytes,
        }
    }

    pub(crate) fn from_values(
        values: Vec<u128>,
        row_count: usize,
        col_count: usize,
        element_bytes: usize,
    ) -> Self {
        debug_assert_eq!(values.len(), row_count * col_count);
        FieldMatrix { elements: values, row_count, col_count, element_bytes }
    }

    // PUBLIC ACCESSORS
    // --------------------------------------------------------------------------------------------

    /// Returns the number of rows in this matrix.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    /// Returns the number of columns in this matrix.
    pub fn col_count(&self) -> usize {
        self.col_count
    }

    /// Returns the total number of elements in this matrix.
    pub fn element_count(&self) -> usize {
        self.row_count * self.col_count
    }

    /// Returns the number of bytes needed to encode a single element.
    pub fn element_bytes(&self) -> usize {
        self.element_bytes
    }

    /// Returns the number of bytes needed to encode a single row.
    pub fn row_stride_bytes(&self) -> usize {
        self.col_count * self.element_bytes
    }

    /// Returns the number of bytes needed to encode the entire matrix.
    pub fn byte_length(&self) -> usize {
        self.element_count() * self.element_bytes
    }

    /// Returns the element at the specified row and column.
    ///
    /// # Errors
    /// Returns an error if either index is out of bounds.
    pub fn get_value(&self, row: usize, col: usize) -> Result<u128, MathError> {
        self.cell_index(row, col).map(|idx| self.elements[idx])
    }

    /// Sets the element at the specified row and column; the value is stored as is and is not
    /// reduced.
    ///
    /// # Errors
    /// Returns an error if either index is out of bounds.
    pub fn set_value(&mut self, row: usize, col: usize, value: u128) -> Result<(), MathError> {
        let idx = self.cell_index(row, col)?;
        self.elements[idx] = value;
        Ok(())
    }

    /// Returns the elements of this matrix as a flat row-major slice.
    pub fn values(&self) -> &[u128] {
        &self.elements
    }

    /// Returns a copy of the elements of this matrix, one vector per row.
    pub fn to_values(&self) -> Vec<Vec<u128>> {
        self.elements.chunks(self.col_count.max(1)).map(|row| row.to_vec()).collect()
    }

    // SERIALIZATION
    // --------------------------------------------------------------------------------------------

    /// Serializes this matrix into bytes in row-major order, little-endian, `element_bytes`
    /// bytes per element.
    pub fn to_bytes(&self) -> Vec<u8> {
        write_elements(&self.elements, self.element_bytes)
    }

    /// Serializes the specified rows into byte buffers, one buffer per requested row index.
    ///
    /// # Errors
    /// Returns an error if any of the indexes is out of bounds.
    pub fn rows_to_buffers(&self, indexes: &[usize]) -> Result<Vec<Vec<u8>>, MathError> {
        let mut result = Vec::with_capacity(indexes.len());
        for &row in indexes {
            if row >= self.row_count {
                return Err(MathError::OutOfRange(format!(
                    "row index {row} is out of bounds for a matrix with {} rows",
                    self.row_count
                )));
            }
            let offset = row * self.col_count;
            result.push(write_elements(
                &self.elements[offset..offset + self.col_count],
                self.element_bytes,
            ));
        }
        Ok(result)
    }

    // HELPER FUNCTIONS
    // --------------------------------------------------------------------------------------------

    fn cell_index(&self, row: usize, col: usize) -> Result<usize, MathError> {
        if row >= self.row_count || col >= self.col_count {
            return Err(MathError::OutOfRange(format!(
                "cell ({row}, {col}) is out of bounds for a {} x {} matrix",
                self.row_count, self.col_count
            )));
        }
        Ok(row * self.col_count + col)
    }
}

// HELPER FUNCTIONS
// ================================================================================================

fn write_elements(elements: &[u128], element_bytes: usize) -> Vec<u8> {
    let mut result = Vec::with_capacity(elements.len() * element_bytes);
    for element in elements {
        result.extend_from_slice(&element.to_le_bytes()[..element_bytes]);
    }
    result
}
