//! Fixed-capacity integer container and the offset-sum helper
//!
//! The container is a stack-resident `[i32; 10]` behind a newtype. Length is
//! always exactly [`ARRAY_LEN`]; there is no resizing.

use thiserror::Error;

/// Number of elements in a [`FixedArray`]. Invariant: never changes at runtime.
pub const ARRAY_LEN: usize = 10;

/// Errors for fixed-array access
#[derive(Error, Debug, PartialEq, Eq)]
pub enum FixedArrayError {
    #[error("Index out of bounds: {index} (length {len})", len = ARRAY_LEN)]
    OutOfBounds { index: usize },
}

/// Ordered sequence of exactly 10 signed integers, mutable in place
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedArray {
    elements: [i32; ARRAY_LEN],
}

impl FixedArray {
    /// Create a zero-initialized array. Contents are unspecified until written
    /// by the caller; zeroing keeps reads defined before that happens.
    pub fn new() -> Self {
        Self {
            elements: [0; ARRAY_LEN],
        }
    }

    /// Number of elements (always [`ARRAY_LEN`])
    pub fn len(&self) -> usize {
        ARRAY_LEN
    }

    pub fn is_empty(&self) -> bool {
        false
    }

    /// Checked read. Fails fast on a bounds violation instead of panicking.
    pub fn get(&self, index: usize) -> Result<i32, FixedArrayError> {
        self.elements
            .get(index)
            .copied()
            .ok_or(FixedArrayError::OutOfBounds { index })
    }

    /// Checked write
    pub fn set(&mut self, index: usize, value: i32) -> Result<(), FixedArrayError> {
        match self.elements.get_mut(index) {
            Some(slot) => {
                *slot = value;
                Ok(())
            }
            None => Err(FixedArrayError::OutOfBounds { index }),
        }
    }

    /// Last element. The index is statically valid for a length-10 array.
    pub fn last(&self) -> i32 {
        self.elements[ARRAY_LEN - 1]
    }
}

impl Default for FixedArray {
    fn default() -> Self {
        Self::new()
    }
}

/// Read the array's last element and add `offset` to it
///
/// Pure read-plus-compute: the container is not mutated.
pub fn add_last_plus_offset(array: &FixedArray, offset: i32) -> i32 {
    tracing::debug!(last = array.last(), offset, "computing offset sum");
    array.last() + offset
}
