// Copyright (c) 2020 Helge Wrede, Alexander Schultheiß, Lukas Simon
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Bit vector functionality.
//!
//! Bits are numbered most-significant first: bit `i` lives in byte `i / 8`
//! at position `7 - (i % 8)`. Bits can be set but never cleared.
use std::fmt::Debug;

/// A packed, set-only bit vector.
#[derive(Clone, PartialEq, Eq)]
pub struct BitVec {
    bytes: Vec<u8>,
}

impl BitVec {
    /// Create a new bit vector holding `capacity / 8` whole bytes.
    ///
    /// Bits beyond the last whole byte are dropped, so the resulting length is
    /// `capacity` rounded down to a multiple of eight.
    pub fn new(capacity: usize) -> Self {
        Self {
            bytes: vec![0; capacity / 8],
        }
    }

    /// Get the length in bits of the vector.
    pub fn len(&self) -> usize {
        self.bytes.len() * 8
    }

    /// Check whether this vector is empty, ie. has a length of zero.
    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Set a single bit to `1`.
    pub fn set(&mut self, index: usize) {
        if index >= self.len() {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            )
        }
        self.bytes[index / 8] |= mask(index);
    }

    /// Check whether a bit is set.
    pub fn is_set(&self, index: usize) -> bool {
        if index >= self.len() {
            panic!(
                "index out of bounds: the len is {} but the index is {}",
                self.len(),
                index,
            )
        }
        let mask = mask(index);

        self.bytes[index / 8] & mask == mask
    }

    /// Count the number of `1` bits.
    pub fn count_ones(&self) -> usize {
        self.bytes.iter().map(|b| b.count_ones() as usize).sum()
    }

    /// Count the number of `0` bits.
    pub fn count_zeros(&self) -> usize {
        self.len() - self.count_ones()
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }
}

#[inline]
fn mask(index: usize) -> u8 {
    0x80 >> (index % 8)
}

impl Debug for BitVec {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let bits: String = (0..self.len())
            .map(|i| if self.is_set(i) { '1' } else { '0' })
            .collect();
        write!(f, "BitVec({})", bits)
    }
}
