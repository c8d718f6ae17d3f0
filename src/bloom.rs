// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! A Bloom filter over byte strings using chained hashing.

use log::debug;

use crate::bitvec::BitVec;
use crate::error::{Error, Result};
use crate::hash::BloomHasher;
use crate::params;

/// A Bloom filter over byte strings, hashing with `H`.
#[derive(Clone, Debug)]
pub struct Filter<H> {
    bits: BitVec,
    rounds: usize,
    hasher: H,
}

impl<H: BloomHasher> Filter<H> {
    /// Return a new, empty Bloom filter of `nbits` bits that sets `rounds` bits
    /// per item.
    ///
    /// The bit array holds `nbits / 8` whole bytes: a length that is not a
    /// multiple of eight is rounded down. Fails if the resulting array would
    /// be empty or if `rounds` is zero.
    pub fn new(nbits: usize, rounds: usize, hasher: H) -> Result<Self> {
        if nbits == 0 {
            return Err(Error::Construction("bit length must be positive".to_owned()));
        }
        if rounds == 0 {
            return Err(Error::Construction("rounds must be positive".to_owned()));
        }
        if nbits / 8 == 0 {
            return Err(Error::Construction(format!(
                "bit length {} is shorter than one byte",
                nbits
            )));
        }
        let bits = BitVec::new(nbits);

        debug!(
            "created filter with {} usable bits ({} requested) and {} rounds",
            bits.len(),
            nbits,
            rounds
        );
        Ok(Self {
            bits,
            rounds,
            hasher,
        })
    }

    /// Return a new Bloom filter sized for `capacity` items at a false positive
    /// rate of `false_positive_percent` percent.
    pub fn with_rate(capacity: usize, false_positive_percent: u32, hasher: H) -> Result<Self> {
        let (nbits, rounds) = params::optimal_parameters(capacity, false_positive_percent)?;

        Self::new(nbits, rounds, hasher)
    }

    /// Add an item to the Bloom filter. This operation is idempotent with regards
    /// to each unique item.
    ///
    /// If any hash round fails, no bit is set.
    pub fn add(&mut self, item: &[u8]) -> Result<()> {
        let mut indices = Vec::with_capacity(self.rounds);
        self.walk(item, |index| {
            indices.push(index);
            true
        })?;

        for index in indices {
            self.bits.set(index);
        }
        Ok(())
    }

    /// Return whether or not a given item is likely in the Bloom filter or not. There is a
    /// possibility for a false positive, but a false negative will never occur.
    pub fn is_member(&self, item: &[u8]) -> Result<bool> {
        self.walk(item, |index| self.bits.is_set(index))
    }

    /// Return the number of usable bits in this filter.
    pub fn bits(&self) -> usize {
        self.bits.len()
    }

    /// Number of rounds used (`k` parameter).
    pub fn rounds(&self) -> usize {
        self.rounds
    }

    /// Fraction of bits that are set.
    pub fn fill_ratio(&self) -> f64 {
        self.bits.count_ones() as f64 / self.bits.len() as f64
    }

    /// Estimate the current false positive rate from the fill ratio.
    pub fn estimated_false_positive_rate(&self) -> f64 {
        self.fill_ratio().powi(self.rounds as i32)
    }

    /// Return the underlying bytes storage.
    pub fn as_bytes(&self) -> &[u8] {
        self.bits.as_bytes()
    }

    /// Run the hash chain for `item`, calling `visit` with each round's bit index.
    ///
    /// Stops early, returning `false`, as soon as `visit` does.
    fn walk(&self, item: &[u8], mut visit: impl FnMut(usize) -> bool) -> Result<bool> {
        let nbits = self.bits.len();
        let mut digest = self.hasher.hash(item);

        for round in 1..=self.rounds {
            if round > 1 {
                digest = self.hasher.hash(&digest);
            }
            if digest.is_empty() {
                return Err(Error::InvalidHashOutput { round });
            }
            if !visit(reduce(&digest, nbits)?) {
                return Ok(false);
            }
        }
        Ok(true)
    }
}

/// Reduce a hash digest, read as a big-endian unsigned integer of any width,
/// modulo `nbits`.
///
/// Fails with [`Error::InvalidHashOutput`] if the digest is empty, reported as
/// round `0` since no filter round is involved, or with
/// [`Error::InvalidParameter`] if `nbits` is zero.
pub fn reduce(digest: &[u8], nbits: usize) -> Result<usize> {
    if nbits == 0 {
        return Err(Error::InvalidParameter {
            name: "nbits",
            value: nbits.to_string(),
        });
    }
    if digest.is_empty() {
        return Err(Error::InvalidHashOutput { round: 0 });
    }
    let m = nbits as u128;
    let r = digest
        .iter()
        .fold(0u128, |r, &byte| ((r << 8) | byte as u128) % m);

    Ok(r as usize)
}

impl<H> AsRef<[u8]> for Filter<H> {
    fn as_ref(&self) -> &[u8] {
        self.bits.as_bytes()
    }
}

impl<H> PartialEq for Filter<H> {
    fn eq(&self, other: &Self) -> bool {
        self.bits == other.bits && self.rounds == other.rounds
    }
}

impl<H> Eq for Filter<H> {}
