//! A simple implementation of a Bloom filter over byte strings, a
//! space-efficient probabilistic data structure.
//!
//! # Bloom Filters
//!
//! A Bloom filter is a space-efficient probabilistic data structure that is
//! used to test whether an element is a member of a set. It allows for queries
//! to return: "possibly in set" or "definitely not in set". Elements can be
//! added to the set, but not removed; the more elements that are added to the
//! set, the larger the probability of false positives. It has been shown that
//! fewer than 10 bits per element are required for a 1% false positive
//! probability, independent of the size or number of elements in the set.
//!
//! Use [`params::optimal_parameters`] to size a filter for an expected number
//! of items and a target false positive percentage, or [`Filter::with_rate`]
//! to do both in one step.
//!
//! # Chained Hashing
//!
//! The hash function is supplied by the caller as a [`BloomHasher`]: any
//! deterministic function from bytes to a non-empty digest. A filter with `k`
//! rounds hashes an item `k` times, feeding each digest back into the hash
//! function:
//!
//! d<sub>1</sub> = H(x), d<sub>i</sub> = H(d<sub>i-1</sub>)
//!
//! Each digest is read as a big-endian integer of arbitrary width and reduced
//! modulo the number of bits, m, to pick the bit to set or check. Digests wider
//! than 64 bits, such as SHA-256, are reduced exactly.
//!
//! # Example
//!
//! ```
//! use bloomchain::{Filter, SipHash};
//!
//! let mut filter = Filter::with_rate(32, 1, SipHash::new())?;
//!
//! filter.add(b"foo")?;
//! filter.add(b"bar")?;
//!
//! assert!(filter.is_member(b"foo")?);
//! assert!(filter.is_member(b"bar")?);
//! filter.is_member(b"baz")?; // most likely false
//! # Ok::<(), bloomchain::Error>(())
//! ```
#![warn(missing_docs)]
#![allow(clippy::bool_assert_comparison)]

pub mod bitvec;
pub mod bloom;
pub mod error;
pub mod hash;
pub mod params;

pub use bloom::Filter;
pub use error::{Error, Result};
pub use hash::{BloomHasher, Sha256Hash, SipHash};
pub use params::optimal_parameters;
