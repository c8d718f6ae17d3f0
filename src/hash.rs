// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Hash functions usable by a [`Filter`](crate::Filter).
//!
//! A filter only needs a deterministic function from bytes to a non-empty
//! digest. Any closure of type `Fn(&[u8]) -> Vec<u8>` qualifies, as do the two
//! adaptors provided here: [`SipHash`], a fast keyed hash with an 8-byte
//! digest, and [`Sha256Hash`], a cryptographic hash with a 32-byte digest.
use std::hash::Hasher;

use sha2::{Digest, Sha256};
use siphasher::sip::SipHasher13;

/// Default key used for SipHash.
const SIPHASH_KEY: [u8; 16] = [
    136, 168, 28, 251, 141, 239, 69, 38, 166, 209, 98, 201, 2, 169, 146, 170,
];

/// A deterministic function from a byte string to a digest.
///
/// The digest length is up to the implementation, but should be the same for
/// every input, since the filter feeds each digest back into the function.
/// An empty digest is rejected by the filter.
pub trait BloomHasher {
    /// Hash `input` into a digest.
    fn hash(&self, input: &[u8]) -> Vec<u8>;
}

impl<F> BloomHasher for F
where
    F: Fn(&[u8]) -> Vec<u8>,
{
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        self(input)
    }
}

/// SipHash-1-3, producing an 8-byte big-endian digest.
#[derive(Clone, Copy, Debug)]
pub struct SipHash {
    hasher: SipHasher13,
}

impl SipHash {
    /// Create a SipHash adaptor with the default key.
    pub fn new() -> Self {
        Self::with_key(SIPHASH_KEY)
    }

    /// Create a SipHash adaptor with the given 128-bit key.
    pub fn with_key(key: [u8; 16]) -> Self {
        Self {
            hasher: SipHasher13::new_with_key(&key),
        }
    }
}

impl Default for SipHash {
    fn default() -> Self {
        Self::new()
    }
}

impl BloomHasher for SipHash {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        let mut sip = self.hasher;
        sip.write(input);
        sip.finish().to_be_bytes().to_vec()
    }
}

/// SHA-256, producing a 32-byte digest.
#[derive(Clone, Copy, Debug, Default)]
pub struct Sha256Hash;

impl BloomHasher for Sha256Hash {
    fn hash(&self, input: &[u8]) -> Vec<u8> {
        Sha256::digest(input).to_vec()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digest_lengths() {
        assert_eq!(SipHash::new().hash(b"foo").len(), 8);
        assert_eq!(SipHash::new().hash(b"").len(), 8);
        assert_eq!(Sha256Hash.hash(b"foo").len(), 32);
    }

    #[test]
    fn test_deterministic() {
        let sip = SipHash::new();
        assert_eq!(sip.hash(b"foo"), sip.hash(b"foo"));
        assert_ne!(sip.hash(b"foo"), sip.hash(b"bar"));
        assert_eq!(Sha256Hash.hash(b"foo"), Sha256Hash.hash(b"foo"));
    }

    #[test]
    fn test_siphash_key() {
        let a = SipHash::with_key([0; 16]);
        let b = SipHash::with_key([1; 16]);

        assert_ne!(a.hash(b"foo"), b.hash(b"foo"));
        assert_eq!(SipHash::default().hash(b"foo"), SipHash::new().hash(b"foo"));
    }

    #[test]
    fn test_sha256_known_digest() {
        let digest = Sha256Hash.hash(b"abc");
        assert_eq!(
            digest[..4],
            [0xba, 0x78, 0x16, 0xbf],
            "sha256(\"abc\") starts with ba7816bf"
        );
    }

    #[test]
    fn test_closure() {
        let identity = |input: &[u8]| input.to_vec();
        assert_eq!(identity.hash(b"foo"), b"foo".to_vec());
        assert_eq!((&identity).hash(b"bar"), b"bar".to_vec());
    }
}
