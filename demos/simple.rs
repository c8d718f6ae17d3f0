//! A simple example showing the use of a Bloom filter.
use bloomchain::{optimal_parameters, Filter, Sha256Hash};

fn main() -> bloomchain::Result<()> {
    let (nbits, rounds) = optimal_parameters(128, 1)?;
    let mut bf = Filter::new(nbits, rounds, Sha256Hash)?;

    bf.add(b"foo")?;
    bf.add(b"bar")?;

    bf.is_member(b"foo")?; // true
    bf.is_member(b"bar")?; // true
    bf.is_member(b"baz")?; // false

    // Any closure from bytes to a digest works as a hash function.
    let xor = |input: &[u8]| vec![input.iter().fold(0u8, |acc, b| acc ^ b), input.len() as u8];
    let mut bf = Filter::new(64, 2, xor)?;
    bf.add(b"foo")?;
    bf.is_member(b"foo")?; // true

    Ok(())
}
