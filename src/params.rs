// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Optimal Bloom filter parameters.
//!
//! For `n` expected items and a target false positive rate `p`, the optimal
//! filter has `m = -n·ln(p) / ln(2)²` bits and `k = (m / n)·ln(2)` rounds.
use std::f64;

use log::debug;

use crate::error::{Error, Result};

/// `ln` squared.
const LN_SQR: f64 = f64::consts::LN_2 * f64::consts::LN_2;

/// Return the optimal bit length and round count for a filter expected to hold
/// `expected_items` items with a false positive rate of `false_positive_percent`
/// percent.
///
/// Fails if `expected_items` is zero or if the percentage is not strictly
/// between `0` and `100`.
pub fn optimal_parameters(
    expected_items: usize,
    false_positive_percent: u32,
) -> Result<(usize, usize)> {
    if expected_items == 0 {
        return Err(Error::InvalidParameter {
            name: "expected_items",
            value: expected_items.to_string(),
        });
    }
    if false_positive_percent == 0 || false_positive_percent >= 100 {
        return Err(Error::InvalidParameter {
            name: "false_positive_percent",
            value: false_positive_percent.to_string(),
        });
    }
    let fp_rate = false_positive_percent as f64 / 100.;
    let nbits = optimal_bits(expected_items, fp_rate);
    let rounds = optimal_rounds(nbits, expected_items);

    debug!(
        "optimal parameters for {} items at {}%: {} bits, {} rounds",
        expected_items, false_positive_percent, nbits, rounds
    );
    Ok((nbits, rounds))
}

/// Return the optimal bit vector size for a Bloom filter given an approximate
/// size and a desired false positive rate.
pub fn optimal_bits(capacity: usize, fp_rate: f64) -> usize {
    (-((fp_rate.ln() * (capacity as f64)) / LN_SQR)).ceil() as usize
}

/// Return the optimal number of rounds for a Bloom filter given a bit vector
/// size and an approximate set size.
///
/// Also called `k`.
pub fn optimal_rounds(nbits: usize, capacity: usize) -> usize {
    ((nbits as f64 / capacity as f64) * f64::consts::LN_2).ceil() as usize
}

/// Return the expected false positive probability of a filter with `nbits`
/// bits and `rounds` rounds once `items` distinct items have been added.
///
/// This is `(1 - e^(-k·n/m))^k`.
pub fn false_positive_probability(nbits: usize, rounds: usize, items: usize) -> f64 {
    let m = nbits as f64;
    let k = rounds as f64;
    let n = items as f64;

    (1. - (-k * n / m).exp()).powf(k)
}
