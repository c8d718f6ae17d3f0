// Copyright (c) 2018 Aleksandr Bezobchuk
// Copyright (c) 2022 Alexis Sellier
//
// Licensed under the MIT license.

//! Error types.
use thiserror::Error;

/// An error returned by the parameter calculator or the filter.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// A sizing parameter is outside of its valid range.
    #[error("invalid parameter `{name}`: {value}")]
    InvalidParameter {
        /// Name of the offending parameter.
        name: &'static str,
        /// The value that was provided.
        value: String,
    },
    /// The filter could not be constructed with the given dimensions.
    #[error("unable to construct filter: {0}")]
    Construction(String),
    /// A hash round produced an empty output.
    #[error("hash function returned an empty output in round {round}")]
    InvalidHashOutput {
        /// One-based round in which the empty output was produced, or `0` when
        /// the digest was passed to [`reduce`](crate::bloom::reduce) directly.
        round: usize,
    },
}

/// Result type used throughout the crate.
pub type Result<T> = std::result::Result<T, Error>;
