//! Error types, combination counting, and randomness primitives for Prattle.
//!
//! This crate provides:
//! - [`Error`] - Rich error types for configuration, parsing, and lexicon faults
//! - [`PhraseCombinations`] - The combination-count triple and its combinators
//! - [`RandomSource`] - The sequential randomness stream contract
//! - [`SeededRandomSource`] - A deterministic, seedable implementation
//! - [`weighted_choice`] - The shared weighted-selection primitive

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod combinations;
pub mod error;
pub mod random;

pub use combinations::{PhraseCombinations, entropy_bits};
pub use error::{Error, ErrorKind, Result};
pub use random::{RandomSource, ScriptedRandomSource, SeededRandomSource, weighted_choice};
