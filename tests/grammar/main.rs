//! Integration tests for Layer 2: Grammar
//!
//! Clause dispatch, draw ordering, and clause-level counting against the
//! starter lexicon.

mod counting;
mod emission;
