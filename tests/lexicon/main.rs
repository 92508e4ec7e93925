//! Integration tests for Layer 1: Lexicon
//!
//! Word forms, the category-indexed store, and the starter word list.

mod starter;
mod traversal;
