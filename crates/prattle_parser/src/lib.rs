//! Textual phrase-description format for Prattle.
//!
//! A phrase description is a sequence of clause definitions in a
//! line-oriented `Tag = { key -> value, ... }` grammar:
//!
//! ```text
//! Noun = { common -> 1, singular -> 1, definite_article -> 1 }
//! Verb = { present -> 5, past -> 5, no_adverb -> 1 }
//! Noun = { common -> 1, plural -> 1 }
//! ```
//!
//! Whitespace is insignificant, omitted keys default to zero, and duplicate
//! or unknown keys are errors. The contract is round-trip fidelity:
//! `parse(serialize(clauses)) == clauses` for every supported clause type
//! and field. Field tables are explicit per-clause-type statics; there is no
//! runtime introspection.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod fields;
pub mod lexer;
pub mod parser;
pub mod serialize;

pub use parser::parse;
pub use serialize::serialize;
