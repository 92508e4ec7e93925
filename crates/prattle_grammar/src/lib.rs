//! Clause model, word slot templates, and per-clause combinatorics for Prattle.
//!
//! This crate provides:
//! - [`Clause`] - The weighted-factor configuration variants
//! - [`WordSlotTemplate`] - Unresolved, grammatically-tagged word requests
//! - [`TemplateOp`] / [`TemplateSequence`] - How clauses contribute templates
//! - [`initialize_relationships`] - Subject/verb/object unit partitioning

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod clause;
pub mod linking;
pub mod ops;
pub mod template;

pub use clause::{
    AnyWordClause, Clause, ConjunctionClause, DirectSpeechClause, NounClause, VerbClause,
};
pub use linking::{PhraseUnit, UnitInfo, initialize_relationships};
pub use ops::{TemplateClass, TemplateOp, TemplateSequence};
pub use template::WordSlotTemplate;
