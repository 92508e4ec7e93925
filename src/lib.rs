//! Prattle - Grammatical passphrase generator
//!
//! This crate re-exports all layers of the Prattle system for convenient
//! access. For detailed documentation, see the individual layer crates.
//!
//! # Architecture
//!
//! ```text
//! Layer 4: prattle_runtime    — Generator facade, presets, mutators, console
//! Layer 3: prattle_engine     — Template builder, word resolver, counting
//!          prattle_parser     — Textual phrase-description format
//! Layer 2: prattle_grammar    — Clause model, templates, linking
//! Layer 1: prattle_lexicon    — Word forms and the category-indexed store
//! Layer 0: prattle_foundation — Errors, combination algebra, randomness
//! ```

pub use prattle_engine as engine;
pub use prattle_foundation as foundation;
pub use prattle_grammar as grammar;
pub use prattle_lexicon as lexicon;
pub use prattle_parser as parser;
pub use prattle_runtime as runtime;
