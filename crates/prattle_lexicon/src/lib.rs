//! Category-indexed word store and grammatical word forms for Prattle.
//!
//! This crate provides:
//! - [`Form`] - A surface form with its phonetic classification
//! - Word kinds ([`Noun`], [`Verb`], [`Article`], ...) with their forms
//! - [`Lexicon`] - The read-only, category-indexed word store
//! - [`starter_lexicon`] - A built-in English word list

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub mod lexicon;
pub mod starter;
pub mod word;

pub use lexicon::Lexicon;
pub use starter::starter_lexicon;
pub use word::{
    Adjective, Adverb, Article, Cardinal, Conjunction, ConjunctionJoin, Demonstrative, Form,
    IndefinitePronoun, Interrogative, Noun, PersonalPronoun, Preposition, ProperNoun, SpeechVerb,
    Tense, Verb, WordId, WordKind,
};
