//! The clause model.
//!
//! A clause is a named group of non-negative weight factors, grouped into
//! mutually-exclusive choice groups. A clause never mutates after
//! construction: its weights fully determine both its random behavior
//! (template emission) and its combinatorics, and the two are kept in
//! lock-step term by term.

mod any_word;
mod conjunction;
mod noun;
mod speech;
mod verb;

pub use any_word::AnyWordClause;
pub use conjunction::ConjunctionClause;
pub use noun::NounClause;
pub use speech::DirectSpeechClause;
pub use verb::VerbClause;

use prattle_foundation::{PhraseCombinations, RandomSource, Result};
use prattle_lexicon::Lexicon;

use crate::linking::UnitInfo;
use crate::ops::{TemplateOp, TemplateSequence};

/// One grammatical constituent of a phrase description.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Clause {
    /// A noun phrase.
    Noun(NounClause),
    /// A verb with its decorations.
    Verb(VerbClause),
    /// A conjunction joining nouns or phrases.
    Conjunction(ConjunctionClause),
    /// Direct speech, or retraction of the speaker's noun phrase.
    DirectSpeech(DirectSpeechClause),
    /// Any word form at all ("word salad").
    AnyWord(AnyWordClause),
}

impl Clause {
    /// Emits this clause's first-pass template contribution.
    ///
    /// The sequence is read-only here; the builder applies the returned ops.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for weight combinations that are
    /// checked lazily at first use, such as a conjunction with both or
    /// neither joining factor set.
    pub fn add_word_template(
        &self,
        rng: &mut dyn RandomSource,
        sequence: &TemplateSequence,
    ) -> Result<Vec<TemplateOp>> {
        match self {
            Self::Noun(clause) => Ok(clause.add_word_template(rng)),
            Self::Verb(clause) => Ok(clause.add_word_template(rng, sequence)),
            Self::Conjunction(clause) => clause.add_word_template(),
            Self::DirectSpeech(clause) => Ok(clause.add_word_template(rng)),
            Self::AnyWord(clause) => Ok(clause.add_word_template()),
        }
    }

    /// Emits this clause's second-pass contribution.
    ///
    /// A hook most clauses no-op; it exists for cross-clause corrections
    /// that must observe templates emitted later in the same unit, like the
    /// verb's transitivity resolution.
    ///
    /// # Errors
    ///
    /// Currently infallible for every variant; kept fallible for parity
    /// with the first pass.
    pub fn second_pass_of_word_template(
        &self,
        rng: &mut dyn RandomSource,
        _sequence: &TemplateSequence,
        unit: &UnitInfo,
    ) -> Result<Vec<TemplateOp>> {
        match self {
            Self::Verb(clause) => Ok(clause.second_pass_of_word_template(rng, unit)),
            _ => Ok(Vec::new()),
        }
    }

    /// Counts this clause's combinations against a lexicon.
    ///
    /// Purely weight- and count-driven; counting never needs linking or
    /// randomness.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for weight combinations that are
    /// checked lazily at first use.
    pub fn count_combinations(&self, lexicon: &Lexicon) -> Result<PhraseCombinations> {
        match self {
            Self::Noun(clause) => Ok(clause.count_combinations(lexicon)),
            Self::Verb(clause) => Ok(clause.count_combinations(lexicon)),
            Self::Conjunction(clause) => clause.count_combinations(lexicon),
            Self::DirectSpeech(clause) => Ok(clause.count_combinations(lexicon)),
            Self::AnyWord(clause) => Ok(clause.count_combinations(lexicon)),
        }
    }
}
