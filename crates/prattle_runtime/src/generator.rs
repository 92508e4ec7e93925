//! The generate/count facade over the engine.

use std::sync::Arc;

use prattle_engine::{build_templates, calculate_combinations, resolve_templates};
use prattle_foundation::{
    Error, PhraseCombinations, RandomSource, Result, SeededRandomSource,
};
use prattle_grammar::Clause;
use prattle_lexicon::Lexicon;

use crate::mutator::Mutator;

/// Generates phrases and counts combinations against one lexicon.
///
/// The lexicon is shared read-only behind an `Arc`; the randomness source is
/// exclusively owned, since it is a sequential stream with mutable position.
/// Concurrent callers each hold their own generator over the same lexicon.
pub struct PhraseGenerator<R: RandomSource = SeededRandomSource> {
    lexicon: Arc<Lexicon>,
    rng: R,
    delimiter: String,
    mutators: Vec<Box<dyn Mutator>>,
}

impl<R: RandomSource> PhraseGenerator<R> {
    /// Creates a generator with the default `" "` delimiter and no mutators.
    #[must_use]
    pub fn new(lexicon: Arc<Lexicon>, rng: R) -> Self {
        Self {
            lexicon,
            rng,
            delimiter: " ".to_string(),
            mutators: Vec::new(),
        }
    }

    /// Sets the word delimiter.
    pub fn set_delimiter(&mut self, delimiter: impl Into<String>) {
        self.delimiter = delimiter.into();
    }

    /// The current word delimiter.
    #[must_use]
    pub fn delimiter(&self) -> &str {
        &self.delimiter
    }

    /// Replaces the randomness source.
    pub fn set_rng(&mut self, rng: R) {
        self.rng = rng;
    }

    /// Appends a mutator to the pipeline.
    pub fn add_mutator(&mut self, mutator: Box<dyn Mutator>) {
        self.mutators.push(mutator);
    }

    /// Drops all mutators.
    pub fn clear_mutators(&mut self) {
        self.mutators.clear();
    }

    /// The shared lexicon.
    #[must_use]
    pub fn lexicon(&self) -> &Arc<Lexicon> {
        &self.lexicon
    }

    /// Generates one phrase from a clause list.
    ///
    /// Builds templates, resolves them untrimmed, runs the mutator pipeline
    /// against the text with its trailing delimiter still present, then
    /// trims that delimiter once.
    ///
    /// # Errors
    ///
    /// Propagates configuration and empty-category errors from the engine.
    pub fn generate(&mut self, clauses: &[Clause]) -> Result<String> {
        let templates = build_templates(clauses, &mut self.rng)?;
        let mut phrase =
            resolve_templates(&templates, &self.lexicon, &mut self.rng, &self.delimiter)?;
        for mutator in &self.mutators {
            mutator.mutate(&mut phrase, &mut self.rng);
        }
        if phrase.ends_with(&self.delimiter) {
            phrase.truncate(phrase.len() - self.delimiter.len());
        }
        Ok(phrase)
    }

    /// Counts the combinations of a clause list.
    ///
    /// # Errors
    ///
    /// Propagates clause configuration errors.
    pub fn combinations(&self, clauses: &[Clause]) -> Result<PhraseCombinations> {
        calculate_combinations(clauses, &self.lexicon)
    }

    /// Picks one description uniformly at random and generates from it.
    ///
    /// # Errors
    ///
    /// Returns a configuration error for an empty description list, and
    /// propagates generation errors.
    pub fn generate_any_of(&mut self, descriptions: &[&[Clause]]) -> Result<String> {
        if descriptions.is_empty() {
            return Err(Error::configuration("no descriptions to choose from"));
        }
        let index = self.rng.next(descriptions.len());
        self.generate(descriptions[index])
    }

    /// Counts the union of several descriptions under a uniform pick.
    ///
    /// # Errors
    ///
    /// Propagates clause configuration errors.
    pub fn combinations_any_of(&self, descriptions: &[&[Clause]]) -> Result<PhraseCombinations> {
        let counts = descriptions
            .iter()
            .map(|clauses| self.combinations(clauses))
            .collect::<Result<Vec<_>>>()?;
        Ok(PhraseCombinations::random_selection(&counts))
    }
}
