//! The category-indexed word store.
//!
//! A [`Lexicon`] is populated up front (by the starter list, an external
//! loader, or a test) and is read-only for the duration of a generation or
//! counting call. It is `Send + Sync`, so one store can back concurrent
//! generators behind an `Arc`.

use crate::word::{
    Adjective, Adverb, Article, Cardinal, Conjunction, ConjunctionJoin, Demonstrative, Form,
    IndefinitePronoun, Interrogative, Noun, PersonalPronoun, Preposition, ProperNoun, SpeechVerb,
    Verb, WordId, WordKind,
};

/// Read-only storage for all word categories.
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Lexicon {
    nouns: Vec<Noun>,
    proper_nouns: Vec<ProperNoun>,
    verbs: Vec<Verb>,
    adjectives: Vec<Adjective>,
    adverbs: Vec<Adverb>,
    prepositions: Vec<Preposition>,
    articles: Vec<Article>,
    demonstratives: Vec<Demonstrative>,
    personal_pronouns: Vec<PersonalPronoun>,
    cardinals: Vec<Cardinal>,
    indefinite_pronouns: Vec<IndefinitePronoun>,
    interrogatives: Vec<Interrogative>,
    conjunctions: Vec<Conjunction>,
    speech_verbs: Vec<SpeechVerb>,
}

impl Lexicon {
    /// Creates an empty lexicon.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a common noun.
    pub fn add_noun(&mut self, noun: Noun) {
        self.nouns.push(noun);
    }

    /// Adds a proper noun.
    pub fn add_proper_noun(&mut self, proper_noun: ProperNoun) {
        self.proper_nouns.push(proper_noun);
    }

    /// Adds a verb.
    pub fn add_verb(&mut self, verb: Verb) {
        self.verbs.push(verb);
    }

    /// Adds an adjective.
    pub fn add_adjective(&mut self, adjective: Adjective) {
        self.adjectives.push(adjective);
    }

    /// Adds an adverb.
    pub fn add_adverb(&mut self, adverb: Adverb) {
        self.adverbs.push(adverb);
    }

    /// Adds a preposition.
    pub fn add_preposition(&mut self, preposition: Preposition) {
        self.prepositions.push(preposition);
    }

    /// Adds an article set.
    pub fn add_article(&mut self, article: Article) {
        self.articles.push(article);
    }

    /// Adds a demonstrative pair.
    pub fn add_demonstrative(&mut self, demonstrative: Demonstrative) {
        self.demonstratives.push(demonstrative);
    }

    /// Adds a possessive determiner.
    pub fn add_personal_pronoun(&mut self, pronoun: PersonalPronoun) {
        self.personal_pronouns.push(pronoun);
    }

    /// Adds a cardinal number word.
    pub fn add_cardinal(&mut self, cardinal: Cardinal) {
        self.cardinals.push(cardinal);
    }

    /// Adds an indefinite pronoun pair.
    pub fn add_indefinite_pronoun(&mut self, pronoun: IndefinitePronoun) {
        self.indefinite_pronouns.push(pronoun);
    }

    /// Adds an interrogative pair.
    pub fn add_interrogative(&mut self, interrogative: Interrogative) {
        self.interrogatives.push(interrogative);
    }

    /// Adds a conjunction.
    pub fn add_conjunction(&mut self, conjunction: Conjunction) {
        self.conjunctions.push(conjunction);
    }

    /// Adds a speech verb.
    pub fn add_speech_verb(&mut self, speech_verb: SpeechVerb) {
        self.speech_verbs.push(speech_verb);
    }

    /// All common nouns.
    #[must_use]
    pub fn nouns(&self) -> &[Noun] {
        &self.nouns
    }

    /// All proper nouns.
    #[must_use]
    pub fn proper_nouns(&self) -> &[ProperNoun] {
        &self.proper_nouns
    }

    /// All verbs.
    #[must_use]
    pub fn verbs(&self) -> &[Verb] {
        &self.verbs
    }

    /// All adjectives.
    #[must_use]
    pub fn adjectives(&self) -> &[Adjective] {
        &self.adjectives
    }

    /// All adverbs.
    #[must_use]
    pub fn adverbs(&self) -> &[Adverb] {
        &self.adverbs
    }

    /// All prepositions.
    #[must_use]
    pub fn prepositions(&self) -> &[Preposition] {
        &self.prepositions
    }

    /// All article sets.
    #[must_use]
    pub fn articles(&self) -> &[Article] {
        &self.articles
    }

    /// All demonstrative pairs.
    #[must_use]
    pub fn demonstratives(&self) -> &[Demonstrative] {
        &self.demonstratives
    }

    /// All possessive determiners.
    #[must_use]
    pub fn personal_pronouns(&self) -> &[PersonalPronoun] {
        &self.personal_pronouns
    }

    /// All cardinal number words.
    #[must_use]
    pub fn cardinals(&self) -> &[Cardinal] {
        &self.cardinals
    }

    /// All indefinite pronoun pairs.
    #[must_use]
    pub fn indefinite_pronouns(&self) -> &[IndefinitePronoun] {
        &self.indefinite_pronouns
    }

    /// All interrogative pairs.
    #[must_use]
    pub fn interrogatives(&self) -> &[Interrogative] {
        &self.interrogatives
    }

    /// All conjunctions.
    #[must_use]
    pub fn conjunctions(&self) -> &[Conjunction] {
        &self.conjunctions
    }

    /// All speech verbs.
    #[must_use]
    pub fn speech_verbs(&self) -> &[SpeechVerb] {
        &self.speech_verbs
    }

    /// Number of common nouns.
    #[must_use]
    pub fn noun_count(&self) -> usize {
        self.nouns.len()
    }

    /// Number of proper nouns.
    #[must_use]
    pub fn proper_noun_count(&self) -> usize {
        self.proper_nouns.len()
    }

    /// Number of verbs.
    #[must_use]
    pub fn verb_count(&self) -> usize {
        self.verbs.len()
    }

    /// Number of adjectives.
    #[must_use]
    pub fn adjective_count(&self) -> usize {
        self.adjectives.len()
    }

    /// Number of adverbs.
    #[must_use]
    pub fn adverb_count(&self) -> usize {
        self.adverbs.len()
    }

    /// Number of prepositions.
    #[must_use]
    pub fn preposition_count(&self) -> usize {
        self.prepositions.len()
    }

    /// Number of article sets.
    #[must_use]
    pub fn article_count(&self) -> usize {
        self.articles.len()
    }

    /// Number of demonstrative pairs.
    #[must_use]
    pub fn demonstrative_count(&self) -> usize {
        self.demonstratives.len()
    }

    /// Number of possessive determiners.
    #[must_use]
    pub fn personal_pronoun_count(&self) -> usize {
        self.personal_pronouns.len()
    }

    /// Number of cardinals agreeing with the given plurality.
    #[must_use]
    pub fn cardinal_count(&self, is_plural: bool) -> usize {
        self.cardinals
            .iter()
            .filter(|c| c.is_plural == is_plural)
            .count()
    }

    /// Number of indefinite pronouns with the given personhood.
    #[must_use]
    pub fn indefinite_pronoun_count(&self, is_personal: bool) -> usize {
        self.indefinite_pronouns
            .iter()
            .filter(|p| p.is_personal == is_personal)
            .count()
    }

    /// Number of interrogative pairs.
    #[must_use]
    pub fn interrogative_count(&self) -> usize {
        self.interrogatives.len()
    }

    /// Number of conjunctions supporting the given join.
    #[must_use]
    pub fn conjunction_count(&self, join: ConjunctionJoin) -> usize {
        self.conjunctions.iter().filter(|c| c.joins(join)).count()
    }

    /// Number of speech verbs.
    #[must_use]
    pub fn speech_verb_count(&self) -> usize {
        self.speech_verbs.len()
    }

    /// Total number of surface forms across every category.
    ///
    /// This is the universe an `AnyWord` slot draws from.
    #[must_use]
    pub fn total_form_count(&self) -> usize {
        self.nouns.len() * 2
            + self.proper_nouns.len()
            + self.verbs.len() * 11
            + self.adjectives.len()
            + self.adverbs.len()
            + self.prepositions.len()
            + self.articles.len() * 3
            + self.demonstratives.len() * 2
            + self.personal_pronouns.len()
            + self.cardinals.len()
            + self.indefinite_pronouns.len() * 2
            + self.interrogatives.len() * 2
            + self.conjunctions.len()
            + self.speech_verbs.len()
    }

    /// Returns the form at a global index in `[0, total_form_count())`.
    ///
    /// Categories are traversed in declared order, each entry's forms in
    /// their declared order, so a given index is stable for a given lexicon.
    #[must_use]
    pub fn form_at(&self, index: usize) -> Option<(WordId, &Form)> {
        let mut index = index;

        if index < self.nouns.len() * 2 {
            let form = self.nouns[index / 2].forms().nth(index % 2)?;
            return Some((WordId::new(WordKind::Noun, index / 2), form));
        }
        index -= self.nouns.len() * 2;

        if index < self.proper_nouns.len() {
            let form = self.proper_nouns[index].forms().next()?;
            return Some((WordId::new(WordKind::ProperNoun, index), form));
        }
        index -= self.proper_nouns.len();

        if index < self.verbs.len() * 11 {
            let form = self.verbs[index / 11].forms().nth(index % 11)?;
            return Some((WordId::new(WordKind::Verb, index / 11), form));
        }
        index -= self.verbs.len() * 11;

        if index < self.adjectives.len() {
            return Some((
                WordId::new(WordKind::Adjective, index),
                &self.adjectives[index].form,
            ));
        }
        index -= self.adjectives.len();

        if index < self.adverbs.len() {
            return Some((
                WordId::new(WordKind::Adverb, index),
                &self.adverbs[index].form,
            ));
        }
        index -= self.adverbs.len();

        if index < self.prepositions.len() {
            return Some((
                WordId::new(WordKind::Preposition, index),
                &self.prepositions[index].form,
            ));
        }
        index -= self.prepositions.len();

        if index < self.articles.len() * 3 {
            let form = self.articles[index / 3].forms().nth(index % 3)?;
            return Some((WordId::new(WordKind::Article, index / 3), form));
        }
        index -= self.articles.len() * 3;

        if index < self.demonstratives.len() * 2 {
            let form = self.demonstratives[index / 2].forms().nth(index % 2)?;
            return Some((WordId::new(WordKind::Demonstrative, index / 2), form));
        }
        index -= self.demonstratives.len() * 2;

        if index < self.personal_pronouns.len() {
            return Some((
                WordId::new(WordKind::PersonalPronoun, index),
                &self.personal_pronouns[index].form,
            ));
        }
        index -= self.personal_pronouns.len();

        if index < self.cardinals.len() {
            return Some((
                WordId::new(WordKind::Cardinal, index),
                &self.cardinals[index].form,
            ));
        }
        index -= self.cardinals.len();

        if index < self.indefinite_pronouns.len() * 2 {
            let form = self.indefinite_pronouns[index / 2].forms().nth(index % 2)?;
            return Some((WordId::new(WordKind::IndefinitePronoun, index / 2), form));
        }
        index -= self.indefinite_pronouns.len() * 2;

        if index < self.interrogatives.len() * 2 {
            let form = self.interrogatives[index / 2].forms().nth(index % 2)?;
            return Some((WordId::new(WordKind::Interrogative, index / 2), form));
        }
        index -= self.interrogatives.len() * 2;

        if index < self.conjunctions.len() {
            return Some((
                WordId::new(WordKind::Conjunction, index),
                &self.conjunctions[index].form,
            ));
        }
        index -= self.conjunctions.len();

        if index < self.speech_verbs.len() {
            return Some((
                WordId::new(WordKind::SpeechVerb, index),
                &self.speech_verbs[index].form,
            ));
        }

        None
    }
}
