//! Word kinds and their grammatical forms.
//!
//! Every surface form carries its phonetic classification (whether it is
//! pronounced with an initial vowel sound), which the resolver uses for
//! article agreement. Multi-word forms like "has been" keep their internal
//! spaces in storage; the resolver rewrites them to the caller's delimiter.

/// A single surface form of a word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Form {
    /// The text of this form.
    pub text: String,
    /// Whether the form is pronounced with an initial vowel sound.
    pub starts_with_vowel_sound: bool,
}

impl Form {
    /// Creates a form, classifying it by the first-letter vowel heuristic.
    ///
    /// English spelling lies often enough ("hour", "one", "unicorn") that
    /// irregular words should use [`Form::with_vowel_sound`] instead.
    #[must_use]
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let starts_with_vowel_sound = text
            .chars()
            .next()
            .is_some_and(|c| matches!(c.to_ascii_lowercase(), 'a' | 'e' | 'i' | 'o' | 'u'));
        Self {
            text,
            starts_with_vowel_sound,
        }
    }

    /// Creates a form with an explicit phonetic classification.
    #[must_use]
    pub fn with_vowel_sound(text: impl Into<String>, starts_with_vowel_sound: bool) -> Self {
        Self {
            text: text.into(),
            starts_with_vowel_sound,
        }
    }
}

/// Grammatical tense of a verb form.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Tense {
    /// "eats" / "eat"
    Present,
    /// "ate"
    Past,
    /// "will eat"
    Future,
    /// "is eating" / "are eating"
    Continuous,
    /// "was eating" / "were eating"
    ContinuousPast,
    /// "has eaten" / "have eaten"
    Perfect,
    /// "might eat"
    Subjunctive,
}

impl Tense {
    /// All tenses in their declared selection order.
    pub const ALL: [Self; 7] = [
        Self::Present,
        Self::Past,
        Self::Future,
        Self::Continuous,
        Self::ContinuousPast,
        Self::Perfect,
        Self::Subjunctive,
    ];
}

/// A common noun with singular and plural forms.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Noun {
    /// Singular form ("cat").
    pub singular: Form,
    /// Plural form ("cats").
    pub plural: Form,
}

impl Noun {
    /// Creates a noun from its singular and plural text.
    #[must_use]
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: Form::new(singular),
            plural: Form::new(plural),
        }
    }

    /// Creates a noun from explicit forms (for phonetic irregulars).
    #[must_use]
    pub fn with_forms(singular: Form, plural: Form) -> Self {
        Self { singular, plural }
    }

    /// Returns the form for the requested plurality.
    #[must_use]
    pub fn form(&self, is_plural: bool) -> &Form {
        if is_plural { &self.plural } else { &self.singular }
    }

    pub(crate) fn forms(&self) -> impl Iterator<Item = &Form> {
        [&self.singular, &self.plural].into_iter()
    }
}

/// A proper noun; always singular and never decorated.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProperNoun {
    /// The name itself.
    pub name: Form,
}

impl ProperNoun {
    /// Creates a proper noun.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: Form::new(name),
        }
    }

    pub(crate) fn forms(&self) -> impl Iterator<Item = &Form> {
        std::iter::once(&self.name)
    }
}

/// A verb with all eleven tense/plurality forms.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Verb {
    /// "eats"
    pub present_singular: Form,
    /// "eat"
    pub present_plural: Form,
    /// "ate"
    pub past: Form,
    /// "will eat"
    pub future: Form,
    /// "is eating"
    pub continuous_singular: Form,
    /// "are eating"
    pub continuous_plural: Form,
    /// "was eating"
    pub continuous_past_singular: Form,
    /// "were eating"
    pub continuous_past_plural: Form,
    /// "has eaten"
    pub perfect_singular: Form,
    /// "have eaten"
    pub perfect_plural: Form,
    /// "might eat"
    pub subjunctive: Form,
}

impl Verb {
    /// Builds a verb from its five principal parts, deriving the
    /// periphrastic forms.
    ///
    /// `regular("eat", "eats", "ate", "eaten", "eating")` yields "will eat",
    /// "is eating", "has eaten", "might eat" and so on.
    #[must_use]
    pub fn regular(base: &str, third: &str, past: &str, participle: &str, gerund: &str) -> Self {
        Self {
            present_singular: Form::new(third),
            present_plural: Form::new(base),
            past: Form::new(past),
            future: Form::new(format!("will {base}")),
            continuous_singular: Form::new(format!("is {gerund}")),
            continuous_plural: Form::new(format!("are {gerund}")),
            continuous_past_singular: Form::new(format!("was {gerund}")),
            continuous_past_plural: Form::new(format!("were {gerund}")),
            perfect_singular: Form::new(format!("has {participle}")),
            perfect_plural: Form::new(format!("have {participle}")),
            subjunctive: Form::new(format!("might {base}")),
        }
    }

    /// Returns the form for the requested tense and plurality.
    ///
    /// Tenses whose surface form does not inflect for number (past, future,
    /// subjunctive) ignore `is_plural`.
    #[must_use]
    pub fn form(&self, tense: Tense, is_plural: bool) -> &Form {
        match (tense, is_plural) {
            (Tense::Present, false) => &self.present_singular,
            (Tense::Present, true) => &self.present_plural,
            (Tense::Past, _) => &self.past,
            (Tense::Future, _) => &self.future,
            (Tense::Continuous, false) => &self.continuous_singular,
            (Tense::Continuous, true) => &self.continuous_plural,
            (Tense::ContinuousPast, false) => &self.continuous_past_singular,
            (Tense::ContinuousPast, true) => &self.continuous_past_plural,
            (Tense::Perfect, false) => &self.perfect_singular,
            (Tense::Perfect, true) => &self.perfect_plural,
            (Tense::Subjunctive, _) => &self.subjunctive,
        }
    }

    pub(crate) fn forms(&self) -> impl Iterator<Item = &Form> {
        [
            &self.present_singular,
            &self.present_plural,
            &self.past,
            &self.future,
            &self.continuous_singular,
            &self.continuous_plural,
            &self.continuous_past_singular,
            &self.continuous_past_plural,
            &self.perfect_singular,
            &self.perfect_plural,
            &self.subjunctive,
        ]
        .into_iter()
    }
}

/// An adjective.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adjective {
    /// The adjective's form.
    pub form: Form,
}

impl Adjective {
    /// Creates an adjective.
    #[must_use]
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: Form::new(form),
        }
    }
}

/// An adverb.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Adverb {
    /// The adverb's form.
    pub form: Form,
}

impl Adverb {
    /// Creates an adverb.
    #[must_use]
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: Form::new(form),
        }
    }
}

/// A preposition.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Preposition {
    /// The preposition's form.
    pub form: Form,
}

impl Preposition {
    /// Creates a preposition.
    #[must_use]
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: Form::new(form),
        }
    }
}

/// An article set: definite plus the two indefinite agreements.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Article {
    /// Definite form ("the").
    pub definite: Form,
    /// Indefinite form before a consonant sound ("a").
    pub indefinite: Form,
    /// Indefinite form before a vowel sound ("an").
    pub indefinite_before_vowel: Form,
}

impl Article {
    /// Creates an article set.
    #[must_use]
    pub fn new(
        definite: impl Into<String>,
        indefinite: impl Into<String>,
        indefinite_before_vowel: impl Into<String>,
    ) -> Self {
        Self {
            definite: Form::new(definite),
            indefinite: Form::new(indefinite),
            indefinite_before_vowel: Form::new(indefinite_before_vowel),
        }
    }

    /// Returns the agreed form for the word that follows.
    #[must_use]
    pub fn form(&self, is_definite: bool, before_vowel_sound: bool) -> &Form {
        if is_definite {
            &self.definite
        } else if before_vowel_sound {
            &self.indefinite_before_vowel
        } else {
            &self.indefinite
        }
    }

    pub(crate) fn forms(&self) -> impl Iterator<Item = &Form> {
        [
            &self.definite,
            &self.indefinite,
            &self.indefinite_before_vowel,
        ]
        .into_iter()
    }
}

/// A demonstrative determiner pair ("this"/"these").
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Demonstrative {
    /// Singular form ("this").
    pub singular: Form,
    /// Plural form ("these").
    pub plural: Form,
}

impl Demonstrative {
    /// Creates a demonstrative pair.
    #[must_use]
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: Form::new(singular),
            plural: Form::new(plural),
        }
    }

    /// Returns the form for the requested plurality.
    #[must_use]
    pub fn form(&self, is_plural: bool) -> &Form {
        if is_plural { &self.plural } else { &self.singular }
    }

    pub(crate) fn forms(&self) -> impl Iterator<Item = &Form> {
        [&self.singular, &self.plural].into_iter()
    }
}

/// A possessive determiner ("my", "your", "our", "their").
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PersonalPronoun {
    /// The determiner's form; the same for both pluralities.
    pub form: Form,
}

impl PersonalPronoun {
    /// Creates a possessive determiner.
    #[must_use]
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: Form::new(form),
        }
    }
}

/// A cardinal number word.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Cardinal {
    /// The number word ("one", "seven").
    pub form: Form,
    /// Whether the counted noun takes its plural form.
    pub is_plural: bool,
}

impl Cardinal {
    /// Creates a cardinal with a heuristic phonetic classification.
    #[must_use]
    pub fn new(form: impl Into<String>, is_plural: bool) -> Self {
        Self {
            form: Form::new(form),
            is_plural,
        }
    }

    /// Creates a cardinal from an explicit form (for "one").
    #[must_use]
    pub fn with_form(form: Form, is_plural: bool) -> Self {
        Self { form, is_plural }
    }
}

/// An indefinite pronoun pair ("someone"/"some people").
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct IndefinitePronoun {
    /// Singular form ("someone").
    pub singular: Form,
    /// Plural form ("some people").
    pub plural: Form,
    /// Whether this pronoun refers to a person rather than a thing.
    pub is_personal: bool,
}

impl IndefinitePronoun {
    /// Creates an indefinite pronoun pair.
    #[must_use]
    pub fn new(
        singular: impl Into<String>,
        plural: impl Into<String>,
        is_personal: bool,
    ) -> Self {
        Self {
            singular: Form::new(singular),
            plural: Form::new(plural),
            is_personal,
        }
    }

    /// Returns the form for the requested plurality.
    #[must_use]
    pub fn form(&self, is_plural: bool) -> &Form {
        if is_plural { &self.plural } else { &self.singular }
    }

    pub(crate) fn forms(&self) -> impl Iterator<Item = &Form> {
        [&self.singular, &self.plural].into_iter()
    }
}

/// An interrogative auxiliary pair ("why does"/"why do").
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Interrogative {
    /// Form agreeing with a singular subject ("why does").
    pub singular: Form,
    /// Form agreeing with a plural subject ("why do").
    pub plural: Form,
}

impl Interrogative {
    /// Creates an interrogative pair.
    #[must_use]
    pub fn new(singular: impl Into<String>, plural: impl Into<String>) -> Self {
        Self {
            singular: Form::new(singular),
            plural: Form::new(plural),
        }
    }

    /// Returns the form agreeing with the subject's plurality.
    #[must_use]
    pub fn form(&self, is_plural: bool) -> &Form {
        if is_plural { &self.plural } else { &self.singular }
    }

    pub(crate) fn forms(&self) -> impl Iterator<Item = &Form> {
        [&self.singular, &self.plural].into_iter()
    }
}

/// What a conjunction is allowed to join.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ConjunctionJoin {
    /// Joins two noun phrases ("the cat and the dog").
    Nouns,
    /// Joins two whole phrases ("the cat sleeps while the dog eats").
    Phrases,
}

/// A conjunction with its joining capabilities.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Conjunction {
    /// The conjunction's form.
    pub form: Form,
    /// Whether it can separate two nouns.
    pub joins_nouns: bool,
    /// Whether it can separate two phrases.
    pub joins_phrases: bool,
}

impl Conjunction {
    /// Creates a conjunction.
    #[must_use]
    pub fn new(form: impl Into<String>, joins_nouns: bool, joins_phrases: bool) -> Self {
        Self {
            form: Form::new(form),
            joins_nouns,
            joins_phrases,
        }
    }

    /// Whether this conjunction supports the requested join.
    #[must_use]
    pub fn joins(&self, join: ConjunctionJoin) -> bool {
        match join {
            ConjunctionJoin::Nouns => self.joins_nouns,
            ConjunctionJoin::Phrases => self.joins_phrases,
        }
    }
}

/// A verb of speaking ("says", "whispers").
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SpeechVerb {
    /// The speech verb's form.
    pub form: Form,
}

impl SpeechVerb {
    /// Creates a speech verb.
    #[must_use]
    pub fn new(form: impl Into<String>) -> Self {
        Self {
            form: Form::new(form),
        }
    }
}

/// The lexicon category a word belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordKind {
    /// Common nouns.
    Noun,
    /// Proper nouns.
    ProperNoun,
    /// Verbs.
    Verb,
    /// Adjectives.
    Adjective,
    /// Adverbs.
    Adverb,
    /// Prepositions.
    Preposition,
    /// Article sets.
    Article,
    /// Demonstrative determiners.
    Demonstrative,
    /// Possessive determiners.
    PersonalPronoun,
    /// Cardinal number words.
    Cardinal,
    /// Indefinite pronouns.
    IndefinitePronoun,
    /// Interrogative auxiliaries.
    Interrogative,
    /// Conjunctions.
    Conjunction,
    /// Speech verbs.
    SpeechVerb,
}

/// Identifies one lexicon entry, for anti-repetition tracking.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct WordId {
    /// The entry's category.
    pub kind: WordKind,
    /// The entry's index within its category.
    pub index: usize,
}

impl WordId {
    /// Creates a word id.
    #[must_use]
    pub fn new(kind: WordKind, index: usize) -> Self {
        Self { kind, index }
    }
}
