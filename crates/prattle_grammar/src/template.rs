//! Unresolved, grammatically-tagged word requests.
//!
//! A [`WordSlotTemplate`] asks for exactly one concrete word of a given
//! shape. Clauses produce them; the word resolver consumes them. They are
//! ephemeral, owned by the template-builder's output sequence.

use prattle_lexicon::{ConjunctionJoin, Tense};

/// A request for one concrete word with a grammatical shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum WordSlotTemplate {
    /// A common noun of the given plurality.
    Noun {
        /// Whether the plural form is requested.
        is_plural: bool,
    },
    /// A proper noun.
    ProperNoun,
    /// An article whose final form is deferred until the next word is known.
    Article {
        /// Definite ("the") or indefinite ("a"/"an").
        is_definite: bool,
    },
    /// A demonstrative determiner.
    Demonstrative {
        /// Whether the plural form is requested.
        is_plural: bool,
    },
    /// A possessive determiner.
    PersonalPronoun {
        /// Plurality of the determined noun.
        is_plural: bool,
    },
    /// A cardinal number word.
    Cardinal {
        /// Whether the counted noun is plural.
        is_plural: bool,
    },
    /// An adjective.
    Adjective,
    /// An adverb.
    Adverb,
    /// A preposition.
    Preposition,
    /// A verb of the given tense, agreeing with the subject's plurality.
    Verb {
        /// The requested tense.
        tense: Tense,
        /// Whether the subject is plural.
        is_plural: bool,
    },
    /// An interrogative auxiliary agreeing with the subject.
    Interrogative {
        /// Whether the subject is plural.
        is_plural: bool,
    },
    /// A conjunction with the given joining role.
    Conjunction {
        /// What the conjunction separates.
        join: ConjunctionJoin,
    },
    /// A verb of speaking.
    SpeechVerb,
    /// An indefinite pronoun.
    IndefinitePronoun {
        /// Whether the plural form is requested.
        is_plural: bool,
        /// Person ("someone") or thing ("something").
        is_personal: bool,
    },
    /// Any word form from the whole lexicon, irrespective of category.
    AnyWord,
}

impl WordSlotTemplate {
    /// Whether this template belongs to a noun phrase.
    ///
    /// This is the exhaustive membership list used by retraction and by
    /// preposition insertion: Noun, ProperNoun, Adjective, Article,
    /// Demonstrative, PersonalPronoun, Cardinal, Preposition,
    /// IndefinitePronoun.
    #[must_use]
    pub fn is_noun_phrase_part(&self) -> bool {
        matches!(
            self,
            Self::Noun { .. }
                | Self::ProperNoun
                | Self::Adjective
                | Self::Article { .. }
                | Self::Demonstrative { .. }
                | Self::PersonalPronoun { .. }
                | Self::Cardinal { .. }
                | Self::Preposition
                | Self::IndefinitePronoun { .. }
        )
    }

    /// The plurality this template asserts for its head word, if any.
    ///
    /// Used by verb agreement: the nearest preceding plurality-bearing
    /// template in the unit decides the verb form. Proper nouns are always
    /// singular.
    #[must_use]
    pub fn plurality(&self) -> Option<bool> {
        match self {
            Self::Noun { is_plural } | Self::IndefinitePronoun { is_plural, .. } => {
                Some(*is_plural)
            }
            Self::ProperNoun => Some(false),
            _ => None,
        }
    }

    /// Whether resolving this template participates in anti-repetition.
    ///
    /// Content words do; function words (articles, determiners, cardinals,
    /// prepositions, interrogatives, indefinite pronouns, conjunctions) are
    /// excluded so their reuse is never needlessly constrained.
    #[must_use]
    pub fn tracks_repetition(&self) -> bool {
        matches!(
            self,
            Self::Noun { .. }
                | Self::ProperNoun
                | Self::Adjective
                | Self::Adverb
                | Self::Verb { .. }
                | Self::SpeechVerb
                | Self::AnyWord
        )
    }
}
