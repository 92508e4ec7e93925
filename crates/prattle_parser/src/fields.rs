//! Per-clause-type field tables.
//!
//! Each clause type declares its weight factors as a static name/accessor
//! table, built at compile time. The parser and serializer both walk these
//! tables, so a field added here is round-trippable by construction.

use prattle_grammar::{ConjunctionClause, DirectSpeechClause, NounClause, VerbClause};

/// One named weight factor of a clause type.
pub struct Field<T: 'static> {
    /// The key as it appears in the textual format.
    pub name: &'static str,
    /// Reads the factor.
    pub get: fn(&T) -> u32,
    /// Writes the factor.
    pub set: fn(&mut T, u32),
}

/// Weight factors of [`NounClause`], in serialization order.
pub const NOUN_FIELDS: &[Field<NounClause>] = &[
    Field {
        name: "common",
        get: |c| c.common,
        set: |c, v| c.common = v,
    },
    Field {
        name: "proper",
        get: |c| c.proper,
        set: |c, v| c.proper = v,
    },
    Field {
        name: "from_adjective",
        get: |c| c.from_adjective,
        set: |c, v| c.from_adjective = v,
    },
    Field {
        name: "preposition",
        get: |c| c.preposition,
        set: |c, v| c.preposition = v,
    },
    Field {
        name: "no_preposition",
        get: |c| c.no_preposition,
        set: |c, v| c.no_preposition = v,
    },
    Field {
        name: "plural",
        get: |c| c.plural,
        set: |c, v| c.plural = v,
    },
    Field {
        name: "singular",
        get: |c| c.singular,
        set: |c, v| c.singular = v,
    },
    Field {
        name: "no_article",
        get: |c| c.no_article,
        set: |c, v| c.no_article = v,
    },
    Field {
        name: "definite_article",
        get: |c| c.definite_article,
        set: |c, v| c.definite_article = v,
    },
    Field {
        name: "indefinite_article",
        get: |c| c.indefinite_article,
        set: |c, v| c.indefinite_article = v,
    },
    Field {
        name: "demonstrative",
        get: |c| c.demonstrative,
        set: |c, v| c.demonstrative = v,
    },
    Field {
        name: "personal_pronoun",
        get: |c| c.personal_pronoun,
        set: |c, v| c.personal_pronoun = v,
    },
    Field {
        name: "cardinal",
        get: |c| c.cardinal,
        set: |c, v| c.cardinal = v,
    },
    Field {
        name: "no_cardinal",
        get: |c| c.no_cardinal,
        set: |c, v| c.no_cardinal = v,
    },
    Field {
        name: "adjective",
        get: |c| c.adjective,
        set: |c, v| c.adjective = v,
    },
    Field {
        name: "no_adjective",
        get: |c| c.no_adjective,
        set: |c, v| c.no_adjective = v,
    },
];

/// Weight factors of [`VerbClause`], in serialization order.
pub const VERB_FIELDS: &[Field<VerbClause>] = &[
    Field {
        name: "present",
        get: |c| c.present,
        set: |c, v| c.present = v,
    },
    Field {
        name: "past",
        get: |c| c.past,
        set: |c, v| c.past = v,
    },
    Field {
        name: "future",
        get: |c| c.future,
        set: |c, v| c.future = v,
    },
    Field {
        name: "continuous",
        get: |c| c.continuous,
        set: |c, v| c.continuous = v,
    },
    Field {
        name: "continuous_past",
        get: |c| c.continuous_past,
        set: |c, v| c.continuous_past = v,
    },
    Field {
        name: "perfect",
        get: |c| c.perfect,
        set: |c, v| c.perfect = v,
    },
    Field {
        name: "subjunctive",
        get: |c| c.subjunctive,
        set: |c, v| c.subjunctive = v,
    },
    Field {
        name: "adverb",
        get: |c| c.adverb,
        set: |c, v| c.adverb = v,
    },
    Field {
        name: "no_adverb",
        get: |c| c.no_adverb,
        set: |c, v| c.no_adverb = v,
    },
    Field {
        name: "interrogative",
        get: |c| c.interrogative,
        set: |c, v| c.interrogative = v,
    },
    Field {
        name: "no_interrogative",
        get: |c| c.no_interrogative,
        set: |c, v| c.no_interrogative = v,
    },
    Field {
        name: "transitive",
        get: |c| c.transitive,
        set: |c, v| c.transitive = v,
    },
    Field {
        name: "intransitive_by_no_noun_clause",
        get: |c| c.intransitive_by_no_noun_clause,
        set: |c, v| c.intransitive_by_no_noun_clause = v,
    },
    Field {
        name: "intransitive_by_preposition",
        get: |c| c.intransitive_by_preposition,
        set: |c, v| c.intransitive_by_preposition = v,
    },
];

/// Weight factors of [`ConjunctionClause`], in serialization order.
pub const CONJUNCTION_FIELDS: &[Field<ConjunctionClause>] = &[
    Field {
        name: "joining_noun",
        get: |c| c.joining_noun,
        set: |c, v| c.joining_noun = v,
    },
    Field {
        name: "joining_phrase",
        get: |c| c.joining_phrase,
        set: |c, v| c.joining_phrase = v,
    },
];

/// Weight factors of [`DirectSpeechClause`], in serialization order.
pub const SPEECH_FIELDS: &[Field<DirectSpeechClause>] = &[
    Field {
        name: "speech",
        get: |c| c.speech,
        set: |c, v| c.speech = v,
    },
    Field {
        name: "no_speech",
        get: |c| c.no_speech,
        set: |c, v| c.no_speech = v,
    },
];
