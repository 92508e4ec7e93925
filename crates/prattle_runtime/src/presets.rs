//! Named phrase descriptions shipped with the runtime.
//!
//! The registry is constructed once by [`PresetRegistry::standard`] and
//! passed explicitly to consumers; there is no global initialization.

use std::collections::BTreeMap;

use prattle_grammar::{AnyWordClause, Clause, DirectSpeechClause, NounClause, VerbClause};

/// An immutable map of named phrase descriptions.
#[derive(Clone, Debug, Default)]
pub struct PresetRegistry {
    presets: BTreeMap<String, Vec<Clause>>,
}

impl PresetRegistry {
    /// The presets shipped with the runtime.
    ///
    /// `normal`, `strong`, and `insane` are noun-verb-noun descriptions with
    /// increasingly liberal decoration weights; `word-salad-4` is four
    /// ungrammatical any-word slots; `spoken` puts a speaker in front of a
    /// sentence and sometimes retracts it.
    #[must_use]
    pub fn standard() -> Self {
        let mut presets = BTreeMap::new();
        presets.insert("normal".to_string(), normal());
        presets.insert("strong".to_string(), strong());
        presets.insert("insane".to_string(), insane());
        presets.insert("word-salad-4".to_string(), word_salad(4));
        presets.insert("spoken".to_string(), spoken());
        Self { presets }
    }

    /// Looks up a preset by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[Clause]> {
        self.presets.get(name).map(Vec::as_slice)
    }

    /// The preset names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.presets.keys().map(String::as_str)
    }

    /// Iterates presets in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[Clause])> {
        self.presets
            .iter()
            .map(|(name, clauses)| (name.as_str(), clauses.as_slice()))
    }

    /// Number of presets.
    #[must_use]
    pub fn len(&self) -> usize {
        self.presets.len()
    }

    /// Whether the registry holds no presets.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.presets.is_empty()
    }
}

fn normal() -> Vec<Clause> {
    let noun = NounClause {
        common: 1,
        singular: 2,
        plural: 1,
        no_preposition: 1,
        no_article: 1,
        definite_article: 1,
        indefinite_article: 1,
        no_cardinal: 1,
        no_adjective: 1,
        ..NounClause::default()
    };
    let verb = VerbClause {
        present: 2,
        past: 2,
        no_adverb: 1,
        no_interrogative: 1,
        transitive: 1,
        ..VerbClause::default()
    };
    vec![
        Clause::Noun(noun.clone()),
        Clause::Verb(verb),
        Clause::Noun(noun),
    ]
}

fn strong() -> Vec<Clause> {
    let noun = NounClause {
        common: 8,
        proper: 1,
        from_adjective: 1,
        preposition: 1,
        no_preposition: 3,
        singular: 2,
        plural: 1,
        no_article: 1,
        definite_article: 2,
        indefinite_article: 2,
        demonstrative: 1,
        personal_pronoun: 1,
        cardinal: 1,
        no_cardinal: 3,
        adjective: 1,
        no_adjective: 2,
    };
    let verb = VerbClause {
        present: 3,
        past: 3,
        future: 1,
        continuous: 1,
        continuous_past: 1,
        perfect: 1,
        subjunctive: 1,
        adverb: 1,
        no_adverb: 2,
        interrogative: 1,
        no_interrogative: 9,
        transitive: 3,
        intransitive_by_no_noun_clause: 1,
        intransitive_by_preposition: 1,
    };
    vec![
        Clause::Noun(noun.clone()),
        Clause::Verb(verb),
        Clause::Noun(noun),
    ]
}

fn insane() -> Vec<Clause> {
    let noun = NounClause {
        common: 1,
        proper: 1,
        from_adjective: 1,
        preposition: 1,
        no_preposition: 1,
        singular: 1,
        plural: 1,
        no_article: 1,
        definite_article: 1,
        indefinite_article: 1,
        demonstrative: 1,
        personal_pronoun: 1,
        cardinal: 1,
        no_cardinal: 1,
        adjective: 1,
        no_adjective: 1,
    };
    let verb = VerbClause {
        present: 1,
        past: 1,
        future: 1,
        continuous: 1,
        continuous_past: 1,
        perfect: 1,
        subjunctive: 1,
        adverb: 1,
        no_adverb: 1,
        interrogative: 1,
        no_interrogative: 3,
        transitive: 2,
        intransitive_by_no_noun_clause: 1,
        intransitive_by_preposition: 1,
    };
    vec![
        Clause::Noun(noun.clone()),
        Clause::Verb(verb),
        Clause::Noun(noun),
    ]
}

fn word_salad(count: usize) -> Vec<Clause> {
    (0..count)
        .map(|_| Clause::AnyWord(AnyWordClause::default()))
        .collect()
}

fn spoken() -> Vec<Clause> {
    let speaker = NounClause {
        common: 1,
        proper: 2,
        singular: 1,
        no_preposition: 1,
        definite_article: 1,
        no_cardinal: 1,
        no_adjective: 1,
        ..NounClause::default()
    };
    let mut clauses = vec![
        Clause::Noun(speaker),
        Clause::DirectSpeech(DirectSpeechClause {
            speech: 3,
            no_speech: 1,
        }),
    ];
    clauses.extend(normal());
    clauses
}
