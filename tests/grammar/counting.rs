//! Tests for clause-level counting against the starter lexicon.

use prattle_foundation::PhraseCombinations;
use prattle_grammar::{
    AnyWordClause, Clause, ConjunctionClause, DirectSpeechClause, NounClause, VerbClause,
};
use prattle_lexicon::starter_lexicon;

#[test]
fn bare_noun_counts_the_noun_list() {
    let clause = Clause::Noun(NounClause {
        common: 1,
        singular: 1,
        no_preposition: 1,
        no_article: 1,
        no_cardinal: 1,
        no_adjective: 1,
        ..NounClause::default()
    });
    let lexicon = starter_lexicon();
    assert_eq!(
        clause.count_combinations(&lexicon).unwrap(),
        PhraseCombinations::fixed(lexicon.noun_count())
    );
}

#[test]
fn single_tense_verb_counts_the_verb_list() {
    let clause = Clause::Verb(VerbClause {
        present: 1,
        no_adverb: 1,
        no_interrogative: 1,
        transitive: 1,
        ..VerbClause::default()
    });
    let lexicon = starter_lexicon();
    assert_eq!(
        clause.count_combinations(&lexicon).unwrap(),
        PhraseCombinations::fixed(lexicon.verb_count())
    );
}

#[test]
fn rearranging_factors_never_change_the_count() {
    // Interrogative inversion and transitivity move templates around but
    // choose no words; the count must not see them.
    let lexicon = starter_lexicon();
    let plain = Clause::Verb(VerbClause {
        present: 1,
        past: 1,
        adverb: 1,
        no_adverb: 1,
        ..VerbClause::default()
    });
    let rearranging = Clause::Verb(VerbClause {
        present: 1,
        past: 1,
        adverb: 1,
        no_adverb: 1,
        interrogative: 7,
        no_interrogative: 2,
        transitive: 1,
        intransitive_by_no_noun_clause: 5,
        intransitive_by_preposition: 3,
        ..VerbClause::default()
    });
    assert_eq!(
        plain.count_combinations(&lexicon).unwrap(),
        rearranging.count_combinations(&lexicon).unwrap()
    );
}

#[test]
fn conjunction_counts_only_the_matching_join() {
    let lexicon = starter_lexicon();
    let nouns = Clause::Conjunction(ConjunctionClause {
        joining_noun: 1,
        joining_phrase: 0,
    });
    let phrases = Clause::Conjunction(ConjunctionClause {
        joining_noun: 0,
        joining_phrase: 1,
    });
    assert_eq!(
        nouns.count_combinations(&lexicon).unwrap(),
        PhraseCombinations::fixed(2)
    );
    assert_eq!(
        phrases.count_combinations(&lexicon).unwrap(),
        PhraseCombinations::fixed(6)
    );
}

#[test]
fn speech_is_an_optional_factor_over_speech_verbs() {
    let lexicon = starter_lexicon();
    let clause = Clause::DirectSpeech(DirectSpeechClause {
        speech: 1,
        no_speech: 1,
    });
    let combos = clause.count_combinations(&lexicon).unwrap();
    assert_eq!(combos.shortest, 1.0);
    assert_eq!(combos.longest, 6.0);
    assert_eq!(combos.average, Some(3.5));
}

#[test]
fn any_word_counts_every_surface_form() {
    let lexicon = starter_lexicon();
    let clause = Clause::AnyWord(AnyWordClause::default());
    assert_eq!(
        clause.count_combinations(&lexicon).unwrap(),
        PhraseCombinations::fixed(lexicon.total_form_count())
    );
}
