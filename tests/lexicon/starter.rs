//! Tests for the built-in starter lexicon.

use prattle_lexicon::{ConjunctionJoin, Tense, starter_lexicon};

#[test]
fn starter_category_counts() {
    let lexicon = starter_lexicon();
    assert_eq!(lexicon.noun_count(), 21);
    assert_eq!(lexicon.proper_noun_count(), 6);
    assert_eq!(lexicon.verb_count(), 10);
    assert_eq!(lexicon.adjective_count(), 10);
    assert_eq!(lexicon.adverb_count(), 6);
    assert_eq!(lexicon.preposition_count(), 8);
    assert_eq!(lexicon.article_count(), 1);
    assert_eq!(lexicon.demonstrative_count(), 2);
    assert_eq!(lexicon.personal_pronoun_count(), 4);
    assert_eq!(lexicon.cardinal_count(false), 1);
    assert_eq!(lexicon.cardinal_count(true), 8);
    assert_eq!(lexicon.indefinite_pronoun_count(true), 1);
    assert_eq!(lexicon.indefinite_pronoun_count(false), 1);
    assert_eq!(lexicon.interrogative_count(), 1);
    assert_eq!(lexicon.speech_verb_count(), 6);
}

#[test]
fn only_and_and_or_join_nouns() {
    let lexicon = starter_lexicon();
    assert_eq!(lexicon.conjunction_count(ConjunctionJoin::Nouns), 2);
    assert_eq!(lexicon.conjunction_count(ConjunctionJoin::Phrases), 6);
    for conjunction in lexicon.conjunctions() {
        if conjunction.joins(ConjunctionJoin::Nouns) {
            assert!(
                conjunction.form.text == "and" || conjunction.form.text == "or",
                "unexpected noun-joining conjunction: {}",
                conjunction.form.text
            );
        }
    }
}

#[test]
fn starter_verbs_carry_all_eleven_forms() {
    let lexicon = starter_lexicon();
    for verb in lexicon.verbs() {
        for tense in Tense::ALL {
            for is_plural in [false, true] {
                assert!(!verb.form(tense, is_plural).text.is_empty());
            }
        }
    }
}

#[test]
fn no_starter_form_is_empty_or_padded() {
    let lexicon = starter_lexicon();
    for index in 0..lexicon.total_form_count() {
        let (_, form) = lexicon.form_at(index).unwrap();
        assert!(!form.text.is_empty());
        assert_eq!(form.text, form.text.trim());
    }
}
