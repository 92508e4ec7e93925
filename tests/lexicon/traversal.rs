//! Tests for the global form traversal used by wildcard slots.

use prattle_lexicon::{Lexicon, Noun, SpeechVerb, Verb, WordId, WordKind, starter_lexicon};

#[test]
fn starter_total_form_count_matches_the_category_sums() {
    let lexicon = starter_lexicon();
    let expected = lexicon.noun_count() * 2
        + lexicon.proper_noun_count()
        + lexicon.verb_count() * 11
        + lexicon.adjective_count()
        + lexicon.adverb_count()
        + lexicon.preposition_count()
        + lexicon.article_count() * 3
        + lexicon.demonstrative_count() * 2
        + lexicon.personal_pronoun_count()
        + lexicon.cardinal_count(false)
        + lexicon.cardinal_count(true)
        + (lexicon.indefinite_pronoun_count(true) + lexicon.indefinite_pronoun_count(false)) * 2
        + lexicon.interrogative_count() * 2
        + lexicon.conjunctions().len()
        + lexicon.speech_verb_count();
    assert_eq!(lexicon.total_form_count(), expected);
    assert_eq!(lexicon.total_form_count(), 220);
}

#[test]
fn every_index_below_the_total_yields_a_form() {
    let lexicon = starter_lexicon();
    let total = lexicon.total_form_count();
    for index in 0..total {
        assert!(lexicon.form_at(index).is_some(), "no form at index {index}");
    }
    assert!(lexicon.form_at(total).is_none());
}

#[test]
fn traversal_visits_categories_in_declared_order() {
    let mut lexicon = Lexicon::new();
    lexicon.add_noun(Noun::new("cat", "cats"));
    lexicon.add_verb(Verb::regular("eat", "eats", "ate", "eaten", "eating"));
    lexicon.add_speech_verb(SpeechVerb::new("says"));

    let (id, form) = lexicon.form_at(0).unwrap();
    assert_eq!(id, WordId::new(WordKind::Noun, 0));
    assert_eq!(form.text, "cat");

    let (id, form) = lexicon.form_at(2).unwrap();
    assert_eq!(id, WordId::new(WordKind::Verb, 0));
    assert_eq!(form.text, "eats");

    let last = lexicon.total_form_count() - 1;
    let (id, form) = lexicon.form_at(last).unwrap();
    assert_eq!(id, WordId::new(WordKind::SpeechVerb, 0));
    assert_eq!(form.text, "says");
}

#[test]
fn shared_indices_map_to_one_entry_id() {
    let lexicon = starter_lexicon();
    // Both forms of the first noun report the same id.
    let (first, _) = lexicon.form_at(0).unwrap();
    let (second, _) = lexicon.form_at(1).unwrap();
    assert_eq!(first, second);
    // The next index starts the next entry.
    let (third, _) = lexicon.form_at(2).unwrap();
    assert_eq!(third, WordId::new(WordKind::Noun, 1));
}
