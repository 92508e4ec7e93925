//! Counting parity: the closed form matches what generation can produce.

use prattle_engine::calculate_combinations;
use prattle_foundation::PhraseCombinations;
use prattle_grammar::{Clause, ConjunctionClause, NounClause, VerbClause};
use prattle_lexicon::starter_lexicon;

fn bare_noun() -> Clause {
    Clause::Noun(NounClause {
        common: 1,
        singular: 1,
        no_preposition: 1,
        no_article: 1,
        no_cardinal: 1,
        no_adjective: 1,
        ..NounClause::default()
    })
}

fn plain_verb() -> Clause {
    Clause::Verb(VerbClause {
        present: 1,
        no_adverb: 1,
        no_interrogative: 1,
        transitive: 1,
        ..VerbClause::default()
    })
}

#[test]
fn empty_description_counts_one() {
    let lexicon = starter_lexicon();
    assert_eq!(
        calculate_combinations(&[], &lexicon).unwrap(),
        PhraseCombinations::ONE
    );
}

#[test]
fn subject_verb_object_is_a_pure_product() {
    let lexicon = starter_lexicon();
    let clauses = [bare_noun(), plain_verb(), bare_noun()];
    let combos = calculate_combinations(&clauses, &lexicon).unwrap();
    // 21 nouns x 10 verbs x 21 nouns.
    assert_eq!(combos, PhraseCombinations::fixed(4410));
}

#[test]
fn always_on_decorations_multiply_exactly() {
    let lexicon = starter_lexicon();
    let decorated = Clause::Noun(NounClause {
        common: 1,
        singular: 1,
        no_preposition: 1,
        definite_article: 1,
        no_cardinal: 1,
        adjective: 1,
        ..NounClause::default()
    });
    let clauses = [decorated, plain_verb()];
    let combos = calculate_combinations(&clauses, &lexicon).unwrap();
    // (1 article x 10 adjectives x 21 nouns) x 10 verbs.
    assert_eq!(combos, PhraseCombinations::fixed(2100));
}

#[test]
fn entropy_of_a_fixed_count_is_its_log() {
    let lexicon = starter_lexicon();
    let clauses = [bare_noun(), plain_verb(), bare_noun()];
    let combos = calculate_combinations(&clauses, &lexicon).unwrap();
    let bits = combos.average_bits();
    assert!((bits - 4410.0f64.log2()).abs() < 1e-9);
}

#[test]
fn configuration_errors_propagate() {
    let lexicon = starter_lexicon();
    let clauses = [
        bare_noun(),
        Clause::Conjunction(ConjunctionClause::default()),
        bare_noun(),
    ];
    assert!(calculate_combinations(&clauses, &lexicon).is_err());
}
