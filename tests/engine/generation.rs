//! End-to-end tests: clauses to templates to delimited text.

use prattle_engine::{build_templates, resolve_templates};
use prattle_foundation::ScriptedRandomSource;
use prattle_grammar::{Clause, NounClause, VerbClause};
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

fn generate(clauses: &[Clause], script: &[usize], delimiter: &str) -> String {
    let lexicon = starter_lexicon();
    let mut rng = ScriptedRandomSource::new(script.iter().copied());
    let templates = build_templates(clauses, &mut rng).expect("templates should build");
    resolve_templates(&templates, &lexicon, &mut rng, delimiter).expect("phrase should resolve")
}

#[test]
fn subject_verb_object_resolves_in_order() {
    // Build draws: tense, transitivity. Resolution draws: three words.
    let clauses = [bare_noun(), plain_verb(), bare_noun()];
    let phrase = generate(&clauses, &[0, 0, 0, 0, 0], " ");
    assert_eq!(phrase, "cat eats dog ");
}

#[test]
fn indefinite_article_agrees_with_the_next_word() {
    let clauses = [Clause::Noun(NounClause {
        common: 1,
        singular: 1,
        no_preposition: 1,
        indefinite_article: 1,
        no_cardinal: 1,
        no_adjective: 1,
        ..NounClause::default()
    })];
    // Determiner draw, noun pick, article pick at flush time.
    assert_eq!(generate(&clauses, &[0, 2, 0], " "), "an apple ");
    assert_eq!(generate(&clauses, &[0, 0, 0], " "), "a cat ");
}

#[test]
fn phonetic_override_beats_spelling_end_to_end() {
    let clauses = [Clause::Noun(NounClause {
        common: 1,
        singular: 1,
        no_preposition: 1,
        indefinite_article: 1,
        no_cardinal: 1,
        no_adjective: 1,
        ..NounClause::default()
    })];
    // Starter nouns 19 and 20 are the phonetic irregulars.
    assert_eq!(generate(&clauses, &[0, 19, 0], " "), "an hour ");
    assert_eq!(generate(&clauses, &[0, 20, 0], " "), "a unicorn ");
}

#[test]
fn forced_intransitive_drops_the_object() {
    let clauses = [
        bare_noun(),
        Clause::Verb(VerbClause {
            present: 1,
            no_adverb: 1,
            no_interrogative: 1,
            intransitive_by_no_noun_clause: 1,
            ..VerbClause::default()
        }),
        bare_noun(),
    ];
    let phrase = generate(&clauses, &[0, 0, 0, 0], " ");
    assert_eq!(phrase, "cat eats ");
}

#[test]
fn forced_demotion_keeps_the_object_behind_a_preposition() {
    let clauses = [
        bare_noun(),
        Clause::Verb(VerbClause {
            present: 1,
            no_adverb: 1,
            no_interrogative: 1,
            intransitive_by_preposition: 1,
            ..VerbClause::default()
        }),
        bare_noun(),
    ];
    // Build draws: tense, transitivity. Resolution: noun, verb, inserted
    // preposition, object noun.
    let phrase = generate(&clauses, &[0, 0, 0, 0, 0, 0], " ");
    assert_eq!(phrase, "cat eats over dog ");
}

#[test]
fn anti_repetition_walks_the_unused_entries() {
    let clauses = [bare_noun(), bare_noun(), bare_noun()];
    let phrase = generate(&clauses, &[0, 0, 0], " ");
    assert_eq!(phrase, "cat dog apple ");
}

#[test]
fn multi_word_forms_adopt_the_delimiter() {
    let clauses = [Clause::Verb(VerbClause {
        future: 1,
        no_adverb: 1,
        no_interrogative: 1,
        transitive: 1,
        ..VerbClause::default()
    })];
    let phrase = generate(&clauses, &[0, 0], "-");
    assert_eq!(phrase, "will-eat-");
}

#[test]
fn misconfigured_conjunction_surfaces_at_build_time() {
    let clauses = [
        bare_noun(),
        Clause::Conjunction(prattle_grammar::ConjunctionClause::default()),
        bare_noun(),
    ];
    let mut rng = ScriptedRandomSource::new([]);
    assert!(build_templates(&clauses, &mut rng).is_err());
}
