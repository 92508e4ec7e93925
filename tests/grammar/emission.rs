//! Tests for clause template emission through the `Clause` dispatcher.

use prattle_foundation::ScriptedRandomSource;
use prattle_grammar::{
    Clause, ConjunctionClause, DirectSpeechClause, NounClause, TemplateOp, TemplateSequence,
    UnitInfo, VerbClause, WordSlotTemplate,
};
use prattle_lexicon::starter_lexicon;

fn emit(clause: &Clause, rng: &mut ScriptedRandomSource) -> Vec<WordSlotTemplate> {
    let mut sequence = TemplateSequence::new();
    let ops = clause
        .add_word_template(rng, &sequence)
        .expect("clause should emit");
    sequence.apply_all(ops);
    sequence.into_templates()
}

// =============================================================================
// Noun Clause Draw Order
// =============================================================================

#[test]
fn common_path_draws_in_documented_order() {
    // Every group is a real draw: path, preposition, plurality, determiner,
    // cardinal, adjective.
    let clause = Clause::Noun(NounClause {
        common: 1,
        proper: 1,
        from_adjective: 1,
        preposition: 1,
        no_preposition: 1,
        plural: 1,
        singular: 1,
        definite_article: 1,
        indefinite_article: 1,
        cardinal: 1,
        no_cardinal: 1,
        adjective: 1,
        no_adjective: 1,
        ..NounClause::default()
    });
    let mut rng = ScriptedRandomSource::new([0, 0, 1, 0, 0, 1]);
    let templates = emit(&clause, &mut rng);
    assert_eq!(
        templates,
        vec![
            WordSlotTemplate::Preposition,
            WordSlotTemplate::Article { is_definite: true },
            WordSlotTemplate::Cardinal { is_plural: false },
            WordSlotTemplate::Noun { is_plural: false },
        ]
    );
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn proper_path_consumes_exactly_two_draws() {
    let clause = Clause::Noun(NounClause {
        common: 1,
        proper: 1,
        from_adjective: 1,
        preposition: 9,
        adjective: 9,
        ..NounClause::default()
    });
    let mut rng = ScriptedRandomSource::new([2, 0]);
    let templates = emit(&clause, &mut rng);
    assert_eq!(templates, vec![WordSlotTemplate::ProperNoun]);
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn adjective_path_ends_with_a_personhood_flip() {
    let clause = Clause::Noun(NounClause {
        common: 1,
        proper: 1,
        from_adjective: 1,
        preposition: 1,
        no_preposition: 1,
        plural: 1,
        singular: 1,
        definite_article: 1,
        ..NounClause::default()
    });
    let mut rng = ScriptedRandomSource::new([2, 1, 1, 0, 0, 0]);
    let templates = emit(&clause, &mut rng);
    assert_eq!(
        templates,
        vec![
            WordSlotTemplate::Article { is_definite: true },
            WordSlotTemplate::Adjective,
            WordSlotTemplate::IndefinitePronoun {
                is_plural: true,
                is_personal: true,
            },
        ]
    );
    assert_eq!(rng.remaining(), 0);
}

// =============================================================================
// Verb Clause
// =============================================================================

#[test]
fn single_reachable_tense_still_consumes_a_draw() {
    let clause = Clause::Verb(VerbClause {
        past: 1,
        no_adverb: 1,
        no_interrogative: 1,
        ..VerbClause::default()
    });
    let mut rng = ScriptedRandomSource::new([0]);
    let templates = emit(&clause, &mut rng);
    assert_eq!(
        templates,
        vec![WordSlotTemplate::Verb {
            tense: prattle_lexicon::Tense::Past,
            is_plural: false,
        }]
    );
    assert_eq!(rng.remaining(), 0);
}

#[test]
fn non_verb_clauses_have_an_empty_second_pass() {
    let unit = UnitInfo {
        has_object_noun: true,
    };
    let clauses = [
        Clause::Noun(NounClause::default()),
        Clause::DirectSpeech(DirectSpeechClause::default()),
        Clause::AnyWord(prattle_grammar::AnyWordClause::default()),
    ];
    for clause in &clauses {
        let mut rng = ScriptedRandomSource::new([5]);
        let ops = clause
            .second_pass_of_word_template(&mut rng, &TemplateSequence::new(), &unit)
            .unwrap();
        assert!(ops.is_empty());
        assert_eq!(rng.remaining(), 1);
    }
}

// =============================================================================
// Conjunction and Speech
// =============================================================================

#[test]
fn misconfigured_conjunction_fails_at_emission_and_counting() {
    let both = Clause::Conjunction(ConjunctionClause {
        joining_noun: 1,
        joining_phrase: 1,
    });
    let neither = Clause::Conjunction(ConjunctionClause::default());
    let lexicon = starter_lexicon();
    let mut rng = ScriptedRandomSource::new([]);
    assert!(
        both.add_word_template(&mut rng, &TemplateSequence::new())
            .is_err()
    );
    assert!(neither.count_combinations(&lexicon).is_err());
}

#[test]
fn speech_retraction_clears_the_preceding_noun_phrase() {
    let mut sequence = TemplateSequence::new();
    sequence.apply(TemplateOp::Append(vec![
        WordSlotTemplate::Article { is_definite: true },
        WordSlotTemplate::Noun { is_plural: false },
    ]));
    let clause = Clause::DirectSpeech(DirectSpeechClause {
        speech: 0,
        no_speech: 1,
    });
    let mut rng = ScriptedRandomSource::new([]);
    let ops = clause.add_word_template(&mut rng, &sequence).unwrap();
    sequence.apply_all(ops);
    assert!(sequence.templates().is_empty());
}
