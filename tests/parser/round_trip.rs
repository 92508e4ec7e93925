//! Round-trip tests: `parse(serialize(clauses)) == clauses`.

use prattle_grammar::{
    AnyWordClause, Clause, ConjunctionClause, DirectSpeechClause, NounClause, VerbClause,
};
use prattle_parser::{parse, serialize};
use proptest::prelude::*;

fn noun_clause() -> impl Strategy<Value = NounClause> {
    proptest::collection::vec(0u32..100, 16).prop_map(|w| NounClause {
        common: w[0],
        proper: w[1],
        from_adjective: w[2],
        preposition: w[3],
        no_preposition: w[4],
        plural: w[5],
        singular: w[6],
        no_article: w[7],
        definite_article: w[8],
        indefinite_article: w[9],
        demonstrative: w[10],
        personal_pronoun: w[11],
        cardinal: w[12],
        no_cardinal: w[13],
        adjective: w[14],
        no_adjective: w[15],
    })
}

fn verb_clause() -> impl Strategy<Value = VerbClause> {
    proptest::collection::vec(0u32..100, 14).prop_map(|w| VerbClause {
        present: w[0],
        past: w[1],
        future: w[2],
        continuous: w[3],
        continuous_past: w[4],
        perfect: w[5],
        subjunctive: w[6],
        adverb: w[7],
        no_adverb: w[8],
        interrogative: w[9],
        no_interrogative: w[10],
        transitive: w[11],
        intransitive_by_no_noun_clause: w[12],
        intransitive_by_preposition: w[13],
    })
}

fn clause() -> impl Strategy<Value = Clause> {
    prop_oneof![
        noun_clause().prop_map(Clause::Noun),
        verb_clause().prop_map(Clause::Verb),
        (0u32..100, 0u32..100).prop_map(|(joining_noun, joining_phrase)| {
            Clause::Conjunction(ConjunctionClause {
                joining_noun,
                joining_phrase,
            })
        }),
        (0u32..100, 0u32..100).prop_map(|(speech, no_speech)| {
            Clause::DirectSpeech(DirectSpeechClause { speech, no_speech })
        }),
        Just(Clause::AnyWord(AnyWordClause::default())),
    ]
}

proptest! {
    #[test]
    fn every_description_round_trips(clauses in proptest::collection::vec(clause(), 0..6)) {
        let text = serialize(&clauses);
        let reparsed = parse(&text).expect("serializer output should always parse");
        prop_assert_eq!(reparsed, clauses);
    }
}

#[test]
fn serializer_emits_one_line_per_clause() {
    let clauses = vec![
        Clause::Noun(NounClause {
            common: 1,
            singular: 2,
            ..NounClause::default()
        }),
        Clause::Verb(VerbClause {
            present: 3,
            ..VerbClause::default()
        }),
        Clause::AnyWord(AnyWordClause::default()),
    ];
    let text = serialize(&clauses);
    let lines: Vec<&str> = text.lines().collect();
    assert_eq!(lines.len(), 3);
    assert_eq!(lines[0], "Noun = { common -> 1, singular -> 2 }");
    assert_eq!(lines[1], "Verb = { present -> 3 }");
    assert_eq!(lines[2], "AnyWord = { }");
}

#[test]
fn whitespace_is_insignificant() {
    let compact = parse("Noun={common->1,plural->2}").unwrap();
    let sprawling = parse("Noun  =\n  {\n    common -> 1 ,\n    plural -> 2 ,\n  }").unwrap();
    assert_eq!(compact, sprawling);
}

#[test]
fn all_zero_clauses_survive_the_round_trip() {
    // Zero factors are omitted from the text, so the reparsed defaults must
    // match the originals exactly.
    let clauses = vec![
        Clause::Noun(NounClause::default()),
        Clause::Verb(VerbClause::default()),
        Clause::Conjunction(ConjunctionClause::default()),
        Clause::DirectSpeech(DirectSpeechClause::default()),
    ];
    assert_eq!(parse(&serialize(&clauses)).unwrap(), clauses);
}
