//! The facade pipeline end to end: resolve, mutate, trim.

use std::sync::Arc;

use prattle_foundation::{ScriptedRandomSource, SeededRandomSource};
use prattle_grammar::{Clause, NounClause};
use prattle_lexicon::starter_lexicon;
use prattle_parser::parse;
use prattle_runtime::{
    Console, DigitMutator, DigitPosition, PhraseGenerator, ScriptedEditor, UppercaseMutator,
    UppercaseStyle,
};

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

#[test]
fn uppercase_runs_before_the_trailing_trim() {
    let mut generator = PhraseGenerator::new(
        Arc::new(starter_lexicon()),
        ScriptedRandomSource::new([0, 0, 1]),
    );
    generator.add_mutator(Box::new(UppercaseMutator {
        style: UppercaseStyle::WordStart,
        count: 1,
    }));
    let phrase = generator.generate(&[bare_noun(), bare_noun()]).unwrap();
    assert_eq!(phrase, "cat Dog");
}

#[test]
fn end_of_word_digit_lands_inside_the_phrase() {
    let mut generator = PhraseGenerator::new(
        Arc::new(starter_lexicon()),
        ScriptedRandomSource::new([0, 0, 5, 0]),
    );
    generator.add_mutator(Box::new(DigitMutator {
        count: 1,
        position: DigitPosition::EndOfWord,
    }));
    let phrase = generator.generate(&[bare_noun(), bare_noun()]).unwrap();
    assert_eq!(phrase, "cat5 dog");
}

#[test]
fn chained_mutators_apply_in_registration_order() {
    let mut generator = PhraseGenerator::new(
        Arc::new(starter_lexicon()),
        ScriptedRandomSource::new([0, 0, 1, 5, 0]),
    );
    generator.add_mutator(Box::new(UppercaseMutator {
        style: UppercaseStyle::WordStart,
        count: 1,
    }));
    generator.add_mutator(Box::new(DigitMutator {
        count: 1,
        position: DigitPosition::EndOfWord,
    }));
    let phrase = generator.generate(&[bare_noun(), bare_noun()]).unwrap();
    assert_eq!(phrase, "cat5 Dog");
}

#[test]
fn seeded_mutated_phrases_replay() {
    let clauses = [bare_noun(), bare_noun(), bare_noun()];
    let mut phrases = Vec::new();
    for _ in 0..2 {
        let mut generator = PhraseGenerator::new(
            Arc::new(starter_lexicon()),
            SeededRandomSource::from_seed(5),
        );
        generator.add_mutator(Box::new(UppercaseMutator {
            style: UppercaseStyle::WholeWord,
            count: 2,
        }));
        generator.add_mutator(Box::new(DigitMutator {
            count: 2,
            position: DigitPosition::Anywhere,
        }));
        phrases.push(generator.generate(&clauses).unwrap());
    }
    assert_eq!(phrases[0], phrases[1]);
    assert_eq!(
        phrases[0].chars().filter(char::is_ascii_digit).count(),
        2,
        "both digits should survive the trim: {}",
        phrases[0]
    );
}

#[test]
fn maximal_parsed_weights_survive_the_whole_pipeline() {
    // Every weight at u32::MAX is parser-accepted input; the weight sums
    // behind each draw must widen rather than wrap.
    let max = u32::MAX;
    let description = format!(
        "Noun = {{ common -> {max}, proper -> {max}, from_adjective -> {max}, \
         preposition -> {max}, no_preposition -> {max}, plural -> {max}, \
         singular -> {max}, no_article -> {max}, definite_article -> {max}, \
         indefinite_article -> {max}, demonstrative -> {max}, \
         personal_pronoun -> {max}, cardinal -> {max}, no_cardinal -> {max}, \
         adjective -> {max}, no_adjective -> {max} }}\n\
         Verb = {{ present -> {max}, past -> {max}, future -> {max}, \
         continuous -> {max}, continuous_past -> {max}, perfect -> {max}, \
         subjunctive -> {max}, adverb -> {max}, no_adverb -> {max}, \
         interrogative -> {max}, no_interrogative -> {max}, \
         transitive -> {max}, intransitive_by_no_noun_clause -> {max}, \
         intransitive_by_preposition -> {max} }}"
    );
    let clauses = parse(&description).unwrap();
    let mut generator = PhraseGenerator::new(
        Arc::new(starter_lexicon()),
        SeededRandomSource::from_seed(42),
    );
    for _ in 0..16 {
        let phrase = generator.generate(&clauses).unwrap();
        assert!(!phrase.is_empty());
    }
    let combos = generator.combinations(&clauses).unwrap();
    assert!(combos.longest.is_finite());
}

#[test]
fn console_delimiter_applies_to_generation() {
    let mut console = Console::with_editor(ScriptedEditor::new(Vec::<String>::new()));
    console.execute("seed 11");
    console.execute("delimiter -");
    let response = console.execute("generate");
    assert_eq!(response.lines.len(), 1);
    let phrase = &response.lines[0];
    assert!(phrase.contains('-'), "no delimiter in {phrase}");
    assert!(!phrase.contains(' '), "stray space in {phrase}");
    assert!(!phrase.ends_with('-'), "untrimmed delimiter in {phrase}");
}

#[test]
fn scripted_session_with_every_command_completes() {
    let editor = ScriptedEditor::new([
        "help",
        "presets",
        "preset strong",
        "seed 3",
        "generate 3",
        "combinations",
        "describe",
        "description Noun = { common -> 1, singular -> 1 }",
        "delimiter .",
        "generate",
        "nonsense",
        "quit",
    ]);
    let mut console = Console::with_editor(editor);
    console.run().unwrap();
}
