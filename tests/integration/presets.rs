//! Preset behavior against the starter lexicon.

use std::sync::Arc;

use prattle_foundation::{ScriptedRandomSource, SeededRandomSource};
use prattle_grammar::{Clause, DirectSpeechClause, NounClause};
use prattle_lexicon::starter_lexicon;
use prattle_runtime::{PhraseGenerator, PresetRegistry};

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
fn every_preset_generates_non_empty_phrases() {
    let registry = PresetRegistry::standard();
    let mut generator = PhraseGenerator::new(
        Arc::new(starter_lexicon()),
        SeededRandomSource::from_seed(99),
    );
    for (name, clauses) in registry.iter() {
        for _ in 0..5 {
            let phrase = generator
                .generate(clauses)
                .unwrap_or_else(|e| panic!("{name}: {e}"));
            assert!(!phrase.is_empty(), "{name} generated an empty phrase");
        }
    }
}

#[test]
fn forced_speech_emits_a_speech_verb_after_the_speaker() {
    let clauses = [
        bare_noun(),
        Clause::DirectSpeech(DirectSpeechClause {
            speech: 1,
            no_speech: 0,
        }),
    ];
    let mut generator = PhraseGenerator::new(
        Arc::new(starter_lexicon()),
        ScriptedRandomSource::new([0, 0]),
    );
    assert_eq!(generator.generate(&clauses).unwrap(), "cat says");
}

#[test]
fn forced_silence_retracts_the_speaker() {
    let clauses = [
        bare_noun(),
        Clause::DirectSpeech(DirectSpeechClause {
            speech: 0,
            no_speech: 1,
        }),
    ];
    let mut generator = PhraseGenerator::new(
        Arc::new(starter_lexicon()),
        ScriptedRandomSource::new([]),
    );
    assert_eq!(generator.generate(&clauses).unwrap(), "");
}

#[test]
fn word_salad_counts_the_whole_form_universe() {
    let registry = PresetRegistry::standard();
    let lexicon = starter_lexicon();
    let generator = PhraseGenerator::new(
        Arc::new(lexicon.clone()),
        SeededRandomSource::from_seed(0),
    );
    let combos = generator
        .combinations(registry.get("word-salad-4").unwrap())
        .unwrap();
    #[allow(clippy::cast_precision_loss)]
    let per_slot = lexicon.total_form_count() as f64;
    assert_eq!(combos.longest, per_slot.powi(4));
    assert_eq!(combos.shortest, combos.longest);
    assert_eq!(combos.average, Some(combos.longest));
}

#[test]
fn union_of_presets_blends_entropy() {
    let registry = PresetRegistry::standard();
    let generator = PhraseGenerator::new(
        Arc::new(starter_lexicon()),
        SeededRandomSource::from_seed(0),
    );
    let normal = registry.get("normal").unwrap();
    let salad = registry.get("word-salad-4").unwrap();
    let union = generator.combinations_any_of(&[normal, salad]).unwrap();
    let normal_only = generator.combinations(normal).unwrap();
    let salad_only = generator.combinations(salad).unwrap();
    assert_eq!(union.longest, normal_only.longest + salad_only.longest);
    assert_eq!(union.shortest, normal_only.shortest.min(salad_only.shortest));
    let expected_bits = (normal_only.average_bits() + salad_only.average_bits()) / 2.0;
    assert!((union.average_bits() - expected_bits).abs() < 1e-9);
}
