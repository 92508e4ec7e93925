//! A built-in English starter lexicon.
//!
//! Big enough to make the shipped presets interesting, small enough to read
//! in one sitting. Serious passphrase entropy wants an externally loaded
//! word list; this one backs the console, the benches, and the examples.

use crate::lexicon::Lexicon;
use crate::word::{
    Adjective, Adverb, Article, Cardinal, Conjunction, Demonstrative, Form, IndefinitePronoun,
    Interrogative, Noun, PersonalPronoun, Preposition, ProperNoun, SpeechVerb, Verb,
};

/// Builds the built-in English lexicon.
#[must_use]
#[allow(clippy::too_many_lines)]
pub fn starter_lexicon() -> Lexicon {
    let mut lexicon = Lexicon::new();

    for (singular, plural) in [
        ("cat", "cats"),
        ("dog", "dogs"),
        ("apple", "apples"),
        ("table", "tables"),
        ("mountain", "mountains"),
        ("river", "rivers"),
        ("cloud", "clouds"),
        ("stone", "stones"),
        ("garden", "gardens"),
        ("window", "windows"),
        ("engine", "engines"),
        ("island", "islands"),
        ("letter", "letters"),
        ("market", "markets"),
        ("mirror", "mirrors"),
        ("ocean", "oceans"),
        ("pencil", "pencils"),
        ("ship", "ships"),
        ("village", "villages"),
    ] {
        lexicon.add_noun(Noun::new(singular, plural));
    }
    // Spelling and sound disagree for these two.
    lexicon.add_noun(Noun::with_forms(
        Form::with_vowel_sound("hour", true),
        Form::with_vowel_sound("hours", true),
    ));
    lexicon.add_noun(Noun::with_forms(
        Form::with_vowel_sound("unicorn", false),
        Form::with_vowel_sound("unicorns", false),
    ));

    for name in ["Alice", "Bob", "London", "Paris", "Saturn", "Cairo"] {
        lexicon.add_proper_noun(ProperNoun::new(name));
    }

    for (base, third, past, participle, gerund) in [
        ("eat", "eats", "ate", "eaten", "eating"),
        ("chase", "chases", "chased", "chased", "chasing"),
        ("find", "finds", "found", "found", "finding"),
        ("watch", "watches", "watched", "watched", "watching"),
        ("carry", "carries", "carried", "carried", "carrying"),
        ("build", "builds", "built", "built", "building"),
        ("paint", "paints", "painted", "painted", "painting"),
        ("follow", "follows", "followed", "followed", "following"),
        ("borrow", "borrows", "borrowed", "borrowed", "borrowing"),
        ("admire", "admires", "admired", "admired", "admiring"),
    ] {
        lexicon.add_verb(Verb::regular(base, third, past, participle, gerund));
    }

    for adjective in [
        "red", "quiet", "enormous", "ancient", "bright", "clever", "heavy", "narrow", "golden",
        "sleepy",
    ] {
        lexicon.add_adjective(Adjective::new(adjective));
    }

    for adverb in [
        "quickly",
        "quietly",
        "eagerly",
        "slowly",
        "carefully",
        "boldly",
    ] {
        lexicon.add_adverb(Adverb::new(adverb));
    }

    for preposition in [
        "over", "under", "beside", "near", "through", "behind", "across", "inside",
    ] {
        lexicon.add_preposition(Preposition::new(preposition));
    }

    lexicon.add_article(Article::new("the", "a", "an"));

    lexicon.add_demonstrative(Demonstrative::new("this", "these"));
    lexicon.add_demonstrative(Demonstrative::new("that", "those"));

    for pronoun in ["my", "your", "our", "their"] {
        lexicon.add_personal_pronoun(PersonalPronoun::new(pronoun));
    }

    // "one" is spelled with a vowel but pronounced with a consonant sound.
    lexicon.add_cardinal(Cardinal::with_form(
        Form::with_vowel_sound("one", false),
        false,
    ));
    for number in [
        "two", "three", "four", "five", "six", "seven", "eight", "nine",
    ] {
        lexicon.add_cardinal(Cardinal::new(number, true));
    }

    lexicon.add_indefinite_pronoun(IndefinitePronoun::new("someone", "some people", true));
    lexicon.add_indefinite_pronoun(IndefinitePronoun::new("something", "some things", false));

    lexicon.add_interrogative(Interrogative::new("why does", "why do"));

    lexicon.add_conjunction(Conjunction::new("and", true, true));
    lexicon.add_conjunction(Conjunction::new("or", true, true));
    lexicon.add_conjunction(Conjunction::new("but", false, true));
    lexicon.add_conjunction(Conjunction::new("because", false, true));
    lexicon.add_conjunction(Conjunction::new("while", false, true));
    lexicon.add_conjunction(Conjunction::new("so", false, true));

    for speech_verb in ["says", "whispers", "shouts", "claims", "insists", "mutters"] {
        lexicon.add_speech_verb(SpeechVerb::new(speech_verb));
    }

    lexicon
}
