//! Post-resolution text mutators.
//!
//! Mutators run strictly after word resolution, in caller-specified order,
//! against the resolved text with its trailing delimiter still present; the
//! facade re-trims afterward. The reference implementations assume a
//! whitespace delimiter.

use prattle_foundation::RandomSource;

/// An in-place transform of a resolved phrase.
pub trait Mutator {
    /// Mutates the phrase. The trailing delimiter is still present.
    fn mutate(&self, phrase: &mut String, rng: &mut dyn RandomSource);
}

/// How [`UppercaseMutator`] capitalizes a chosen word.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum UppercaseStyle {
    /// Uppercase the word's first character only.
    WordStart,
    /// Uppercase the whole word.
    WholeWord,
}

/// Uppercases randomly chosen words.
///
/// Each of the `count` draws picks a word uniformly; a word drawn twice is
/// capitalized twice, which is a no-op the second time.
#[derive(Clone, Copy, Debug)]
pub struct UppercaseMutator {
    /// How chosen words are capitalized.
    pub style: UppercaseStyle,
    /// How many draws to make.
    pub count: usize,
}

impl Mutator for UppercaseMutator {
    fn mutate(&self, phrase: &mut String, rng: &mut dyn RandomSource) {
        let mut words: Vec<String> = phrase.split(' ').map(str::to_string).collect();
        let candidates: Vec<usize> = words
            .iter()
            .enumerate()
            .filter_map(|(index, word)| (!word.is_empty()).then_some(index))
            .collect();
        if candidates.is_empty() {
            return;
        }
        for _ in 0..self.count {
            let index = candidates[rng.next(candidates.len())];
            words[index] = match self.style {
                UppercaseStyle::WholeWord => words[index].to_uppercase(),
                UppercaseStyle::WordStart => {
                    let mut chars = words[index].chars();
                    chars.next().map_or_else(String::new, |first| {
                        first.to_uppercase().collect::<String>() + chars.as_str()
                    })
                }
            };
        }
        *phrase = words.join(" ");
    }
}

/// Where [`DigitMutator`] places its digits.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DigitPosition {
    /// Before the first word.
    Start,
    /// After the last character, past the trailing delimiter.
    End,
    /// Immediately before a randomly chosen delimiter.
    EndOfWord,
    /// At any character boundary.
    Anywhere,
}

/// Inserts random decimal digits into the phrase.
///
/// Per digit the draw order is: digit value, then placement (where the
/// placement is itself random).
#[derive(Clone, Copy, Debug)]
pub struct DigitMutator {
    /// How many digits to insert.
    pub count: usize,
    /// Where each digit lands.
    pub position: DigitPosition,
}

impl Mutator for DigitMutator {
    fn mutate(&self, phrase: &mut String, rng: &mut dyn RandomSource) {
        for _ in 0..self.count {
            let digit = char::from(b'0' + u8::try_from(rng.next(10)).unwrap_or(0));
            match self.position {
                DigitPosition::Start => phrase.insert(0, digit),
                DigitPosition::End => phrase.push(digit),
                DigitPosition::EndOfWord => {
                    let spaces: Vec<usize> = phrase
                        .char_indices()
                        .filter_map(|(offset, c)| (c == ' ').then_some(offset))
                        .collect();
                    if spaces.is_empty() {
                        phrase.push(digit);
                    } else {
                        phrase.insert(spaces[rng.next(spaces.len())], digit);
                    }
                }
                DigitPosition::Anywhere => {
                    let boundaries: Vec<usize> = (0..=phrase.len())
                        .filter(|&offset| phrase.is_char_boundary(offset))
                        .collect();
                    phrase.insert(boundaries[rng.next(boundaries.len())], digit);
                }
            }
        }
    }
}
