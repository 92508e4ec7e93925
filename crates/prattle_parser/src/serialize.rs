//! Serializer for the phrase-description format.

use std::fmt::Write;

use prattle_grammar::Clause;

use crate::fields::{CONJUNCTION_FIELDS, Field, NOUN_FIELDS, SPEECH_FIELDS, VERB_FIELDS};

/// Serializes a clause list, one clause per line.
///
/// Zero-valued factors are omitted; the parser defaults them back to zero,
/// so `parse(serialize(clauses)) == clauses`.
#[must_use]
pub fn serialize(clauses: &[Clause]) -> String {
    let mut output = String::new();
    for (position, clause) in clauses.iter().enumerate() {
        if position > 0 {
            output.push('\n');
        }
        match clause {
            Clause::Noun(noun) => write_clause(&mut output, "Noun", noun, NOUN_FIELDS),
            Clause::Verb(verb) => write_clause(&mut output, "Verb", verb, VERB_FIELDS),
            Clause::Conjunction(conjunction) => {
                write_clause(&mut output, "Conjunction", conjunction, CONJUNCTION_FIELDS);
            }
            Clause::DirectSpeech(speech) => {
                write_clause(&mut output, "DirectSpeech", speech, SPEECH_FIELDS);
            }
            Clause::AnyWord(any_word) => write_clause(&mut output, "AnyWord", any_word, &[]),
        }
    }
    output
}

fn write_clause<T>(output: &mut String, tag: &str, clause: &T, fields: &[Field<T>]) {
    let _ = write!(output, "{tag} = {{");
    let mut first = true;
    for field in fields {
        let value = (field.get)(clause);
        if value == 0 {
            continue;
        }
        let separator = if first { " " } else { ", " };
        let _ = write!(output, "{separator}{} -> {value}", field.name);
        first = false;
    }
    output.push_str(" }");
}
