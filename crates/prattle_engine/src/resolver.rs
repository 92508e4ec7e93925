//! The word resolver: templates to delimited text.
//!
//! Resolution walks the template list once, picking concrete lexicon entries
//! and joining their forms with the caller's delimiter. The returned string
//! keeps its trailing delimiter; the facade trims it after the mutator
//! pipeline has run.

use std::collections::HashSet;

use prattle_foundation::{Error, RandomSource, Result};
use prattle_grammar::WordSlotTemplate;
use prattle_lexicon::{Form, Lexicon, WordId, WordKind};

/// Resolves a template list against a lexicon.
///
/// Content words are tracked in a recently-used set: picks prefer
/// still-unused entries and fall back to the whole category only when it is
/// exhausted. Function words are exempt so their reuse is never constrained.
/// Whether a slot participates is decided by
/// [`WordSlotTemplate::tracks_repetition`].
///
/// Articles resolve deferred: the article's form depends on the phonetic
/// class of the word that follows it, so an article template is buffered
/// until the next word is chosen. A trailing article, or one followed
/// immediately by another article, flushes with its consonant form.
///
/// # Errors
///
/// Returns an empty-category error when a template references a lexicon
/// category with no matching entries. Lexicon adequacy is a caller
/// precondition; this surfaces the violation without panicking.
pub fn resolve_templates(
    templates: &[WordSlotTemplate],
    lexicon: &Lexicon,
    rng: &mut dyn RandomSource,
    delimiter: &str,
) -> Result<String> {
    let mut resolver = Resolver {
        lexicon,
        delimiter,
        recently_used: HashSet::new(),
        pending_article: None,
        output: String::new(),
    };
    for template in templates {
        if let WordSlotTemplate::Article { is_definite } = template {
            // Two articles in a row: the first never meets its word.
            resolver.flush_article(rng, false)?;
            resolver.pending_article = Some(*is_definite);
            continue;
        }
        let form = resolver.resolve_word(template, rng)?;
        resolver.flush_article(rng, form.starts_with_vowel_sound)?;
        resolver.emit(&form.text);
    }
    resolver.flush_article(rng, false)?;
    Ok(resolver.output)
}

struct Resolver<'lex> {
    lexicon: &'lex Lexicon,
    delimiter: &'lex str,
    recently_used: HashSet<WordId>,
    pending_article: Option<bool>,
    output: String,
}

impl<'lex> Resolver<'lex> {
    fn resolve_word(
        &mut self,
        template: &WordSlotTemplate,
        rng: &mut dyn RandomSource,
    ) -> Result<&'lex Form> {
        let lexicon = self.lexicon;
        match template {
            WordSlotTemplate::Noun { is_plural } => {
                let index =
                    self.pick_word(rng, template, WordKind::Noun, lexicon.noun_count(), "noun")?;
                Ok(lexicon.nouns()[index].form(*is_plural))
            }
            WordSlotTemplate::ProperNoun => {
                let index = self.pick_word(
                    rng,
                    template,
                    WordKind::ProperNoun,
                    lexicon.proper_noun_count(),
                    "proper noun",
                )?;
                Ok(&lexicon.proper_nouns()[index].name)
            }
            WordSlotTemplate::Demonstrative { is_plural } => {
                let index = self.pick_word(
                    rng,
                    template,
                    WordKind::Demonstrative,
                    lexicon.demonstrative_count(),
                    "demonstrative",
                )?;
                Ok(lexicon.demonstratives()[index].form(*is_plural))
            }
            WordSlotTemplate::PersonalPronoun { .. } => {
                let index = self.pick_word(
                    rng,
                    template,
                    WordKind::PersonalPronoun,
                    lexicon.personal_pronoun_count(),
                    "personal pronoun",
                )?;
                Ok(&lexicon.personal_pronouns()[index].form)
            }
            WordSlotTemplate::Cardinal { is_plural } => {
                let candidates: Vec<usize> = lexicon
                    .cardinals()
                    .iter()
                    .enumerate()
                    .filter_map(|(index, c)| (c.is_plural == *is_plural).then_some(index))
                    .collect();
                let index = pick_among(rng, &candidates, "cardinal")?;
                Ok(&lexicon.cardinals()[index].form)
            }
            WordSlotTemplate::Adjective => {
                let index = self.pick_word(
                    rng,
                    template,
                    WordKind::Adjective,
                    lexicon.adjective_count(),
                    "adjective",
                )?;
                Ok(&lexicon.adjectives()[index].form)
            }
            WordSlotTemplate::Adverb => {
                let index = self.pick_word(
                    rng,
                    template,
                    WordKind::Adverb,
                    lexicon.adverb_count(),
                    "adverb",
                )?;
                Ok(&lexicon.adverbs()[index].form)
            }
            WordSlotTemplate::Preposition => {
                let index = self.pick_word(
                    rng,
                    template,
                    WordKind::Preposition,
                    lexicon.preposition_count(),
                    "preposition",
                )?;
                Ok(&lexicon.prepositions()[index].form)
            }
            WordSlotTemplate::Verb { tense, is_plural } => {
                let index =
                    self.pick_word(rng, template, WordKind::Verb, lexicon.verb_count(), "verb")?;
                Ok(lexicon.verbs()[index].form(*tense, *is_plural))
            }
            WordSlotTemplate::Interrogative { is_plural } => {
                let index = self.pick_word(
                    rng,
                    template,
                    WordKind::Interrogative,
                    lexicon.interrogative_count(),
                    "interrogative",
                )?;
                Ok(lexicon.interrogatives()[index].form(*is_plural))
            }
            WordSlotTemplate::Conjunction { join } => {
                let candidates: Vec<usize> = lexicon
                    .conjunctions()
                    .iter()
                    .enumerate()
                    .filter_map(|(index, c)| c.joins(*join).then_some(index))
                    .collect();
                let index = pick_among(rng, &candidates, "conjunction")?;
                Ok(&lexicon.conjunctions()[index].form)
            }
            WordSlotTemplate::SpeechVerb => {
                let index = self.pick_word(
                    rng,
                    template,
                    WordKind::SpeechVerb,
                    lexicon.speech_verb_count(),
                    "speech verb",
                )?;
                Ok(&lexicon.speech_verbs()[index].form)
            }
            WordSlotTemplate::IndefinitePronoun {
                is_plural,
                is_personal,
            } => {
                let candidates: Vec<usize> = lexicon
                    .indefinite_pronouns()
                    .iter()
                    .enumerate()
                    .filter_map(|(index, p)| (p.is_personal == *is_personal).then_some(index))
                    .collect();
                let index = pick_among(rng, &candidates, "indefinite pronoun")?;
                Ok(lexicon.indefinite_pronouns()[index].form(*is_plural))
            }
            WordSlotTemplate::AnyWord => self.pick_any_word(rng),
            WordSlotTemplate::Article { .. } => Err(Error::internal(
                "article template reached word resolution undeferred",
            )),
        }
    }

    /// Uniform pick over one category.
    ///
    /// Content words (per [`WordSlotTemplate::tracks_repetition`]) prefer
    /// still-unused entries and record their pick; function words draw over
    /// the whole category every time.
    fn pick_word(
        &mut self,
        rng: &mut dyn RandomSource,
        template: &WordSlotTemplate,
        kind: WordKind,
        count: usize,
        category: &str,
    ) -> Result<usize> {
        if count == 0 {
            return Err(Error::empty_category(category));
        }
        if !template.tracks_repetition() {
            return Ok(rng.next(count));
        }
        let unused: Vec<usize> = (0..count)
            .filter(|&index| !self.recently_used.contains(&WordId::new(kind, index)))
            .collect();
        let index = if unused.is_empty() {
            rng.next(count)
        } else {
            unused[rng.next(unused.len())]
        };
        self.recently_used.insert(WordId::new(kind, index));
        Ok(index)
    }

    /// One form from the whole lexicon, tracked across categories.
    fn pick_any_word(&mut self, rng: &mut dyn RandomSource) -> Result<&'lex Form> {
        let lexicon = self.lexicon;
        let total = lexicon.total_form_count();
        if total == 0 {
            return Err(Error::empty_category("any word"));
        }
        let unused: Vec<usize> = (0..total)
            .filter(|&index| {
                lexicon
                    .form_at(index)
                    .is_some_and(|(id, _)| !self.recently_used.contains(&id))
            })
            .collect();
        let global = if unused.is_empty() {
            rng.next(total)
        } else {
            unused[rng.next(unused.len())]
        };
        let (id, form) = lexicon
            .form_at(global)
            .ok_or_else(|| Error::internal("global form index out of range"))?;
        self.recently_used.insert(id);
        Ok(form)
    }

    /// Emits the buffered article, if any, agreed against the next sound.
    fn flush_article(
        &mut self,
        rng: &mut dyn RandomSource,
        before_vowel_sound: bool,
    ) -> Result<()> {
        let Some(is_definite) = self.pending_article.take() else {
            return Ok(());
        };
        let lexicon = self.lexicon;
        let index = pick(rng, lexicon.article_count(), "article")?;
        let form = lexicon.articles()[index].form(is_definite, before_vowel_sound);
        self.emit(&form.text);
        Ok(())
    }

    /// Appends one form plus the delimiter, rewriting internal spaces.
    fn emit(&mut self, text: &str) {
        if self.delimiter == " " {
            self.output.push_str(text);
        } else {
            self.output.push_str(&text.replace(' ', self.delimiter));
        }
        self.output.push_str(self.delimiter);
    }
}

fn pick(rng: &mut dyn RandomSource, count: usize, category: &str) -> Result<usize> {
    if count == 0 {
        return Err(Error::empty_category(category));
    }
    Ok(rng.next(count))
}

fn pick_among(rng: &mut dyn RandomSource, candidates: &[usize], category: &str) -> Result<usize> {
    if candidates.is_empty() {
        return Err(Error::empty_category(category));
    }
    Ok(candidates[rng.next(candidates.len())])
}
