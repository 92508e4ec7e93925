//! The noun clause: three alternative noun-forming paths with shared
//! decoration groups.

use prattle_foundation::{PhraseCombinations, RandomSource, weighted_choice};
use prattle_lexicon::Lexicon;

use crate::ops::TemplateOp;
use crate::template::WordSlotTemplate;

/// Weight factors for one noun phrase.
///
/// The three noun-forming paths (common noun, proper noun, adjective used
/// as a noun) are selected by nested weighted coin flips; the decoration
/// groups (preposition, plurality, determiner, cardinal, adjective) apply
/// along the common and adjective paths.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NounClause {
    /// Weight of the common-noun path.
    pub common: u32,
    /// Weight of the proper-noun path.
    pub proper: u32,
    /// Weight of the adjective-as-noun path.
    pub from_adjective: u32,
    /// Weight of a leading preposition.
    pub preposition: u32,
    /// Weight of no preposition.
    pub no_preposition: u32,
    /// Weight of the plural form.
    pub plural: u32,
    /// Weight of the singular form.
    pub singular: u32,
    /// Weight of no determiner (plural nouns only).
    pub no_article: u32,
    /// Weight of a definite article.
    pub definite_article: u32,
    /// Weight of an indefinite article (singular nouns only).
    pub indefinite_article: u32,
    /// Weight of a demonstrative determiner.
    pub demonstrative: u32,
    /// Weight of a possessive determiner.
    pub personal_pronoun: u32,
    /// Weight of a cardinal number word.
    pub cardinal: u32,
    /// Weight of no cardinal.
    pub no_cardinal: u32,
    /// Weight of a decorating adjective.
    pub adjective: u32,
    /// Weight of no adjective.
    pub no_adjective: u32,
}

/// The determiner drawn for a noun, with indefiniteness tracked because it
/// gates the cardinal group.
struct DeterminerDraw {
    template: Option<WordSlotTemplate>,
    chose_indefinite: bool,
}

impl NounClause {
    /// Emits the templates for one noun phrase.
    pub(crate) fn add_word_template(&self, rng: &mut dyn RandomSource) -> Vec<TemplateOp> {
        // All weights zero falls through both flips to the adjective path.
        // The path-weight sum is widened so maximal weights cannot overflow.
        let other_paths = u64::from(self.proper) + u64::from(self.from_adjective);
        let templates = if rng.weighted_coin_flip(self.common.into(), other_paths) {
            self.common_noun_templates(rng)
        } else if rng.weighted_coin_flip(self.proper.into(), self.from_adjective.into()) {
            vec![WordSlotTemplate::ProperNoun]
        } else {
            self.adjective_as_noun_templates(rng)
        };
        vec![TemplateOp::Append(templates)]
    }

    /// Preposition?, determiner?, Cardinal?, Adjective?, Noun.
    fn common_noun_templates(&self, rng: &mut dyn RandomSource) -> Vec<WordSlotTemplate> {
        let mut templates = Vec::new();

        // Both weights zero: no preposition.
        if rng.weighted_coin_flip(self.preposition.into(), self.no_preposition.into()) {
            templates.push(WordSlotTemplate::Preposition);
        }

        // Both weights zero: singular.
        let is_plural = rng.weighted_coin_flip(self.plural.into(), self.singular.into());

        let determiner = self.choose_determiner(rng, is_plural);
        templates.extend(determiner.template);

        // A cardinal is unreachable after an indefinite article ("a two
        // cats" and "a two cat" are both nonsense).
        if (is_plural || !determiner.chose_indefinite)
            && rng.weighted_coin_flip(self.cardinal.into(), self.no_cardinal.into())
        {
            templates.push(WordSlotTemplate::Cardinal { is_plural });
        }

        if rng.weighted_coin_flip(self.adjective.into(), self.no_adjective.into()) {
            templates.push(WordSlotTemplate::Adjective);
        }

        templates.push(WordSlotTemplate::Noun { is_plural });
        templates
    }

    /// The common prelude (no cardinal group), then Adjective, then an
    /// indefinite pronoun standing in for the noun.
    fn adjective_as_noun_templates(&self, rng: &mut dyn RandomSource) -> Vec<WordSlotTemplate> {
        let mut templates = Vec::new();

        // Both weights zero: no preposition.
        if rng.weighted_coin_flip(self.preposition.into(), self.no_preposition.into()) {
            templates.push(WordSlotTemplate::Preposition);
        }

        // Both weights zero: singular.
        let is_plural = rng.weighted_coin_flip(self.plural.into(), self.singular.into());

        templates.extend(self.choose_determiner(rng, is_plural).template);
        templates.push(WordSlotTemplate::Adjective);
        templates.push(WordSlotTemplate::IndefinitePronoun {
            is_plural,
            // Person vs thing is an unweighted fair flip.
            is_personal: rng.coin_flip(),
        });
        templates
    }

    /// Draws the determiner group in its declared order.
    ///
    /// Singular nouns choose among definite/indefinite/demonstrative/
    /// possessive, and only when that group has any weight; plural nouns
    /// replace the (ungrammatical) indefinite option with "no determiner".
    fn choose_determiner(&self, rng: &mut dyn RandomSource, is_plural: bool) -> DeterminerDraw {
        if is_plural {
            let weights = [
                self.no_article,
                self.definite_article,
                self.demonstrative,
                self.personal_pronoun,
            ];
            let template = match weighted_choice(rng, &weights) {
                1 => Some(WordSlotTemplate::Article { is_definite: true }),
                2 => Some(WordSlotTemplate::Demonstrative { is_plural }),
                3 => Some(WordSlotTemplate::PersonalPronoun { is_plural }),
                _ => None,
            };
            DeterminerDraw {
                template,
                chose_indefinite: false,
            }
        } else {
            let weights = [
                self.definite_article,
                self.indefinite_article,
                self.demonstrative,
                self.personal_pronoun,
            ];
            if weights.iter().all(|&weight| weight == 0) {
                return DeterminerDraw {
                    template: None,
                    chose_indefinite: false,
                };
            }
            let choice = weighted_choice(rng, &weights);
            let template = match choice {
                0 => WordSlotTemplate::Article { is_definite: true },
                1 => WordSlotTemplate::Article { is_definite: false },
                2 => WordSlotTemplate::Demonstrative { is_plural },
                _ => WordSlotTemplate::PersonalPronoun { is_plural },
            };
            DeterminerDraw {
                template: Some(template),
                chose_indefinite: choice == 1,
            }
        }
    }

    /// Counts combinations by mirroring the branch structure exactly.
    ///
    /// The three paths are alternative ways to realize one noun phrase, so
    /// they combine additively with the average weighted by each path's
    /// selection factor.
    pub(crate) fn count_combinations(&self, lexicon: &Lexicon) -> PhraseCombinations {
        let preposition = PhraseCombinations::optional(
            lexicon.preposition_count(),
            self.preposition,
            self.no_preposition,
        );
        let adjective = PhraseCombinations::optional(
            lexicon.adjective_count(),
            self.adjective,
            self.no_adjective,
        );
        let cardinal_singular = PhraseCombinations::optional(
            lexicon.cardinal_count(false),
            self.cardinal,
            self.no_cardinal,
        );
        let cardinal_plural = PhraseCombinations::optional(
            lexicon.cardinal_count(true),
            self.cardinal,
            self.no_cardinal,
        );

        let common = preposition
            * self.plurality_core(lexicon, cardinal_singular, cardinal_plural)
            * adjective
            * PhraseCombinations::fixed(lexicon.noun_count());

        let proper = PhraseCombinations::fixed(lexicon.proper_noun_count());

        let pronoun = PhraseCombinations::choice(&[
            (
                PhraseCombinations::fixed(lexicon.indefinite_pronoun_count(true)),
                1,
            ),
            (
                PhraseCombinations::fixed(lexicon.indefinite_pronoun_count(false)),
                1,
            ),
        ]);
        let from_adjective = preposition
            * self.plurality_core(lexicon, PhraseCombinations::ONE, PhraseCombinations::ONE)
            * PhraseCombinations::fixed(lexicon.adjective_count())
            * pronoun;

        PhraseCombinations::alternatives(
            &[
                (common, self.common),
                (proper, self.proper),
                (from_adjective, self.from_adjective),
            ],
            2,
        )
    }

    /// The determiner-and-cardinal factor, split by plurality.
    ///
    /// The article/cardinal interdependence appears as per-option products:
    /// the indefinite option is the one singular determiner that forecloses
    /// a cardinal. Callers that have no cardinal group pass identity
    /// factors.
    fn plurality_core(
        &self,
        lexicon: &Lexicon,
        cardinal_singular: PhraseCombinations,
        cardinal_plural: PhraseCombinations,
    ) -> PhraseCombinations {
        let article = PhraseCombinations::fixed(lexicon.article_count());
        let demonstrative = PhraseCombinations::fixed(lexicon.demonstrative_count());
        let possessive = PhraseCombinations::fixed(lexicon.personal_pronoun_count());

        let no_singular_determiner = [
            self.definite_article,
            self.indefinite_article,
            self.demonstrative,
            self.personal_pronoun,
        ]
        .iter()
        .all(|&weight| weight == 0);
        let singular = if no_singular_determiner {
            // No determiner drawn, so the cardinal stays reachable.
            cardinal_singular
        } else {
            PhraseCombinations::choice(&[
                (article * cardinal_singular, self.definite_article),
                (article, self.indefinite_article),
                (demonstrative * cardinal_singular, self.demonstrative),
                (possessive * cardinal_singular, self.personal_pronoun),
            ])
        };

        let plural = PhraseCombinations::choice(&[
            (PhraseCombinations::ONE, self.no_article),
            (article, self.definite_article),
            (demonstrative, self.demonstrative),
            (possessive, self.personal_pronoun),
        ]) * cardinal_plural;

        PhraseCombinations::alternatives(&[(singular, self.singular), (plural, self.plural)], 0)
    }
}
