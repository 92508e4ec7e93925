//! The verb clause: tense selection, adverb, interrogative inversion, and
//! transitivity.

use prattle_foundation::{PhraseCombinations, RandomSource, weighted_choice};
use prattle_lexicon::{Lexicon, Tense};

use crate::linking::UnitInfo;
use crate::ops::{TemplateClass, TemplateOp, TemplateSequence};
use crate::template::WordSlotTemplate;

/// Weight factors for one verb and its decorations.
///
/// Subject and object linking happens outside the clause (see
/// [`crate::linking`]); the clause itself only reads the already-emitted
/// unit templates for subject agreement.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VerbClause {
    /// Weight of the present tense.
    pub present: u32,
    /// Weight of the past tense.
    pub past: u32,
    /// Weight of the future tense.
    pub future: u32,
    /// Weight of the continuous tense.
    pub continuous: u32,
    /// Weight of the continuous-past tense.
    pub continuous_past: u32,
    /// Weight of the perfect tense.
    pub perfect: u32,
    /// Weight of the subjunctive.
    pub subjunctive: u32,
    /// Weight of a trailing adverb.
    pub adverb: u32,
    /// Weight of no adverb.
    pub no_adverb: u32,
    /// Weight of interrogative inversion.
    pub interrogative: u32,
    /// Weight of no inversion.
    pub no_interrogative: u32,
    /// Weight of keeping the object noun clause as-is.
    pub transitive: u32,
    /// Weight of dropping the object noun clause entirely.
    pub intransitive_by_no_noun_clause: u32,
    /// Weight of demoting the object behind a preposition.
    pub intransitive_by_preposition: u32,
}

impl VerbClause {
    fn tense_weights(&self) -> [u32; 7] {
        [
            self.present,
            self.past,
            self.future,
            self.continuous,
            self.continuous_past,
            self.perfect,
            self.subjunctive,
        ]
    }

    /// Emits the verb (and optional adverb), prepending an interrogative
    /// auxiliary when inversion is drawn.
    ///
    /// The subject's plurality is read from the nearest preceding
    /// plurality-bearing template already in the unit; an empty subject is
    /// treated as singular.
    pub(crate) fn add_word_template(
        &self,
        rng: &mut dyn RandomSource,
        sequence: &TemplateSequence,
    ) -> Vec<TemplateOp> {
        let subject_plural = sequence
            .unit()
            .iter()
            .rev()
            .find_map(WordSlotTemplate::plurality)
            .unwrap_or(false);

        // All tense weights zero: present.
        let tense = Tense::ALL[weighted_choice(rng, &self.tense_weights())];

        // Both weights zero: no adverb.
        let wants_adverb = rng.weighted_coin_flip(self.adverb.into(), self.no_adverb.into());

        // Both weights zero: no inversion.
        let inverted =
            rng.weighted_coin_flip(self.interrogative.into(), self.no_interrogative.into());

        let mut ops = Vec::new();
        let verb = if inverted {
            // The auxiliary carries tense and agreement ("why does the cat
            // eat"), so the verb itself drops to the plural present form.
            ops.push(TemplateOp::Prepend(vec![WordSlotTemplate::Interrogative {
                is_plural: subject_plural,
            }]));
            WordSlotTemplate::Verb {
                tense: Tense::Present,
                is_plural: true,
            }
        } else {
            WordSlotTemplate::Verb {
                tense,
                is_plural: subject_plural,
            }
        };

        let mut appended = vec![verb];
        if wants_adverb {
            appended.push(WordSlotTemplate::Adverb);
        }
        ops.push(TemplateOp::Append(appended));
        ops
    }

    /// Resolves transitivity once the object's templates are in the unit.
    ///
    /// Drawn only when an object noun clause is linked: intransitive-by-no-
    /// noun-clause retracts the object's noun phrase, intransitive-by-
    /// preposition demotes it behind a preposition. All weights zero:
    /// transitive.
    pub(crate) fn second_pass_of_word_template(
        &self,
        rng: &mut dyn RandomSource,
        unit: &UnitInfo,
    ) -> Vec<TemplateOp> {
        if !unit.has_object_noun {
            return Vec::new();
        }
        let weights = [
            self.transitive,
            self.intransitive_by_no_noun_clause,
            self.intransitive_by_preposition,
        ];
        match weighted_choice(rng, &weights) {
            1 => vec![TemplateOp::RetractWhile(TemplateClass::NounPhrasePart)],
            2 => vec![TemplateOp::InsertBefore {
                template: WordSlotTemplate::Preposition,
                class: TemplateClass::NounPhrasePart,
            }],
            _ => Vec::new(),
        }
    }

    /// Pure product: adverb factor times reachable tenses times verbs.
    ///
    /// The interrogative and transitivity branches rearrange templates
    /// rather than choosing words, and are deliberately uncounted.
    pub(crate) fn count_combinations(&self, lexicon: &Lexicon) -> PhraseCombinations {
        let reachable_tenses = self
            .tense_weights()
            .iter()
            .filter(|&&weight| weight > 0)
            .count()
            .max(1);
        PhraseCombinations::optional(lexicon.adverb_count(), self.adverb, self.no_adverb)
            * PhraseCombinations::fixed(reachable_tenses)
            * PhraseCombinations::fixed(lexicon.verb_count())
    }
}
