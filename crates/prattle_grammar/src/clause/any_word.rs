//! The any-word clause, for non-grammatical "word salad" phrases.

use prattle_foundation::PhraseCombinations;
use prattle_lexicon::Lexicon;

use crate::ops::TemplateOp;
use crate::template::WordSlotTemplate;

/// A clause that always emits one word drawn from the whole lexicon,
/// irrespective of category. It has no weight factors.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AnyWordClause {}

impl AnyWordClause {
    pub(crate) fn add_word_template(&self) -> Vec<TemplateOp> {
        vec![TemplateOp::Append(vec![WordSlotTemplate::AnyWord])]
    }

    pub(crate) fn count_combinations(&self, lexicon: &Lexicon) -> PhraseCombinations {
        PhraseCombinations::fixed(lexicon.total_form_count())
    }
}
