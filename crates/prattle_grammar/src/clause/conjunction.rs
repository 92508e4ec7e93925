//! The conjunction clause.

use prattle_foundation::{Error, PhraseCombinations, Result};
use prattle_lexicon::{ConjunctionJoin, Lexicon};

use crate::ops::TemplateOp;
use crate::template::WordSlotTemplate;

/// Weight factors for one conjunction.
///
/// Exactly one of the two joining factors must be positive. Violations are
/// configuration errors surfaced at first use, not at construction.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ConjunctionClause {
    /// Weight of a conjunction that separates two nouns.
    pub joining_noun: u32,
    /// Weight of a conjunction that separates two phrases.
    pub joining_phrase: u32,
}

impl ConjunctionClause {
    /// The configured joining role.
    ///
    /// # Errors
    ///
    /// Returns a configuration error unless exactly one factor is positive.
    pub fn join(&self) -> Result<ConjunctionJoin> {
        match (self.joining_noun > 0, self.joining_phrase > 0) {
            (true, false) => Ok(ConjunctionJoin::Nouns),
            (false, true) => Ok(ConjunctionJoin::Phrases),
            (true, true) => Err(Error::configuration(
                "conjunction clause sets both joining_noun and joining_phrase",
            )),
            (false, false) => Err(Error::configuration(
                "conjunction clause sets neither joining_noun nor joining_phrase",
            )),
        }
    }

    pub(crate) fn add_word_template(&self) -> Result<Vec<TemplateOp>> {
        let join = self.join()?;
        Ok(vec![TemplateOp::Append(vec![
            WordSlotTemplate::Conjunction { join },
        ])])
    }

    pub(crate) fn count_combinations(&self, lexicon: &Lexicon) -> Result<PhraseCombinations> {
        let join = self.join()?;
        Ok(PhraseCombinations::fixed(lexicon.conjunction_count(join)))
    }
}
