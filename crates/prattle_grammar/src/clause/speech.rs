//! The direct-speech clause.

use prattle_foundation::{PhraseCombinations, RandomSource};
use prattle_lexicon::Lexicon;

use crate::ops::{TemplateClass, TemplateOp};
use crate::template::WordSlotTemplate;

/// Weight factors for direct speech.
///
/// When speech is drawn, a speech verb follows the speaker's noun phrase
/// ("the cat says ..."). When it is not, the speaker's noun phrase is
/// retracted: the run of noun-phrase templates already emitted before this
/// point is removed, back to the start of the unit if the whole prefix
/// qualifies.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DirectSpeechClause {
    /// Weight of emitting a speech verb.
    pub speech: u32,
    /// Weight of retracting the speaker instead.
    pub no_speech: u32,
}

impl DirectSpeechClause {
    pub(crate) fn add_word_template(&self, rng: &mut dyn RandomSource) -> Vec<TemplateOp> {
        // Both weights zero: no speech, so the speaker is retracted.
        if rng.weighted_coin_flip(self.speech.into(), self.no_speech.into()) {
            vec![TemplateOp::Append(vec![WordSlotTemplate::SpeechVerb])]
        } else {
            vec![TemplateOp::RetractWhile(TemplateClass::NounPhrasePart)]
        }
    }

    pub(crate) fn count_combinations(&self, lexicon: &Lexicon) -> PhraseCombinations {
        PhraseCombinations::optional(lexicon.speech_verb_count(), self.speech, self.no_speech)
    }
}
