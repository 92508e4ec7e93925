//! Closed-form combination counting over whole clause lists.

use prattle_foundation::{PhraseCombinations, Result};
use prattle_grammar::Clause;
use prattle_lexicon::Lexicon;

/// Counts the combinations of a whole phrase description.
///
/// Each clause counts independently from its own weights and the lexicon's
/// category sizes; the per-clause triples multiply. Counting never needs the
/// subject/object linking pass or any randomness, so the count is a pure
/// function of the description and lexicon.
///
/// # Errors
///
/// Propagates clause configuration errors, which are checked lazily here at
/// first use.
pub fn calculate_combinations(clauses: &[Clause], lexicon: &Lexicon) -> Result<PhraseCombinations> {
    clauses
        .iter()
        .try_fold(PhraseCombinations::ONE, |product, clause| {
            Ok(product * clause.count_combinations(lexicon)?)
        })
}
