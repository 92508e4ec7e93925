//! The template builder: linking, first pass, second pass.

use prattle_foundation::{RandomSource, Result};
use prattle_grammar::{Clause, TemplateSequence, WordSlotTemplate, initialize_relationships};

/// Builds the ordered word slot templates for one phrase.
///
/// The clause list is partitioned into phrase units. With no verb clause
/// present, each clause contributes once, in order, and there is no second
/// pass. With verb clauses present each unit runs its clauses in
/// subject-verb-object order, then replays the same order through
/// `second_pass_of_word_template` so cross-clause corrections (the verb's
/// transitivity resolution) can observe the templates emitted after them.
///
/// Draw order is part of the determinism contract: clause order, each
/// clause's documented decision order, second-pass draws after the unit's
/// first pass.
///
/// # Errors
///
/// Propagates clause configuration errors, which are checked lazily here at
/// first use.
pub fn build_templates(
    clauses: &[Clause],
    rng: &mut dyn RandomSource,
) -> Result<Vec<WordSlotTemplate>> {
    let units = initialize_relationships(clauses);
    let mut sequence = TemplateSequence::new();

    if units.len() == 1 && units[0].verb.is_none() {
        for index in units[0].clause_order() {
            let ops = clauses[index].add_word_template(rng, &sequence)?;
            sequence.apply_all(ops);
        }
        return Ok(sequence.into_templates());
    }

    for unit in &units {
        sequence.begin_unit();
        for index in unit.clause_order() {
            let ops = clauses[index].add_word_template(rng, &sequence)?;
            sequence.apply_all(ops);
        }
        let info = unit.info(clauses);
        for index in unit.clause_order() {
            let ops = clauses[index].second_pass_of_word_template(rng, &sequence, &info)?;
            sequence.apply_all(ops);
        }
    }
    Ok(sequence.into_templates())
}
