//! Subject/verb/object linking across a clause list.
//!
//! Clauses are stored in a slice and referenced by index; linking produces
//! an index-based unit partition instead of clause-to-clause pointers. The
//! relationship exists only while templates are being built and is never
//! persisted.

use crate::clause::Clause;

/// The span of clauses owned by one verb: subject side, verb, object side.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PhraseUnit {
    /// Indices of the subject-side clauses, in order.
    pub subject: Vec<usize>,
    /// Index of the verb clause, if the unit has one.
    pub verb: Option<usize>,
    /// Indices of the object-side clauses, in order.
    pub object: Vec<usize>,
}

impl PhraseUnit {
    /// The unit's clause indices in emission order: subject, verb, object.
    pub fn clause_order(&self) -> impl Iterator<Item = usize> + '_ {
        self.subject
            .iter()
            .copied()
            .chain(self.verb)
            .chain(self.object.iter().copied())
    }

    /// Computes the per-unit facts the second pass needs.
    #[must_use]
    pub fn info(&self, clauses: &[Clause]) -> UnitInfo {
        UnitInfo {
            has_object_noun: self
                .object
                .iter()
                .any(|&index| matches!(clauses[index], Clause::Noun(_))),
        }
    }
}

/// Cross-clause facts available to `second_pass_of_word_template`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnitInfo {
    /// Whether an object noun clause is linked to this unit's verb.
    pub has_object_noun: bool,
}

/// Partitions a clause list into phrase units.
///
/// Each verb clause claims the still-unclaimed non-verb clauses before it as
/// its subject side, and the non-verb clauses after it up to the next verb
/// as its object side. With no verb present the whole list is one verb-less
/// unit. Counting never needs this; only template building does.
#[must_use]
pub fn initialize_relationships(clauses: &[Clause]) -> Vec<PhraseUnit> {
    let verb_positions: Vec<usize> = clauses
        .iter()
        .enumerate()
        .filter_map(|(index, clause)| matches!(clause, Clause::Verb(_)).then_some(index))
        .collect();

    if verb_positions.is_empty() {
        return vec![PhraseUnit {
            subject: (0..clauses.len()).collect(),
            verb: None,
            object: Vec::new(),
        }];
    }

    let mut units = Vec::with_capacity(verb_positions.len());
    let mut claimed_up_to = 0;
    for (position, &verb) in verb_positions.iter().enumerate() {
        let end = verb_positions
            .get(position + 1)
            .copied()
            .unwrap_or(clauses.len());
        units.push(PhraseUnit {
            subject: (claimed_up_to..verb).collect(),
            verb: Some(verb),
            object: (verb + 1..end).collect(),
        });
        claimed_up_to = end;
    }
    units
}
