//! Template contribution ops and the builder-owned sequence.
//!
//! Clauses never mutate a template list they don't own. Each clause returns
//! [`TemplateOp`] values describing its contribution, and the builder applies
//! them to its [`TemplateSequence`]. Retraction and prepending are scoped to
//! the current unit.

use crate::template::WordSlotTemplate;

/// A predicate class over templates, usable inside op values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TemplateClass {
    /// Templates belonging to a noun phrase.
    NounPhrasePart,
}

impl TemplateClass {
    /// Whether the template belongs to this class.
    #[must_use]
    pub fn matches(&self, template: &WordSlotTemplate) -> bool {
        match self {
            Self::NounPhrasePart => template.is_noun_phrase_part(),
        }
    }
}

/// One clause's contribution to the template sequence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TemplateOp {
    /// Append templates at the end of the sequence.
    Append(Vec<WordSlotTemplate>),
    /// Insert templates at the start of the current unit.
    Prepend(Vec<WordSlotTemplate>),
    /// Pop trailing templates matching the class, stopping at the unit start.
    RetractWhile(TemplateClass),
    /// Insert one template before the trailing run matching the class.
    InsertBefore {
        /// The template to insert.
        template: WordSlotTemplate,
        /// The class delimiting the trailing run.
        class: TemplateClass,
    },
}

/// The editable sequence the builder owns.
///
/// `begin_unit` marks the start of a new phrase unit; prepends land there
/// and retraction never reaches past it.
#[derive(Clone, Debug, Default)]
pub struct TemplateSequence {
    templates: Vec<WordSlotTemplate>,
    unit_start: usize,
}

impl TemplateSequence {
    /// Creates an empty sequence.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the current end of the sequence as the start of a new unit.
    pub fn begin_unit(&mut self) {
        self.unit_start = self.templates.len();
    }

    /// Applies one contribution op.
    pub fn apply(&mut self, op: TemplateOp) {
        match op {
            TemplateOp::Append(templates) => {
                self.templates.extend(templates);
            }
            TemplateOp::Prepend(templates) => {
                for (offset, template) in templates.into_iter().enumerate() {
                    self.templates.insert(self.unit_start + offset, template);
                }
            }
            TemplateOp::RetractWhile(class) => {
                while self.templates.len() > self.unit_start
                    && self.templates.last().is_some_and(|t| class.matches(t))
                {
                    self.templates.pop();
                }
            }
            TemplateOp::InsertBefore { template, class } => {
                let mut position = self.templates.len();
                while position > self.unit_start && class.matches(&self.templates[position - 1]) {
                    position -= 1;
                }
                self.templates.insert(position, template);
            }
        }
    }

    /// Applies a batch of contribution ops in order.
    pub fn apply_all(&mut self, ops: impl IntoIterator<Item = TemplateOp>) {
        for op in ops {
            self.apply(op);
        }
    }

    /// The whole sequence so far.
    #[must_use]
    pub fn templates(&self) -> &[WordSlotTemplate] {
        &self.templates
    }

    /// The templates of the current unit.
    #[must_use]
    pub fn unit(&self) -> &[WordSlotTemplate] {
        &self.templates[self.unit_start..]
    }

    /// Consumes the sequence, yielding the finished template list.
    #[must_use]
    pub fn into_templates(self) -> Vec<WordSlotTemplate> {
        self.templates
    }
}
