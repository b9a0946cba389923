//! Control assignments — named parameters attached to a pattern with `#`.

use crate::value::{TidalValue, ToTidal};

/// A single named control applied to a pattern, e.g. `cutoff 1200`.
#[derive(Debug, Clone, PartialEq)]
pub struct ControlAssignment {
    pub name: String,
    pub value: TidalValue,
}

impl ControlAssignment {
    /// Create a control assignment from a name and any value convertible to
    /// a [`TidalValue`].
    pub fn new(name: impl Into<String>, value: impl Into<TidalValue>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}

impl ToTidal for ControlAssignment {
    fn to_tidal(&self) -> String {
        format!("{} {}", self.name, self.value)
    }
}

/// An ordered group of control assignments, rendered as a `#`-joined clause.
///
/// The rendered clause carries its own leading `#`; embedders separate it
/// from the preceding expression with a single space and nothing else.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ControlCollection {
    assignments: Vec<ControlAssignment>,
}

impl ControlCollection {
    /// Create an empty collection.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a single assignment, preserving insertion order.
    pub fn push(&mut self, assignment: ControlAssignment) {
        self.assignments.push(assignment);
    }

    /// Append multiple assignments in order.
    pub fn extend(&mut self, assignments: impl IntoIterator<Item = ControlAssignment>) {
        self.assignments.extend(assignments);
    }

    /// Whether the collection holds no assignments.
    pub fn is_empty(&self) -> bool {
        self.assignments.is_empty()
    }

    /// Number of assignments in the collection.
    pub fn len(&self) -> usize {
        self.assignments.len()
    }

    /// Iterate over the assignments in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ControlAssignment> {
        self.assignments.iter()
    }
}

impl FromIterator<ControlAssignment> for ControlCollection {
    fn from_iter<I: IntoIterator<Item = ControlAssignment>>(iter: I) -> Self {
        Self {
            assignments: iter.into_iter().collect(),
        }
    }
}

impl ToTidal for ControlCollection {
    fn to_tidal(&self) -> String {
        if self.assignments.is_empty() {
            return String::new();
        }
        let joined = self
            .assignments
            .iter()
            .map(ToTidal::to_tidal)
            .collect::<Vec<_>>()
            .join(" # ");
        format!("# {joined}")
    }
}
