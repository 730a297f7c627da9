//! Label string to class ID assignment.
//!
//! IDs are handed out in first-seen order and never reassigned, so the table
//! is always contiguous from zero.

use std::collections::HashMap;
use std::fmt;

/// The integer class written at the start of every label line.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ClassId(pub usize);

impl ClassId {
    /// Creates a new ClassId.
    #[inline]
    pub fn new(id: usize) -> Self {
        Self(id)
    }

    /// Returns the underlying index.
    #[inline]
    pub fn as_usize(&self) -> usize {
        self.0
    }
}

impl fmt::Debug for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ClassId({})", self.0)
    }
}

impl fmt::Display for ClassId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Mapping from label to [`ClassId`], built up over a single run.
#[derive(Clone, Debug, Default)]
pub struct ClassTable {
    names: Vec<String>,
    ids: HashMap<String, ClassId>,
}

impl ClassTable {
    /// Creates an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the ID for `label`, assigning the next free one if the label
    /// has not been seen yet.
    pub fn get_or_insert(&mut self, label: &str) -> ClassId {
        if let Some(id) = self.ids.get(label) {
            return *id;
        }

        let id = ClassId::new(self.names.len());
        self.names.push(label.to_string());
        self.ids.insert(label.to_string(), id);
        id
    }

    pub fn get(&self, label: &str) -> Option<ClassId> {
        self.ids.get(label).copied()
    }

    pub fn name(&self, id: ClassId) -> Option<&str> {
        self.names.get(id.as_usize()).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterates `(id, label)` pairs in ID order.
    pub fn iter(&self) -> impl Iterator<Item = (ClassId, &str)> {
        self.names
            .iter()
            .enumerate()
            .map(|(idx, name)| (ClassId::new(idx), name.as_str()))
    }
}
