use super::Cell;

/// One parsed structure file: field tag to cell, in insertion order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Record {
    fields: Vec<(String, Cell)>,
}

impl Record {
    /// Create an empty record
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a field. An existing field with the same tag is overwritten in place.
    pub fn insert(&mut self, tag: impl Into<String>, cell: Cell) {
        let tag = tag.into();
        match self.fields.iter_mut().find(|(existing, _)| *existing == tag) {
            Some((_, slot)) => *slot = cell,
            None => self.fields.push((tag, cell)),
        }
    }

    /// Look up a field
    pub fn get(&self, tag: &str) -> Option<&Cell> {
        self.fields
            .iter()
            .find(|(existing, _)| existing == tag)
            .map(|(_, cell)| cell)
    }

    /// Iterate over fields in insertion order
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Cell)> {
        self.fields.iter().map(|(tag, cell)| (tag.as_str(), cell))
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Whether the record has no fields
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }
}
