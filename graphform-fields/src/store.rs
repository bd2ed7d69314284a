//! The field mutation store
//!
//! Backs the rendered form: one store per active view, created from a
//! built [`FieldMap`], mutated only through point updates, and replaced
//! wholesale when the subject changes. Nothing here persists beyond the
//! session.

use crate::{Field, FieldMap, FieldValue};

/// Keyed mapping from predicate IRI to current field value
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldStore {
    fields: FieldMap,
}

impl FieldStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Look up the field for a predicate
    pub fn get(&self, predicate: &str) -> Option<&Field> {
        self.fields.get(predicate)
    }

    /// Iterate over fields in display order
    pub fn fields(&self) -> impl Iterator<Item = &Field> {
        self.fields.iter()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.fields.len()
    }

    /// Check if the store is empty
    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    /// Replace the current value of one field
    ///
    /// Updating a predicate with no field is a no-op on the store;
    /// the return value says whether anything changed, so callers who
    /// consider a missing key a logic error can assert on it. Every
    /// other entry is left untouched.
    pub fn update(&mut self, predicate: &str, value: FieldValue) -> bool {
        match self.fields.get_mut(predicate) {
            Some(field) => {
                field.value = value;
                true
            }
            None => {
                tracing::debug!(predicate, "update for absent predicate ignored");
                false
            }
        }
    }

    /// Swap in a freshly built field model, discarding all prior edits
    ///
    /// This is the subject-change path: no merging with stale state.
    pub fn replace(&mut self, fields: FieldMap) {
        self.fields = fields;
    }

    /// Consume the store, yielding the current field map
    pub fn into_fields(self) -> FieldMap {
        self.fields
    }
}

impl From<FieldMap> for FieldStore {
    fn from(fields: FieldMap) -> Self {
        Self { fields }
    }
}
