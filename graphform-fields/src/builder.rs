//! Field model building
//!
//! Walks the statements for one subject and assembles an ordered field
//! collection keyed by predicate. Multi-valued predicates collapse to
//! their first value in source order - a policy decision, not an
//! artifact of iteration order. An empty result is valid and means
//! "resource not described"; the caller decides whether to retry with
//! an alternate subject.

use crate::{classify, Field, FieldEngineConfig};
use graphform_graph::StatementSet;
use std::collections::HashMap;
use std::sync::Arc;

/// An ordered mapping from predicate IRI to [`Field`]
///
/// Iteration yields fields in predicate first-encounter order over the
/// source statement sequence - the order the form displays them in.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FieldMap {
    order: Vec<Arc<str>>,
    fields: HashMap<Arc<str>, Field>,
}

impl FieldMap {
    /// Create an empty field map
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of fields
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Check if the map is empty
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Look up the field for a predicate
    pub fn get(&self, predicate: &str) -> Option<&Field> {
        self.fields.get(predicate)
    }

    /// Mutable lookup, used by the mutation store
    pub(crate) fn get_mut(&mut self, predicate: &str) -> Option<&mut Field> {
        self.fields.get_mut(predicate)
    }

    /// Check if a predicate has a field
    pub fn contains(&self, predicate: &str) -> bool {
        self.fields.contains_key(predicate)
    }

    /// Insert a field, keyed by its predicate
    ///
    /// A predicate already present keeps its position in the display
    /// order; its field is replaced.
    pub fn insert(&mut self, field: Field) {
        let key = Arc::clone(&field.predicate);
        if self.fields.insert(Arc::clone(&key), field).is_none() {
            self.order.push(key);
        }
    }

    /// Remove the field for a predicate, preserving the order of the rest
    pub fn remove(&mut self, predicate: &str) -> Option<Field> {
        let removed = self.fields.remove(predicate)?;
        self.order.retain(|p| p.as_ref() != predicate);
        Some(removed)
    }

    /// Iterate over fields in display order
    pub fn iter(&self) -> impl Iterator<Item = &Field> {
        self.order.iter().map(|p| &self.fields[p])
    }

    /// Iterate over predicate IRIs in display order
    pub fn predicates(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(|p| p.as_ref())
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = &'a Field;
    type IntoIter = Box<dyn Iterator<Item = &'a Field> + 'a>;

    fn into_iter(self) -> Self::IntoIter {
        Box::new(self.iter())
    }
}

/// Build the field model for one subject
///
/// First value per predicate wins; later values for the same predicate
/// are silently collapsed. With `exclude_rdf_type` set, the `rdf:type`
/// entry is removed after building (it is displayed separately via the
/// type resolver).
pub(crate) fn build_fields(
    config: &FieldEngineConfig,
    set: &StatementSet,
    subject: &str,
) -> FieldMap {
    let mut map = FieldMap::new();
    for st in set.statements_for_subject(subject) {
        if map.contains(&st.predicate) {
            continue;
        }
        map.insert(classify::classify(config, &st.predicate, &st.object));
    }

    if config.exclude_rdf_type {
        map.remove(graphform_vocab::rdf::TYPE);
    }

    tracing::debug!(subject, fields = map.len(), "built field model");
    map
}
