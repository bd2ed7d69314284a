//! Typed form-field inference over RDF statement sets
//!
//! This crate derives an editable, typed field model from the statements
//! describing one subject. Given a `StatementSet`, a `FieldEngine`:
//!
//! 1. classifies each predicate's object into a field kind
//!    (string / number / boolean / date / textarea / iri),
//! 2. derives a display label from the predicate IRI,
//! 3. resolves the subject's `rdf:type` entries to labelled
//!    [`TypeInfo`] records using a language-preference order,
//! 4. hands the result to a [`FieldStore`] that backs the rendered form
//!    and absorbs edits.
//!
//! All of it is pure, synchronous computation over an already-parsed
//! statement list. The engine holds no state across calls; every build
//! replaces the previous model wholesale.
//!
//! # Example
//!
//! ```
//! use graphform_fields::{FieldEngine, FieldValue};
//! use graphform_graph::{Statement, StatementSet, Term};
//! use graphform_vocab::xsd;
//!
//! let set: StatementSet = [Statement::new(
//!     "http://example.org/Paris",
//!     "http://example.org/population",
//!     Term::typed("2148000", xsd::INTEGER),
//! )]
//! .into_iter()
//! .collect();
//!
//! let engine = FieldEngine::new();
//! let fields = engine.build_fields(&set, "http://example.org/Paris");
//!
//! let field = fields.get("http://example.org/population").unwrap();
//! assert_eq!(field.label, "Population");
//! assert_eq!(field.value, FieldValue::Number(Some(2148000.0)));
//! ```

mod builder;
mod classify;
mod config;
mod field;
mod store;
mod types;

pub use builder::FieldMap;
pub use classify::label_from_iri;
pub use config::FieldEngineConfig;
pub use field::{Field, FieldKind, FieldValue};
pub use store::FieldStore;
pub use types::TypeInfo;

use graphform_graph::StatementSet;

/// The form-field inference engine
///
/// One instance per configuration; instances are cheap and hold no
/// state between calls, so re-invoking on successive statement sets in
/// any order is safe.
#[derive(Clone, Debug, Default)]
pub struct FieldEngine {
    config: FieldEngineConfig,
}

impl FieldEngine {
    /// Create an engine with the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an engine with an explicit configuration
    pub fn with_config(config: FieldEngineConfig) -> Self {
        Self { config }
    }

    /// Access the engine configuration
    pub fn config(&self) -> &FieldEngineConfig {
        &self.config
    }

    /// Classify a single object term into a typed field
    ///
    /// Rules in priority order: IRI, textarea over the length threshold,
    /// language-tagged string, XSD datatype dispatch, then content
    /// heuristics on plain short literals.
    pub fn classify(&self, predicate: &str, object: &graphform_graph::Term) -> Field {
        classify::classify(&self.config, predicate, object)
    }

    /// Build the field model for one subject
    ///
    /// First value per predicate wins, encounter order is preserved, and
    /// an empty map signals "resource not described" rather than an error.
    pub fn build_fields(&self, set: &StatementSet, subject: &str) -> FieldMap {
        builder::build_fields(&self.config, set, subject)
    }

    /// Resolve the subject's `rdf:type` entries to labelled type records
    pub fn resolve_types(&self, set: &StatementSet, subject: &str) -> Vec<TypeInfo> {
        types::resolve_types(&self.config, set, subject)
    }
}
