//! Statements and the statement set
//!
//! `StatementSet` is the unit of exchange between a parser and the form
//! engine: a flat list of statements in source order with read-only,
//! subject-scoped access. It is rebuilt wholesale on every fetch - there
//! is no incremental patching.

use crate::Term;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::sync::Arc;

/// A single subject-predicate-object statement
///
/// Subject and predicate are always expanded IRIs; the object may be an
/// IRI or a literal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Statement {
    /// Subject IRI
    pub subject: Arc<str>,
    /// Predicate IRI
    pub predicate: Arc<str>,
    /// Object term
    pub object: Term,
}

impl Statement {
    /// Create a statement from its components
    pub fn new(subject: impl AsRef<str>, predicate: impl AsRef<str>, object: Term) -> Self {
        Self {
            subject: Arc::from(subject.as_ref()),
            predicate: Arc::from(predicate.as_ref()),
            object,
        }
    }
}

impl std::fmt::Display for Statement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "<{}> <{}> {} .", self.subject, self.predicate, self.object)
    }
}

/// An ordered collection of statements with subject-scoped read access
///
/// Storage is a plain `Vec` in source order. All views are pure reads;
/// nothing here mutates after construction beyond `add`/`extend` during
/// assembly.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct StatementSet {
    statements: Vec<Statement>,
}

impl StatementSet {
    /// Create an empty statement set
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a statement
    pub fn add(&mut self, statement: Statement) {
        self.statements.push(statement);
    }

    /// Add a statement by components
    pub fn add_statement(&mut self, s: impl AsRef<str>, p: impl AsRef<str>, o: Term) {
        self.add(Statement::new(s, p, o));
    }

    /// Get the number of statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// Check if the set is empty
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Iterate over all statements in source order
    pub fn iter(&self) -> impl Iterator<Item = &Statement> {
        self.statements.iter()
    }

    /// Get a reference to the statements
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Statements whose subject equals `subject`, in source order
    ///
    /// Exact string equality on the expanded IRI; no normalization.
    pub fn statements_for_subject<'a>(
        &'a self,
        subject: &'a str,
    ) -> impl Iterator<Item = &'a Statement> {
        self.statements
            .iter()
            .filter(move |st| st.subject.as_ref() == subject)
    }

    /// Partition all statements by subject
    ///
    /// Within each group, source order is preserved. Used by the type
    /// resolver to look up metadata statements for type IRIs without
    /// re-scanning the whole set per type.
    pub fn group_by_subject(&self) -> HashMap<&str, Vec<&Statement>> {
        let mut groups: HashMap<&str, Vec<&Statement>> = HashMap::new();
        for st in &self.statements {
            groups.entry(st.subject.as_ref()).or_default().push(st);
        }
        groups
    }

    /// Distinct subjects in first-occurrence order
    pub fn subjects(&self) -> Vec<&str> {
        let mut seen: Vec<&str> = Vec::new();
        for st in &self.statements {
            let s = st.subject.as_ref();
            if !seen.contains(&s) {
                seen.push(s);
            }
        }
        seen
    }

    /// First subject appearing anywhere in the set
    ///
    /// The fallback heuristic hosts apply when the requested subject has
    /// no statements: a DESCRIBE response sometimes describes the
    /// resource under a slightly different IRI, and the first subject is
    /// the best available guess before giving up.
    pub fn first_iri_subject(&self) -> Option<&str> {
        self.statements.first().map(|st| st.subject.as_ref())
    }
}

impl IntoIterator for StatementSet {
    type Item = Statement;
    type IntoIter = std::vec::IntoIter<Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.into_iter()
    }
}

impl<'a> IntoIterator for &'a StatementSet {
    type Item = &'a Statement;
    type IntoIter = std::slice::Iter<'a, Statement>;

    fn into_iter(self) -> Self::IntoIter {
        self.statements.iter()
    }
}

impl FromIterator<Statement> for StatementSet {
    fn from_iter<T: IntoIterator<Item = Statement>>(iter: T) -> Self {
        StatementSet {
            statements: iter.into_iter().collect(),
        }
    }
}

impl Extend<Statement> for StatementSet {
    fn extend<T: IntoIterator<Item = Statement>>(&mut self, iter: T) {
        self.statements.extend(iter);
    }
}
