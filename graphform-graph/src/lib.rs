//! RDF statement model and read views for graphform
//!
//! This crate provides the canonical types for representing an
//! already-parsed set of RDF statements, plus the read-only views the
//! form engine consumes. It deliberately knows nothing about Turtle
//! syntax or HTTP - parsers produce `Statement`s, this crate indexes
//! them.
//!
//! # Key Design Principles
//!
//! 1. **Expanded IRIs only** - All IRIs are stored in expanded form.
//!
//! 2. **Datatype absence is meaningful** - Unlike storage-oriented IRs
//!    that default plain strings to `xsd:string`, a literal here keeps
//!    `datatype: None` when the source carried no datatype annotation.
//!    The field classification heuristics depend on that distinction.
//!
//! 3. **Source order preserved** - `StatementSet` stores statements in
//!    the order the parser emitted them; every view iterates in that
//!    order. Display ordering downstream is encounter order.
//!
//! # Example
//!
//! ```
//! use graphform_graph::{Statement, StatementSet, Term};
//!
//! let set: StatementSet = [
//!     Statement::new(
//!         "http://example.org/alice",
//!         "http://xmlns.com/foaf/0.1/name",
//!         Term::string("Alice"),
//!     ),
//! ]
//! .into_iter()
//! .collect();
//!
//! assert_eq!(set.statements_for_subject("http://example.org/alice").count(), 1);
//! ```

mod statement;
mod term;

pub use statement::{Statement, StatementSet};
pub use term::Term;
