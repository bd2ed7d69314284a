//! The typed field model
//!
//! A `Field` is one editable form input derived from one predicate. The
//! value is a tagged variant per kind, so each kind carries only the
//! representation relevant to it - a number is `Option<f64>` (unset on
//! unparseable input), a date is a 10-character calendar-date string,
//! an IRI is the IRI text.

use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// The closed set of input kinds a field can take
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldKind {
    String,
    Number,
    Boolean,
    Date,
    Textarea,
    Iri,
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            FieldKind::String => "string",
            FieldKind::Number => "number",
            FieldKind::Boolean => "boolean",
            FieldKind::Date => "date",
            FieldKind::Textarea => "textarea",
            FieldKind::Iri => "iri",
        };
        write!(f, "{}", s)
    }
}

/// A field value, tagged by kind
///
/// `Number(None)` is the unset sentinel: classification of an
/// unparseable numeric literal still succeeds, it just carries no
/// value. Malformed data never blocks display of the rest of the form.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum FieldValue {
    String(String),
    Number(Option<f64>),
    Boolean(bool),
    /// Calendar date, normalized to the first 10 characters (`YYYY-MM-DD`)
    Date(String),
    Textarea(String),
    Iri(String),
}

impl FieldValue {
    /// The kind tag of this value
    pub fn kind(&self) -> FieldKind {
        match self {
            FieldValue::String(_) => FieldKind::String,
            FieldValue::Number(_) => FieldKind::Number,
            FieldValue::Boolean(_) => FieldKind::Boolean,
            FieldValue::Date(_) => FieldKind::Date,
            FieldValue::Textarea(_) => FieldKind::Textarea,
            FieldValue::Iri(_) => FieldKind::Iri,
        }
    }

    /// Try to get as text (string, textarea, date, or IRI)
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::String(s)
            | FieldValue::Date(s)
            | FieldValue::Textarea(s)
            | FieldValue::Iri(s) => Some(s),
            _ => None,
        }
    }

    /// Try to get as number (None both for non-numbers and unset numbers)
    pub fn as_number(&self) -> Option<f64> {
        match self {
            FieldValue::Number(n) => *n,
            _ => None,
        }
    }

    /// Try to get as boolean
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FieldValue::Boolean(b) => Some(*b),
            _ => None,
        }
    }
}

/// One editable form field derived from one predicate
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Field {
    /// Originating predicate IRI
    pub predicate: Arc<str>,
    /// Display label derived from the predicate IRI
    pub label: String,
    /// Current value, typed per kind
    pub value: FieldValue,
}

impl Field {
    /// Create a field
    pub fn new(predicate: impl AsRef<str>, label: impl Into<String>, value: FieldValue) -> Self {
        Self {
            predicate: Arc::from(predicate.as_ref()),
            label: label.into(),
            value,
        }
    }

    /// The kind tag of this field's value
    pub fn kind(&self) -> FieldKind {
        self.value.kind()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_kind_tags() {
        assert_eq!(FieldValue::String("x".into()).kind(), FieldKind::String);
        assert_eq!(FieldValue::Number(Some(1.0)).kind(), FieldKind::Number);
        assert_eq!(FieldValue::Number(None).kind(), FieldKind::Number);
        assert_eq!(FieldValue::Boolean(true).kind(), FieldKind::Boolean);
        assert_eq!(FieldValue::Date("2024-01-01".into()).kind(), FieldKind::Date);
        assert_eq!(FieldValue::Textarea("x".into()).kind(), FieldKind::Textarea);
        assert_eq!(
            FieldValue::Iri("http://example.org".into()).kind(),
            FieldKind::Iri
        );
    }

    #[test]
    fn test_accessors() {
        assert_eq!(FieldValue::String("x".into()).as_text(), Some("x"));
        assert_eq!(FieldValue::Number(Some(2.0)).as_number(), Some(2.0));
        assert_eq!(FieldValue::Number(None).as_number(), None);
        assert_eq!(FieldValue::Boolean(true).as_bool(), Some(true));
        assert_eq!(FieldValue::Boolean(true).as_text(), None);
    }

    #[test]
    fn test_serde_round_trip() {
        let field = Field::new(
            "http://example.org/population",
            "Population",
            FieldValue::Number(Some(2148000.0)),
        );
        let json = serde_json::to_string(&field).unwrap();
        let back: Field = serde_json::from_str(&json).unwrap();
        assert_eq!(field, back);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(FieldKind::Textarea.to_string(), "textarea");
        assert_eq!(FieldKind::Iri.to_string(), "iri");
    }
}
