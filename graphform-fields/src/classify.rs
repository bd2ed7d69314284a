//! Object-term classification
//!
//! Maps one (predicate, object) pair to a typed [`Field`]. Rules apply
//! in order, first match wins:
//!
//! 1. IRI objects are always `iri` - an IRI has no datatype concept, so
//!    this takes priority over everything else.
//! 2. Plain literals (no datatype, no language) longer than the
//!    configured threshold become `textarea`.
//! 3. Language-tagged literals become `string`. The tag itself is
//!    dropped: the field model has no language slot, a deliberate
//!    simplification.
//! 4. Literals with an XSD datatype dispatch on the local datatype name.
//! 5. Remaining plain short literals go through content heuristics
//!    (`true`/`false`, signed integer-or-decimal shape) before falling
//!    back to `string`.

use crate::{Field, FieldEngineConfig, FieldValue};
use graphform_graph::Term;
use graphform_vocab::xsd;

/// Classify an object term into a typed field
pub(crate) fn classify(config: &FieldEngineConfig, predicate: &str, object: &Term) -> Field {
    let label = label_from_iri(predicate);

    let (text, datatype, language) = match object {
        Term::Iri(iri) => {
            return Field::new(predicate, label, FieldValue::Iri(iri.to_string()));
        }
        Term::Literal {
            value,
            datatype,
            language,
        } => (value.as_ref(), datatype.as_deref(), language.as_deref()),
    };

    let value = if datatype.is_none()
        && language.is_none()
        && text.chars().count() > config.textarea_threshold
    {
        FieldValue::Textarea(text.to_string())
    } else if language.is_some() {
        FieldValue::String(text.to_string())
    } else if let Some(local) = datatype.and_then(xsd::local_name) {
        classify_xsd(local, text)
    } else if datatype.is_some() {
        // Non-XSD datatype: no dispatch rule applies, keep the text
        FieldValue::String(text.to_string())
    } else {
        classify_heuristic(text)
    };

    Field::new(predicate, label, value)
}

/// Dispatch on the local name of an XSD datatype IRI
fn classify_xsd(local_name: &str, text: &str) -> FieldValue {
    match local_name {
        "boolean" => FieldValue::Boolean(text.eq_ignore_ascii_case("true")),
        "date" | "dateTime" => FieldValue::Date(truncate_date(text)),
        "integer" | "decimal" | "double" | "float" => FieldValue::Number(text.parse().ok()),
        _ => FieldValue::String(text.to_string()),
    }
}

/// Content heuristics for plain short literals
fn classify_heuristic(text: &str) -> FieldValue {
    if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
        FieldValue::Boolean(text.eq_ignore_ascii_case("true"))
    } else if looks_numeric(text) {
        FieldValue::Number(text.parse().ok())
    } else {
        FieldValue::String(text.to_string())
    }
}

/// First 10 characters of a date/dateTime lexical form (`YYYY-MM-DD`)
///
/// Truncation only; calendar validity is not checked.
fn truncate_date(text: &str) -> String {
    text.chars().take(10).collect()
}

/// Optional-sign integer-or-decimal shape: `[+-]? digits [. digits]?`
fn looks_numeric(text: &str) -> bool {
    let rest = text.strip_prefix(['+', '-']).unwrap_or(text);
    if rest.is_empty() {
        return false;
    }
    let (int_part, frac_part) = match rest.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (rest, None),
    };
    if int_part.is_empty() || !int_part.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }
    match frac_part {
        Some(f) => !f.is_empty() && f.bytes().all(|b| b.is_ascii_digit()),
        None => true,
    }
}

/// Derive a display label from an IRI
///
/// Takes the substring after the last `/` or `#` (the whole IRI when
/// that substring is empty or no separator exists), collapses runs of
/// `_`/`-` into a single space, and uppercases the first character.
/// Total: never fails, never returns an empty string for a non-empty
/// IRI.
///
/// ```
/// use graphform_fields::label_from_iri;
///
/// assert_eq!(label_from_iri("http://example.org/population"), "Population");
/// assert_eq!(label_from_iri("http://example.org/ns#birth_date"), "Birth date");
/// ```
pub fn label_from_iri(iri: &str) -> String {
    let local = match iri.rfind(['/', '#']) {
        Some(pos) if pos + 1 < iri.len() => &iri[pos + 1..],
        _ => iri,
    };
    let local = if local.is_empty() { iri } else { local };

    let mut label = String::with_capacity(local.len());
    let mut pending_space = false;
    for ch in local.chars() {
        if ch == '_' || ch == '-' {
            pending_space = !label.is_empty();
        } else {
            if pending_space {
                label.push(' ');
                pending_space = false;
            }
            if label.is_empty() {
                label.extend(ch.to_uppercase());
            } else {
                label.push(ch);
            }
        }
    }
    if label.is_empty() {
        // Separator-only local part: fall back to the raw IRI
        iri.to_string()
    } else {
        label
    }
}
