//! Type label and description resolution
//!
//! A subject's `rdf:type` objects are rendered as read-only badges, not
//! editable fields. For each distinct type IRI this module gathers the
//! type's own `rdfs:label` / `rdfs:comment` / `dcterms:description`
//! statements from the same statement set and picks the best value by
//! the configured language preference.

use crate::{classify::label_from_iri, FieldEngineConfig};
use graphform_graph::{StatementSet, Term};
use graphform_vocab::{dcterms, rdf, rdfs};
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Resolved display metadata for one `rdf:type` entry
///
/// `label` is always populated, falling back through
/// label statement, local name, full IRI. `description` may be absent.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeInfo {
    /// The type IRI
    pub iri: Arc<str>,
    /// Best available display label
    pub label: String,
    /// Best available description, when the set carries one
    pub description: Option<String>,
}

/// Resolve the subject's `rdf:type` statements to labelled records
///
/// Order is first-occurrence order of distinct type-object IRIs;
/// duplicates collapse by exact IRI equality. Non-IRI type objects are
/// skipped.
pub(crate) fn resolve_types(
    config: &FieldEngineConfig,
    set: &StatementSet,
    subject: &str,
) -> Vec<TypeInfo> {
    let groups = set.group_by_subject();
    let mut result: Vec<TypeInfo> = Vec::new();

    for st in set.statements_for_subject(subject) {
        if st.predicate.as_ref() != rdf::TYPE {
            continue;
        }
        let Some(type_iri) = st.object.as_iri() else {
            continue;
        };
        if result.iter().any(|t| t.iri.as_ref() == type_iri) {
            continue;
        }

        let about_type = groups.get(type_iri).map(Vec::as_slice).unwrap_or(&[]);

        let labels = literal_values(about_type, rdfs::LABEL);
        let label = pick_best_language(&labels, &config.language_preference)
            .map(|t| t.to_string())
            .unwrap_or_else(|| label_from_iri(type_iri));

        let descriptions = literal_values(about_type, dcterms::DESCRIPTION);
        let comments = literal_values(about_type, rdfs::COMMENT);
        let description = pick_best_language(&descriptions, &config.language_preference)
            .or_else(|| pick_best_language(&comments, &config.language_preference))
            .map(|t| t.to_string());

        result.push(TypeInfo {
            iri: Arc::from(type_iri),
            label,
            description,
        });
    }

    result
}

/// Literal objects of `predicate` among `statements`, in source order
fn literal_values<'a>(
    statements: &[&'a graphform_graph::Statement],
    predicate: &str,
) -> Vec<&'a Term> {
    statements
        .iter()
        .filter(|st| st.predicate.as_ref() == predicate && st.object.is_literal())
        .map(|st| &st.object)
        .collect()
}

/// Pick the best literal by language preference
///
/// Tries each preferred tag in order (case-insensitive exact match),
/// then the first untagged literal, then the first literal of any tag.
/// Returns the lexical text; `None` only for an empty input.
fn pick_best_language<'a>(values: &[&'a Term], preference: &[String]) -> Option<&'a str> {
    for lang in preference {
        for term in values {
            if term
                .language()
                .is_some_and(|tag| tag.eq_ignore_ascii_case(lang))
            {
                return term.as_literal_value();
            }
        }
    }
    values
        .iter()
        .find(|t| t.is_literal() && t.language().is_none())
        .or_else(|| values.first())
        .and_then(|t| t.as_literal_value())
}

#[cfg(test)]
mod tests {
    use super::*;
    use graphform_graph::Statement;

    const PARIS: &str = "http://example.org/Paris";
    const CITY: &str = "http://example.org/City";

    fn resolve(set: &StatementSet) -> Vec<TypeInfo> {
        resolve_types(&FieldEngineConfig::default(), set, PARIS)
    }

    #[test]
    fn test_label_picked_by_language_preference() {
        let set: StatementSet = [
            Statement::new(PARIS, rdf::TYPE, Term::iri(CITY)),
            Statement::new(CITY, rdfs::LABEL, Term::lang_string("Ville", "fr")),
            Statement::new(CITY, rdfs::LABEL, Term::lang_string("City", "en")),
        ]
        .into_iter()
        .collect();

        let types = resolve(&set);
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].iri.as_ref(), CITY);
        assert_eq!(types[0].label, "Ville");
        assert_eq!(types[0].description, None);
    }

    #[test]
    fn test_language_pick_is_input_order_independent() {
        // Same literals, reversed source order: preference still wins
        let set: StatementSet = [
            Statement::new(PARIS, rdf::TYPE, Term::iri(CITY)),
            Statement::new(CITY, rdfs::LABEL, Term::lang_string("City", "en")),
            Statement::new(CITY, rdfs::LABEL, Term::lang_string("Ville", "fr")),
        ]
        .into_iter()
        .collect();

        assert_eq!(resolve(&set)[0].label, "Ville");
    }

    #[test]
    fn test_label_falls_back_to_local_name() {
        let set: StatementSet = [Statement::new(PARIS, rdf::TYPE, Term::iri(CITY))]
            .into_iter()
            .collect();
        assert_eq!(resolve(&set)[0].label, "City");
    }

    #[test]
    fn test_description_prefers_dcterms_over_comment() {
        let set: StatementSet = [
            Statement::new(PARIS, rdf::TYPE, Term::iri(CITY)),
            Statement::new(CITY, rdfs::COMMENT, Term::lang_string("Un lieu", "fr")),
            Statement::new(
                CITY,
                dcterms::DESCRIPTION,
                Term::lang_string("Une commune", "fr"),
            ),
        ]
        .into_iter()
        .collect();

        assert_eq!(resolve(&set)[0].description.as_deref(), Some("Une commune"));
    }

    #[test]
    fn test_description_falls_back_to_comment() {
        let set: StatementSet = [
            Statement::new(PARIS, rdf::TYPE, Term::iri(CITY)),
            Statement::new(CITY, rdfs::COMMENT, Term::string("A place")),
        ]
        .into_iter()
        .collect();

        assert_eq!(resolve(&set)[0].description.as_deref(), Some("A place"));
    }

    #[test]
    fn test_duplicate_types_collapse_first_occurrence_order() {
        let other = "http://example.org/Capital";
        let set: StatementSet = [
            Statement::new(PARIS, rdf::TYPE, Term::iri(CITY)),
            Statement::new(PARIS, rdf::TYPE, Term::iri(other)),
            Statement::new(PARIS, rdf::TYPE, Term::iri(CITY)),
        ]
        .into_iter()
        .collect();

        let types = resolve(&set);
        assert_eq!(types.len(), 2);
        assert_eq!(types[0].iri.as_ref(), CITY);
        assert_eq!(types[1].iri.as_ref(), other);
    }

    #[test]
    fn test_non_iri_type_objects_skipped() {
        let set: StatementSet = [Statement::new(PARIS, rdf::TYPE, Term::string("City"))]
            .into_iter()
            .collect();
        assert!(resolve(&set).is_empty());
    }

    #[test]
    fn test_empty_set_resolves_to_empty() {
        assert!(resolve(&StatementSet::new()).is_empty());
    }

    #[test]
    fn test_pick_best_language_fallback_chain() {
        let prefs = vec!["fr".to_string(), "en".to_string()];

        // No preferred tag: untagged wins over other tags
        let de = Term::lang_string("Stadt", "de");
        let plain = Term::string("City");
        assert_eq!(
            pick_best_language(&[&de, &plain], &prefs),
            Some("City")
        );

        // Nothing untagged either: first of any tag
        let es = Term::lang_string("Ciudad", "es");
        assert_eq!(pick_best_language(&[&de, &es], &prefs), Some("Stadt"));

        // Case-insensitive tag match
        let fr_upper = Term::lang_string("Ville", "FR");
        assert_eq!(pick_best_language(&[&fr_upper], &prefs), Some("Ville"));

        // Empty input: absence, not an error
        assert_eq!(pick_best_language(&[], &prefs), None);
    }
}
