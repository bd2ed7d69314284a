//! RDF Vocabulary Constants for graphform
//!
//! This crate provides a centralized location for the RDF vocabulary IRIs
//! used throughout the graphform ecosystem. All IRIs are stored fully
//! expanded, never prefixed.
//!
//! # Organization
//!
//! Constants are organized by vocabulary:
//! - `rdf` - RDF vocabulary (http://www.w3.org/1999/02/22-rdf-syntax-ns#)
//! - `rdfs` - RDFS vocabulary (http://www.w3.org/2000/01/rdf-schema#)
//! - `xsd` - XSD vocabulary (http://www.w3.org/2001/XMLSchema#)
//! - `dcterms` - Dublin Core terms (http://purl.org/dc/terms/)

/// RDF vocabulary constants
pub mod rdf {
    /// rdf namespace prefix
    pub const NS: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";

    /// rdf:type IRI
    pub const TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";

    /// rdf:langString IRI
    pub const LANG_STRING: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#langString";
}

/// RDFS vocabulary constants
pub mod rdfs {
    /// rdfs namespace prefix
    pub const NS: &str = "http://www.w3.org/2000/01/rdf-schema#";

    /// rdfs:label IRI
    pub const LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";

    /// rdfs:comment IRI
    pub const COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
}

/// XSD vocabulary constants
pub mod xsd {
    /// xsd namespace prefix
    pub const NS: &str = "http://www.w3.org/2001/XMLSchema#";

    /// xsd:string IRI
    pub const STRING: &str = "http://www.w3.org/2001/XMLSchema#string";

    /// xsd:boolean IRI
    pub const BOOLEAN: &str = "http://www.w3.org/2001/XMLSchema#boolean";

    /// xsd:integer IRI
    pub const INTEGER: &str = "http://www.w3.org/2001/XMLSchema#integer";

    /// xsd:decimal IRI
    pub const DECIMAL: &str = "http://www.w3.org/2001/XMLSchema#decimal";

    /// xsd:double IRI
    pub const DOUBLE: &str = "http://www.w3.org/2001/XMLSchema#double";

    /// xsd:float IRI
    pub const FLOAT: &str = "http://www.w3.org/2001/XMLSchema#float";

    /// xsd:date IRI
    pub const DATE: &str = "http://www.w3.org/2001/XMLSchema#date";

    /// xsd:dateTime IRI
    pub const DATE_TIME: &str = "http://www.w3.org/2001/XMLSchema#dateTime";

    /// Extract the local datatype name from an XSD datatype IRI
    ///
    /// Returns `None` when the IRI does not live under the XSD namespace.
    ///
    /// ```
    /// use graphform_vocab::xsd;
    ///
    /// assert_eq!(xsd::local_name(xsd::BOOLEAN), Some("boolean"));
    /// assert_eq!(xsd::local_name("http://example.org/custom"), None);
    /// ```
    #[inline]
    pub fn local_name(datatype_iri: &str) -> Option<&str> {
        datatype_iri.strip_prefix(NS)
    }

    /// Check if a datatype IRI is an XSD numeric type handled by graphform
    #[inline]
    pub fn is_numeric_datatype(datatype_iri: &str) -> bool {
        matches!(datatype_iri, INTEGER | DECIMAL | DOUBLE | FLOAT)
    }
}

/// Dublin Core terms vocabulary constants
pub mod dcterms {
    /// dcterms namespace prefix
    pub const NS: &str = "http://purl.org/dc/terms/";

    /// dcterms:description IRI
    pub const DESCRIPTION: &str = "http://purl.org/dc/terms/description";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_local_name_strips_xsd_namespace() {
        assert_eq!(xsd::local_name(xsd::BOOLEAN), Some("boolean"));
        assert_eq!(xsd::local_name(xsd::DATE_TIME), Some("dateTime"));
        assert_eq!(xsd::local_name(rdf::LANG_STRING), None);
        assert_eq!(xsd::local_name("not-an-iri"), None);
    }

    #[test]
    fn test_is_numeric_datatype() {
        assert!(xsd::is_numeric_datatype(xsd::INTEGER));
        assert!(xsd::is_numeric_datatype(xsd::DECIMAL));
        assert!(xsd::is_numeric_datatype(xsd::DOUBLE));
        assert!(xsd::is_numeric_datatype(xsd::FLOAT));
        assert!(!xsd::is_numeric_datatype(xsd::STRING));
        assert!(!xsd::is_numeric_datatype(xsd::DATE));
    }

    #[test]
    fn test_namespaces_are_prefixes_of_terms() {
        assert!(rdf::TYPE.starts_with(rdf::NS));
        assert!(rdfs::LABEL.starts_with(rdfs::NS));
        assert!(xsd::BOOLEAN.starts_with(xsd::NS));
        assert!(dcterms::DESCRIPTION.starts_with(dcterms::NS));
    }
}
