//! Engine configuration
//!
//! Historically this engine existed as two near-identical copies that
//! differed only in the textarea length threshold, whether `rdf:type`
//! was excluded from the field model, and their transport fallback.
//! Those differences are configuration here, owned per engine instance
//! rather than process-wide, so engines with different preferences can
//! coexist.

/// Configuration for a [`crate::FieldEngine`]
#[derive(Clone, Debug)]
pub struct FieldEngineConfig {
    /// Plain literals longer than this render as a textarea
    pub textarea_threshold: usize,
    /// Language tags to try, in order, when picking among tagged literals
    pub language_preference: Vec<String>,
    /// Drop the `rdf:type` entry from the built field model
    ///
    /// Types are usually displayed separately via
    /// [`crate::FieldEngine::resolve_types`] rather than as an editable
    /// field.
    pub exclude_rdf_type: bool,
}

impl Default for FieldEngineConfig {
    fn default() -> Self {
        Self {
            textarea_threshold: 140,
            language_preference: vec!["fr".to_string(), "en".to_string()],
            exclude_rdf_type: false,
        }
    }
}

impl FieldEngineConfig {
    /// Create the default configuration
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the textarea length threshold
    pub fn with_textarea_threshold(mut self, threshold: usize) -> Self {
        self.textarea_threshold = threshold;
        self
    }

    /// Set the language preference order
    pub fn with_language_preference<I, S>(mut self, langs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.language_preference = langs.into_iter().map(Into::into).collect();
        self
    }

    /// Exclude `rdf:type` from built field models
    pub fn with_exclude_rdf_type(mut self, exclude: bool) -> Self {
        self.exclude_rdf_type = exclude;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = FieldEngineConfig::default();
        assert_eq!(config.textarea_threshold, 140);
        assert_eq!(config.language_preference, vec!["fr", "en"]);
        assert!(!config.exclude_rdf_type);
    }

    #[test]
    fn test_builder_methods() {
        let config = FieldEngineConfig::new()
            .with_textarea_threshold(120)
            .with_language_preference(["en", "de"])
            .with_exclude_rdf_type(true);
        assert_eq!(config.textarea_threshold, 120);
        assert_eq!(config.language_preference, vec!["en", "de"]);
        assert!(config.exclude_rdf_type);
    }
}
