//! Error types for lua-syntax-catalog

use thiserror::Error;

/// Errors raised while building, importing or querying a catalog.
///
/// Construction variants always carry the name of the offending record so a
/// broken catalog can be traced back to its data.
#[derive(Error, Debug)]
pub enum CatalogError {
    /// A record declared a category outside the closed set.
    #[error("rule '{rule}': unknown category '{value}'")]
    UnknownCategory { rule: String, value: String },

    /// A record declared a classification outside the closed set.
    #[error("rule '{rule}': unknown classification '{value}'")]
    UnknownClassification { rule: String, value: String },

    /// A record's pattern is not a valid regular expression.
    #[error("rule '{rule}': invalid pattern: {source}")]
    InvalidPattern {
        rule: String,
        #[source]
        source: regex::Error,
    },

    /// Lookup by name found nothing.
    #[error("Rule not found: {0}")]
    RuleNotFound(String),

    /// The interchange document is not well-formed JSON of the expected shape.
    #[error("Failed to parse interchange document: {0}")]
    Interchange(#[from] serde_json::Error),

    /// Configuration could not be parsed.
    #[error("Failed to parse catalog config: {0}")]
    Config(#[from] toml::de::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl CatalogError {
    /// Name of the record that caused a construction failure, if any.
    pub fn rule_name(&self) -> Option<&str> {
        match self {
            CatalogError::UnknownCategory { rule, .. }
            | CatalogError::UnknownClassification { rule, .. }
            | CatalogError::InvalidPattern { rule, .. } => Some(rule.as_str()),
            CatalogError::RuleNotFound(name) => Some(name.as_str()),
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, CatalogError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_construction_errors_name_the_rule() {
        let err = CatalogError::UnknownCategory {
            rule: "broken".to_string(),
            value: "statement".to_string(),
        };
        assert_eq!(err.rule_name(), Some("broken"));
        assert_eq!(err.to_string(), "rule 'broken': unknown category 'statement'");
    }

    #[test]
    fn test_invalid_pattern_keeps_regex_source() {
        let source = regex::Regex::new("(").unwrap_err();
        let err = CatalogError::InvalidPattern {
            rule: "open paren".to_string(),
            source,
        };
        assert!(err.to_string().starts_with("rule 'open paren': invalid pattern"));
        assert!(std::error::Error::source(&err).is_some());
    }
}
