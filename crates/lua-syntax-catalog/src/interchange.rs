//! JSON interchange document.
//!
//! The document is a flat array of records:
//!
//! ```json
//! [
//!   {
//!     "name": "continue",
//!     "category": "keyword",
//!     "description": "Skips to next iteration (Luau only)",
//!     "pattern": "\\bcontinue\\b",
//!     "luauOnly": true,
//!     "classification": "valid"
//!   }
//! ]
//! ```
//!
//! `grammar` and `pattern` are omitted when absent, and the dialect flags are
//! omitted when false. Imports read category and classification as plain
//! strings first, so a bad value is reported against the record's name rather
//! than as a bare serde error.

use crate::catalog::SyntaxCatalog;
use crate::error::{CatalogError, Result};
use crate::types::{Category, Classification, SyntaxRule};
use serde::Deserialize;
use std::io::{Read, Write};
use tracing::debug;

/// A record as written in the document, before validation
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawRule {
    name: String,
    category: String,
    description: String,
    #[serde(default)]
    grammar: Option<String>,
    #[serde(default)]
    pattern: Option<String>,
    #[serde(default)]
    luau_only: bool,
    #[serde(default)]
    synapse_only: bool,
    classification: String,
}

impl TryFrom<RawRule> for SyntaxRule {
    type Error = CatalogError;

    fn try_from(raw: RawRule) -> Result<Self> {
        let category = raw
            .category
            .parse::<Category>()
            .map_err(|_| CatalogError::UnknownCategory {
                rule: raw.name.clone(),
                value: raw.category.clone(),
            })?;
        let classification = raw
            .classification
            .parse::<Classification>()
            .map_err(|_| CatalogError::UnknownClassification {
                rule: raw.name.clone(),
                value: raw.classification.clone(),
            })?;

        Ok(SyntaxRule {
            name: raw.name,
            category,
            description: raw.description,
            grammar: raw.grammar,
            pattern: raw.pattern,
            luau_only: raw.luau_only,
            synapse_only: raw.synapse_only,
            classification,
        })
    }
}

pub fn to_json(catalog: &SyntaxCatalog) -> Result<String> {
    Ok(serde_json::to_string(catalog.get_all())?)
}

pub fn to_json_pretty(catalog: &SyntaxCatalog) -> Result<String> {
    Ok(serde_json::to_string_pretty(catalog.get_all())?)
}

pub fn to_writer<W: Write>(catalog: &SyntaxCatalog, writer: W) -> Result<()> {
    serde_json::to_writer_pretty(writer, catalog.get_all())?;
    Ok(())
}

fn validate(raw: Vec<RawRule>) -> Result<SyntaxCatalog> {
    let rules = raw
        .into_iter()
        .map(SyntaxRule::try_from)
        .collect::<Result<Vec<_>>>()?;
    debug!("Imported {} rules from interchange document", rules.len());
    SyntaxCatalog::new(rules)
}

impl SyntaxCatalog {
    /// Rebuild a catalog from an interchange document
    pub fn from_json(document: &str) -> Result<Self> {
        validate(serde_json::from_str(document)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        validate(serde_json::from_reader(reader)?)
    }

    pub fn to_json(&self) -> Result<String> {
        to_json(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unknown_category_names_record() {
        let err = SyntaxCatalog::from_json(
            r#"[{"name":"label","category":"statement","description":"::name::","classification":"valid"}]"#,
        )
        .unwrap_err();

        match err {
            CatalogError::UnknownCategory { rule, value } => {
                assert_eq!(rule, "label");
                assert_eq!(value, "statement");
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_classification_names_record() {
        let err = SyntaxCatalog::from_json(
            r#"[{"name":"goto","category":"keyword","description":"x","classification":"obsolete"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::UnknownClassification { .. }));
        assert_eq!(err.rule_name(), Some("goto"));
    }

    #[test]
    fn test_bad_pattern_fails_import() {
        let err = SyntaxCatalog::from_json(
            r#"[{"name":"bad","category":"grammar","description":"x","pattern":"[a-","classification":"valid"}]"#,
        )
        .unwrap_err();
        assert!(matches!(err, CatalogError::InvalidPattern { .. }));
    }

    #[test]
    fn test_malformed_document() {
        let err = SyntaxCatalog::from_json(r#"{"name":"not an array"}"#).unwrap_err();
        assert!(matches!(err, CatalogError::Interchange(_)));
    }

    #[test]
    fn test_writer_and_reader_round_trip() {
        let catalog = SyntaxCatalog::builtin().unwrap();
        let mut buffer = Vec::new();
        to_writer(&catalog, &mut buffer).unwrap();

        let restored = SyntaxCatalog::from_reader(buffer.as_slice()).unwrap();
        assert_eq!(restored.get_all(), catalog.get_all());
    }

    #[test]
    fn test_export_omits_default_fields() {
        let catalog = SyntaxCatalog::new(vec![SyntaxRule::new(
            "identifier",
            crate::Category::Identifier,
            "Names",
        )])
        .unwrap();
        assert_eq!(
            to_json(&catalog).unwrap(),
            r#"[{"name":"identifier","category":"identifier","description":"Names","classification":"valid"}]"#
        );
    }
}
