//! Exporting the catalog and importing it again must not change any query

use lua_syntax_catalog::interchange;
use lua_syntax_catalog::{catalog, Category, Classification, DialectFlags, SyntaxCatalog};
use serde_json::Value;

fn restored() -> SyntaxCatalog {
    let json = interchange::to_json_pretty(catalog()).expect("export");
    SyntaxCatalog::from_json(&json).expect("import")
}

#[test]
fn test_round_trip_preserves_records_and_order() {
    assert_eq!(restored().get_all(), catalog().get_all());
}

#[test]
fn test_round_trip_preserves_queries() {
    let restored = restored();

    for category in Category::ALL {
        assert_eq!(
            restored.find_by_category(category),
            catalog().find_by_category(category),
            "{category}"
        );
    }

    for classification in Classification::ALL {
        assert_eq!(
            restored.find_by_classification(classification),
            catalog().find_by_classification(classification)
        );
    }

    for flags in [DialectFlags::lua51(), DialectFlags::luau(), DialectFlags::all()] {
        assert_eq!(restored.find_applicable(flags), catalog().find_applicable(flags));
    }

    for rule in catalog() {
        assert_eq!(restored.find_by_name(&rule.name), Some(rule));
    }

    let source = "local t = { f = function(...) return getgenv() end } -- done";
    assert_eq!(restored.match_pattern(source), catalog().match_pattern(source));
}

#[test]
fn test_export_is_idempotent() {
    let once = interchange::to_json(catalog()).unwrap();
    let twice = interchange::to_json(&SyntaxCatalog::from_json(&once).unwrap()).unwrap();
    assert_eq!(once, twice);
}

#[test]
fn test_document_shape() {
    let document: Value = serde_json::from_str(&catalog().to_json().unwrap()).unwrap();
    let records = document.as_array().expect("top-level array");
    assert_eq!(records.len(), catalog().len());

    let continue_kw = records
        .iter()
        .find(|r| r["name"] == "continue")
        .expect("continue record");
    assert_eq!(continue_kw["category"], "keyword");
    assert_eq!(continue_kw["luauOnly"], true);
    assert!(continue_kw.get("synapseOnly").is_none());
    assert!(continue_kw.get("grammar").is_none());

    // Operators without the Luau flag omit it rather than writing false
    let plus = records
        .iter()
        .find(|r| r["name"] == "operator “+”")
        .expect("plus record");
    assert!(plus.get("luauOnly").is_none());

    let if_stmt = records
        .iter()
        .find(|r| r["name"] == "if statement")
        .expect("if record");
    assert!(if_stmt["grammar"].as_str().unwrap().contains("\"elseif\""));
}

#[test]
fn test_import_defaults_missing_flags() {
    let catalog = SyntaxCatalog::from_json(
        r#"[
            {"name": "nil literal", "category": "literal", "description": "nil", "pattern": "\\bnil\\b", "classification": "valid"},
            {"name": "continue", "category": "keyword", "description": "Luau", "luauOnly": true, "classification": "valid"}
        ]"#,
    )
    .unwrap();

    assert_eq!(catalog.find_applicable(DialectFlags::lua51()).len(), 1);
    assert_eq!(catalog.is_match_by_name("nil literal", "x = nil"), Some(true));
}
