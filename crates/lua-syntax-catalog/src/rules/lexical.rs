//! Lexical rules: comments, literals, identifiers, keywords, operators

use crate::types::{Category, SyntaxRule};

/// Lua 5.1 reserved words
pub const LUA51_KEYWORDS: [&str; 21] = [
    "and", "break", "do", "else", "elseif", "end", "false", "for", "function", "if", "in",
    "local", "nil", "not", "or", "repeat", "return", "then", "true", "until", "while",
];

/// Operators and punctuation as (pattern, description, luau_only)
pub const OPERATORS: [(&str, &str, bool); 27] = [
    (r"\+", "Addition", false),
    (r"\-", "Subtraction or unary minus", false),
    (r"\*", "Multiplication", false),
    ("/", "Division", false),
    ("%", "Modulo", false),
    (r"\^", "Exponentiation", false),
    ("#", "Length operator or vararg in grammar", false),
    (r"\.", "Member or concatenation start", false),
    (r"\.\.", "Concatenation", false),
    ("==", "Equality", false),
    ("~=", "Inequality", false),
    ("<=", "Less or equal", false),
    (">=", "Greater or equal", false),
    ("<", "Less than", false),
    (">", "Greater than", false),
    ("=", "Assignment or equals in grammar", false),
    (r"\(", "Grouping or call start", false),
    (r"\)", "Grouping or call end", false),
    (r"\{", "Table constructor start", false),
    (r"\}", "Table constructor end", false),
    (r"\[", "Index or literal table key start", false),
    (r"\]", "Index or literal table key end", false),
    (";", "Statement separator", false),
    (":", "Method definition or label", false),
    (",", "List separator", false),
    (r"\?\?", "Coalesce (Luau only)", true),
    ("//", "Floor division (Luau only)", true),
];

pub fn comments() -> Vec<SyntaxRule> {
    vec![
        SyntaxRule::new(
            "Single-line comment",
            Category::Comment,
            "Starts with “--” and continues to end of line",
        )
        .with_pattern("^--.*$")
        .with_grammar(r#"comment ::= "--" { any_char_except_newline }"#),
        SyntaxRule::new(
            "Multi-line comment",
            Category::Comment,
            "Enclosed between “--[[” and “]]”",
        )
        .with_pattern(r"^--\[\[[\s\S]*?\]\]$")
        .with_grammar(r#"comment ::= "--[[" { any_char } "]]""#),
    ]
}

pub fn literals() -> Vec<SyntaxRule> {
    vec![
        SyntaxRule::new(
            "nil literal",
            Category::Literal,
            "Represents the absence of a useful value",
        )
        .with_pattern(r"\bnil\b"),
        SyntaxRule::new("boolean literal", Category::Literal, "true or false")
            .with_pattern(r"\b(true|false)\b"),
        SyntaxRule::new(
            "number literal",
            Category::Literal,
            "Decimal or hexadecimal number",
        )
        .with_pattern(r"\b0x[0-9A-Fa-f]+\b|\b\d+(?:\.\d*)?(?:[eE][+-]?\d+)?\b"),
        SyntaxRule::new(
            "string literal",
            Category::Literal,
            "Single- or double-quoted strings",
        )
        .with_pattern(r#""(?:\\.|[^"\\])*"|'(?:\\.|[^'\\])*'"#),
    ]
}

pub fn identifiers() -> Vec<SyntaxRule> {
    vec![SyntaxRule::new(
        "identifier",
        Category::Identifier,
        "Names for variables, functions, tables, etc.",
    )
    .with_pattern(r"\b[A-Za-z_][A-Za-z0-9_]*\b")
    .with_grammar(r#"identifier ::= letter | "_" { letter | digit | "_" }"#)]
}

/// Record for one reserved word; every Lua 5.1 keyword goes through this.
pub fn keyword_rule(word: &str) -> SyntaxRule {
    SyntaxRule::new(
        format!("keyword “{word}”"),
        Category::Keyword,
        "Lua 5.1 reserved word",
    )
    .with_pattern(format!(r"\b{word}\b"))
}

pub fn keyword_rules(words: &[&str]) -> Vec<SyntaxRule> {
    words.iter().map(|word| keyword_rule(word)).collect()
}

/// Keywords Luau adds on top of Lua 5.1
pub fn luau_keywords() -> Vec<SyntaxRule> {
    vec![
        SyntaxRule::new(
            "continue",
            Category::Keyword,
            "Skips to next iteration (Luau only)",
        )
        .with_pattern(r"\bcontinue\b")
        .luau_only(),
        SyntaxRule::new(
            "type",
            Category::Keyword,
            "Type alias declaration (Luau only)",
        )
        .with_pattern(r"\bexport\s+type\b|\btype\b")
        .luau_only(),
        SyntaxRule::new(
            "export",
            Category::Keyword,
            "Marks export in module (Luau only)",
        )
        .with_pattern(r"\bexport\b")
        .luau_only(),
    ]
}

/// Display form of an operator pattern: the pattern with escapes removed.
pub fn operator_symbol(pattern: &str) -> String {
    pattern.replace('\\', "")
}

pub fn operator_rule(pattern: &str, description: &str, luau_only: bool) -> SyntaxRule {
    let mut rule = SyntaxRule::new(
        format!("operator “{}”", operator_symbol(pattern)),
        Category::Operator,
        description,
    )
    .with_pattern(pattern);
    rule.luau_only = luau_only;
    rule
}

pub fn operator_rules(specs: &[(&str, &str, bool)]) -> Vec<SyntaxRule> {
    specs
        .iter()
        .map(|(pattern, description, luau_only)| operator_rule(pattern, description, *luau_only))
        .collect()
}

pub fn compound_assignment() -> SyntaxRule {
    SyntaxRule::new(
        "compound assignment",
        Category::Operator,
        "e.g. +=, -=, *=, /=, //=, ..= (Luau only)",
    )
    .with_pattern(r"\+=|\-=|\*=|/=|//=|%=|\^=|\.\.=")
    .luau_only()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_keyword_template() {
        let rule = keyword_rule("while");
        assert_eq!(rule.name, "keyword “while”");
        assert_eq!(rule.pattern.as_deref(), Some(r"\bwhile\b"));
        assert_eq!(rule.category, Category::Keyword);
        assert!(rule.is_portable());
    }

    #[test]
    fn test_operator_symbol_strips_escapes() {
        assert_eq!(operator_symbol(r"\.\."), "..");
        assert_eq!(operator_symbol(r"\?\?"), "??");
        assert_eq!(operator_symbol("~="), "~=");
    }

    #[test]
    fn test_operator_rules_carry_luau_flag() {
        let rules = operator_rules(&OPERATORS);
        assert_eq!(rules.len(), OPERATORS.len());

        let luau: Vec<_> = rules.iter().filter(|r| r.luau_only).map(|r| r.name.as_str()).collect();
        assert_eq!(luau, vec!["operator “??”", "operator “//”"]);
    }

    #[test]
    fn test_luau_keywords_are_flagged() {
        assert!(luau_keywords().iter().all(|r| r.luau_only && !r.synapse_only));
    }
}
