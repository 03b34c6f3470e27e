//! Structural rules: control flow, functions, tables, modules, Luau type
//! annotations, Lua pattern metacharacters, and known-invalid constructs.

use crate::types::{Category, Classification, SyntaxRule};

pub fn control_structures() -> Vec<SyntaxRule> {
    vec![
        SyntaxRule::new("if statement", Category::Control, "Conditional branching")
            .with_grammar(concat!(
                "if_statement ::= \"if\" expression \"then\" block {\n",
                "    \"elseif\" expression \"then\" block\n",
                "} [ \"else\" block ] \"end\"",
            ))
            .with_pattern(r"\bif\b[\s\S]+?\bend\b"),
        SyntaxRule::new("while loop", Category::Control, "Pre-test loop")
            .with_grammar(r#"while_loop ::= "while" expression "do" block "end""#)
            .with_pattern(r"\bwhile\b[\s\S]+?\bend\b"),
        SyntaxRule::new("repeat loop", Category::Control, "Post-test loop")
            .with_grammar(r#"repeat_loop ::= "repeat" block "until" expression"#)
            .with_pattern(r"\brepeat\b[\s\S]+?\buntil\b"),
        SyntaxRule::new(
            "numeric for loop",
            Category::Control,
            "for i = init, limit [, step] do ... end",
        )
        .with_grammar(
            r#"numeric_for ::= "for" Name "=" exp1 "," exp2 ["," exp3] "do" block "end""#,
        )
        .with_pattern(r"\bfor\s+[A-Za-z_][A-Za-z0-9_]*\s*=.+?\bend\b"),
        SyntaxRule::new(
            "generic for loop",
            Category::Control,
            "for k,v in iterator() do ... end",
        )
        .with_grammar(r#"generic_for ::= "for" name_list "in" exp_list "do" block "end""#)
        .with_pattern(r"\bfor\s+.+?\bin\b.+?\bend\b"),
        SyntaxRule::new("break", Category::Control, "Exit innermost loop")
            .with_pattern(r"\bbreak\b"),
    ]
}

pub fn functions() -> Vec<SyntaxRule> {
    vec![
        SyntaxRule::new(
            "function definition",
            Category::Function,
            "Defines a named or anonymous function",
        )
        .with_grammar(concat!(
            "funcdef ::= \"function\" funcname funcbody\n",
            "funcname ::= Name { \".\" Name } [ \":\" Name ]\n",
            "funcbody ::= \"(\" [ parlist ] \")\" block \"end\"",
        ))
        .with_pattern(r"\bfunction\b[\s\S]+?\bend\b"),
        SyntaxRule::new(
            "anonymous function",
            Category::Function,
            "Function value expression",
        )
        .with_grammar(r#"anonfunc ::= "function" "(" [parlist] ")" block "end""#)
        .with_pattern(r"function\s*\("),
        SyntaxRule::new(
            "varargs",
            Category::Expression,
            "Represents variable number of args (“...”)",
        )
        .with_pattern(r"\.\.\."),
    ]
}

pub fn tables() -> Vec<SyntaxRule> {
    vec![SyntaxRule::new(
        "table constructor",
        Category::Expression,
        "Defines a table literal",
    )
    .with_grammar(concat!(
        "tableconstructor ::= \"{\" [fieldlist] \"}\"\n",
        "fieldlist ::= field { fieldsep field } [fieldsep]\n",
        "field ::= \"[\" exp \"]\" \"=\" exp | Name \"=\" exp | exp\n",
        "fieldsep ::= \",\" | \";\"",
    ))
    .with_pattern(r"\{[\s\S]*?\}")]
}

pub fn modules() -> Vec<SyntaxRule> {
    vec![SyntaxRule::new(
        "require",
        Category::Function,
        "Loads a ModuleScript (Roblox) or chunk (Lua)",
    )
    .with_pattern(r"\brequire\s*\(")]
}

/// Luau gradual-typing annotations
pub fn type_annotations() -> Vec<SyntaxRule> {
    vec![
        SyntaxRule::new(
            "parameter type annotation",
            Category::Grammar,
            "function foo(x: number): string",
        )
        .with_pattern(r"\w+\s*:\s*[A-Za-z_][A-Za-z0-9_<>]*")
        .luau_only(),
        SyntaxRule::new(
            "return type annotation",
            Category::Grammar,
            "function foo(): Type",
        )
        .with_pattern(r"\)\s*:\s*[A-Za-z_][A-Za-z0-9_<>]*")
        .luau_only(),
    ]
}

/// Magic characters of Lua's own pattern language (string.find, gsub, ...)
pub fn lua_patterns() -> Vec<SyntaxRule> {
    vec![SyntaxRule::new(
        "pattern matching special char",
        Category::Grammar,
        "Lua patterns (e.g. “%a”, “%d”, “.”, “*”, “+”)",
    )
    .with_pattern(r"%\w|[%.*+\-?\[\]^$]")]
}

/// Constructs that look plausible but are rejected by Lua 5.1
pub fn invalid_constructs() -> Vec<SyntaxRule> {
    vec![
        SyntaxRule::new(
            "goto",
            Category::Keyword,
            "“goto” not supported in Lua 5.1 (deprecated)",
        )
        .with_pattern(r"\bgoto\b")
        .with_classification(Classification::Invalid),
        SyntaxRule::new(
            "function with vararg before named params",
            Category::Grammar,
            "“function(a, ..., b)” invalid in Lua 5.1",
        )
        .with_pattern(r"function\s*\(.*\.\.\..*,.*\)")
        .with_classification(Classification::Invalid),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_structural_rules_carry_grammar() {
        for rule in control_structures().iter().chain(tables().iter()) {
            if rule.name == "break" {
                assert!(rule.grammar.is_none());
            } else {
                assert!(rule.grammar.is_some(), "{} should carry a grammar", rule.name);
            }
        }
    }

    #[test]
    fn test_if_grammar_is_multiline_production() {
        let rules = control_structures();
        let grammar = rules[0].grammar.as_deref().unwrap();
        assert!(grammar.starts_with("if_statement ::= \"if\""));
        assert!(grammar.ends_with("[ \"else\" block ] \"end\""));
        assert_eq!(grammar.lines().count(), 3);
    }

    #[test]
    fn test_invalid_constructs_are_classified_invalid() {
        assert!(invalid_constructs()
            .iter()
            .all(|r| r.classification == Classification::Invalid));
    }

    #[test]
    fn test_type_annotations_are_luau_only() {
        assert!(type_annotations().iter().all(|r| r.luau_only));
    }
}
