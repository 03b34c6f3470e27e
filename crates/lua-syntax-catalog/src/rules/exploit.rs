//! Synapse X exploit-environment globals and debug-library extensions

use crate::types::{Category, SyntaxRule};

/// Global functions exposed by the Synapse X environment
pub const SYNAPSE_FUNCTIONS: [&str; 36] = [
    "getgenv",
    "getrenv",
    "getreg",
    "getgc",
    "getinstances",
    "getnilinstances",
    "getscripts",
    "getloadedmodules",
    "getconnections",
    "firesignal",
    "fireclickdetector",
    "firetouchinterest",
    "getsenv",
    "getcallingscript",
    "getrawmetatable",
    "setrawmetatable",
    "setreadonly",
    "isreadonly",
    "isrbxactive",
    "keypress",
    "keyrelease",
    "mouse1click",
    "mouse1press",
    "mouse1release",
    "mouse2click",
    "mousedownrel",
    "mousemoveabs",
    "hookfunction",
    "hookmetamethod",
    "newcclosure",
    "loadstring",
    "checkcaller",
    "iscclosure",
    "islclosure",
    "dumpstring",
    "decompile",
];

/// `debug.*` extensions added by Synapse X
pub const SYNAPSE_DEBUG_EXTENSIONS: [&str; 13] = [
    "debug.getconstants",
    "debug.getconstant",
    "debug.setconstant",
    "debug.getupvalue",
    "debug.setupvalue",
    "debug.getprotos",
    "debug.getproto",
    "debug.setproto",
    "debug.getstack",
    "debug.setstack",
    "debug.getlocals",
    "debug.getlocal",
    "debug.setlocal",
];

/// Call-site pattern `\b<name>\s*\(` with the name's regex metacharacters escaped
pub fn call_pattern(function: &str) -> String {
    format!(r"\b{}\s*\(", regex::escape(function))
}

pub fn synapse_function_rule(function: &str) -> SyntaxRule {
    SyntaxRule::new(
        format!("Synapse X function “{function}”"),
        Category::Metaprogramming,
        format!("Exploit-only function {function}()"),
    )
    .with_pattern(call_pattern(function))
    .synapse_only()
}

pub fn synapse_functions(names: &[&str]) -> Vec<SyntaxRule> {
    names.iter().map(|name| synapse_function_rule(name)).collect()
}

pub fn debug_extension_rule(function: &str) -> SyntaxRule {
    SyntaxRule::new(
        format!("Synapse debug extension “{function}”"),
        Category::Metaprogramming,
        format!("Debug library extension for {function}"),
    )
    .with_pattern(call_pattern(function))
    .synapse_only()
}

pub fn debug_extensions(names: &[&str]) -> Vec<SyntaxRule> {
    names.iter().map(|name| debug_extension_rule(name)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use regex::Regex;

    #[test]
    fn test_call_pattern_escapes_member_dot() {
        assert_eq!(call_pattern("debug.getproto"), r"\bdebug\.getproto\s*\(");

        let re = Regex::new(&call_pattern("debug.getproto")).unwrap();
        assert!(re.is_match("local p = debug.getproto(f, 1)"));
        assert!(!re.is_match("local p = debugXgetproto(f, 1)"));
    }

    #[test]
    fn test_synapse_function_template() {
        let rule = synapse_function_rule("hookfunction");
        assert_eq!(rule.name, "Synapse X function “hookfunction”");
        assert_eq!(rule.description, "Exploit-only function hookfunction()");
        assert_eq!(rule.category, Category::Metaprogramming);
        assert!(rule.synapse_only);
        assert!(!rule.luau_only);
    }

    #[test]
    fn test_debug_extensions_cover_every_name() {
        let rules = debug_extensions(&SYNAPSE_DEBUG_EXTENSIONS);
        assert_eq!(rules.len(), 13);
        assert!(rules.iter().all(|r| r.name.starts_with("Synapse debug extension “debug.")));
    }
}
