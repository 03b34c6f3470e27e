//! Bundled rule data.
//!
//! Records are assembled group by group. Groups that are near-identical
//! records (keywords, operators, exploit functions) are generated from a list
//! through one builder each, so the template is visible in a single place.
//! Group order is the catalog order.

pub mod exploit;
pub mod lexical;
pub mod structure;

use crate::types::SyntaxRule;
use tracing::debug;

/// One named group of records
pub struct RuleGroup {
    pub name: &'static str,
    pub rules: Vec<SyntaxRule>,
}

impl RuleGroup {
    fn new(name: &'static str, rules: Vec<SyntaxRule>) -> Self {
        Self { name, rules }
    }
}

/// Every bundled group, in catalog order
pub fn builtin_groups() -> Vec<RuleGroup> {
    let mut operators = lexical::operator_rules(&lexical::OPERATORS);
    operators.push(lexical::compound_assignment());

    let mut keywords = lexical::keyword_rules(&lexical::LUA51_KEYWORDS);
    keywords.extend(lexical::luau_keywords());

    vec![
        RuleGroup::new("comments", lexical::comments()),
        RuleGroup::new("literals", lexical::literals()),
        RuleGroup::new("identifiers", lexical::identifiers()),
        RuleGroup::new("keywords", keywords),
        RuleGroup::new("operators", operators),
        RuleGroup::new("control", structure::control_structures()),
        RuleGroup::new("functions", structure::functions()),
        RuleGroup::new("tables", structure::tables()),
        RuleGroup::new("modules", structure::modules()),
        RuleGroup::new("type annotations", structure::type_annotations()),
        RuleGroup::new("lua patterns", structure::lua_patterns()),
        RuleGroup::new("invalid", structure::invalid_constructs()),
        RuleGroup::new(
            "synapse functions",
            exploit::synapse_functions(&exploit::SYNAPSE_FUNCTIONS),
        ),
        RuleGroup::new(
            "synapse debug",
            exploit::debug_extensions(&exploit::SYNAPSE_DEBUG_EXTENSIONS),
        ),
    ]
}

/// All bundled records, flattened in group order
pub fn builtin_rules() -> Vec<SyntaxRule> {
    builtin_groups()
        .into_iter()
        .flat_map(|group| {
            debug!(group = group.name, rules = group.rules.len(), "Assembled rule group");
            group.rules
        })
        .collect()
}
