//! Record types for the syntax catalog

use serde::{Deserialize, Serialize};
use std::fmt;

/// Primary category of a syntax rule.
///
/// Closed set: the catalog never introduces values outside this enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    Keyword,
    Operator,
    Literal,
    Identifier,
    Comment,
    Control,
    Expression,
    Function,
    Metaprogramming,
    Grammar,
}

impl Category {
    /// Every category, in declaration order
    pub const ALL: [Category; 10] = [
        Category::Keyword,
        Category::Operator,
        Category::Literal,
        Category::Identifier,
        Category::Comment,
        Category::Control,
        Category::Expression,
        Category::Function,
        Category::Metaprogramming,
        Category::Grammar,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Keyword => "keyword",
            Category::Operator => "operator",
            Category::Literal => "literal",
            Category::Identifier => "identifier",
            Category::Comment => "comment",
            Category::Control => "control",
            Category::Expression => "expression",
            Category::Function => "function",
            Category::Metaprogramming => "metaprogramming",
            Category::Grammar => "grammar",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == s)
            .ok_or_else(|| format!("unknown category: {s}"))
    }
}

/// Whether code using a construct is accepted under the target dialect rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Classification {
    /// Well-formed
    Valid,
    /// Rejected
    Invalid,
    /// Accepted but discouraged
    Deprecated,
}

impl Classification {
    pub const ALL: [Classification; 3] = [
        Classification::Valid,
        Classification::Invalid,
        Classification::Deprecated,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Classification::Valid => "valid",
            Classification::Invalid => "invalid",
            Classification::Deprecated => "deprecated",
        }
    }
}

impl fmt::Display for Classification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Classification {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "valid" => Ok(Classification::Valid),
            "invalid" => Ok(Classification::Invalid),
            "deprecated" => Ok(Classification::Deprecated),
            other => Err(format!("unknown classification: {other}")),
        }
    }
}

/// Language layer a rule belongs to.
///
/// Layers stack: Luau extends Lua 5.1, Synapse X adds exploit globals on top
/// of Luau.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    Lua51,
    Luau,
    Synapse,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Dialect::Lua51 => write!(f, "Lua 5.1"),
            Dialect::Luau => write!(f, "Luau"),
            Dialect::Synapse => write!(f, "Synapse X"),
        }
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// One fact about the lexicon or structure of the target grammar.
///
/// Records are flat: a `grammar` production that mentions `block` does not
/// link to any other record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SyntaxRule {
    /// Human-readable name (unique in practice, not enforced)
    pub name: String,
    pub category: Category,
    pub description: String,
    /// EBNF-like production, for structural constructs
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub grammar: Option<String>,
    /// Regex recognizing instances of the construct in raw source
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pattern: Option<String>,
    /// Exists only in Luau
    #[serde(default, skip_serializing_if = "is_false")]
    pub luau_only: bool,
    /// Exploit-environment global or debug-library extension
    #[serde(default, skip_serializing_if = "is_false")]
    pub synapse_only: bool,
    pub classification: Classification,
}

impl SyntaxRule {
    /// Create a valid rule with no grammar, pattern or dialect flags
    pub fn new(name: impl Into<String>, category: Category, description: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category,
            description: description.into(),
            grammar: None,
            pattern: None,
            luau_only: false,
            synapse_only: false,
            classification: Classification::Valid,
        }
    }

    pub fn with_grammar(mut self, grammar: impl Into<String>) -> Self {
        self.grammar = Some(grammar.into());
        self
    }

    pub fn with_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.pattern = Some(pattern.into());
        self
    }

    pub fn luau_only(mut self) -> Self {
        self.luau_only = true;
        self
    }

    pub fn synapse_only(mut self) -> Self {
        self.synapse_only = true;
        self
    }

    pub fn with_classification(mut self, classification: Classification) -> Self {
        self.classification = classification;
        self
    }

    /// Applies to every dialect (neither flag set)
    pub fn is_portable(&self) -> bool {
        !self.luau_only && !self.synapse_only
    }

    pub fn is_valid(&self) -> bool {
        self.classification == Classification::Valid
    }

    /// Highest layer this rule needs.
    pub fn required_dialect(&self) -> Dialect {
        if self.synapse_only {
            Dialect::Synapse
        } else if self.luau_only {
            Dialect::Luau
        } else {
            Dialect::Lua51
        }
    }
}
