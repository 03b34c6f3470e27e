//! The syntax rule catalog and its read-only queries.

use crate::config::DialectFlags;
use crate::error::{CatalogError, Result};
use crate::matcher::{collect_matches, RuleMatch};
use crate::rules;
use crate::types::{Category, Classification, SyntaxRule};
use regex::Regex;
use tracing::{info, trace};

/// Ordered, immutable collection of syntax rules.
///
/// Every pattern is compiled when the catalog is built, so a catalog that
/// exists is known to be well-formed. Queries never fail; lookups signal
/// absence with `None`.
#[derive(Debug, Clone)]
pub struct SyntaxCatalog {
    rules: Vec<SyntaxRule>,
    /// Compiled pattern per rule, index-aligned with `rules`
    patterns: Vec<Option<Regex>>,
}

impl SyntaxCatalog {
    /// Build a catalog from records, keeping their order.
    ///
    /// Fails on the first record whose pattern does not compile; nothing is
    /// returned for a partially valid list.
    pub fn new(rules: Vec<SyntaxRule>) -> Result<Self> {
        let patterns = rules
            .iter()
            .map(|rule| {
                rule.pattern
                    .as_deref()
                    .map(|pattern| {
                        Regex::new(pattern).map_err(|source| CatalogError::InvalidPattern {
                            rule: rule.name.clone(),
                            source,
                        })
                    })
                    .transpose()
            })
            .collect::<Result<Vec<_>>>()?;

        Ok(Self { rules, patterns })
    }

    /// Build a fresh catalog from the bundled rule data
    pub fn builtin() -> Result<Self> {
        let catalog = Self::new(rules::builtin_rules())?;
        info!("Built syntax catalog: {} rules", catalog.len());
        Ok(catalog)
    }

    /// Every record, in construction order
    pub fn get_all(&self) -> &[SyntaxRule] {
        &self.rules
    }

    pub fn iter(&self) -> std::slice::Iter<'_, SyntaxRule> {
        self.rules.iter()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Records with the given category, in catalog order
    pub fn find_by_category(&self, category: Category) -> Vec<&SyntaxRule> {
        let found: Vec<_> = self.iter().filter(|r| r.category == category).collect();
        trace!(%category, count = found.len(), "find_by_category");
        found
    }

    /// Like [`find_by_category`](Self::find_by_category) for an unvalidated
    /// category string. Unknown values give an empty result.
    pub fn find_by_category_name(&self, category: &str) -> Vec<&SyntaxRule> {
        match category.parse::<Category>() {
            Ok(category) => self.find_by_category(category),
            Err(_) => Vec::new(),
        }
    }

    pub fn find_by_classification(&self, classification: Classification) -> Vec<&SyntaxRule> {
        self.iter()
            .filter(|r| r.classification == classification)
            .collect()
    }

    /// First record whose name is exactly `name`
    pub fn find_by_name(&self, name: &str) -> Option<&SyntaxRule> {
        self.iter().find(|r| r.name == name)
    }

    /// [`find_by_name`](Self::find_by_name) for callers propagating with `?`
    pub fn require_by_name(&self, name: &str) -> Result<&SyntaxRule> {
        self.find_by_name(name)
            .ok_or_else(|| CatalogError::RuleNotFound(name.to_string()))
    }

    /// Records whose dialect requirements are met by `flags`.
    ///
    /// Unflagged records are always included; `luau_only` needs `flags.luau`
    /// and `synapse_only` needs `flags.synapse`.
    pub fn find_applicable(&self, flags: DialectFlags) -> Vec<&SyntaxRule> {
        let found: Vec<_> = self.iter().filter(|r| flags.allows(r)).collect();
        trace!(luau = flags.luau, synapse = flags.synapse, count = found.len(), "find_applicable");
        found
    }

    /// Case-insensitive substring search over names and descriptions
    pub fn search(&self, query: &str) -> Vec<&SyntaxRule> {
        let needle = query.to_lowercase();
        self.iter()
            .filter(|r| {
                r.name.to_lowercase().contains(&needle)
                    || r.description.to_lowercase().contains(&needle)
            })
            .collect()
    }

    /// Every occurrence of every rule pattern in `source`.
    ///
    /// This is not a lexer: overlapping matches from different rules are all
    /// reported (the `identifier` rule matches every keyword too). Results
    /// are grouped by rule in catalog order, then by position. Rules without
    /// a pattern are skipped.
    pub fn match_pattern(&self, source: &str) -> Vec<RuleMatch<'_>> {
        let matches = collect_matches(self.compiled(), source);
        trace!(count = matches.len(), "match_pattern");
        matches
    }

    /// [`match_pattern`](Self::match_pattern) restricted to rules applicable
    /// under `flags`
    pub fn match_pattern_applicable(&self, source: &str, flags: DialectFlags) -> Vec<RuleMatch<'_>> {
        collect_matches(
            self.compiled().filter(|(rule, _)| flags.allows(rule)),
            source,
        )
    }

    /// Whether the named rule's pattern matches somewhere in `source`.
    ///
    /// `None` when no rule has that name or the rule carries no pattern.
    pub fn is_match_by_name(&self, name: &str, source: &str) -> Option<bool> {
        let index = self.rules.iter().position(|r| r.name == name)?;
        self.patterns[index]
            .as_ref()
            .map(|regex| regex.is_match(source))
    }

    /// Record count per category, in [`Category::ALL`] order
    pub fn category_counts(&self) -> Vec<(Category, usize)> {
        Category::ALL
            .into_iter()
            .map(|category| {
                let count = self.iter().filter(|r| r.category == category).count();
                (category, count)
            })
            .collect()
    }

    fn compiled(&self) -> impl Iterator<Item = (&SyntaxRule, &Regex)> + '_ {
        self.rules
            .iter()
            .zip(&self.patterns)
            .filter_map(|(rule, regex)| regex.as_ref().map(|regex| (rule, regex)))
    }
}

impl<'a> IntoIterator for &'a SyntaxCatalog {
    type Item = &'a SyntaxRule;
    type IntoIter = std::slice::Iter<'a, SyntaxRule>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
