//! Pattern matches reported by [`SyntaxCatalog::match_pattern`](crate::SyntaxCatalog::match_pattern)

use crate::types::SyntaxRule;
use regex::Regex;
use serde::Serialize;
use std::ops::Range;

/// Byte range into the searched text
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end - self.start
    }

    pub fn is_empty(&self) -> bool {
        self.start == self.end
    }

    pub fn range(&self) -> Range<usize> {
        self.start..self.end
    }

    pub fn overlaps(&self, other: &Span) -> bool {
        self.start < other.end && other.start < self.end
    }
}

impl From<Range<usize>> for Span {
    fn from(range: Range<usize>) -> Self {
        Self::new(range.start, range.end)
    }
}

/// One occurrence of a rule's pattern.
///
/// Several rules may report the same or overlapping spans (a keyword is also
/// a structurally valid identifier). Picking a winner is up to the consumer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RuleMatch<'c> {
    pub rule: &'c SyntaxRule,
    pub span: Span,
    /// The matched slice of the input
    pub text: String,
}

/// Scan `source` with every (rule, regex) pair.
///
/// Results are grouped by rule in iteration order, then ordered by position;
/// each rule reports its own non-overlapping, leftmost-first matches.
pub(crate) fn collect_matches<'c>(
    compiled: impl IntoIterator<Item = (&'c SyntaxRule, &'c Regex)>,
    source: &str,
) -> Vec<RuleMatch<'c>> {
    compiled
        .into_iter()
        .flat_map(|(rule, regex)| {
            regex.find_iter(source).map(move |m| RuleMatch {
                rule,
                span: Span::from(m.range()),
                text: m.as_str().to_string(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Category;

    #[test]
    fn test_span_overlap() {
        let a = Span::new(0, 5);
        assert!(a.overlaps(&Span::new(4, 6)));
        assert!(!a.overlaps(&Span::new(5, 6)));
        assert_eq!(a.len(), 5);
        assert!(Span::new(3, 3).is_empty());
    }

    #[test]
    fn test_collect_matches_reports_every_occurrence() {
        let rule = SyntaxRule::new("identifier", Category::Identifier, "names")
            .with_pattern(r"\b[A-Za-z_][A-Za-z0-9_]*\b");
        let regex = Regex::new(rule.pattern.as_deref().unwrap()).unwrap();

        let matches = collect_matches([(&rule, &regex)], "local x = y");
        let texts: Vec<_> = matches.iter().map(|m| m.text.as_str()).collect();
        assert_eq!(texts, vec!["local", "x", "y"]);
        assert_eq!(matches[1].span, Span::new(6, 7));
    }
}
