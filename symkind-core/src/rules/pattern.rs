//! Pattern rules: force a classification for names matching a regex.

use regex::Regex;

use crate::error::{Result, StrategyError};
use crate::rules::StrategyRule;
use crate::stats::SymbolStats;
use crate::symbol::{Classification, SymbolKind};

/// Assigns a fixed classification to every symbol whose full name matches
/// a regular expression.
///
/// The pattern is anchored at both ends when compiled: `rel-.*` matches
/// `rel-1.0`, while `foo` matches only the symbol named exactly `foo`,
/// never `foobar`. Compilation happens once at construction, which is the
/// only point a malformed pattern can surface; matching itself cannot
/// fail. Usage statistics play no part in the decision.
#[derive(Debug, Clone)]
pub struct PatternRule {
    regex: Regex,
    kind: SymbolKind,
}

impl PatternRule {
    fn compile(pattern: &str, kind: SymbolKind) -> Result<Self> {
        let regex = Regex::new(&format!("^(?:{pattern})$")).map_err(|source| {
            StrategyError::InvalidPattern {
                pattern: pattern.to_string(),
                source,
            }
        })?;
        Ok(Self { regex, kind })
    }

    /// Converts symbols matching `pattern` as branches.
    pub fn force_branch(pattern: &str) -> Result<Self> {
        Self::compile(pattern, SymbolKind::Branch)
    }

    /// Converts symbols matching `pattern` as tags.
    pub fn force_tag(pattern: &str) -> Result<Self> {
        Self::compile(pattern, SymbolKind::Tag)
    }

    /// Excludes symbols matching `pattern` from the conversion.
    pub fn exclude(pattern: &str) -> Result<Self> {
        Self::compile(pattern, SymbolKind::Excluded)
    }
}

impl StrategyRule for PatternRule {
    fn classify(&self, stats: &SymbolStats) -> Option<Classification> {
        if self.regex.is_match(&stats.symbol.name) {
            Some(Classification {
                symbol: stats.symbol.clone(),
                kind: self.kind,
            })
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        match self.kind {
            SymbolKind::Branch => "force-branch",
            SymbolKind::Tag => "force-tag",
            SymbolKind::Excluded => "exclude",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Symbol;

    fn stats(name: &str) -> SymbolStats {
        // Heavy branch usage, to prove the counters are ignored.
        SymbolStats {
            symbol: Symbol::new(1, name),
            tag_create_count: 0,
            branch_create_count: 9,
            branch_commit_count: 9,
        }
    }

    #[test]
    fn test_matches_assign_the_forced_kind() {
        let rule = PatternRule::force_tag("rel-.*").unwrap();
        let decision = rule.classify(&stats("rel-1.0")).unwrap();
        assert_eq!(decision.kind, SymbolKind::Tag);
        assert_eq!(decision.symbol.name, "rel-1.0");
    }

    #[test]
    fn test_non_matches_abstain() {
        let rule = PatternRule::force_branch("topic-.*").unwrap();
        assert!(rule.classify(&stats("rel-1.0")).is_none());
    }

    #[test]
    fn test_pattern_must_match_the_whole_name() {
        let rule = PatternRule::force_branch("foo").unwrap();
        assert!(rule.classify(&stats("foo")).is_some());
        assert!(rule.classify(&stats("foobar")).is_none());
        assert!(rule.classify(&stats("xfoo")).is_none());
    }

    #[test]
    fn test_alternation_stays_inside_the_anchors() {
        // Without the non-capturing group the trailing anchor would bind
        // to the last alternative only.
        let rule = PatternRule::exclude("a|b").unwrap();
        assert!(rule.classify(&stats("a")).is_some());
        assert!(rule.classify(&stats("b")).is_some());
        assert!(rule.classify(&stats("ab")).is_none());
    }

    #[test]
    fn test_invalid_pattern_fails_at_construction() {
        let err = PatternRule::force_tag("rel-(").unwrap_err();
        match err {
            StrategyError::InvalidPattern { pattern, .. } => assert_eq!(pattern, "rel-("),
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_names_follow_the_forced_kind() {
        assert_eq!(PatternRule::force_branch("x").unwrap().name(), "force-branch");
        assert_eq!(PatternRule::force_tag("x").unwrap().name(), "force-tag");
        assert_eq!(PatternRule::exclude("x").unwrap().name(), "exclude");
    }
}
