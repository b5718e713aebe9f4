//! Statistical rules: decide from how a symbol was actually used.

use crate::rules::StrategyRule;
use crate::stats::SymbolStats;
use crate::symbol::Classification;

/// Classifies a symbol that was only ever used one way.
///
/// Tag creations with no branch activity make it a tag; branch creations
/// or branch commits with no tag creations make it a branch. A symbol
/// with both kinds of evidence is ambiguous, and a symbol with no usage
/// at all carries no evidence; the rule abstains in both cases and leaves
/// the decision to a later rule.
#[derive(Debug, Clone, Copy, Default)]
pub struct UnambiguousUsageRule;

impl UnambiguousUsageRule {
    /// Creates the rule.
    pub fn new() -> Self {
        Self
    }
}

impl StrategyRule for UnambiguousUsageRule {
    fn classify(&self, stats: &SymbolStats) -> Option<Classification> {
        let used_as_tag = stats.tag_create_count > 0;
        let used_as_branch = stats.branch_create_count > 0 || stats.branch_commit_count > 0;
        match (used_as_tag, used_as_branch) {
            (true, false) => Some(Classification::tag(stats.symbol.clone())),
            (false, true) => Some(Classification::branch(stats.symbol.clone())),
            // Used both ways, or not at all; defer.
            _ => None,
        }
    }

    fn name(&self) -> &'static str {
        "unambiguous-usage"
    }
}

/// Classifies a symbol as a branch if anything was ever committed on it.
///
/// A commit on the name is treated as decisive branch evidence no matter
/// how often it was also used as a tag. Place this ahead of
/// [`UnambiguousUsageRule`] when commit activity should win outright.
#[derive(Debug, Clone, Copy, Default)]
pub struct BranchIfCommitsRule;

impl BranchIfCommitsRule {
    /// Creates the rule.
    pub fn new() -> Self {
        Self
    }
}

impl StrategyRule for BranchIfCommitsRule {
    fn classify(&self, stats: &SymbolStats) -> Option<Classification> {
        if stats.branch_commit_count > 0 {
            Some(Classification::branch(stats.symbol.clone()))
        } else {
            None
        }
    }

    fn name(&self) -> &'static str {
        "branch-if-commits"
    }
}

/// Classifies by whichever usage was more common, favoring tags on a tie.
///
/// This rule never abstains. Equal counts, including a symbol that was
/// never used at all, resolve to a tag.
#[derive(Debug, Clone, Copy, Default)]
pub struct HeuristicRule;

impl HeuristicRule {
    /// Creates the rule.
    pub fn new() -> Self {
        Self
    }
}

impl StrategyRule for HeuristicRule {
    fn classify(&self, stats: &SymbolStats) -> Option<Classification> {
        if stats.tag_create_count >= stats.branch_create_count {
            Some(Classification::tag(stats.symbol.clone()))
        } else {
            Some(Classification::branch(stats.symbol.clone()))
        }
    }

    fn name(&self) -> &'static str {
        "heuristic"
    }
}

/// Classifies every symbol as a branch, unconditionally.
///
/// Typically the last rule in a chain, where it guarantees total coverage
/// and makes unresolved-symbol errors impossible.
#[derive(Debug, Clone, Copy, Default)]
pub struct AllBranchRule;

impl AllBranchRule {
    /// Creates the rule.
    pub fn new() -> Self {
        Self
    }
}

impl StrategyRule for AllBranchRule {
    fn classify(&self, stats: &SymbolStats) -> Option<Classification> {
        Some(Classification::branch(stats.symbol.clone()))
    }

    fn name(&self) -> &'static str {
        "all-branch"
    }
}

/// Classifies every symbol as a tag, unconditionally.
///
/// The tag counterpart of [`AllBranchRule`].
#[derive(Debug, Clone, Copy, Default)]
pub struct AllTagRule;

impl AllTagRule {
    /// Creates the rule.
    pub fn new() -> Self {
        Self
    }
}

impl StrategyRule for AllTagRule {
    fn classify(&self, stats: &SymbolStats) -> Option<Classification> {
        Some(Classification::tag(stats.symbol.clone()))
    }

    fn name(&self) -> &'static str {
        "all-tag"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::{Symbol, SymbolKind};

    fn stats(tag_creates: u32, branch_creates: u32, branch_commits: u32) -> SymbolStats {
        SymbolStats {
            symbol: Symbol::new(1, "sym"),
            tag_create_count: tag_creates,
            branch_create_count: branch_creates,
            branch_commit_count: branch_commits,
        }
    }

    fn kind_of(rule: &dyn StrategyRule, stats: &SymbolStats) -> Option<SymbolKind> {
        rule.classify(stats).map(|decision| decision.kind)
    }

    #[test]
    fn test_unambiguous_tag_only_usage_is_a_tag() {
        let rule = UnambiguousUsageRule::new();
        assert_eq!(kind_of(&rule, &stats(3, 0, 0)), Some(SymbolKind::Tag));
    }

    #[test]
    fn test_unambiguous_branch_usage_is_a_branch() {
        let rule = UnambiguousUsageRule::new();
        assert_eq!(kind_of(&rule, &stats(0, 2, 0)), Some(SymbolKind::Branch));
        // Commits alone are branch evidence even with no branch creation
        // on record.
        assert_eq!(kind_of(&rule, &stats(0, 0, 5)), Some(SymbolKind::Branch));
    }

    #[test]
    fn test_unambiguous_abstains_on_mixed_usage() {
        let rule = UnambiguousUsageRule::new();
        assert_eq!(kind_of(&rule, &stats(1, 1, 0)), None);
        assert_eq!(kind_of(&rule, &stats(2, 0, 1)), None);
    }

    #[test]
    fn test_unambiguous_abstains_on_no_usage() {
        let rule = UnambiguousUsageRule::new();
        assert_eq!(kind_of(&rule, &stats(0, 0, 0)), None);
    }

    #[test]
    fn test_branch_if_commits_requires_commits() {
        let rule = BranchIfCommitsRule::new();
        assert_eq!(kind_of(&rule, &stats(4, 1, 1)), Some(SymbolKind::Branch));
        assert_eq!(kind_of(&rule, &stats(4, 1, 0)), None);
    }

    #[test]
    fn test_heuristic_follows_the_majority() {
        let rule = HeuristicRule::new();
        assert_eq!(kind_of(&rule, &stats(5, 2, 0)), Some(SymbolKind::Tag));
        assert_eq!(kind_of(&rule, &stats(2, 5, 0)), Some(SymbolKind::Branch));
    }

    #[test]
    fn test_heuristic_ties_resolve_to_tag() {
        let rule = HeuristicRule::new();
        assert_eq!(kind_of(&rule, &stats(3, 3, 0)), Some(SymbolKind::Tag));
        assert_eq!(kind_of(&rule, &stats(0, 0, 0)), Some(SymbolKind::Tag));
    }

    #[test]
    fn test_heuristic_ignores_commit_counts() {
        let rule = HeuristicRule::new();
        assert_eq!(kind_of(&rule, &stats(1, 0, 9)), Some(SymbolKind::Tag));
    }

    #[test]
    fn test_catch_alls_never_abstain() {
        assert_eq!(
            kind_of(&AllBranchRule::new(), &stats(9, 0, 0)),
            Some(SymbolKind::Branch)
        );
        assert_eq!(
            kind_of(&AllTagRule::new(), &stats(0, 9, 9)),
            Some(SymbolKind::Tag)
        );
    }

    #[test]
    fn test_decisions_carry_the_symbol_identity() {
        let record = SymbolStats {
            symbol: Symbol::new(42, "v3-2"),
            tag_create_count: 1,
            branch_create_count: 0,
            branch_commit_count: 0,
        };
        let decision = UnambiguousUsageRule::new().classify(&record).unwrap();
        assert_eq!(decision.symbol.id, 42);
        assert_eq!(decision.symbol.name, "v3-2");
    }
}
