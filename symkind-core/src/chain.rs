//! The ordered rule chain that drives classification.

use std::fmt;

use crate::error::{Result, StrategyError};
use crate::rules::StrategyRule;
use crate::stats::SymbolStats;
use crate::symbol::Classification;

/// An ordered chain of strategy rules with first-match-wins semantics.
///
/// Rules are appended during setup and evaluated in exactly that order;
/// the first rule that returns a decision for a symbol ends that symbol's
/// evaluation. Order is the entire contract: a chain of `force-tag` then
/// `all-branch` and a chain of `all-branch` then `force-tag` disagree on
/// every symbol the pattern matches.
///
/// Evaluation borrows the chain immutably, so the rule list cannot change
/// while a pass is in progress.
#[derive(Default)]
pub struct RuleChain {
    rules: Vec<Box<dyn StrategyRule>>,
}

impl RuleChain {
    /// Creates an empty chain.
    pub fn new() -> Self {
        Self { rules: Vec::new() }
    }

    /// Appends a rule to the evaluation order.
    ///
    /// Nothing is deduplicated or validated here; a chain without a
    /// catch-all rule may leave symbols unresolved at evaluation time.
    pub fn add_rule(&mut self, rule: impl StrategyRule + 'static) {
        self.rules.push(Box::new(rule));
    }

    /// Appends a rule, builder-style.
    pub fn with_rule(mut self, rule: impl StrategyRule + 'static) -> Self {
        self.add_rule(rule);
        self
    }

    /// Number of rules in the chain.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Whether the chain holds no rules at all.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Rule names in evaluation order.
    pub fn rule_names(&self) -> Vec<&'static str> {
        self.rules.iter().map(|rule| rule.name()).collect()
    }

    /// Classifies a single symbol; the first non-abstaining rule wins.
    ///
    /// Returns `None` when every rule abstains. Rules after the deciding
    /// one are not consulted.
    pub fn classify(&self, stats: &SymbolStats) -> Option<Classification> {
        self.rules.iter().find_map(|rule| rule.classify(stats))
    }

    /// Classifies every record in `stats`, all or nothing.
    ///
    /// Records are evaluated independently, in order. If any record
    /// matches no rule the whole pass fails with
    /// [`StrategyError::UnresolvedSymbols`] listing every such record, so
    /// one run surfaces every ambiguity instead of one per attempt. On
    /// success the decisions come back in input order, one per record.
    pub fn classify_all(&self, stats: &[SymbolStats]) -> Result<Vec<Classification>> {
        let mut classified = Vec::with_capacity(stats.len());
        let mut unresolved = Vec::new();
        for record in stats {
            match self.classify(record) {
                Some(decision) => classified.push(decision),
                None => unresolved.push(record.clone()),
            }
        }
        if unresolved.is_empty() {
            Ok(classified)
        } else {
            Err(StrategyError::UnresolvedSymbols { unresolved })
        }
    }
}

impl fmt::Debug for RuleChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleChain")
            .field("rules", &self.rule_names())
            .finish()
    }
}
