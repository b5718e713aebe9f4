//! Strategy rules: independent, ordered decision units.
//!
//! Each rule inspects one symbol's statistics and either produces a
//! [`Classification`] or abstains by returning `None`. Abstention is an
//! ordinary outcome, distinct from excluding a symbol, and rules never
//! fail at evaluation time. Rules are combined by a
//! [`RuleChain`](crate::RuleChain), which tries them in order and takes
//! the first decision.

mod pattern;
mod usage;

pub use pattern::PatternRule;
pub use usage::{
    AllBranchRule, AllTagRule, BranchIfCommitsRule, HeuristicRule, UnambiguousUsageRule,
};

use crate::stats::SymbolStats;
use crate::symbol::Classification;

/// A single rule that may decide how a symbol is converted.
///
/// Implementations hold configuration only: any setup that can fail, such
/// as pattern compilation, happens at construction, and evaluation is a
/// pure function of the statistics. The `Send + Sync` bound keeps chains
/// usable from worker threads.
pub trait StrategyRule: Send + Sync {
    /// Classifies the symbol described by `stats`, or returns `None` when
    /// this rule does not apply to it.
    fn classify(&self, stats: &SymbolStats) -> Option<Classification>;

    /// Short rule name, used when printing a chain's evaluation order.
    fn name(&self) -> &'static str;
}
