//! Rule-based classification of version-control symbols.
//!
//! When a repository's history is converted from one version-control
//! system to another, every symbol observed in the source (a candidate
//! branch or tag name) must be given a disposition in the target: convert
//! it as a branch, convert it as a tag, or exclude it from the conversion.
//! This crate implements that decision step as an ordered chain of
//! independent strategy rules with first-match-wins semantics.
//!
//! # Architecture
//!
//! - [`SymbolStats`] carries the per-symbol usage counters produced by an
//!   upstream statistics pass over the source history.
//! - A [`StrategyRule`] inspects one symbol's statistics and either
//!   produces a [`Classification`] or abstains.
//! - A [`RuleChain`] tries its rules in append order, takes the first
//!   decision, and reports every symbol no rule covered in one aggregated
//!   [`StrategyError::UnresolvedSymbols`] so all ambiguities surface in a
//!   single run.
//!
//! # Example
//!
//! ```
//! use symkind_core::{
//!     HeuristicRule, PatternRule, RuleChain, Symbol, SymbolKind, SymbolStats,
//!     UnambiguousUsageRule,
//! };
//!
//! let chain = RuleChain::new()
//!     .with_rule(PatternRule::force_tag(r"rel-.*")?)
//!     .with_rule(UnambiguousUsageRule::new())
//!     .with_rule(HeuristicRule::new());
//!
//! // Branch-heavy usage, but the forced pattern is consulted first.
//! let stats = vec![SymbolStats {
//!     symbol: Symbol::new(1, "rel-1.0"),
//!     tag_create_count: 0,
//!     branch_create_count: 2,
//!     branch_commit_count: 5,
//! }];
//!
//! let decisions = chain.classify_all(&stats)?;
//! assert_eq!(decisions[0].kind, SymbolKind::Tag);
//! # Ok::<(), symkind_core::StrategyError>(())
//! ```

#![warn(missing_docs)]

pub mod chain;
pub mod error;
pub mod rules;
pub mod stats;
pub mod symbol;

pub use chain::RuleChain;
pub use error::{Result, StrategyError};
pub use rules::{
    AllBranchRule, AllTagRule, BranchIfCommitsRule, HeuristicRule, PatternRule, StrategyRule,
    UnambiguousUsageRule,
};
pub use stats::SymbolStats;
pub use symbol::{Classification, Symbol, SymbolKind};
