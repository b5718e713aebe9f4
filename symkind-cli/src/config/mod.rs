//! Rule configuration module
//!
//! A conversion run's rules come from two places: an optional TOML rules
//! file and the command-line rule flags. Both funnel into [`RulesConfig`],
//! which is the single ordered description a chain is built from.

use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

use symkind_core::{
    AllBranchRule, AllTagRule, BranchIfCommitsRule, HeuristicRule, PatternRule, RuleChain,
    UnambiguousUsageRule,
};

/// What a pattern rule does to matching symbols
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RuleAction {
    /// Leave matching symbols out of the conversion
    Exclude,
    /// Convert matching symbols as branches
    ForceBranch,
    /// Convert matching symbols as tags
    ForceTag,
}

impl fmt::Display for RuleAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RuleAction::Exclude => "exclude",
            RuleAction::ForceBranch => "force-branch",
            RuleAction::ForceTag => "force-tag",
        };
        f.pad(label)
    }
}

/// Fallback applied after every pattern and usage rule has had its turn
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum SymbolDefault {
    /// Pick whichever usage was more common, tags winning ties
    Heuristic,
    /// No fallback; symbols the usage rules cannot decide fail the run
    Strict,
    /// Convert undecided symbols as branches
    Branch,
    /// Convert undecided symbols as tags
    Tag,
}

impl fmt::Display for SymbolDefault {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            SymbolDefault::Heuristic => "heuristic",
            SymbolDefault::Strict => "strict",
            SymbolDefault::Branch => "branch",
            SymbolDefault::Tag => "tag",
        };
        f.pad(label)
    }
}

/// One pattern entry in a rules file
#[derive(Debug, Clone, Deserialize)]
pub struct RuleEntry {
    /// What matching symbols become
    pub action: RuleAction,
    /// Regular expression matched against the full symbol name
    pub pattern: String,
}

/// Ordered rule configuration for one conversion run
///
/// The TOML form mirrors the fields:
///
/// ```toml
/// default = "heuristic"
/// branch-if-commits = true
///
/// [[rule]]
/// action = "exclude"
/// pattern = "unlabeled-.*"
///
/// [[rule]]
/// action = "force-tag"
/// pattern = "rel-.*"
/// ```
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RulesConfig {
    /// Pattern rules, applied in file order ahead of the usage rules
    #[serde(rename = "rule")]
    pub rules: Vec<RuleEntry>,

    /// Insert the branch-if-commits rule ahead of unambiguous-usage
    pub branch_if_commits: bool,

    /// Fallback for symbols no earlier rule decides
    pub default: Option<SymbolDefault>,
}

impl RulesConfig {
    /// Load a rules file from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read rules file: {}", path.display()))?;
        let config: Self = toml::from_str(&content)
            .with_context(|| format!("Failed to parse rules file: {}", path.display()))?;
        Ok(config)
    }

    /// Append a pattern rule after any existing entries.
    pub fn push_rule(&mut self, action: RuleAction, pattern: &str) {
        self.rules.push(RuleEntry {
            action,
            pattern: pattern.to_string(),
        });
    }

    /// The fallback mode in effect, heuristic unless set otherwise.
    pub fn effective_default(&self) -> SymbolDefault {
        self.default.unwrap_or(SymbolDefault::Heuristic)
    }

    /// Build the rule chain this configuration describes.
    ///
    /// Pattern entries come first, in order, then branch-if-commits when
    /// enabled, then unambiguous-usage, then the fallback. The `strict`
    /// fallback appends nothing, so symbols the usage rules cannot decide
    /// fail the evaluation.
    pub fn build_chain(&self) -> Result<RuleChain> {
        let mut chain = RuleChain::new();
        for entry in &self.rules {
            let rule = match entry.action {
                RuleAction::Exclude => PatternRule::exclude(&entry.pattern),
                RuleAction::ForceBranch => PatternRule::force_branch(&entry.pattern),
                RuleAction::ForceTag => PatternRule::force_tag(&entry.pattern),
            }
            .with_context(|| format!("Invalid {} pattern", entry.action))?;
            chain.add_rule(rule);
        }
        if self.branch_if_commits {
            chain.add_rule(BranchIfCommitsRule::new());
        }
        chain.add_rule(UnambiguousUsageRule::new());
        match self.effective_default() {
            SymbolDefault::Heuristic => chain.add_rule(HeuristicRule::new()),
            SymbolDefault::Branch => chain.add_rule(AllBranchRule::new()),
            SymbolDefault::Tag => chain.add_rule(AllTagRule::new()),
            SymbolDefault::Strict => {}
        }
        Ok(chain)
    }
}
