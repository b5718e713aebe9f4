//! CLI command implementations

use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::PathBuf;

use crate::config::{RuleAction, RulesConfig, SymbolDefault};

pub mod classify;
pub mod info;
pub mod validate;

/// Available CLI commands
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Classify symbols from a collector statistics file
    Classify(classify::ClassifyArgs),

    /// Check rule flags and rules files without classifying anything
    Validate(validate::ValidateArgs),

    /// Summarize a collector statistics file
    Info(info::InfoArgs),
}

impl Commands {
    /// Execute the selected command
    pub fn execute(&self) -> Result<()> {
        match self {
            Commands::Classify(args) => args.execute(),
            Commands::Validate(args) => args.execute(),
            Commands::Info(args) => args.execute(),
        }
    }
}

/// Rule-selection flags shared by classify and validate
#[derive(Debug, Args, Default)]
pub struct RuleFlags {
    /// Rules file applied ahead of any rule flags
    #[arg(short, long, value_name = "FILE")]
    pub rules: Option<PathBuf>,

    /// Exclude symbols whose full name matches PATTERN
    #[arg(long, value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Convert symbols whose full name matches PATTERN as branches
    #[arg(long, value_name = "PATTERN")]
    pub force_branch: Vec<String>,

    /// Convert symbols whose full name matches PATTERN as tags
    #[arg(long, value_name = "PATTERN")]
    pub force_tag: Vec<String>,

    /// Convert any symbol with branch commits as a branch
    #[arg(long)]
    pub branch_if_commits: bool,

    /// Fallback for symbols no earlier rule decides [default: heuristic]
    #[arg(long, value_enum, value_name = "MODE", env = "SYMKIND_SYMBOL_DEFAULT")]
    pub symbol_default: Option<SymbolDefault>,
}

impl RuleFlags {
    /// Resolve the rules file and flags into one ordered configuration.
    ///
    /// File entries keep their file order and come first. Flag patterns
    /// are appended after them, grouped as exclude, force-branch, then
    /// force-tag; a rules file is the way to interleave actions more
    /// finely. `--symbol-default` overrides the file's fallback.
    pub fn to_config(&self) -> Result<RulesConfig> {
        let mut config = match &self.rules {
            Some(path) => RulesConfig::load(path)?,
            None => RulesConfig::default(),
        };
        for pattern in &self.exclude {
            config.push_rule(RuleAction::Exclude, pattern);
        }
        for pattern in &self.force_branch {
            config.push_rule(RuleAction::ForceBranch, pattern);
        }
        for pattern in &self.force_tag {
            config.push_rule(RuleAction::ForceTag, pattern);
        }
        if self.branch_if_commits {
            config.branch_if_commits = true;
        }
        if self.symbol_default.is_some() {
            config.default = self.symbol_default;
        }
        Ok(config)
    }
}
