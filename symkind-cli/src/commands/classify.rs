//! Classify command implementation

use anyhow::{bail, Context, Result};
use clap::Args;
use std::fs::File;
use std::io;
use std::path::PathBuf;

use symkind_core::{StrategyError, SymbolStats};

use crate::commands::RuleFlags;
use crate::input;
use crate::output::{self, OutputFormat};

/// Arguments for the classify command
///
/// Rules are tried in a fixed order: rules-file entries first, then the
/// --exclude, --force-branch, and --force-tag patterns, then
/// branch-if-commits when enabled, then unambiguous usage, then the
/// --symbol-default fallback. The first rule that decides a symbol wins.
#[derive(Debug, Args)]
pub struct ClassifyArgs {
    /// Statistics file produced by the collector ('-' for stdin)
    #[arg(short, long, value_name = "FILE")]
    pub input: String,

    /// Rule selection
    #[command(flatten)]
    pub rules: RuleFlags,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: OutputFormat,

    /// Output file (default: stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Suppress log output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl ClassifyArgs {
    /// Execute the classify command
    pub fn execute(&self) -> Result<()> {
        self.init_logging()?;

        // Pattern problems are configuration errors; surface them before
        // touching the statistics.
        let chain = self.rules.to_config()?.build_chain()?;
        log::debug!("Evaluation order: {:?}", chain.rule_names());

        let stats = input::read_stats(&self.input)?;
        log::info!("Loaded {} symbol statistics records", stats.len());

        let decisions = match chain.classify_all(&stats) {
            Ok(decisions) => decisions,
            Err(StrategyError::UnresolvedSymbols { unresolved }) => {
                eprint!("{}", unresolved_report(&unresolved));
                bail!(
                    "{} of {} symbols could not be classified",
                    unresolved.len(),
                    stats.len()
                );
            }
            Err(other) => return Err(other.into()),
        };
        log::info!("Classified {} symbols", decisions.len());

        match &self.output {
            Some(path) => {
                let file = File::create(path).with_context(|| {
                    format!("Failed to create output file: {}", path.display())
                })?;
                output::write_all(file, self.format, &decisions)
            }
            None => output::write_all(io::stdout(), self.format, &decisions),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) -> Result<()> {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level))
                .init();
        }

        Ok(())
    }
}

/// Operator-facing report listing every symbol the chain left undecided.
fn unresolved_report(unresolved: &[SymbolStats]) -> String {
    let mut report =
        String::from("It is not clear how the following symbols should be converted:\n");
    for record in unresolved {
        report.push_str(&format!("    {record}\n"));
    }
    report.push_str(
        "Use --force-tag, --force-branch, --exclude, and/or --symbol-default to resolve the ambiguity.\n",
    );
    report
}
