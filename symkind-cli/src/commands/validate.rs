//! Validate command implementation

use anyhow::Result;
use clap::Args;

use crate::commands::RuleFlags;
use crate::config::SymbolDefault;

/// Arguments for the validate command
///
/// Compiles every pattern and prints the chain a classify run with the
/// same flags would evaluate, without reading any statistics.
#[derive(Debug, Args)]
pub struct ValidateArgs {
    /// Rule selection to check
    #[command(flatten)]
    pub rules: RuleFlags,
}

impl ValidateArgs {
    /// Execute the validate command
    pub fn execute(&self) -> Result<()> {
        let outcome = self.rules.to_config().and_then(|config| {
            let chain = config.build_chain()?;
            Ok((config, chain))
        });

        match outcome {
            Ok((config, chain)) => {
                println!("✓ Rule configuration is valid");
                println!();
                println!("Evaluation order:");
                for (index, name) in chain.rule_names().iter().enumerate() {
                    // Pattern entries occupy the leading chain positions,
                    // in configuration order.
                    match config.rules.get(index) {
                        Some(entry) => {
                            println!("  {}. {} '{}'", index + 1, name, entry.pattern)
                        }
                        None => println!("  {}. {}", index + 1, name),
                    }
                }
                println!();
                println!("Default: {}", config.effective_default());
                if config.effective_default() == SymbolDefault::Strict {
                    println!("Symbols left undecided will fail the classify run");
                }
                Ok(())
            }
            Err(e) => {
                println!("✗ Rule configuration is invalid");
                println!("Error: {e:#}");
                Err(anyhow::anyhow!("Validation failed"))
            }
        }
    }
}
